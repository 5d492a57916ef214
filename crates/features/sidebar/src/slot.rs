use pagebar_domain::config::CustomAction;
use pagebar_domain::constants::{
    LABEL_EDIT, LABEL_INSERT, LABEL_LAYOUT, LABEL_PREVIEW, LABEL_REDO, LABEL_RESIZE, LABEL_UNDO,
    LABEL_ZOOM_IN, LABEL_ZOOM_OUT,
};
use pagebar_domain::features::Feature;
use pagebar_kernel::i18n::Translator;
use serde::{Deserialize, Serialize};

/// What a toolbar button asks the host to do. The sidebar only forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", content = "id", rename_all = "camelCase")]
pub enum SidebarCommand {
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
    ToggleEdit,
    ToggleInsert,
    ToggleLayout,
    ToggleResize,
    TogglePreview,
    /// A host-defined action, identified by its id.
    Custom(String),
}

/// A built-in feature's renderable, carrying its already-resolved labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinAction {
    UndoRedo { label_undo: String, label_redo: String },
    Zoom { label_zoom_in: String, label_zoom_out: String },
    Edit { label: String },
    Insert { label: String },
    Layout { label: String },
    Resize { label: String },
    Preview { label: String },
}

impl BuiltinAction {
    /// Builds the action for `feature`, translating its label keys.
    pub fn resolve<T>(feature: Feature, translator: &T) -> Self
    where
        T: Translator + ?Sized,
    {
        match feature {
            Feature::UndoRedo => Self::UndoRedo {
                label_undo: translator.label(LABEL_UNDO),
                label_redo: translator.label(LABEL_REDO),
            },
            Feature::Zoom => Self::Zoom {
                label_zoom_in: translator.label(LABEL_ZOOM_IN),
                label_zoom_out: translator.label(LABEL_ZOOM_OUT),
            },
            Feature::Edit => Self::Edit { label: translator.label(LABEL_EDIT) },
            Feature::Insert => Self::Insert { label: translator.label(LABEL_INSERT) },
            Feature::Layout => Self::Layout { label: translator.label(LABEL_LAYOUT) },
            Feature::Resize => Self::Resize { label: translator.label(LABEL_RESIZE) },
            Feature::Preview => Self::Preview { label: translator.label(LABEL_PREVIEW) },
        }
    }

    #[must_use]
    pub const fn feature(&self) -> Feature {
        match self {
            Self::UndoRedo { .. } => Feature::UndoRedo,
            Self::Zoom { .. } => Feature::Zoom,
            Self::Edit { .. } => Feature::Edit,
            Self::Insert { .. } => Feature::Insert,
            Self::Layout { .. } => Feature::Layout,
            Self::Resize { .. } => Feature::Resize,
            Self::Preview { .. } => Feature::Preview,
        }
    }

    /// Resolved labels in button order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::UndoRedo { label_undo, label_redo } => vec![label_undo, label_redo],
            Self::Zoom { label_zoom_in, label_zoom_out } => vec![label_zoom_in, label_zoom_out],
            Self::Edit { label }
            | Self::Insert { label }
            | Self::Layout { label }
            | Self::Resize { label }
            | Self::Preview { label } => vec![label],
        }
        .into_iter()
        .map(String::as_str)
        .collect()
    }

    /// One button per label, paired with the command it emits.
    #[must_use]
    pub fn buttons(&self) -> Vec<SlotButton> {
        let commands = match self {
            Self::UndoRedo { .. } => {
                vec![(SidebarCommand::Undo, "↶"), (SidebarCommand::Redo, "↷")]
            }
            Self::Zoom { .. } => vec![(SidebarCommand::ZoomIn, "＋"), (SidebarCommand::ZoomOut, "－")],
            Self::Edit { .. } => vec![(SidebarCommand::ToggleEdit, "✎")],
            Self::Insert { .. } => vec![(SidebarCommand::ToggleInsert, "⊕")],
            Self::Layout { .. } => vec![(SidebarCommand::ToggleLayout, "⇅")],
            Self::Resize { .. } => vec![(SidebarCommand::ToggleResize, "⤢")],
            Self::Preview { .. } => vec![(SidebarCommand::TogglePreview, "◉")],
        };

        self.labels()
            .into_iter()
            .zip(commands)
            .map(|(label, (command, icon))| SlotButton {
                label: label.to_owned(),
                icon: Some(icon.to_owned()),
                command,
            })
            .collect()
    }
}

/// The content of one slot: a built-in feature or an opaque host action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotAction<C> {
    Builtin(BuiltinAction),
    Custom(C),
}

/// One positioned entry of the action area.
///
/// `key` is the slot's index in the final order and stays stable for identical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionSlot<C> {
    pub(crate) key: usize,
    pub(crate) action: SlotAction<C>,
}

impl<C> ActionSlot<C> {
    #[must_use]
    pub const fn key(&self) -> usize {
        self.key
    }

    #[must_use]
    pub const fn action(&self) -> &SlotAction<C> {
        &self.action
    }

    #[must_use]
    pub const fn builtin(&self) -> Option<&BuiltinAction> {
        match &self.action {
            SlotAction::Builtin(action) => Some(action),
            SlotAction::Custom(_) => None,
        }
    }

    #[must_use]
    pub const fn custom(&self) -> Option<&C> {
        match &self.action {
            SlotAction::Custom(action) => Some(action),
            SlotAction::Builtin(_) => None,
        }
    }

    /// The built-in feature behind this slot, `None` for custom slots.
    #[must_use]
    pub fn feature(&self) -> Option<Feature> {
        self.builtin().map(BuiltinAction::feature)
    }
}

impl ActionSlot<CustomAction> {
    /// The buttons this slot renders. A custom action maps to one button emitting its id.
    #[must_use]
    pub fn buttons(&self) -> Vec<SlotButton> {
        match &self.action {
            SlotAction::Builtin(action) => action.buttons(),
            SlotAction::Custom(action) => vec![SlotButton {
                label: action.label.clone(),
                icon: action.icon.clone(),
                command: SidebarCommand::Custom(action.id.clone()),
            }],
        }
    }
}

/// A single clickable control derived from a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotButton {
    pub label: String,
    pub icon: Option<String>,
    pub command: SidebarCommand,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebar_kernel::i18n::{Catalog, NoTranslation};

    #[test]
    fn undo_redo_renders_two_buttons() {
        let catalog = Catalog::from_pairs([("undo", "Undo"), ("redo", "Redo")]);
        let buttons = BuiltinAction::resolve(Feature::UndoRedo, &catalog).buttons();

        let commands: Vec<_> = buttons.iter().map(|button| button.command.clone()).collect();
        assert_eq!(commands, vec![SidebarCommand::Undo, SidebarCommand::Redo]);
        assert_eq!(buttons[1].label, "Redo");
    }

    #[test]
    fn every_feature_has_one_button_per_label_key() {
        for feature in <Feature as strum::IntoEnumIterator>::iter() {
            let action = BuiltinAction::resolve(feature, &NoTranslation);
            assert_eq!(action.feature(), feature);
            assert_eq!(action.buttons().len(), feature.label_keys().len());
            assert!(action.labels().iter().all(|label| label.is_empty()));
        }
    }

    #[test]
    fn custom_slots_emit_their_id() {
        let slot = ActionSlot {
            key: 3,
            action: SlotAction::Custom(CustomAction::new("publish", "Publish").with_icon("⇪")),
        };

        assert_eq!(slot.feature(), None);
        assert_eq!(
            slot.buttons(),
            vec![SlotButton {
                label: "Publish".to_owned(),
                icon: Some("⇪".to_owned()),
                command: SidebarCommand::Custom("publish".to_owned()),
            }]
        );
    }

    #[test]
    fn commands_serialize_with_a_tag() {
        let json = serde_json::to_string(&SidebarCommand::Custom("save".to_owned())).unwrap();
        assert_eq!(json, r#"{"command":"custom","id":"save"}"#);

        let zoom: SidebarCommand = serde_json::from_str(r#"{"command":"zoomIn"}"#).unwrap();
        assert_eq!(zoom, SidebarCommand::ZoomIn);
    }
}
