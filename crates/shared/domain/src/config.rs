use crate::features::{Feature, FeatureToggleSet};
use crate::sticky::StickyDescriptor;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Editor options that drive the sidebar, keyed the way page editors expose them.
///
/// Every toggle defaults to `false`; a missing key never enables a feature.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    pub undo_redo_enabled: bool,
    pub zoom_enabled: bool,
    pub edit_enabled: bool,
    pub insert_enabled: bool,
    pub layout_enabled: bool,
    pub resize_enabled: bool,
    pub preview_enabled: bool,
    /// Host-defined actions appended after the built-ins, in this order.
    pub custom_options: Option<Vec<CustomAction>>,
}

impl EditorOptions {
    /// Options with every built-in feature switched on and no custom actions.
    #[must_use]
    pub fn all_enabled() -> Self {
        Self::default().with_toggles(FeatureToggleSet::ALL)
    }

    #[must_use]
    pub const fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::UndoRedo => self.undo_redo_enabled,
            Feature::Zoom => self.zoom_enabled,
            Feature::Edit => self.edit_enabled,
            Feature::Insert => self.insert_enabled,
            Feature::Layout => self.layout_enabled,
            Feature::Resize => self.resize_enabled,
            Feature::Preview => self.preview_enabled,
        }
    }

    /// Collapses the individual option flags into a [`FeatureToggleSet`].
    #[must_use]
    pub fn toggles(&self) -> FeatureToggleSet {
        FeatureToggleSet::from_toggles(
            Feature::iter().map(|feature| (feature.name(), self.is_enabled(feature))),
        )
    }

    /// Overwrites every option flag from `toggles`.
    #[must_use]
    pub const fn with_toggles(mut self, toggles: FeatureToggleSet) -> Self {
        self.undo_redo_enabled = toggles.is_enabled(Feature::UndoRedo);
        self.zoom_enabled = toggles.is_enabled(Feature::Zoom);
        self.edit_enabled = toggles.is_enabled(Feature::Edit);
        self.insert_enabled = toggles.is_enabled(Feature::Insert);
        self.layout_enabled = toggles.is_enabled(Feature::Layout);
        self.resize_enabled = toggles.is_enabled(Feature::Resize);
        self.preview_enabled = toggles.is_enabled(Feature::Preview);
        self
    }

    #[must_use]
    pub fn with_custom_options(mut self, actions: impl IntoIterator<Item = CustomAction>) -> Self {
        self.custom_options = Some(actions.into_iter().collect());
        self
    }
}

/// A host-supplied toolbar action. The sidebar positions it but never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAction {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl CustomAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), icon: None }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Everything a host loads from configuration to mount a sidebar.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SidebarConfigInner {
    pub editor: EditorOptions,
    /// Initial sticky state until the host measures the page.
    pub sticky: Option<StickyDescriptor>,
}

/// Thin Arc-wrapped config for inexpensive cloning into render props.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SidebarConfig {
    #[serde(flatten, default)]
    inner: Arc<SidebarConfigInner>,
}

impl SidebarConfig {
    #[must_use]
    pub fn new(editor: EditorOptions, sticky: Option<StickyDescriptor>) -> Self {
        Self { inner: Arc::new(SidebarConfigInner { editor, sticky }) }
    }
}

impl Deref for SidebarConfig {
    type Target = SidebarConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SidebarConfig {
    fn deref_mut(&mut self) -> &mut SidebarConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}
