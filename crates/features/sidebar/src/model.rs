use crate::composer::compose;
use crate::position::resolve_position;
use crate::slot::ActionSlot;
use pagebar_domain::config::{CustomAction, EditorOptions, SidebarConfig};
use pagebar_domain::features::FeatureToggleSet;
use pagebar_domain::position::PositionStyle;
use pagebar_domain::sticky::StickyDescriptor;
use pagebar_kernel::i18n::Translator;

/// Everything one render of the sidebar needs, derived from per-render inputs.
///
/// Nothing here is cached between renders; build a new model whenever the
/// options, the sticky state or the active catalog change.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarModel<C = CustomAction> {
    slots: Vec<ActionSlot<C>>,
    position: PositionStyle,
}

impl<C> SidebarModel<C> {
    pub fn new<I, T>(
        toggles: FeatureToggleSet,
        custom_actions: Option<I>,
        sticky: Option<StickyDescriptor>,
        translator: &T,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<C>>,
        T: Translator + ?Sized,
    {
        Self { slots: compose(toggles, custom_actions, translator), position: resolve_position(sticky) }
    }

    #[must_use]
    pub fn slots(&self) -> &[ActionSlot<C>] {
        &self.slots
    }

    #[must_use]
    pub const fn position(&self) -> PositionStyle {
        self.position
    }

    /// Inline CSS for the container.
    #[must_use]
    pub fn style(&self) -> String {
        self.position.to_css()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SidebarModel<CustomAction> {
    pub fn from_options<T>(
        options: &EditorOptions,
        sticky: Option<StickyDescriptor>,
        translator: &T,
    ) -> Self
    where
        T: Translator + ?Sized,
    {
        let customs = options.custom_options.as_deref().map(|actions| actions.iter().cloned());
        Self::new(options.toggles(), customs, sticky, translator)
    }

    /// Builds from loaded configuration. A measured `sticky` state overrides the configured one.
    pub fn from_config<T>(
        config: &SidebarConfig,
        sticky: Option<StickyDescriptor>,
        translator: &T,
    ) -> Self
    where
        T: Translator + ?Sized,
    {
        Self::from_options(&config.editor, sticky.or(config.sticky), translator)
    }
}
