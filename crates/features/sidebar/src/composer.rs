use crate::slot::{ActionSlot, BuiltinAction, SlotAction};
use pagebar_domain::features::FeatureToggleSet;
use pagebar_kernel::i18n::Translator;
use tracing::trace;

/// Builds the ordered slot list for the action area.
///
/// Enabled built-ins come first in fixed priority order (undo/redo, zoom, edit,
/// insert, layout, resize, preview), each carrying labels resolved through
/// `translator`. Custom actions follow in the order supplied; entries that
/// convert to `None` are skipped. Every slot is keyed by its final index.
///
/// The function is pure: identical arguments always produce identical output.
///
/// # Example
/// ```rust
/// use pagebar_domain::config::CustomAction;
/// use pagebar_domain::features::{Feature, FeatureToggleSet};
/// use pagebar_kernel::i18n::NoTranslation;
/// use pagebar_sidebar::compose;
///
/// let toggles = FeatureToggleSet::EDIT | FeatureToggleSet::PREVIEW;
/// let slots = compose::<CustomAction, _, _>(
///     toggles,
///     Some([CustomAction::new("save", "Save")]),
///     &NoTranslation,
/// );
///
/// assert_eq!(slots.len(), 3);
/// assert_eq!(slots[0].feature(), Some(Feature::Edit));
/// assert_eq!(slots[2].custom().map(|action| action.id.as_str()), Some("save"));
/// ```
pub fn compose<C, I, T>(
    toggles: FeatureToggleSet,
    custom_actions: Option<I>,
    translator: &T,
) -> Vec<ActionSlot<C>>
where
    I: IntoIterator,
    I::Item: Into<Option<C>>,
    T: Translator + ?Sized,
{
    let builtins = toggles
        .features()
        .map(|feature| SlotAction::Builtin(BuiltinAction::resolve(feature, translator)));

    let customs = custom_actions
        .into_iter()
        .flatten()
        .filter_map(Into::<Option<C>>::into)
        .map(SlotAction::Custom);

    let slots: Vec<ActionSlot<C>> = builtins
        .chain(customs)
        .enumerate()
        .map(|(key, action)| ActionSlot { key, action })
        .collect();

    trace!(
        builtins = toggles.features().count(),
        total = slots.len(),
        "Composed sidebar action slots"
    );

    slots
}
