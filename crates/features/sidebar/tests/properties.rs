use pagebar_domain::features::{Feature, FeatureToggleSet};
use pagebar_domain::position::{Edge, PositionStyle};
use pagebar_domain::sticky::StickyDescriptor;
use pagebar_kernel::i18n::NoTranslation;
use pagebar_sidebar::{compose, resolve_position, ActionSlot};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn shuffled_toggles() -> impl Strategy<Value = Vec<(Feature, bool)>> {
    proptest::collection::vec(any::<bool>(), 7)
        .prop_map(|flags| Feature::iter().zip(flags).collect::<Vec<_>>())
        .prop_shuffle()
}

fn custom_ids() -> impl Strategy<Value = Vec<Option<String>>> {
    proptest::collection::vec(proptest::option::of("[a-z]{1,8}"), 0..6)
}

fn builtin_features(slots: &[ActionSlot<String>]) -> Vec<Feature> {
    slots.iter().filter_map(ActionSlot::feature).collect()
}

proptest! {
    #[test]
    fn builtins_match_enabled_toggles_in_priority_order(pairs in shuffled_toggles()) {
        let names = pairs.iter().map(|(feature, enabled)| (feature.option_key(), *enabled));
        let toggles = FeatureToggleSet::from_toggles(names);

        let slots = compose::<String, Vec<String>, _>(toggles, None, &NoTranslation);

        let mut expected: Vec<Feature> =
            pairs.iter().filter(|(_, enabled)| *enabled).map(|(feature, _)| *feature).collect();
        expected.sort();
        prop_assert_eq!(builtin_features(&slots), expected);
    }

    #[test]
    fn customs_keep_their_order_after_builtins(bits in any::<u8>(), ids in custom_ids()) {
        let toggles = FeatureToggleSet::from_bits_truncate(bits);
        let slots = compose::<String, _, _>(toggles, Some(ids.clone()), &NoTranslation);

        let builtin_count = toggles.features().count();
        prop_assert!(slots[..builtin_count].iter().all(|slot| slot.builtin().is_some()));

        let customs: Vec<String> =
            slots[builtin_count..].iter().filter_map(|slot| slot.custom().cloned()).collect();
        let expected: Vec<String> = ids.into_iter().flatten().collect();
        prop_assert_eq!(slots.len(), builtin_count + expected.len());
        prop_assert_eq!(customs, expected);
    }

    #[test]
    fn composing_twice_is_identical(bits in any::<u8>(), ids in custom_ids()) {
        let toggles = FeatureToggleSet::from_bits_truncate(bits);
        let first = compose::<String, _, _>(toggles, Some(ids.clone()), &NoTranslation);
        let second = compose::<String, _, _>(toggles, Some(ids), &NoTranslation);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn keys_equal_final_positions(bits in any::<u8>(), ids in custom_ids()) {
        let slots = compose::<String, _, _>(FeatureToggleSet::from_bits_truncate(bits), Some(ids), &NoTranslation);
        for (index, slot) in slots.iter().enumerate() {
            prop_assert_eq!(slot.key(), index);
        }
    }

    #[test]
    fn resolver_pins_exactly_the_requested_edges(
        top in any::<bool>(),
        bottom in any::<bool>(),
        right_offset in -500.0f64..500.0,
        right_offset_fixed in -500.0f64..500.0,
    ) {
        let descriptor = StickyDescriptor {
            should_stick_to_top: top,
            should_stick_to_bottom: bottom,
            right_offset,
            right_offset_fixed,
        };

        let expected = if top || bottom {
            PositionStyle::Absolute { top: Edge::pinned_if(top), bottom: Edge::pinned_if(bottom) }
        } else {
            PositionStyle::Fixed
        };
        prop_assert_eq!(resolve_position(Some(descriptor)), expected);
    }
}
