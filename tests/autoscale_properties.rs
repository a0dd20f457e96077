//! Property tests for dynamic panel ceilings.

use choice_explorer::domain::controls::{Key, PointerKind};
use choice_explorer::domain::panel::{
    compute_next_max_value, AutoScalingInputPanel, PanelInteraction, PanelParams,
};
use proptest::prelude::*;

fn is_power_of_ten_multiple(ceiling: f64, base: f64) -> bool {
    let k = (ceiling / base).log10().round();
    k >= 0.0 && ceiling == base * 10f64.powi(k as i32)
}

fn interaction() -> impl Strategy<Value = PanelInteraction> {
    prop_oneof![
        Just(PanelInteraction::Press {
            pointer: PointerKind::Mouse
        }),
        Just(PanelInteraction::Press {
            pointer: PointerKind::Touch
        }),
        (0.0..1e18f64).prop_map(|value| PanelInteraction::Seek { value }),
        Just(PanelInteraction::Release),
        prop_oneof![
            Just(Key::ArrowLeft),
            Just(Key::ArrowRight),
            Just(Key::Home),
            Just(Key::End),
            Just(Key::Other),
        ]
        .prop_map(|key| PanelInteraction::KeyDown { key }),
        Just(PanelInteraction::KeyUp),
        (0.0..1e18f64).prop_map(|v| PanelInteraction::FieldInput {
            text: v.to_string()
        }),
        "-?[0-9]{0,6}(\\.[0-9]{0,3})?|[a-z]{1,3}".prop_map(|text| PanelInteraction::FieldInput { text }),
        Just(PanelInteraction::FieldBlur),
    ]
}

proptest! {
    #[test]
    fn next_max_is_smallest_power_of_ten_multiple_above_value(value in 0.0..1e18f64) {
        let base = 100.0;
        let ceiling = compute_next_max_value(value, base);

        prop_assert!(is_power_of_ten_multiple(ceiling, base), "{} is not base*10^k", ceiling);
        prop_assert!(ceiling > value, "{} <= {}", ceiling, value);
        prop_assert!(ceiling == base || ceiling / 10.0 <= value + 1.0);
    }

    #[test]
    fn next_max_exceeds_values_beyond_integer_precision(
        value in prop_oneof![
            ((1u64 << 53)..(1u64 << 62)).prop_map(|n| n as f64),
            (15i32..19).prop_map(|k| 10f64.powi(k)),
        ]
    ) {
        let ceiling = compute_next_max_value(value, 100.0);
        prop_assert!(ceiling > value, "{} <= {}", ceiling, value);
        prop_assert!(is_power_of_ten_multiple(ceiling, 100.0));
    }

    #[test]
    fn typed_large_values_keep_ceiling_above_value(k in 15i32..19) {
        let mut panel = AutoScalingInputPanel::new(PanelParams::new(0.0, None));
        let text = format!("1{}", "0".repeat(k as usize));
        panel.interact(PanelInteraction::FieldInput { text });

        let state = panel.state();
        prop_assert_eq!(state.current_value, 10f64.powi(k));
        prop_assert!(state.effective_max_value > state.current_value);
    }

    #[test]
    fn next_max_is_stable_for_the_same_value(value in 0.0..1e18f64, base in 1.0..1000.0f64) {
        let first = compute_next_max_value(value, base);
        let second = compute_next_max_value(value, base);
        prop_assert_eq!(first, second);
        prop_assert!(first >= base);
    }

    #[test]
    fn dynamic_ceiling_invariants_hold_after_any_interaction(
        steps in prop::collection::vec(interaction(), 1..60)
    ) {
        let mut panel = AutoScalingInputPanel::new(PanelParams::new(0.0, None));

        for step in steps {
            panel.interact(step);
            let state = panel.state();

            prop_assert!(!state.is_fixed_max);
            prop_assert!(is_power_of_ten_multiple(state.effective_max_value, panel.base()));
            prop_assert!(
                state.effective_max_value > state.current_value,
                "ceiling {} not above value {}",
                state.effective_max_value,
                state.current_value
            );
            prop_assert!(state.min_value <= state.current_value);
        }
    }

    #[test]
    fn fixed_max_never_changes(
        max in 1.0..10_000.0f64,
        steps in prop::collection::vec(interaction(), 1..40)
    ) {
        let mut panel = AutoScalingInputPanel::new(PanelParams::new(0.0, Some(max)));

        for step in steps {
            panel.interact(step);
            let state = panel.state();
            prop_assert_eq!(state.effective_max_value, max);
            prop_assert!(state.current_value >= 0.0 && state.current_value <= max);
        }
    }
}
