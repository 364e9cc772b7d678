use proptest::prelude::*;
use sample_context::{transition, Action, Color, State};

fn arb_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn arb_state() -> impl Strategy<Value = State> {
    (any::<i64>(), ".{0,16}", arb_color(), any::<bool>()).prop_map(
        |(count, text, color, is_good)| State {
            count,
            text,
            color,
            is_good,
        },
    )
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        any::<i64>().prop_map(|count| Action::SetCount { count }),
        ".{0,16}".prop_map(|text| Action::SetText { text }),
        arb_color().prop_map(|color| Action::SetColor { color }),
        Just(Action::ToggleGood),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Only the field addressed by the action may differ.
    #[test]
    fn transition_changes_only_the_addressed_field(state in arb_state(), action in arb_action()) {
        let next = transition(&state, action.clone());

        let expected = match action {
            Action::SetCount { count } => State { count, ..state.clone() },
            Action::SetText { text } => State { text, ..state.clone() },
            Action::SetColor { color } => State { color, ..state.clone() },
            Action::ToggleGood => State { is_good: !state.is_good, ..state.clone() },
        };
        prop_assert_eq!(next, expected);
    }

    #[test]
    fn transition_is_deterministic(state in arb_state(), action in arb_action()) {
        let first = transition(&state, action.clone());
        let second = transition(&state, action);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn toggling_good_twice_restores_the_state(state in arb_state()) {
        let toggled = transition(&state, Action::ToggleGood);
        prop_assert_ne!(toggled.is_good, state.is_good);

        let restored = transition(&toggled, Action::ToggleGood);
        prop_assert_eq!(restored, state);
    }

    #[test]
    fn setting_the_count_ignores_the_prior_count(state in arb_state(), count in any::<i64>()) {
        let next = transition(&state, Action::SetCount { count });

        prop_assert_eq!(next.count, count);
    }
}
