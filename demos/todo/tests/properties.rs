//! Property tests for the todo list invariants.

use proptest::prelude::*;
use todo::{TodoId, TodoState};

/// One edit of the list, with ids drawn from a small range so that
/// both hits and misses occur.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(u64),
    Remove(u64),
    ClearCompleted,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[ a-z]{0,8}".prop_map(Op::Add),
        (0u64..12).prop_map(Op::Toggle),
        (0u64..12).prop_map(Op::Remove),
        Just(Op::ClearCompleted),
    ]
}

fn apply(state: &mut TodoState, op: &Op) {
    match op {
        Op::Add(text) => {
            state.add(text);
        },
        Op::Toggle(id) => {
            state.toggle(TodoId::new(*id));
        },
        Op::Remove(id) => {
            state.remove(TodoId::new(*id));
        },
        Op::ClearCompleted => {
            state.clear_completed();
        },
    }
}

proptest! {
    #[test]
    fn length_matches_non_blank_adds(texts in proptest::collection::vec("[ a-z]{0,6}", 0..20)) {
        let mut state = TodoState::new();
        for text in &texts {
            state.add(text);
        }

        let expected = texts.iter().filter(|t| !t.trim().is_empty()).count();
        prop_assert_eq!(state.len(), expected);
        prop_assert_eq!(state.active_count() + state.completed_count(), state.len());
    }

    #[test]
    fn counts_always_sum_to_length(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut state = TodoState::new();
        for op in &ops {
            apply(&mut state, op);
            prop_assert_eq!(state.active_count() + state.completed_count(), state.len());
        }
    }

    #[test]
    fn ids_stay_unique_and_ordered(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut state = TodoState::new();
        for op in &ops {
            apply(&mut state, op);
        }

        let ids: Vec<_> = state.items().iter().map(|t| t.id).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn toggle_is_an_involution(
        ops in proptest::collection::vec(op_strategy(), 0..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut state = TodoState::new();
        for op in &ops {
            apply(&mut state, op);
        }
        prop_assume!(!state.is_empty());

        let id = state.items()[pick.index(state.len())].id;
        let before = state.clone();
        state.toggle(id);
        state.toggle(id);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn clear_completed_is_idempotent(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut state = TodoState::new();
        for op in &ops {
            apply(&mut state, op);
        }

        state.clear_completed();
        let once = state.clone();
        state.clear_completed();
        prop_assert_eq!(state, once);
    }

    #[test]
    fn blank_text_is_a_noop(
        ops in proptest::collection::vec(op_strategy(), 0..20),
        blank in "[ \t]{0,5}",
    ) {
        let mut state = TodoState::new();
        for op in &ops {
            apply(&mut state, op);
        }

        let before = state.clone();
        prop_assert!(state.add(&blank).is_none());
        prop_assert_eq!(state, before);
    }
}
