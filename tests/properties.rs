//! Property tests for reducer purity and the immutable-list laws.

use proptest::prelude::*;
use std::sync::Arc;

use undertow::reducer::{filter, item, items, Reducer};
use undertow::{list, Action, AppReducer, AppState, Filter, Item, ItemId};

fn arb_filter() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        Just(Filter::Active),
        Just(Filter::Completed),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u64..20, ".{0,12}").prop_map(|(id, text)| Action::AddItem {
            id: ItemId(id),
            text,
        }),
        (0u64..20).prop_map(|id| Action::ToggleItem { id: ItemId(id) }),
        arb_filter().prop_map(|filter| Action::SetFilter { filter }),
        Just(Action::Init),
    ]
}

fn arb_items() -> impl Strategy<Value = Vec<Arc<Item>>> {
    prop::collection::vec((0u64..20, ".{0,12}", any::<bool>()), 0..8).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, text, completed)| {
                Arc::new(Item {
                    id: ItemId(id),
                    text,
                    completed,
                })
            })
            .collect()
    })
}

fn arb_state() -> impl Strategy<Value = AppState> {
    (arb_items(), arb_filter()).prop_map(|(items, filter)| AppState { items, filter })
}

proptest! {
    // --- Purity ---

    #[test]
    fn prop_root_reducer_is_deterministic(state in arb_state(), action in arb_action()) {
        let once = AppReducer.reduce(&state, &action);
        let twice = AppReducer.reduce(&state, &action);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_reduce_never_mutates_input(state in arb_state(), action in arb_action()) {
        let snapshot = state.clone();
        let _ = AppReducer.reduce(&state, &action);
        prop_assert_eq!(state, snapshot);
    }

    // --- Identity no-op ---

    #[test]
    fn prop_init_preserves_element_pointers(items in arb_items()) {
        let next = items::reduce(&items, &Action::Init);
        prop_assert_eq!(next.len(), items.len());
        for (a, b) in next.iter().zip(items.iter()) {
            prop_assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn prop_filter_ignores_item_actions(state in arb_filter(), id in 0u64..20) {
        prop_assert_eq!(
            filter::reduce(&state, &Action::ToggleItem { id: ItemId(id) }),
            state
        );
    }

    #[test]
    fn prop_leaf_no_op_is_pointer_identity(
        item_id in 0u64..10,
        target in 10u64..20,
        completed in any::<bool>(),
    ) {
        let prior = Arc::new(Item {
            id: ItemId(item_id),
            text: "t".to_string(),
            completed,
        });
        // Target never matches
        let next = item::reduce(Some(&prior), &Action::ToggleItem { id: ItemId(target) });
        prop_assert!(Arc::ptr_eq(&prior, &next.unwrap()));
    }

    // --- Append law ---

    #[test]
    fn prop_append_law(l in prop::collection::vec(any::<i64>(), 0..16), v in any::<i64>()) {
        let appended = list::append(&l, v);
        prop_assert_eq!(appended.len(), l.len() + 1);
        prop_assert_eq!(appended[l.len()], v);
        prop_assert_eq!(&appended[..l.len()], &l[..]);
    }

    // --- Removal law ---

    #[test]
    fn prop_removal_law(l in prop::collection::vec(any::<i64>(), 1..16), seed in any::<prop::sample::Index>()) {
        let i = seed.index(l.len());
        let removed = list::remove_at(&l, i).unwrap();
        prop_assert_eq!(removed.len(), l.len() - 1);
        prop_assert_eq!(&removed[..i], &l[..i]);
        prop_assert_eq!(&removed[i..], &l[i + 1..]);
    }

    // --- Replacement ---

    #[test]
    fn prop_replace_touches_one_slot(
        l in prop::collection::vec(any::<i64>(), 1..16),
        v in any::<i64>(),
        seed in any::<prop::sample::Index>(),
    ) {
        let i = seed.index(l.len());
        let replaced = list::replace_at(&l, i, v).unwrap();
        prop_assert_eq!(replaced.len(), l.len());
        prop_assert_eq!(replaced[i], v);
        for (j, (a, b)) in replaced.iter().zip(l.iter()).enumerate() {
            if j != i {
                prop_assert_eq!(a, b);
            }
        }
    }

    // --- Combinator isolation ---

    #[test]
    fn prop_filter_actions_never_touch_items(state in arb_state(), f in arb_filter()) {
        let next = AppReducer.reduce(&state, &Action::SetFilter { filter: f });
        prop_assert_eq!(next.items.len(), state.items.len());
        for (a, b) in next.items.iter().zip(state.items.iter()) {
            prop_assert!(Arc::ptr_eq(a, b));
        }
        prop_assert_eq!(next.filter, f);
    }

    #[test]
    fn prop_item_actions_never_touch_filter(state in arb_state(), id in 0u64..20) {
        let next = AppReducer.reduce(&state, &Action::ToggleItem { id: ItemId(id) });
        prop_assert_eq!(next.filter, state.filter);
    }
}
