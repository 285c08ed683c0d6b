use proptest::prelude::*;
use selectfy::{MarkedItems, Modifiers, SelectConfig, SelectionController};

fn controller(n: usize) -> SelectionController<MarkedItems<usize>> {
    SelectionController::new(MarkedItems::new((0..n).collect()), SelectConfig::default())
}

// Strategy for generating modifier combinations
fn modifiers_strategy() -> impl Strategy<Value = Modifiers> {
    prop_oneof![
        Just(Modifiers::new()),
        Just(Modifiers::ctrl()),
        Just(Modifiers::shift()),
        Just(Modifiers::ctrl_shift()),
    ]
}

// Strategy for a container size plus a gesture history over it
fn history_strategy() -> impl Strategy<Value = (usize, Vec<(usize, Modifiers)>)> {
    (1usize..30).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, modifiers_strategy()), 0..20),
        )
    })
}

fn replay(n: usize, history: &[(usize, Modifiers)]) -> SelectionController<MarkedItems<usize>> {
    let mut c = controller(n);
    for &(index, modifiers) in history {
        c.handle_gesture(index, modifiers).unwrap();
    }
    c
}

proptest! {
    #[test]
    fn select_all_selects_everything((n, history) in history_strategy()) {
        let mut c = replay(n, &history);
        let event = c.select_all();
        prop_assert_eq!(c.count(), n);
        prop_assert_eq!(event.selected_count, n);
        prop_assert_eq!(c.selected(), (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn unselect_all_empties((n, history) in history_strategy()) {
        let mut c = replay(n, &history);
        c.unselect_all();
        prop_assert_eq!(c.count(), 0);
        prop_assert!(c.selected().is_empty());
    }

    #[test]
    fn plain_click_is_exclusive((n, history) in history_strategy(), pick in any::<prop::sample::Index>()) {
        let mut c = replay(n, &history);
        let target = pick.index(n);
        c.handle_gesture(target, Modifiers::new()).unwrap();
        prop_assert_eq!(c.selected(), vec![target]);
        prop_assert_eq!(c.pivot(), Some(target));
        prop_assert_eq!(c.highlight(), Some(target));
    }

    #[test]
    fn ctrl_click_flips_one_membership((n, history) in history_strategy(), pick in any::<prop::sample::Index>()) {
        let mut c = replay(n, &history);
        let target = pick.index(n);
        let before: Vec<bool> = (0..n).map(|i| c.is_selected(i)).collect();

        c.handle_gesture(target, Modifiers::ctrl()).unwrap();

        for (i, was) in before.iter().enumerate() {
            if i == target {
                prop_assert_eq!(c.is_selected(i), !was);
            } else {
                prop_assert_eq!(c.is_selected(i), *was);
            }
        }
        if c.count() == 0 {
            prop_assert_eq!(c.pivot(), None);
        } else {
            prop_assert_eq!(c.pivot(), Some(target));
        }
    }

    #[test]
    fn shift_range_is_contiguous(
        (n, history) in history_strategy(),
        pivot in any::<prop::sample::Index>(),
        target in any::<prop::sample::Index>(),
    ) {
        let (pivot, target) = (pivot.index(n), target.index(n));
        let mut forward = replay(n, &history);
        forward.handle_gesture(pivot, Modifiers::new()).unwrap();
        forward.handle_gesture(target, Modifiers::shift()).unwrap();

        let mut backward = replay(n, &history);
        backward.handle_gesture(target, Modifiers::new()).unwrap();
        backward.handle_gesture(pivot, Modifiers::shift()).unwrap();

        let (from, to) = (pivot.min(target), pivot.max(target));
        prop_assert_eq!(forward.selected(), (from..=to).collect::<Vec<_>>());
        prop_assert_eq!(backward.selected(), forward.selected());
        prop_assert_eq!(forward.pivot(), Some(pivot));
    }

    #[test]
    fn ctrl_shift_only_moves_highlight((n, history) in history_strategy(), pick in any::<prop::sample::Index>()) {
        let mut c = replay(n, &history);
        let target = pick.index(n);
        let selected = c.selected();
        let pivot = c.pivot();

        let events = c.handle_gesture(target, Modifiers::ctrl_shift()).unwrap();

        prop_assert!(events.selection_change.is_none());
        prop_assert_eq!(c.selected(), selected);
        prop_assert_eq!(c.pivot(), pivot);
        prop_assert_eq!(c.highlight(), Some(target));
    }

    #[test]
    fn highlight_mark_is_unique((n, history) in history_strategy()) {
        let c = replay(n, &history);
        let marked: Vec<usize> = c
            .source()
            .iter_marked()
            .filter_map(|(i, _, _, highlighted)| highlighted.then_some(i))
            .collect();
        prop_assert_eq!(marked, c.highlight().into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn repeated_gesture_is_stable((n, history) in history_strategy(), pick in any::<prop::sample::Index>(), modifiers in modifiers_strategy()) {
        prop_assume!(modifiers != Modifiers::ctrl());
        let mut c = replay(n, &history);
        let target = pick.index(n);
        c.handle_gesture(target, modifiers).unwrap();
        let first = c.selected();
        c.handle_gesture(target, modifiers).unwrap();
        prop_assert_eq!(c.selected(), first);
    }
}
