//! Cycle and jump laws of the paging state machine.

use proptest::prelude::*;
use simple_change_core::{PageView, PagingController};

fn controller_strategy() -> impl Strategy<Value = (PagingController, usize)> {
    (1usize..40, 1u16..2000).prop_flat_map(|(page_count, width)| {
        (0..page_count).prop_map(move |start| {
            let paging = PagingController::with_index(
                f32::from(width),
                page_count,
                start,
            )
            .expect("generated inputs are valid");
            (paging, start)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn next_cycles_back_after_page_count_steps(
        (mut paging, start) in controller_strategy()
    ) {
        let page_count = paging.page_count();
        for step in 1..=page_count {
            let view = paging.next();
            prop_assert_eq!(view.active_index, (start + step) % page_count);
            prop_assert!(view.active_index < page_count);
        }
        prop_assert_eq!(paging.current_index(), start);
    }

    #[test]
    fn previous_cycles_back_after_page_count_steps(
        (mut paging, start) in controller_strategy()
    ) {
        let page_count = paging.page_count();
        for step in 1..=page_count {
            let view = paging.previous();
            prop_assert_eq!(
                view.active_index,
                (start + page_count * step - step) % page_count
            );
        }
        prop_assert_eq!(paging.current_index(), start);
    }

    #[test]
    fn go_to_valid_index_lands_exactly(
        (mut paging, _start) in controller_strategy(),
        target in any::<prop::sample::Index>(),
    ) {
        let index = target.index(paging.page_count());
        let view = paging.go_to(index).expect("index is in range");
        prop_assert_eq!(paging.current_index(), index);
        prop_assert_eq!(
            view,
            PageView::new(paging.page_width() * index as f32, index)
        );
    }

    #[test]
    fn go_to_invalid_index_changes_nothing(
        (mut paging, start) in controller_strategy(),
        beyond in 0usize..100,
        negative in i64::MIN..0,
    ) {
        let page_count = paging.page_count();
        prop_assert!(paging.go_to(page_count + beyond).is_err());
        prop_assert!(paging.go_to_signed(negative).is_err());
        prop_assert_eq!(paging.current_index(), start);
    }

    #[test]
    fn offset_tracks_index_after_any_sequence(
        (mut paging, _start) in controller_strategy(),
        moves in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        for forward in moves {
            let view = if forward { paging.next() } else { paging.previous() };
            prop_assert_eq!(
                view.offset,
                paging.page_width() * paging.current_index() as f32
            );
            prop_assert_eq!(view.active_index, paging.current_index());
        }
    }
}
