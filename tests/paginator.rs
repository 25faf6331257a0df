#[cfg(test)]
mod tests {
    use fieldsy_admin::libs::paginator::{page_window, paginate, PageMarker, PageState};

    fn pages(markers: &[PageMarker]) -> Vec<Option<usize>> {
        markers
            .iter()
            .map(|marker| match marker {
                PageMarker::Page(n) => Some(*n),
                PageMarker::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_paginate_slices_fixed_pages() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(&items, 1, 3), &[1, 2, 3]);
        assert_eq!(paginate(&items, 2, 3), &[4, 5, 6]);
        assert_eq!(paginate(&items, 4, 3), &[10]);
    }

    #[test]
    fn test_paginate_clamps_out_of_range() {
        let items: Vec<u32> = (1..=10).collect();
        assert!(paginate(&items, 0, 3).is_empty());
        assert!(paginate(&items, 5, 3).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert!(paginate::<u32>(&[], 1, 3).is_empty());
    }

    #[test]
    fn test_paginate_pages_cover_input_in_order() {
        let items: Vec<u32> = (1..=23).collect();
        let mut seen = Vec::new();
        for page in 1..=8 {
            seen.extend_from_slice(paginate(&items, page, 3));
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn test_page_window_fits_without_ellipsis() {
        assert_eq!(pages(&page_window(1, 1, 5)), vec![Some(1)]);
        assert_eq!(pages(&page_window(3, 5, 5)), vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
        assert_eq!(pages(&page_window(2, 4, 5)), vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn test_page_window_middle_has_both_ellipses() {
        // 1 … 5 6 7 8 9 … 20
        let expected = vec![Some(1), None, Some(5), Some(6), Some(7), Some(8), Some(9), None, Some(20)];
        assert_eq!(pages(&page_window(7, 20, 5)), expected);
    }

    #[test]
    fn test_page_window_near_front() {
        // 1 2 3 4 5 … 20
        let expected = vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)];
        assert_eq!(pages(&page_window(1, 20, 5)), expected);
        assert_eq!(pages(&page_window(2, 20, 5)), expected);
        assert_eq!(pages(&page_window(3, 20, 5)), expected);
    }

    #[test]
    fn test_page_window_near_back_shifts_window() {
        // 1 … 16 17 18 19 20
        let expected = vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)];
        assert_eq!(pages(&page_window(19, 20, 5)), expected);
        assert_eq!(pages(&page_window(20, 20, 5)), expected);
    }

    #[test]
    fn test_page_window_adjacent_gap_is_a_page_not_ellipsis() {
        // start == 2: page 1 directly precedes the window, no gap to compress.
        let expected = vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), None, Some(20)];
        assert_eq!(pages(&page_window(4, 20, 5)), expected);
    }

    #[test]
    fn test_page_window_clamps_degenerate_inputs() {
        assert_eq!(pages(&page_window(99, 3, 5)), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(pages(&page_window(0, 3, 5)), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(pages(&page_window(1, 0, 5)), vec![Some(1)]);
    }

    #[test]
    fn test_page_state_total_pages() {
        assert_eq!(PageState::new(10, 0).total_pages(), 1);
        assert_eq!(PageState::new(10, 1).total_pages(), 1);
        assert_eq!(PageState::new(10, 10).total_pages(), 1);
        assert_eq!(PageState::new(10, 11).total_pages(), 2);
        assert_eq!(PageState::new(3, 23).total_pages(), 8);
    }

    #[test]
    fn test_page_state_navigation_clamps() {
        let mut state = PageState::new(10, 25);
        assert_eq!(state.current_page, 1);
        state.prev();
        assert_eq!(state.current_page, 1);
        state.next();
        state.next();
        state.next();
        assert_eq!(state.current_page, 3);
        state.next();
        assert_eq!(state.current_page, 3);
        state.set_page(99);
        assert_eq!(state.current_page, 3);
        state.set_page(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_page_state_zero_page_size_floored() {
        let state = PageState::new(0, 25);
        assert_eq!(state.items_per_page, 1);
        assert_eq!(state.total_pages(), 25);
    }

    #[test]
    fn test_page_state_window_delegates() {
        let mut state = PageState::new(3, 23);
        state.set_page(7);
        assert_eq!(state.window(5), page_window(7, 8, 5));
    }
}
