use std::cell::RefCell;
use std::rc::Rc;

use pageZoom::{
    strip_text, total_pages, visible_page_window, Control, Navigation, Paginator,
    PaginatorBuilder, PaginatorConfig, Surface, ViewModel,
};

/// Records the strip of every render.
#[derive(Default)]
struct StripLog(Vec<String>);

impl<T> Surface<T> for StripLog {
    fn apply(&mut self, view: &ViewModel<'_, T>) {
        self.0.push(strip_text(&view.controls));
    }
}

#[test]
fn total_pages_is_ceiling_division() {
    for len in 0..200usize {
        for page_size in 1..15usize {
            let expected = (len + page_size - 1) / page_size;
            assert_eq!(total_pages(len, page_size), expected);
            assert_eq!(total_pages(len, page_size) == 0, len == 0);
        }
    }
}

#[test]
fn every_page_is_full_except_the_last() {
    for len in 1..60usize {
        for page_size in 1..8usize {
            let config = PaginatorConfig { page_size, max_visible_pages: 5 };
            let mut p = Paginator::new((0..len).collect::<Vec<_>>(), config, ()).unwrap();
            let total = p.total_pages();
            for page in 1..=total {
                p.go_to_page(page);
                let expected = if page == total {
                    len - (total - 1) * page_size
                } else {
                    page_size
                };
                assert_eq!(p.current_page_items().len(), expected, "len={len} size={page_size} page={page}");
                assert_eq!(p.current_page_items()[0], (page - 1) * page_size);
            }
        }
    }
}

#[test]
fn out_of_range_targets_leave_cursor_alone() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&calls);
    let mut p = PaginatorBuilder::new((0..95).collect::<Vec<u32>>())
        .on_page_change(move |page| seen.borrow_mut().push(page))
        .build(())
        .unwrap();
    p.go_to_page(4);
    calls.borrow_mut().clear();

    for target in [0, 11, 12, usize::MAX] {
        assert_eq!(p.go_to_page(target), Navigation::Ignored);
        assert_eq!(p.current_page(), 4);
    }
    assert!(calls.borrow().is_empty());
}

#[test]
fn each_valid_navigation_notifies_exactly_once() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&calls);
    let mut p = PaginatorBuilder::new((0..95).collect::<Vec<u32>>())
        .on_page_change(move |page| seen.borrow_mut().push(page))
        .build(())
        .unwrap();
    for target in [3, 10, 1, 7] {
        calls.borrow_mut().clear();
        p.go_to_page(target);
        assert_eq!(*calls.borrow(), vec![target]);
        assert_eq!(p.current_page(), target);
    }
}

#[test]
fn unclamped_window_has_full_width() {
    for max_visible in 3..9usize {
        let slots = max_visible - 2;
        let total = 50;
        for current in 1..=total {
            let w = visible_page_window(current, total, max_visible);
            assert_eq!(w.len(), slots, "current={current} max={max_visible}");
            assert!(!w.contains(&1) && !w.contains(&total));
            assert!(w.windows(2).all(|p| p[1] == p[0] + 1));
        }
    }
}

#[test]
fn ninety_five_items_walkthrough() {
    let mut p = PaginatorBuilder::new((1..=95).collect::<Vec<u32>>())
        .page_size(10)
        .max_visible_pages(5)
        .build(StripLog::default())
        .unwrap();
    assert_eq!(p.total_pages(), 10);
    assert_eq!(p.visible_page_window(), vec![2, 3, 4]);
    p.go_to_page(5);
    p.go_to_page(9);
    p.last();
    insta::assert_snapshot!(p.surface().0.join("\n"), @r"
    « ‹ [1] 2 3 4 … 10 › »
    « ‹ 1 … 4 [5] 6 … 10 › »
    « ‹ 1 … 7 8 [9] 10 › »
    « ‹ 1 … 7 8 9 [10] › »
    ");
}

#[test]
fn single_page_dataset_disables_navigation() {
    let mut p = Paginator::new(vec!["a", "b", "c"], PaginatorConfig::default(), ()).unwrap();
    assert_eq!(p.total_pages(), 1);
    assert_eq!(p.go_to_page(2), Navigation::Ignored);
    let vm = p.view_model();
    let nav_disabled = vm
        .controls
        .iter()
        .filter(|c| matches!(c, Control::Nav { .. }))
        .all(Control::is_disabled);
    assert!(nav_disabled);
}

#[test]
fn exactly_max_visible_pages_render_without_ellipsis() {
    let mut p = Paginator::new((0..50).collect::<Vec<u32>>(), PaginatorConfig::default(), ()).unwrap();
    for page in 1..=5 {
        p.go_to_page(page);
        let vm = p.view_model();
        assert!(!vm.controls.contains(&Control::Ellipsis));
        let active: Vec<&Control> = vm.controls.iter().filter(|c| c.is_active()).collect();
        assert_eq!(active, vec![&Control::Page { number: page, active: true }]);
        assert_eq!(vm.controls.len(), 9);
    }
}

#[test]
fn unbounded_max_visible_lists_every_page() {
    for max_visible_pages in [usize::MAX, usize::MAX / 2, 1 << 40] {
        let config = PaginatorConfig { page_size: 10, max_visible_pages };
        let mut p = Paginator::new((0..95).collect::<Vec<u32>>(), config, StripLog::default()).unwrap();
        assert!(p.visible_page_window().is_empty());
        p.last();
        assert_eq!(
            p.surface().0,
            vec!["« ‹ [1] 2 3 4 5 6 7 8 9 10 › »", "« ‹ 1 2 3 4 5 6 7 8 9 [10] › »"]
        );
    }
}

#[test]
fn windowed_strip_stays_bounded_for_large_datasets() {
    let data: Vec<u32> = (0..200_000).collect();
    for max_visible_pages in [1, 5, 12, 1_000] {
        let config = PaginatorConfig { page_size: 1, max_visible_pages };
        let mut p = Paginator::new(data.clone(), config, ()).unwrap();
        for page in [1, 2, 99_999, 199_999, 200_000] {
            assert!(p.go_to_page(page).is_changed());
            let vm = p.view_model();
            let slots = max_visible_pages.saturating_sub(2).max(1);
            // Four nav buttons, two anchors, two ellipses at most.
            assert!(vm.controls.len() <= slots + 8, "max={max_visible_pages} page={page}");
            assert_eq!(vm.controls.iter().filter(|c| c.is_active()).count(), 1);
        }
    }
}
