//! Tests for pagination module

use super::*;
use crate::error::Error;
use std::cell::Cell;
use test_case::test_case;

fn mock_url(page: u64) -> String {
    format!("url/{page}")
}

fn create_core(total_count: u64) -> PagerCore {
    let mut core = PagerCore::new();
    core.set_total_count(total_count).set_auto_hide(false);
    core
}

fn pages(links: &LinkSequence<'_>) -> Vec<u64> {
    links.iter().map(|link| link.page).collect()
}

fn pairs(links: &LinkSequence<'_>) -> Vec<(u64, String)> {
    links.iter().map(|link| (link.page, link.url)).collect()
}

// ============================================================================
// Page Count and Offsets
// ============================================================================

#[test_case(20, 10 => 2 ; "exact multiple")]
#[test_case(21, 10 => 3 ; "one extra item")]
#[test_case(29, 10 => 3 ; "almost full last page")]
#[test_case(5, 10 => 1 ; "fewer items than page size")]
fn test_page_count(total_count: u64, page_size: i64) -> u64 {
    let urls = mock_url;
    let view = create_core(total_count)
        .view(&FixedParams::new(1, page_size), &urls)
        .unwrap()
        .unwrap();
    view.page_count
}

#[test]
fn test_page_count_follows_total_updates() {
    let urls = mock_url;
    let params = FixedParams::new(1, 10);
    let mut core = create_core(20);
    assert_eq!(core.view(&params, &urls).unwrap().unwrap().page_count, 2);

    core.set_total_count(21);
    assert_eq!(core.view(&params, &urls).unwrap().unwrap().page_count, 3);

    core.set_total_count(29);
    assert_eq!(core.view(&params, &urls).unwrap().unwrap().page_count, 3);
}

#[test_case(1, 10, 15 => (1, 10) ; "first page")]
#[test_case(2, 10, 30 => (11, 20) ; "full middle page")]
#[test_case(2, 10, 17 => (11, 17) ; "partial last page")]
fn test_offsets(page: i64, page_size: i64, total_count: u64) -> (u64, u64) {
    let urls = mock_url;
    let view = create_core(total_count)
        .view(&FixedParams::new(page, page_size), &urls)
        .unwrap()
        .unwrap();
    (view.first_item_offset, view.last_item_offset)
}

#[test_case(1, 10, 20 => 10)]
#[test_case(2, 10, 15 => 5)]
#[test_case(1, 10, 5 => 5)]
fn test_current_page_size(page: i64, page_size: i64, total_count: u64) -> u64 {
    create_core(total_count)
        .current_page_size(&FixedParams::new(page, page_size))
        .unwrap()
}

// ============================================================================
// Navigation Links
// ============================================================================

#[test_case(5 ; "half page")]
#[test_case(10 ; "exactly one page")]
fn test_single_page_hides_navigation(total_count: u64) {
    let urls = mock_url;
    let view = create_core(total_count)
        .view(&FixedParams::new(1, 10), &urls)
        .unwrap()
        .unwrap();

    assert_eq!(view.first_page, NavLink::Hidden);
    assert_eq!(view.prev_page, NavLink::Hidden);
    assert_eq!(view.next_page, NavLink::Hidden);
    assert_eq!(view.last_page, NavLink::Hidden);
    assert!(view.before_links.is_empty());
    assert!(view.after_links.is_empty());
}

#[test]
fn test_first_page_of_two() {
    let urls = mock_url;
    let view = create_core(11)
        .view(&FixedParams::new(1, 10), &urls)
        .unwrap()
        .unwrap();

    assert!(view.first_page.is_hidden());
    assert!(view.prev_page.is_hidden());
    assert_eq!(view.next_page, NavLink::Shown("url/2".to_string()));
    assert_eq!(view.last_page, NavLink::Shown("url/2".to_string()));
    assert!(view.is_first_page());
}

#[test]
fn test_last_page_of_two() {
    let urls = mock_url;
    let view = create_core(11)
        .view(&FixedParams::new(2, 10), &urls)
        .unwrap()
        .unwrap();

    assert_eq!(view.first_page.url(), Some("url/1"));
    assert_eq!(view.prev_page.url(), Some("url/1"));
    assert!(view.next_page.is_hidden());
    assert!(view.last_page.is_hidden());
    assert!(view.is_last_page());
}

#[test]
fn test_middle_page_navigation() {
    let urls = mock_url;
    let view = create_core(41)
        .view(&FixedParams::new(3, 10), &urls)
        .unwrap()
        .unwrap();

    assert_eq!(view.first_page.url(), Some("url/1"));
    assert_eq!(view.prev_page.url(), Some("url/2"));
    assert_eq!(view.next_page.url(), Some("url/4"));
    assert_eq!(view.last_page.url(), Some("url/5"));
}

#[test]
fn test_nav_policy_hides_disabled_links() {
    let urls = mock_url;
    let mut core = create_core(41);
    core.set_nav_policy(NavPolicy {
        show_first: false,
        show_last: false,
        ..NavPolicy::default()
    });
    let view = core
        .view(&FixedParams::new(3, 10), &urls)
        .unwrap()
        .unwrap();

    assert!(view.first_page.is_hidden());
    assert_eq!(view.prev_page.url(), Some("url/2"));
    assert_eq!(view.next_page.url(), Some("url/4"));
    assert!(view.last_page.is_hidden());
}

#[test]
fn test_empty_url_is_still_shown() {
    let urls = |_page: u64| String::new();
    let view = create_core(30)
        .view(&FixedParams::new(2, 10), &urls)
        .unwrap()
        .unwrap();

    assert_eq!(view.prev_page, NavLink::Shown(String::new()));
    assert!(view.prev_page.is_shown());
}

#[test]
fn test_nav_link_from_option() {
    assert_eq!(NavLink::from(Some("x".to_string())), NavLink::Shown("x".to_string()));
    assert_eq!(NavLink::from(None::<String>), NavLink::Hidden);
}

// ============================================================================
// Window Cropping
// ============================================================================

#[test]
fn test_symmetric_window() {
    let urls = mock_url;
    let mut core = create_core(200);
    core.set_link_count(5);
    let view = core.view(&FixedParams::new(4, 15), &urls).unwrap().unwrap();

    assert_eq!(
        pairs(&view.before_links),
        vec![(2, "url/2".to_string()), (3, "url/3".to_string())]
    );
    assert_eq!(
        pairs(&view.after_links),
        vec![(5, "url/5".to_string()), (6, "url/6".to_string())]
    );
}

#[test]
fn test_before_links_cropped() {
    let urls = mock_url;
    let mut core = create_core(200);
    core.set_link_count(9);
    let view = core.view(&FixedParams::new(2, 15), &urls).unwrap().unwrap();

    assert_eq!(pairs(&view.before_links), vec![(1, "url/1".to_string())]);
    assert_eq!(pages(&view.after_links), vec![3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_after_links_cropped() {
    let urls = mock_url;
    let mut core = create_core(100);
    core.set_link_count(9);
    let view = core.view(&FixedParams::new(9, 10), &urls).unwrap().unwrap();

    assert_eq!(pages(&view.before_links), vec![2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(pairs(&view.after_links), vec![(10, "url/10".to_string())]);
}

#[test]
fn test_before_and_after_links_cropped() {
    let urls = mock_url;
    let mut core = create_core(50);
    core.set_link_count(9);
    let view = core.view(&FixedParams::new(3, 10), &urls).unwrap().unwrap();

    assert_eq!(pages(&view.before_links), vec![1, 2]);
    assert_eq!(pages(&view.after_links), vec![4, 5]);
}

#[test_case(1, 10, 5 => (vec![], vec![2, 3, 4, 5]) ; "first page")]
#[test_case(10, 10, 5 => (vec![6, 7, 8, 9], vec![]) ; "last page")]
#[test_case(5, 10, 1 => (vec![], vec![]) ; "single link")]
#[test_case(5, 10, 4 => (vec![4], vec![6, 7]) ; "even link count leans after")]
#[test_case(1, 1, 11 => (vec![], vec![]) ; "single page")]
fn test_window(current: u64, page_count: u64, link_count: u32) -> (Vec<u64>, Vec<u64>) {
    let window = Window::compute(current, page_count, link_count);
    (window.before().collect(), window.after().collect())
}

#[test]
fn test_window_invariants() {
    for page_count in 1..=25_u64 {
        for link_count in 1..=15_u32 {
            for current in 1..=page_count {
                let window = Window::compute(current, page_count, link_count);
                let mut all: Vec<u64> = window.before().collect();
                all.push(current);
                all.extend(window.after());

                let expected = u64::from(link_count).min(page_count);
                assert_eq!(
                    all.len() as u64,
                    expected,
                    "current={current} page_count={page_count} link_count={link_count}"
                );
                assert_eq!(window.link_total(), expected);
                assert!(all.windows(2).all(|w| w[0] < w[1]));
                assert!(all.iter().all(|p| (1..=page_count).contains(p)));
                assert!(window.before().all(|p| p < current));
                assert!(window.after().all(|p| p > current));
            }
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_on_page_zero() {
    let urls = mock_url;
    let err = create_core(20)
        .view(&FixedParams::new(0, 10), &urls)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref name, value: 0 } if name == "page"));
}

#[test]
fn test_error_on_negative_page() {
    let urls = mock_url;
    let err = create_core(20)
        .view(&FixedParams::new(-3, 10), &urls)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { value: -3, .. }));
}

#[test]
fn test_error_on_page_beyond_count() {
    let urls = mock_url;
    let err = create_core(20)
        .view(&FixedParams::new(10, 10), &urls)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidState {
            current_page: 10,
            page_count: 2
        }
    ));
}

#[test]
fn test_error_on_undefined_total() {
    let urls = mock_url;
    let core = PagerCore::new();
    let err = core.view(&FixedParams::new(10, 20), &urls).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_error_on_zero_page_size() {
    let urls = mock_url;
    let err = create_core(20)
        .view(&FixedParams::new(1, 0), &urls)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "page_size"));
}

#[test]
fn test_error_on_zero_link_count() {
    let urls = mock_url;
    let mut core = create_core(20);
    core.set_link_count(0);
    let err = core.view(&FixedParams::new(1, 10), &urls).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "link_count"));
}

#[test]
fn test_empty_dataset_is_out_of_range() {
    let urls = mock_url;
    let err = create_core(0)
        .view(&FixedParams::new(1, 10), &urls)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidState {
            current_page: 1,
            page_count: 0
        }
    ));
}

// ============================================================================
// Auto-hide
// ============================================================================

#[test]
fn test_auto_hide() {
    let mut pager = Pager::new(FixedParams::new(1, 10), mock_url);
    pager.total_count(5).auto_hide(true);

    assert!(pager.view().unwrap().is_none());
    assert_eq!(pager.render().unwrap(), "");
}

#[test]
fn test_auto_hide_keeps_multi_page_pager() {
    let mut pager = Pager::new(FixedParams::new(1, 10), mock_url);
    pager.total_count(15).auto_hide(true);

    assert!(pager.view().unwrap().is_some());
    assert!(!pager.render().unwrap().is_empty());
}

#[test]
fn test_auto_hide_disabled_keeps_single_page() {
    let mut pager = Pager::new(FixedParams::new(1, 10), mock_url);
    pager.total_count(5).auto_hide(false);

    let view = pager.view().unwrap().unwrap();
    assert_eq!(view.page_count, 1);
    assert_eq!(pager.current_page_size().unwrap(), 5);
}

#[test]
fn test_pager_defaults() {
    let pager = Pager::new(FixedParams::new(1, 10), mock_url);
    assert_eq!(pager.core().link_count(), 11);
    assert!(pager.core().auto_hide());
    assert_eq!(pager.core().template(), "pager");
    assert_eq!(pager.core().total_count(), None);
}

// ============================================================================
// Link Sequence
// ============================================================================

#[test]
fn test_link_sequence_restarts() {
    let urls = mock_url;
    let links = LinkSequence::new(3, 5, &urls);
    let expected = vec![
        (3, "url/3".to_string()),
        (4, "url/4".to_string()),
        (5, "url/5".to_string()),
    ];

    assert_eq!(pairs(&links), expected);
    assert_eq!(pairs(&links), expected);
    assert_eq!(links.len(), 3);
    assert_eq!(links.pages(), 3..=5);
}

#[test]
fn test_empty_link_sequence() {
    let urls = mock_url;
    let links = LinkSequence::new(5, 3, &urls);

    assert_eq!(links.iter().count(), 0);
    assert_eq!(links.iter().count(), 0);
    assert!(links.is_empty());
    assert_eq!(links.len(), 0);
}

#[test]
fn test_link_sequence_is_lazy() {
    let calls = Cell::new(0_u32);
    let urls = |page: u64| {
        calls.set(calls.get() + 1);
        mock_url(page)
    };
    let links = LinkSequence::new(1, 100, &urls);
    assert_eq!(calls.get(), 0);

    let mut iter = links.iter();
    assert_eq!(iter.len(), 100);
    let first = iter.next().unwrap();
    assert_eq!(first.page, 1);
    assert_eq!(calls.get(), 1);

    let taken: Vec<PageLink> = links.iter().take(3).collect();
    assert_eq!(taken.len(), 3);
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_view_windows_are_lazy() {
    let calls = Cell::new(0_u32);
    let urls = |page: u64| {
        calls.set(calls.get() + 1);
        mock_url(page)
    };
    let mut core = create_core(200);
    core.set_link_count(5);
    let view = core.view(&FixedParams::new(4, 15), &urls).unwrap().unwrap();

    // first, prev, next, last
    assert_eq!(calls.get(), 4);
    assert_eq!(view.after_links.iter().count(), 2);
    assert_eq!(calls.get(), 6);
}

#[test]
fn test_link_sequence_at_u64_max() {
    let urls = mock_url;
    let links = LinkSequence::new(u64::MAX - 1, u64::MAX, &urls);
    assert_eq!(pages(&links), vec![u64::MAX - 1, u64::MAX]);
}

#[test]
fn test_link_sequence_full_range_len_saturates() {
    let urls = mock_url;
    let links = LinkSequence::new(0, u64::MAX, &urls);
    assert_eq!(links.len(), usize::MAX);
    assert!(!links.is_empty());

    let mut iter = links.iter();
    assert_eq!(iter.size_hint(), (usize::MAX, Some(usize::MAX)));
    assert_eq!(iter.next().map(|link| link.page), Some(0));
    assert_eq!(iter.len(), usize::MAX);
}

#[test]
fn test_link_sequence_for_loop() {
    let urls = mock_url;
    let links = LinkSequence::new(7, 8, &urls);
    let mut seen = Vec::new();
    for link in &links {
        seen.push(link.url);
    }
    assert_eq!(seen, vec!["url/7", "url/8"]);
}

// ============================================================================
// Providers and Serialization
// ============================================================================

#[test]
fn test_url_pattern() {
    let pattern = UrlPattern::new("/items?page={{ page }}").unwrap();
    assert_eq!(pattern.url(4), "/items?page=4");
    assert_eq!(pattern.as_str(), "/items?page={{ page }}");
}

#[test]
fn test_url_pattern_requires_page() {
    let err = UrlPattern::new("/items").unwrap_err();
    assert!(matches!(err, Error::Template { .. }));

    let err = UrlPattern::new("/{{ category }}/{{ page }}").unwrap_err();
    assert!(matches!(err, Error::UndefinedVariable { ref variable } if variable == "category"));
}

#[test]
fn test_view_serializes_with_template_names() {
    let urls = mock_url;
    let mut core = create_core(30);
    core.set_link_count(3);
    let view = core.view(&FixedParams::new(1, 10), &urls).unwrap().unwrap();

    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "total_count": 30,
            "page_size": 10,
            "current_page": 1,
            "page_count": 3,
            "first_item_offset": 1,
            "last_item_offset": 10,
            "first_page_url": null,
            "prev_page_url": null,
            "next_page_url": "url/2",
            "last_page_url": "url/3",
            "before_links": [],
            "after_links": [
                {"page": 2, "url": "url/2"},
                {"page": 3, "url": "url/3"}
            ]
        })
    );
}
