use super::*;

fn numbers(n: usize) -> Vec<usize> {
    (0..n).collect()
}

// =============================================================================
// boundary scenarios
// =============================================================================

#[test]
fn first_page_of_25_items() {
    let items = numbers(25);
    let page = calculate_pagination(&items, 1, 12);
    assert_eq!(page.items, items[0..12].to_vec());
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.pagination.total_items, 25);
    assert_eq!(page.pagination.page_size, 12);
}

#[test]
fn last_page_holds_the_remainder() {
    let items = numbers(25);
    let page = calculate_pagination(&items, 3, 12);
    assert_eq!(page.items, vec![24]);
    assert_eq!(page.pagination.current_page, 3);
}

#[test]
fn page_past_the_end_clamps_to_last() {
    let items = numbers(25);
    let clamped = calculate_pagination(&items, 99, 12);
    let last = calculate_pagination(&items, 3, 12);
    assert_eq!(clamped, last);
    assert_eq!(clamped.pagination.current_page, 3);
}

#[test]
fn empty_collection_resolves_to_page_one() {
    let items: Vec<usize> = Vec::new();
    let page = calculate_pagination(&items, 5, 12);
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total_pages, 0);
    assert_eq!(page.pagination.total_items, 0);
    assert_eq!(page.pagination.current_page, 1);
}

#[test]
fn page_zero_clamps_to_first() {
    let items = numbers(12);
    let page = calculate_pagination(&items, 0, 12);
    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.items.len(), 12);
    assert_eq!(page.pagination.total_pages, 1);
}

#[test]
fn negative_page_clamps_to_first() {
    let items = numbers(30);
    let page = calculate_pagination(&items, -7, 10);
    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.items, items[0..10].to_vec());
}

#[test]
fn extreme_requests_do_not_overflow() {
    let items = numbers(5);
    assert_eq!(calculate_pagination(&items, i64::MAX, 2).pagination.current_page, 3);
    assert_eq!(calculate_pagination(&items, i64::MIN, 2).pagination.current_page, 1);
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let items = numbers(3);
    let page = calculate_pagination(&items, 2, 0);
    assert_eq!(page.pagination.page_size, 1);
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.items, vec![1]);
}

#[test]
fn default_page_size_splits_thirteen_items() {
    let items = numbers(13);
    let page = calculate_pagination(&items, 2, DEFAULT_PAGE_SIZE);
    assert_eq!(page.pagination.page_size, 12);
    assert_eq!(page.items, vec![12]);
}

// =============================================================================
// properties over a grid of inputs
// =============================================================================

#[test]
fn total_pages_is_ceiling_division() {
    for total in 0..40 {
        for size in 1..15 {
            let items = numbers(total);
            let page = calculate_pagination(&items, 1, size);
            let expected = (total + size - 1) / size;
            assert_eq!(page.pagination.total_pages, expected, "total={total} size={size}");
        }
    }
}

#[test]
fn resolved_page_always_in_range() {
    let items = numbers(17);
    for requested in -5..30 {
        let page = calculate_pagination(&items, requested, 4);
        let upper = page.pagination.total_pages.max(1);
        assert!((1..=upper).contains(&page.pagination.current_page), "requested={requested}");
    }
}

#[test]
fn slice_is_the_contiguous_window() {
    let items = numbers(23);
    let size = 5;
    for requested in 1..=5 {
        let page = calculate_pagination(&items, requested, size);
        let current = page.pagination.current_page;
        let start = (current - 1) * size;
        let end = (start + size).min(items.len());
        assert_eq!(page.items, items[start..end].to_vec());
        if current < page.pagination.total_pages {
            assert_eq!(page.items.len(), size);
        } else {
            assert_eq!(page.items.len(), items.len() - start);
        }
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let items = numbers(31);
    assert_eq!(calculate_pagination(&items, 2, 12), calculate_pagination(&items, 2, 12));
}

#[test]
fn input_collection_is_untouched() {
    let items = numbers(8);
    let _ = calculate_pagination(&items, 2, 3);
    assert_eq!(items, numbers(8));
}

// =============================================================================
// navigation
// =============================================================================

#[test]
fn first_page_has_no_previous() {
    let page = calculate_pagination(&numbers(25), 1, 12);
    assert_eq!(page.pagination.previous_page(), None);
    assert_eq!(page.pagination.next_page(), Some(2));
}

#[test]
fn last_page_has_no_next() {
    let page = calculate_pagination(&numbers(25), 3, 12);
    assert_eq!(page.pagination.previous_page(), Some(2));
    assert_eq!(page.pagination.next_page(), None);
}

#[test]
fn single_page_hides_controls() {
    assert!(calculate_pagination(&numbers(12), 1, 12).pagination.is_single_page());
    assert!(calculate_pagination::<usize>(&[], 1, 12).pagination.is_single_page());
    assert!(!calculate_pagination(&numbers(13), 1, 12).pagination.is_single_page());
}

#[test]
fn display_reads_page_x_of_y() {
    let page = calculate_pagination(&numbers(25), 2, 12);
    assert_eq!(page.pagination.to_string(), "Page 2 of 3");
}

#[test]
fn display_of_empty_collection_reads_page_1_of_1() {
    let page = calculate_pagination::<usize>(&[], 4, 12);
    assert_eq!(page.pagination.total_pages, 0);
    assert_eq!(page.pagination.to_string(), "Page 1 of 1");
}

#[test]
fn clamp_page_size_bounds() {
    assert_eq!(clamp_page_size(0), MIN_PAGE_SIZE);
    assert_eq!(clamp_page_size(15), 15);
    assert_eq!(clamp_page_size(500), MAX_PAGE_SIZE);
}

#[test]
fn pagination_serializes_camel_case() {
    let page = calculate_pagination(&numbers(3), 1, 12);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["pagination"]["currentPage"], 1);
    assert_eq!(json["pagination"]["pageSize"], 12);
    assert_eq!(json["pagination"]["totalItems"], 3);
    assert_eq!(json["pagination"]["totalPages"], 1);
    assert_eq!(json["items"], serde_json::json!([0, 1, 2]));
}
