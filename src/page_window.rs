//! Page arithmetic shared by both paginators: page counts, current page
//! resolution and the hidden ranges of a page-link control.
//!
//! Everything here is a pure function of its arguments and is recomputed on
//! every call.

use itertools::Itertools;

use crate::types::{HiddenRange, PageNumber};

/// `ceil(total_items / per_page)`, or 0 when either side is 0
pub fn number_of_pages(total_items: usize, per_page: usize) -> usize {
    if total_items == 0 || per_page == 0 {
        return 0;
    }

    if total_items < per_page {
        1
    } else {
        total_items.div_ceil(per_page)
    }
}

/// Snaps `requested` into `[1, number_of_pages]`. With no pages at all the
/// result is 1, which callers must read as "no pages".
pub fn clamp_current_page(requested: i64, number_of_pages: usize) -> PageNumber {
    if requested < 1 || number_of_pages == 0 {
        return 1;
    }

    PageNumber::try_from(requested)
        .unwrap_or(PageNumber::MAX)
        .min(number_of_pages)
}

/// `Some(requested)` when it names an existing page, `None` otherwise
pub fn validate_page(requested: i64, number_of_pages: usize) -> Option<PageNumber> {
    let number = PageNumber::try_from(requested).ok()?;

    (1..=number_of_pages).contains(&number).then_some(number)
}

pub fn is_first(page_number: PageNumber) -> bool {
    page_number == 1
}

pub fn is_last(page_number: PageNumber, number_of_pages: usize) -> bool {
    number_of_pages > 0 && page_number == number_of_pages
}

/// Ranges of pages to collapse around the current page, `on_each_side`
/// links kept next to it.
///
/// - no current page, or the current page within the first
///   `2 * on_each_side`: one range after the leading window
/// - the current page within the last `2 * on_each_side`: one range before
///   the trailing window
/// - otherwise two ranges, one on each side of the current page
///
/// Degenerate ranges (`finish <= start + 1`) are returned as they are.
pub fn compute_hidden_ranges(
    current_page: Option<PageNumber>,
    number_of_pages: usize,
    on_each_side: usize,
) -> Vec<HiddenRange> {
    let pages = to_signed(number_of_pages);
    let window = to_signed(on_each_side).saturating_mul(2);

    let ranges = match current_page.map(to_signed) {
        Some(current) if current > window => {
            if current > pages.saturating_sub(window) {
                vec![HiddenRange::new(
                    2,
                    pages.saturating_sub(window.saturating_add(2)),
                )]
            } else {
                let on_each_side = to_signed(on_each_side);

                vec![
                    HiddenRange::new(2, current.saturating_sub(on_each_side)),
                    HiddenRange::new(
                        current.saturating_add(on_each_side),
                        pages.saturating_sub(2),
                    ),
                ]
            }
        }
        _ => vec![HiddenRange::new(
            window.saturating_add(2),
            pages.saturating_sub(2),
        )],
    };

    tracing::trace!(
        ?current_page,
        number_of_pages,
        on_each_side,
        ranges = %ranges.iter().join(", "),
        "hidden ranges"
    );

    ranges
}

pub fn is_hidden(page_number: PageNumber, ranges: &[HiddenRange]) -> bool {
    ranges.iter().any(|range| range.contains(page_number))
}

/// Index of the first item of `page_number` in the full result set
pub fn database_offset(page_number: i64, per_page: usize) -> usize {
    match PageNumber::try_from(page_number) {
        Ok(number) if number > 0 => (number - 1).saturating_mul(per_page),
        _ => 0,
    }
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(50, 10, 5)]
    #[case(50, 49, 2)]
    #[case(50, 50, 1)]
    #[case(50, 51, 1)]
    #[case(0, 10, 0)]
    #[case(50, 0, 0)]
    #[case(50, 5, 10)]
    #[case(500, 5, 100)]
    #[case(3, 3, 1)]
    #[case(4, 3, 2)]
    #[case(6, 3, 2)]
    #[case(7, 3, 3)]
    #[case(24, 23, 2)]
    #[case(24, 24, 1)]
    #[case(30, 49, 1)]
    #[case(49, 49, 1)]
    #[case(1, 10, 1)]
    fn counts_pages(#[case] total_items: usize, #[case] per_page: usize, #[case] expected: usize) {
        assert_eq!(number_of_pages(total_items, per_page), expected);
    }

    #[rstest]
    #[case(0, 5, 1)]
    #[case(-3, 5, 1)]
    #[case(1, 5, 1)]
    #[case(4, 5, 4)]
    #[case(6, 5, 5)]
    #[case(234242525256, 5, 5)]
    #[case(3, 0, 1)]
    fn clamps_requested_page(#[case] requested: i64, #[case] pages: usize, #[case] expected: usize) {
        assert_eq!(clamp_current_page(requested, pages), expected);
    }

    #[test]
    fn validates_page_numbers() {
        assert_eq!(validate_page(1, 5), Some(1));
        assert_eq!(validate_page(5, 5), Some(5));
        assert_eq!(validate_page(6, 5), None);
        assert_eq!(validate_page(0, 5), None);
        assert_eq!(validate_page(-1, 5), None);
        assert_eq!(validate_page(1, 0), None);
    }

    #[test]
    fn first_and_last() {
        assert!(is_first(1));
        assert!(!is_first(2));
        assert!(is_last(5, 5));
        assert!(!is_last(4, 5));
        assert!(!is_last(0, 0));
    }

    #[test]
    fn slider_close_to_the_beginning() {
        assert_eq!(
            compute_hidden_ranges(Some(3), 20, 3),
            vec![HiddenRange::new(8, 18)]
        );
        assert_eq!(
            compute_hidden_ranges(None, 20, 3),
            vec![HiddenRange::new(8, 18)]
        );
    }

    #[test]
    fn slider_close_to_the_end() {
        assert_eq!(
            compute_hidden_ranges(Some(16), 20, 3),
            vec![HiddenRange::new(2, 12)]
        );
    }

    #[test]
    fn slider_in_the_middle() {
        // bounds are exclusive: {2, 4} hides 3 and {10, 18} hides 11..=17,
        // so neither range is {3, 4} or {10, 17}
        let ranges = compute_hidden_ranges(Some(7), 20, 3);

        assert_eq!(
            ranges,
            vec![HiddenRange::new(2, 4), HiddenRange::new(10, 18)]
        );

        let hidden: Vec<usize> = (1..=20).filter(|n| is_hidden(*n, &ranges)).collect();
        assert_eq!(hidden, vec![3, 11, 12, 13, 14, 15, 16, 17]);
    }

    #[test]
    fn few_pages_hide_nothing() {
        let ranges = compute_hidden_ranges(Some(1), 1, 3);

        assert_eq!(ranges, vec![HiddenRange::new(8, -1)]);
        assert!(!is_hidden(1, &ranges));

        let ranges = compute_hidden_ranges(Some(2), 3, 1);
        assert!((1..=3).all(|n| !is_hidden(n, &ranges)));
    }

    #[test]
    fn offsets() {
        assert_eq!(database_offset(1, 10), 0);
        assert_eq!(database_offset(3, 10), 20);
        assert_eq!(database_offset(0, 10), 0);
        assert_eq!(database_offset(-2, 10), 0);
    }
}
