//! Pure pagination math: which page buttons to show, and how many pages exist.

/// One slot in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Number(u32),
    /// Inert filler between page ranges. Selecting it is a no-op.
    Ellipsis,
}

/// Number of page slots shown at most.
pub const WINDOW_SIZE: u32 = 7;

/// Compute the number of pages for a paginated list.
///
/// A zero or unknown total still yields one page, so the bar never vanishes
/// into an invalid zero-page state.
pub fn total_pages(total_count: u64, per_page: u64) -> u32 {
    (total_count.div_ceil(per_page.max(1)) as u32).max(1)
}

/// Page markers to display for `current_page` out of `total_pages`.
///
/// Four shapes, keyed off fixed boundaries:
/// - everything fits: `1 2 .. total`
/// - near the start (current <= 4): `1 2 3 4 5 … total`
/// - near the end (current >= total - 3): `1 … total-4 .. total`
/// - middle: `1 … current-1 current current+1 … total`
///
/// The boundary constants decide which near-boundary pages count as
/// "near start" versus "middle"; they are part of the contract.
pub fn visible_pages(current_page: u32, total_pages: u32, window_size: u32) -> Vec<PageMarker> {
    use PageMarker::{Ellipsis, Number};

    let mut pages = Vec::new();

    if total_pages <= window_size {
        pages.extend((1..=total_pages).map(Number));
    } else if current_page <= 4 {
        pages.extend((1..=5).map(Number));
        pages.push(Ellipsis);
        pages.push(Number(total_pages));
    } else if current_page >= total_pages - 3 {
        pages.push(Number(1));
        pages.push(Ellipsis);
        pages.extend((total_pages - 4..=total_pages).map(Number));
    } else {
        pages.push(Number(1));
        pages.push(Ellipsis);
        pages.extend((current_page - 1..=current_page + 1).map(Number));
        pages.push(Ellipsis);
        pages.push(Number(total_pages));
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Number};
    use super::*;

    fn markers(spec: &[i64]) -> Vec<PageMarker> {
        // -1 stands for the ellipsis in the expected sequences below
        spec.iter()
            .map(|&n| if n < 0 { Ellipsis } else { Number(n as u32) })
            .collect()
    }

    #[test]
    fn all_pages_shown_when_total_fits_window() {
        assert_eq!(visible_pages(1, 5, 7), markers(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn all_pages_shown_when_total_equals_window() {
        // Boundary is <=, not <
        assert_eq!(visible_pages(1, 7, 7), markers(&[1, 2, 3, 4, 5, 6, 7]));
    }

    #[test]
    fn near_start_shows_leading_run_and_ellipsis() {
        assert_eq!(visible_pages(2, 10, 7), markers(&[1, 2, 3, 4, 5, -1, 10]));
    }

    #[test]
    fn near_start_boundary_is_page_four() {
        assert_eq!(visible_pages(4, 10, 7), markers(&[1, 2, 3, 4, 5, -1, 10]));
    }

    #[test]
    fn near_end_shows_trailing_run_and_ellipsis() {
        assert_eq!(visible_pages(8, 10, 7), markers(&[1, -1, 6, 7, 8, 9, 10]));
    }

    #[test]
    fn middle_shows_neighbors_with_ellipsis_both_sides() {
        assert_eq!(visible_pages(5, 10, 7), markers(&[1, -1, 4, 5, 6, -1, 10]));
    }

    #[test]
    fn single_page() {
        assert_eq!(visible_pages(1, 1, 7), markers(&[1]));
    }

    #[test]
    fn two_pages() {
        assert_eq!(visible_pages(1, 2, 7), markers(&[1, 2]));
    }

    #[test]
    fn deep_middle_of_large_listing() {
        assert_eq!(
            visible_pages(50, 100, 7),
            markers(&[1, -1, 49, 50, 51, -1, 100])
        );
    }

    #[test]
    fn window_output_is_always_seven_slots_beyond_the_window() {
        for total in [8, 10, 25, 100] {
            for current in 1..=total {
                assert_eq!(visible_pages(current, total, 7).len(), 7);
            }
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
    }

    #[test]
    fn total_pages_floors_at_one() {
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn total_pages_is_monotonic_in_total_count() {
        let mut prev = 0;
        for count in 0..300 {
            let pages = total_pages(count, 10);
            assert!(pages >= prev);
            prev = pages;
        }
    }
}
