//! Page-count arithmetic shared by the listing service.

/// Page size applied when a listing request does not specify a limit.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Number of pages needed to hold `total` matching records at `per_page`
/// records each. Zero matches means zero pages.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_matches_means_zero_pages() {
        assert_eq!(total_pages(0, DEFAULT_ITEMS_PER_PAGE), 0);
    }

    #[test]
    fn exact_fit_is_one_page() {
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(20, 20), 1);
    }

    #[test]
    fn remainder_adds_a_page() {
        assert_eq!(total_pages(3, 1), 3);
        assert_eq!(total_pages(41, 20), 3);
        assert_eq!(total_pages(21, 20), 2);
    }
}
