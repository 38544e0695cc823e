//! Client-side pagination over a fully fetched list.

pub const PAGE_SIZE: usize = 12;

/// Total pages, never less than one.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Clamps a 1-based page index into range, so a shrink (e.g. after a delete)
/// can never leave an empty page visible.
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, page_count(len))
}

/// Whether a list of `len` items needs a pager at all.
pub fn needs_pager(len: usize) -> bool {
    page_count(len) > 1
}

/// Items for 1-based page `page`, clipped to bounds.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling_with_minimum_one() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(13), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn slicing_respects_bounds() {
        let items: Vec<usize> = (0..30).collect();
        assert_eq!(page_slice(&items, 1), &items[0..12]);
        assert_eq!(page_slice(&items, 2), &items[12..24]);
        assert_eq!(page_slice(&items, 3), &items[24..30]);
        assert!(page_slice(&items, 4).is_empty());
        assert_eq!(page_slice(&items, 0), &items[0..12]);
    }

    #[test]
    fn clamping_pulls_an_out_of_range_page_back() {
        assert_eq!(clamp_page(3, 25), 3);
        assert_eq!(clamp_page(3, 24), 2);
        assert_eq!(clamp_page(5, 0), 1);
        assert_eq!(clamp_page(0, 40), 1);
    }

    #[test]
    fn pager_only_shows_past_one_page() {
        assert!(!needs_pager(0));
        assert!(!needs_pager(PAGE_SIZE));
        assert!(needs_pager(PAGE_SIZE + 1));
    }
}
