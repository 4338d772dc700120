/// Questions shown per page unless overridden by config or CLI.
pub const PAGE_SIZE: usize = 8;

/// Maximum entries in the page-selector row, ellipsis markers included.
pub const MAX_PAGE_BUTTONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

pub fn total_pages(filtered_len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    filtered_len.div_ceil(page_size)
}

/// Pages are 1-based. With zero filtered items the clamped page is 1 and
/// the slice is empty.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Half-open index range of the visible window, clipped to the filtered
/// length. `page` must already be clamped.
pub fn page_bounds(page: usize, page_size: usize, filtered_len: usize) -> (usize, usize) {
    let start = (page.max(1) - 1) * page_size;
    let start = start.min(filtered_len);
    let end = (start + page_size).min(filtered_len);
    (start, end)
}

/// Compressed page-selector labels: first and last page always shown, an
/// interior window of constant size centered on the current page, and
/// ellipsis markers where pages are elided.
pub fn page_labels(total: usize, current: usize, max_buttons: usize) -> Vec<PageLabel> {
    if total <= 1 {
        return Vec::new();
    }
    if total <= max_buttons {
        return (1..=total).map(PageLabel::Page).collect();
    }

    let interior = max_buttons.saturating_sub(2).max(1);
    let current = current.clamp(1, total);
    let half = interior / 2;

    let mut start = current.saturating_sub(half).max(2);
    let mut end = start + interior - 1;
    if end > total - 1 {
        end = total - 1;
        start = (end + 1).saturating_sub(interior).max(2);
    }

    let mut labels = Vec::with_capacity(interior + 4);
    labels.push(PageLabel::Page(1));
    if start > 2 {
        labels.push(PageLabel::Ellipsis);
    }
    for page in start..=end {
        labels.push(PageLabel::Page(page));
    }
    if end < total - 1 {
        labels.push(PageLabel::Ellipsis);
    }
    labels.push(PageLabel::Page(total));
    labels
}
