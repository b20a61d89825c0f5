//! Windowed page-range computation.
//!
//! Given a page count, the active page, and the sibling/boundary display
//! parameters, `page_range` produces the marker sequence for a pagination
//! strip: boundary blocks pinned at both ends, a window of siblings around
//! the active page, and an ellipsis wherever a run of pages is collapsed.

use crate::marker::PageMarker;

/// Number of slots a collapsed strip occupies: both boundary blocks, the
/// sibling window with the active page, and the two ellipsis positions.
fn display_slots(siblings: usize, boundaries: usize) -> usize {
    siblings * 2 + 3 + boundaries * 2
}

/// Compute the marker sequence for one pagination strip.
///
/// The strip collapses only when `total` exceeds the number of display
/// slots; below that threshold the full `1..=total` run is returned
/// (empty when `total` is zero). An `active` page outside `1..=total` is
/// tolerated; the sibling window is clamped to the valid page span.
pub fn page_range(
    total: usize,
    active: usize,
    siblings: usize,
    boundaries: usize,
) -> Vec<PageMarker> {
    if display_slots(siblings, boundaries) >= total {
        return pages(1, total).collect();
    }

    let left_sibling = active.saturating_sub(siblings).max(boundaries);
    let right_sibling = (active + siblings).min(total - boundaries);

    let show_left_dots = left_sibling > boundaries + 2;
    let show_right_dots = right_sibling < total - boundaries - 1;

    match (show_left_dots, show_right_dots) {
        // Active page near the start: one contiguous leading block, then
        // jump to the trailing boundary block.
        (false, true) => {
            let left_items = siblings * 2 + boundaries + 2;
            join_blocks(total, &[(1, left_items), (total - boundaries + 1, total)])
        }
        // Active page near the end: leading boundary block, then one
        // contiguous trailing block.
        (true, false) => {
            let right_items = boundaries + 1 + siblings * 2;
            join_blocks(total, &[(1, boundaries), (total - right_items, total)])
        }
        // Active page in the middle: both boundary blocks plus the sibling
        // window, collapsed on both sides.
        (true, true) => join_blocks(
            total,
            &[
                (1, boundaries),
                (left_sibling, right_sibling),
                (total - boundaries + 1, total),
            ],
        ),
        // Not reachable while the threshold guard holds; fall back to the
        // uncollapsed strip.
        (false, false) => pages(1, total).collect(),
    }
}

/// Join inclusive page blocks into one marker sequence.
///
/// An ellipsis separates two blocks only when at least one page between
/// them was collapsed; empty blocks are skipped, so an ellipsis never
/// dangles at either end of the strip.
fn join_blocks(total: usize, blocks: &[(usize, usize)]) -> Vec<PageMarker> {
    let mut markers = Vec::new();
    let mut last_page = None;
    for &(start, end) in blocks {
        let start = start.max(1);
        let end = end.min(total);
        if start > end {
            continue;
        }
        if let Some(prev) = last_page {
            if start > prev + 1 {
                markers.push(PageMarker::Dots);
            }
        }
        markers.extend(pages(start, end));
        last_page = Some(end);
    }
    markers
}

/// The inclusive page run `start..=end` as markers.
fn pages(start: usize, end: usize) -> impl Iterator<Item = PageMarker> {
    (start..=end).map(PageMarker::Page)
}
