use core::ops::Range;

use pages::{Alignment, EdgeInsets, Orientation, Point, Size};

/// Padding kept between the indicator and the viewport edges.
pub const INDICATOR_PADDING: f32 = 16.0;

/// Places a `child` inside `container` according to `alignment`, after shrinking the container
/// by `insets`.
///
/// A child larger than the inset container is pinned to the inset leading/top edge.
pub fn place(alignment: Alignment, container: Size, child: Size, insets: EdgeInsets) -> Point {
    let free_w = (container.width - insets.horizontal() - child.width).max(0.0);
    let free_h = (container.height - insets.vertical() - child.height).max(0.0);
    Point::new(
        insets.leading + free_w * alignment.horizontal_fraction(),
        insets.top + free_h * alignment.vertical_fraction(),
    )
}

/// Origin of page `index` inside the viewport for a content offset along the paging axis.
pub fn page_origin(index: usize, page_extent: f32, offset: f32, orientation: Orientation) -> Point {
    let along = index as f32 * page_extent + offset;
    match orientation {
        Orientation::Horizontal => Point::new(along, 0.0),
        Orientation::Vertical => Point::new(0.0, along),
    }
}

/// Pages that intersect the viewport `[0, page_extent)` at `offset`.
///
/// At rest this is exactly the current page; mid-drag or mid-snap it is the two pages being
/// swiped between. Overscroll past either end never yields out-of-range pages. Empty until the
/// extent is measured.
pub fn visible_pages(page_count: usize, page_extent: f32, offset: f32) -> Range<usize> {
    if page_count == 0 || page_extent <= 0.0 {
        return 0..0;
    }
    // Page i spans [i * extent + offset, (i + 1) * extent + offset); with x = -offset / extent
    // the visible pages are floor(x) ..= ceil(x).
    let x = -offset / page_extent;
    let mut lo = x as i64;
    if lo as f32 > x {
        lo -= 1;
    }
    let hi = if lo as f32 == x { lo + 1 } else { lo + 2 };
    let count = page_count as i64;
    let start = lo.clamp(0, count);
    let end = hi.clamp(0, count);
    if start >= end {
        // Fully overscrolled: keep the nearest edge page.
        let edge = if offset > 0.0 { 0 } else { page_count - 1 };
        return edge..edge + 1;
    }
    start as usize..end as usize
}
