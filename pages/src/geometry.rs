use crate::{NavigationDirection, PagingOptions, PagingState};

/// The outcome of releasing a drag: where the offset settles and which page it lands on.
///
/// The engine has already applied the snap when this is returned. `from` is the offset the drag
/// left the content at, so an adapter can animate `from -> to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snap {
    pub from: f32,
    pub to: f32,
    pub previous_index: usize,
    pub index: usize,
}

impl Snap {
    pub fn changed_page(&self) -> bool {
        self.previous_index != self.index
    }

    /// `None` when the snap settled back on the same page.
    pub fn direction(&self) -> Option<NavigationDirection> {
        self.changed_page()
            .then(|| NavigationDirection::between(self.previous_index, self.index))
    }
}

/// Computes the scroll offset of a paging view from drag deltas, page width and page count.
///
/// Offsets are along the paging axis and non-positive: page `i` is fully visible at
/// `-i * page_width`. The engine is a plain state machine fed one event at a time from the UI
/// thread; it holds no UI objects and never animates by itself (see [`Snap`]).
///
/// With zero pages every drag operation is a no-op and [`PageGeometry::current_index`] is `None`.
/// Until a width is measured it reads as `0`, so every page-relative offset is `0`.
#[derive(Clone, Debug)]
pub struct PageGeometry {
    bounce: bool,
    page_count: usize,
    page_width: f32,
    index: Option<usize>,
    offset: f32,
    drag_offset: f32,
    dragging: bool,
}

impl PageGeometry {
    pub fn new(options: &PagingOptions, page_count: usize) -> Self {
        let index = clamp_index(options.initial_index, page_count);
        pdebug!(
            page_count,
            bounce = options.bounce,
            initial_index = options.initial_index,
            "PageGeometry::new"
        );
        Self {
            bounce: options.bounce,
            page_count,
            page_width: 0.0,
            index,
            offset: 0.0,
            drag_offset: 0.0,
            dragging: false,
        }
    }

    pub fn bounce(&self) -> bool {
        self.bounce
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    /// `None` when there are no pages.
    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// The logical content offset: the drag-adjusted offset while dragging, the snapped page
    /// offset otherwise.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The resting offset of page `index`.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        -(index as f32) * self.page_width
    }

    /// The lowest offset reachable without bounce (the last page's resting offset).
    pub fn min_offset(&self) -> f32 {
        self.offset_for_index(self.page_count.saturating_sub(1))
    }

    /// Reports a newly measured page width.
    ///
    /// Non-finite or negative widths read as `0`. Dependent offsets are recomputed immediately.
    /// Returns `true` if the width changed.
    pub fn set_page_width(&mut self, width: f32) -> bool {
        let width = sanitize_width(width);
        if width == self.page_width {
            return false;
        }
        pdebug!(width, prev = self.page_width, "PageGeometry::set_page_width");
        self.page_width = width;
        self.offset = match self.index {
            Some(index) if self.dragging => self.drag_target(index, self.drag_offset),
            Some(index) => self.offset_for_index(index),
            None => 0.0,
        };
        true
    }

    /// Applies a rebuilt page count, clamping the current index into range.
    ///
    /// An empty set moves the index to `None`; a previously empty set starts at page 0.
    /// Any in-flight drag is dropped. Returns `true` if the current index changed.
    pub fn set_page_count(&mut self, page_count: usize) -> bool {
        if self.page_count == page_count {
            return false;
        }
        pdebug!(page_count, prev = self.page_count, "PageGeometry::set_page_count");
        let prev = self.index;
        self.page_count = page_count;
        self.index = clamp_index(prev.unwrap_or(0), page_count);
        self.reset_drag();
        self.offset = self.resting_offset();
        self.index != prev
    }

    /// Updates the offset for the drag translation since the gesture started.
    ///
    /// With bounce the result is `-index * page_width + delta`, unclamped. Without bounce it is
    /// kept within `[min_offset, 0]`. Returns the new offset; with no pages this is a no-op.
    pub fn on_drag_changed(&mut self, delta: f32) -> f32 {
        let Some(index) = self.index else {
            ptrace!(delta, "on_drag_changed: no pages");
            return self.offset;
        };
        let delta = if delta.is_finite() { delta } else { 0.0 };
        self.dragging = true;
        self.drag_offset = delta;
        self.offset = self.drag_target(index, delta);
        ptrace!(delta, offset = self.offset, index, "on_drag_changed");
        self.offset
    }

    /// Ends the drag with the predicted end translation and snaps to a page.
    ///
    /// A prediction of at least half a page width moves one page (forward for negative deltas,
    /// backward for positive ones), clamped to the first/last page. The offset snaps to the
    /// landing page and the drag offset resets to `0`.
    ///
    /// Returns `None` when there are no pages.
    pub fn on_drag_ended(&mut self, predicted_delta: f32) -> Option<Snap> {
        let Some(previous_index) = self.index else {
            ptrace!(predicted_delta, "on_drag_ended: no pages");
            return None;
        };
        let from = self.offset;
        let predicted_delta = if predicted_delta.is_finite() {
            predicted_delta
        } else {
            0.0
        };

        if self.page_width <= 0.0 {
            pwarn!(predicted_delta, "on_drag_ended: page width not measured yet");
        }
        let mut index = previous_index;
        if predicted_delta.abs() >= self.page_width / 2.0 {
            let last = self.page_count - 1;
            index = if predicted_delta < 0.0 {
                previous_index.saturating_add(1).min(last)
            } else {
                previous_index.saturating_sub(1)
            };
        }

        self.index = Some(index);
        self.reset_drag();
        self.offset = self.offset_for_index(index);
        let snap = Snap {
            from,
            to: self.offset,
            previous_index,
            index,
        };
        ptrace!(?snap, predicted_delta, "on_drag_ended");
        Some(snap)
    }

    /// Moves to `index` programmatically (clamped), dropping any in-flight drag.
    ///
    /// Returns the transition direction, or `None` when there are no pages or the index did not
    /// change.
    pub fn set_index(&mut self, index: usize) -> Option<NavigationDirection> {
        let prev = self.index?;
        let index = index.min(self.page_count - 1);
        self.reset_drag();
        self.index = Some(index);
        self.offset = self.offset_for_index(index);
        if index == prev {
            return None;
        }
        ptrace!(prev, index, "PageGeometry::set_index");
        Some(NavigationDirection::between(prev, index))
    }

    /// Returns a snapshot of the engine's private store.
    pub fn state(&self) -> PagingState {
        PagingState {
            current_index: self.index,
            page_width: self.page_width,
            drag_offset: self.drag_offset,
        }
    }

    /// Restores a previously captured snapshot against the current page count.
    ///
    /// The index is clamped into range and a captured drag is resumed as if the pointer were
    /// still at `drag_offset`.
    pub fn restore_state(&mut self, state: PagingState) {
        self.page_width = sanitize_width(state.page_width);
        self.index = match state.current_index {
            Some(index) => clamp_index(index, self.page_count),
            None => clamp_index(0, self.page_count),
        };
        self.reset_drag();
        self.offset = self.resting_offset();
        if state.drag_offset != 0.0 {
            self.on_drag_changed(state.drag_offset);
        }
    }

    fn drag_target(&self, index: usize, delta: f32) -> f32 {
        let raw = self.offset_for_index(index) + delta;
        if self.bounce {
            raw
        } else {
            keep_within(self.min_offset(), 0.0, raw)
        }
    }

    fn resting_offset(&self) -> f32 {
        self.index.map_or(0.0, |i| self.offset_for_index(i))
    }

    fn reset_drag(&mut self) {
        self.dragging = false;
        self.drag_offset = 0.0;
    }
}

fn clamp_index(index: usize, page_count: usize) -> Option<usize> {
    page_count.checked_sub(1).map(|last| index.min(last))
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

fn keep_within(min: f32, max: f32, value: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
