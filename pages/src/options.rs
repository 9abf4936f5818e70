use alloc::sync::Arc;

use crate::{Alignment, EdgeInsets, Orientation, TransitionStyle};

/// A callback fired when the pager settles on a new page index.
///
/// Programmatic changes made by the caller (`set_current_page`/`apply_index`) do not fire it;
/// user-driven swipes, backend transitions and indicator taps do.
pub type OnPageChange = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for a paging view instance.
///
/// Options are supplied once at construction. Changing them means building a new engine/bridge;
/// only the page count and the measured width are expected to change over an instance's life.
///
/// This type is cheap to clone: the callback lives in an `Arc`.
#[derive(Clone)]
pub struct PagingOptions {
    /// Allow visual overscroll past the first/last page while dragging.
    pub bounce: bool,
    /// Treat the page sequence as circular when resolving backend neighbors.
    pub wrap: bool,
    pub show_indicator: bool,
    pub indicator_alignment: Alignment,
    /// How each page's content is placed inside the viewport.
    pub content_alignment: Alignment,
    pub insets: EdgeInsets,
    pub orientation: Orientation,
    pub transition_style: TransitionStyle,
    /// Page presented first. Clamped into range once the page count is known.
    pub initial_index: usize,
    pub on_page_change: Option<OnPageChange>,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            bounce: true,
            wrap: false,
            show_indicator: true,
            indicator_alignment: Alignment::Bottom,
            content_alignment: Alignment::Center,
            insets: EdgeInsets::ZERO,
            orientation: Orientation::Horizontal,
            transition_style: TransitionStyle::Scroll,
            initial_index: 0,
            on_page_change: None,
        }
    }
}

impl PagingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_show_indicator(mut self, show_indicator: bool) -> Self {
        self.show_indicator = show_indicator;
        self
    }

    pub fn with_indicator_alignment(mut self, alignment: Alignment) -> Self {
        self.indicator_alignment = alignment;
        self
    }

    pub fn with_content_alignment(mut self, alignment: Alignment) -> Self {
        self.content_alignment = alignment;
        self
    }

    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_transition_style(mut self, transition_style: TransitionStyle) -> Self {
        self.transition_style = transition_style;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_on_page_change(
        mut self,
        on_page_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Invokes `on_page_change`, if set.
    pub fn notify_page_change(&self, index: usize) {
        if let Some(cb) = &self.on_page_change {
            cb(index);
        }
    }
}

impl core::fmt::Debug for PagingOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagingOptions")
            .field("bounce", &self.bounce)
            .field("wrap", &self.wrap)
            .field("show_indicator", &self.show_indicator)
            .field("indicator_alignment", &self.indicator_alignment)
            .field("content_alignment", &self.content_alignment)
            .field("insets", &self.insets)
            .field("orientation", &self.orientation)
            .field("transition_style", &self.transition_style)
            .field("initial_index", &self.initial_index)
            .finish_non_exhaustive()
    }
}
