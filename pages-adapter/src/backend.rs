use alloc::boxed::Box;
use alloc::vec::Vec;

use pages::{
    NavigationDirection, PageBridge, PageIndicator, PageSet, PagingBackend, PagingOptions, Point,
    Size, TransitionOutcome, indicator_or_default,
};

/// A framework-neutral controller for the native-backend transport.
///
/// Wraps a [`PageBridge`] and keeps the page indicator in step with it. Adapters forward:
/// - the backend's "before/after" queries to [`BackendController::bridge`]
/// - "transition finished" reports to `on_transition_completed`
/// - scroll offsets of an inertial backend to `on_scroll` (bounce suppression)
pub struct BackendController<B: PagingBackend> {
    bridge: PageBridge<B>,
    indicator: Option<Box<dyn PageIndicator>>,
}

impl<B> core::fmt::Debug for BackendController<B>
where
    B: PagingBackend + core::fmt::Debug,
    B::Container: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BackendController")
            .field("bridge", &self.bridge)
            .field("indicator", &self.indicator)
            .finish()
    }
}

impl<B: PagingBackend> BackendController<B> {
    pub fn new(backend: B, containers: Vec<B::Container>, options: PagingOptions) -> Self {
        let show_indicator = options.show_indicator;
        let page_count = containers.len();
        let bridge = PageBridge::new(backend, containers, options);
        let mut this = Self {
            bridge,
            indicator: None,
        };
        if show_indicator {
            this.indicator = Some(indicator_or_default(None, page_count));
            this.reflect();
        }
        this
    }

    /// Wraps every page of `pages` in a backend container, in page order.
    pub fn from_pages<P>(
        backend: B,
        pages: &PageSet<P>,
        make_container: impl FnMut(&P) -> B::Container,
        options: PagingOptions,
    ) -> Self {
        let containers = pages.contents().map(make_container).collect();
        Self::new(backend, containers, options)
    }

    /// Uses a caller-owned indicator as-is. Ignored when `show_indicator` is off.
    pub fn with_indicator(mut self, indicator: Box<dyn PageIndicator>) -> Self {
        if self.bridge.options().show_indicator {
            self.indicator = Some(indicator);
            self.reflect();
        }
        self
    }

    pub fn bridge(&self) -> &PageBridge<B> {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut PageBridge<B> {
        &mut self.bridge
    }

    pub fn indicator(&self) -> Option<&dyn PageIndicator> {
        self.indicator.as_deref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.bridge.current_index()
    }

    /// Caller binding update. `on_page_change` is not fired.
    pub fn set_current_page(&mut self, index: usize) -> Option<NavigationDirection> {
        let direction = self.bridge.apply_index(index)?;
        self.reflect();
        Some(direction)
    }

    /// Handles a tap on indicator position `position`; the change is reported through
    /// `on_page_change`.
    pub fn tap_indicator(&mut self, position: usize) -> Option<usize> {
        let target = self.indicator.as_ref()?.tap(position)?;
        self.bridge.select(target)?;
        self.reflect();
        self.bridge.current_index()
    }

    /// Bounce suppression for an inertial backend. Returns the offset to force, if any.
    pub fn on_scroll(&self, offset: Point, bounds: Size) -> Option<Point> {
        self.bridge.suppress_bounce(offset, bounds)
    }

    /// Replaces the containers after a rebuild. The indicator keeps its initial page count.
    pub fn set_containers(&mut self, containers: Vec<B::Container>) -> bool {
        let changed = self.bridge.set_containers(containers);
        self.reflect();
        changed
    }

    fn reflect(&mut self) {
        if let (Some(indicator), Some(index)) =
            (self.indicator.as_mut(), self.bridge.current_index())
        {
            indicator.set_current_page(index);
        }
    }
}

impl<B> BackendController<B>
where
    B: PagingBackend,
    B::Container: PartialEq,
{
    /// Forwards the backend's completion report and reflects a committed page in the indicator.
    pub fn on_transition_completed(
        &mut self,
        visible: &B::Container,
        completed: bool,
    ) -> TransitionOutcome {
        let outcome = self.bridge.on_transition_completed(visible, completed);
        if let TransitionOutcome::Committed(index) = outcome {
            pdebug!(index, "BackendController: page committed");
            if let Some(indicator) = self.indicator.as_mut() {
                indicator.set_current_page(index);
            }
        }
        outcome
    }
}
