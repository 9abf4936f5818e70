use alloc::vec::Vec;

use crate::{NavigationDirection, Orientation, PagingOptions, Point, Size};

/// A native view-controller-style paging backend.
///
/// The backend owns the actual transition machinery. The bridge tells it which container to show
/// and the backend reports finished user swipes back through
/// [`PageBridge::on_transition_completed`].
pub trait PagingBackend {
    /// One opaque page container per page (e.g. a hosting controller).
    type Container;

    /// Makes `container` the visible page.
    fn present(
        &mut self,
        container: &Self::Container,
        direction: NavigationDirection,
        animated: bool,
    );
}

/// What [`PageBridge::on_transition_completed`] did with a backend report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A user-driven transition landed on a new page; the index was written and reported.
    Committed(usize),
    /// The backend echoed a page the bridge had just presented itself.
    Echo(usize),
    /// The visible page already was the current page.
    Unchanged(usize),
    /// The backend cancelled the transition.
    Cancelled,
    /// The container is not in the list (e.g. stale after a rebuild).
    Unknown,
}

/// Keeps a caller-visible current index in sync with a [`PagingBackend`].
///
/// Containers are held in page order and addressed by position. The only identity lookup is
/// resolving the container a backend reports as visible; a miss is treated as "no neighbor" /
/// "unknown" and never surfaces as an error.
///
/// Two writers touch the current index: backend completions (user swipes) and programmatic
/// [`PageBridge::apply_index`] calls. Both go through `&mut self` on the UI thread, and a
/// completion for a page the bridge presented itself is recognized as an echo and not written
/// back a second time.
pub struct PageBridge<B: PagingBackend> {
    backend: B,
    containers: Vec<B::Container>,
    options: PagingOptions,
    current: Option<usize>,
    presented: Option<usize>,
}

impl<B> core::fmt::Debug for PageBridge<B>
where
    B: PagingBackend + core::fmt::Debug,
    B::Container: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageBridge")
            .field("backend", &self.backend)
            .field("containers", &self.containers)
            .field("options", &self.options)
            .field("current", &self.current)
            .field("presented", &self.presented)
            .finish()
    }
}

impl<B: PagingBackend> PageBridge<B> {
    /// Creates the bridge and presents the initial page (clamped) without animation.
    pub fn new(backend: B, containers: Vec<B::Container>, options: PagingOptions) -> Self {
        let current = containers
            .len()
            .checked_sub(1)
            .map(|last| options.initial_index.min(last));
        pdebug!(
            count = containers.len(),
            wrap = options.wrap,
            bounce = options.bounce,
            "PageBridge::new"
        );
        let mut bridge = Self {
            backend,
            containers,
            options,
            current,
            presented: None,
        };
        if let Some(index) = current {
            bridge.present(index, NavigationDirection::Forward);
        }
        bridge
    }

    pub fn options(&self) -> &PagingOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn containers(&self) -> &[B::Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// `None` when there are no pages.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn container(&self, index: usize) -> Option<&B::Container> {
        self.containers.get(index)
    }

    /// Position of the page before `index`, wrapping to the last page when `wrap` is set.
    pub fn neighbor_index_before(&self, index: usize) -> Option<usize> {
        let last = self.containers.len().checked_sub(1)?;
        if index > last {
            return None;
        }
        match index {
            0 if self.options.wrap => Some(last),
            0 => None,
            i => Some(i - 1),
        }
    }

    /// Position of the page after `index`, wrapping to the first page when `wrap` is set.
    pub fn neighbor_index_after(&self, index: usize) -> Option<usize> {
        let last = self.containers.len().checked_sub(1)?;
        if index > last {
            return None;
        }
        if index < last {
            Some(index + 1)
        } else if self.options.wrap {
            Some(0)
        } else {
            None
        }
    }

    /// Replaces the containers after the page set was rebuilt.
    ///
    /// The current index is clamped into the new range (a previously empty list starts at 0) and
    /// the current page is presented again without animation. Returns `true` if the current index
    /// changed.
    pub fn set_containers(&mut self, containers: Vec<B::Container>) -> bool {
        let prev = self.current;
        self.containers = containers;
        self.current = self
            .containers
            .len()
            .checked_sub(1)
            .map(|last| prev.unwrap_or(0).min(last));
        self.presented = None;
        pdebug!(
            count = self.containers.len(),
            ?prev,
            current = ?self.current,
            "PageBridge::set_containers"
        );
        if let Some(index) = self.current {
            let direction = prev.map_or(NavigationDirection::Forward, |p| {
                NavigationDirection::between(p, index)
            });
            self.present(index, direction);
        }
        self.current != prev
    }

    /// Applies a programmatic index change (caller binding update).
    ///
    /// The index is clamped into range, the transition direction is `Forward` iff the new index
    /// is past the previous one, and the backend presents the page without animation. The
    /// page-change callback is not fired: the caller already knows.
    ///
    /// Returns the direction used, or `None` when there are no pages or nothing changed.
    pub fn apply_index(&mut self, index: usize) -> Option<NavigationDirection> {
        let prev = self.current?;
        let index = index.min(self.containers.len() - 1);
        if index == prev {
            return None;
        }
        let direction = NavigationDirection::between(prev, index);
        ptrace!(prev, index, ?direction, "PageBridge::apply_index");
        self.current = Some(index);
        self.present(index, direction);
        Some(direction)
    }

    /// Applies an index chosen through a secondary control (e.g. an indicator tap).
    ///
    /// Same path as [`PageBridge::apply_index`], but the change is reported through
    /// `on_page_change` since it did not originate from the caller.
    pub fn select(&mut self, index: usize) -> Option<NavigationDirection> {
        let direction = self.apply_index(index)?;
        if let Some(index) = self.current {
            self.options.notify_page_change(index);
        }
        Some(direction)
    }

    /// Suppresses bounce past the ends on a backend that scrolls inertially.
    ///
    /// The backend's scroll content keeps the current page one page extent from its origin, so
    /// an offset below that extent on the first page, or above it on the last, is overscroll.
    /// Returns the corrected offset when it must be forced back, `None` otherwise (including when
    /// `bounce` is enabled).
    pub fn suppress_bounce(&self, offset: Point, bounds: Size) -> Option<Point> {
        if self.options.bounce {
            return None;
        }
        let current = self.current?;
        let last = self.containers.len() - 1;
        let orientation = self.options.orientation;
        let extent = bounds.along(orientation);
        let along = offset.along(orientation);
        if (current == 0 && along < extent) || (current == last && along > extent) {
            let corrected = match orientation {
                Orientation::Horizontal => Point::new(extent, 0.0),
                Orientation::Vertical => Point::new(0.0, extent),
            };
            ptrace!(current, along, extent, "PageBridge::suppress_bounce");
            return Some(corrected);
        }
        None
    }

    fn present(&mut self, index: usize, direction: NavigationDirection) {
        let Some(container) = self.containers.get(index) else {
            return;
        };
        self.presented = Some(index);
        self.backend.present(container, direction, false);
    }
}

impl<B> PageBridge<B>
where
    B: PagingBackend,
    B::Container: PartialEq,
{
    /// Resolves a container to its position. `None` on a lookup miss.
    pub fn index_of(&self, container: &B::Container) -> Option<usize> {
        let index = self.containers.iter().position(|c| c == container);
        if index.is_none() {
            pwarn!("PageBridge: container not found");
        }
        index
    }

    /// The container before `container`, or `None` at the start (unless wrapping) or on a
    /// lookup miss.
    pub fn neighbor_before(&self, container: &B::Container) -> Option<&B::Container> {
        let index = self.index_of(container)?;
        self.neighbor_index_before(index)
            .and_then(|i| self.containers.get(i))
    }

    /// The container after `container`, or `None` at the end (unless wrapping) or on a lookup
    /// miss.
    pub fn neighbor_after(&self, container: &B::Container) -> Option<&B::Container> {
        let index = self.index_of(container)?;
        self.neighbor_index_after(index)
            .and_then(|i| self.containers.get(i))
    }

    /// Handles the backend's "transition finished" report.
    ///
    /// This is the only path by which backend-driven swipes reach the caller: a completed
    /// transition onto a different page writes the current index and fires `on_page_change`.
    pub fn on_transition_completed(
        &mut self,
        visible: &B::Container,
        completed: bool,
    ) -> TransitionOutcome {
        let presented = self.presented.take();
        if !completed {
            ptrace!("PageBridge: transition cancelled");
            return TransitionOutcome::Cancelled;
        }
        let Some(index) = self.index_of(visible) else {
            return TransitionOutcome::Unknown;
        };
        if self.current == Some(index) {
            if presented == Some(index) {
                ptrace!(index, "PageBridge: echo suppressed");
                return TransitionOutcome::Echo(index);
            }
            return TransitionOutcome::Unchanged(index);
        }
        ptrace!(index, prev = ?self.current, "PageBridge: transition committed");
        self.current = Some(index);
        self.options.notify_page_change(index);
        TransitionOutcome::Committed(index)
    }
}
