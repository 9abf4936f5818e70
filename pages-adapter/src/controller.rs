use alloc::boxed::Box;
use core::ops::Range;

use pages::{
    DragGesture, DragUpdate, EdgeInsets, NavigationDirection, PageGeometry, PageIndicator,
    PagingOptions, Point, PointerEvent, Size, Snap, WidthProbe, indicator_or_default,
};

use crate::{Easing, INDICATOR_PADDING, Tween, page_origin, place, visible_pages};

/// Default duration of the snap animation after a drag is released.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 250;

/// A framework-neutral controller for the scroll-offset transport: pages laid out side by side
/// and shifted by an offset that follows the user's drag.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_layout` when the viewport is (re)measured
/// - `on_pointer` for raw pointer events (or `on_drag_changed`/`on_drag_ended` when the UI
///   toolkit already recognizes drags)
/// - `tick(now_ms)` each frame while `is_animating()` (for the snap animation)
///
/// and render pages `visible_range()` at `page_origin(i)`.
#[derive(Debug)]
pub struct PagerController {
    options: PagingOptions,
    geometry: PageGeometry,
    gesture: DragGesture,
    width: WidthProbe,
    viewport: Size,
    indicator: Option<Box<dyn PageIndicator>>,
    tween: Option<Tween>,
    visible_offset: f32,
    snap_duration_ms: u64,
    easing: Easing,
}

impl PagerController {
    /// Creates a controller for `page_count` pages.
    ///
    /// When `options.show_indicator` is set, a default dot indicator is created here, once, with
    /// its page count fixed to `page_count`. Use [`PagerController::with_indicator`] to supply
    /// your own instead.
    pub fn new(options: PagingOptions, page_count: usize) -> Self {
        let geometry = PageGeometry::new(&options, page_count);
        let mut indicator = options
            .show_indicator
            .then(|| indicator_or_default(None, page_count));
        if let (Some(indicator), Some(index)) = (indicator.as_mut(), geometry.current_index()) {
            indicator.set_current_page(index);
        }
        Self {
            gesture: DragGesture::new(options.orientation),
            geometry,
            width: WidthProbe::new(),
            viewport: Size::ZERO,
            indicator,
            tween: None,
            visible_offset: 0.0,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            easing: Easing::default(),
            options,
        }
    }

    /// Uses a caller-owned indicator as-is (only its current page is updated).
    ///
    /// Ignored when `show_indicator` is off.
    pub fn with_indicator(mut self, mut indicator: Box<dyn PageIndicator>) -> Self {
        if self.options.show_indicator {
            if let Some(index) = self.current_index() {
                indicator.set_current_page(index);
            }
            self.indicator = Some(indicator);
        } else {
            pwarn!("PagerController: show_indicator is off, custom indicator ignored");
        }
        self
    }

    pub fn with_snap_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.snap_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn with_gesture(mut self, gesture: DragGesture) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn options(&self) -> &PagingOptions {
        &self.options
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn indicator(&self) -> Option<&dyn PageIndicator> {
        self.indicator.as_deref()
    }

    pub fn page_count(&self) -> usize {
        self.geometry.page_count()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.geometry.current_index()
    }

    /// The offset to render with: mid-snap this is the animated value, otherwise the engine's.
    pub fn visible_offset(&self) -> f32 {
        self.visible_offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            self.visible_offset = self.geometry.offset();
        }
    }

    /// Call this when the viewport is laid out.
    ///
    /// The extent along the paging axis becomes the page width. Returns `true` if it changed, in
    /// which case any snap animation is dropped and offsets are recomputed.
    pub fn on_layout(&mut self, viewport: Size) -> bool {
        self.viewport = viewport;
        let Some(extent) = self.width.measure(viewport.along(self.options.orientation)) else {
            return false;
        };
        self.geometry.set_page_width(extent);
        self.tween = None;
        self.visible_offset = self.geometry.offset();
        true
    }

    /// Feeds a raw pointer event through the drag recognizer.
    ///
    /// Returns the snap when the event released a drag.
    pub fn on_pointer(&mut self, event: PointerEvent, now_ms: u64) -> Option<Snap> {
        match self.gesture.handle(event)? {
            DragUpdate::Changed { translation } => {
                self.on_drag_changed(translation);
                None
            }
            DragUpdate::Ended {
                predicted_end_translation,
                ..
            } => self.on_drag_ended(predicted_end_translation, now_ms),
        }
    }

    /// Applies a drag translation. This cancels any active snap animation.
    pub fn on_drag_changed(&mut self, translation: f32) -> f32 {
        self.tween = None;
        self.visible_offset = self.geometry.on_drag_changed(translation);
        self.visible_offset
    }

    /// Releases the drag and starts the snap animation.
    ///
    /// When the snap lands on a new page the indicator is updated and `on_page_change` fires.
    pub fn on_drag_ended(&mut self, predicted_end_translation: f32, now_ms: u64) -> Option<Snap> {
        let snap = self.geometry.on_drag_ended(predicted_end_translation)?;
        ptrace!(?snap, now_ms, "PagerController: snap");
        self.tween = (snap.from != snap.to)
            .then(|| Tween::for_snap(&snap, now_ms, self.snap_duration_ms, self.easing));
        self.visible_offset = snap.from;
        if snap.changed_page() {
            self.reflect(snap.index);
            self.options.notify_page_change(snap.index);
        }
        Some(snap)
    }

    /// Advances the snap animation.
    ///
    /// Returns the new visible offset while animating, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        self.visible_offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.visible_offset)
    }

    /// Jumps to `index` (clamped) without animation, as for a caller binding update.
    ///
    /// `on_page_change` is not fired.
    pub fn set_current_page(&mut self, index: usize) -> Option<NavigationDirection> {
        let direction = self.geometry.set_index(index)?;
        self.tween = None;
        self.visible_offset = self.geometry.offset();
        if let Some(index) = self.current_index() {
            self.reflect(index);
        }
        Some(direction)
    }

    /// Moves to `index` (clamped) with the snap animation. `on_page_change` is not fired.
    ///
    /// A snap already in flight is redirected from wherever it currently is.
    pub fn animate_to_page(&mut self, index: usize, now_ms: u64) -> Option<NavigationDirection> {
        let direction = self.geometry.set_index(index)?;
        let to = self.geometry.offset();
        if let Some(tween) = self.tween.as_mut() {
            tween.retarget(now_ms, to);
        } else {
            self.tween = Some(Tween::new(
                self.visible_offset,
                to,
                now_ms,
                self.snap_duration_ms,
                self.easing,
            ));
        }
        if let Some(index) = self.current_index() {
            self.reflect(index);
        }
        Some(direction)
    }

    /// Handles a tap on indicator position `position`.
    ///
    /// Goes through the programmatic path and reports the change through `on_page_change`.
    /// Returns the new index.
    pub fn tap_indicator(&mut self, position: usize) -> Option<usize> {
        let target = self.indicator.as_ref()?.tap(position)?;
        self.set_current_page(target)?;
        let index = self.current_index()?;
        self.options.notify_page_change(index);
        Some(index)
    }

    /// Applies a rebuilt page set's count.
    ///
    /// The indicator keeps the page count it was created with.
    pub fn set_page_count(&mut self, page_count: usize) -> bool {
        let changed = self.geometry.set_page_count(page_count);
        self.tween = None;
        self.visible_offset = self.geometry.offset();
        if let Some(index) = self.current_index() {
            self.reflect(index);
        }
        changed
    }

    /// Pages to render this frame.
    pub fn visible_range(&self) -> Range<usize> {
        visible_pages(
            self.page_count(),
            self.geometry.page_width(),
            self.visible_offset,
        )
    }

    /// Origin of page `index` inside the viewport at the visible offset.
    pub fn page_origin(&self, index: usize) -> Point {
        page_origin(
            index,
            self.geometry.page_width(),
            self.visible_offset,
            self.options.orientation,
        )
    }

    /// Origin of page `index`'s content of size `content`, honoring content alignment and insets.
    pub fn content_origin(&self, index: usize, content: Size) -> Point {
        let page = self.page_origin(index);
        let inner = place(
            self.options.content_alignment,
            self.viewport,
            content,
            self.options.insets,
        );
        Point::new(page.x + inner.x, page.y + inner.y)
    }

    /// Origin of the indicator of size `size`, or `None` when no indicator is shown.
    pub fn indicator_origin(&self, size: Size) -> Option<Point> {
        self.indicator.as_ref()?;
        Some(place(
            self.options.indicator_alignment,
            self.viewport,
            size,
            EdgeInsets::all(INDICATOR_PADDING),
        ))
    }

    fn reflect(&mut self, index: usize) {
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.set_current_page(index);
        }
    }
}
