use crate::{Orientation, PageGeometry, Point, Snap};

/// Distance a pointer must travel before a press becomes a drag.
pub const DEFAULT_MIN_DRAG_DISTANCE: f32 = 10.0;

/// Per-millisecond velocity retention used to project where a released drag would come to rest.
pub const DECELERATION_RATE: f32 = 0.998;

pub type PointerId = u64;

/// A low-level pointer event delivered by the host UI layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down {
        id: PointerId,
        position: Point,
        time_ms: u64,
    },
    Move {
        id: PointerId,
        position: Point,
        time_ms: u64,
    },
    Up {
        id: PointerId,
        position: Point,
        time_ms: u64,
    },
    Cancel {
        id: PointerId,
    },
}

/// What a recognized drag reports to the geometry engine.
///
/// Translations are measured along the paging axis from where the pointer went down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    Changed {
        translation: f32,
    },
    Ended {
        translation: f32,
        predicted_end_translation: f32,
    },
}

impl DragUpdate {
    /// Feeds this update into `geometry`.
    ///
    /// Returns the resulting snap for `Ended`, `None` for `Changed` (or when there are no pages).
    pub fn apply(self, geometry: &mut PageGeometry) -> Option<Snap> {
        match self {
            Self::Changed { translation } => {
                geometry.on_drag_changed(translation);
                None
            }
            Self::Ended {
                predicted_end_translation,
                ..
            } => geometry.on_drag_ended(predicted_end_translation),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    position: Point,
    time_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveDrag {
    id: PointerId,
    start: Point,
    prev: Option<Sample>,
    last: Sample,
    recognized: bool,
}

impl ActiveDrag {
    fn push(&mut self, position: Point, time_ms: u64) {
        if time_ms > self.last.time_ms {
            self.prev = Some(self.last);
        }
        self.last = Sample { position, time_ms };
    }

    fn velocity(&self, orientation: Orientation) -> f32 {
        let Some(prev) = self.prev else {
            return 0.0;
        };
        let dt = self.last.time_ms.saturating_sub(prev.time_ms);
        if dt == 0 {
            return 0.0;
        }
        (self.last.position.along(orientation) - prev.position.along(orientation)) / dt as f32
    }
}

/// Turns a single-pointer event stream into drag change/end updates along one axis.
///
/// Only the first pointer that goes down is tracked; others are ignored until it lifts. A press
/// that never travels [`DEFAULT_MIN_DRAG_DISTANCE`] (or the configured distance) is a tap and
/// produces no updates.
#[derive(Clone, Debug)]
pub struct DragGesture {
    orientation: Orientation,
    min_distance: f32,
    active: Option<ActiveDrag>,
}

impl DragGesture {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            min_distance: DEFAULT_MIN_DRAG_DISTANCE,
            active: None,
        }
    }

    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance.max(0.0);
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `true` once the tracked pointer has travelled far enough to count as a drag.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some_and(|a| a.recognized)
    }

    pub fn handle(&mut self, event: PointerEvent) -> Option<DragUpdate> {
        match event {
            PointerEvent::Down {
                id,
                position,
                time_ms,
            } => {
                if self.active.is_none() {
                    self.active = Some(ActiveDrag {
                        id,
                        start: position,
                        prev: None,
                        last: Sample { position, time_ms },
                        recognized: false,
                    });
                }
                None
            }
            PointerEvent::Move {
                id,
                position,
                time_ms,
            } => {
                let orientation = self.orientation;
                let min_distance = self.min_distance;
                let active = self.active.as_mut().filter(|a| a.id == id)?;
                active.push(position, time_ms);
                if !active.recognized {
                    let dx = position.x - active.start.x;
                    let dy = position.y - active.start.y;
                    if dx * dx + dy * dy < min_distance * min_distance {
                        return None;
                    }
                    active.recognized = true;
                }
                Some(DragUpdate::Changed {
                    translation: position.along(orientation) - active.start.along(orientation),
                })
            }
            PointerEvent::Up {
                id,
                position,
                time_ms,
            } => {
                let mut active = self.take_active(id)?;
                if !active.recognized {
                    return None;
                }
                active.push(position, time_ms);
                let translation =
                    position.along(self.orientation) - active.start.along(self.orientation);
                let predicted_end_translation =
                    translation + project(active.velocity(self.orientation));
                ptrace!(translation, predicted_end_translation, "DragGesture: ended");
                Some(DragUpdate::Ended {
                    translation,
                    predicted_end_translation,
                })
            }
            PointerEvent::Cancel { id } => {
                let active = self.take_active(id)?;
                if !active.recognized {
                    return None;
                }
                let translation = active.last.position.along(self.orientation)
                    - active.start.along(self.orientation);
                ptrace!(translation, "DragGesture: cancelled");
                Some(DragUpdate::Ended {
                    translation,
                    predicted_end_translation: 0.0,
                })
            }
        }
    }

    fn take_active(&mut self, id: PointerId) -> Option<ActiveDrag> {
        if self.active.is_some_and(|a| a.id == id) {
            self.active.take()
        } else {
            None
        }
    }
}

/// Distance travelled by a release velocity (units per ms) decaying at [`DECELERATION_RATE`].
pub fn project(velocity: f32) -> f32 {
    velocity * DECELERATION_RATE / (1.0 - DECELERATION_RATE)
}
