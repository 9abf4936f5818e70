use pages::Snap;

/// Interpolates the visible offset while the pager settles on a page.
///
/// Offsets follow the engine's convention (non-positive along the paging axis).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Animates a released drag from where the finger let go to the landing page.
    pub fn for_snap(snap: &Snap, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self::new(snap.from, snap.to, start_ms, duration_ms, easing)
    }

    fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.start_ms).min(self.duration_ms)
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        self.elapsed_ms(now_ms) as f32 / self.duration_ms as f32
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) == self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.sample(self.progress(now_ms))
    }

    /// Redirects a running animation to `new_to`, continuing from the current sample over the
    /// time that was left.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32) {
        let remaining = self.duration_ms - self.elapsed_ms(now_ms);
        *self = Self::new(self.sample(now_ms), new_to, now_ms, remaining, self.easing);
    }
}

/// Easing curve applied to the snap animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
    }
}
