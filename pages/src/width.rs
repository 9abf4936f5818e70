/// Tracks the laid-out width of the viewport container.
///
/// A layout pass may report several widths (the container and each page measure themselves);
/// they are reduced by taking the maximum. [`WidthProbe::commit`] closes the pass and yields the
/// new width only when it differs from the last committed one, so an engine is updated exactly
/// once per real change (rotation, resize).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidthProbe {
    width: f32,
    pending: Option<f32>,
}

impl WidthProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last committed width; `0` before the first layout pass.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }

    /// Records one width reading for the current layout pass.
    pub fn report(&mut self, width: f32) {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
        self.pending = Some(self.pending.map_or(width, |w| w.max(width)));
    }

    /// Closes the layout pass. Returns the new width if it changed.
    pub fn commit(&mut self) -> Option<f32> {
        let width = self.pending.take()?;
        if width == self.width {
            return None;
        }
        pdebug!(width, prev = self.width, "WidthProbe::commit");
        self.width = width;
        Some(width)
    }

    /// Single-reading shorthand for `report` + `commit`.
    pub fn measure(&mut self, width: f32) -> Option<f32> {
        self.report(width);
        self.commit()
    }
}
