use alloc::boxed::Box;

/// A control that reflects (and may change) the current page, e.g. a row of dots.
///
/// Custom indicators are used as-is: the pager only pushes the current page into them and never
/// touches their styling or page count.
pub trait PageIndicator: core::fmt::Debug {
    fn page_count(&self) -> usize;

    fn current_page(&self) -> Option<usize>;

    /// Reflects a new current page. Out-of-range values are ignored.
    fn set_current_page(&mut self, index: usize);

    /// Handles a tap on dot/segment `position`.
    ///
    /// Returns the page to move to, or `None` when the position is out of range or already
    /// current. The returned page should go through the pager's programmatic index path, which
    /// then reflects it back here.
    fn tap(&self, position: usize) -> Option<usize> {
        if position >= self.page_count() {
            pwarn!(
                position,
                page_count = self.page_count(),
                "PageIndicator: tap out of range"
            );
            return None;
        }
        (self.current_page() != Some(position)).then_some(position)
    }

    /// Moves one page forward or backward (the tap-left/tap-right halves of a compact control).
    fn step(&self, forward: bool) -> Option<usize> {
        let current = self.current_page()?;
        let next = if forward {
            current.checked_add(1).filter(|&i| i < self.page_count())?
        } else {
            current.checked_sub(1)?
        };
        self.tap(next)
    }
}

/// One dot of a [`DotIndicator`], in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// The default indicator: one dot per page, page count fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotIndicator {
    page_count: usize,
    current: Option<usize>,
}

impl DotIndicator {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            current: (page_count > 0).then_some(0),
        }
    }

    pub fn dots(&self) -> impl ExactSizeIterator<Item = Dot> + '_ {
        (0..self.page_count).map(|index| Dot {
            index,
            active: self.current == Some(index),
        })
    }
}

impl PageIndicator for DotIndicator {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn current_page(&self) -> Option<usize> {
        self.current
    }

    fn set_current_page(&mut self, index: usize) {
        if index < self.page_count {
            self.current = Some(index);
        }
    }
}

/// Resolves the indicator a pager should use: the caller's instance if any, otherwise a
/// [`DotIndicator`] sized for `page_count`.
pub fn indicator_or_default(
    custom: Option<Box<dyn PageIndicator>>,
    page_count: usize,
) -> Box<dyn PageIndicator> {
    custom.unwrap_or_else(|| Box::new(DotIndicator::new(page_count)))
}
