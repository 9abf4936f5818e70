use crate::MAX_STATIC_PAGES;

/// Errors raised while building a page list.
///
/// Everything else in this crate absorbs degenerate input (empty page sets, unmeasured widths,
/// stale containers) instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PagesError {
    #[error("a static page list supports at most {max} pages, got {count}")]
    TooManyStaticPages { count: usize, max: usize },
    #[error("a static page list needs at least one page")]
    NoStaticPages,
}

impl PagesError {
    pub(crate) fn check_static_arity(count: usize) -> Result<(), Self> {
        match count {
            0 => Err(Self::NoStaticPages),
            n if n > MAX_STATIC_PAGES => Err(Self::TooManyStaticPages {
                count: n,
                max: MAX_STATIC_PAGES,
            }),
            _ => Ok(()),
        }
    }
}
