use alloc::vec::Vec;
use core::ops::Index;

use crate::PagesError;

/// The largest number of pages a static page list accepts.
pub const MAX_STATIC_PAGES: usize = 10;

/// One page of a [`PageSet`]: caller-supplied content plus the position it was declared at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<P> {
    position: usize,
    content: P,
}

impl<P> Page<P> {
    /// Zero-based declaration (or source collection) position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn content(&self) -> &P {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut P {
        &mut self.content
    }

    pub fn into_content(self) -> P {
        self.content
    }
}

/// An ordered, immutable list of renderable pages.
///
/// Build one per render pass with [`PageSet::from_static`] (or the [`static_pages!`](crate::static_pages)
/// macro) for a fixed list of contents, or [`PageSet::from_model`] to map a data collection
/// through a per-item renderer. Rebuild it whenever the declared children or the source data
/// change, then hand the new count to the engine/bridge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSet<P> {
    pages: Vec<Page<P>>,
}

impl<P> PageSet<P> {
    /// Builds a page set from a fixed, inline-declared list of contents.
    ///
    /// Accepts between 1 and [`MAX_STATIC_PAGES`] items; declaration order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`PagesError::NoStaticPages`] for an empty list and
    /// [`PagesError::TooManyStaticPages`] past the supported arity.
    pub fn from_static(contents: impl IntoIterator<Item = P>) -> Result<Self, PagesError> {
        let pages: Vec<Page<P>> = contents
            .into_iter()
            .enumerate()
            .map(|(position, content)| Page { position, content })
            .collect();
        if let Err(err) = PagesError::check_static_arity(pages.len()) {
            pwarn!(count = pages.len(), "PageSet::from_static: rejected");
            return Err(err);
        }
        pdebug!(count = pages.len(), "PageSet::from_static");
        Ok(Self { pages })
    }

    /// Builds one page per element of `items`, in source order, by calling
    /// `render(position, item)` eagerly for each.
    pub fn from_model<T, I>(items: I, mut render: impl FnMut(usize, T) -> P) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = items.into_iter();
        let mut pages = Vec::with_capacity(iter.len());
        for (position, item) in iter.enumerate() {
            pages.push(Page {
                position,
                content: render(position, item),
            });
        }
        pdebug!(count = pages.len(), "PageSet::from_model");
        Self { pages }
    }

    pub fn empty() -> Self {
        Self { pages: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page<P>> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Page<P>> {
        self.pages.iter()
    }

    /// Iterates page contents in order.
    pub fn contents(&self) -> impl ExactSizeIterator<Item = &P> + '_ {
        self.pages.iter().map(Page::content)
    }

    /// Maps every page to a backend container, preserving order.
    ///
    /// This is how a [`PageBridge`](crate::PageBridge) container list is usually produced.
    pub fn map_containers<C>(&self, mut make: impl FnMut(&Page<P>) -> C) -> Vec<C> {
        self.pages.iter().map(&mut make).collect()
    }
}

impl<P> Default for PageSet<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> Index<usize> for PageSet<P> {
    type Output = Page<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pages[index]
    }
}

impl<'a, P> IntoIterator for &'a PageSet<P> {
    type Item = &'a Page<P>;
    type IntoIter = core::slice::Iter<'a, Page<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl<P> IntoIterator for PageSet<P> {
    type Item = Page<P>;
    type IntoIter = alloc::vec::IntoIter<Page<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}
