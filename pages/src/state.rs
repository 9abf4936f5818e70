/// A lightweight, serializable snapshot of a [`crate::PageGeometry`]'s private store.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingState {
    /// `None` when there are no pages.
    pub current_index: Option<usize>,
    /// Measured page extent along the paging axis; `0` until the first layout pass.
    pub page_width: f32,
    /// Translation accumulated by the in-flight drag; `0` when idle.
    pub drag_offset: f32,
}

impl PagingState {
    /// Sentinel reported by [`PagingState::index_or_marker`] when there are no pages.
    pub const EMPTY_INDEX: isize = -1;

    /// The current index, or [`PagingState::EMPTY_INDEX`] for an empty page set.
    pub fn index_or_marker(&self) -> isize {
        self.current_index
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(Self::EMPTY_INDEX)
    }
}
