//! A headless paging engine.
//!
//! For adapter-level utilities (animated snapping, controllers, placement), see the
//! `pages-adapter` crate.
//!
//! This crate holds the parts of a paging view that have real logic in them: the drag-to-page
//! geometry (continuous drag tracking, snap decision, edge clamping, bounce), the index
//! synchronization protocol with a native paging backend (neighbor resolution with optional
//! wraparound, transition direction, echo suppression), page list builders and a page indicator.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the measured viewport width (or height, for vertical paging)
//! - pointer events, or drag translations it already recognized
//! - page content to render, and (optionally) a paging backend
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bridge;
mod error;
mod geometry;
mod gesture;
mod indicator;
mod options;
mod page_set;
mod state;
mod types;
mod width;

#[cfg(test)]
mod tests;

pub use bridge::{PageBridge, PagingBackend, TransitionOutcome};
pub use error::PagesError;
pub use geometry::{PageGeometry, Snap};
pub use gesture::{
    DECELERATION_RATE, DEFAULT_MIN_DRAG_DISTANCE, DragGesture, DragUpdate, PointerEvent,
    PointerId, project,
};
pub use indicator::{Dot, DotIndicator, PageIndicator, indicator_or_default};
pub use options::{OnPageChange, PagingOptions};
pub use page_set::{MAX_STATIC_PAGES, Page, PageSet};
pub use state::PagingState;
pub use types::{
    Alignment, EdgeInsets, NavigationDirection, Orientation, Point, Size, TransitionStyle,
};
pub use width::WidthProbe;

#[doc(hidden)]
pub use alloc::boxed::Box as __Box;
