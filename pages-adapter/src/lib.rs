//! Adapter utilities for the `pages` crate.
//!
//! The `pages` crate is UI-agnostic and focuses on the paging math and the backend sync protocol.
//! This crate provides small, framework-neutral pieces an adapter needs on top of that:
//!
//! - [`PagerController`]: the scroll-offset transport (layout, pointer input, snap animation,
//!   indicator)
//! - [`BackendController`]: the native-backend transport (bridge plus indicator)
//! - Placement helpers for page content and the indicator
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod backend;
mod controller;
mod layout;
mod tween;


pub use backend::BackendController;
pub use controller::{DEFAULT_SNAP_DURATION_MS, PagerController};
pub use layout::{INDICATOR_PADDING, page_origin, place, visible_pages};
pub use tween::{Easing, Tween};
