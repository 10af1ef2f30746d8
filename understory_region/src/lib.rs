// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_region --heading-base-level=0

//! Understory Region: integer 2D areas as y-x banded rectangle lists.
//!
//! Understory Region is a building block for clipping and damage tracking.
//!
//! - Represent any pixel area as a minimal, sorted list of non-overlapping boxes.
//! - Combine areas with union, intersection, subtraction and XOR.
//! - Query by point, classify rectangles as inside/outside/partial, and clip scanline spans.
//! - Translate regions, and grow or shrink them by a pixel distance.
//!
//! Upstream code supplies rectangles (window geometry, widget allocations, clip masks) and
//! feeds the resulting rectangle list to whatever drawing API sets the actual clip.
//!
//! ## Representation
//!
//! A [`Region`] stores its boxes sorted by `y`, then `x`. Boxes that start on the same row form
//! a *band* and end on the same row too. Within a band boxes never touch, and two touching bands
//! whose boxes line up exactly are always merged. The result is canonical: two regions covering
//! the same pixels have identical box lists, which is why [`Region`] implements [`Eq`].
//!
//! Boxes are half-open, `[x1, x2) × [y1, y2)`. A region with a single box keeps it inline and
//! does not allocate.
//!
//! All boolean operators share one band sweep that walks both operands top to bottom,
//! emitting boxes band by band and coalescing as it goes.
//!
//! ## Errors
//!
//! The only failure is running out of memory while growing a region's storage; operations that
//! may grow return [`RegionError`]. Degenerate input rectangles are not errors, they produce
//! empty regions.
//!
//! ## Features
//!
//! - `kurbo`: conversions to and from [`kurbo::Rect`](https://docs.rs/kurbo). Enables `libm`.
//! - `std` / `libm`: forwarded to `kurbo` when it is enabled.
//!
//! # Example
//!
//! ```rust
//! use understory_region::{Overlap, Rectangle, Region};
//!
//! // A window with a dialog on top: repaint only what is still visible.
//! let mut visible = Region::from_rect(Rectangle::new(0, 0, 100, 80));
//! let dialog = Region::from_rect(Rectangle::new(30, 20, 40, 30));
//! visible.subtract(&dialog).unwrap();
//!
//! assert_eq!(visible.clip_box(), Rectangle::new(0, 0, 100, 80));
//! assert!(!visible.contains_point(40, 30));
//! assert_eq!(visible.classify_rect(&Rectangle::new(25, 15, 10, 10)), Overlap::Part);
//!
//! // Four boxes: above, left of, right of and below the dialog.
//! assert_eq!(visible.to_rectangle_list().len(), 4);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coalesce;
mod error;
#[cfg(feature = "kurbo")]
mod kurbo_interop;
mod ops;
mod query;
mod region;
mod spans;
mod sweep;
mod transform;
mod types;

pub use error::RegionError;
pub use region::Region;
pub use types::{Overlap, Rectangle, RegionBox, Span};
