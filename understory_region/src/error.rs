// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for fallible region operations.

use smallvec::CollectionAllocErr;
use thiserror::Error;

/// Failure of a region operation.
///
/// Regions only fail when their rectangle storage cannot grow; every other
/// input is normalized (degenerate rectangles become empty regions).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RegionError {
    /// The rectangle buffer could not be grown to hold `requested` boxes.
    #[error("failed to allocate storage for {requested} rectangles")]
    AllocationFailed {
        /// Total number of boxes the buffer needed to hold.
        requested: usize,
    },
}

impl RegionError {
    /// Map a `smallvec` growth failure, logging it once at the source.
    pub(crate) fn from_alloc(err: CollectionAllocErr, requested: usize) -> Self {
        log::warn!("region storage allocation failed for {requested} rectangles: {err:?}");
        Self::AllocationFailed { requested }
    }
}
