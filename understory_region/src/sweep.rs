// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The band sweep shared by all boolean operators.
//!
//! Together the two operands cover an area that the sweep cuts into
//! horizontal bands where points belong to one operand only or to both. A
//! band covered by only one operand goes to that operand's non-overlap
//! handler (if any); a band covered by both goes to the overlap handler,
//! which clips and emits boxes for the whole band. After each band the output
//! is coalesced with the band before it.

use crate::coalesce::coalesce;
use crate::error::RegionError;
use crate::region::{BoxBuf, band_end, reserve};
use crate::types::RegionBox;

/// Handles a band where both operands have boxes.
///
/// Receives the current band of each operand and the shared `[y1, y2)` range.
pub(crate) type OverlapFn =
    fn(&mut BoxBuf, &[RegionBox], &[RegionBox], i32, i32) -> Result<(), RegionError>;

/// Handles a band where only one operand has boxes, restricted to `[y1, y2)`.
pub(crate) type NonOverlapFn = fn(&mut BoxBuf, &[RegionBox], i32, i32) -> Result<(), RegionError>;

/// Band handlers describing one boolean operator.
///
/// A missing non-overlap handler means that operand contributes nothing
/// outside the shared bands.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Operator {
    pub(crate) overlap: OverlapFn,
    pub(crate) non_overlap_a: Option<NonOverlapFn>,
    pub(crate) non_overlap_b: Option<NonOverlapFn>,
}

/// Combine two banded box lists into a new banded, coalesced list.
///
/// Both operands are only read through the borrowed slices and the result is
/// written to a fresh buffer. The caller swaps it in afterwards, so the
/// destination may be one of the operands and its old storage is released
/// only once the new one is complete.
pub(crate) fn sweep(a: &[RegionBox], b: &[RegionBox], op: &Operator) -> Result<BoxBuf, RegionError> {
    let mut out = BoxBuf::new();
    // Enough for the common cases without reallocating mid-sweep.
    reserve(&mut out, a.len().max(b.len()).saturating_mul(2))?;

    // For a band of one operand only, `ybot` is the bottom of the last
    // intersection and clips the band's top, while `ytop` is the top of the
    // next intersection and clips its bottom. For a shared band, `ytop` and
    // `ybot` bound it.
    let mut ybot = match (a.first(), b.first()) {
        (Some(r1), Some(r2)) => r1.y1.min(r2.y1),
        _ => i32::MIN,
    };

    let mut i1 = 0;
    let mut i2 = 0;
    // Band starts in `out` are indices since the buffer may move when it grows.
    let mut prev_band = 0;

    while i1 < a.len() && i2 < b.len() {
        let r1 = a[i1];
        let r2 = b[i2];
        let end1 = band_end(a, i1);
        let end2 = band_end(b, i2);

        // First the part of whichever band starts higher, down to where the
        // other band starts. Only one source band is handled per iteration,
        // even when an operand has several bands before the next overlap.
        let mut cur_band = out.len();
        let ytop = if r1.y1 < r2.y1 {
            let top = r1.y1.max(ybot);
            let bot = r1.y2.min(r2.y1);
            if top < bot
                && let Some(f) = op.non_overlap_a
            {
                f(&mut out, &a[i1..end1], top, bot)?;
            }
            r2.y1
        } else if r2.y1 < r1.y1 {
            let top = r2.y1.max(ybot);
            let bot = r2.y2.min(r1.y1);
            if top < bot
                && let Some(f) = op.non_overlap_b
            {
                f(&mut out, &b[i2..end2], top, bot)?;
            }
            r1.y1
        } else {
            r1.y1
        };
        if out.len() != cur_band {
            prev_band = coalesce(&mut out, prev_band, cur_band);
        }

        // Then the shared part, if the bands intersect at all.
        ybot = r1.y2.min(r2.y2);
        cur_band = out.len();
        if ybot > ytop {
            (op.overlap)(&mut out, &a[i1..end1], &b[i2..end2], ytop, ybot)?;
        }
        if out.len() != cur_band {
            prev_band = coalesce(&mut out, prev_band, cur_band);
        }

        // Move past bands that are finished.
        if r1.y2 == ybot {
            i1 = end1;
        }
        if r2.y2 == ybot {
            i2 = end2;
        }
    }

    // Whichever operand still has boxes left owns everything below.
    let cur_band = out.len();
    if i1 < a.len() {
        if let Some(f) = op.non_overlap_a {
            flush(&mut out, a, i1, ybot, f)?;
        }
    } else if i2 < b.len()
        && let Some(f) = op.non_overlap_b
    {
        flush(&mut out, b, i2, ybot, f)?;
    }
    if out.len() != cur_band {
        coalesce(&mut out, prev_band, cur_band);
    }

    // Keep regions from growing without bound, and put results of at most
    // one box back in the inline slot.
    if out.len() <= 1 || out.len() < out.capacity() / 2 {
        let len = out.len();
        out.try_grow(len)
            .map_err(|err| RegionError::from_alloc(err, len))?;
    }
    Ok(out)
}

/// Feed the remaining bands of one operand to its non-overlap handler.
fn flush(
    out: &mut BoxBuf,
    rects: &[RegionBox],
    mut start: usize,
    ybot: i32,
    f: NonOverlapFn,
) -> Result<(), RegionError> {
    while start < rects.len() {
        let end = band_end(rects, start);
        f(out, &rects[start..end], rects[start].y1.max(ybot), rects[start].y2)?;
        start = end;
    }
    Ok(())
}
