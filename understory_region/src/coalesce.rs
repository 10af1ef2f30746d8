// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merging of vertically adjacent bands with identical columns.

use crate::region::{BoxBuf, band_end, same_columns};

/// Try to merge the band starting at `cur_start` into the one at `prev_start`.
///
/// `prev_start..cur_start` must be exactly one band. Everything from
/// `cur_start` to the end of `rects` was appended since, usually a single
/// band; several bands are only appended at once when the sweep flushes the
/// tail of one operand, and those are already coalesced among themselves.
///
/// If the first new band touches the previous one and has boxes at the same
/// x positions, the previous boxes are stretched down over it and its boxes
/// are removed, shifting any later bands down.
///
/// Returns where the most recently appended band now starts, which is the
/// `prev_start` for the next call.
pub(crate) fn coalesce(rects: &mut BoxBuf, prev_start: usize, cur_start: usize) -> usize {
    let end = rects.len();
    debug_assert!(
        prev_start <= cur_start && cur_start < end,
        "coalesce called with bad band indices {prev_start}..{cur_start} of {end}"
    );
    let cur_end = band_end(rects, cur_start);
    let cur_count = cur_end - cur_start;

    let mut last_start = cur_start;
    if cur_end != end {
        // Several bands were appended; remember where the last one starts.
        last_start = end - 1;
        while rects[last_start - 1].y1 == rects[last_start].y1 {
            last_start -= 1;
        }
    }

    if cur_count != cur_start - prev_start {
        return last_start;
    }
    // The bands must touch vertically.
    if rects[prev_start].y2 != rects[cur_start].y1 {
        return last_start;
    }
    if !same_columns(&rects[prev_start..cur_start], &rects[cur_start..cur_end]) {
        return last_start;
    }

    let new_y2 = rects[cur_start].y2;
    for b in &mut rects[prev_start..cur_start] {
        b.y2 = new_y2;
    }
    if cur_end == end {
        // Only one band was added and it is gone now.
        last_start = prev_start;
    } else {
        rects.copy_within(cur_end..end, cur_start);
        last_start -= cur_count;
    }
    rects.truncate(end - cur_count);
    last_start
}
