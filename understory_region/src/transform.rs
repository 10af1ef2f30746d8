// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation and grow/shrink of regions.

use crate::error::RegionError;
use crate::region::Region;

/// Exclusive bound on the magnitude of grow/shrink amounts.
const MAX_GROW_SHRINK: u32 = 1 << 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Region {
    /// Move the region by `(dx, dy)`.
    ///
    /// Never allocates. Coordinates must stay within `i32`. Empty regions
    /// keep their all-zero extents.
    pub fn offset(&mut self, dx: i32, dy: i32) {
        if self.is_empty() {
            return;
        }
        for b in &mut self.rects {
            *b = b.translate(dx, dy);
        }
        self.extents = self.extents.translate(dx, dy);
    }

    /// Shrink the region by `dx` pixels on the left and right and `dy` pixels
    /// on the top and bottom. Negative amounts grow it instead.
    ///
    /// Shrinking keeps the pixels whose whole neighborhood of the given size
    /// lies in the region; growing adds every pixel within that distance. The
    /// work is `O(log |d|)` sweeps per axis. Amounts must stay below `2^30`
    /// in magnitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_region::{Rectangle, Region};
    ///
    /// let mut region = Region::from_rect(Rectangle::new(0, 0, 10, 10));
    /// region.grow_shrink(-2, -2).unwrap();
    /// assert!(region.rect_equal(&Rectangle::new(-2, -2, 14, 14)));
    /// ```
    pub fn grow_shrink(&mut self, dx: i32, dy: i32) -> Result<(), RegionError> {
        debug_assert!(
            dx.unsigned_abs() < MAX_GROW_SHRINK && dy.unsigned_abs() < MAX_GROW_SHRINK,
            "grow_shrink amounts ({dx}, {dy}) must be below 2^30 in magnitude"
        );
        if dx == 0 && dy == 0 {
            return Ok(());
        }
        log::trace!("grow_shrink by ({dx}, {dy}) on a region of {} boxes", self.len());

        let mut scratch = Self::new();
        let mut tmp = Self::new();
        if dx != 0 {
            let n = dx.unsigned_abs().saturating_mul(2);
            compress(self, &mut scratch, &mut tmp, n, Axis::X, dx < 0)?;
        }
        if dy != 0 {
            let n = dy.unsigned_abs().saturating_mul(2);
            compress(self, &mut scratch, &mut tmp, n, Axis::Y, dy < 0)?;
        }
        // Both passes extend or trim towards negative coordinates only.
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Magnitudes are documented to stay below 2^30."
        )]
        self.offset(dx.unsigned_abs() as i32, dy.unsigned_abs() as i32);
        Ok(())
    }
}

/// Shift a region towards negative coordinates along one axis.
fn shift_back(r: &mut Region, amount: u32, axis: Axis) {
    let d = 0_i32.wrapping_sub_unsigned(amount);
    match axis {
        Axis::X => r.offset(d, 0),
        Axis::Y => r.offset(0, d),
    }
}

fn combine(r: &mut Region, other: &Region, grow: bool) -> Result<(), RegionError> {
    if grow {
        r.union_with(other)
    } else {
        r.intersect_with(other)
    }
}

/// Replace `r` by the set of points `p` such that `p + m` lies in `r` for some
/// (`grow`) or every (shrink) `m` in `0..=n` along `axis`.
///
/// A point heads a run of length `2^i + k` iff it heads a run of length `2^i`
/// and the point `2^i` further heads a run of length `k`. So `s` holds the
/// runs of length `shift`, doubling each round, and its copies are folded
/// into `r` for every set bit of `n`. `s` and `t` are scratch regions.
fn compress(
    r: &mut Region,
    s: &mut Region,
    t: &mut Region,
    mut n: u32,
    axis: Axis,
    grow: bool,
) -> Result<(), RegionError> {
    let mut shift: u32 = 1;
    s.copy_from(r)?;
    while n != 0 {
        if n & shift != 0 {
            shift_back(r, shift, axis);
            combine(r, s, grow)?;
            n -= shift;
            if n == 0 {
                break;
            }
        }
        t.copy_from(s)?;
        shift_back(s, shift, axis);
        combine(s, t, grow)?;
        shift <<= 1;
    }
    Ok(())
}
