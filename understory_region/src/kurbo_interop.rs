// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between integer regions and [`kurbo`] rectangles.

use kurbo::Rect;

use crate::region::Region;
use crate::types::RegionBox;

impl From<RegionBox> for Rect {
    #[inline]
    fn from(b: RegionBox) -> Self {
        Self::new(
            f64::from(b.x1),
            f64::from(b.y1),
            f64::from(b.x2),
            f64::from(b.y2),
        )
    }
}

impl RegionBox {
    /// The smallest integer box covering `rect`.
    ///
    /// Edges are rounded outward and saturate at the `i32` range. The
    /// rectangle is normalized first, so inverted rectangles are accepted.
    pub fn from_kurbo_outer(rect: Rect) -> Self {
        Self::new(
            floor_i32(rect.x0.min(rect.x1)),
            floor_i32(rect.y0.min(rect.y1)),
            ceil_i32(rect.x0.max(rect.x1)),
            ceil_i32(rect.y0.max(rect.y1)),
        )
    }
}

impl Region {
    /// Create a region covering every pixel touched by `rect`.
    pub fn from_kurbo_rect(rect: Rect) -> Self {
        Self::from_box(RegionBox::from_kurbo_outer(rect))
    }

    /// Iterate the region's boxes as [`kurbo::Rect`]s.
    pub fn kurbo_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.rects.iter().map(|&b| Rect::from(b))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Out-of-range values are saturated by the cast."
)]
#[inline]
fn floor_i32(v: f64) -> i32 {
    let t = v as i32;
    // Round towards -∞ (the cast above has already truncated).
    if f64::from(t) > v { t.saturating_sub(1) } else { t }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Out-of-range values are saturated by the cast."
)]
#[inline]
fn ceil_i32(v: f64) -> i32 {
    let t = v as i32;
    if f64::from(t) < v { t.saturating_add(1) } else { t }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rectangle;
    use alloc::vec::Vec;

    #[test]
    fn rounds_outward() {
        let b = RegionBox::from_kurbo_outer(Rect::new(0.5, -0.5, 9.2, 10.0));
        assert_eq!(b, RegionBox::new(0, -1, 10, 10));

        let inverted = RegionBox::from_kurbo_outer(Rect::new(9.2, 10.0, 0.5, -0.5));
        assert_eq!(inverted, b);
    }

    #[test]
    fn saturates_out_of_range() {
        let b = RegionBox::from_kurbo_outer(Rect::new(-1e20, -1e20, 1e20, 1e20));
        assert_eq!(b, RegionBox::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX));

        // Sizes of the saturated region clamp instead of overflowing.
        let region = Region::from_kurbo_rect(Rect::new(-1e20, -1e20, 1e20, 1e20));
        let expected = Rectangle::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(region.clip_box(), expected);
        assert_eq!(region.to_rectangle_list(), [expected]);
    }

    #[test]
    fn region_round_trip() {
        let region = Region::from_kurbo_rect(Rect::new(1.0, 2.0, 3.5, 4.0));
        assert_eq!(region.extents(), RegionBox::new(1, 2, 4, 4));
        let rects: Vec<_> = region.kurbo_rects().collect();
        assert_eq!(rects, [Rect::new(1.0, 2.0, 4.0, 4.0)]);
        assert!(Region::from_kurbo_rect(Rect::new(1.0, 1.0, 1.0, 5.0)).is_empty());
    }
}
