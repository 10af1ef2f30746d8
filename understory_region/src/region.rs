// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `Region` store: construction, copying, accessors and extents.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::error::RegionError;
use crate::types::{Rectangle, RegionBox};

/// Rectangle storage of a region.
///
/// One box lives inline, so single-rectangle regions never touch the heap.
pub(crate) type BoxBuf = SmallVec<[RegionBox; 1]>;

/// Make room for `additional` more boxes without panicking on failure.
pub(crate) fn reserve(buf: &mut BoxBuf, additional: usize) -> Result<(), RegionError> {
    let requested = buf.len().saturating_add(additional);
    buf.try_reserve(additional)
        .map_err(|err| RegionError::from_alloc(err, requested))
}

/// Append a box, doubling the buffer when it is full.
///
/// Growth never moves boxes relative to each other, so indices recorded
/// earlier (band starts) stay valid.
#[inline]
pub(crate) fn push_box(buf: &mut BoxBuf, b: RegionBox) -> Result<(), RegionError> {
    debug_assert!(!b.is_empty(), "attempted to store a degenerate box {b:?}");
    if buf.len() == buf.capacity() {
        let additional = buf.len().max(1);
        log::trace!(
            "growing region buffer from {} to {} boxes",
            buf.capacity(),
            buf.len() + additional
        );
        reserve(buf, additional)?;
    }
    buf.push(b);
    Ok(())
}

/// An arbitrary area of the integer plane, stored as y-x banded boxes.
///
/// Boxes are sorted by `y1` and then `x1`. Boxes sharing a `y1` form a
/// band and share the same `y2`. Boxes in a band never touch, and two
/// vertically adjacent bands never have identical x-partitions (they would
/// have been merged). The representation of an area is therefore unique, so
/// `==` compares covered areas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub(crate) extents: RegionBox,
    pub(crate) rects: BoxBuf,
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl Region {
    /// Create an empty region. Does not allocate.
    pub fn new() -> Self {
        Self {
            extents: RegionBox::ZERO,
            rects: BoxBuf::new(),
        }
    }

    /// Create a region covering `rect`.
    ///
    /// Rectangles with zero or negative width or height yield an empty region.
    pub fn from_rect(rect: Rectangle) -> Self {
        Self::from_box(rect.into())
    }

    /// Create a region covering `b`; degenerate boxes yield an empty region.
    pub fn from_box(b: RegionBox) -> Self {
        if b.is_empty() {
            return Self::new();
        }
        let mut rects = BoxBuf::new();
        rects.push(b);
        Self { extents: b, rects }
    }

    /// Build a region from rectangles that are already y-x banded.
    ///
    /// This is a trusted bulk path: the caller guarantees the rectangles are
    /// sorted by `y` then `x`, banded, non-touching within a band and that
    /// adjacent bands are already coalesced. Only the extents are computed.
    /// Feeding anything else produces a malformed region on which later
    /// operations give meaningless results (debug builds assert).
    pub fn from_yx_banded_rects(rects: &[Rectangle]) -> Result<Self, RegionError> {
        let mut buf = BoxBuf::new();
        reserve(&mut buf, rects.len())?;
        buf.extend(rects.iter().map(|&r| RegionBox::from(r)));
        let mut region = Self {
            extents: RegionBox::ZERO,
            rects: buf,
        };
        region.set_extents();
        debug_assert!(
            region.is_well_formed(),
            "from_yx_banded_rects called with rectangles that are not y-x banded"
        );
        Ok(region)
    }

    /// Make this region a copy of `src`.
    ///
    /// The existing buffer is reused when it is large enough; capacity is
    /// never given back, which keeps repeated copy/combine cycles cheap. On
    /// failure `self` is left unchanged.
    pub fn copy_from(&mut self, src: &Self) -> Result<(), RegionError> {
        let needed = src.rects.len();
        if needed > self.rects.capacity() {
            let additional = needed - self.rects.len();
            reserve(&mut self.rects, additional)?;
        }
        self.rects.clear();
        self.rects.extend_from_slice(&src.rects);
        self.extents = src.extents;
        Ok(())
    }

    /// Fallible counterpart of [`Clone::clone`].
    pub fn try_clone(&self) -> Result<Self, RegionError> {
        let mut out = Self::new();
        out.copy_from(self)?;
        Ok(out)
    }

    /// Whether the region covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Number of boxes in the banded representation.
    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// The banded boxes, in y-then-x order.
    #[inline]
    pub fn boxes(&self) -> &[RegionBox] {
        &self.rects
    }

    /// Bounding box of the region; all-zero when empty.
    #[inline]
    pub fn extents(&self) -> RegionBox {
        self.extents
    }

    /// Bounding rectangle of the region; all-zero when empty.
    #[inline]
    pub fn clip_box(&self) -> Rectangle {
        self.extents.into()
    }

    /// Iterate the region's boxes as origin/size rectangles.
    pub fn rectangles(&self) -> impl Iterator<Item = Rectangle> + '_ {
        self.rects.iter().map(|&b| Rectangle::from(b))
    }

    /// Flatten the region into a list of rectangles, in band order.
    ///
    /// This is the form drawing backends usually want for clip lists.
    pub fn to_rectangle_list(&self) -> Vec<Rectangle> {
        self.rectangles().collect()
    }

    /// Whether the region is exactly the single rectangle `rect`.
    pub fn rect_equal(&self, rect: &Rectangle) -> bool {
        self.rects.len() == 1 && self.extents == RegionBox::from(*rect)
    }

    /// Check every structural invariant of the banded representation.
    ///
    /// Regions built through this crate's safe API always pass; this is
    /// mainly useful in tests and to validate input handed to
    /// [`Region::from_yx_banded_rects`].
    pub fn is_well_formed(&self) -> bool {
        let rects = &self.rects[..];
        if rects.is_empty() {
            return self.extents == RegionBox::ZERO;
        }
        if rects.iter().any(RegionBox::is_empty) {
            return false;
        }

        let mut prev: Option<&[RegionBox]> = None;
        let mut start = 0;
        while start < rects.len() {
            let end = band_end(rects, start);
            let band = &rects[start..end];
            if band.iter().any(|b| b.y2 != band[0].y2) {
                return false;
            }
            // Sorted by x and never touching.
            if band.windows(2).any(|w| w[0].x2 >= w[1].x1) {
                return false;
            }
            if let Some(prev) = prev {
                if prev[0].y2 > band[0].y1 {
                    return false;
                }
                if prev[0].y2 == band[0].y1 && same_columns(prev, band) {
                    return false;
                }
            }
            prev = Some(band);
            start = end;
        }

        let bounds = rects[1..].iter().fold(rects[0], |acc, b| acc.union(b));
        bounds == self.extents
    }

    /// Recompute the extents from the boxes.
    ///
    /// Banding puts the smallest `y1` first and the largest `y2` last; the
    /// horizontal bounds need a full scan.
    pub(crate) fn set_extents(&mut self) {
        let (Some(first), Some(last)) = (self.rects.first(), self.rects.last()) else {
            self.extents = RegionBox::ZERO;
            return;
        };
        let mut extents = RegionBox::new(first.x1, first.y1, last.x2, last.y2);
        for b in &self.rects {
            extents.x1 = extents.x1.min(b.x1);
            extents.x2 = extents.x2.max(b.x2);
        }
        debug_assert!(
            !extents.is_empty(),
            "non-empty region produced empty extents {extents:?}"
        );
        self.extents = extents;
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.rects.capacity()
    }
}

/// Index one past the last box of the band starting at `start`.
#[inline]
pub(crate) fn band_end(rects: &[RegionBox], start: usize) -> usize {
    let y1 = rects[start].y1;
    let mut end = start + 1;
    while end < rects.len() && rects[end].y1 == y1 {
        end += 1;
    }
    end
}

/// Whether two bands have boxes in the same horizontal places.
#[inline]
pub(crate) fn same_columns(a: &[RegionBox], b: &[RegionBox]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| p.x1 == q.x1 && p.x2 == q.x2)
}
