// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

/// Half-open integer box `[x1, x2) × [y1, y2)`.
///
/// This is the unit a [`Region`][crate::Region] is built from. A box with
/// `x1 >= x2` or `y1 >= y2` covers no pixels and is never stored in a region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegionBox {
    /// Left edge (inclusive).
    pub x1: i32,
    /// Top edge (inclusive).
    pub y1: i32,
    /// Right edge (exclusive).
    pub x2: i32,
    /// Bottom edge (exclusive).
    pub y2: i32,
}

impl RegionBox {
    /// The all-zero box, used as the extents of an empty region.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new box from its corners.
    #[inline(always)]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width of the box. Negative for inverted boxes.
    ///
    /// Saturates at `i32::MAX` for boxes spanning more than the `i32` range.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Height of the box. Negative for inverted boxes.
    ///
    /// Saturates at `i32::MAX` for boxes spanning more than the `i32` range.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Return true if the box is empty or inverted (covers no pixels).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Whether the pixel at `(x, y)` lies inside the box.
    ///
    /// The right and bottom edges are exclusive.
    #[inline]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }

    /// Whether `other` lies entirely within this box.
    #[inline]
    pub const fn contains_box(&self, other: &Self) -> bool {
        self.x1 <= other.x1 && self.y1 <= other.y1 && self.x2 >= other.x2 && self.y2 >= other.y2
    }

    /// Determines whether this box shares at least one pixel with another.
    ///
    /// Unlike closed bounding boxes, two boxes that merely share an edge do
    /// not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_region::RegionBox;
    ///
    /// let a = RegionBox::new(0, 0, 10, 10);
    /// assert!(a.overlaps(&RegionBox::new(5, 5, 15, 15)));
    /// assert!(!a.overlaps(&RegionBox::new(10, 0, 20, 10)));
    /// ```
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x2 > other.x1 && self.x1 < other.x2 && self.y2 > other.y1 && self.y1 < other.y2
    }

    /// The intersection of two boxes. May be empty.
    #[inline]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        }
    }

    /// The smallest box enclosing both boxes.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// The box moved by `(dx, dy)`.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

impl From<Rectangle> for RegionBox {
    #[inline]
    fn from(r: Rectangle) -> Self {
        // Far edges are clamped to the `i32` range.
        Self::new(
            r.x,
            r.y,
            r.x.saturating_add(r.width),
            r.y.saturating_add(r.height),
        )
    }
}

/// Rectangle given by origin and size, as exchanged with drawing code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width; non-positive widths describe an empty rectangle.
    pub width: i32,
    /// Height; non-positive heights describe an empty rectangle.
    pub height: i32,
}

impl Rectangle {
    /// Create a rectangle from origin and size.
    #[inline(always)]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Return true if the rectangle has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<RegionBox> for Rectangle {
    #[inline]
    fn from(b: RegionBox) -> Self {
        Self::new(b.x1, b.y1, b.width(), b.height())
    }
}

/// A horizontal run of pixels on one scanline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Scanline.
    pub y: i32,
    /// First pixel of the run.
    pub x: i32,
    /// Number of pixels in the run.
    pub width: i32,
}

impl Span {
    /// Create a span.
    #[inline(always)]
    pub const fn new(y: i32, x: i32, width: i32) -> Self {
        Self { y, x, width }
    }
}

/// How a rectangle relates to a region, see
/// [`Region::classify_rect`][crate::Region::classify_rect].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// The rectangle lies entirely inside the region.
    In,
    /// The rectangle and the region share no pixels.
    Out,
    /// The rectangle is partially inside the region.
    Part,
}
