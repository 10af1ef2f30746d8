// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and rectangle containment queries.

use crate::region::Region;
use crate::types::{Overlap, Rectangle, RegionBox};

impl Region {
    /// Whether the pixel at `(x, y)` is part of the region.
    ///
    /// Regions are usually small, so after the extents check this is a plain
    /// scan over the boxes.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        if self.is_empty() || !self.extents.contains_point(x, y) {
            return false;
        }
        self.rects.iter().any(|b| b.contains_point(x, y))
    }

    /// Classify `rect` as inside, outside or partially inside the region.
    ///
    /// Degenerate rectangles cover no pixels and are always [`Overlap::Out`].
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_region::{Overlap, Rectangle, Region};
    ///
    /// let region = Region::from_rect(Rectangle::new(0, 0, 10, 10));
    /// assert_eq!(region.classify_rect(&Rectangle::new(2, 2, 4, 4)), Overlap::In);
    /// assert_eq!(region.classify_rect(&Rectangle::new(8, 8, 4, 4)), Overlap::Part);
    /// assert_eq!(region.classify_rect(&Rectangle::new(20, 0, 4, 4)), Overlap::Out);
    /// ```
    pub fn classify_rect(&self, rect: &Rectangle) -> Overlap {
        let query = RegionBox::from(*rect);
        if query.is_empty() || self.is_empty() || !self.extents.overlaps(&query) {
            return Overlap::Out;
        }

        let mut part_in = false;
        let mut part_out = false;
        // (rx, ry) is the top-left of the part of `query` not yet accounted for.
        let mut rx = query.x1;
        let mut ry = query.y1;

        // Stop once both flags are set or the bottom of `query` is reached.
        for b in &self.rects {
            if b.y2 <= ry {
                // Not there yet, or skipping the rest of a finished band.
                continue;
            }
            if b.y1 > ry {
                // A horizontal strip of `query` above this band is uncovered.
                part_out = true;
                if part_in || b.y1 >= query.y2 {
                    break;
                }
                ry = b.y1;
            }
            if b.x2 <= rx {
                continue;
            }
            if b.x1 > rx {
                // Uncovered piece to the left.
                part_out = true;
                if part_in {
                    break;
                }
            }
            if b.x1 < query.x2 {
                part_in = true;
                if part_out {
                    break;
                }
            }
            if b.x2 >= query.x2 {
                // This band covers the query; move down to the next one.
                ry = b.y2;
                if ry >= query.y2 {
                    break;
                }
                rx = query.x1;
            } else {
                // Boxes in a band are maximal, so the rest of this band of
                // `query` cannot be covered either.
                break;
            }
        }

        if !part_in {
            Overlap::Out
        } else if ry < query.y2 {
            Overlap::Part
        } else {
            Overlap::In
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Overlap, Rectangle, Region, RegionBox};

    fn ring() -> Region {
        let mut r = Region::from_box(RegionBox::new(0, 0, 10, 10));
        r.subtract(&Region::from_box(RegionBox::new(3, 3, 7, 7)))
            .unwrap();
        r
    }

    #[test]
    fn point_in_ring() {
        let r = ring();
        assert!(r.contains_point(0, 0));
        assert!(r.contains_point(9, 9));
        assert!(r.contains_point(2, 5));
        assert!(!r.contains_point(5, 5));
        assert!(!r.contains_point(10, 5));
        assert!(!r.contains_point(-1, -1));
        assert!(!Region::new().contains_point(0, 0));
    }

    #[test]
    fn classify_against_ring() {
        let r = ring();
        assert_eq!(r.classify_rect(&Rectangle::new(0, 0, 10, 3)), Overlap::In);
        assert_eq!(r.classify_rect(&Rectangle::new(0, 0, 3, 10)), Overlap::In);
        assert_eq!(r.classify_rect(&Rectangle::new(3, 3, 4, 4)), Overlap::Out);
        assert_eq!(r.classify_rect(&Rectangle::new(4, 4, 1, 1)), Overlap::Out);
        assert_eq!(r.classify_rect(&Rectangle::new(0, 0, 10, 10)), Overlap::Part);
        assert_eq!(r.classify_rect(&Rectangle::new(2, 2, 2, 2)), Overlap::Part);
        assert_eq!(r.classify_rect(&Rectangle::new(8, 0, 5, 2)), Overlap::Part);
    }

    #[test]
    fn classify_edges_of_single_box() {
        let r = Region::from_box(RegionBox::new(0, 5, 10, 10));
        // Sticks out above.
        assert_eq!(r.classify_rect(&Rectangle::new(0, 0, 10, 10)), Overlap::Part);
        // Sticks out below.
        assert_eq!(r.classify_rect(&Rectangle::new(0, 5, 10, 10)), Overlap::Part);
        // Sticks out to the left.
        assert_eq!(r.classify_rect(&Rectangle::new(-2, 6, 4, 2)), Overlap::Part);
        // Touching edges only.
        assert_eq!(r.classify_rect(&Rectangle::new(10, 5, 4, 4)), Overlap::Out);
        assert_eq!(r.classify_rect(&Rectangle::new(0, 0, 10, 5)), Overlap::Out);
        // Exactly the region.
        assert_eq!(r.classify_rect(&Rectangle::new(0, 5, 10, 5)), Overlap::In);
    }

    #[test]
    fn classify_degenerate_is_out() {
        let r = ring();
        assert_eq!(r.classify_rect(&Rectangle::new(1, 1, 0, 5)), Overlap::Out);
        assert_eq!(r.classify_rect(&Rectangle::new(1, 1, 5, -1)), Overlap::Out);
    }
}
