// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boolean operators: union, intersection, subtraction and XOR.

use core::cmp::Ordering;

use crate::error::RegionError;
use crate::region::{BoxBuf, Region, push_box};
use crate::sweep::{Operator, sweep};
use crate::types::{Rectangle, RegionBox};

const UNION: Operator = Operator {
    overlap: union_overlap,
    non_overlap_a: Some(copy_band),
    non_overlap_b: Some(copy_band),
};

const INTERSECT: Operator = Operator {
    overlap: intersect_overlap,
    non_overlap_a: None,
    non_overlap_b: None,
};

const SUBTRACT: Operator = Operator {
    overlap: subtract_overlap,
    non_overlap_a: Some(copy_band),
    non_overlap_b: None,
};

/// Non-overlapping band: copy the boxes, clipped to `[y1, y2)`.
fn copy_band(out: &mut BoxBuf, band: &[RegionBox], y1: i32, y2: i32) -> Result<(), RegionError> {
    debug_assert!(y1 < y2, "empty band {y1}..{y2}");
    for r in band {
        push_box(out, RegionBox::new(r.x1, y1, r.x2, y2))?;
    }
    Ok(())
}

/// Append `[r.x1, r.x2)` to the band being built, extending the last box
/// instead when the two touch or overlap.
#[inline]
fn merge_box(out: &mut BoxBuf, r: &RegionBox, y1: i32, y2: i32) -> Result<(), RegionError> {
    if let Some(last) = out.last_mut()
        && last.y1 == y1
        && last.y2 == y2
        && last.x2 >= r.x1
    {
        if last.x2 < r.x2 {
            last.x2 = r.x2;
        }
        return Ok(());
    }
    push_box(out, RegionBox::new(r.x1, y1, r.x2, y2))
}

/// Overlapping band for union: take the leftmost box of either side each step.
fn union_overlap(
    out: &mut BoxBuf,
    a: &[RegionBox],
    b: &[RegionBox],
    y1: i32,
    y2: i32,
) -> Result<(), RegionError> {
    debug_assert!(y1 < y2, "empty band {y1}..{y2}");
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].x1 < b[j].x1 {
            merge_box(out, &a[i], y1, y2)?;
            i += 1;
        } else {
            merge_box(out, &b[j], y1, y2)?;
            j += 1;
        }
    }
    for r in a[i..].iter().chain(&b[j..]) {
        merge_box(out, r, y1, y2)?;
    }
    Ok(())
}

/// Overlapping band for intersection.
///
/// Boxes within a band never touch, so the pieces emitted here never need
/// merging.
fn intersect_overlap(
    out: &mut BoxBuf,
    a: &[RegionBox],
    b: &[RegionBox],
    y1: i32,
    y2: i32,
) -> Result<(), RegionError> {
    debug_assert!(y1 < y2, "empty band {y1}..{y2}");
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let x1 = a[i].x1.max(b[j].x1);
        let x2 = a[i].x2.min(b[j].x2);
        if x1 < x2 {
            push_box(out, RegionBox::new(x1, y1, x2, y2))?;
        }
        // Advance whichever ends first; the other may still overlap the
        // next box on the opposite side.
        match a[i].x2.cmp(&b[j].x2) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    Ok(())
}

/// Overlapping band for subtraction `a - b`.
///
/// `x1` is the leftmost point of the current minuend box not yet decided.
fn subtract_overlap(
    out: &mut BoxBuf,
    a: &[RegionBox],
    b: &[RegionBox],
    y1: i32,
    y2: i32,
) -> Result<(), RegionError> {
    debug_assert!(y1 < y2, "empty band {y1}..{y2}");
    let Some(first) = a.first() else {
        return Ok(());
    };
    let mut x1 = first.x1;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let minuend = a[i];
        let subtrahend = b[j];
        if subtrahend.x2 <= x1 {
            // Subtrahend is entirely to the left.
            j += 1;
        } else if subtrahend.x1 <= x1 {
            // Subtrahend covers the left edge of the minuend.
            x1 = subtrahend.x2;
            if x1 >= minuend.x2 {
                i += 1;
                if i < a.len() {
                    x1 = a[i].x1;
                }
            } else {
                j += 1;
            }
        } else if subtrahend.x1 < minuend.x2 {
            // Keep the uncovered piece left of the subtrahend.
            push_box(out, RegionBox::new(x1, y1, subtrahend.x1, y2))?;
            x1 = subtrahend.x2;
            if x1 >= minuend.x2 {
                i += 1;
                if i < a.len() {
                    x1 = a[i].x1;
                }
            } else {
                j += 1;
            }
        } else {
            // Subtrahend starts past the minuend: keep what is left of it.
            if minuend.x2 > x1 {
                push_box(out, RegionBox::new(x1, y1, minuend.x2, y2))?;
            }
            i += 1;
            if i < a.len() {
                x1 = a[i].x1;
            }
        }
    }

    // Whatever is left of the minuend is untouched.
    while i < a.len() {
        debug_assert!(x1 < a[i].x2, "subtraction left an empty remainder");
        push_box(out, RegionBox::new(x1, y1, a[i].x2, y2))?;
        i += 1;
        if i < a.len() {
            x1 = a[i].x1;
        }
    }
    Ok(())
}

impl Region {
    /// Replace this region's boxes with the result of a sweep against `other`.
    fn apply(&mut self, other: &Self, op: &Operator) -> Result<(), RegionError> {
        let rects = sweep(&self.rects, &other.rects, op)?;
        self.rects = rects;
        Ok(())
    }

    /// Set this region to the union of itself and `other`.
    ///
    /// The result is the set of pixels contained in either region.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_region::{Rectangle, Region};
    ///
    /// let mut a = Region::from_rect(Rectangle::new(0, 0, 10, 10));
    /// let b = Region::from_rect(Rectangle::new(5, 5, 10, 10));
    /// a.union_with(&b).unwrap();
    /// assert_eq!(a.clip_box(), Rectangle::new(0, 0, 15, 15));
    /// assert_eq!(a.len(), 3);
    /// ```
    pub fn union_with(&mut self, other: &Self) -> Result<(), RegionError> {
        if other.is_empty() {
            return Ok(());
        }
        if self.is_empty() {
            return self.copy_from(other);
        }
        // A single box covering all of the other region absorbs it.
        if self.rects.len() == 1 && self.extents.contains_box(&other.extents) {
            return Ok(());
        }
        if other.rects.len() == 1 && other.extents.contains_box(&self.extents) {
            return self.copy_from(other);
        }

        self.apply(other, &UNION)?;
        self.extents = self.extents.union(&other.extents);
        debug_assert!(self.is_well_formed(), "union produced a malformed region");
        Ok(())
    }

    /// Set this region to the union of itself and `rect`.
    ///
    /// Degenerate rectangles leave the region unchanged.
    pub fn union_with_rect(&mut self, rect: &Rectangle) -> Result<(), RegionError> {
        if rect.is_empty() {
            return Ok(());
        }
        self.union_with(&Self::from_rect(*rect))
    }

    /// Set this region to the intersection of itself and `other`.
    ///
    /// The result is the set of pixels contained in both regions.
    pub fn intersect_with(&mut self, other: &Self) -> Result<(), RegionError> {
        if self.is_empty() || other.is_empty() || !self.extents.overlaps(&other.extents) {
            self.rects.clear();
        } else {
            self.apply(other, &INTERSECT)?;
        }
        // The sweep does not track extents for intersection; recompute them
        // from what survived coalescing.
        self.set_extents();
        debug_assert!(
            self.is_well_formed(),
            "intersection produced a malformed region"
        );
        Ok(())
    }

    /// Remove the area of `other` from this region.
    ///
    /// The result is the set of pixels contained in `self` but not in `other`.
    pub fn subtract(&mut self, other: &Self) -> Result<(), RegionError> {
        if self.is_empty() || other.is_empty() || !self.extents.overlaps(&other.extents) {
            return Ok(());
        }
        self.apply(other, &SUBTRACT)?;
        self.set_extents();
        debug_assert!(
            self.is_well_formed(),
            "subtraction produced a malformed region"
        );
        Ok(())
    }

    /// Set this region to the exclusive-or of itself and `other`.
    ///
    /// The result is the set of pixels contained in exactly one of the two
    /// regions, computed as `(other - self) ∪ (self - other)`.
    pub fn xor_with(&mut self, other: &Self) -> Result<(), RegionError> {
        let mut only_other = other.try_clone()?;
        only_other.subtract(self)?;
        self.subtract(other)?;
        self.union_with(&only_other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Region {
        Region::from_box(RegionBox::new(x1, y1, x2, y2))
    }

    fn boxes(r: &Region) -> Vec<RegionBox> {
        r.boxes().to_vec()
    }

    #[test]
    fn union_of_overlapping_squares() {
        let mut a = rect(0, 0, 10, 10);
        a.union_with(&rect(5, 5, 15, 15)).unwrap();
        assert_eq!(
            boxes(&a),
            vec![
                RegionBox::new(0, 0, 10, 5),
                RegionBox::new(0, 5, 15, 10),
                RegionBox::new(5, 10, 15, 15),
            ]
        );
        assert_eq!(a.extents(), RegionBox::new(0, 0, 15, 15));
    }

    #[test]
    fn union_merges_touching_boxes() {
        let mut a = rect(0, 0, 5, 5);
        a.union_with(&rect(5, 0, 10, 5)).unwrap();
        assert_eq!(boxes(&a), vec![RegionBox::new(0, 0, 10, 5)]);

        // Vertically touching boxes coalesce into one band.
        a.union_with(&rect(0, 5, 10, 8)).unwrap();
        assert_eq!(boxes(&a), vec![RegionBox::new(0, 0, 10, 8)]);
    }

    #[test]
    fn union_shortcuts() {
        let big = rect(0, 0, 100, 100);
        let small = rect(10, 10, 20, 20);

        let mut a = big.clone();
        a.union_with(&small).unwrap();
        assert_eq!(a, big);

        let mut b = small.clone();
        b.union_with(&big).unwrap();
        assert_eq!(b, big);

        let mut e = Region::new();
        e.union_with(&small).unwrap();
        assert_eq!(e, small);

        let mut s = small.clone();
        s.union_with(&Region::new()).unwrap();
        assert_eq!(s, small);
    }

    #[test]
    fn union_with_rect_ignores_degenerate() {
        let mut a = rect(0, 0, 10, 10);
        a.union_with_rect(&Rectangle::new(50, 50, 0, 10)).unwrap();
        assert_eq!(a, rect(0, 0, 10, 10));
        a.union_with_rect(&Rectangle::new(10, 0, 5, 10)).unwrap();
        assert_eq!(a, rect(0, 0, 15, 10));
    }

    #[test]
    fn intersection_of_overlapping_squares() {
        let mut a = rect(0, 0, 10, 10);
        a.intersect_with(&rect(5, 5, 15, 15)).unwrap();
        assert_eq!(boxes(&a), vec![RegionBox::new(5, 5, 10, 10)]);
        assert_eq!(a.extents(), RegionBox::new(5, 5, 10, 10));
    }

    #[test]
    fn intersection_of_disjoint_is_empty() {
        let mut a = rect(0, 0, 10, 10);
        a.intersect_with(&rect(10, 0, 20, 10)).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.extents(), RegionBox::ZERO);

        let mut b = rect(0, 0, 10, 10);
        b.intersect_with(&Region::new()).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn intersection_with_comb() {
        // Two teeth crossing a horizontal bar.
        let mut comb = rect(0, 0, 2, 10);
        comb.union_with(&rect(4, 0, 6, 10)).unwrap();
        let mut bar = rect(-5, 3, 20, 6);
        bar.intersect_with(&comb).unwrap();
        assert_eq!(
            boxes(&bar),
            vec![RegionBox::new(0, 3, 2, 6), RegionBox::new(4, 3, 6, 6)]
        );
        assert_eq!(bar.extents(), RegionBox::new(0, 3, 6, 6));
    }

    #[test]
    fn subtract_hole_makes_ring() {
        let mut a = rect(0, 0, 10, 10);
        a.subtract(&rect(3, 3, 7, 7)).unwrap();
        assert_eq!(
            boxes(&a),
            vec![
                RegionBox::new(0, 0, 10, 3),
                RegionBox::new(0, 3, 3, 7),
                RegionBox::new(7, 3, 10, 7),
                RegionBox::new(0, 7, 10, 10),
            ]
        );
        assert_eq!(a.extents(), RegionBox::new(0, 0, 10, 10));
    }

    #[test]
    fn subtract_shrinks_extents() {
        let mut a = rect(0, 0, 10, 10);
        a.subtract(&rect(5, -5, 20, 20)).unwrap();
        assert_eq!(boxes(&a), vec![RegionBox::new(0, 0, 5, 10)]);
        assert_eq!(a.extents(), RegionBox::new(0, 0, 5, 10));
    }

    #[test]
    fn subtract_several_subtrahends_in_band() {
        let mut a = rect(0, 0, 20, 2);
        let mut holes = rect(2, 0, 4, 2);
        holes.union_with(&rect(8, 0, 10, 2)).unwrap();
        holes.union_with(&rect(18, 0, 25, 2)).unwrap();
        a.subtract(&holes).unwrap();
        assert_eq!(
            boxes(&a),
            vec![
                RegionBox::new(0, 0, 2, 2),
                RegionBox::new(4, 0, 8, 2),
                RegionBox::new(10, 0, 18, 2),
            ]
        );
    }

    #[test]
    fn subtract_disjoint_is_noop() {
        let mut a = rect(0, 0, 10, 10);
        a.subtract(&rect(20, 20, 30, 30)).unwrap();
        assert_eq!(a, rect(0, 0, 10, 10));
    }

    #[test]
    fn xor_of_equal_is_empty() {
        let mut a = rect(0, 0, 10, 10);
        a.xor_with(&rect(0, 0, 10, 10)).unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn xor_of_overlapping_squares() {
        let mut a = rect(0, 0, 10, 10);
        a.xor_with(&rect(5, 5, 15, 15)).unwrap();
        assert_eq!(
            boxes(&a),
            vec![
                RegionBox::new(0, 0, 10, 5),
                RegionBox::new(0, 5, 5, 10),
                RegionBox::new(10, 5, 15, 10),
                RegionBox::new(5, 10, 15, 15),
            ]
        );
        assert_eq!(a.extents(), RegionBox::new(0, 0, 15, 15));
    }

    #[test]
    fn operand_can_be_a_copy_of_destination() {
        let a = rect(0, 0, 10, 10);
        let mut b = a.clone();
        b.union_with(&a).unwrap();
        assert_eq!(b, a);
        b.intersect_with(&a).unwrap();
        assert_eq!(b, a);
        b.subtract(&a).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn single_box_results_stay_inline() {
        let mut u = rect(0, 0, 5, 4);
        u.union_with(&rect(5, 0, 9, 4)).unwrap();
        assert_eq!(boxes(&u), vec![RegionBox::new(0, 0, 9, 4)]);
        assert!(!u.rects.spilled(), "union result should be inline");

        let mut i = rect(0, 0, 10, 10);
        i.intersect_with(&rect(5, 5, 15, 15)).unwrap();
        assert_eq!(boxes(&i), vec![RegionBox::new(5, 5, 10, 10)]);
        assert!(!i.rects.spilled(), "intersection result should be inline");

        let mut d = rect(0, 0, 10, 10);
        d.subtract(&rect(0, 5, 10, 10)).unwrap();
        assert_eq!(boxes(&d), vec![RegionBox::new(0, 0, 10, 5)]);
        assert!(!d.rects.spilled(), "difference result should be inline");
        assert_eq!(d.capacity(), 1);
    }
}
