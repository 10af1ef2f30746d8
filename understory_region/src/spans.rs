// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clipping scanline spans against a region.

use crate::region::Region;
use crate::types::{RegionBox, Span};

impl Region {
    /// Clip `spans` to the region, calling `f` once per clipped piece.
    ///
    /// With `sorted` set, `spans` must be ordered by `y`; regions and spans
    /// are then walked in lock step. Otherwise every span rescans the boxes,
    /// which is quadratic but fine for small inputs. Spans with a
    /// non-positive width produce nothing.
    ///
    /// The pieces of one span are reported left to right. With `sorted`,
    /// pieces are grouped by box rather than by span.
    ///
    /// # Examples
    ///
    /// ```
    /// use understory_region::{Rectangle, Region, Span};
    ///
    /// let mut region = Region::from_rect(Rectangle::new(0, 0, 4, 4));
    /// region.union_with_rect(&Rectangle::new(6, 0, 4, 4)).unwrap();
    ///
    /// let mut out = Vec::new();
    /// region.clip_spans(&[Span::new(1, -5, 20)], true, |s| out.push(s));
    /// assert_eq!(out, [Span::new(1, 0, 4), Span::new(1, 6, 4)]);
    /// ```
    pub fn clip_spans<F: FnMut(Span)>(&self, spans: &[Span], sorted: bool, f: F) {
        if sorted {
            self.clip_sorted_spans(spans, f);
        } else {
            self.clip_unsorted_spans(spans, f);
        }
    }

    fn clip_unsorted_spans<F: FnMut(Span)>(&self, spans: &[Span], mut f: F) {
        if self.is_empty() {
            return;
        }
        let extents = self.extents;
        for span in spans {
            let (y, left, right) = (span.y, span.x, span.x.saturating_add(span.width));
            if left >= right
                || !(extents.y1 <= y && y < extents.y2 && extents.x1 < right && left < extents.x2)
            {
                continue;
            }
            for b in &self.rects {
                if b.y2 <= y {
                    continue;
                }
                if b.y1 > y {
                    // Past the scanline.
                    break;
                }
                clip_one(b, y, left, right, &mut f);
            }
        }
    }

    fn clip_sorted_spans<F: FnMut(Span)>(&self, spans: &[Span], mut f: F) {
        let rects = &self.rects[..];
        if rects.is_empty() || spans.is_empty() {
            return;
        }

        let mut bi = 0;
        let mut si = 0;
        while bi < rects.len() {
            // Skip boxes above the current span and spans above the current box.
            while rects[bi].y2 < spans[si].y || spans[si].y < rects[bi].y1 {
                if rects[bi].y2 < spans[si].y {
                    bi += 1;
                    if bi == rects.len() {
                        return;
                    }
                }
                if spans[si].y < rects[bi].y1 {
                    si += 1;
                    if si == spans.len() {
                        return;
                    }
                }
            }

            // Clip every span that can still reach this box. Later boxes of
            // the same band restart from `si`.
            let b = &rects[bi];
            for span in spans[si..].iter().take_while(|s| s.y < b.y2) {
                let (left, right) = (span.x, span.x.saturating_add(span.width));
                if left < right {
                    clip_one(b, span.y, left, right, &mut f);
                }
            }
            bi += 1;
        }
    }
}

/// Report the part of `[left, right)` on scanline `y` inside `b`, if any.
#[inline]
fn clip_one<F: FnMut(Span)>(b: &RegionBox, y: i32, left: i32, right: i32, f: &mut F) {
    if right > b.x1 && left < b.x2 {
        let x1 = left.max(b.x1);
        let x2 = right.min(b.x2);
        f(Span::new(y, x1, x2 - x1));
    }
}
