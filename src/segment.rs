//! Range segmentation
//!
//! Divides a continuous column's observed range into a bounded number of
//! contiguous buckets, so that splitting on the column stays tractable.
use serde::{Deserialize, Serialize};

/// A value range defining one child partition of a split.
///
/// A discrete split stores the categorical value in both bounds; a
/// continuous split covers the half open interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Lower bound, or the categorical value itself.
    pub min: f64,
    /// Exclusive upper bound, equal to `min` for a categorical value.
    pub max: f64,
}

impl Segment {
    /// Segment holding a single categorical value.
    pub fn point(value: f64) -> Self {
        Segment { min: value, max: value }
    }

    /// True if both bounds collapse to one categorical value.
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Membership test: equality for a point segment, half open
    /// `[min, max)` otherwise.
    pub fn contains(&self, value: f64) -> bool {
        if self.is_point() {
            value == self.min
        } else {
            self.min <= value && value < self.max
        }
    }
}

/// Partition the observed range `[min, max]` into `width` contiguous equal
/// width buckets.
///
/// Adjacent buckets share their boundary value exactly. The last bucket's
/// upper bound sits one ulp above `max`, so the uniform half open
/// membership test still admits the observed maximum. A degenerate range
/// (`min == max`) collapses to a single point segment, which callers treat
/// as "no usable split".
///
/// * `min` - Smallest observed value of the column.
/// * `max` - Largest observed value of the column.
/// * `width` - Number of buckets, validated to be at least 2 upstream.
pub fn segment_range(min: f64, max: f64, width: usize) -> Vec<Segment> {
    debug_assert!(width >= 2, "width is validated by TreeConfig");
    if min == max {
        return vec![Segment::point(min)];
    }
    let step = (max - min) / width as f64;
    let mut segments = Vec::with_capacity(width);
    let mut lower = min;
    for k in 1..=width {
        let upper = if k == width {
            max.next_up()
        } else {
            min + step * k as f64
        };
        segments.push(Segment { min: lower, max: upper });
        lower = upper;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_range_bounds() {
        let segments = segment_range(0.0, 10.0, 5);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].min, 0.0);
        assert_eq!(segments[0].max, 2.0);
        assert_eq!(segments[3].min, 6.0);
        assert_eq!(segments[3].max, 8.0);
        assert_eq!(segments[4].min, 8.0);
        assert!(segments[4].max > 10.0);
    }

    #[test]
    fn test_segments_are_contiguous() {
        let segments = segment_range(-3.0, 4.0, 4);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
        }
    }

    #[test]
    fn test_max_value_is_included() {
        let segments = segment_range(1.0, 4.0, 2);
        assert!(segments.last().unwrap().contains(4.0));
        assert!(!segments.last().unwrap().contains(4.1));
        assert!(!segments[0].contains(4.0));
    }

    #[test]
    fn test_half_open_membership() {
        let segments = segment_range(0.0, 10.0, 2);
        assert!(segments[0].contains(0.0));
        assert!(segments[0].contains(4.999));
        assert!(!segments[0].contains(5.0));
        assert!(segments[1].contains(5.0));
    }

    #[test]
    fn test_degenerate_range() {
        let segments = segment_range(7.0, 7.0, 4);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_point());
        assert!(segments[0].contains(7.0));
        assert!(!segments[0].contains(7.5));
    }

    #[test]
    fn test_point_segment() {
        let s = Segment::point(2.0);
        assert!(s.is_point());
        assert!(s.contains(2.0));
        assert!(!s.contains(2.0001));
    }
}
