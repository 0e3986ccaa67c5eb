//! Straight line segments.

use geo::Coord;

/// Which end points of a segment are not considered a part of it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum BoundaryExclusion {
    /// Both end points belong to the segment.
    #[default]
    None,
    /// The start point does not belong to the segment.
    Start,
    /// The end point does not belong to the segment.
    End,
    /// Neither of the end points belongs to the segment.
    Both,
}

impl BoundaryExclusion {
    fn excludes_start(self) -> bool {
        matches!(self, Self::Start | Self::Both)
    }

    fn excludes_end(self) -> bool {
        matches!(self, Self::End | Self::Both)
    }
}

/// A strait line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a>(pub &'a Coord, pub &'a Coord);

impl Segment<'_> {
    /// Returns true if the `point` lies on the segment.
    ///
    /// The point must be collinear with the segment: the cross product of the segment and the vector from its
    /// start to the point must be exactly zero, or not exceed `epsilon` by absolute value if it is given. Then the
    /// point must lie between the end points along the axis on which the segment has the larger extent (`x` if
    /// the extents are equal). End points listed in `exclusion` are not a part of the segment.
    ///
    /// A degenerate segment (both end points equal) contains only its end point, and only when no end point is
    /// excluded.
    pub fn contains_point(
        &self,
        point: &Coord,
        exclusion: BoundaryExclusion,
        epsilon: Option<f64>,
    ) -> bool {
        let start = self.0;
        let end = self.1;
        let dl = *end - *start;
        if dl.x == 0.0 && dl.y == 0.0 {
            return exclusion == BoundaryExclusion::None && point == start;
        }

        let dp = *point - *start;
        let cross = dp.x * dl.y - dp.y * dl.x;

        let collinear = match epsilon {
            Some(epsilon) => cross.abs() <= epsilon,
            None => cross == 0.0,
        };
        if !collinear {
            return false;
        }

        let (from, value, to, direction) = if dl.x.abs() >= dl.y.abs() {
            (start.x, point.x, end.x, dl.x)
        } else {
            (start.y, point.y, end.y, dl.y)
        };

        let exclude_start = exclusion.excludes_start();
        let exclude_end = exclusion.excludes_end();
        if between(from, value, to, exclude_start, exclude_end) {
            direction > 0.0
        } else {
            between(to, value, from, exclude_end, exclude_start)
        }
    }
}

fn between(low: f64, value: f64, high: f64, strict_low: bool, strict_high: bool) -> bool {
    let above = if strict_low { low < value } else { low <= value };
    let below = if strict_high {
        value < high
    } else {
        value <= high
    };

    above && below
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord { x, y }
    }

    #[test]
    fn contains_point_inside() {
        let (a, b) = (c(0.0, 0.0), c(10.0, 5.0));
        let segment = Segment(&a, &b);
        assert!(segment.contains_point(&c(4.0, 2.0), BoundaryExclusion::None, None));
        assert!(segment.contains_point(&c(4.0, 2.0), BoundaryExclusion::Both, None));
        assert!(!segment.contains_point(&c(4.0, 2.1), BoundaryExclusion::None, None));
        assert!(!segment.contains_point(&c(12.0, 6.0), BoundaryExclusion::None, None));
    }

    #[test]
    fn end_point_exclusion() {
        let (a, b) = (c(0.0, 0.0), c(0.0, 10.0));
        let segment = Segment(&a, &b);

        for (exclusion, start, end) in [
            (BoundaryExclusion::None, true, true),
            (BoundaryExclusion::Start, false, true),
            (BoundaryExclusion::End, true, false),
            (BoundaryExclusion::Both, false, false),
        ] {
            assert_eq!(segment.contains_point(&a, exclusion, None), start);
            assert_eq!(segment.contains_point(&b, exclusion, None), end);
        }
    }

    #[test]
    fn reversed_segment() {
        let (a, b) = (c(10.0, 0.0), c(0.0, 0.0));
        let segment = Segment(&a, &b);
        assert!(segment.contains_point(&c(5.0, 0.0), BoundaryExclusion::None, None));
        assert!(!segment.contains_point(&a, BoundaryExclusion::Start, None));
        assert!(segment.contains_point(&b, BoundaryExclusion::Start, None));
        assert!(!segment.contains_point(&b, BoundaryExclusion::End, None));
    }

    #[test]
    fn epsilon_tolerance() {
        let (a, b) = (c(0.0, 0.0), c(10.0, 0.0));
        let segment = Segment(&a, &b);
        let near = c(5.0, 1e-10);
        assert!(!segment.contains_point(&near, BoundaryExclusion::None, None));
        assert!(segment.contains_point(&near, BoundaryExclusion::None, Some(1e-8)));
    }

    #[test]
    fn degenerate_segment() {
        let a = c(1.0, 1.0);
        let segment = Segment(&a, &a);
        assert!(segment.contains_point(&a, BoundaryExclusion::None, None));
        assert!(segment.contains_point(&a, BoundaryExclusion::None, Some(1e-8)));
        assert!(!segment.contains_point(&a, BoundaryExclusion::Start, None));
        assert!(!segment.contains_point(&a, BoundaryExclusion::Both, None));
        assert!(!segment.contains_point(&c(2.0, 2.0), BoundaryExclusion::None, None));
        assert!(!segment.contains_point(&c(1.0, 1.0 + 1e-12), BoundaryExclusion::None, Some(1e-8)));
    }
}
