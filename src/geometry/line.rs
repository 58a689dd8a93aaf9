//! Line segments and their intersection math
//!
//! The tricky part of the collision core: `intersection_with` answers for
//! *segments*, not infinite lines. A point that satisfies both line
//! equations but lies outside either segment's bounding box is not an
//! intersection.

use super::{Point, Rect};
use crate::approx_eq;

/// A line segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Midpoint of the segment; a zero-length segment yields its endpoint
    pub fn middle(&self) -> Point {
        if self.start.approx_eq(self.end) {
            return self.start;
        }
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Slope of the carrying line, or `None` when the segment is vertical
    pub fn slope(&self) -> Option<f64> {
        if approx_eq(self.start.x, self.end.x) {
            return None;
        }
        Some((self.start.y - self.end.y) / (self.start.x - self.end.x))
    }

    /// Y-intercept of the carrying line, or `None` when vertical
    pub fn intercept(&self) -> Option<f64> {
        self.slope().map(|m| self.start.y - m * self.start.x)
    }

    fn slope_intercept(&self) -> Option<(f64, f64)> {
        self.slope().zip(self.intercept())
    }

    /// The unique point common to both segments, if any.
    ///
    /// Parallel and collinear pairs have no unique point and answer `None`,
    /// as does an infinite-line solution lying outside either segment's
    /// bounding box.
    pub fn intersection_with(&self, other: &Line) -> Option<Point> {
        let candidate = match (self.slope_intercept(), other.slope_intercept()) {
            // Two vertical segments either miss or overlap; overlap has no
            // unique point.
            (None, None) => return None,
            (None, Some((m2, b2))) => {
                let x = self.start.x;
                Point::new(x, m2 * x + b2)
            }
            (Some((m1, b1)), None) => {
                let x = other.start.x;
                Point::new(x, m1 * x + b1)
            }
            (Some((m1, b1)), Some((m2, b2))) => {
                if approx_eq(m1, m2) {
                    return None;
                }
                let x = (b2 - b1) / (m1 - m2);
                Point::new(x, m1 * x + b1)
            }
        };

        (self.bounds_contain(candidate) && other.bounds_contain(candidate)).then_some(candidate)
    }

    /// Whether a carrying-line point falls inside this segment's bounding
    /// box, tolerant at the box edges
    fn bounds_contain(&self, p: Point) -> bool {
        let min_x = self.start.x.min(self.end.x);
        let max_x = self.start.x.max(self.end.x);
        let min_y = self.start.y.min(self.end.y);
        let max_y = self.start.y.max(self.end.y);

        let x_ok = approx_eq(p.x, min_x) || approx_eq(p.x, max_x) || (p.x > min_x && p.x < max_x);
        let y_ok = approx_eq(p.y, min_y) || approx_eq(p.y, max_y) || (p.y > min_y && p.y < max_y);
        x_ok && y_ok
    }

    /// The point on this segment closest to `p`
    pub fn closest_point_to(&self, p: Point) -> Point {
        let a = self.start.as_dvec2();
        let b = self.end.as_dvec2();
        let ab = b - a;
        let len_sq = ab.length_squared();
        if len_sq == 0.0 {
            return self.start;
        }
        let t = ((p.as_dvec2() - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        Point::from(a + ab * t)
    }

    /// Among this segment's intersections with the rectangle's edges, the
    /// one nearest the segment's start. Exact ties keep the first hit in
    /// edge order.
    pub fn closest_intersection_to_start(&self, rect: &Rect) -> Option<Point> {
        let mut nearest: Option<(f64, Point)> = None;
        for point in rect.intersection_points(self) {
            let distance = self.start.distance(point);
            match nearest {
                Some((best, _)) if distance >= best => {}
                _ => nearest = Some((distance, point)),
            }
        }
        nearest.map(|(_, point)| point)
    }
}
