//! Axis-aligned rectangles

use super::{Line, Point};

/// An axis-aligned box given by its upper-left corner and extent.
///
/// With y growing downward, the top edge carries the minimum y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    upper_left: Point,
    width: f64,
    height: f64,
}

impl Rect {
    pub const fn new(upper_left: Point, width: f64, height: f64) -> Self {
        Self {
            upper_left,
            width,
            height,
        }
    }

    pub fn from_bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), max_x - min_x, max_y - min_y)
    }

    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn min_x(&self) -> f64 {
        self.upper_left.x
    }

    pub fn max_x(&self) -> f64 {
        self.upper_left.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.upper_left.y
    }

    pub fn max_y(&self) -> f64 {
        self.upper_left.y + self.height
    }

    /// Left edge, top to bottom
    pub fn left_edge(&self) -> Line {
        Line::from_coords(self.min_x(), self.min_y(), self.min_x(), self.max_y())
    }

    /// Right edge, top to bottom
    pub fn right_edge(&self) -> Line {
        Line::from_coords(self.max_x(), self.min_y(), self.max_x(), self.max_y())
    }

    /// Top edge (minimum y), left to right
    pub fn top_edge(&self) -> Line {
        Line::from_coords(self.min_x(), self.min_y(), self.max_x(), self.min_y())
    }

    /// Bottom edge (maximum y), left to right
    pub fn bottom_edge(&self) -> Line {
        Line::from_coords(self.min_x(), self.max_y(), self.max_x(), self.max_y())
    }

    /// Every point where `line` crosses one of the four edges, tested
    /// independently in fixed edge order (right, left, top, bottom). The
    /// count is whatever the four tests produce; callers must not assume
    /// one.
    pub fn intersection_points(&self, line: &Line) -> Vec<Point> {
        [
            self.right_edge(),
            self.left_edge(),
            self.top_edge(),
            self.bottom_edge(),
        ]
        .iter()
        .filter_map(|edge| line.intersection_with(edge))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(rect: &Rect) -> [Point; 4] {
        [
            Point::new(rect.min_x(), rect.min_y()),
            Point::new(rect.max_x(), rect.min_y()),
            Point::new(rect.min_x(), rect.max_y()),
            Point::new(rect.max_x(), rect.max_y()),
        ]
    }

    #[test]
    fn test_edges_form_closed_boundary() {
        let rect = Rect::new(Point::new(10.0, 20.0), 50.0, 30.0);
        let edges = [
            rect.left_edge(),
            rect.right_edge(),
            rect.top_edge(),
            rect.bottom_edge(),
        ];
        // Every corner lies on exactly two of the four edges
        for corner in corners(&rect) {
            let touching = edges
                .iter()
                .filter(|edge| edge.closest_point_to(corner).approx_eq(corner))
                .count();
            assert_eq!(touching, 2, "corner {corner:?} on {touching} edges");
        }
    }

    #[test]
    fn test_from_bounds_matches_corner_form() {
        let a = Rect::from_bounds(5.0, 25.0, 10.0, 40.0);
        let b = Rect::new(Point::new(5.0, 10.0), 20.0, 30.0);
        assert_eq!(a, b);
        assert_eq!(a.max_x(), 25.0);
        assert_eq!(a.max_y(), 40.0);
    }

    #[test]
    fn test_intersection_points_crossing_segment() {
        let rect = Rect::new(Point::new(100.0, 100.0), 50.0, 30.0);
        // Horizontal segment passing clean through the box
        let through = Line::from_coords(0.0, 115.0, 300.0, 115.0);
        let points = rect.intersection_points(&through);
        assert_eq!(points.len(), 2);
        for p in &points {
            assert!((p.y - 115.0).abs() < 1e-9);
            assert!(p.x == rect.min_x() || p.x == rect.max_x());
        }
    }

    #[test]
    fn test_intersection_points_from_inside() {
        let rect = Rect::new(Point::new(100.0, 100.0), 50.0, 30.0);
        // Starts inside, exits through the right edge
        let exiting = Line::from_coords(120.0, 110.0, 300.0, 110.0);
        let points = rect.intersection_points(&exiting);
        assert_eq!(points.len(), 1);
        assert!(points[0].approx_eq(Point::new(150.0, 110.0)));
    }

    #[test]
    fn test_intersection_points_disjoint() {
        let rect = Rect::new(Point::new(100.0, 100.0), 50.0, 30.0);
        let far = Line::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(rect.intersection_points(&far).is_empty());
    }
}
