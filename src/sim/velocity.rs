//! Displacement-per-tick velocity vectors

use glam::DVec2;

use crate::geometry::Point;

/// A 2D velocity expressed as displacement per tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build a velocity from an angle in degrees (measured from the
    /// positive x-axis) and a speed. With y-down screen coordinates the
    /// 180°..360° range points up-screen.
    pub fn from_angle_and_speed(angle_deg: f64, speed: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(speed * rad.cos(), speed * rad.sin())
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Magnitude of the velocity
    pub fn speed(&self) -> f64 {
        DVec2::new(self.dx, self.dy).length()
    }

    /// The same velocity with the horizontal component negated
    pub fn flip_dx(self) -> Self {
        Self::new(-self.dx, self.dy)
    }

    /// The same velocity with the vertical component negated
    pub fn flip_dy(self) -> Self {
        Self::new(self.dx, -self.dy)
    }

    /// The point one tick of travel away from `p`
    pub fn apply_to(&self, p: Point) -> Point {
        p.translate(self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(v: Velocity, dx: f64, dy: f64) {
        assert!((v.dx() - dx).abs() < 1e-9, "dx {} vs {}", v.dx(), dx);
        assert!((v.dy() - dy).abs() < 1e-9, "dy {} vs {}", v.dy(), dy);
    }

    #[test]
    fn test_from_angle_and_speed_axes() {
        assert_close(Velocity::from_angle_and_speed(0.0, 5.0), 5.0, 0.0);
        assert_close(Velocity::from_angle_and_speed(90.0, 5.0), 0.0, 5.0);
        assert_close(Velocity::from_angle_and_speed(180.0, 5.0), -5.0, 0.0);
        assert_close(Velocity::from_angle_and_speed(270.0, 5.0), 0.0, -5.0);
    }

    #[test]
    fn test_from_angle_preserves_speed() {
        for angle in [210.0, 240.0, 300.0, 330.0] {
            let v = Velocity::from_angle_and_speed(angle, 7.5);
            assert!((v.speed() - 7.5).abs() < 1e-9);
            // Paddle bounce angles all point up-screen
            assert!(v.dy() < 0.0);
        }
    }

    #[test]
    fn test_flips_are_independent() {
        let v = Velocity::new(3.0, -4.0);
        assert_eq!(v.flip_dx(), Velocity::new(-3.0, -4.0));
        assert_eq!(v.flip_dy(), Velocity::new(3.0, 4.0));
        assert_eq!(v.flip_dx().flip_dx(), v);
        assert_eq!(v.speed(), 5.0);
    }

    #[test]
    fn test_apply_to() {
        let p = Velocity::new(6.0, 5.0).apply_to(Point::new(10.0, 10.0));
        assert!(p.approx_eq(Point::new(16.0, 15.0)));
    }
}
