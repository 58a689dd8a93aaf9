//! The player paddle: keyboard movement and the five-zone bounce

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::{PADDLE_EDGE_TOLERANCE, PADDLE_ZONES};
use crate::geometry::{Point, Rect};
use crate::platform::{Canvas, Color, InputSensor, Key};
use crate::within_tolerance;

use super::ball::Ball;
use super::collision::Collidable;
use super::sprite::Sprite;
use super::velocity::Velocity;

/// The keyboard-controlled paddle
pub struct Paddle {
    id: u32,
    rect: Cell<Rect>,
    color: Color,
    keyboard: Rc<dyn InputSensor>,
    speed: f64,
    arena_width: f64,
}

impl Paddle {
    pub fn new(
        id: u32,
        rect: Rect,
        color: Color,
        keyboard: Rc<dyn InputSensor>,
        speed: f64,
        arena_width: f64,
    ) -> Self {
        Self {
            id,
            rect: Cell::new(rect),
            color,
            keyboard,
            speed,
            arena_width,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect.get()
    }

    fn reposition(&self, x: f64) {
        let rect = self.rect.get();
        self.rect.set(Rect::new(
            Point::new(x, rect.min_y()),
            rect.width(),
            rect.height(),
        ));
    }

    /// Shift left one speed increment, wrapping to the right edge once the
    /// paddle is entirely off-screen
    pub fn move_left(&self) {
        let rect = self.rect.get();
        let mut x = rect.min_x() - self.speed;
        if x + rect.width() < 0.0 {
            x = self.arena_width;
        }
        self.reposition(x);
    }

    /// Shift right one speed increment, wrapping to the left edge once the
    /// paddle is entirely off-screen
    pub fn move_right(&self) {
        let rect = self.rect.get();
        let mut x = rect.min_x() + self.speed;
        if x > self.arena_width {
            x = -rect.width();
        }
        self.reposition(x);
    }
}

impl Collidable for Paddle {
    fn id(&self) -> u32 {
        self.id
    }

    fn collision_rect(&self) -> Rect {
        self.rect.get()
    }

    /// Top-edge hits bounce by zone: the edge splits into five equal-width
    /// regions, the outer four mapping to fixed outgoing angles at the
    /// incoming speed and the center one flipping only the vertical
    /// component. Other edges are plain axis flips.
    fn hit(&self, _hitter: &Ball, collision_point: Point, current_velocity: Velocity) -> Velocity {
        let rect = self.rect.get();
        let speed = current_velocity.speed();

        if within_tolerance(collision_point.y, rect.min_y(), PADDLE_EDGE_TOLERANCE) {
            let zone_width = rect.width() / PADDLE_ZONES as f64;
            let offset = collision_point.x - rect.min_x();
            let zone = ((offset / zone_width) as i32).clamp(0, PADDLE_ZONES as i32 - 1);
            return match zone {
                0 => Velocity::from_angle_and_speed(210.0, speed),
                1 => Velocity::from_angle_and_speed(240.0, speed),
                2 => current_velocity.flip_dy(),
                3 => Velocity::from_angle_and_speed(300.0, speed),
                _ => Velocity::from_angle_and_speed(330.0, speed),
            };
        }
        if within_tolerance(collision_point.y, rect.max_y(), PADDLE_EDGE_TOLERANCE) {
            return current_velocity.flip_dy();
        }
        if within_tolerance(collision_point.x, rect.min_x(), PADDLE_EDGE_TOLERANCE)
            || within_tolerance(collision_point.x, rect.max_x(), PADDLE_EDGE_TOLERANCE)
        {
            return current_velocity.flip_dx();
        }
        // Safety net: whatever happened, send the ball back up
        Velocity::new(current_velocity.dx(), -current_velocity.dy().abs())
    }
}

impl Sprite for Paddle {
    fn id(&self) -> u32 {
        self.id
    }

    fn draw_on(&self, canvas: &mut dyn Canvas) {
        let rect = self.rect.get();
        canvas.set_color(self.color);
        canvas.fill_rect(rect.min_x(), rect.min_y(), rect.width(), rect.height());
    }

    fn time_passed(&self) {
        if self.keyboard.is_pressed(Key::Left) {
            self.move_left();
        }
        if self.keyboard.is_pressed(Key::Right) {
            self.move_right();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::platform::headless::ScriptedInput;
    use crate::sim::ball::ArenaBounds;
    use crate::sim::collision::{Environment, SharedEnvironment};

    const GRAY: Color = Color::new(64, 64, 64);

    fn test_paddle(keyboard: Rc<ScriptedInput>) -> Paddle {
        // 150 wide at (100, 500): zone width 30
        Paddle::new(
            9,
            Rect::new(Point::new(100.0, 500.0), 150.0, 10.0),
            GRAY,
            keyboard,
            9.0,
            800.0,
        )
    }

    fn test_ball() -> Ball {
        let env: SharedEnvironment = Rc::new(RefCell::new(Environment::new()));
        Ball::new(
            1,
            Point::new(0.0, 0.0),
            5.0,
            Color::new(255, 230, 200),
            env,
            ArenaBounds {
                width: 800.0,
                height: 600.0,
                wall_thickness: 0.0,
            },
        )
    }

    fn assert_close(v: Velocity, dx: f64, dy: f64) {
        assert!((v.dx() - dx).abs() < 1e-9, "dx {} vs {}", v.dx(), dx);
        assert!((v.dy() - dy).abs() < 1e-9, "dy {} vs {}", v.dy(), dy);
    }

    #[test]
    fn test_outer_zones_bounce_at_fixed_angles() {
        let paddle = test_paddle(Rc::new(ScriptedInput::new()));
        let ball = test_ball();
        let incoming = Velocity::new(3.0, 4.0); // speed 5

        let zone0 = paddle.hit(&ball, Point::new(115.0, 500.0), incoming);
        assert_close(zone0, 5.0 * 210f64.to_radians().cos(), 5.0 * 210f64.to_radians().sin());

        let zone1 = paddle.hit(&ball, Point::new(145.0, 500.0), incoming);
        assert_close(zone1, 5.0 * 240f64.to_radians().cos(), 5.0 * 240f64.to_radians().sin());

        let zone3 = paddle.hit(&ball, Point::new(205.0, 500.0), incoming);
        assert_close(zone3, 5.0 * 300f64.to_radians().cos(), 5.0 * 300f64.to_radians().sin());

        let zone4 = paddle.hit(&ball, Point::new(235.0, 500.0), incoming);
        assert_close(zone4, 5.0 * 330f64.to_radians().cos(), 5.0 * 330f64.to_radians().sin());
    }

    #[test]
    fn test_center_zone_flips_vertical_only() {
        let paddle = test_paddle(Rc::new(ScriptedInput::new()));
        let ball = test_ball();
        let out = paddle.hit(&ball, Point::new(175.0, 500.0), Velocity::new(3.0, 4.0));
        assert_eq!(out, Velocity::new(3.0, -4.0));
    }

    #[test]
    fn test_side_and_bottom_edges_axis_flip() {
        let paddle = test_paddle(Rc::new(ScriptedInput::new()));
        let ball = test_ball();

        let bottom = paddle.hit(&ball, Point::new(175.0, 510.0), Velocity::new(2.0, -3.0));
        assert_eq!(bottom, Velocity::new(2.0, 3.0));

        let left = paddle.hit(&ball, Point::new(100.0, 505.0), Velocity::new(2.0, 1.0));
        assert_eq!(left, Velocity::new(-2.0, 1.0));

        let right = paddle.hit(&ball, Point::new(250.0, 505.0), Velocity::new(-2.0, 1.0));
        assert_eq!(right, Velocity::new(2.0, 1.0));
    }

    #[test]
    fn test_fallback_forces_upward() {
        let paddle = test_paddle(Rc::new(ScriptedInput::new()));
        let ball = test_ball();
        // Interior point matching no edge
        let out = paddle.hit(&ball, Point::new(175.0, 505.0), Velocity::new(2.0, 3.0));
        assert_eq!(out, Velocity::new(2.0, -3.0));
        // Already-upward vertical stays upward
        let out = paddle.hit(&ball, Point::new(175.0, 505.0), Velocity::new(2.0, -3.0));
        assert_eq!(out, Velocity::new(2.0, -3.0));
    }

    #[test]
    fn test_keyboard_moves_paddle() {
        let keyboard = Rc::new(ScriptedInput::new());
        let paddle = test_paddle(Rc::clone(&keyboard));

        keyboard.press(Key::Left);
        paddle.time_passed();
        assert_eq!(paddle.rect().min_x(), 91.0);

        keyboard.release(Key::Left);
        keyboard.press(Key::Right);
        paddle.time_passed();
        paddle.time_passed();
        assert_eq!(paddle.rect().min_x(), 109.0);
    }

    #[test]
    fn test_wraparound_left_and_right() {
        let keyboard: Rc<dyn InputSensor> = Rc::new(ScriptedInput::new());
        let paddle = Paddle::new(
            9,
            Rect::new(Point::new(-145.0, 500.0), 150.0, 10.0),
            GRAY,
            Rc::clone(&keyboard),
            9.0,
            800.0,
        );
        // -154 + 150 < 0: fully off-screen, wrap to the right edge
        paddle.move_left();
        assert_eq!(paddle.rect().min_x(), 800.0);

        // 800 + 9 > 800: wrap to flush with the left edge
        paddle.move_right();
        assert_eq!(paddle.rect().min_x(), -150.0);
    }
}
