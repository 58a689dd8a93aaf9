//! The moving ball: sub-stepped motion and collision resolution

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::{REPOSITION_MARGIN, REPOSITION_PROXIMITY, SUB_STEPS};
use crate::geometry::{Line, Point, Rect};
use crate::platform::{Canvas, Color};
use crate::within_tolerance;

use super::collision::{Collidable, SharedEnvironment};
use super::sprite::Sprite;
use super::velocity::Velocity;

/// Usable-arena bounds: the region inside the wall thickness on every side
#[derive(Debug, Clone, Copy)]
pub struct ArenaBounds {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
}

impl ArenaBounds {
    /// Whether a center position has slipped past all containment
    fn escaped(&self, p: Point) -> bool {
        p.x < self.wall_thickness
            || p.x > self.width - self.wall_thickness
            || p.y < self.wall_thickness
            || p.y > self.height - self.wall_thickness
    }
}

/// The moving circular body
pub struct Ball {
    id: u32,
    center: Cell<Point>,
    radius: f64,
    color: Cell<Color>,
    velocity: Cell<Option<Velocity>>,
    spawn: Point,
    environment: SharedEnvironment,
    bounds: ArenaBounds,
}

impl Ball {
    pub fn new(
        id: u32,
        center: Point,
        radius: f64,
        color: Color,
        environment: SharedEnvironment,
        bounds: ArenaBounds,
    ) -> Self {
        Self {
            id,
            center: Cell::new(center),
            radius,
            color: Cell::new(color),
            velocity: Cell::new(None),
            spawn: center,
            environment,
            bounds,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn center(&self) -> Point {
        self.center.get()
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color.get()
    }

    /// Retag the ball; bricks stamp their color onto the ball that broke
    /// them so a repeat hit cannot score twice
    pub fn set_color(&self, color: Color) {
        self.color.set(color);
    }

    pub fn velocity(&self) -> Option<Velocity> {
        self.velocity.get()
    }

    pub fn set_velocity(&self, velocity: Velocity) {
        self.velocity.set(Some(velocity));
    }

    /// Advance one tick of motion, resolving at most one collision.
    ///
    /// The tick's displacement is applied in `SUB_STEPS` slices so a ball
    /// faster than an obstacle is thick cannot pass through it between
    /// queries. On a hit the center lands exactly on the collision point,
    /// the velocity is replaced by the obstacle's response, the center is
    /// nudged clear of the struck edge, and the rest of the tick is
    /// abandoned.
    pub fn move_one_step(&self) {
        let Some(velocity) = self.velocity.get() else {
            return;
        };
        let step = Velocity::new(
            velocity.dx() / SUB_STEPS as f64,
            velocity.dy() / SUB_STEPS as f64,
        );

        for _ in 0..SUB_STEPS {
            let current = self.center.get();
            let candidate = step.apply_to(current);
            let trajectory = Line::new(current, candidate);
            let collision = self.environment.borrow().closest_collision(&trajectory);

            let Some(collision) = collision else {
                self.center.set(candidate);
                continue;
            };

            let object = Rc::clone(collision.collision_object());
            let rect = object.collision_rect();
            let point = collision.collision_point();

            self.center.set(point);
            let outgoing = object.hit(self, point, velocity);
            self.velocity.set(Some(outgoing));
            self.nudge_off_edge(&rect);
            break;
        }

        if self.bounds.escaped(self.center.get()) {
            log::debug!("ball {} escaped containment, respawning", self.id);
            self.center.set(self.spawn);
        }
    }

    /// Step the center clear of the struck edge so the next query does not
    /// re-detect the same contact. Edges are proximity-matched in a fixed
    /// order (left, right, top, bottom); the first match wins.
    fn nudge_off_edge(&self, rect: &Rect) {
        let p = self.center.get();
        let offset = self.radius + REPOSITION_MARGIN;

        if within_tolerance(p.x, rect.min_x(), REPOSITION_PROXIMITY) {
            self.center.set(Point::new(rect.min_x() - offset, p.y));
        } else if within_tolerance(p.x, rect.max_x(), REPOSITION_PROXIMITY) {
            self.center.set(Point::new(rect.max_x() + offset, p.y));
        } else if within_tolerance(p.y, rect.min_y(), REPOSITION_PROXIMITY) {
            self.center.set(Point::new(p.x, rect.min_y() - offset));
        } else if within_tolerance(p.y, rect.max_y(), REPOSITION_PROXIMITY) {
            self.center.set(Point::new(p.x, rect.max_y() + offset));
        }
    }
}

impl Sprite for Ball {
    fn id(&self) -> u32 {
        self.id
    }

    fn draw_on(&self, canvas: &mut dyn Canvas) {
        let center = self.center.get();
        canvas.set_color(self.color.get());
        canvas.fill_circle(center.x, center.y, self.radius);
    }

    fn time_passed(&self) {
        self.move_one_step();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::sim::block::{Block, BlockRole};
    use crate::sim::collision::Environment;

    fn open_bounds() -> ArenaBounds {
        ArenaBounds {
            width: 10_000.0,
            height: 10_000.0,
            wall_thickness: 0.0,
        }
    }

    fn ball_at(x: f64, y: f64, env: SharedEnvironment, bounds: ArenaBounds) -> Ball {
        Ball::new(1, Point::new(x, y), 5.0, Color::new(255, 230, 200), env, bounds)
    }

    #[test]
    fn test_unset_velocity_does_not_move() {
        let env: SharedEnvironment = Rc::new(RefCell::new(Environment::new()));
        let ball = ball_at(400.0, 300.0, env, open_bounds());
        for _ in 0..10 {
            ball.move_one_step();
        }
        assert!(ball.center().approx_eq(Point::new(400.0, 300.0)));
    }

    #[test]
    fn test_zero_velocity_does_not_move() {
        let env: SharedEnvironment = Rc::new(RefCell::new(Environment::new()));
        let ball = ball_at(400.0, 300.0, env, open_bounds());
        ball.set_velocity(Velocity::new(0.0, 0.0));
        for _ in 0..10 {
            ball.move_one_step();
        }
        assert!(ball.center().approx_eq(Point::new(400.0, 300.0)));
    }

    #[test]
    fn test_free_flight_advances_full_displacement() {
        let env: SharedEnvironment = Rc::new(RefCell::new(Environment::new()));
        let ball = ball_at(100.0, 100.0, env, open_bounds());
        ball.set_velocity(Velocity::new(6.0, -2.0));
        ball.move_one_step();
        let p = ball.center();
        assert!((p.x - 106.0).abs() < 1e-9);
        assert!((p.y - 98.0).abs() < 1e-9);
    }

    #[test]
    fn test_thin_obstacle_is_not_tunneled() {
        // Per-tick travel (50) far exceeds the obstacle thickness (5):
        // a single full-step query could jump the wall, sub-stepping must
        // not.
        let mut env = Environment::new();
        env.add(Rc::new(Block::new(
            2,
            Rect::new(Point::new(120.0, 0.0), 5.0, 600.0),
            Color::new(100, 100, 100),
            BlockRole::Brick,
        )));
        let env: SharedEnvironment = Rc::new(RefCell::new(env));

        let ball = ball_at(100.0, 300.0, Rc::clone(&env), open_bounds());
        ball.set_velocity(Velocity::new(50.0, 0.0));
        ball.move_one_step();

        // Stopped at the near edge (nudged back by radius + margin)
        assert!(ball.center().x < 120.0);
        assert!((ball.center().x - (120.0 - 5.1)).abs() < 1e-9);
        // And reflected
        assert_eq!(ball.velocity().unwrap(), Velocity::new(-50.0, 0.0));
    }

    #[test]
    fn test_collision_stops_rest_of_tick() {
        // Two walls 20 apart; one tick of travel could cross both, but only
        // one collision may resolve per tick
        let mut env = Environment::new();
        env.add(Rc::new(Block::new(
            2,
            Rect::new(Point::new(120.0, 0.0), 5.0, 600.0),
            Color::new(100, 100, 100),
            BlockRole::Brick,
        )));
        env.add(Rc::new(Block::new(
            3,
            Rect::new(Point::new(95.0, 0.0), 5.0, 600.0),
            Color::new(100, 100, 100),
            BlockRole::Brick,
        )));
        let env: SharedEnvironment = Rc::new(RefCell::new(env));

        let ball = ball_at(110.0, 300.0, Rc::clone(&env), open_bounds());
        ball.set_velocity(Velocity::new(60.0, 0.0));
        ball.move_one_step();

        // Bounced off the right-hand wall and stopped; the wall behind is
        // untouched until the next tick
        assert!(ball.center().x < 120.0);
        assert!(ball.center().x > 100.0);
    }

    #[test]
    fn test_escape_resets_to_spawn() {
        let env: SharedEnvironment = Rc::new(RefCell::new(Environment::new()));
        let bounds = ArenaBounds {
            width: 800.0,
            height: 600.0,
            wall_thickness: 30.0,
        };
        let ball = ball_at(400.0, 100.0, env, bounds);
        // Nothing to collide with, so the ball sails straight out the top
        ball.set_velocity(Velocity::new(0.0, -200.0));
        ball.move_one_step();
        assert!(ball.center().approx_eq(Point::new(400.0, 100.0)));
    }
}
