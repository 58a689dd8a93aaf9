//! Collision capability and the nearest-collision query
//!
//! The `Environment` owns membership only: entities register and deregister
//! their own handles, and lifetime belongs to the game composition.

use std::cell::RefCell;
use std::rc::Rc;

use super::ball::Ball;
use super::velocity::Velocity;
use crate::geometry::{Line, Point, Rect};

/// Capability contract for anything a moving ball can strike.
///
/// Implementors are shared, single-threaded views (`Rc`), so the hit
/// response takes `&self` and mutates through interior cells where it must.
pub trait Collidable {
    /// Stable identity used for environment and sprite-set membership
    fn id(&self) -> u32;

    /// The rectangle collision queries test against
    fn collision_rect(&self) -> Rect;

    /// Respond to a hit at `collision_point` with the given incoming
    /// velocity, returning the outgoing velocity
    fn hit(&self, hitter: &Ball, collision_point: Point, current_velocity: Velocity) -> Velocity;

    /// Whether this obstacle counts toward the remaining-bricks tally
    fn counts_as_brick(&self) -> bool {
        false
    }
}

/// Shared handle to a registered obstacle
pub type CollidableHandle = Rc<dyn Collidable>;

/// The answer to "what will this trajectory hit first, and where"
#[derive(Clone)]
pub struct CollisionInfo {
    object: CollidableHandle,
    point: Point,
}

impl CollisionInfo {
    pub fn new(object: CollidableHandle, point: Point) -> Self {
        Self { object, point }
    }

    pub fn collision_object(&self) -> &CollidableHandle {
        &self.object
    }

    pub fn collision_point(&self) -> Point {
        self.point
    }
}

/// The set of obstacles collision queries run against
#[derive(Default)]
pub struct Environment {
    collidables: Vec<CollidableHandle>,
}

/// Environment shared across the ball, the rule listeners and the game
pub type SharedEnvironment = Rc<RefCell<Environment>>;

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, collidable: CollidableHandle) {
        self.collidables.push(collidable);
    }

    /// Remove by identity; removing a non-member is a no-op
    pub fn remove(&mut self, id: u32) {
        self.collidables.retain(|c| c.id() != id);
    }

    pub fn len(&self) -> usize {
        self.collidables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collidables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollidableHandle> {
        self.collidables.iter()
    }

    /// The collision nearest the trajectory's start, or `None` when the
    /// trajectory crosses no member's rectangle within its own extent.
    /// Registration order breaks exact distance ties.
    pub fn closest_collision(&self, trajectory: &Line) -> Option<CollisionInfo> {
        let mut nearest: Option<(f64, CollisionInfo)> = None;
        for collidable in &self.collidables {
            let rect = collidable.collision_rect();
            let Some(point) = trajectory.closest_intersection_to_start(&rect) else {
                continue;
            };
            let distance = trajectory.start().distance(point);
            let is_nearer = match &nearest {
                Some((best, _)) => distance < *best,
                None => true,
            };
            if is_nearer {
                nearest = Some((distance, CollisionInfo::new(Rc::clone(collidable), point)));
            }
        }
        nearest.map(|(_, info)| info)
    }
}
