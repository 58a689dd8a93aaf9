//! Static rectangular obstacles: bricks, boundary walls and the floor

use std::cell::RefCell;
use std::rc::Rc;

use crate::consts::EDGE_TOLERANCE;
use crate::geometry::{Point, Rect};
use crate::platform::{Canvas, Color};
use crate::within_tolerance;

use super::ball::Ball;
use super::collision::Collidable;
use super::events::{HitListener, HitNotifier, ListenerHandle};
use super::sprite::Sprite;
use super::velocity::Velocity;

/// What a block means to the game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    /// Scorable brick: removable, tags the ball that breaks it
    Brick,
    /// Boundary wall: reflects and nothing else
    Wall,
    /// The arena floor: a hit means the ball has left play
    Floor,
}

/// A static rectangular obstacle
pub struct Block {
    id: u32,
    rect: Rect,
    color: Color,
    role: BlockRole,
    listeners: RefCell<Vec<ListenerHandle>>,
}

impl Block {
    pub fn new(id: u32, rect: Rect, color: Color, role: BlockRole) -> Self {
        Self {
            id,
            rect,
            color,
            role,
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn role(&self) -> BlockRole {
        self.role
    }

    pub fn is_floor(&self) -> bool {
        self.role == BlockRole::Floor
    }

    /// Notify every registered listener. Iterates a snapshot so a listener
    /// may deregister (itself included) during the callback.
    fn notify_hit(&self, hitter: &Ball) {
        let snapshot: Vec<ListenerHandle> = self.listeners.borrow().clone();
        for listener in snapshot {
            listener.hit_event(self, hitter);
        }
    }
}

impl Collidable for Block {
    fn id(&self) -> u32 {
        self.id
    }

    fn collision_rect(&self) -> Rect {
        self.rect
    }

    fn hit(&self, hitter: &Ball, collision_point: Point, current_velocity: Velocity) -> Velocity {
        let mut outgoing = current_velocity;
        let mut deflected = false;

        if within_tolerance(collision_point.x, self.rect.min_x(), EDGE_TOLERANCE)
            || within_tolerance(collision_point.x, self.rect.max_x(), EDGE_TOLERANCE)
        {
            outgoing = outgoing.flip_dx();
            deflected = true;
        }
        if within_tolerance(collision_point.y, self.rect.min_y(), EDGE_TOLERANCE)
            || within_tolerance(collision_point.y, self.rect.max_y(), EDGE_TOLERANCE)
        {
            outgoing = outgoing.flip_dy();
            deflected = true;
        }
        // Degenerate contact matching no edge: send the ball straight back
        if !deflected {
            outgoing = outgoing.flip_dx().flip_dy();
        }

        match self.role {
            BlockRole::Floor => self.notify_hit(hitter),
            BlockRole::Brick if hitter.color() != self.color => {
                // Stamp the brick's color onto the ball; a matching ball
                // cannot trigger scoring or removal again
                hitter.set_color(self.color);
                self.notify_hit(hitter);
            }
            _ => {}
        }

        outgoing
    }

    fn counts_as_brick(&self) -> bool {
        self.role == BlockRole::Brick
    }
}

impl HitNotifier for Block {
    fn add_hit_listener(&self, listener: ListenerHandle) {
        self.listeners.borrow_mut().push(listener);
    }

    fn remove_hit_listener(&self, listener: &dyn HitListener) {
        let target = listener as *const dyn HitListener as *const ();
        self.listeners
            .borrow_mut()
            .retain(|l| Rc::as_ptr(l) as *const () != target);
    }
}

impl Sprite for Block {
    fn id(&self) -> u32 {
        self.id
    }

    fn draw_on(&self, canvas: &mut dyn Canvas) {
        canvas.set_color(self.color);
        canvas.fill_rect(
            self.rect.min_x(),
            self.rect.min_y(),
            self.rect.width(),
            self.rect.height(),
        );
        canvas.set_color(Color::BLACK);
        canvas.draw_rect(
            self.rect.min_x(),
            self.rect.min_y(),
            self.rect.width(),
            self.rect.height(),
        );
    }

    fn time_passed(&self) {
        // Static obstacle
    }
}
