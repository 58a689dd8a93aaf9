//! Drawable, tick-advanced entities

use std::cell::RefCell;
use std::rc::Rc;

use crate::platform::Canvas;

/// Capability contract for anything drawn and advanced each tick
pub trait Sprite {
    /// Stable identity used for sprite-set membership
    fn id(&self) -> u32;

    /// Render onto the current frame's canvas
    fn draw_on(&self, canvas: &mut dyn Canvas);

    /// Advance one tick of game time
    fn time_passed(&self);
}

/// Shared handle to an active sprite
pub type SpriteHandle = Rc<dyn Sprite>;

/// Sprite set shared across the game and the rule listeners
pub type SharedSpriteSet = Rc<RefCell<SpriteSet>>;

/// Insertion-ordered set of active sprites
#[derive(Default)]
pub struct SpriteSet {
    sprites: Vec<SpriteHandle>,
}

impl SpriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sprite: SpriteHandle) {
        self.sprites.push(sprite);
    }

    /// Remove by identity; removing a non-member is a no-op
    pub fn remove(&mut self, id: u32) {
        self.sprites.retain(|s| s.id() != id);
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.sprites.iter().any(|s| s.id() == id)
    }

    /// A defensive copy of the current handles
    pub fn snapshot(&self) -> Vec<SpriteHandle> {
        self.sprites.clone()
    }

    /// Draw every sprite in insertion order
    pub fn draw_all_on(&self, canvas: &mut dyn Canvas) {
        for sprite in &self.sprites {
            sprite.draw_on(canvas);
        }
    }
}

/// Advance every sprite one tick. Iterates a snapshot: a `time_passed`
/// callback may remove sprites (itself included) from the live set.
pub fn notify_all_time_passed(sprites: &SharedSpriteSet) {
    let snapshot = sprites.borrow().snapshot();
    for sprite in snapshot {
        sprite.time_passed();
    }
}
