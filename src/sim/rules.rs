//! Game-rule listeners: scoring and removal
//!
//! Composed, not inherited: each rule is its own listener registered on the
//! blocks it cares about.

use std::rc::Rc;

use crate::consts::BLOCK_SCORE;

use super::ball::Ball;
use super::block::Block;
use super::collision::{Collidable, SharedEnvironment};
use super::events::{Counter, HitListener, HitNotifier};
use super::sprite::SharedSpriteSet;

/// Awards points for every qualifying brick hit
pub struct ScoreTracker {
    score: Rc<Counter>,
}

impl ScoreTracker {
    pub fn new(score: Rc<Counter>) -> Self {
        Self { score }
    }
}

impl HitListener for ScoreTracker {
    fn hit_event(&self, _being_hit: &Block, _hitter: &Ball) {
        self.score.increase(BLOCK_SCORE);
    }
}

/// Takes a destroyed brick out of play and keeps the remaining-bricks tally
pub struct BlockRemover {
    environment: SharedEnvironment,
    sprites: SharedSpriteSet,
    remaining_blocks: Rc<Counter>,
}

impl BlockRemover {
    pub fn new(
        environment: SharedEnvironment,
        sprites: SharedSpriteSet,
        remaining_blocks: Rc<Counter>,
    ) -> Self {
        Self {
            environment,
            sprites,
            remaining_blocks,
        }
    }
}

impl HitListener for BlockRemover {
    fn hit_event(&self, being_hit: &Block, _hitter: &Ball) {
        if being_hit.is_floor() {
            return;
        }
        being_hit.remove_hit_listener(self);
        self.environment.borrow_mut().remove(being_hit.id());
        self.sprites.borrow_mut().remove(being_hit.id());
        self.remaining_blocks.decrease(1);
        log::debug!(
            "block {} destroyed, {} remaining",
            being_hit.id(),
            self.remaining_blocks.value()
        );
    }
}

/// Takes a lost ball out of play and keeps the remaining-balls tally
pub struct BallRemover {
    sprites: SharedSpriteSet,
    remaining_balls: Rc<Counter>,
}

impl BallRemover {
    pub fn new(sprites: SharedSpriteSet, remaining_balls: Rc<Counter>) -> Self {
        Self {
            sprites,
            remaining_balls,
        }
    }
}

impl HitListener for BallRemover {
    fn hit_event(&self, _being_hit: &Block, hitter: &Ball) {
        self.sprites.borrow_mut().remove(hitter.id());
        self.remaining_balls.decrease(1);
        log::debug!(
            "ball {} left play, {} remaining",
            hitter.id(),
            self.remaining_balls.value()
        );
    }
}
