//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One logical tick at a time, single-threaded
//! - Stable iteration order (environment and sprite insertion order)
//! - No rendering or input backends, only their trait boundaries

pub mod ball;
pub mod block;
pub mod collision;
pub mod events;
pub mod paddle;
pub mod rules;
pub mod sprite;
pub mod velocity;

pub use ball::{ArenaBounds, Ball};
pub use block::{Block, BlockRole};
pub use collision::{
    Collidable, CollidableHandle, CollisionInfo, Environment, SharedEnvironment,
};
pub use events::{Counter, HitListener, HitNotifier, ListenerHandle};
pub use paddle::Paddle;
pub use rules::{BallRemover, BlockRemover, ScoreTracker};
pub use sprite::{
    SharedSpriteSet, Sprite, SpriteHandle, SpriteSet, notify_all_time_passed,
};
pub use velocity::Velocity;
