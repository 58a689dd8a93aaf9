//! Brick Bounce - a deterministic Breakout-style arcade core
//!
//! Core modules:
//! - `geometry`: pure point/segment/rectangle intersection math
//! - `sim`: deterministic simulation (motion, collisions, hit events)
//! - `platform`: render-target/input/frame-host trait boundaries
//! - `game`: composition, wiring and the frame loop

pub mod game;
pub mod geometry;
pub mod platform;
pub mod sim;

pub use game::{Game, GameConfig, GameOutcome, GameStatus};
pub use platform::Color;

/// Game configuration constants
pub mod consts {
    /// Target frame rate for the fixed-step loop
    pub const FRAMES_PER_SECOND: u32 = 60;
    /// Sub-steps each tick's displacement is divided into. Keeps a fast
    /// ball from tunneling through obstacles thinner than one tick of travel.
    pub const SUB_STEPS: u32 = 50;

    /// Absolute tolerance for exact floating-point coordinate matches
    pub const EPSILON: f64 = 1e-7;
    /// Tolerance for classifying which block edge a collision point lies on
    pub const EDGE_TOLERANCE: f64 = 0.3;
    /// Tolerance for classifying paddle-edge hits
    pub const PADDLE_EDGE_TOLERANCE: f64 = 0.1;
    /// Proximity within which the post-hit reposition matches an edge
    pub const REPOSITION_PROXIMITY: f64 = 1.0;
    /// Clearance added beyond the ball radius when nudging off a struck edge
    pub const REPOSITION_MARGIN: f64 = 0.1;

    /// Zones across the paddle's top edge, each with its own bounce angle
    pub const PADDLE_ZONES: u32 = 5;

    /// Score awarded per destroyed brick
    pub const BLOCK_SCORE: i32 = 5;
    /// Bonus awarded once when the last brick falls
    pub const WIN_BONUS: i32 = 100;
}

/// Compare two coordinates for equality within the fixed tolerance
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < consts::EPSILON
}

/// Compare two coordinates within a caller-supplied tolerance
#[inline]
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
