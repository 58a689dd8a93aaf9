//! Brick Bounce entry point
//!
//! Runs the arena headless: frames draw into a recording canvas, the
//! paddle sits still, and the outcome is logged. An optional first
//! argument names a JSON config file.

use std::path::Path;
use std::rc::Rc;

use brick_bounce::game::{Game, GameConfig, GameStatus};
use brick_bounce::platform::headless::{HeadlessHost, ScriptedInput};

/// Safety cap for the demo loop; a run that has not ended by then is
/// reported as still running
const MAX_FRAMES: u64 = 100_000;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_or_default(Path::new(&path)),
        None => GameConfig::default(),
    };

    let mut host = HeadlessHost::new(config.arena_width as u32, config.arena_height as u32);
    let keyboard = Rc::new(ScriptedInput::new());

    let mut game = Game::new(config);
    game.setup(keyboard);

    let mut frames = 0u64;
    let status = loop {
        let status = game.tick(&mut host);
        frames += 1;
        if status != GameStatus::Running || frames >= MAX_FRAMES {
            break status;
        }
    };

    log::info!(
        "{frames} frames, status {status:?}, score {}, bricks left {}, balls left {}",
        game.score(),
        game.remaining_blocks(),
        game.remaining_balls()
    );
}
