//! Game composition: wiring, counters and the frame loop
//!
//! One logical tick = render the frame, check win/lose, advance every
//! sprite (which dispatches collision side effects synchronously), then
//! hold the frame budget. Everything runs on the single tick thread.

pub mod config;
pub mod hud;

pub use config::GameConfig;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::consts::{FRAMES_PER_SECOND, WIN_BONUS};
use crate::geometry::{Point, Rect};
use crate::platform::{Color, FrameHost, InputSensor};
use crate::sim::{
    ArenaBounds, Ball, BallRemover, Block, BlockRemover, BlockRole, Collidable, Counter,
    Environment, HitNotifier, Paddle, ScoreTracker, SharedEnvironment, SharedSpriteSet, SpriteSet,
    Velocity, notify_all_time_passed,
};

use hud::ScoreBoard;

/// Where a run currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

/// Final result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    pub score: i32,
}

/// Owner of the arena: counters, membership views and the frame loop
pub struct Game {
    config: GameConfig,
    sprites: SharedSpriteSet,
    environment: SharedEnvironment,
    remaining_blocks: Rc<Counter>,
    remaining_balls: Rc<Counter>,
    score: Rc<Counter>,
    bonus_awarded: bool,
    next_id: u32,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            sprites: Rc::new(RefCell::new(SpriteSet::new())),
            environment: Rc::new(RefCell::new(Environment::new())),
            remaining_blocks: Rc::new(Counter::new()),
            remaining_balls: Rc::new(Counter::new()),
            score: Rc::new(Counter::new()),
            bonus_awarded: false,
            next_id: 1,
        }
    }

    pub fn score(&self) -> i32 {
        self.score.value()
    }

    pub fn remaining_blocks(&self) -> i32 {
        self.remaining_blocks.value()
    }

    pub fn remaining_balls(&self) -> i32 {
        self.remaining_balls.value()
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Build the arena: HUD, walls, bricks, paddle and balls, wired to the
    /// rule listeners that tie hits to scoring and removal
    pub fn setup(&mut self, keyboard: Rc<dyn InputSensor>) {
        let block_remover = Rc::new(BlockRemover::new(
            Rc::clone(&self.environment),
            Rc::clone(&self.sprites),
            Rc::clone(&self.remaining_blocks),
        ));
        let score_tracker = Rc::new(ScoreTracker::new(Rc::clone(&self.score)));
        let ball_remover = Rc::new(BallRemover::new(
            Rc::clone(&self.sprites),
            Rc::clone(&self.remaining_balls),
        ));

        self.add_score_board();
        self.add_walls(&ball_remover);
        self.add_bricks(&block_remover, &score_tracker);
        self.add_paddle(keyboard);
        self.add_balls();

        // The brick tally comes from the environment itself, so it always
        // matches what collision queries can actually reach
        let bricks = self
            .environment
            .borrow()
            .iter()
            .filter(|c| c.counts_as_brick())
            .count();
        self.remaining_blocks.increase(bricks as i32);

        log::info!(
            "arena ready: {} bricks, {} balls",
            self.remaining_blocks.value(),
            self.remaining_balls.value()
        );
    }

    fn add_block(&mut self, rect: Rect, color: Color, role: BlockRole) -> Rc<Block> {
        let block = Rc::new(Block::new(self.next_entity_id(), rect, color, role));
        self.environment.borrow_mut().add(block.clone());
        self.sprites.borrow_mut().add(block.clone());
        block
    }

    fn add_score_board(&mut self) {
        let rect = Rect::new(
            Point::new(0.0, 0.0),
            self.config.arena_width,
            self.config.wall_thickness,
        );
        let board = Rc::new(ScoreBoard::new(
            self.next_entity_id(),
            rect,
            self.config.hud_color,
            Rc::clone(&self.score),
        ));
        self.sprites.borrow_mut().add(board);
    }

    /// Three reflecting walls plus the floor sentinel along the bottom.
    /// The top wall sits below the HUD strip.
    fn add_walls(&mut self, ball_remover: &Rc<BallRemover>) {
        let (w, h, t) = (
            self.config.arena_width,
            self.config.arena_height,
            self.config.wall_thickness,
        );
        let color = self.config.wall_color;

        self.add_block(Rect::new(Point::new(0.0, t), w, t), color, BlockRole::Wall);
        self.add_block(Rect::new(Point::new(0.0, 0.0), t, h), color, BlockRole::Wall);
        self.add_block(
            Rect::new(Point::new(w - t, 0.0), t, h),
            color,
            BlockRole::Wall,
        );

        let floor = self.add_block(
            Rect::new(Point::new(0.0, h - t), w, t),
            color,
            BlockRole::Floor,
        );
        floor.add_hit_listener(ball_remover.clone());
    }

    /// Triangular brick field: each row one brick shorter, right-aligned
    fn add_bricks(&mut self, block_remover: &Rc<BlockRemover>, score_tracker: &Rc<ScoreTracker>) {
        let config = self.config.clone();
        let mut y = config.first_row_y;
        for row in 0..config.block_rows {
            let color = config
                .row_colors
                .get(row as usize % config.row_colors.len().max(1))
                .copied()
                .unwrap_or(config.wall_color);
            let mut x = config.first_block_x;
            for _ in 0..config.blocks_in_first_row.saturating_sub(row) {
                let brick = self.add_block(
                    Rect::new(Point::new(x, y), config.block_width, config.block_height),
                    color,
                    BlockRole::Brick,
                );
                brick.add_hit_listener(block_remover.clone());
                brick.add_hit_listener(score_tracker.clone());
                x -= config.block_width;
            }
            y += config.block_height;
        }
    }

    fn add_paddle(&mut self, keyboard: Rc<dyn InputSensor>) {
        let rect = Rect::new(
            Point::new(self.config.paddle_x, self.config.paddle_y),
            self.config.paddle_width,
            self.config.paddle_height,
        );
        let (color, speed, arena_width) = (
            self.config.paddle_color,
            self.config.paddle_speed,
            self.config.arena_width,
        );
        let paddle = Rc::new(Paddle::new(
            self.next_entity_id(),
            rect,
            color,
            keyboard,
            speed,
            arena_width,
        ));
        self.environment.borrow_mut().add(paddle.clone());
        self.sprites.borrow_mut().add(paddle);
    }

    fn add_balls(&mut self) {
        let bounds = ArenaBounds {
            width: self.config.arena_width,
            height: self.config.arena_height,
            wall_thickness: self.config.wall_thickness,
        };
        let spawn = Point::new(self.config.ball_spawn_x, self.config.ball_spawn_y);
        let velocity = Velocity::new(self.config.ball_dx, self.config.ball_dy);
        let (radius, color) = (self.config.ball_radius, self.config.ball_color);

        for _ in 0..self.config.ball_count {
            let ball = Rc::new(Ball::new(
                self.next_entity_id(),
                spawn,
                radius,
                color,
                Rc::clone(&self.environment),
                bounds,
            ));
            ball.set_velocity(velocity);
            self.sprites.borrow_mut().add(ball);
            self.remaining_balls.increase(1);
        }
    }

    /// Win/lose check, run once per tick. Losing takes precedence: a win
    /// needs at least one ball still in play. The win bonus is awarded on
    /// the first detection only.
    fn evaluate_status(&mut self) -> GameStatus {
        let status = if self.remaining_balls.value() == 0 {
            GameStatus::Lost
        } else if self.remaining_blocks.value() == 0 {
            GameStatus::Won
        } else {
            GameStatus::Running
        };

        if status == GameStatus::Won && !self.bonus_awarded {
            self.score.increase(WIN_BONUS);
            self.bonus_awarded = true;
            log::info!(
                "arena cleared, +{WIN_BONUS} bonus, final score {}",
                self.score.value()
            );
        }
        status
    }

    /// Run one frame: render, check win/lose, advance every sprite and
    /// hold the frame budget
    pub fn tick(&mut self, host: &mut dyn FrameHost) -> GameStatus {
        let frame_start = Instant::now();
        let frame_budget = Duration::from_millis(1000 / FRAMES_PER_SECOND as u64);

        let canvas = host.frame();
        canvas.set_color(self.config.background_color);
        canvas.fill_rect(0.0, 0.0, self.config.arena_width, self.config.arena_height);
        self.sprites.borrow().draw_all_on(canvas);
        host.present();

        let status = self.evaluate_status();
        if status != GameStatus::Running {
            return status;
        }

        notify_all_time_passed(&self.sprites);

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            host.sleep(remaining.as_millis() as u64);
        }

        self.evaluate_status()
    }

    /// Drive ticks until the run ends
    pub fn run(&mut self, host: &mut dyn FrameHost) -> GameOutcome {
        loop {
            match self.tick(host) {
                GameStatus::Running => {}
                GameStatus::Won => {
                    log::info!("you win! score {}", self.score.value());
                    return GameOutcome {
                        won: true,
                        score: self.score.value(),
                    };
                }
                GameStatus::Lost => {
                    log::info!("game over, score {}", self.score.value());
                    return GameOutcome {
                        won: false,
                        score: self.score.value(),
                    };
                }
            }
        }
    }
}
