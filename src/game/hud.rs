//! Score display strip

use std::rc::Rc;

use crate::geometry::Rect;
use crate::platform::{Canvas, Color};
use crate::sim::{Counter, Sprite};

/// Sprite that paints the score strip along the top of the arena
pub struct ScoreBoard {
    id: u32,
    rect: Rect,
    color: Color,
    score: Rc<Counter>,
}

impl ScoreBoard {
    pub fn new(id: u32, rect: Rect, color: Color, score: Rc<Counter>) -> Self {
        Self {
            id,
            rect,
            color,
            score,
        }
    }
}

impl Sprite for ScoreBoard {
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
        canvas.draw_text(
            self.rect.min_x() + self.rect.width() / 2.0,
            self.rect.max_y() - 10.0,
            &format!("Score: {}", self.score.value()),
            18,
        );
    }

    fn time_passed(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::platform::headless::{DrawCall, RecordingCanvas};

    #[test]
    fn test_score_board_draws_current_score() {
        let score = Rc::new(Counter::new());
        score.increase(35);
        let board = ScoreBoard::new(
            1,
            Rect::new(Point::new(0.0, 0.0), 800.0, 30.0),
            Color::new(255, 255, 0),
            Rc::clone(&score),
        );

        let mut canvas = RecordingCanvas::new(800, 600);
        board.draw_on(&mut canvas);

        assert!(canvas.calls.iter().any(|call| matches!(
            call,
            DrawCall::DrawText { text, .. } if text == "Score: 35"
        )));
    }
}
