//! Headless platform doubles
//!
//! A recording canvas, a scripted keyboard and an instant frame host. The
//! binary demo and the test-suite run the full game loop against these
//! without a window.

use std::cell::Cell;

use super::{Canvas, Color, FrameHost, InputSensor, Key};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    SetColor(Color),
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    DrawRect { x: f64, y: f64, width: f64, height: f64 },
    FillCircle { x: f64, y: f64, radius: f64 },
    DrawText { x: f64, y: f64, text: String, size: u32 },
}

/// Canvas that records every call instead of rasterizing
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetColor(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::FillRect { x, y, width, height });
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::DrawRect { x, y, width, height });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.calls.push(DrawCall::FillCircle { x, y, radius });
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, size: u32) {
        self.calls.push(DrawCall::DrawText {
            x,
            y,
            text: text.to_owned(),
            size,
        });
    }
}

/// Keyboard driven by the host program instead of real input events
#[derive(Default)]
pub struct ScriptedInput {
    left: Cell<bool>,
    right: Cell<bool>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, key: Key) {
        self.cell(key).set(true);
    }

    pub fn release(&self, key: Key) {
        self.cell(key).set(false);
    }

    fn cell(&self, key: Key) -> &Cell<bool> {
        match key {
            Key::Left => &self.left,
            Key::Right => &self.right,
        }
    }
}

impl InputSensor for ScriptedInput {
    fn is_pressed(&self, key: Key) -> bool {
        self.cell(key).get()
    }
}

/// Frame host that never blocks: frames draw into a recording canvas and
/// sleep requests are tallied, not slept
pub struct HeadlessHost {
    canvas: RecordingCanvas,
    frames_presented: u64,
    slept_millis: u64,
}

impl HeadlessHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RecordingCanvas::new(width, height),
            frames_presented: 0,
            slept_millis: 0,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn slept_millis(&self) -> u64 {
        self.slept_millis
    }

    pub fn canvas(&self) -> &RecordingCanvas {
        &self.canvas
    }
}

impl FrameHost for HeadlessHost {
    fn frame(&mut self) -> &mut dyn Canvas {
        self.canvas.clear();
        &mut self.canvas
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }

    fn sleep(&mut self, millis: u64) {
        self.slept_millis += millis;
    }
}
