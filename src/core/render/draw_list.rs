//=========================================================================
// Draw List
//=========================================================================
//
// Records one frame of drawing as plain commands.
//
// The logic thread draws into a `DrawList`, then hands the finished list
// to a `Presenter`. Tests inspect the list directly.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::{Canvas, Color, Rect};
use crate::core::camera::OrbitCamera;

//=== DrawCommand =========================================================

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    Text { text: String, x: f32, y: f32, size: f32, color: Color },
    Scene(OrbitCamera),
}

//=== DrawList ============================================================

/// Ordered command recording for one frame.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self { commands: Vec::with_capacity(32) }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops all commands, keeping the allocation for the next frame.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Last command in the frame, which is what ends up on top.
    pub fn topmost(&self) -> Option<&DrawCommand> {
        self.commands.last()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            size,
            color,
        });
    }

    fn draw_scene(&mut self, camera: &OrbitCamera) {
        self.commands.push(DrawCommand::Scene(*camera));
    }
}

//=== Presenter ===========================================================

/// Consumer of finished frames (GPU backend, recorder, logger...).
pub trait Presenter: Send {
    fn present(&mut self, frame: &DrawList);
}

/// Presenter that only logs a per-frame summary at trace level.
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &DrawList) {
        self.frames += 1;
        trace!(
            target: "render",
            "Frame {}: {} commands, top = {:?}",
            self.frames,
            frame.len(),
            frame.topmost()
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
