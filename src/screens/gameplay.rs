//=========================================================================
// Gameplay Screen
//=========================================================================
//
// Placeholder run: counts time spent in the dungeon. Enter or a left
// click ends the run (code 1).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{centered_x, confirm_pressed};
use crate::core::globals::GlobalContext;
use crate::core::render::{Canvas, Color};
use crate::core::screen::Screen;

//=== GameplayScreen ======================================================

#[derive(Debug, Default)]
pub struct GameplayScreen {
    finish: i32,
    elapsed: f32,
}

impl GameplayScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds spent in the current run.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Screen for GameplayScreen {
    fn init(&mut self, _context: &GlobalContext) {
        self.finish = 0;
        self.elapsed = 0.0;
    }

    fn update(&mut self, context: &GlobalContext) {
        self.elapsed += context.delta_time;

        if confirm_pressed(&context.input_state) {
            self.finish = 1;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, context: &GlobalContext) {
        let width = context.viewport.width;
        let timer = format!("TIME {:.1}s", self.elapsed);
        let hint = "PRESS ENTER or CLICK to END the RUN";

        canvas.draw_text(&timer, 20.0, 20.0, 30.0, Color::MAROON);
        canvas.draw_text(hint, centered_x(hint, 20.0, width), 660.0, 20.0, Color::DARKGRAY);
    }

    fn finish_code(&self) -> i32 {
        self.finish
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
