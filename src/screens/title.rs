//=========================================================================
// Title Screen
//=========================================================================
//
// Enter or a left click starts the game (code 2); O opens the options
// (code 1).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{centered_x, confirm_pressed};
use crate::core::globals::GlobalContext;
use crate::core::input::KeyCode;
use crate::core::render::{Canvas, Color};
use crate::core::screen::Screen;

//=== TitleScreen =========================================================

#[derive(Debug, Default)]
pub struct TitleScreen {
    finish: i32,
}

impl TitleScreen {
    pub const TO_OPTIONS: i32 = 1;
    pub const TO_GAMEPLAY: i32 = 2;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for TitleScreen {
    fn init(&mut self, _context: &GlobalContext) {
        self.finish = 0;
    }

    fn update(&mut self, context: &GlobalContext) {
        let input = &context.input_state;

        if confirm_pressed(input) {
            self.finish = Self::TO_GAMEPLAY;
        } else if input.is_key_pressed(KeyCode::KeyO) {
            self.finish = Self::TO_OPTIONS;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, context: &GlobalContext) {
        let width = context.viewport.width;
        let title = "FRIRENS LITTLE MIMIC ADVENTURE";
        let start = "PRESS ENTER or CLICK to START";
        let options = "PRESS O for OPTIONS";

        canvas.draw_text(title, centered_x(title, 48.0, width), 120.0, 48.0, Color::MAROON);
        canvas.draw_text(start, centered_x(start, 24.0, width), 420.0, 24.0, Color::DARKGRAY);
        canvas.draw_text(options, centered_x(options, 20.0, width), 460.0, 20.0, Color::GRAY);
    }

    fn finish_code(&self) -> i32 {
        self.finish
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
