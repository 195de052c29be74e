//=========================================================================
// Ending Screen
//=========================================================================
//
// Enter or a left click returns to the title (code 1).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{centered_x, confirm_pressed};
use crate::core::globals::GlobalContext;
use crate::core::render::{Canvas, Color};
use crate::core::screen::Screen;

//=== EndingScreen ========================================================

#[derive(Debug, Default)]
pub struct EndingScreen {
    finish: i32,
}

impl EndingScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for EndingScreen {
    fn init(&mut self, _context: &GlobalContext) {
        self.finish = 0;
    }

    fn update(&mut self, context: &GlobalContext) {
        if confirm_pressed(&context.input_state) {
            self.finish = 1;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, context: &GlobalContext) {
        let width = context.viewport.width;
        let heading = "THE MIMIC WAS JUST A CHEST AFTER ALL";
        let hint = "PRESS ENTER or CLICK to RETURN to TITLE";

        canvas.fill_rect(context.viewport.rect(), Color::DARKBLUE.fade(0.5));
        canvas.draw_text(heading, centered_x(heading, 36.0, width), 240.0, 36.0, Color::WHITE);
        canvas.draw_text(hint, centered_x(hint, 20.0, width), 420.0, 20.0, Color::WHITE);
    }

    fn finish_code(&self) -> i32 {
        self.finish
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
