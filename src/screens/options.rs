//=========================================================================
// Options Screen
//=========================================================================
//
// Shows the music layers, one swatch per slot lit by its stored volume.
// Enter or Escape returns to the title.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::centered_x;
use crate::core::audio::TRACK_SLOTS;
use crate::core::globals::GlobalContext;
use crate::core::input::KeyCode;
use crate::core::render::{Canvas, Color, Rect};
use crate::core::screen::Screen;

//=== OptionsScreen =======================================================

#[derive(Debug, Default)]
pub struct OptionsScreen {
    finish: i32,
}

impl OptionsScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for OptionsScreen {
    fn init(&mut self, _context: &GlobalContext) {
        self.finish = 0;
    }

    fn update(&mut self, context: &GlobalContext) {
        let input = &context.input_state;
        if input.is_key_pressed(KeyCode::Enter) || input.is_key_pressed(KeyCode::Escape) {
            self.finish = 1;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, context: &GlobalContext) {
        let width = context.viewport.width;
        let heading = "OPTIONS";
        let hint = "Keys 1-8 toggle the music layers";
        let back = "PRESS ENTER or ESC to RETURN";

        canvas.fill_rect(context.viewport.rect(), Color::WHITE.fade(0.6));
        canvas.draw_text(heading, centered_x(heading, 40.0, width), 120.0, 40.0, Color::DARKBLUE);
        canvas.draw_text(hint, centered_x(hint, 20.0, width), 220.0, 20.0, Color::DARKGRAY);

        let left = (width as f32 - TRACK_SLOTS as f32 * 48.0) / 2.0;
        for (slot, volume) in context.track_volumes.iter().enumerate() {
            let x = left + slot as f32 * 48.0;
            canvas.fill_rect(Rect::new(x, 260.0, 40.0, 40.0), swatch_color(*volume));
            canvas.draw_text(&(slot + 1).to_string(), x + 14.0, 270.0, 20.0, Color::DARKGRAY);
        }

        canvas.draw_text(back, centered_x(back, 20.0, width), 420.0, 20.0, Color::GRAY);
    }

    fn finish_code(&self) -> i32 {
        self.finish
    }
}

/// Muted slots stay visible as a faint outline of the lit color.
fn swatch_color(volume: f32) -> Color {
    Color::GOLD.fade(0.2 + 0.8 * volume)
}

//=========================================================================
// Unit Tests
//=========================================================================
