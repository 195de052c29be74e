//=========================================================================
// Logo Screen
//=========================================================================
//
// Intro card: an outlined square grows edge by edge, the studio name
// appears, then everything fades out. Finishes after two seconds.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::render::{Canvas, Color, Rect};
use crate::core::screen::Screen;

//=== Constants ===========================================================

/// Seconds until the logo finishes.
const DURATION: f32 = 2.0;

/// Edges finish growing at this time.
const GROW_END: f32 = 1.0;

/// Fade-out starts at this time.
const FADE_START: f32 = 1.5;

const LOGO_SIZE: f32 = 256.0;
const EDGE: f32 = 16.0;

//=== LogoScreen ==========================================================

#[derive(Debug, Default)]
pub struct LogoScreen {
    elapsed: f32,
}

impl LogoScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logo opacity: 1 until the fade starts, then down to 0.
    fn alpha(&self) -> f32 {
        if self.elapsed <= FADE_START {
            return 1.0;
        }
        (1.0 - (self.elapsed - FADE_START) / (DURATION - FADE_START)).clamp(0.0, 1.0)
    }

    /// Edge growth in [0, 1].
    fn growth(&self) -> f32 {
        (self.elapsed / GROW_END).clamp(0.0, 1.0)
    }
}

impl Screen for LogoScreen {
    fn init(&mut self, _context: &GlobalContext) {
        self.elapsed = 0.0;
    }

    fn update(&mut self, context: &GlobalContext) {
        self.elapsed += context.delta_time;
    }

    fn draw(&self, canvas: &mut dyn Canvas, context: &GlobalContext) {
        let color = Color::DARKGRAY.fade(self.alpha());
        let x = (context.viewport.width as f32 - LOGO_SIZE) / 2.0;
        let y = (context.viewport.height as f32 - LOGO_SIZE) / 2.0;
        let length = LOGO_SIZE * self.growth();

        // top + left grow first, bottom + right follow
        canvas.fill_rect(Rect::new(x, y, length, EDGE), color);
        canvas.fill_rect(Rect::new(x, y, EDGE, length), color);
        canvas.fill_rect(Rect::new(x + LOGO_SIZE - EDGE, y, EDGE, length), color);
        canvas.fill_rect(Rect::new(x, y + LOGO_SIZE - EDGE, length, EDGE), color);

        if self.growth() >= 1.0 {
            canvas.draw_text("mimic", x + 84.0, y + 176.0, 50.0, color);
        }
    }

    fn finish_code(&self) -> i32 {
        (self.elapsed >= DURATION) as i32
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{DrawCommand, DrawList};
    use crate::screens::test_support;

    fn run_for(screen: &mut LogoScreen, seconds: f32) {
        let context = test_support::context();
        let ticks = (seconds / context.delta_time).round() as usize;
        for _ in 0..ticks {
            screen.update(&context);
        }
    }

    #[test]
    fn finishes_after_two_seconds() {
        let mut screen = LogoScreen::new();
        screen.init(&test_support::context());

        run_for(&mut screen, 1.9);
        assert_eq!(screen.finish_code(), 0);

        run_for(&mut screen, 0.2);
        assert_eq!(screen.finish_code(), 1);
    }

    #[test]
    fn init_restarts_the_intro() {
        let mut screen = LogoScreen::new();
        run_for(&mut screen, 3.0);

        screen.init(&test_support::context());

        assert_eq!(screen.finish_code(), 0);
        assert_eq!(screen.alpha(), 1.0);
    }

    #[test]
    fn fades_out_at_the_end() {
        let mut screen = LogoScreen::new();
        run_for(&mut screen, 1.75);
        assert!(screen.alpha() > 0.0 && screen.alpha() < 1.0);
    }

    #[test]
    fn text_appears_once_edges_are_complete() {
        let context = test_support::context();
        let mut screen = LogoScreen::new();

        let mut early = DrawList::new();
        screen.draw(&mut early, &context);
        assert!(!early.commands().iter().any(|c| matches!(c, DrawCommand::Text { .. })));

        run_for(&mut screen, 1.2);
        let mut late = DrawList::new();
        screen.draw(&mut late, &context);
        assert!(late.commands().iter().any(|c| matches!(c, DrawCommand::Text { .. })));
    }
}
