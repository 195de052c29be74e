//=========================================================================
// Game Screens
//=========================================================================
//
// The game's five screens and their registration.
//
// Finish codes (see `ScreenRoutes::game`):
//   Logo      1 after the intro            → Title
//   Title     1 = options, 2 = gameplay
//   Options   1 when closed                → Title
//   Gameplay  1 when the run ends          → Ending
//   Ending    1 when confirmed             → Title
//
//=========================================================================

//=== Module Declarations =================================================

mod ending;
mod gameplay;
mod logo;
mod options;
mod title;

//=== Public API ==========================================================

pub use ending::EndingScreen;
pub use gameplay::GameplayScreen;
pub use logo::LogoScreen;
pub use options::OptionsScreen;
pub use title::TitleScreen;

//=== External Dependencies ===============================================

use log::error;

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCode, MouseButton, StateTracker};
use crate::core::screen::{ScreenFlow, ScreenId};

//=== Registration ========================================================

/// Registers every game screen in `flow`.
pub fn register_all(flow: &mut ScreenFlow) {
    let results = [
        flow.register_screen(ScreenId::Logo, LogoScreen::new()),
        flow.register_screen(ScreenId::Title, TitleScreen::new()),
        flow.register_screen(ScreenId::Options, OptionsScreen::new()),
        flow.register_screen(ScreenId::Gameplay, GameplayScreen::new()),
        flow.register_screen(ScreenId::Ending, EndingScreen::new()),
    ];

    for e in results.into_iter().filter_map(Result::err) {
        error!("Screen registration failed: {}", e);
    }
}

//=== Shared Helpers ======================================================

/// Enter or a left click this tick.
pub(crate) fn confirm_pressed(input: &StateTracker) -> bool {
    input.is_key_pressed(KeyCode::Enter) || input.is_button_pressed(MouseButton::Left)
}

/// Rough x for horizontally centered text (glyphs ~half as wide as tall).
pub(crate) fn centered_x(text: &str, size: f32, width: u32) -> f32 {
    let text_width = text.chars().count() as f32 * size * 0.5;
    ((width as f32 - text_width) / 2.0).max(0.0)
}

//--- Test Support ---------------------------------------------------------

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::globals::{GlobalContext, Viewport};
    use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

    pub(crate) fn context() -> GlobalContext {
        GlobalContext::new(Viewport::default())
    }

    /// Context whose input shows `key` pressed this tick.
    pub(crate) fn pressing(key: KeyCode) -> GlobalContext {
        let mut context = context();
        context.input_state.press_for_test(key);
        context
    }

    /// Context whose input shows a left click this tick.
    pub(crate) fn clicking() -> GlobalContext {
        let mut context = context();
        context.input_state.begin_frame(&[vec![InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }]]);
        context
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
