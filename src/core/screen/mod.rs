//=========================================================================
// Screen System
//=========================================================================
//
// Screen lifecycle, routing and fade transitions.
//
// Architecture:
//   ScreenFlow
//     ├─ screens: [Option<Box<dyn Screen>>; SCREEN_COUNT]  (by ScreenId)
//     ├─ routes: ScreenRoutes    (finish code → next screen)
//     └─ transition: Option<Transition>  (at most one in flight)
//
// Flow:
//   update() → Screen::update() → finish_code() → routes → begin_transition()
//   update() while fading → Transition::step() → swap at full black
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::render::Canvas;

//=== Module Declarations =================================================

mod flow;
mod routes;
mod transition;

//=== Public API ==========================================================

pub use flow::{FlowError, ScreenFlow};
pub use routes::{FinishCode, ScreenRoutes};
pub use transition::{FadePhase, FadeTiming, Transition, FADE_IN_TRIGGER, FADE_OUT_TRIGGER};

//=== ScreenId ============================================================

/// Number of real screens (every variant except `Unknown`).
pub const SCREEN_COUNT: usize = 5;

/// Identifies a game screen.
///
/// `Unknown` is the current screen only before the flow starts and after
/// shutdown. It is never a valid switch or transition target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    Logo,
    Title,
    Options,
    Gameplay,
    Ending,
    #[default]
    Unknown,
}

impl ScreenId {
    /// Every real screen, in table order.
    pub const ALL: [ScreenId; SCREEN_COUNT] = [
        ScreenId::Logo,
        ScreenId::Title,
        ScreenId::Options,
        ScreenId::Gameplay,
        ScreenId::Ending,
    ];

    /// Slot of this screen in the screen table; `None` for `Unknown`.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Logo => Some(0),
            Self::Title => Some(1),
            Self::Options => Some(2),
            Self::Gameplay => Some(3),
            Self::Ending => Some(4),
            Self::Unknown => None,
        }
    }
}

//=== Screen Trait ========================================================

/// Lifecycle hooks of one game screen.
///
/// Screens are registered once in [`ScreenFlow`] and keep their value
/// between activations; `init` is where per-visit state must be reset.
///
/// # Minimal Implementation
///
/// ```rust
/// # use mimic_adventure::prelude::*;
/// struct Splash { ticks: u32 }
///
/// impl Screen for Splash {
///     fn init(&mut self, _context: &GlobalContext) {
///         self.ticks = 0;
///     }
///
///     fn update(&mut self, _context: &GlobalContext) {
///         self.ticks += 1;
///     }
///
///     fn draw(&self, canvas: &mut dyn Canvas, _context: &GlobalContext) {
///         canvas.draw_text("SPLASH", 20.0, 20.0, 40.0, Color::DARKGRAY);
///     }
///
///     fn finish_code(&self) -> i32 {
///         (self.ticks >= 60) as i32
///     }
/// }
/// ```
pub trait Screen: Send {
    /// Called when the screen becomes current. Allocate or reset state.
    fn init(&mut self, _context: &GlobalContext) {}

    /// Called once per tick while current and no transition is running.
    fn update(&mut self, context: &GlobalContext);

    /// Called once per frame while current.
    fn draw(&self, canvas: &mut dyn Canvas, context: &GlobalContext);

    /// Called when the screen stops being current. Release state.
    fn unload(&mut self, _context: &GlobalContext) {}

    /// 0 while running; a nonzero outcome code once finished.
    fn finish_code(&self) -> i32;
}

//=========================================================================
// Unit Tests
//=========================================================================
