//=========================================================================
// Global Context
//=========================================================================
//
// Shared per-tick data handed to screens.
//
// Contains state data that screens read:
// - input_state: keys/buttons held and pressed this tick
// - viewport: window size in pixels (for layout and the fade overlay)
// - delta_time / frame: fixed tick length and tick counter
// - track_volumes: stored volume of every music slot
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::audio::TRACK_SLOTS;
use crate::core::input::{InputEvent, StateTracker};
use crate::core::render::Rect;

//=== Viewport ============================================================

/// Drawable area in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Full-viewport rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

//=== GlobalContext =======================================================

/// Data screens receive during their lifecycle hooks.
///
/// Owned by the logic thread; screens only ever see `&GlobalContext`.
pub struct GlobalContext {
    /// Input state for the current tick.
    pub input_state: StateTracker,

    /// Current window size.
    pub viewport: Viewport,

    /// Seconds covered by the current tick.
    pub delta_time: f32,

    /// Number of ticks run so far.
    pub frame: u64,

    /// Stored volume per track slot, as of this tick's toggles.
    pub track_volumes: [f32; TRACK_SLOTS],

    /// Input batches received from the platform for this tick.
    ///
    /// Filled by the orchestrator and folded into `input_state` by
    /// `GlobalSystems::update`.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl GlobalContext {
    /// Creates a context with empty input and a 60 Hz tick.
    pub(crate) fn new(viewport: Viewport) -> Self {
        Self {
            input_state: StateTracker::new(),
            viewport,
            delta_time: 1.0 / 60.0,
            frame: 0,
            track_volumes: [0.0; TRACK_SLOTS],
            frame_events: Vec::new(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
