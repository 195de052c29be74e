//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use mimic_adventure::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems, Viewport};

// Input
pub use crate::core::input::{KeyCode, Modifiers, MouseButton, StateTracker};

// Screens
pub use crate::core::screen::{
    FadePhase, FadeTiming, FinishCode, FlowError, Screen, ScreenFlow, ScreenId, ScreenRoutes,
};

// Audio
pub use crate::core::audio::{AudioError, ClockTrack, MusicTrack, TrackBank, VolumeSync};

// Rendering surface and camera
pub use crate::core::camera::OrbitCamera;
pub use crate::core::render::{Canvas, Color, DrawList, LogPresenter, Presenter, Rect};
