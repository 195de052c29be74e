//=========================================================================
// Global Game State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: ScreenFlow + TrackBank + OrbitCamera (owned by orchestrator)
//   GlobalContext: StateTracker + Viewport + tick timing (passed to screens)
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use global_context::{GlobalContext, Viewport};
pub use global_systems::GlobalSystems;
