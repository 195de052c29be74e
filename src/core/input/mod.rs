//=========================================================================
// Input
//
// Engine-side input types and the per-tick state tracker.
//
// The platform thread produces `InputEvent`s; the logic thread folds
// them into a `StateTracker` once per tick, which screens query.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;
