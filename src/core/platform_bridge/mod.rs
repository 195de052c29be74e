//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the logic thread.
//
// Components:
// - `interface`: event types and error definitions (the contract)
// - `event_collector`: logic-side event collection per tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{PlatformError, PlatformEvent};
