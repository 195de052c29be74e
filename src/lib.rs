//=========================================================================
// Mimic Adventure Library Root
//
// Screen-flow runtime for a small dungeon game.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the core systems: screen flow with fade transitions, the
//   background track bank, the orbital camera and the draw surface
// - Ship the template screens (logo, title, options, gameplay, ending)
// - Keep the winit platform layer private
//
// Typical usage:
// ```no_run
// use mimic_adventure::prelude::*;
// use mimic_adventure::screens;
//
// EngineBuilder::new()
//     .build()
//     .init(|systems| screens::register_all(&mut systems.screen_flow))
//     .run();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the logic-thread systems (input, screens, audio,
// camera, rendering surface). `screens` holds the game's own screens.
//
pub mod core;
pub mod prelude;
pub mod screens;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the OS window and winit event loop and is not part of
// the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
