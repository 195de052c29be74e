//=========================================================================
// Mimic Adventure
//=========================================================================
//
// Game binary: logging, screens, music layers, run.
//
// Logging defaults to `info`; override with RUST_LOG, e.g.
//   RUST_LOG=mimic_adventure=debug,platform=trace
//
//=========================================================================

use log::error;
use mimic_adventure::prelude::*;
use mimic_adventure::screens;

/// Length of every music layer; all layers loop in lockstep.
const LAYER_SECONDS: f32 = 64.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    EngineBuilder::new()
        .build()
        .init(|systems| {
            screens::register_all(&mut systems.screen_flow);

            for (slot, volume) in TrackBank::STARTUP_VOLUMES.into_iter().enumerate() {
                let track = ClockTrack::new(format!("layer-{}", slot), LAYER_SECONDS);
                if let Err(e) = systems.tracks.load(slot, track, volume) {
                    error!("Music layer {} not loaded: {}", slot, e);
                }
            }
        })
        .run();
}
