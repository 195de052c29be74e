//=========================================================================
// Global Systems
//=========================================================================
//
// Container for the game's logic systems and the per-tick frame driver.
//
// Per tick, in order:
//   1. fold platform input into the state tracker
//   2. digit keys 1-8 toggle track slots 0-7
//   3. screen flow tick (transition or screen update)
//   4. track streams + periodic volume reapply
//   5. orbital camera
//
// Per frame: clear, 3D scene, current screen, transition overlay.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::audio::{TrackBank, TRACK_SLOTS};
use crate::core::camera::OrbitCamera;
use crate::core::input::KeyCode;
use crate::core::render::{Canvas, Color};
use crate::core::screen::{FlowError, ScreenFlow, ScreenId};

//=== GlobalSystems =======================================================

/// Game-level logic systems, owned by the logic thread.
///
/// Configure them in [`crate::Engine::init`]: register screens, load
/// tracks, adjust the camera.
pub struct GlobalSystems {
    /// Screen lifecycle and fade transitions.
    pub screen_flow: ScreenFlow,

    /// Background music bank.
    pub tracks: TrackBank,

    /// Camera over the 3D scene drawn behind every screen.
    pub camera: OrbitCamera,

    /// Screen the flow starts on.
    pub initial_screen: ScreenId,
}

impl GlobalSystems {
    /// Creates the systems with default configuration.
    ///
    /// Typically called by the engine. Use [`crate::Engine::init`] to
    /// configure them.
    pub(crate) fn new() -> Self {
        Self {
            screen_flow: ScreenFlow::new(),
            tracks: TrackBank::new(),
            camera: OrbitCamera::default(),
            initial_screen: ScreenId::Logo,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Initializes the initial screen.
    pub(crate) fn start(&mut self, context: &GlobalContext) -> Result<(), FlowError> {
        info!("Starting game on {:?}", self.initial_screen);
        self.screen_flow.start(self.initial_screen, context)
    }

    /// Unloads the current screen and stops every track.
    pub(crate) fn shutdown(&mut self, context: &GlobalContext) {
        self.screen_flow.shutdown(context);
        self.tracks.unload_all();
        info!("Game systems shut down");
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick of every system.
    pub(crate) fn update(&mut self, context: &mut GlobalContext) {
        // 1. Fold this tick's input into the state tracker
        context.input_state.begin_frame(&context.frame_events);
        context.frame_events.clear();

        // 2. Track toggles
        self.handle_track_keys(context);
        context.track_volumes = self.tracks.volumes();

        // 3. Screen flow
        self.screen_flow.update(context);

        // 4. Audio
        self.tracks.update_streams(context.delta_time);
        self.tracks.tick();

        // 5. Camera
        self.camera.update(context.delta_time);
    }

    /// Records one frame.
    pub(crate) fn draw(&self, canvas: &mut dyn Canvas, context: &GlobalContext) {
        canvas.clear(Color::RAYWHITE);
        canvas.draw_scene(&self.camera);
        self.screen_flow.draw(canvas, context);
    }

    //--- Internal Helpers -------------------------------------------------

    fn handle_track_keys(&mut self, context: &GlobalContext) {
        for slot in 0..TRACK_SLOTS {
            let Some(key) = KeyCode::digit(slot + 1) else {
                continue;
            };
            if context.input_state.is_key_pressed(key) {
                if let Err(e) = self.tracks.toggle(slot) {
                    warn!("Track toggle ignored: {}", e);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
