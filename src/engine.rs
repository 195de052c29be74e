//=========================================================================
// Engine
//=========================================================================
//
// Main entry point and coordinator for the game runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ init(|systems| ..)
//         ├─ with_channel_capacity() └─ run(): spawns logic thread,
//         ├─ with_window_size()               runs platform,
//         ├─ with_title()                     blocks until exit
//         ├─ with_fade_timing()
//         ├─ with_volume_sync()
//         └─ with_presenter()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::audio::VolumeSync;
use crate::core::globals::{GlobalSystems, Viewport};
use crate::core::platform_bridge::PlatformEvent;
use crate::core::render::Presenter;
use crate::core::screen::FadeTiming;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: 1280x720, "Frirens little Mimic Adventure"
/// - **Fade timing**: [`FadeTiming::default`]
/// - **Volume sync**: [`VolumeSync::Periodic`]
/// - **Presenter**: [`LogPresenter`](crate::core::render::LogPresenter)
///
/// # Examples
///
/// ```no_run
/// use mimic_adventure::prelude::*;
/// use mimic_adventure::screens;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_window_size(1600, 900)
///     .with_volume_sync(VolumeSync::Immediate)
///     .build()
///     .init(|systems| screens::register_all(&mut systems.screen_flow))
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
    fade_timing: FadeTiming,
    volume_sync: VolumeSync,
    presenter: Option<Box<dyn Presenter>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window: WindowConfig::default(),
            fade_timing: FadeTiming::default(),
            volume_sync: VolumeSync::default(),
            presenter: None,
        }
    }

    /// Sets the logic thread's ticks per second.
    ///
    /// Also fixes each tick's `delta_time` to `1 / tps`.
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not positive.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the platform → core channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the initial window inner size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Sets the screen transition fade speeds.
    pub fn with_fade_timing(mut self, timing: FadeTiming) -> Self {
        self.fade_timing = timing;
        self
    }

    /// Sets when toggled track volumes reach the tracks.
    pub fn with_volume_sync(mut self, sync: VolumeSync) -> Self {
        self.volume_sync = sync;
        self
    }

    /// Sets the consumer of finished frames.
    pub fn with_presenter<P>(mut self, presenter: P) -> Self
    where
        P: Presenter + 'static,
    {
        self.presenter = Some(Box::new(presenter));
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, window: {}x{})",
            self.tps, self.channel_capacity, self.window.width, self.window.height
        );

        let mut orchestrator =
            CoreSystemsOrchestrator::new(Viewport::new(self.window.width, self.window.height));

        let systems = orchestrator.systems_mut();
        systems.screen_flow.set_fade_timing(self.fade_timing);
        systems.tracks.set_sync(self.volume_sync);

        if let Some(presenter) = self.presenter {
            orchestrator.set_presenter(presenter);
        }

        Engine {
            orchestrator,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime.
///
/// Create via [`EngineBuilder`].
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► ScreenFlow, TrackBank, OrbitCamera
///   │
///   └─► Platform (winit Event Loop)
///         └─► Window, Input Polling
///
/// Communication: bounded channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
    window: WindowConfig,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Configures the game systems before the runtime starts.
    ///
    /// ```no_run
    /// use mimic_adventure::prelude::*;
    /// use mimic_adventure::screens;
    ///
    /// EngineBuilder::new()
    ///     .build()
    ///     .init(|systems| {
    ///         screens::register_all(&mut systems.screen_flow);
    ///         systems.initial_screen = ScreenId::Title;
    ///         systems.tracks.load(0, ClockTrack::new("base", 96.0), 1.0).ok();
    ///     })
    ///     .run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems),
    {
        info!("Initializing game systems");
        self.orchestrator.init_systems(init_fn);
        info!("Game initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → core channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: logic thread shuts the game down and exits
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Wait for logic thread to terminate -----------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
