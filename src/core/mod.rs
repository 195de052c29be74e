//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Central coordinator for all game systems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own GlobalSystems and GlobalContext
// - Receive platform events via the bounded channel
// - Run one frame (update + draw + present) per tick at a fixed TPS
// - Shut the game down when the window closes
//
// Architecture:
// ```text
//   Receiver<PlatformEvent>
//        ↓ EventCollector::collect_frame()
//   GlobalContext (input batches, viewport)
//        ↓ GlobalSystems::update()
//   DrawList ← GlobalSystems::draw()
//        ↓ Presenter::present()
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod audio;
pub mod camera;
pub mod globals;
pub mod input;
pub mod render;
pub mod screen;
pub(crate) mod platform_bridge;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::{error, info, trace};

//=== Internal Dependencies ===============================================

use globals::{GlobalContext, GlobalSystems, Viewport};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::{DrawList, LogPresenter, Presenter};

//=== CoreSystemsOrchestrator =============================================

/// Owns the game state and drives it on the logic thread.
pub(crate) struct CoreSystemsOrchestrator {
    systems: GlobalSystems,
    context: GlobalContext,
    presenter: Box<dyn Presenter>,
    frame: DrawList,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(viewport: Viewport) -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(viewport),
            presenter: Box::new(LogPresenter::new()),
            frame: DrawList::new(),
        }
    }

    /// Gives the caller mutable access to the systems before the thread
    /// starts.
    pub(crate) fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems),
    {
        init_fn(&mut self.systems);
    }

    pub(crate) fn systems_mut(&mut self) -> &mut GlobalSystems {
        &mut self.systems
    }

    pub(crate) fn set_presenter(&mut self, presenter: Box<dyn Presenter>) {
        self.presenter = presenter;
    }

    //--- Thread -----------------------------------------------------------

    /// Spawns the logic thread ticking at `tps`.
    ///
    /// Each tick:
    ///  1. Collects platform events
    ///  2. Updates and draws one frame
    ///  3. Sleeps to maintain fixed pacing
    ///
    /// The thread exits on `WindowClosed` or channel disconnect.
    pub(crate) fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        self.context.delta_time = frame_duration.as_secs_f32();

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);
            self.start();

            loop {
                let frame_start = Instant::now();

                if self.tick(&mut collector) == TickControl::Exit {
                    info!("Core thread exiting after {} frames", self.context.frame);
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            self.shutdown();
        })
    }

    //--- Frame ------------------------------------------------------------

    fn start(&mut self) {
        if let Err(e) = self.systems.start(&self.context) {
            error!("Game failed to start: {}", e);
        }
    }

    /// Runs one frame against whatever the collector has queued.
    fn tick(&mut self, collector: &mut EventCollector) -> TickControl {
        if collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        if let Some((width, height)) = collector.take_resize() {
            self.context.viewport = Viewport::new(width, height);
            trace!("Viewport now {}x{}", width, height);
        }
        self.context.frame_events = collector.take_batches();

        self.systems.update(&mut self.context);
        self.context.frame += 1;

        self.frame.reset();
        self.systems.draw(&mut self.frame, &self.context);
        self.presenter.present(&self.frame);

        TickControl::Continue
    }

    fn shutdown(&mut self) {
        self.systems.shutdown(&self.context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
