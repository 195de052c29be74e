//=========================================================================
// Screen Flow
//=========================================================================
//
// Owns the current screen and sequences screen changes.
//
// Two ways to change screen:
// - switch_to(): immediate unload + init, used at startup and shutdown
// - begin_transition(): fade to black, swap at full black, fade back
//
// Only one transition may be in flight; further requests are rejected
// until it completes.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, trace, warn};

//=== Internal Dependencies ===============================================

use super::routes::ScreenRoutes;
use super::transition::{FadeTiming, StepOutcome, Transition};
use super::{Screen, ScreenId, SCREEN_COUNT};
use crate::core::globals::{GlobalContext, Viewport};
use crate::core::render::{Canvas, Color};

//=== FlowError ===========================================================

/// Rejected screen-flow requests.
///
/// All of these are logic errors in the caller. The request is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// `ScreenId::Unknown` used as a target.
    InvalidScreen,

    /// Target has no registered screen.
    UnregisteredScreen(ScreenId),

    /// A transition is already running.
    TransitionInFlight { from: ScreenId, to: ScreenId },

    /// Cancel requested with no transition running.
    NoTransition,

    /// Cancel requested after the swap already happened.
    TransitionCommitted,

    /// Transition requested before the flow was started.
    NotStarted,
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScreen => write!(f, "Unknown is not a valid target screen"),
            Self::UnregisteredScreen(id) => write!(f, "Screen {:?} is not registered", id),
            Self::TransitionInFlight { from, to } => {
                write!(f, "Transition {:?} -> {:?} already in flight", from, to)
            }
            Self::NoTransition => write!(f, "No transition in flight"),
            Self::TransitionCommitted => {
                write!(f, "Transition already swapped screens and cannot be cancelled")
            }
            Self::NotStarted => write!(f, "Screen flow has not been started"),
        }
    }
}

impl std::error::Error for FlowError {}

//=== ScreenFlow ==========================================================

/// Screen state machine with fade transitions.
pub struct ScreenFlow {
    screens: [Option<Box<dyn Screen>>; SCREEN_COUNT],
    routes: ScreenRoutes,
    timing: FadeTiming,
    current: ScreenId,
    transition: Option<Transition>,
}

impl ScreenFlow {
    //--- Construction -----------------------------------------------------

    /// Creates a flow with the game's routes and default fade timing.
    pub fn new() -> Self {
        Self::with_config(ScreenRoutes::game(), FadeTiming::default())
    }

    pub fn with_config(routes: ScreenRoutes, timing: FadeTiming) -> Self {
        Self {
            screens: std::array::from_fn(|_| None),
            routes,
            timing,
            current: ScreenId::Unknown,
            transition: None,
        }
    }

    //--- Configuration ----------------------------------------------------

    pub fn set_routes(&mut self, routes: ScreenRoutes) {
        self.routes = routes;
    }

    pub fn routes(&self) -> &ScreenRoutes {
        &self.routes
    }

    pub fn set_fade_timing(&mut self, timing: FadeTiming) {
        self.timing = timing;
    }

    pub fn fade_timing(&self) -> FadeTiming {
        self.timing
    }

    //--- Registration -----------------------------------------------------

    /// Stores `screen` in the slot for `id`.
    ///
    /// Replacing a registered screen is allowed but logged. Replacing the
    /// current screen does not run any lifecycle hook.
    pub fn register_screen<T>(&mut self, id: ScreenId, screen: T) -> Result<(), FlowError>
    where
        T: Screen + 'static,
    {
        let Some(slot) = id.index() else {
            error!("Cannot register a screen under {:?}", id);
            return Err(FlowError::InvalidScreen);
        };

        if self.screens[slot].replace(Box::new(screen)).is_some() {
            warn!("Screen {:?} was already registered and has been replaced", id);
        } else {
            debug!("Registered screen {:?}", id);
        }
        Ok(())
    }

    pub fn is_registered(&self, id: ScreenId) -> bool {
        id.index().is_some_and(|slot| self.screens[slot].is_some())
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// The in-flight transition, if any.
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    //--- Immediate Switching ----------------------------------------------

    /// Initializes the first screen. Same as [`switch_to`](Self::switch_to).
    pub fn start(&mut self, initial: ScreenId, context: &GlobalContext) -> Result<(), FlowError> {
        debug!("Starting screen flow with {:?}", initial);
        self.switch_to(initial, context)
    }

    /// Immediately unloads the current screen and initializes `id`.
    ///
    /// No fade. A transition in flight is dropped.
    pub fn switch_to(&mut self, id: ScreenId, context: &GlobalContext) -> Result<(), FlowError> {
        self.validate_target(id)?;

        if let Some(transition) = self.transition.take() {
            warn!(
                "Immediate switch to {:?} dropped transition {:?} -> {:?}",
                id,
                transition.from(),
                transition.to()
            );
        }

        let previous = self.current;
        self.unload_screen(previous, context);
        self.init_screen(id, context);
        self.current = id;

        debug!("Switched screen {:?} -> {:?}", previous, id);
        Ok(())
    }

    /// Unloads the current screen; the flow returns to `Unknown`.
    pub fn shutdown(&mut self, context: &GlobalContext) {
        self.transition = None;
        let previous = self.current;
        self.unload_screen(previous, context);
        self.current = ScreenId::Unknown;
        debug!("Screen flow shut down (last screen {:?})", previous);
    }

    //--- Transitions ------------------------------------------------------

    /// Starts a fade from the current screen to `id`.
    ///
    /// Nothing is unloaded or initialized until the fade-in completes.
    pub fn begin_transition(&mut self, id: ScreenId) -> Result<(), FlowError> {
        self.validate_target(id)?;

        if self.current == ScreenId::Unknown {
            error!("Transition to {:?} requested before the flow started", id);
            return Err(FlowError::NotStarted);
        }

        if let Some(transition) = &self.transition {
            warn!(
                "Transition to {:?} rejected: {:?} -> {:?} in flight",
                id,
                transition.from(),
                transition.to()
            );
            return Err(FlowError::TransitionInFlight {
                from: transition.from(),
                to: transition.to(),
            });
        }

        debug!("Transition {:?} -> {:?} started", self.current, id);
        self.transition = Some(Transition::new(self.current, id));
        Ok(())
    }

    /// Aborts a transition that has not swapped screens yet.
    ///
    /// The overlay fades back out over the unchanged current screen.
    pub fn cancel_transition(&mut self) -> Result<(), FlowError> {
        let Some(transition) = self.transition.as_mut() else {
            return Err(FlowError::NoTransition);
        };

        let target = transition.to();
        if !transition.reverse() {
            return Err(FlowError::TransitionCommitted);
        }

        debug!("Transition to {:?} cancelled, fading back to {:?}", target, self.current);
        Ok(())
    }

    /// Advances the running transition by one tick.
    pub fn advance_transition(&mut self, context: &GlobalContext) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };

        match transition.step(&self.timing, context.delta_time) {
            StepOutcome::Fading => {}
            StepOutcome::Swap { from, to } => {
                self.unload_screen(from, context);
                self.init_screen(to, context);
                self.current = to;
                debug!("Transition swapped {:?} -> {:?}, fading out", from, to);
            }
            StepOutcome::Finished => {
                self.transition = None;
                debug!("Transition finished on {:?}", self.current);
            }
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick of the flow.
    ///
    /// While fading only the transition advances. Otherwise the current
    /// screen updates and its finish code is routed.
    pub fn update(&mut self, context: &GlobalContext) {
        if self.transition.is_some() {
            self.advance_transition(context);
            return;
        }

        let current = self.current;
        let Some(screen) = self.screen_mut(current) else {
            return;
        };

        screen.update(context);
        let code = screen.finish_code();
        if code == 0 {
            return;
        }

        match self.routes.resolve(current, code) {
            Some(next) => {
                if let Err(e) = self.begin_transition(next) {
                    warn!("{:?} finished with code {} but could not leave: {}", current, code, e);
                }
            }
            None => debug!("{:?} finished with unrouted code {}", current, code),
        }
    }

    //--- Drawing ----------------------------------------------------------

    /// Draws the current screen, then the fade overlay on top.
    pub fn draw(&self, canvas: &mut dyn Canvas, context: &GlobalContext) {
        if let Some(screen) = self.screen(self.current) {
            screen.draw(canvas, context);
        }
        self.draw_overlay(canvas, context.viewport);
    }

    /// Full-viewport black rectangle at the transition's alpha.
    pub fn draw_overlay(&self, canvas: &mut dyn Canvas, viewport: Viewport) {
        if let Some(transition) = &self.transition {
            canvas.fill_rect(viewport.rect(), Color::BLACK.fade(transition.alpha()));
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn validate_target(&self, id: ScreenId) -> Result<(), FlowError> {
        if id == ScreenId::Unknown {
            error!("Screen flow asked to go to {:?}", id);
            return Err(FlowError::InvalidScreen);
        }
        if !self.is_registered(id) {
            error!("Screen flow asked to go to unregistered screen {:?}", id);
            return Err(FlowError::UnregisteredScreen(id));
        }
        Ok(())
    }

    fn screen(&self, id: ScreenId) -> Option<&dyn Screen> {
        self.screens[id.index()?].as_deref()
    }

    fn screen_mut(&mut self, id: ScreenId) -> Option<&mut (dyn Screen + 'static)> {
        self.screens[id.index()?].as_deref_mut()
    }

    fn unload_screen(&mut self, id: ScreenId, context: &GlobalContext) {
        if let Some(screen) = self.screen_mut(id) {
            trace!("Unloading screen {:?}", id);
            screen.unload(context);
        }
    }

    fn init_screen(&mut self, id: ScreenId, context: &GlobalContext) {
        if let Some(screen) = self.screen_mut(id) {
            trace!("Initializing screen {:?}", id);
            screen.init(context);
        }
    }
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{DrawCommand, DrawList};
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::{Arc, Mutex};

    //--- Recording Screen -------------------------------------------------

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Hook {
        Init,
        Update,
        Draw,
        Unload,
    }

    type HookLog = Arc<Mutex<Vec<(ScreenId, Hook)>>>;

    /// Records every lifecycle call; finish code is set from the test.
    struct Recording {
        id: ScreenId,
        log: HookLog,
        finish: Arc<AtomicI32>,
    }

    impl Screen for Recording {
        fn init(&mut self, _context: &GlobalContext) {
            self.finish.store(0, Ordering::SeqCst);
            self.log.lock().unwrap().push((self.id, Hook::Init));
        }

        fn update(&mut self, _context: &GlobalContext) {
            self.log.lock().unwrap().push((self.id, Hook::Update));
        }

        fn draw(&self, canvas: &mut dyn Canvas, _context: &GlobalContext) {
            self.log.lock().unwrap().push((self.id, Hook::Draw));
            canvas.draw_text(&format!("{:?}", self.id), 0.0, 0.0, 20.0, Color::DARKGRAY);
        }

        fn unload(&mut self, _context: &GlobalContext) {
            self.log.lock().unwrap().push((self.id, Hook::Unload));
        }

        fn finish_code(&self) -> i32 {
            self.finish.load(Ordering::SeqCst)
        }
    }

    struct Harness {
        flow: ScreenFlow,
        context: GlobalContext,
        log: HookLog,
        finish: Vec<Arc<AtomicI32>>,
    }

    impl Harness {
        fn new() -> Self {
            let log: HookLog = Arc::new(Mutex::new(Vec::new()));
            let mut flow = ScreenFlow::new();
            let mut finish = Vec::new();

            for id in ScreenId::ALL {
                let code = Arc::new(AtomicI32::new(0));
                finish.push(Arc::clone(&code));
                flow.register_screen(id, Recording { id, log: Arc::clone(&log), finish: code })
                    .unwrap();
            }

            Self {
                flow,
                context: GlobalContext::new(Viewport::new(1280, 720)),
                log,
                finish,
            }
        }

        fn started(initial: ScreenId) -> Self {
            let mut harness = Self::new();
            harness.flow.start(initial, &harness.context).unwrap();
            harness.take_log();
            harness
        }

        fn set_finish(&self, id: ScreenId, code: i32) {
            self.finish[id.index().unwrap()].store(code, Ordering::SeqCst);
        }

        fn take_log(&self) -> Vec<(ScreenId, Hook)> {
            std::mem::take(&mut *self.log.lock().unwrap())
        }

        fn tick(&mut self) {
            self.flow.update(&self.context);
        }

        /// Ticks until the transition swaps; returns the tick count.
        fn ticks_to_swap(&mut self) -> usize {
            let mut ticks = 0;
            while !self.flow.transition().is_some_and(|t| t.is_fading_out()) {
                self.tick();
                ticks += 1;
                assert!(ticks < 1_000, "transition never swapped");
            }
            ticks
        }
    }

    //--- Immediate Switching ----------------------------------------------

    #[test]
    fn start_initializes_first_screen_only() {
        let mut h = Harness::new();
        assert_eq!(h.flow.current(), ScreenId::Unknown);

        h.flow.start(ScreenId::Logo, &h.context).unwrap();

        assert_eq!(h.flow.current(), ScreenId::Logo);
        assert_eq!(h.take_log(), vec![(ScreenId::Logo, Hook::Init)]);
    }

    #[test]
    fn switch_unloads_once_then_inits_once() {
        let mut h = Harness::started(ScreenId::Logo);

        h.flow.switch_to(ScreenId::Title, &h.context).unwrap();

        assert_eq!(h.flow.current(), ScreenId::Title);
        assert_eq!(
            h.take_log(),
            vec![(ScreenId::Logo, Hook::Unload), (ScreenId::Title, Hook::Init)]
        );
    }

    #[test]
    fn switch_handles_options_like_any_screen() {
        let mut h = Harness::started(ScreenId::Options);

        h.flow.switch_to(ScreenId::Title, &h.context).unwrap();

        assert_eq!(
            h.take_log(),
            vec![(ScreenId::Options, Hook::Unload), (ScreenId::Title, Hook::Init)]
        );
    }

    #[test]
    fn switch_to_unknown_is_rejected() {
        let mut h = Harness::started(ScreenId::Title);

        assert_eq!(h.flow.switch_to(ScreenId::Unknown, &h.context), Err(FlowError::InvalidScreen));
        assert_eq!(h.flow.current(), ScreenId::Title);
        assert!(h.take_log().is_empty());
    }

    #[test]
    fn switch_to_unregistered_is_rejected() {
        let mut flow = ScreenFlow::new();
        let context = GlobalContext::new(Viewport::default());

        assert_eq!(
            flow.switch_to(ScreenId::Gameplay, &context),
            Err(FlowError::UnregisteredScreen(ScreenId::Gameplay))
        );
        assert_eq!(flow.current(), ScreenId::Unknown);
    }

    #[test]
    fn register_under_unknown_is_rejected() {
        let mut h = Harness::new();
        let screen = Recording {
            id: ScreenId::Unknown,
            log: Arc::clone(&h.log),
            finish: Arc::new(AtomicI32::new(0)),
        };
        assert_eq!(h.flow.register_screen(ScreenId::Unknown, screen), Err(FlowError::InvalidScreen));
        assert!(!h.flow.is_registered(ScreenId::Unknown));
        h.take_log();
    }

    #[test]
    fn shutdown_unloads_current() {
        let mut h = Harness::started(ScreenId::Gameplay);

        h.flow.shutdown(&h.context);

        assert_eq!(h.flow.current(), ScreenId::Unknown);
        assert_eq!(h.take_log(), vec![(ScreenId::Gameplay, Hook::Unload)]);
    }

    #[test]
    fn switch_during_fade_in_drops_transition() {
        let mut h = Harness::started(ScreenId::Logo);
        h.flow.begin_transition(ScreenId::Title).unwrap();
        for _ in 0..5 {
            h.tick();
        }
        h.take_log();

        h.flow.switch_to(ScreenId::Ending, &h.context).unwrap();

        assert!(!h.flow.is_transitioning());
        assert_eq!(h.flow.current(), ScreenId::Ending);
        assert_eq!(
            h.take_log(),
            vec![(ScreenId::Logo, Hook::Unload), (ScreenId::Ending, Hook::Init)]
        );
    }

    #[test]
    fn switch_during_fade_out_drops_transition() {
        let mut h = Harness::started(ScreenId::Logo);
        h.flow.begin_transition(ScreenId::Title).unwrap();
        h.ticks_to_swap();
        h.take_log();

        h.flow.switch_to(ScreenId::Ending, &h.context).unwrap();

        assert!(!h.flow.is_transitioning());
        assert_eq!(h.flow.current(), ScreenId::Ending);
        assert_eq!(
            h.take_log(),
            vec![(ScreenId::Title, Hook::Unload), (ScreenId::Ending, Hook::Init)]
        );

        let mut list = DrawList::new();
        h.flow.draw_overlay(&mut list, h.context.viewport);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn shutdown_mid_transition_clears_it() {
        let mut h = Harness::started(ScreenId::Title);
        h.flow.begin_transition(ScreenId::Gameplay).unwrap();
        h.ticks_to_swap();
        h.take_log();

        h.flow.shutdown(&h.context);

        assert!(!h.flow.is_transitioning());
        assert!(h.flow.transition().is_none());
        assert_eq!(h.flow.current(), ScreenId::Unknown);
        assert_eq!(h.take_log(), vec![(ScreenId::Gameplay, Hook::Unload)]);
    }

    //--- Transitions ------------------------------------------------------

    #[test]
    fn begin_transition_defers_swap() {
        let mut h = Harness::started(ScreenId::Logo);

        h.flow.begin_transition(ScreenId::Title).unwrap();

        let transition = h.flow.transition().copied().unwrap();
        assert_eq!(transition.from(), ScreenId::Logo);
        assert_eq!(transition.to(), ScreenId::Title);
        assert_eq!(transition.alpha(), 0.0);
        assert!(!transition.is_fading_out());
        assert_eq!(h.flow.current(), ScreenId::Logo);
        assert!(h.take_log().is_empty());
    }

    #[test]
    fn second_transition_is_rejected() {
        let mut h = Harness::started(ScreenId::Title);
        h.flow.begin_transition(ScreenId::Options).unwrap();
        h.tick();

        let result = h.flow.begin_transition(ScreenId::Gameplay);

        assert_eq!(
            result,
            Err(FlowError::TransitionInFlight { from: ScreenId::Title, to: ScreenId::Options })
        );
        assert_eq!(h.flow.transition().unwrap().to(), ScreenId::Options);
        assert!(h.flow.transition().unwrap().alpha() > 0.0);
    }

    #[test]
    fn transition_before_start_is_rejected() {
        let mut h = Harness::new();
        assert_eq!(h.flow.begin_transition(ScreenId::Title), Err(FlowError::NotStarted));
        assert!(!h.flow.is_transitioning());
    }

    #[test]
    fn swap_happens_on_tick_21() {
        let mut h = Harness::started(ScreenId::Logo);
        h.flow.begin_transition(ScreenId::Title).unwrap();

        for _ in 0..20 {
            h.tick();
            assert_eq!(h.flow.current(), ScreenId::Logo);
        }
        assert!(h.take_log().is_empty());

        h.tick();

        assert_eq!(h.flow.current(), ScreenId::Title);
        assert_eq!(h.flow.transition().unwrap().alpha(), 1.0);
        assert!(h.flow.transition().unwrap().is_fading_out());
        assert_eq!(
            h.take_log(),
            vec![(ScreenId::Logo, Hook::Unload), (ScreenId::Title, Hook::Init)]
        );
    }

    #[test]
    fn transition_ends_on_tick_51_of_fade_out() {
        let mut h = Harness::started(ScreenId::Logo);
        h.flow.begin_transition(ScreenId::Title).unwrap();
        assert_eq!(h.ticks_to_swap(), 21);

        for _ in 0..50 {
            h.tick();
            assert!(h.flow.is_transitioning());
        }

        h.tick();

        assert!(!h.flow.is_transitioning());
        assert_eq!(h.flow.current(), ScreenId::Title);
    }

    #[test]
    fn screens_do_not_update_while_fading() {
        let mut h = Harness::started(ScreenId::Logo);
        h.flow.begin_transition(ScreenId::Title).unwrap();

        for _ in 0..10 {
            h.tick();
        }

        assert!(h.take_log().iter().all(|(_, hook)| *hook != Hook::Update));
    }

    #[test]
    fn transition_through_options_runs_its_hooks() {
        let mut h = Harness::started(ScreenId::Title);
        h.flow.begin_transition(ScreenId::Options).unwrap();
        h.ticks_to_swap();
        assert_eq!(
            h.take_log(),
            vec![(ScreenId::Title, Hook::Unload), (ScreenId::Options, Hook::Init)]
        );

        while h.flow.is_transitioning() {
            h.tick();
        }
        h.flow.begin_transition(ScreenId::Title).unwrap();
        h.ticks_to_swap();

        assert_eq!(
            h.take_log(),
            vec![(ScreenId::Options, Hook::Unload), (ScreenId::Title, Hook::Init)]
        );
    }

    //--- Routing ----------------------------------------------------------

    #[test]
    fn finish_code_routes_to_next_screen() {
        let mut h = Harness::started(ScreenId::Title);

        h.set_finish(ScreenId::Title, 2);
        h.tick();

        let transition = h.flow.transition().copied().unwrap();
        assert_eq!(transition.to(), ScreenId::Gameplay);
        assert_eq!(h.take_log(), vec![(ScreenId::Title, Hook::Update)]);
    }

    #[test]
    fn title_code_one_routes_to_options() {
        let mut h = Harness::started(ScreenId::Title);
        h.set_finish(ScreenId::Title, 1);
        h.tick();
        assert_eq!(h.flow.transition().unwrap().to(), ScreenId::Options);
    }

    #[test]
    fn logo_routes_on_any_code() {
        let mut h = Harness::started(ScreenId::Logo);
        h.set_finish(ScreenId::Logo, 5);
        h.tick();
        assert_eq!(h.flow.transition().unwrap().to(), ScreenId::Title);
    }

    #[test]
    fn unrouted_code_keeps_screen() {
        let mut h = Harness::started(ScreenId::Gameplay);
        h.set_finish(ScreenId::Gameplay, 2);

        h.tick();
        h.tick();

        assert!(!h.flow.is_transitioning());
        assert_eq!(h.flow.current(), ScreenId::Gameplay);
    }

    #[test]
    fn running_screen_keeps_updating() {
        let mut h = Harness::started(ScreenId::Ending);

        h.tick();
        h.tick();

        assert_eq!(
            h.take_log(),
            vec![(ScreenId::Ending, Hook::Update), (ScreenId::Ending, Hook::Update)]
        );
    }

    //--- Cancellation -----------------------------------------------------

    #[test]
    fn cancel_during_fade_in_returns_to_source() {
        let mut h = Harness::started(ScreenId::Title);
        h.flow.begin_transition(ScreenId::Gameplay).unwrap();
        for _ in 0..5 {
            h.tick();
        }

        h.flow.cancel_transition().unwrap();
        while h.flow.is_transitioning() {
            h.tick();
        }

        assert_eq!(h.flow.current(), ScreenId::Title);
        assert!(h.take_log().is_empty());
    }

    #[test]
    fn cancel_after_swap_is_rejected() {
        let mut h = Harness::started(ScreenId::Title);
        h.flow.begin_transition(ScreenId::Gameplay).unwrap();
        h.ticks_to_swap();

        assert_eq!(h.flow.cancel_transition(), Err(FlowError::TransitionCommitted));
        assert_eq!(h.flow.current(), ScreenId::Gameplay);
    }

    #[test]
    fn cancel_without_transition_is_rejected() {
        let mut h = Harness::started(ScreenId::Title);
        assert_eq!(h.flow.cancel_transition(), Err(FlowError::NoTransition));
    }

    //--- Drawing ----------------------------------------------------------

    #[test]
    fn overlay_drawn_on_top_only_while_fading() {
        let mut h = Harness::started(ScreenId::Logo);

        let mut idle = DrawList::new();
        h.flow.draw(&mut idle, &h.context);
        assert!(!idle.commands().iter().any(|c| matches!(c, DrawCommand::FillRect { .. })));

        h.flow.begin_transition(ScreenId::Title).unwrap();
        for _ in 0..10 {
            h.tick();
        }

        let mut fading = DrawList::new();
        h.flow.draw(&mut fading, &h.context);

        match fading.topmost() {
            Some(DrawCommand::FillRect { rect, color }) => {
                assert_eq!(*rect, h.context.viewport.rect());
                assert_eq!((color.r, color.g, color.b), (0, 0, 0));
                assert!((color.a - h.flow.transition().unwrap().alpha()).abs() < f32::EPSILON);
            }
            other => panic!("Expected overlay on top, got {:?}", other),
        }
    }

    #[test]
    fn immediate_switch_never_interleaves_draw() {
        let mut h = Harness::started(ScreenId::Logo);
        let mut list = DrawList::new();

        h.flow.draw(&mut list, &h.context);
        h.flow.switch_to(ScreenId::Ending, &h.context).unwrap();
        h.flow.draw(&mut list, &h.context);

        assert_eq!(
            h.take_log(),
            vec![
                (ScreenId::Logo, Hook::Draw),
                (ScreenId::Logo, Hook::Unload),
                (ScreenId::Ending, Hook::Init),
                (ScreenId::Ending, Hook::Draw),
            ]
        );
    }

    #[test]
    fn flow_error_display() {
        let err = FlowError::TransitionInFlight { from: ScreenId::Title, to: ScreenId::Options };
        assert_eq!(err.to_string(), "Transition Title -> Options already in flight");
        fn assert_error<T: std::error::Error>() {}
        assert_error::<FlowError>();
    }
}
