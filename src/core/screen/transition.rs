//=========================================================================
// Fade Transition
//=========================================================================
//
// Two-phase black fade between two screens.
//
// Phases:
//   FadeIn   alpha 0 → 1   (overlay darkens, old screen still shown)
//     └─ alpha > 1.01: clamp to 1, swap screens, enter FadeOut
//   FadeOut  alpha 1 → 0   (overlay clears, new screen shown)
//     └─ alpha < -0.01: clamp to 0, transition ends
//
// The thresholds sit just past the range ends so accumulated float error
// can never stall the fade one step short of 1.0 or 0.0.
//
// Steps are `rate * dt`. The default rates reproduce the classic
// 60 Hz per-frame steps (+0.05 in, -0.02 out), so fading in is 2.5x
// faster than fading out at any frame rate.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::ScreenId;

//=== Constants ===========================================================

/// Fade-in swaps screens once alpha rises above this.
pub const FADE_IN_TRIGGER: f32 = 1.01;

/// Fade-out ends once alpha drops below this.
pub const FADE_OUT_TRIGGER: f32 = -0.01;

//=== FadeTiming ==========================================================

/// Fade speeds in alpha units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeTiming {
    fade_in_rate: f32,
    fade_out_rate: f32,
}

impl FadeTiming {
    /// Frame rate the classic per-frame steps were tuned for.
    pub const REFERENCE_FPS: f32 = 60.0;

    /// Creates a timing from per-second rates.
    ///
    /// # Panics
    ///
    /// Panics if either rate is not strictly positive and finite.
    pub fn new(fade_in_rate: f32, fade_out_rate: f32) -> Self {
        assert!(
            fade_in_rate.is_finite() && fade_in_rate > 0.0,
            "Fade-in rate must be positive, got {}",
            fade_in_rate
        );
        assert!(
            fade_out_rate.is_finite() && fade_out_rate > 0.0,
            "Fade-out rate must be positive, got {}",
            fade_out_rate
        );
        Self { fade_in_rate, fade_out_rate }
    }

    /// Converts per-frame steps at `fps` into per-second rates.
    pub fn from_frame_steps(fade_in_step: f32, fade_out_step: f32, fps: f32) -> Self {
        Self::new(fade_in_step * fps, fade_out_step * fps)
    }

    pub fn fade_in_rate(&self) -> f32 {
        self.fade_in_rate
    }

    pub fn fade_out_rate(&self) -> f32 {
        self.fade_out_rate
    }
}

impl Default for FadeTiming {
    /// +0.05 / -0.02 per frame at 60 Hz (3.0/s in, 1.2/s out).
    fn default() -> Self {
        Self::from_frame_steps(0.05, 0.02, Self::REFERENCE_FPS)
    }
}

//=== FadePhase ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Overlay darkening; the source screen is still current.
    FadeIn,

    /// Overlay clearing; the destination screen is current.
    FadeOut,
}

//=== StepOutcome =========================================================

/// What the flow controller must do after one transition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    /// Still fading, nothing to do.
    Fading,

    /// Fade-in completed: unload `from`, init `to`.
    Swap { from: ScreenId, to: ScreenId },

    /// Fade-out completed: drop the transition.
    Finished,
}

//=== Transition ==========================================================

/// An in-flight fade between two screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: ScreenId,
    to: ScreenId,
    phase: FadePhase,
    alpha: f32,
}

impl Transition {
    pub(crate) fn new(from: ScreenId, to: ScreenId) -> Self {
        Self { from, to, phase: FadePhase::FadeIn, alpha: 0.0 }
    }

    pub fn from(&self) -> ScreenId {
        self.from
    }

    pub fn to(&self) -> ScreenId {
        self.to
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn is_fading_out(&self) -> bool {
        self.phase == FadePhase::FadeOut
    }

    /// Overlay opacity in [0, 1].
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Advances the fade by `dt` seconds.
    pub(crate) fn step(&mut self, timing: &FadeTiming, dt: f32) -> StepOutcome {
        match self.phase {
            FadePhase::FadeIn => {
                self.alpha += timing.fade_in_rate * dt;

                if self.alpha > FADE_IN_TRIGGER {
                    self.alpha = 1.0;
                    self.phase = FadePhase::FadeOut;
                    return StepOutcome::Swap { from: self.from, to: self.to };
                }
                StepOutcome::Fading
            }
            FadePhase::FadeOut => {
                self.alpha -= timing.fade_out_rate * dt;

                if self.alpha < FADE_OUT_TRIGGER {
                    self.alpha = 0.0;
                    return StepOutcome::Finished;
                }
                StepOutcome::Fading
            }
        }
    }

    /// Turns a fade-in around without swapping: the overlay clears back
    /// onto the source screen. Returns `false` once the swap happened.
    pub(crate) fn reverse(&mut self) -> bool {
        if self.phase == FadePhase::FadeOut {
            return false;
        }
        self.to = self.from;
        self.phase = FadePhase::FadeOut;
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
