//=========================================================================
// Clock Track
//=========================================================================
//
// Timeline-only music track: advances a play head, produces no sound.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::MusicTrack;

//=== ClockTrack ==========================================================

/// Deterministic looping track with a fixed length.
///
/// Used by the demo binary in place of decoded streams, and by tests that
/// need exact playback progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockTrack {
    name: String,
    length: f32,
    played: f32,
    volume: f32,
    playing: bool,
    looping: bool,
}

impl ClockTrack {
    /// Creates a stopped, looping track of `length` seconds.
    pub fn new(name: impl Into<String>, length: f32) -> Self {
        Self {
            name: name.into(),
            length,
            played: 0.0,
            volume: 1.0,
            playing: false,
            looping: true,
        }
    }

    /// Non-looping tracks stop at their end.
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Moves the play head. Clamped to the track.
    pub fn seek(&mut self, seconds: f32) {
        self.played = seconds.clamp(0.0, self.length.max(0.0));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl MusicTrack for ClockTrack {
    fn update_stream(&mut self, dt: f32) {
        if !self.playing || self.length.is_nan() || self.length <= 0.0 {
            return;
        }

        self.played += dt;
        if self.played >= self.length {
            if self.looping {
                self.played %= self.length;
            } else {
                self.played = self.length;
                self.playing = false;
            }
        }
    }

    fn time_played(&self) -> f32 {
        self.played
    }

    fn time_length(&self) -> f32 {
        self.length
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn play(&mut self) {
        self.played = 0.0;
        self.playing = true;
    }

    fn stop(&mut self) {
        self.played = 0.0;
        self.playing = false;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
