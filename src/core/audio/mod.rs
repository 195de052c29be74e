//=========================================================================
// Audio
//=========================================================================
//
// Background music bank with per-track mute toggling.
//
// Architecture:
//   TrackBank
//     ├─ slots: [TrackSlot; TRACK_SLOTS]   (track handle + stored volume)
//     └─ sync: VolumeSync                  (when stored volumes reach tracks)
//
// Flow (per tick):
//   digit keys → toggle() → stored volume flips
//   update_streams(dt) → every track advances
//   tick() → progress of track 0 gates apply_volumes()
//
// Decoding and output are behind `MusicTrack`; `ClockTrack` is a
// timeline-only implementation.
//
//=========================================================================

//=== Module Declarations =================================================

mod clock_track;
mod track_bank;

//=== Public API ==========================================================

pub use clock_track::ClockTrack;
pub use track_bank::{reapply_due, TrackBank, VolumeSync, REAPPLY_PERIOD, REAPPLY_WINDOW};

//=== Constants ===========================================================

/// Number of slots in the track bank.
pub const TRACK_SLOTS: usize = 8;

//=== MusicTrack ==========================================================

/// A streamed music track.
///
/// Times are in seconds. Implementations must tolerate `set_volume`
/// being called every tick.
pub trait MusicTrack: Send {
    /// Advances the stream by `dt` seconds.
    fn update_stream(&mut self, dt: f32);

    /// Playback position.
    fn time_played(&self) -> f32;

    /// Total length.
    fn time_length(&self) -> f32;

    /// Output volume in [0, 1].
    fn set_volume(&mut self, volume: f32);

    fn play(&mut self);

    fn stop(&mut self);
}

//=== AudioError ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioError {
    /// Slot index outside the bank.
    SlotOutOfRange { index: usize, slots: usize },
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlotOutOfRange { index, slots } => {
                write!(f, "Track slot {} out of range (bank has {} slots)", index, slots)
            }
        }
    }
}

impl std::error::Error for AudioError {}
