//=========================================================================
// Track Bank
//=========================================================================
//
// Fixed bank of background tracks, each with a stored volume.
//
// Toggling only flips the stored volume. Stored volumes reach the tracks
// when the playback progress of track 0 sits in the first 5% of either
// half of the track:
//
//   progress = played / length        (clamped to [0, 1])
//   reapply  = progress % 0.5 < 0.05
//
// With `VolumeSync::Immediate` a toggle is applied at once and the
// periodic batch is skipped.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::{AudioError, MusicTrack, TRACK_SLOTS};

//=== Constants ===========================================================

/// Reapply window repeats every half of track 0.
pub const REAPPLY_PERIOD: f32 = 0.5;

/// Width of the reapply window at the start of each period.
pub const REAPPLY_WINDOW: f32 = 0.05;

/// Whether stored volumes are reapplied at `progress` of track 0.
pub fn reapply_due(progress: f32) -> bool {
    progress % REAPPLY_PERIOD < REAPPLY_WINDOW
}

//=== VolumeSync ==========================================================

/// When toggled volumes reach the tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeSync {
    /// Batched at the reapply points of track 0's playback.
    #[default]
    Periodic,

    /// On every toggle.
    Immediate,
}

//=== TrackSlot ===========================================================

#[derive(Default)]
struct TrackSlot {
    track: Option<Box<dyn MusicTrack>>,
    volume: f32,
}

//=== TrackBank ===========================================================

/// Eight background tracks with independently toggleable volumes.
pub struct TrackBank {
    slots: [TrackSlot; TRACK_SLOTS],
    sync: VolumeSync,
}

impl TrackBank {
    /// Volumes the game starts with: the base layers (slots 1 and 6) on,
    /// everything else muted.
    pub const STARTUP_VOLUMES: [f32; TRACK_SLOTS] = [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0];

    //--- Construction -----------------------------------------------------

    /// Creates an empty bank with every volume at 0.
    pub fn new() -> Self {
        Self::with_sync(VolumeSync::default())
    }

    pub fn with_sync(sync: VolumeSync) -> Self {
        Self {
            slots: std::array::from_fn(|_| TrackSlot::default()),
            sync,
        }
    }

    //--- Configuration ----------------------------------------------------

    pub fn sync(&self) -> VolumeSync {
        self.sync
    }

    pub fn set_sync(&mut self, sync: VolumeSync) {
        self.sync = sync;
    }

    //--- Loading ----------------------------------------------------------

    /// Puts `track` in slot `index` with `volume` and starts playback.
    ///
    /// A track already in the slot is stopped and dropped.
    pub fn load<T>(&mut self, index: usize, track: T, volume: f32) -> Result<(), AudioError>
    where
        T: MusicTrack + 'static,
    {
        let slot = self.slot_mut(index)?;
        let volume = volume.clamp(0.0, 1.0);

        if let Some(mut previous) = slot.track.take() {
            warn!("Track slot {} already loaded, replacing", index);
            previous.stop();
        }

        let mut track: Box<dyn MusicTrack> = Box::new(track);
        track.set_volume(volume);
        track.play();

        slot.track = Some(track);
        slot.volume = volume;

        debug!("Loaded track slot {} at volume {}", index, volume);
        Ok(())
    }

    /// Stops and removes the track in slot `index`. The stored volume is
    /// kept.
    pub fn unload(&mut self, index: usize) -> Result<Option<Box<dyn MusicTrack>>, AudioError> {
        let slot = self.slot_mut(index)?;
        let mut track = slot.track.take();
        if let Some(track) = track.as_mut() {
            track.stop();
            debug!("Unloaded track slot {}", index);
        }
        Ok(track)
    }

    /// Stops and removes every track.
    pub fn unload_all(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(mut track) = slot.track.take() {
                track.stop();
                trace!("Unloaded track slot {}", index);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Stored volume of slot `index`.
    pub fn volume(&self, index: usize) -> Option<f32> {
        self.slots.get(index).map(|slot| slot.volume)
    }

    pub fn volumes(&self) -> [f32; TRACK_SLOTS] {
        std::array::from_fn(|index| self.slots[index].volume)
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.track.is_some())
    }

    /// Progress of track 0 in [0, 1].
    ///
    /// `None` without a track 0 or with a degenerate length.
    pub fn playback_progress(&self) -> Option<f32> {
        let track = self.slots[0].track.as_ref()?;
        let length = track.time_length();
        if !length.is_finite() || length <= 0.0 {
            return None;
        }
        Some((track.time_played() / length).clamp(0.0, 1.0))
    }

    //--- Toggling ---------------------------------------------------------

    /// Flips the stored volume of slot `index` (`v = 1 - v`).
    ///
    /// Returns the new volume.
    pub fn toggle(&mut self, index: usize) -> Result<f32, AudioError> {
        let sync = self.sync;
        let slot = self.slot_mut(index)?;

        slot.volume = 1.0 - slot.volume;
        let volume = slot.volume;

        if sync == VolumeSync::Immediate {
            if let Some(track) = slot.track.as_mut() {
                track.set_volume(volume);
            }
        }

        debug!("Track slot {} toggled to volume {}", index, volume);
        Ok(volume)
    }

    //--- Per-Tick ---------------------------------------------------------

    /// Advances every loaded track by `dt` seconds.
    pub fn update_streams(&mut self, dt: f32) {
        for track in self.slots.iter_mut().filter_map(|slot| slot.track.as_mut()) {
            track.update_stream(dt);
        }
    }

    /// Reapplies stored volumes when track 0 is at a reapply point.
    ///
    /// Returns whether volumes were applied.
    pub fn tick(&mut self) -> bool {
        if self.sync == VolumeSync::Immediate {
            return false;
        }

        let Some(progress) = self.playback_progress() else {
            trace!("Track tick skipped: track 0 missing or has no length");
            return false;
        };

        if !reapply_due(progress) {
            return false;
        }

        trace!("Reapplying track volumes at progress {:.3}", progress);
        self.apply_volumes();
        true
    }

    /// Pushes every stored volume to its track.
    pub fn apply_volumes(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some(track) = slot.track.as_mut() {
                track.set_volume(slot.volume);
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn slot_mut(&mut self, index: usize) -> Result<&mut TrackSlot, AudioError> {
        self.slots
            .get_mut(index)
            .ok_or(AudioError::SlotOutOfRange { index, slots: TRACK_SLOTS })
    }
}

impl Default for TrackBank {
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
    use crate::core::audio::ClockTrack;
    use std::sync::{Arc, Mutex};

    //--- Recording Track --------------------------------------------------

    #[derive(Debug, Default)]
    struct SpyState {
        played: f32,
        length: f32,
        volumes: Vec<f32>,
        playing: bool,
        streamed: f32,
    }

    /// Track whose state the test keeps a handle to.
    #[derive(Clone)]
    struct SpyTrack(Arc<Mutex<SpyState>>);

    impl SpyTrack {
        fn new(played: f32, length: f32) -> Self {
            Self(Arc::new(Mutex::new(SpyState { played, length, ..SpyState::default() })))
        }

        fn set_played(&self, played: f32) {
            self.0.lock().unwrap().played = played;
        }

        fn volumes(&self) -> Vec<f32> {
            self.0.lock().unwrap().volumes.clone()
        }

        fn last_volume(&self) -> Option<f32> {
            self.volumes().last().copied()
        }
    }

    impl MusicTrack for SpyTrack {
        fn update_stream(&mut self, dt: f32) {
            self.0.lock().unwrap().streamed += dt;
        }

        fn time_played(&self) -> f32 {
            self.0.lock().unwrap().played
        }

        fn time_length(&self) -> f32 {
            self.0.lock().unwrap().length
        }

        fn set_volume(&mut self, volume: f32) {
            self.0.lock().unwrap().volumes.push(volume);
        }

        fn play(&mut self) {
            self.0.lock().unwrap().playing = true;
        }

        fn stop(&mut self) {
            self.0.lock().unwrap().playing = false;
        }
    }

    /// Bank with a spy in every slot, track 0 at `played`/100 s.
    fn loaded_bank(played: f32) -> (TrackBank, Vec<SpyTrack>) {
        let mut bank = TrackBank::new();
        let spies: Vec<SpyTrack> =
            (0..TRACK_SLOTS).map(|_| SpyTrack::new(played, 100.0)).collect();

        for (index, spy) in spies.iter().enumerate() {
            bank.load(index, spy.clone(), TrackBank::STARTUP_VOLUMES[index]).unwrap();
        }
        (bank, spies)
    }

    //--- Gating -----------------------------------------------------------

    #[test]
    fn reapply_window_opens_at_each_half() {
        assert!(reapply_due(0.0));
        assert!(reapply_due(0.03));
        assert!(reapply_due(0.5));
        assert!(reapply_due(0.52));
        assert!(reapply_due(1.0));
    }

    #[test]
    fn reapply_window_closed_elsewhere() {
        assert!(!reapply_due(0.05));
        assert!(!reapply_due(0.25));
        assert!(!reapply_due(0.49));
        assert!(!reapply_due(0.56));
        assert!(!reapply_due(0.99));
    }

    #[test]
    fn tick_applies_all_volumes_at_reapply_point() {
        let (mut bank, spies) = loaded_bank(50.0);

        assert!(bank.tick());

        for (index, spy) in spies.iter().enumerate() {
            assert_eq!(spy.last_volume(), Some(TrackBank::STARTUP_VOLUMES[index]));
            assert_eq!(spy.volumes().len(), 2, "load + reapply");
        }
    }

    #[test]
    fn tick_outside_window_leaves_tracks() {
        let (mut bank, spies) = loaded_bank(49.0);

        bank.toggle(3).unwrap();

        assert!(!bank.tick());
        assert_eq!(spies[3].last_volume(), Some(0.0));
    }

    #[test]
    fn toggled_volume_reaches_track_at_next_window() {
        let (mut bank, spies) = loaded_bank(30.0);

        bank.toggle(3).unwrap();
        assert!(!bank.tick());

        spies[0].set_played(100.0);
        assert!(bank.tick());
        assert_eq!(spies[3].last_volume(), Some(1.0));
    }

    #[test]
    fn progress_is_clamped_past_the_end() {
        let (mut bank, spies) = loaded_bank(0.0);
        spies[0].set_played(130.0);

        assert_eq!(bank.playback_progress(), Some(1.0));
        assert!(bank.tick());
    }

    #[test]
    fn missing_track_zero_is_noop() {
        let (mut bank, spies) = loaded_bank(0.0);
        bank.unload(0).unwrap();

        assert_eq!(bank.playback_progress(), None);
        assert!(!bank.tick());
        assert_eq!(spies[1].volumes().len(), 1);
    }

    #[test]
    fn zero_length_track_zero_is_noop() {
        let mut bank = TrackBank::new();
        bank.load(0, SpyTrack::new(0.0, 0.0), 1.0).unwrap();

        assert_eq!(bank.playback_progress(), None);
        assert!(!bank.tick());
    }

    #[test]
    fn degenerate_lengths_are_noop() {
        for length in [-30.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut bank = TrackBank::new();
            let base = SpyTrack::new(0.0, length);
            let layer = SpyTrack::new(0.0, 60.0);
            bank.load(0, base.clone(), 1.0).unwrap();
            bank.load(1, layer.clone(), 0.0).unwrap();

            assert_eq!(bank.playback_progress(), None, "length {}", length);
            assert!(!bank.tick(), "length {} should not reapply", length);
            assert_eq!(layer.volumes().len(), 1, "length {} touched slot 1", length);
        }
    }

    #[test]
    fn empty_bank_tick_is_noop() {
        let mut bank = TrackBank::new();
        assert!(!bank.tick());
    }

    //--- Toggling ---------------------------------------------------------

    #[test]
    fn toggle_flips_volume() {
        let (mut bank, _spies) = loaded_bank(10.0);

        assert_eq!(bank.toggle(0), Ok(1.0));
        assert_eq!(bank.toggle(1), Ok(0.0));
    }

    #[test]
    fn double_toggle_restores_volume() {
        let mut bank = TrackBank::new();
        bank.load(2, ClockTrack::new("layer", 60.0), 0.3).unwrap();

        bank.toggle(2).unwrap();
        bank.toggle(2).unwrap();

        assert!((bank.volume(2).unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn toggle_out_of_range_is_rejected() {
        let mut bank = TrackBank::new();
        assert_eq!(bank.toggle(8), Err(AudioError::SlotOutOfRange { index: 8, slots: 8 }));
        assert_eq!(bank.volumes(), [0.0; TRACK_SLOTS]);
    }

    #[test]
    fn toggle_empty_slot_still_stores() {
        let mut bank = TrackBank::new();
        assert_eq!(bank.toggle(5), Ok(1.0));
        assert_eq!(bank.volume(5), Some(1.0));
    }

    #[test]
    fn periodic_toggle_does_not_touch_track() {
        let (mut bank, spies) = loaded_bank(10.0);
        bank.toggle(4).unwrap();
        assert_eq!(spies[4].volumes(), vec![0.0]);
    }

    #[test]
    fn immediate_toggle_applies_at_once_and_skips_tick() {
        let (mut bank, spies) = loaded_bank(0.0);
        bank.set_sync(VolumeSync::Immediate);

        bank.toggle(4).unwrap();

        assert_eq!(spies[4].last_volume(), Some(1.0));
        assert!(!bank.tick());
    }

    //--- Loading ----------------------------------------------------------

    #[test]
    fn load_starts_playback_at_volume() {
        let spy = SpyTrack::new(0.0, 10.0);
        let mut bank = TrackBank::new();

        bank.load(6, spy.clone(), 1.0).unwrap();

        assert!(bank.is_loaded(6));
        assert!(spy.0.lock().unwrap().playing);
        assert_eq!(spy.volumes(), vec![1.0]);
    }

    #[test]
    fn load_replacing_stops_previous() {
        let first = SpyTrack::new(0.0, 10.0);
        let mut bank = TrackBank::new();
        bank.load(1, first.clone(), 1.0).unwrap();

        bank.load(1, SpyTrack::new(0.0, 10.0), 1.0).unwrap();

        assert!(!first.0.lock().unwrap().playing);
    }

    #[test]
    fn load_out_of_range_is_rejected() {
        let mut bank = TrackBank::new();
        let result = bank.load(TRACK_SLOTS, ClockTrack::new("extra", 1.0), 1.0);
        assert_eq!(result, Err(AudioError::SlotOutOfRange { index: 8, slots: 8 }));
    }

    #[test]
    fn update_streams_advances_every_track() {
        let (mut bank, spies) = loaded_bank(0.0);

        bank.update_streams(0.25);

        for spy in &spies {
            assert_eq!(spy.0.lock().unwrap().streamed, 0.25);
        }
    }

    #[test]
    fn unload_all_stops_everything() {
        let (mut bank, spies) = loaded_bank(0.0);

        bank.unload_all();

        for (index, spy) in spies.iter().enumerate() {
            assert!(!bank.is_loaded(index));
            assert!(!spy.0.lock().unwrap().playing);
        }
    }

    #[test]
    fn audio_error_display() {
        let err = AudioError::SlotOutOfRange { index: 9, slots: 8 };
        assert_eq!(err.to_string(), "Track slot 9 out of range (bank has 8 slots)");
    }
}
