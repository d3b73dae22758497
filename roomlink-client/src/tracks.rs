/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

//
// TrackState holds the enable flag for one local media track (microphone or
// camera). The engine observes the flag through the session controller; the
// track itself lives inside the engine.
//

#[derive(Clone, Debug)]
pub struct TrackState {
    enabled: Arc<AtomicBool>,
}

impl TrackState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    // Sets the enabled bit to a given value, returning true if it was a change.
    pub fn set_enabled(&self, value: bool) -> bool {
        if value != self.enabled.load(Ordering::Acquire) {
            self.enabled.store(value, Ordering::Release);
            true
        } else {
            false
        }
    }

    /// Flips the enabled bit, returning the new value.
    pub fn toggle(&self) -> bool {
        let value = !self.is_enabled();
        self.enabled.store(value, Ordering::Release);
        value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

/// The pair of local tracks the widget publishes. Both start enabled, matching
/// the state the user sees before the first toggle.
#[derive(Clone, Debug)]
pub struct LocalTracks {
    pub microphone: TrackState,
    pub camera: TrackState,
}

impl LocalTracks {
    pub fn new() -> Self {
        Self {
            microphone: TrackState::new(true),
            camera: TrackState::new(true),
        }
    }
}

impl Default for LocalTracks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original_value() {
        let track = TrackState::new(true);
        track.toggle();
        assert!(!track.is_enabled());
        track.toggle();
        assert!(track.is_enabled());
    }

    #[test]
    fn set_enabled_reports_changes_only() {
        let track = TrackState::new(false);
        assert!(track.set_enabled(true));
        assert!(!track.set_enabled(true));
        assert!(track.set_enabled(false));
    }

    #[test]
    fn local_tracks_start_enabled() {
        let tracks = LocalTracks::new();
        assert!(tracks.microphone.is_enabled());
        assert!(tracks.camera.is_enabled());
    }
}
