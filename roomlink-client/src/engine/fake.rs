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

//! Scriptable in-memory [`RtcEngine`] used by the unit tests.

use super::{EngineConnectOptions, EngineError, RtcEngine};
use roomlink_types::RemoteParticipant;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct FakeEngineInner {
    connected: bool,
    fail_connect: Option<String>,
    participants: Vec<RemoteParticipant>,
    connect_options: Option<EngineConnectOptions>,
    connect_count: usize,
    disconnect_count: usize,
    microphone_calls: Vec<bool>,
    camera_calls: Vec<bool>,
}

/// A fake engine that connects synchronously and lets tests script the remote
/// participant list and connection loss.
#[derive(Clone, Default)]
pub struct FakeEngine {
    inner: Rc<RefCell<FakeEngineInner>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `connect` call fail with the given reason.
    pub fn fail_next_connect(&self, reason: &str) {
        self.inner.borrow_mut().fail_connect = Some(reason.to_string());
    }

    /// Replace the reported participant list and fire `on_participants_changed`.
    pub fn set_remote_participants(&self, uids: &[u32]) {
        let callback = {
            let mut inner = self.inner.borrow_mut();
            inner.participants = uids.iter().map(|&uid| RemoteParticipant::new(uid)).collect();
            inner.participants.sort();
            inner
                .connect_options
                .as_ref()
                .map(|options| options.on_participants_changed.clone())
        };
        if let Some(callback) = callback {
            callback.emit(());
        }
    }

    /// Drop the session and fire `on_connection_lost`.
    pub fn simulate_connection_lost(&self, reason: &str) {
        let callback = {
            let mut inner = self.inner.borrow_mut();
            inner.connected = false;
            inner
                .connect_options
                .as_ref()
                .map(|options| options.on_connection_lost.clone())
        };
        if let Some(callback) = callback {
            callback.emit(reason.to_string());
        }
    }

    pub fn connect_count(&self) -> usize {
        self.inner.borrow().connect_count
    }

    pub fn disconnect_count(&self) -> usize {
        self.inner.borrow().disconnect_count
    }

    /// The token the last `connect` call carried.
    pub fn last_token(&self) -> Option<String> {
        self.inner
            .borrow()
            .connect_options
            .as_ref()
            .and_then(|options| options.token.clone())
    }

    pub fn microphone_calls(&self) -> Vec<bool> {
        self.inner.borrow().microphone_calls.clone()
    }

    pub fn camera_calls(&self) -> Vec<bool> {
        self.inner.borrow().camera_calls.clone()
    }
}

impl RtcEngine for FakeEngine {
    fn connect(&self, options: EngineConnectOptions) -> Result<(), EngineError> {
        let on_connected = {
            let mut inner = self.inner.borrow_mut();
            inner.connect_count += 1;
            if let Some(reason) = inner.fail_connect.take() {
                return Err(EngineError::Sdk(reason));
            }
            inner.connected = true;
            let on_connected = options.on_connected.clone();
            inner.connect_options = Some(options);
            on_connected
        };
        // Borrow released first: the callback re-enters the engine through the
        // controller (track sync on connect).
        on_connected.emit(());
        Ok(())
    }

    fn disconnect(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.disconnect_count += 1;
        inner.connected = false;
        inner.participants.clear();
    }

    fn is_connected(&self) -> bool {
        self.inner.borrow().connected
    }

    fn remote_participants(&self) -> Vec<RemoteParticipant> {
        self.inner.borrow().participants.clone()
    }

    fn set_microphone_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().microphone_calls.push(enabled);
    }

    fn set_camera_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().camera_calls.push(enabled);
    }
}
