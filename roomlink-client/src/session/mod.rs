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

//! The session state machine.
//!
//! All widget state lives in one [`SessionState`] struct, mutated only by the
//! pure [`SessionState::apply`] transition function:
//!
//! ```text
//! Idle --JoinRequested--> FetchingToken --TokenFetched--> Connecting
//!      <--TokenFetchFailed--/                                  |
//!      <-------------- HangUp / ConnectionLost --------- InCall
//! ```
//!
//! `apply` performs no I/O; it hands back an [`Effect`] that tells the
//! [`SessionController`] which external call to make. Actions that do not fit
//! the current phase are dropped, which is what makes a second join click or
//! a token that arrives after hang-up harmless.

mod controller;

pub use controller::{SessionController, SessionControllerOptions};

use roomlink_types::ParticipantRole;

/// Where the session currently is. `FetchingToken` and `Connecting` are the
/// transient states between the join click and the engine reporting a live
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    FetchingToken,
    Connecting,
    InCall,
}

/// Connection configuration, seeded at mount and edited through the join
/// form. Discarded when the widget unmounts; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub app_id: String,
    pub channel: String,
    /// The fetched credential; `None` until the token service has answered.
    pub token: Option<String>,
    pub uid: u32,
    pub role: ParticipantRole,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetAppId(String),
    SetChannel(String),
    SetUid(u32),
    SetRole(ParticipantRole),
    JoinRequested,
    TokenFetched(String),
    TokenFetchFailed(String),
    EngineConnected,
    ConnectionLost(String),
    ToggleMicrophone,
    ToggleCamera,
    HangUp,
}

/// The side effect the controller must run after a transition. The reducer
/// itself never touches the network or the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchToken,
    Connect,
    /// Push the full track state to the engine (right after connecting).
    PublishTracks,
    /// Push only track flags that changed.
    SyncTracks,
    Disconnect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub config: SessionConfig,
    pub phase: SessionPhase,
    pub mic_enabled: bool,
    pub camera_enabled: bool,
    /// The most recent user-visible failure; cleared on the next join attempt.
    pub last_error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            phase: SessionPhase::Idle,
            mic_enabled: true,
            camera_enabled: true,
            last_error: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join needs both an application id and a room name; everything else has
    /// a usable default.
    pub fn can_join(&self) -> bool {
        !self.config.app_id.is_empty() && !self.config.channel.is_empty()
    }

    /// True once the user has asked to be in the call and the token is in
    /// hand, i.e. the engine owns the session (or is establishing it).
    pub fn is_calling(&self) -> bool {
        matches!(self.phase, SessionPhase::Connecting | SessionPhase::InCall)
    }

    /// Apply one action, returning the effect the controller should run.
    pub fn apply(&mut self, action: SessionAction) -> Effect {
        match action {
            SessionAction::SetAppId(app_id) => {
                if self.phase == SessionPhase::Idle {
                    self.config.app_id = app_id;
                }
                Effect::None
            }
            SessionAction::SetChannel(channel) => {
                if self.phase == SessionPhase::Idle {
                    self.config.channel = channel;
                }
                Effect::None
            }
            SessionAction::SetUid(uid) => {
                if self.phase == SessionPhase::Idle {
                    self.config.uid = uid;
                }
                Effect::None
            }
            SessionAction::SetRole(role) => {
                if self.phase == SessionPhase::Idle {
                    self.config.role = role;
                }
                Effect::None
            }
            SessionAction::JoinRequested => {
                if self.phase != SessionPhase::Idle || !self.can_join() {
                    return Effect::None;
                }
                self.last_error = None;
                self.config.token = None;
                self.phase = SessionPhase::FetchingToken;
                Effect::FetchToken
            }
            SessionAction::TokenFetched(token) => {
                // Anything but FetchingToken means the user hung up while the
                // request was in flight; the result is stale.
                if self.phase != SessionPhase::FetchingToken {
                    return Effect::None;
                }
                self.config.token = Some(token);
                self.phase = SessionPhase::Connecting;
                Effect::Connect
            }
            SessionAction::TokenFetchFailed(reason) => {
                if self.phase != SessionPhase::FetchingToken {
                    return Effect::None;
                }
                self.last_error = Some(reason);
                self.phase = SessionPhase::Idle;
                Effect::None
            }
            SessionAction::EngineConnected => {
                if self.phase != SessionPhase::Connecting {
                    return Effect::None;
                }
                self.phase = SessionPhase::InCall;
                Effect::PublishTracks
            }
            SessionAction::ConnectionLost(reason) => {
                if self.phase == SessionPhase::Idle {
                    return Effect::None;
                }
                self.last_error = Some(reason);
                self.phase = SessionPhase::Idle;
                self.config.token = None;
                Effect::None
            }
            SessionAction::ToggleMicrophone => {
                self.mic_enabled = !self.mic_enabled;
                if self.phase == SessionPhase::InCall {
                    Effect::SyncTracks
                } else {
                    Effect::None
                }
            }
            SessionAction::ToggleCamera => {
                self.camera_enabled = !self.camera_enabled;
                if self.phase == SessionPhase::InCall {
                    Effect::SyncTracks
                } else {
                    Effect::None
                }
            }
            SessionAction::HangUp => {
                if self.phase == SessionPhase::Idle {
                    return Effect::None;
                }
                let had_session = self.is_calling();
                self.phase = SessionPhase::Idle;
                self.config.token = None;
                if had_session {
                    Effect::Disconnect
                } else {
                    Effect::None
                }
            }
        }
    }
}
