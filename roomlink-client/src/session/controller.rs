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

use super::{Effect, SessionAction, SessionPhase, SessionState};
use crate::engine::{EngineConnectOptions, RtcEngine};
use crate::token::{TokenProvider, TokenRequest};
use crate::tracks::LocalTracks;
use log::{debug, error};
use roomlink_types::{Callback, RemoteParticipant};
use std::cell::RefCell;
use std::rc::Rc;

/// Options struct for constructing a controller via
/// [SessionController::new(options)][SessionController::new].
#[derive(Clone)]
pub struct SessionControllerOptions {
    /// Where credentials come from. Production wires
    /// [`HttpTokenProvider`](crate::HttpTokenProvider) here.
    pub token_provider: Rc<dyn TokenProvider>,

    /// The external real-time engine. Production wires the SDK-bridge engine
    /// here.
    pub engine: Rc<dyn RtcEngine>,

    /// Callback will be called as `callback(())` after every dispatch, and
    /// whenever the engine reports a participant change. Re-render here.
    pub on_state_changed: Callback<()>,

    /// Callback will be called as `callback(reason)` exactly once per failed
    /// join attempt. The UI decides how to surface it.
    pub on_error: Callback<String>,
}

/// The controller struct for one widget session.
///
/// To use it, construct the struct using [new(options)][Self::new], then feed
/// it [`SessionAction`]s via [dispatch()][Self::dispatch]. State transitions
/// happen in [`SessionState::apply`]; this struct only runs the returned
/// [`Effect`] against the token provider and the engine.
#[derive(Clone)]
pub struct SessionController {
    inner: Rc<RefCell<Inner>>,
    token_provider: Rc<dyn TokenProvider>,
    engine: Rc<dyn RtcEngine>,
    on_state_changed: Callback<()>,
    on_error: Callback<String>,
}

struct Inner {
    state: SessionState,
    tracks: LocalTracks,
}

impl PartialEq for SessionController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionController {
    pub fn new(options: SessionControllerOptions) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: SessionState::new(),
                tracks: LocalTracks::new(),
            })),
            token_provider: options.token_provider,
            engine: options.engine,
            on_state_changed: options.on_state_changed,
            on_error: options.on_error,
        }
    }

    /// Apply one action and run whatever effect falls out of it.
    pub fn dispatch(&self, action: SessionAction) {
        let effect = self.inner.borrow_mut().state.apply(action);
        self.run_effect(effect);
        self.on_state_changed.emit(());
    }

    /// A snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.inner.borrow().state.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.borrow().state.phase
    }

    /// The engine-reported remote participants, sorted by uid.
    pub fn remote_participants(&self) -> Vec<RemoteParticipant> {
        self.engine.remote_participants()
    }

    pub fn is_connected(&self) -> bool {
        self.engine.is_connected()
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchToken => self.fetch_token(),
            Effect::Connect => self.connect(),
            Effect::PublishTracks => self.sync_tracks(true),
            Effect::SyncTracks => self.sync_tracks(false),
            Effect::Disconnect => self.engine.disconnect(),
        }
    }

    fn fetch_token(&self) {
        let request = {
            let inner = self.inner.borrow();
            TokenRequest {
                channel: inner.state.config.channel.clone(),
                uid: inner.state.config.uid,
                role: inner.state.config.role,
            }
        };
        let controller = self.clone();
        self.token_provider.request_token(
            request,
            Callback::from(move |result: Result<String, crate::TokenError>| {
                if controller.phase() != SessionPhase::FetchingToken {
                    debug!("dropping token result for an abandoned join");
                    return;
                }
                match result {
                    Ok(token) => controller.dispatch(SessionAction::TokenFetched(token)),
                    Err(e) => {
                        let reason = e.to_string();
                        error!("token fetch failed, aborting join: {reason}");
                        controller.dispatch(SessionAction::TokenFetchFailed(reason.clone()));
                        controller.on_error.emit(reason);
                    }
                }
            }),
        );
    }

    fn connect(&self) {
        let options = {
            let inner = self.inner.borrow();
            let config = &inner.state.config;
            EngineConnectOptions {
                app_id: config.app_id.clone(),
                channel: config.channel.clone(),
                token: config.token.clone(),
                uid: config.uid,
                on_connected: {
                    let controller = self.clone();
                    Callback::from(move |_| controller.dispatch(SessionAction::EngineConnected))
                },
                on_connection_lost: {
                    let controller = self.clone();
                    Callback::from(move |reason: String| {
                        error!("connection lost: {reason}");
                        controller.dispatch(SessionAction::ConnectionLost(reason));
                    })
                },
                on_participants_changed: {
                    let on_state_changed = self.on_state_changed.clone();
                    Callback::from(move |_| on_state_changed.emit(()))
                },
            }
        };
        if let Err(e) = self.engine.connect(options) {
            let reason = e.to_string();
            error!("engine connect failed: {reason}");
            self.dispatch(SessionAction::ConnectionLost(reason));
        }
    }

    /// Mirror the state's track flags into the engine. `force` pushes both
    /// flags regardless (right after connect); otherwise only changes go out.
    fn sync_tracks(&self, force: bool) {
        let (mic, camera, tracks) = {
            let inner = self.inner.borrow();
            (
                inner.state.mic_enabled,
                inner.state.camera_enabled,
                inner.tracks.clone(),
            )
        };
        if tracks.microphone.set_enabled(mic) || force {
            self.engine.set_microphone_enabled(mic);
        }
        if tracks.camera.set_enabled(camera) || force {
            self.engine.set_camera_enabled(camera);
        }
    }
}
