//! This crate provides the session logic for the roomlink browser widget: join a
//! named room, publish the local camera/microphone, and track the remote
//! participants reported by the external real-time engine. All media transport
//! is delegated to that engine; credential minting is delegated to a hosted
//! token service. What lives here is the state machine and the API glue.
//!
//! This crate intends to make no assumptions about the UI or the HTML of the
//! client app. The engine and the token service sit behind the [`RtcEngine`]
//! and [`TokenProvider`] traits, so the whole session flow can be driven in
//! plain unit tests with the fakes behind the `testing` feature.
//!
//! # Outline of usage
//!
//! ## Controller creation:
//! ```text
//! let controller = SessionController::new(SessionControllerOptions {
//!     token_provider,           // Rc<dyn TokenProvider>
//!     engine,                   // Rc<dyn RtcEngine>
//!     on_state_changed: ...,    // callback, re-render here
//!     on_error: ...,            // callback, surfaced once per failed join
//! });
//! ```
//!
//! ## Driving it:
//! ```text
//! controller.dispatch(SessionAction::SetChannel("admin".to_string()));
//! controller.dispatch(SessionAction::JoinRequested);
//! controller.dispatch(SessionAction::ToggleMicrophone);
//! controller.dispatch(SessionAction::HangUp);
//! ```
//!
//! The reducer itself ([`SessionState::apply`]) is a pure function; the
//! controller only runs the [`Effect`] the reducer hands back.

mod engine;
mod platform;
mod session;
mod token;
mod tracks;

#[cfg(test)]
mod tests;

pub use engine::{EngineConnectOptions, EngineError, RtcEngine};
pub use roomlink_types::{Callback, ParticipantRole, RemoteParticipant};
pub use session::{
    Effect, SessionAction, SessionConfig, SessionController, SessionControllerOptions,
    SessionPhase, SessionState,
};
pub use token::{HttpTokenProvider, TokenClient, TokenError, TokenProvider, TokenRequest};
pub use tracks::{LocalTracks, TrackState};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use engine::SdkEngine;

#[cfg(any(test, feature = "testing"))]
pub use engine::FakeEngine;
#[cfg(any(test, feature = "testing"))]
pub use token::FakeTokenProvider;
