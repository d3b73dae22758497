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

// Defines the trait giving a consistent interface to the external real-time
// engine, at the level of the capability surface this widget consumes:
// connect-with-credentials, enumerate remote participants, and gate the local
// tracks by a boolean flag.
//
// Implemented for the vendor SDK bridge (sdk.rs) and for tests (fake.rs).
//
// Render targets are DOM ids: the engine draws the local preview into
// `local-video` and each remote participant into `remote-video-<uid>`.
//

use roomlink_types::{Callback, RemoteParticipant};
use thiserror::Error;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod sdk;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use sdk::SdkEngine;

#[cfg(any(test, feature = "testing"))]
mod fake;
#[cfg(any(test, feature = "testing"))]
pub use fake::FakeEngine;

/// Errors reported by the engine boundary. Anything the engine does after a
/// successful `connect` call is its own responsibility and is not mapped here.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine bridge is not reachable (e.g. the page never loaded the SDK).
    #[error("real-time engine is not available: {0}")]
    NotAvailable(String),

    /// An engine call was rejected by the SDK.
    #[error("engine call failed: {0}")]
    Sdk(String),
}

/// Options struct for [`RtcEngine::connect`].
///
/// The callbacks are how engine events flow back into the session state
/// machine; the engine never mutates widget state directly.
#[derive(Clone, Debug)]
pub struct EngineConnectOptions {
    /// Application identifier issued by the engine vendor.
    pub app_id: String,

    /// The room to join.
    pub channel: String,

    /// Access token minted by the token service. `None` joins without a
    /// credential; whether that is accepted is the engine's call.
    pub token: Option<String>,

    /// This client's numeric participant identifier.
    pub uid: u32,

    /// Callback will be called as `callback(())` once the session is established.
    pub on_connected: Callback<()>,

    /// Callback will be called as `callback(reason)` if the session drops.
    pub on_connection_lost: Callback<String>,

    /// Callback will be called as `callback(())` whenever the remote
    /// participant list changes.
    pub on_participants_changed: Callback<()>,
}

pub trait RtcEngine {
    /// Establish a session with the given credentials. Local tracks are
    /// published by the engine while their enable flags are on.
    fn connect(&self, options: EngineConnectOptions) -> Result<(), EngineError>;

    /// Tear down the current session, if any.
    fn disconnect(&self);

    fn is_connected(&self) -> bool;

    /// The remote participants the engine currently reports, sorted by uid.
    fn remote_participants(&self) -> Vec<RemoteParticipant>;

    /// Request that the engine mute/unmute the local microphone track. There
    /// is no acknowledgment; the engine owns the device.
    fn set_microphone_enabled(&self, enabled: bool);

    /// Request that the engine enable/disable the local camera track.
    fn set_camera_enabled(&self, enabled: bool);
}
