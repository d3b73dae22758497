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

//! [`RtcEngine`] implementation backed by the vendor SDK bridge.
//!
//! The page is expected to expose the SDK behind a plain object at
//! `window.__RTC_BRIDGE` with the methods `join`, `leave`, `isConnected`,
//! `remoteParticipants`, `setMicrophoneEnabled` and `setCameraEnabled`. The
//! bridge is opaque: everything past the method boundary (device handles,
//! transport, reconnection) belongs to the SDK.

use super::{EngineConnectOptions, EngineError, RtcEngine};
use js_sys::{Array, Function, Object, Reflect};
use log::{debug, error};
use roomlink_types::RemoteParticipant;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

const BRIDGE_GLOBAL: &str = "__RTC_BRIDGE";

pub struct SdkEngine {
    bridge: Object,
    // Event closures handed to the SDK stay alive for as long as the engine.
    closures: RefCell<Vec<Closure<dyn FnMut(JsValue)>>>,
}

impl SdkEngine {
    /// Looks up the SDK bridge on `window`. Fails if the page never loaded the
    /// vendor SDK.
    pub fn from_window() -> Result<Self, EngineError> {
        let window = web_sys::window()
            .ok_or_else(|| EngineError::NotAvailable("no global window".to_string()))?;
        let bridge = Reflect::get(&window, &JsValue::from_str(BRIDGE_GLOBAL))
            .map_err(|e| EngineError::NotAvailable(js_to_string(&e)))?;
        if bridge.is_undefined() || bridge.is_null() {
            return Err(EngineError::NotAvailable(format!(
                "window.{BRIDGE_GLOBAL} missing"
            )));
        }
        let bridge: Object = bridge
            .dyn_into()
            .map_err(|_| EngineError::NotAvailable(format!("window.{BRIDGE_GLOBAL} is not an object")))?;
        Ok(Self {
            bridge,
            closures: RefCell::new(Vec::new()),
        })
    }

    fn method(&self, name: &str) -> Result<Function, EngineError> {
        Reflect::get(&self.bridge, &JsValue::from_str(name))
            .map_err(|e| EngineError::Sdk(js_to_string(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| EngineError::Sdk(format!("bridge has no function {name}")))
    }

    fn call0(&self, name: &str) -> Result<JsValue, EngineError> {
        self.method(name)?
            .call0(&self.bridge)
            .map_err(|e| EngineError::Sdk(js_to_string(&e)))
    }

    fn call1(&self, name: &str, arg: &JsValue) -> Result<JsValue, EngineError> {
        self.method(name)?
            .call1(&self.bridge, arg)
            .map_err(|e| EngineError::Sdk(js_to_string(&e)))
    }

    /// Wrap a `Callback<IN>` in a JS closure and keep the closure alive.
    fn event_handler<F: FnMut(JsValue) + 'static>(&self, handler: F) -> JsValue {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
        let js = closure.as_ref().clone();
        self.closures.borrow_mut().push(closure);
        js
    }
}

impl RtcEngine for SdkEngine {
    fn connect(&self, options: EngineConnectOptions) -> Result<(), EngineError> {
        let js_options = Object::new();
        let set = |key: &str, value: &JsValue| {
            Reflect::set(&js_options, &JsValue::from_str(key), value)
                .map(|_| ())
                .map_err(|e| EngineError::Sdk(js_to_string(&e)))
        };
        set("appId", &JsValue::from_str(&options.app_id))?;
        set("channel", &JsValue::from_str(&options.channel))?;
        match &options.token {
            Some(token) => set("token", &JsValue::from_str(token))?,
            None => set("token", &JsValue::NULL)?,
        }
        set("uid", &JsValue::from_f64(options.uid as f64))?;

        let on_connected = options.on_connected;
        set(
            "onConnected",
            &self.event_handler(move |_| on_connected.emit(())),
        )?;
        let on_connection_lost = options.on_connection_lost;
        set(
            "onConnectionLost",
            &self.event_handler(move |reason| on_connection_lost.emit(js_to_string(&reason))),
        )?;
        let on_participants_changed = options.on_participants_changed;
        set(
            "onParticipantsChanged",
            &self.event_handler(move |_| on_participants_changed.emit(())),
        )?;

        debug!(
            "joining channel {} as uid {} via SDK bridge",
            options.channel, options.uid
        );
        self.call1("join", &js_options)?;
        Ok(())
    }

    fn disconnect(&self) {
        if let Err(e) = self.call0("leave") {
            error!("error leaving channel: {e}");
        }
    }

    fn is_connected(&self) -> bool {
        match self.call0("isConnected") {
            Ok(value) => value.as_bool().unwrap_or(false),
            Err(e) => {
                error!("error querying connection state: {e}");
                false
            }
        }
    }

    fn remote_participants(&self) -> Vec<RemoteParticipant> {
        let uids = match self.call0("remoteParticipants") {
            Ok(value) => value,
            Err(e) => {
                error!("error listing remote participants: {e}");
                return Vec::new();
            }
        };
        let mut participants: Vec<RemoteParticipant> = Array::from(&uids)
            .iter()
            .filter_map(|entry| entry.as_f64())
            .map(|uid| RemoteParticipant::new(uid as u32))
            .collect();
        participants.sort();
        participants
    }

    fn set_microphone_enabled(&self, enabled: bool) {
        if let Err(e) = self.call1("setMicrophoneEnabled", &JsValue::from_bool(enabled)) {
            error!("error toggling microphone: {e}");
        }
    }

    fn set_camera_enabled(&self, enabled: bool) {
        if let Err(e) = self.call1("setCameraEnabled", &JsValue::from_bool(enabled)) {
            error!("error toggling camera: {e}");
        }
    }
}

fn js_to_string(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
