// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for roomlink-ui component tests.
//
// Provides mount/cleanup helpers plus injection of the runtime config and a
// fake SDK bridge, so individual test files stay focused on assertions.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsValue;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Runtime config injection (integration tests)
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object with all required `RuntimeConfig`
/// fields. Call this before rendering any component that reads the runtime
/// config (e.g. `CallWidget`).
pub fn inject_app_config(default_app_id: &str, default_channel: &str) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("tokenApiBaseUrl", &"http://test:8080".into());
    set("defaultAppId", &default_app_id.into());
    set("defaultChannel", &default_channel.into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

// ---------------------------------------------------------------------------
// Fake SDK bridge
// ---------------------------------------------------------------------------

/// Install a minimal `window.__RTC_BRIDGE` so the widget can construct its
/// engine. Joins succeed immediately and the remote participant list stays
/// empty.
pub fn inject_fake_bridge() {
    js_sys::eval(
        r#"
        window.__RTC_BRIDGE = {
            connected: false,
            join: function(opts) {
                this.connected = true;
                if (opts.onConnected) { opts.onConnected(); }
            },
            leave: function() { this.connected = false; },
            isConnected: function() { return this.connected; },
            remoteParticipants: function() { return []; },
            setMicrophoneEnabled: function(enabled) {},
            setCameraEnabled: function(enabled) {}
        };
        "#,
    )
    .unwrap();
}
