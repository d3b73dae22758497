// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the full widget with the runtime config and a fake
// SDK bridge installed on the page.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use roomlink_ui::components::call_widget::CallWidget;

mod support;
use support::{cleanup, create_mount_point, inject_app_config, inject_fake_bridge};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn render_widget() -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<CallWidget>::with_root(mount.clone()).render();
    mount
}

#[wasm_bindgen_test]
async fn widget_starts_on_the_join_form() {
    inject_app_config("", "");
    inject_fake_bridge();

    let mount = render_widget();
    sleep(Duration::ZERO).await;

    assert!(mount.query_selector(".join-form").unwrap().is_some());
    assert!(mount.query_selector(".config-error").unwrap().is_none());
    // No tiles before joining.
    assert!(mount.query_selector(".tile").unwrap().is_none());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn empty_defaults_leave_join_disabled() {
    inject_app_config("", "");
    inject_fake_bridge();

    let mount = render_widget();
    sleep(Duration::ZERO).await;

    let button = mount
        .query_selector("#join-button")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap();
    assert!(button.disabled());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn configured_defaults_enable_join() {
    inject_app_config("app-from-config", "admin");
    inject_fake_bridge();

    let mount = render_widget();
    sleep(Duration::ZERO).await;

    let app_id_input = mount
        .query_selector("#app-id-input")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    assert_eq!(app_id_input.value(), "app-from-config");

    let button = mount
        .query_selector("#join-button")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap();
    assert!(!button.disabled());

    cleanup(&mount);
}
