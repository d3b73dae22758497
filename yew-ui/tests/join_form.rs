// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the join form: the join button must be disabled exactly
// when the app id or the channel is empty.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use roomlink_types::ParticipantRole;
use roomlink_ui::components::join_form::JoinForm;

mod support;
use support::{cleanup, create_mount_point};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn render_form(app_id: &'static str, channel: &'static str, busy: bool) -> web_sys::Element {
    #[derive(Properties, PartialEq)]
    struct WrapperProps {
        app_id: &'static str,
        channel: &'static str,
        busy: bool,
    }

    #[function_component(Wrapper)]
    fn wrapper(props: &WrapperProps) -> Html {
        html! {
            <JoinForm
                app_id={props.app_id.to_string()}
                channel={props.channel.to_string()}
                uid={0}
                role={ParticipantRole::Publisher}
                busy={props.busy}
                on_app_id_change={Callback::noop()}
                on_channel_change={Callback::noop()}
                on_uid_change={Callback::noop()}
                on_role_change={Callback::noop()}
                on_join={Callback::noop()}
            />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps {
            app_id,
            channel,
            busy,
        },
    )
    .render();
    mount
}

fn join_button(mount: &web_sys::Element) -> web_sys::HtmlButtonElement {
    mount
        .query_selector("#join-button")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlButtonElement>()
        .unwrap()
}

#[wasm_bindgen_test]
async fn join_disabled_when_app_id_empty() {
    let mount = render_form("", "admin", false);
    sleep(Duration::ZERO).await;

    assert!(join_button(&mount).disabled());
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn join_disabled_when_channel_empty() {
    let mount = render_form("app", "", false);
    sleep(Duration::ZERO).await;

    assert!(join_button(&mount).disabled());
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn join_enabled_when_fully_configured() {
    let mount = render_form("app", "admin", false);
    sleep(Duration::ZERO).await;

    let button = join_button(&mount);
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap(), "Join Channel");
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn join_disabled_while_busy() {
    let mount = render_form("app", "admin", true);
    sleep(Duration::ZERO).await;

    let button = join_button(&mount);
    assert!(button.disabled());
    assert_eq!(button.text_content().unwrap(), "Joining...");
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn role_selector_offers_both_roles() {
    let mount = render_form("app", "admin", false);
    sleep(Duration::ZERO).await;

    let options = mount.query_selector_all("#role-select option").unwrap();
    assert_eq!(options.length(), 2);
    cleanup(&mount);
}
