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
 */

//! The pre-call form: connection configuration plus the join button.

use roomlink_types::ParticipantRole;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JoinFormProps {
    pub app_id: String,
    pub channel: String,
    pub uid: u32,
    pub role: ParticipantRole,
    /// True while a join attempt is in flight; the button is disabled so the
    /// user cannot stack a second attempt on top.
    #[prop_or_default]
    pub busy: bool,
    pub on_app_id_change: Callback<String>,
    pub on_channel_change: Callback<String>,
    pub on_uid_change: Callback<u32>,
    pub on_role_change: Callback<ParticipantRole>,
    pub on_join: Callback<MouseEvent>,
}

#[function_component(JoinForm)]
pub fn join_form(props: &JoinFormProps) -> Html {
    let on_app_id_input = props
        .on_app_id_change
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_channel_input = props
        .on_channel_change
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    // A non-numeric uid falls back to 0, the same default the widget starts with.
    let on_uid_input = props.on_uid_change.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>()
            .value()
            .parse()
            .unwrap_or(0)
    });
    let on_role_change = props.on_role_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>()
            .value()
            .parse()
            .unwrap_or_default()
    });

    let join_disabled = props.busy || props.app_id.is_empty() || props.channel.is_empty();

    html! {
        <div class="join-form">
            <input
                id="app-id-input"
                placeholder="<Your app ID>"
                value={props.app_id.clone()}
                oninput={on_app_id_input}
            />
            <input
                id="channel-input"
                placeholder="Channel name"
                value={props.channel.clone()}
                oninput={on_channel_input}
            />
            <input
                id="uid-input"
                type="number"
                placeholder="UID"
                value={props.uid.to_string()}
                oninput={on_uid_input}
            />
            <select id="role-select" onchange={on_role_change}>
                <option value="publisher" selected={props.role == ParticipantRole::Publisher}>
                    {"Publisher"}
                </option>
                <option value="subscriber" selected={props.role == ParticipantRole::Subscriber}>
                    {"Subscriber"}
                </option>
            </select>
            <button id="join-button" disabled={join_disabled} onclick={props.on_join.clone()}>
                { if props.busy { "Joining..." } else { "Join Channel" } }
            </button>
        </div>
    }
}
