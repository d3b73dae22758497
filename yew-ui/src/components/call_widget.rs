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

//! The top-level widget: join form while idle, participant grid plus call
//! controls once the user asks to join. All session logic lives in
//! [`SessionController`]; this component only translates DOM events into
//! actions and re-renders on state changes.

use crate::components::control_buttons::{CameraButton, HangUpButton, MicButton};
use crate::components::join_form::JoinForm;
use crate::components::participant_tile::ParticipantGrid;
use crate::constants;
use roomlink_client::Callback as ClientCallback;
use roomlink_client::{
    RtcEngine, SessionAction, SessionController, SessionControllerOptions, SessionPhase,
};
use roomlink_types::ParticipantRole;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug)]
pub enum ConfigAction {
    AppId(String),
    Channel(String),
    Uid(u32),
    Role(ParticipantRole),
}

#[derive(Debug)]
pub enum CallAction {
    Join,
    ToggleMicrophone,
    ToggleCamera,
    HangUp,
}

pub enum Msg {
    Config(ConfigAction),
    Call(CallAction),
    StateChanged,
    SessionError(String),
}

impl From<ConfigAction> for Msg {
    fn from(action: ConfigAction) -> Self {
        Msg::Config(action)
    }
}

impl From<CallAction> for Msg {
    fn from(action: CallAction) -> Self {
        Msg::Call(action)
    }
}

pub struct CallWidget {
    controller: Option<SessionController>,
    config_error: Option<String>,
}

impl Component for CallWidget {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        match Self::build_controller(ctx) {
            Ok(controller) => Self {
                controller: Some(controller),
                config_error: None,
            },
            Err(error) => {
                log::error!("widget configuration failed: {error}");
                Self {
                    controller: None,
                    config_error: Some(error),
                }
            }
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(controller) = &self.controller else {
            return false;
        };
        match msg {
            Msg::Config(action) => {
                controller.dispatch(match action {
                    ConfigAction::AppId(value) => SessionAction::SetAppId(value),
                    ConfigAction::Channel(value) => SessionAction::SetChannel(value),
                    ConfigAction::Uid(value) => SessionAction::SetUid(value),
                    ConfigAction::Role(value) => SessionAction::SetRole(value),
                });
                false
            }
            Msg::Call(action) => {
                controller.dispatch(match action {
                    CallAction::Join => SessionAction::JoinRequested,
                    CallAction::ToggleMicrophone => SessionAction::ToggleMicrophone,
                    CallAction::ToggleCamera => SessionAction::ToggleCamera,
                    CallAction::HangUp => SessionAction::HangUp,
                });
                false
            }
            // Dispatches report back through on_state_changed, so render once
            // here rather than per message above.
            Msg::StateChanged => true,
            Msg::SessionError(reason) => {
                log::error!("join failed: {reason}");
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Failed to fetch token. Check backend server.");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(controller) = &self.controller else {
            return html! {
                <div class="config-error">
                    <h3>{"Configuration error"}</h3>
                    <p>{ self.config_error.clone().unwrap_or_default() }</p>
                </div>
            };
        };
        let state = controller.state();

        if state.is_calling() {
            let remote_uids: Vec<u32> = controller
                .remote_participants()
                .iter()
                .map(|p| p.uid)
                .collect();
            html! {
                <div class="room">
                    <ParticipantGrid
                        remote_uids={remote_uids}
                        camera_enabled={state.camera_enabled}
                        mic_enabled={state.mic_enabled}
                    />
                    <nav class="call-controls">
                        <MicButton
                            enabled={state.mic_enabled}
                            onclick={ctx.link().callback(|_| Msg::from(CallAction::ToggleMicrophone))}
                        />
                        <CameraButton
                            enabled={state.camera_enabled}
                            onclick={ctx.link().callback(|_| Msg::from(CallAction::ToggleCamera))}
                        />
                        <HangUpButton
                            onclick={ctx.link().callback(|_| Msg::from(CallAction::HangUp))}
                        />
                        {
                            if controller.is_connected() {
                                html! { <h4 class="status">{"Connected"}</h4> }
                            } else {
                                html! { <h4 class="status">{"Connecting"}</h4> }
                            }
                        }
                    </nav>
                </div>
            }
        } else {
            html! {
                <div class="join-room">
                    { state.last_error.clone().map(|error| html! { <p class="error">{ error }</p> }) }
                    <JoinForm
                        app_id={state.config.app_id.clone()}
                        channel={state.config.channel.clone()}
                        uid={state.config.uid}
                        role={state.config.role}
                        busy={state.phase == SessionPhase::FetchingToken}
                        on_app_id_change={ctx.link().callback(|v| Msg::from(ConfigAction::AppId(v)))}
                        on_channel_change={ctx.link().callback(|v| Msg::from(ConfigAction::Channel(v)))}
                        on_uid_change={ctx.link().callback(|v| Msg::from(ConfigAction::Uid(v)))}
                        on_role_change={ctx.link().callback(|v| Msg::from(ConfigAction::Role(v)))}
                        on_join={ctx.link().callback(|_| Msg::from(CallAction::Join))}
                    />
                </div>
            }
        }
    }
}

impl CallWidget {
    fn build_controller(ctx: &Context<Self>) -> Result<SessionController, String> {
        let token_provider = constants::token_provider()?;
        let engine = Self::create_engine()?;

        let link = ctx.link().clone();
        let on_state_changed = ClientCallback::from(move |_| link.send_message(Msg::StateChanged));
        let link = ctx.link().clone();
        let on_error =
            ClientCallback::from(move |reason| link.send_message(Msg::SessionError(reason)));

        let controller = SessionController::new(SessionControllerOptions {
            token_provider: Rc::new(token_provider),
            engine,
            on_state_changed,
            on_error,
        });
        controller.dispatch(SessionAction::SetAppId(constants::default_app_id()));
        controller.dispatch(SessionAction::SetChannel(constants::default_channel()));
        Ok(controller)
    }

    #[cfg(target_arch = "wasm32")]
    fn create_engine() -> Result<Rc<dyn RtcEngine>, String> {
        roomlink_client::SdkEngine::from_window()
            .map(|engine| Rc::new(engine) as Rc<dyn RtcEngine>)
            .map_err(|e| e.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn create_engine() -> Result<Rc<dyn RtcEngine>, String> {
        Err("the real-time engine is only available in the browser".to_string())
    }
}
