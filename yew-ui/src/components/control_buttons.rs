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

//! Reusable call control button components with SVG icons.

use yew::prelude::*;

// =============================================================================
// Microphone Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct MicButtonProps {
    pub enabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(MicButton)]
pub fn mic_button(props: &MicButtonProps) -> Html {
    let class = classes!("call-control-button", props.enabled.then_some("active"));

    html! {
        <button {class} onclick={props.onclick.clone()}>
            {
                if props.enabled {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3z"></path>
                                <path d="M19 10v2a7 7 0 0 1-14 0v-2"></path>
                                <line x1="12" y1="19" x2="12" y2="22"></line>
                            </svg>
                            <span class="tooltip">{"Mute"}</span>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <line x1="1" y1="1" x2="23" y2="23"></line>
                                <path d="M9 9v3a3 3 0 0 0 5.12 2.12M15 9.34V5a3 3 0 0 0-5.94-.6"></path>
                                <path d="M17 16.95A7 7 0 0 1 5 12v-2m14 0v2a7 7 0 0 1-.11 1.23"></path>
                                <line x1="12" y1="19" x2="12" y2="22"></line>
                            </svg>
                            <span class="tooltip">{"Unmute"}</span>
                        </>
                    }
                }
            }
        </button>
    }
}

// =============================================================================
// Camera Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct CameraButtonProps {
    pub enabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CameraButton)]
pub fn camera_button(props: &CameraButtonProps) -> Html {
    let class = classes!("call-control-button", props.enabled.then_some("active"));

    html! {
        <button {class} onclick={props.onclick.clone()}>
            {
                if props.enabled {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <polygon points="23 7 16 12 23 17 23 7"></polygon>
                                <rect x="1" y="5" width="15" height="14" rx="2" ry="2"></rect>
                            </svg>
                            <span class="tooltip">{"Stop Video"}</span>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M16 16v1a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2m5.66 0H14a2 2 0 0 1 2 2v3.34l1 1L23 7v10"></path>
                                <line x1="1" y1="1" x2="23" y2="23"></line>
                            </svg>
                            <span class="tooltip">{"Start Video"}</span>
                        </>
                    }
                }
            }
        </button>
    }
}

// =============================================================================
// Hang Up Button
// =============================================================================

#[derive(Properties, PartialEq)]
pub struct HangUpButtonProps {
    pub onclick: Callback<MouseEvent>,
}

#[function_component(HangUpButton)]
pub fn hang_up_button(props: &HangUpButtonProps) -> Html {
    html! {
        <button class="call-control-button hang-up" onclick={props.onclick.clone()}>
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M10.68 13.31a16 16 0 0 0 3.41 2.6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.42 19.42 0 0 1-3.33-2.67m-2.67-3.34a19.79 19.79 0 0 1-3.07-8.63A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91"></path>
                <line x1="23" y1="1" x2="1" y2="23"></line>
            </svg>
            <span class="tooltip">{"Leave"}</span>
        </button>
    }
}
