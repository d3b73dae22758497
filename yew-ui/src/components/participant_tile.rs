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

//! Participant tiles. Each tile owns a `<video>` element whose DOM id is the
//! rendering contract with the engine: `local-video` for the local preview,
//! `remote-video-{uid}` for each remote participant.

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct LocalTileProps {
    pub camera_enabled: bool,
    pub mic_enabled: bool,
}

#[function_component(LocalTile)]
pub fn local_tile(props: &LocalTileProps) -> Html {
    let class = classes!(
        "tile",
        "local",
        (!props.camera_enabled).then_some("camera-off"),
        (!props.mic_enabled).then_some("muted"),
    );
    html! {
        <div {class}>
            <video id="local-video" autoplay=true muted=true></video>
            <h4 class="floating-name">{"You"}</h4>
        </div>
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct RemoteTileProps {
    pub uid: u32,
}

#[function_component(RemoteTile)]
pub fn remote_tile(props: &RemoteTileProps) -> Html {
    html! {
        <div class="tile remote">
            <video id={format!("remote-video-{}", props.uid)} autoplay=true></video>
            <h4 class="floating-name">{props.uid}</h4>
        </div>
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct ParticipantGridProps {
    pub remote_uids: Vec<u32>,
    pub camera_enabled: bool,
    pub mic_enabled: bool,
}

/// The in-call grid: the local tile first, then one tile per remote
/// participant, keyed by uid.
#[function_component(ParticipantGrid)]
pub fn participant_grid(props: &ParticipantGridProps) -> Html {
    html! {
        <div class="participant-grid">
            <LocalTile camera_enabled={props.camera_enabled} mic_enabled={props.mic_enabled}/>
            {
                props.remote_uids.iter().map(|uid| html! {
                    <RemoteTile key={uid.to_string()} uid={*uid}/>
                }).collect::<Html>()
            }
        </div>
    }
}
