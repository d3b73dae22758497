// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the participant grid: N remote participants render as
// N+1 tiles (the local tile plus one per remote), each with a unique video
// element id.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use roomlink_ui::components::participant_tile::ParticipantGrid;

mod support;
use support::{cleanup, create_mount_point};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn render_grid(remote_uids: &'static [u32]) -> web_sys::Element {
    #[derive(Properties, PartialEq)]
    struct WrapperProps {
        remote_uids: &'static [u32],
    }

    #[function_component(Wrapper)]
    fn wrapper(props: &WrapperProps) -> Html {
        html! {
            <ParticipantGrid
                remote_uids={props.remote_uids.to_vec()}
                camera_enabled={true}
                mic_enabled={true}
            />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        WrapperProps { remote_uids },
    )
    .render();
    mount
}

#[wasm_bindgen_test]
async fn alone_in_the_room_shows_only_the_local_tile() {
    let mount = render_grid(&[]);
    sleep(Duration::ZERO).await;

    let tiles = mount.query_selector_all(".tile").unwrap();
    assert_eq!(tiles.length(), 1);
    assert!(mount.query_selector("#local-video").unwrap().is_some());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn three_remotes_make_four_tiles() {
    let mount = render_grid(&[3, 7, 42]);
    sleep(Duration::ZERO).await;

    let tiles = mount.query_selector_all(".tile").unwrap();
    assert_eq!(tiles.length(), 4);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn each_remote_tile_has_a_unique_video_id() {
    let mount = render_grid(&[3, 7, 42]);
    sleep(Duration::ZERO).await;

    for uid in [3, 7, 42] {
        let selector = format!("#remote-video-{uid}");
        assert!(
            mount.query_selector(&selector).unwrap().is_some(),
            "missing video element for uid {uid}"
        );
    }

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn local_tile_reflects_disabled_camera() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <ParticipantGrid remote_uids={Vec::<u32>::new()} camera_enabled={false} mic_enabled={false}/>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let local = mount.query_selector(".tile.local").unwrap().unwrap();
    let classes = local.class_list();
    assert!(classes.contains("camera-off"));
    assert!(classes.contains("muted"));

    cleanup(&mount);
}
