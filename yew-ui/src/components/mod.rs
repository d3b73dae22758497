// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod call_widget;
pub mod control_buttons;
pub mod join_form;
pub mod participant_tile;
