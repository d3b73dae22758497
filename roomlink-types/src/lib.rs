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

pub mod callback;

pub use callback::Callback;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role a participant requests when asking the token service for a
/// credential. The wire strings (`"publisher"` / `"subscriber"`) are what the
/// token endpoint expects in its `role` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Publisher,
    Subscriber,
}

impl Default for ParticipantRole {
    fn default() -> Self {
        ParticipantRole::Publisher
    }
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParticipantRole::Publisher => write!(f, "publisher"),
            ParticipantRole::Subscriber => write!(f, "subscriber"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown participant role: {0}")]
pub struct ParseRoleError(String);

impl FromStr for ParticipantRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publisher" => Ok(ParticipantRole::Publisher),
            "subscriber" => Ok(ParticipantRole::Subscriber),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Opaque handle for a remote participant as reported by the real-time
/// engine. The engine owns everything about the participant; the only thing
/// the UI may rely on is the uid, which is unique within a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RemoteParticipant {
    pub uid: u32,
}

impl RemoteParticipant {
    pub fn new(uid: u32) -> Self {
        Self { uid }
    }
}

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_strings_round_trip() {
        for role in [ParticipantRole::Publisher, ParticipantRole::Subscriber] {
            let parsed: ParticipantRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("host".parse::<ParticipantRole>().is_err());
        assert!("Publisher".parse::<ParticipantRole>().is_err());
    }

    #[test]
    fn role_serializes_to_lowercase() {
        let json = serde_json::to_string(&ParticipantRole::Subscriber).unwrap();
        assert_eq!(json, "\"subscriber\"");
    }

    #[test]
    fn truthy_accepts_true_and_one() {
        assert!(truthy(Some("true")));
        assert!(truthy(Some("TRUE")));
        assert!(truthy(Some("1")));
        assert!(!truthy(Some("0")));
        assert!(!truthy(None));
    }
}
