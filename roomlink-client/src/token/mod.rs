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

//! Client for the hosted token-issuing service.
//!
//! The service mints short-lived room credentials:
//! `GET {base}/generateToken?channelName=<channel>&uid=<uid>&role=<role>` with
//! a JSON response of `{ "token": "..." }`. Validity and expiry of the token
//! are entirely the service's and the engine's business; this client only
//! fetches it. No retry is attempted on failure.

pub mod error;

#[cfg(any(test, feature = "testing"))]
mod fake;
#[cfg(any(test, feature = "testing"))]
pub use fake::FakeTokenProvider;

pub use error::TokenError;

use crate::platform;
use log::{error, info};
use roomlink_types::{Callback, ParticipantRole};
use serde::Deserialize;

/// Parameters for one token request, taken from the session configuration at
/// the moment the user asks to join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub channel: String,
    pub uid: u32,
    pub role: ParticipantRole,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct TokenResponse {
    token: String,
}

/// A typed REST client for the token service.
#[derive(Debug, Clone)]
pub struct TokenClient {
    base_url: String,
    http: reqwest::Client,
}

impl TokenClient {
    /// Create a new client pointing at the token service base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"https://tokens.example.com"`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch a credential for the given channel/uid/role.
    pub async fn generate_token(&self, request: &TokenRequest) -> Result<String, TokenError> {
        let url = format!("{}/generateToken", self.base_url);
        info!(
            "requesting token: {} (channel: {}, uid: {}, role: {})",
            url, request.channel, request.uid, request.role
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("channelName", request.channel.clone()),
                ("uid", request.uid.to_string()),
                ("role", request.role.to_string()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        parse_token_response(status, &body)
    }
}

/// Map a token service response to the credential string. Non-2xx and
/// malformed bodies are both failures (spec for the service gives no richer
/// taxonomy).
fn parse_token_response(status: u16, body: &str) -> Result<String, TokenError> {
    match status {
        200..=299 => {
            let data: TokenResponse = serde_json::from_str(body)
                .map_err(|e| TokenError::Malformed(format!("{e}")))?;
            info!("token fetched for this session");
            Ok(data.token)
        }
        _ => Err(TokenError::ServerError {
            status,
            body: body.to_string(),
        }),
    }
}

/// Seam between the session controller and the token service, so the
/// controller can be driven by a fake in tests. The result callback fires at
/// most once per request.
pub trait TokenProvider {
    fn request_token(&self, request: TokenRequest, on_result: Callback<Result<String, TokenError>>);
}

/// Production [`TokenProvider`]: spawns the HTTP fetch and reports back
/// through the callback on the UI task queue.
#[derive(Debug, Clone)]
pub struct HttpTokenProvider {
    client: TokenClient,
}

impl HttpTokenProvider {
    pub fn new(client: TokenClient) -> Self {
        Self { client }
    }
}

impl TokenProvider for HttpTokenProvider {
    fn request_token(
        &self,
        request: TokenRequest,
        on_result: Callback<Result<String, TokenError>>,
    ) {
        let client = self.client.clone();
        platform::spawn(async move {
            let result = client.generate_token(&request).await;
            if let Err(e) = &result {
                error!("token fetch failed: {e}");
            }
            on_result.emit(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_yields_token() {
        let token = parse_token_response(200, r#"{"token":"abc"}"#).unwrap();
        assert_eq!(token, "abc");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let token =
            parse_token_response(200, r#"{"token":"abc","expiresIn":3600}"#).unwrap();
        assert_eq!(token, "abc");
    }

    #[test]
    fn malformed_body_is_a_failure() {
        let err = parse_token_response(200, r#"{"credential":"abc"}"#).unwrap_err();
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn non_2xx_is_a_failure_with_status() {
        let err = parse_token_response(503, "upstream down").unwrap_err();
        match err {
            TokenError::ServerError { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = TokenClient::new("https://tokens.example.com/");
        assert_eq!(client.base_url, "https://tokens.example.com");
    }
}
