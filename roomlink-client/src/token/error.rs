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

//! Error types for the token service client.

use thiserror::Error;

/// Errors returned by [`TokenClient`](crate::TokenClient) methods.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The service answered with a non-2xx status.
    #[error("Token server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A 2xx answer whose body was not the expected `{ "token": ... }` shape.
    #[error("Malformed token response: {0}")]
    Malformed(String),

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A configuration error (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}
