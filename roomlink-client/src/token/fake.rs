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

//! Scriptable in-memory [`TokenProvider`] used by the unit tests.

use super::{TokenError, TokenProvider, TokenRequest};
use roomlink_types::Callback;
use std::cell::RefCell;
use std::rc::Rc;

enum Script {
    Succeed(String),
    Fail(String),
    /// Hold the callback so the test can resolve it later (in-flight fetch).
    Defer,
}

#[derive(Default)]
struct FakeTokenProviderInner {
    script: Option<Script>,
    requests: Vec<TokenRequest>,
    pending: Vec<Callback<Result<String, TokenError>>>,
}

/// A fake provider that answers synchronously (or not at all, when deferred).
#[derive(Clone, Default)]
pub struct FakeTokenProvider {
    inner: Rc<RefCell<FakeTokenProviderInner>>,
}

impl FakeTokenProvider {
    pub fn succeed_with(token: &str) -> Self {
        let provider = Self::default();
        provider.inner.borrow_mut().script = Some(Script::Succeed(token.to_string()));
        provider
    }

    pub fn fail_with(reason: &str) -> Self {
        let provider = Self::default();
        provider.inner.borrow_mut().script = Some(Script::Fail(reason.to_string()));
        provider
    }

    /// Requests are parked until [`resolve_pending`](Self::resolve_pending).
    pub fn deferred() -> Self {
        let provider = Self::default();
        provider.inner.borrow_mut().script = Some(Script::Defer);
        provider
    }

    /// Complete every parked request with the given token.
    pub fn resolve_pending(&self, token: &str) {
        let pending = std::mem::take(&mut self.inner.borrow_mut().pending);
        for callback in pending {
            callback.emit(Ok(token.to_string()));
        }
    }

    pub fn requests(&self) -> Vec<TokenRequest> {
        self.inner.borrow().requests.clone()
    }
}

impl TokenProvider for FakeTokenProvider {
    fn request_token(
        &self,
        request: TokenRequest,
        on_result: Callback<Result<String, TokenError>>,
    ) {
        let action = {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(request);
            match &inner.script {
                Some(Script::Succeed(token)) => Some(Ok(token.clone())),
                Some(Script::Fail(reason)) => Some(Err(TokenError::Config(reason.clone()))),
                Some(Script::Defer) => {
                    inner.pending.push(on_result.clone());
                    None
                }
                None => Some(Err(TokenError::Config("unscripted request".to_string()))),
            }
        };
        if let Some(result) = action {
            on_result.emit(result);
        }
    }
}
