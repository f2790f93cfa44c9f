//! In-memory port implementations shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use gdap_portal_domain::{AuthError, ClientCredentials, InviteRequest, TokenGrant, UpstreamError};
use serde_json::Value;

use crate::ports::{Clock, ManagementApi, TokenEndpoint};

/// Clock pinned to a settable epoch-millisecond instant.
#[derive(Debug, Default)]
pub struct FixedClock {
    now_ms: AtomicI64,
}

impl FixedClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.now_ms.load(Ordering::SeqCst))
            .single()
            .unwrap_or_default()
    }
}

/// Token endpoint that replays scripted results and counts exchanges.
#[derive(Debug, Default)]
pub struct ScriptedTokenEndpoint {
    results: Mutex<VecDeque<Result<TokenGrant, AuthError>>>,
    calls: AtomicUsize,
}

impl ScriptedTokenEndpoint {
    pub fn granting(tokens: &[(&str, i64)]) -> Self {
        let results = tokens
            .iter()
            .map(|(token, expires_in)| {
                Ok(TokenGrant {
                    access_token: (*token).to_string(),
                    expires_in: *expires_in,
                })
            })
            .collect();
        Self {
            results: Mutex::new(results),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: AuthError) -> Self {
        Self {
            results: Mutex::new(VecDeque::from([Err(error)])),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenEndpoint for ScriptedTokenEndpoint {
    async fn exchange(&self, _credentials: &ClientCredentials) -> Result<TokenGrant, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .map_err(|e| AuthError::Network {
                message: e.to_string(),
            })?
            .pop_front()
            .unwrap_or_else(|| {
                Err(AuthError::Network {
                    message: "no scripted token left".to_string(),
                })
            })
    }
}

/// Management API returning a fixed result and recording what it was sent.
#[derive(Debug)]
pub struct StubManagementApi {
    result: Result<Value, UpstreamError>,
    seen_tokens: Mutex<Vec<String>>,
    seen_invites: Mutex<Vec<InviteRequest>>,
}

impl StubManagementApi {
    pub fn returning(result: Result<Value, UpstreamError>) -> Self {
        Self {
            result,
            seen_tokens: Mutex::new(Vec::new()),
            seen_invites: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn seen_invites(&self) -> Vec<InviteRequest> {
        self.seen_invites
            .lock()
            .map(|i| i.clone())
            .unwrap_or_default()
    }

    fn record_token(&self, token: &str) {
        if let Ok(mut tokens) = self.seen_tokens.lock() {
            tokens.push(token.to_string());
        }
    }
}

#[async_trait]
impl ManagementApi for StubManagementApi {
    async fn list_role_templates(&self, bearer_token: &str) -> Result<Value, UpstreamError> {
        self.record_token(bearer_token);
        self.result.clone()
    }

    async fn generate_invite(
        &self,
        bearer_token: &str,
        request: &InviteRequest,
    ) -> Result<Value, UpstreamError> {
        self.record_token(bearer_token);
        if let Ok(mut invites) = self.seen_invites.lock() {
            invites.push(request.clone());
        }
        self.result.clone()
    }
}
