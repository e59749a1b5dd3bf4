use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use common::MemberPrincipal;

use crate::config::ConfigError;
use crate::error::ApiError;

/// Bearer tokens and the members they identify.
#[derive(Debug, Default, Clone)]
pub struct MemberDirectory {
    members: HashMap<String, MemberPrincipal>,
}

impl MemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `token=member_id:username` entries separated by commas.
    pub fn parse(entries: &str) -> Result<Self, ConfigError> {
        let mut directory = Self::new();

        for entry in entries.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (token, member) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::MemberTokens(format!("missing '=' in entry '{}'", entry)))?;
            let (id, username) = member
                .split_once(':')
                .ok_or_else(|| ConfigError::MemberTokens(format!("missing ':' in entry '{}'", entry)))?;
            let member_id = id
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::MemberTokens(format!("invalid member id '{}'", id)))?;

            let token = token.trim();
            let username = username.trim();
            if token.is_empty() || username.is_empty() {
                return Err(ConfigError::MemberTokens(format!("empty token or username in entry '{}'", entry)));
            }

            directory.insert(
                token,
                MemberPrincipal {
                    member_id,
                    username: username.to_string(),
                },
            );
        }

        Ok(directory)
    }

    pub fn insert(&mut self, token: impl Into<String>, member: MemberPrincipal) {
        self.members.insert(token.into(), member);
    }

    pub fn resolve(&self, token: &str) -> Option<MemberPrincipal> {
        self.members.get(token).cloned()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Token of a `Bearer` credential. The scheme name is case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.trim()).filter(|t| !t.is_empty())
}

/// The authenticated caller. Rejects the request with 401 before the handler
/// runs when no known bearer token is presented.
#[derive(Debug, Clone)]
pub struct CurrentMember(pub MemberPrincipal);

impl<S> FromRequestParts<S> for CurrentMember
where
    Arc<MemberDirectory>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| ApiError::Unauthenticated("missing Authorization header".to_string()))?;
        let value = header
            .to_str()
            .map_err(|_| ApiError::Unauthenticated("malformed Authorization header".to_string()))?;
        let token = bearer_token(value)
            .ok_or_else(|| ApiError::Unauthenticated("expected a bearer token".to_string()))?;

        let directory = Arc::<MemberDirectory>::from_ref(state);
        directory
            .resolve(token)
            .map(CurrentMember)
            .ok_or_else(|| ApiError::Unauthenticated("unknown token".to_string()))
    }
}
