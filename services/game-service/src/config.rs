use std::env;
use std::net::SocketAddr;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug)]
pub enum ConfigError {
    InvalidAddr(String),
    InvalidOrigin(String),
    MemberTokens(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAddr(addr) => write!(f, "Invalid HTTP_ADDR: {}", addr),
            ConfigError::InvalidOrigin(origin) => write!(f, "Invalid CORS origin: {}", origin),
            ConfigError::MemberTokens(msg) => write!(f, "Invalid MEMBER_TOKENS: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub http_addr: SocketAddr,
    pub member_tokens: String,
    pub cors_allowed_origins: Vec<HeaderValue>,
}

impl Config {
    /// Reads `HTTP_ADDR`, `MEMBER_TOKENS` and `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("HTTP_ADDR").ok().as_deref(),
            env::var("MEMBER_TOKENS").ok().as_deref(),
            env::var("CORS_ALLOWED_ORIGINS").ok().as_deref(),
        )
    }

    pub fn from_vars(
        http_addr: Option<&str>,
        member_tokens: Option<&str>,
        cors_allowed_origins: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let addr = http_addr.unwrap_or(DEFAULT_HTTP_ADDR);
        let http_addr = addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(addr.to_string()))?;

        let cors_allowed_origins = cors_allowed_origins
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Config {
            http_addr,
            member_tokens: member_tokens.unwrap_or_default().to_string(),
            cors_allowed_origins,
        })
    }

    /// Permissive when no origins are configured.
    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_allowed_origins.is_empty() {
            return CorsLayer::permissive();
        }

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.cors_allowed_origins.clone()))
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
            .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
            .expose_headers([HeaderName::from_static("x-request-id")])
    }
}
