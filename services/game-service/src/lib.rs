pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
pub mod types;
pub mod validation;

use std::sync::Arc;

use axum::extract::FromRef;

pub use auth::{CurrentMember, MemberDirectory};
pub use config::{Config, ConfigError};
pub use db::GameStore;
pub use error::{ApiError, ApiResult};
pub use routes::create_routes;
pub use service::{GameService, GameServiceImpl};

/// Shared handler state: the game service and the token directory.
pub struct AppState<G> {
    pub games: Arc<G>,
    pub members: Arc<MemberDirectory>,
}

impl<G> AppState<G> {
    pub fn new(games: G, members: MemberDirectory) -> Self {
        AppState {
            games: Arc::new(games),
            members: Arc::new(members),
        }
    }
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        AppState {
            games: Arc::clone(&self.games),
            members: Arc::clone(&self.members),
        }
    }
}

impl<G> FromRef<AppState<G>> for Arc<MemberDirectory> {
    fn from_ref(state: &AppState<G>) -> Self {
        Arc::clone(&state.members)
    }
}
