use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use common::ServiceError;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::handlers::{create_game_http, get_game_http, modify_game_http};
use crate::middleware::request_id;
use crate::service::GameService;
use crate::AppState;

/// The route table:
///
/// - `POST /api/games` creates a game (201)
/// - `PATCH /api/games/{game_id}` modifies a game (200)
/// - `GET /api/games/{game_id}` reads a game (200)
pub fn create_routes<G: GameService>(state: AppState<G>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/games", post(create_game_http::<G>))
        .route(
            "/api/games/{game_id}",
            get(get_game_http::<G>).patch(modify_game_http::<G>),
        )
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id))
                .layer(CatchPanicLayer::custom(|_err| {
                    ApiError::Service(ServiceError::InternalError("handler panicked".to_string()))
                        .into_response()
                }))
                .layer(cors),
        )
        .with_state(state)
}
