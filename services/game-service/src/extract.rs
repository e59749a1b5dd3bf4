use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// The `{game_id}` path segment, which must be a 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameIdPath(pub i64);

impl<S> FromRequestParts<S> for GameIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(game_id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(GameIdPath(game_id))
    }
}

/// `Json<T>` with rejections reported as [`ApiError`].
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}
