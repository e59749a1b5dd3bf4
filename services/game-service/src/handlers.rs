use axum::{
    extract::State,
    http::StatusCode,
    response::Json as ResponseJson,
};

use crate::auth::CurrentMember;
use crate::error::ApiResult;
use crate::extract::{GameIdPath, JsonBody};
use crate::service::GameService;
use crate::types::{GamePatch, GamePost, GameResponse};
use crate::AppState;

pub async fn create_game_http<G: GameService>(
    State(state): State<AppState<G>>,
    CurrentMember(member): CurrentMember,
    JsonBody(post): JsonBody<GamePost>,
) -> ApiResult<(StatusCode, ResponseJson<GameResponse>)> {
    let game = state.games.create_game(&member, post).await?;
    Ok((StatusCode::CREATED, ResponseJson(game)))
}

pub async fn modify_game_http<G: GameService>(
    State(state): State<AppState<G>>,
    GameIdPath(game_id): GameIdPath,
    CurrentMember(member): CurrentMember,
    JsonBody(patch): JsonBody<GamePatch>,
) -> ApiResult<(StatusCode, ResponseJson<GameResponse>)> {
    let game = state.games.modify_game(game_id, &member, patch).await?;
    Ok((StatusCode::OK, ResponseJson(game)))
}

pub async fn get_game_http<G: GameService>(
    State(state): State<AppState<G>>,
    GameIdPath(game_id): GameIdPath,
) -> ApiResult<ResponseJson<GameResponse>> {
    let game = state.games.get_game(game_id).await?;
    Ok(ResponseJson(game))
}
