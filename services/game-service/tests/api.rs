use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{GamePatch, GamePost, GameResponse, ServiceError};
use rstest::*;
use serde_json::json;

use test_helpers::{
    alice, in_memory_app, json_request, panicking_app, read_json, recording_app, recording_state, sample_response,
    send, Call, ALICE_TOKEN, BOB_TOKEN,
};

use game_service::types::ErrorResponse;

#[tokio::test]
async fn create_game_returns_created_with_service_body() {
    let state = recording_state(Ok(sample_response(7)));
    let app = recording_app(&state);

    let body = json!({ "gameName": "Tetris", "categories": ["Puzzle"] });
    let response = send(&app, json_request("POST", "/api/games", Some(ALICE_TOKEN), body)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let game: GameResponse = read_json(response).await;
    assert_eq!(game, sample_response(7));

    assert_eq!(
        state.games.calls(),
        vec![Call::Create(
            alice(),
            GamePost {
                game_name: "Tetris".to_string(),
                main_img_url: None,
                download_url: None,
                description: None,
                categories: vec!["Puzzle".to_string()],
            }
        )]
    );
}

#[tokio::test]
async fn modify_game_passes_path_id_to_service() {
    let state = recording_state(Ok(sample_response(42)));
    let app = recording_app(&state);

    let body = json!({ "description": "Now with colours" });
    let response = send(&app, json_request("PATCH", "/api/games/42", Some(ALICE_TOKEN), body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let game: GameResponse = read_json(response).await;
    assert_eq!(game, sample_response(42));

    let expected_patch = GamePatch {
        description: Some("Now with colours".to_string()),
        ..GamePatch::default()
    };
    assert_eq!(state.games.calls(), vec![Call::Modify(42, alice(), expected_patch)]);
}

#[rstest]
#[case("abc")]
#[case("1.5")]
#[case("99999999999999999999")]
#[tokio::test]
async fn non_numeric_game_id_fails_before_service(#[case] game_id: &str) {
    let state = recording_state(Ok(sample_response(1)));
    let app = recording_app(&state);

    let uri = format!("/api/games/{}", game_id);
    let response = send(&app, json_request("PATCH", &uri, Some(ALICE_TOKEN), json!({ "gameName": "x" }))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "invalid_path");
    assert!(state.games.calls().is_empty());
}

#[rstest]
#[case("POST", "/api/games")]
#[case("PATCH", "/api/games/42")]
#[tokio::test]
async fn missing_identity_is_rejected(#[case] method: &str, #[case] uri: &str) {
    let state = recording_state(Ok(sample_response(1)));
    let app = recording_app(&state);

    let response = send(&app, json_request(method, uri, None, json!({ "gameName": "x" }))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "unauthenticated");
    assert!(state.games.calls().is_empty());
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let state = recording_state(Ok(sample_response(1)));
    let app = recording_app(&state);

    let response = send(
        &app,
        json_request("POST", "/api/games", Some("forged"), json!({ "gameName": "x" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(state.games.calls().is_empty());
}

#[tokio::test]
async fn bearer_scheme_is_case_insensitive() {
    let state = recording_state(Ok(sample_response(1)));
    let app = recording_app(&state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/games")
        .header("authorization", format!("bearer {}", ALICE_TOKEN))
        .header("content-type", "application/json")
        .body(Body::from(r#"{"gameName":"Tetris"}"#))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(state.games.calls().len(), 1);
}

#[tokio::test]
async fn identical_requests_delegate_twice() {
    let state = recording_state(Ok(sample_response(5)));
    let app = recording_app(&state);

    for _ in 0..2 {
        let body = json!({ "gameName": "Tetris 2" });
        let response = send(&app, json_request("PATCH", "/api/games/5", Some(ALICE_TOKEN), body)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(state.games.calls().len(), 2);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let state = recording_state(Ok(sample_response(1)));
    let app = recording_app(&state);

    let response = send(
        &app,
        json_request("POST", "/api/games", Some(ALICE_TOKEN), json!({ "categories": [] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "invalid_body");
    assert!(state.games.calls().is_empty());
}

#[tokio::test]
async fn missing_content_type_is_unsupported() {
    let state = recording_state(Ok(sample_response(1)));
    let app = recording_app(&state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/games")
        .header("authorization", format!("Bearer {}", ALICE_TOKEN))
        .body(Body::from(r#"{"gameName":"Tetris"}"#))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(state.games.calls().is_empty());
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let state = recording_state(Ok(sample_response(1)));
    let app = recording_app(&state);

    let description = "x".repeat(3 * 1024 * 1024);
    let body = json!({ "gameName": "Tetris", "description": description });
    let response = send(&app, json_request("POST", "/api/games", Some(ALICE_TOKEN), body)).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "payload_too_large");
    assert!(state.games.calls().is_empty());
}

#[tokio::test]
async fn handler_panic_uses_json_error_body() {
    let app = panicking_app();

    let response = send(
        &app,
        json_request("POST", "/api/games", Some(ALICE_TOKEN), json!({ "gameName": "Tetris" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert!(response.headers().contains_key("x-request-id"));
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "internal_error");
}

#[rstest]
#[case(ServiceError::NotFound("game 9".into()), StatusCode::NOT_FOUND, "not_found")]
#[case(ServiceError::Forbidden("not yours".into()), StatusCode::FORBIDDEN, "forbidden")]
#[case(ServiceError::BadRequest("name".into()), StatusCode::BAD_REQUEST, "bad_request")]
#[case(ServiceError::InternalError("boom".into()), StatusCode::INTERNAL_SERVER_ERROR, "internal_error")]
#[tokio::test]
async fn service_errors_use_status_table(
    #[case] err: ServiceError,
    #[case] status: StatusCode,
    #[case] kind: &str,
) {
    let state = recording_state(Err(err));
    let app = recording_app(&state);

    let response = send(
        &app,
        json_request("PATCH", "/api/games/9", Some(ALICE_TOKEN), json!({ "gameName": "x" })),
    )
    .await;

    assert_eq!(response.status(), status);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, kind);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let state = recording_state(Ok(sample_response(1)));
    let app = recording_app(&state);

    let response = send(
        &app,
        json_request("POST", "/api/games", Some(ALICE_TOKEN), json!({ "gameName": "Tetris" })),
    )
    .await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn create_then_modify_with_in_memory_service() {
    let app = in_memory_app();

    let create = json!({
        "gameName": "Tetris",
        "mainImgUrl": "https://img.example.com/tetris.png",
        "categories": ["Puzzle", "puzzle", "Arcade"]
    });
    let response = send(&app, json_request("POST", "/api/games", Some(ALICE_TOKEN), create)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: GameResponse = read_json(response).await;
    assert_eq!(created.game_id, 1);
    assert_eq!(created.member_id, 1);
    assert_eq!(created.categories.len(), 2);

    let patch = json!({ "gameName": "Tetris DX" });
    let response = send(&app, json_request("PATCH", "/api/games/1", Some(BOB_TOKEN), patch.clone())).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, json_request("PATCH", "/api/games/1", Some(ALICE_TOKEN), patch)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let modified: GameResponse = read_json(response).await;
    assert_eq!(modified.game_name, "Tetris DX");
    assert_eq!(modified.main_img_url, created.main_img_url);
    assert_eq!(modified.created_at, created.created_at);

    let response = send(
        &app,
        Request::builder().uri("/api/games/1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: GameResponse = read_json(response).await;
    assert_eq!(fetched, modified);
}

#[tokio::test]
async fn modify_unknown_game_with_in_memory_service() {
    let app = in_memory_app();

    let response = send(
        &app,
        json_request("PATCH", "/api/games/404", Some(ALICE_TOKEN), json!({ "gameName": "x" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_with_in_memory_service() {
    let app = in_memory_app();

    let body = json!({ "gameName": "Tetris", "downloadUrl": "not a url" });
    let response = send(&app, json_request("POST", "/api/games", Some(ALICE_TOKEN), body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.error, "bad_request");
}
