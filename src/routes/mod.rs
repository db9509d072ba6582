//! Router assembly: HTTP endpoints, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - REST-ish API under `/api/v1/...`
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(http::http_health))
        .route(
            "/api/v1/challenges",
            get(http::http_list_challenges).post(http::http_post_challenge),
        )
        .route("/api/v1/challenges/:id", get(http::http_get_challenge))
        .route("/api/v1/classify", post(http::http_post_classify))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ForgeConfig;

    fn app() -> Router {
        let cfg = ForgeConfig { seed: Some(4), ..ForgeConfig::default() };
        build_router(Arc::new(AppState::empty(cfg)))
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = send(&app(), Request::get("/api/v1/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn created_challenge_can_be_fetched_and_listed() {
        let app = app();
        let (status, created) = send(
            &app,
            post_json("/api/v1/challenges", json!({ "numero": 7, "type": "BASES", "enonce": "Échanger A et B" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["title"], "Exercice 7: BASES");
        assert_eq!(created["test_cases"].as_array().unwrap().len(), 10);

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, Request::get(format!("/api/v1/challenges/{id}")).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], id);

        let (_, easy) = send(&app, Request::get("/api/v1/challenges?difficulty=Easy").body(Body::empty()).unwrap()).await;
        assert_eq!(easy.as_array().unwrap().len(), 1);
        let (_, hard) = send(&app, Request::get("/api/v1/challenges?difficulty=Hard").body(Body::empty()).unwrap()).await;
        assert!(hard.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_404() {
        let (status, body) = send(&app(), Request::get("/api/v1/challenges/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn classify_reports_archetype_and_reward() {
        let (status, body) = send(
            &app(),
            post_json("/api/v1/classify", json!({ "type": "Tableaux", "enonce": "Compter les cases paires d'un tableau" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "archetype": "parity", "difficulty": "Hard", "xp_reward": 150 }));
    }
}
