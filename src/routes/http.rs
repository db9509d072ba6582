//! HTTP endpoint handlers. These are thin wrappers that forward to the state.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;

use axum::{
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument};

use crate::domain::RawExercise;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state), fields(difficulty = ?q.difficulty))]
pub async fn http_list_challenges(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ChallengeQuery>,
) -> impl IntoResponse {
  let list = state.list_challenges(q.difficulty).await;
  info!(target: "forge", count = list.len(), "HTTP challenges listed");
  Json(list)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_challenge(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> impl IntoResponse {
  match state.get_challenge(&id).await {
    Some(c) => Json(c).into_response(),
    None => (
      StatusCode::NOT_FOUND,
      Json(ErrorOut { error: format!("Unknown challenge id: {}", id) }),
    )
      .into_response(),
  }
}

#[instrument(level = "info", skip(state, body), fields(statement_len = body.statement().len()))]
pub async fn http_post_challenge(
  State(state): State<Arc<AppState>>,
  Json(body): Json<RawExercise>,
) -> impl IntoResponse {
  let c = state.create_challenge(&body).await;
  (StatusCode::CREATED, Json(c))
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_post_classify(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ClassifyIn>,
) -> impl IntoResponse {
  let ex = RawExercise { category: body.category, enonce: body.enonce, ..RawExercise::default() };
  let c = state.classify(&ex);
  info!(target: "forge", archetype = c.archetype.as_str(), tier = c.difficulty.as_str(), "HTTP classify");
  Json(ClassifyOut::from(c))
}
