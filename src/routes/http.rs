//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs basic result info; failures become
//! 422 JSON bodies via `ApiError`.

use std::sync::Arc;
use axum::{
  extract::State,
  http::{header, StatusCode},
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use crate::error::{ExportError, NotesError, SynthError};
use crate::export::EXPORT_FILENAME;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

/// Error reply shared by all endpoints.
#[derive(Debug)]
pub struct ApiError {
  status: StatusCode,
  body: ErrorOut,
}

impl ApiError {
  fn unprocessable(kind: &str, message: String) -> Self {
    Self { status: StatusCode::UNPROCESSABLE_ENTITY, body: ErrorOut { error: kind.to_string(), message } }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status, Json(self.body)).into_response()
  }
}

impl From<SynthError> for ApiError {
  fn from(e: SynthError) -> Self { Self::unprocessable(e.kind(), e.to_string()) }
}

impl From<NotesError> for ApiError {
  fn from(e: NotesError) -> Self { Self::unprocessable(e.kind(), e.to_string()) }
}

impl From<ExportError> for ApiError {
  fn from(e: ExportError) -> Self { Self::unprocessable(e.kind(), e.to_string()) }
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state, body), fields(notes_len = body.notes.len()))]
pub async fn http_post_flashcards(
  State(state): State<Arc<AppState>>,
  Json(body): Json<FlashcardsIn>,
) -> Result<Json<DeckOut>, ApiError> {
  let deck = do_generate_flashcards(&state, &body.notes)?;
  info!(target: "synth", deck_id = %deck.deck_id, cards = deck.flashcards.len(), "HTTP flashcards served");
  Ok(Json(deck))
}

#[instrument(level = "info", skip(body), fields(topic_len = body.topic.len()))]
pub async fn http_post_notes(Json(body): Json<NotesIn>) -> Result<Json<NotesOut>, ApiError> {
  let out = do_generate_notes(&body)?;
  info!(target: "study_buddy", html_len = out.html.len(), "HTTP notes served");
  Ok(Json(out))
}

#[instrument(level = "info", skip(body), fields(cards = body.flashcards.len()))]
pub async fn http_post_shuffle(Json(body): Json<ShuffleIn>) -> Json<ShuffleOut> {
  Json(do_shuffle(body))
}

#[instrument(level = "info", skip(body), fields(cards = body.flashcards.len()))]
pub async fn http_post_export(Json(body): Json<ExportIn>) -> Result<Response, ApiError> {
  let today = chrono::Local::now().date_naive();
  let text = do_export(&body.flashcards, body.category.as_deref(), today)?;
  let disposition = format!("attachment; filename=\"{EXPORT_FILENAME}\"");
  Ok((
    [
      (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
      (header::CONTENT_DISPOSITION, disposition),
    ],
    text,
  )
    .into_response())
}
