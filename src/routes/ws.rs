//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::deck::categories;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::logic::*;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "study_buddy", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "study_buddy", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let out = reply_for_text(&txt, &state);
        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "study_buddy", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "study_buddy", "WebSocket disconnected");
}

/// Parse, dispatch, serialize response.
fn reply_for_text(txt: &str, state: &AppState) -> String {
  let reply_msg = match serde_json::from_str::<ClientWsMessage>(txt) {
    Ok(incoming) => {
      debug!(target: "study_buddy", "WS received: {:?}", &incoming);
      handle_client_ws(incoming, state)
    }
    Err(e) => ServerWsMessage::Error { kind: "invalid_json".into(), message: format!("Invalid JSON: {}", e) },
  };

  serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "kind": "serialization", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

#[instrument(level = "info", skip_all)]
fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::GenerateFlashcards { notes } => match do_generate_flashcards(state, &notes) {
      Ok(deck) => {
        info!(target: "synth", deck_id = %deck.deck_id, cards = deck.flashcards.len(), "WS flashcards served");
        ServerWsMessage::Flashcards { deck }
      }
      Err(e) => ServerWsMessage::Error { kind: e.kind().into(), message: e.to_string() },
    },

    ClientWsMessage::GenerateNotes(body) => match do_generate_notes(&body) {
      Ok(out) => ServerWsMessage::Notes(out),
      Err(e) => ServerWsMessage::Error { kind: e.kind().into(), message: e.to_string() },
    },

    ClientWsMessage::ListCategories { flashcards } =>
      ServerWsMessage::Categories { categories: categories(&flashcards) },

    ClientWsMessage::ShuffleDeck(body) => ServerWsMessage::Shuffled(do_shuffle(body)),
  }
}
