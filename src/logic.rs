//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Synthesizing a flashcard deck from pasted notes
//!   - Generating templated study notes for a topic
//!   - Rendering a deck (optionally one category) for document export
//!   - Shuffling a deck for study, optionally from a fixed seed

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::deck::{categories, filter_by_category, shuffle};
use crate::domain::{FlashcardDraft, NotesLevel};
use crate::error::{ExportError, NotesError, SynthError};
use crate::export::{render_text, DEFAULT_WRAP};
use crate::notes::{generate_notes, NotesRequest};
use crate::protocol::{DeckOut, NotesIn, NotesOut, ShuffleIn, ShuffleOut};
use crate::state::AppState;
use crate::synth::synthesize_flashcards;

#[instrument(level = "info", skip(state, notes), fields(notes_len = notes.len()))]
pub fn do_generate_flashcards(state: &AppState, notes: &str) -> Result<DeckOut, SynthError> {
  match synthesize_flashcards(notes, &state.synth) {
    Ok(flashcards) => {
      let deck_id = Uuid::new_v4();
      let categories = categories(&flashcards);
      info!(target: "synth", %deck_id, cards = flashcards.len(), categories = categories.len(), "Deck generated");
      Ok(DeckOut { deck_id, flashcards, categories })
    }
    Err(e) => {
      warn!(target: "synth", kind = e.kind(), error = %e, "Deck generation rejected");
      Err(e)
    }
  }
}

#[instrument(level = "info", skip(body), fields(topic_len = body.topic.len()))]
pub fn do_generate_notes(body: &NotesIn) -> Result<NotesOut, NotesError> {
  let mut req = NotesRequest::new(body.topic.clone());
  req.level = body.level.as_deref().map(NotesLevel::parse).unwrap_or_default();
  req.include_examples = body.include_examples.unwrap_or(req.include_examples);
  req.include_diagrams = body.include_diagrams.unwrap_or(req.include_diagrams);
  let html = generate_notes(&req)?;
  Ok(NotesOut { topic: body.topic.trim().to_string(), html })
}

#[instrument(level = "info", skip(cards), fields(cards = cards.len()))]
pub fn do_export(cards: &[FlashcardDraft], category: Option<&str>, today: NaiveDate) -> Result<String, ExportError> {
  let selected = filter_by_category(cards, category);
  render_text(selected, today, DEFAULT_WRAP)
}

#[instrument(level = "info", skip(body), fields(cards = body.flashcards.len(), seeded = body.seed.is_some()))]
pub fn do_shuffle(body: ShuffleIn) -> ShuffleOut {
  let mut rng = match body.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  let mut flashcards = body.flashcards;
  shuffle(&mut flashcards, &mut rng);
  ShuffleOut { flashcards }
}
