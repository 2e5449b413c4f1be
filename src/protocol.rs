//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::FlashcardDraft;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    GenerateFlashcards {
        notes: String,
    },
    GenerateNotes(NotesIn),
    ListCategories {
        flashcards: Vec<FlashcardDraft>,
    },
    ShuffleDeck(ShuffleIn),
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Flashcards {
        deck: DeckOut,
    },
    Notes(NotesOut),
    Categories {
        categories: Vec<String>,
    },
    Shuffled(ShuffleOut),
    Error {
        kind: String,
        message: String,
    },
}

/// A freshly generated deck. `deckId` is new on every call; the cards
/// themselves are deterministic for a given input.
#[derive(Debug, Serialize)]
pub struct DeckOut {
    #[serde(rename = "deckId")]
    pub deck_id: Uuid,
    pub flashcards: Vec<FlashcardDraft>,
    pub categories: Vec<String>,
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct FlashcardsIn {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesIn {
    pub topic: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, rename = "includeExamples")]
    pub include_examples: Option<bool>,
    #[serde(default, rename = "includeDiagrams")]
    pub include_diagrams: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct NotesOut {
    pub topic: String,
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportIn {
    pub flashcards: Vec<FlashcardDraft>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Cards to reorder. A `seed` makes the order reproducible.
#[derive(Debug, Deserialize)]
pub struct ShuffleIn {
    pub flashcards: Vec<FlashcardDraft>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ShuffleOut {
    pub flashcards: Vec<FlashcardDraft>,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
