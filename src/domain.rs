//! Domain models used by the backend: card kinds, flashcard drafts, and the
//! ephemeral extraction records the synthesizer passes between stages.

use serde::{Deserialize, Serialize};

/// Which generator produced a card?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
  /// "What is X?" built from an explicit definition in the notes.
  Definition,
  /// "Explain the concept of ..." built from a ranked key term.
  Concept,
  /// A sentence with one important word blanked out.
  FillBlank,
  /// "What are the key points about X?" over a long sentence.
  Comprehension,
}

impl CardType {
  /// Prefix used for card ids.
  pub fn id_prefix(self) -> &'static str {
    match self {
      CardType::Definition => "def",
      CardType::Concept => "concept",
      CardType::FillBlank => "blank",
      CardType::Comprehension => "comp",
    }
  }
}

/// In-memory question/answer record prior to any persistence.
/// Built once per synthesis call and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardDraft {
  pub id: String,     // unique within one generation call
  pub question: String,
  pub answer: String,
  pub category: String,
  pub difficulty: u8, // always within 1..=5
  #[serde(rename = "type")]
  pub kind: CardType,
}

/// A frequency-ranked candidate topic word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyTerm {
  pub term: String,
  pub frequency: usize,
}

/// A term/definition pair found by pattern matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionMatch {
  pub term: String,
  pub definition: String,
}

/// Depth of generated study notes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotesLevel {
  Basic,
  #[default]
  Intermediate,
  Advanced,
}

impl NotesLevel {
  /// Lenient parse; anything unrecognised is treated as intermediate.
  pub fn parse(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "basic" => NotesLevel::Basic,
      "advanced" => NotesLevel::Advanced,
      _ => NotesLevel::Intermediate,
    }
  }

  pub fn depth(self) -> usize {
    match self {
      NotesLevel::Basic => 2,
      NotesLevel::Intermediate => 3,
      NotesLevel::Advanced => 4,
    }
  }
}
