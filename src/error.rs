//! Typed failures surfaced by the study tools.
//!
//! All of them are recoverable by re-prompting the user; none should take the
//! process down. The HTTP and WebSocket layers map them onto error replies via
//! `kind()` and the `Display` text.

use thiserror::Error;

/// Failures of the note-to-flashcard pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthError {
    /// Notes missing or shorter than the minimum after trimming.
    #[error("Please provide more detailed study notes (at least {min_chars} characters, got {actual})")]
    InvalidInput { min_chars: usize, actual: usize },

    /// The heuristics found nothing to turn into a card.
    #[error("Could not generate flashcards from the provided content. Try adding more detailed information.")]
    EmptyResult,
}

impl SynthError {
    pub fn kind(&self) -> &'static str {
        match self {
            SynthError::InvalidInput { .. } => "invalid_input",
            SynthError::EmptyResult => "empty_result",
        }
    }
}

/// Failures of the study-notes generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotesError {
    #[error("Please provide a valid topic (at least {min_chars} characters)")]
    InvalidTopic { min_chars: usize },
}

impl NotesError {
    pub fn kind(&self) -> &'static str {
        match self {
            NotesError::InvalidTopic { .. } => "invalid_topic",
        }
    }
}

/// Failures when preparing a deck for document export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("No flashcards to export. Generate flashcards first.")]
    EmptyDeck,
}

impl ExportError {
    pub fn kind(&self) -> &'static str {
        match self {
            ExportError::EmptyDeck => "empty_deck",
        }
    }
}
