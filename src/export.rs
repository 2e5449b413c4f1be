//! Plain-text deck export: the line array handed to a document renderer.
//!
//! Layout per card: `Card N - Category`, `Q: ...`, `A: ...` (wrapped, with
//! continuation lines indented under the text), then a blank line.

use chrono::NaiveDate;

use crate::domain::FlashcardDraft;
use crate::error::ExportError;
use crate::util::wrap_words;

pub const EXPORT_TITLE: &str = "Study Buddy - Flashcards";
pub const EXPORT_FILENAME: &str = "study_buddy_flashcards.txt";
pub const DEFAULT_WRAP: usize = 80;

const INDENT: &str = "   ";

pub fn render_lines<'a>(
  cards: impl IntoIterator<Item = &'a FlashcardDraft>,
  generated_on: NaiveDate,
  width: usize,
) -> Result<Vec<String>, ExportError> {
  let mut lines = vec![
    EXPORT_TITLE.to_string(),
    format!("Generated on: {}", generated_on.format("%Y-%m-%d")),
    String::new(),
  ];
  let body_width = width.saturating_sub(INDENT.len()).max(1);

  let mut count = 0;
  for (i, card) in cards.into_iter().enumerate() {
    count += 1;
    lines.push(format!("Card {} - {}", i + 1, card.category));
    push_labelled(&mut lines, "Q: ", &card.question, body_width);
    push_labelled(&mut lines, "A: ", &card.answer, body_width);
    lines.push(String::new());
  }
  if count == 0 {
    return Err(ExportError::EmptyDeck);
  }
  Ok(lines)
}

/// Whole document as one newline-terminated string.
pub fn render_text<'a>(
  cards: impl IntoIterator<Item = &'a FlashcardDraft>,
  generated_on: NaiveDate,
  width: usize,
) -> Result<String, ExportError> {
  let mut out = render_lines(cards, generated_on, width)?.join("\n");
  out.push('\n');
  Ok(out)
}

fn push_labelled(lines: &mut Vec<String>, label: &str, text: &str, width: usize) {
  let wrapped = wrap_words(text, width);
  if wrapped.is_empty() {
    lines.push(label.trim_end().to_string());
    return;
  }
  for (i, part) in wrapped.into_iter().enumerate() {
    let lead = if i == 0 { label } else { INDENT };
    lines.push(format!("{lead}{part}"));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::CardType;

  fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
  }

  fn card(q: &str, a: &str) -> FlashcardDraft {
    FlashcardDraft {
      id: "def-0".into(),
      question: q.into(),
      answer: a.into(),
      category: "Science".into(),
      difficulty: 2,
      kind: CardType::Definition,
    }
  }

  #[test]
  fn empty_deck_is_rejected() {
    let empty: Vec<FlashcardDraft> = Vec::new();
    assert_eq!(render_lines(&empty, date(), 80), Err(ExportError::EmptyDeck));
  }

  #[test]
  fn header_and_card_block() {
    let deck = vec![card("What is Osmosis?", "the diffusion of water")];
    let lines = render_lines(&deck, date(), 80).unwrap();
    assert_eq!(
      lines,
      vec![
        "Study Buddy - Flashcards",
        "Generated on: 2026-10-19",
        "",
        "Card 1 - Science",
        "Q: What is Osmosis?",
        "A: the diffusion of water",
        "",
      ]
    );
  }

  #[test]
  fn long_answers_wrap_with_indent() {
    let deck = vec![card("What is X?", "one two three four five six")];
    let lines = render_lines(&deck, date(), 13).unwrap();
    assert_eq!(lines[5], "A: one two");
    assert_eq!(lines[6], "   three four");
    assert_eq!(lines[7], "   five six");
  }

  #[test]
  fn text_ends_with_newline() {
    let deck = vec![card("Q?", "A")];
    let text = render_text(&deck, date(), 80).unwrap();
    assert!(text.starts_with(EXPORT_TITLE));
    assert!(text.ends_with('\n'));
  }
}
