//! Heuristic category classification and difficulty scoring.
//! Both are driven by the word tables in `SynthSettings`.

use crate::config::SynthSettings;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// First subject label (in table order) with a keyword substring in `text`,
/// then the education fallback, then the default label.
pub fn determine_category(text: &str, settings: &SynthSettings) -> String {
  let lower = text.to_lowercase();

  for rule in &settings.categories {
    let hits = rule
      .keywords
      .iter()
      .filter(|kw| lower.contains(kw.to_lowercase().as_str()))
      .count();
    if hits > 0 {
      return rule.label.clone();
    }
  }

  let is_education = lower
    .split(|c: char| !c.is_alphanumeric() && c != '_')
    .any(|w| settings.education_keywords.iter().any(|kw| kw.eq_ignore_ascii_case(w)));
  if is_education {
    return settings.education_category.clone();
  }

  settings.default_category.clone()
}

/// Base 1, plus one for each of: long text, several long words, several
/// capitalised technical words, a contrastive/causal connective.
pub fn calculate_difficulty(text: &str, settings: &SynthSettings) -> u8 {
  let words: Vec<&str> = text.split_whitespace().collect();
  let long_words = words.iter().filter(|w| w.chars().count() > 8).count();
  let technical = words
    .iter()
    .filter(|w| w.chars().next().is_some_and(char::is_uppercase) && w.chars().count() > 6)
    .count();
  // case-sensitive: a sentence-initial "However" does not count
  let has_connective = settings.connectives.iter().any(|c| text.contains(c.as_str()));

  let mut difficulty = MIN_DIFFICULTY;
  if words.len() > 20 {
    difficulty += 1;
  }
  if long_words > 2 {
    difficulty += 1;
  }
  if technical > 1 {
    difficulty += 1;
  }
  if has_connective {
    difficulty += 1;
  }
  clamp_difficulty(difficulty)
}

pub fn clamp_difficulty(d: u8) -> u8 {
  d.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}
