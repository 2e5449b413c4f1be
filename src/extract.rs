//! Text extraction stages: normalization, sentence splitting, key-term ranking
//! and explicit definition matching.
//!
//! Every stage is pure and order-preserving. Nothing here fails except the
//! normalizer's length check; an unmatched pattern just yields fewer items.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::SynthSettings;
use crate::domain::{DefinitionMatch, KeyTerm};
use crate::error::SynthError;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static TERMINATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").expect("static regex"));
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("static regex"));

/// Capitalised (possibly multi-word) term at a word boundary.
const TERM: &str = r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)";

/// Definition patterns, applied in this order. Each captures (term, definition).
static DEFINITION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
  [
    r"\s+is\s+([^.!?]+)",
    r"\s+refers to\s+([^.!?]+)",
    r"\s+means\s+([^.!?]+)",
    r"\s*:\s*([^.!?]+)",
  ]
  .iter()
  .map(|copula| Regex::new(&format!("{TERM}{copula}")).expect("static regex"))
  .collect()
});

/// Collapse whitespace runs and trim. Rejects text too short to extract from.
pub fn normalize(raw: &str, min_chars: usize) -> Result<String, SynthError> {
  let text = WHITESPACE.replace_all(raw.trim(), " ").into_owned();
  let actual = text.chars().count();
  if actual < min_chars {
    return Err(SynthError::InvalidInput { min_chars, actual });
  }
  Ok(text)
}

/// Number of whitespace-separated tokens.
pub fn token_count(s: &str) -> usize {
  s.split_whitespace().count()
}

/// Split on terminal punctuation, keeping fragments long enough to quiz on.
pub fn extract_sentences(text: &str, settings: &SynthSettings) -> Vec<String> {
  TERMINATORS
    .split(text)
    .map(str::trim)
    .filter(|s| s.chars().count() > settings.min_sentence_chars)
    .filter(|s| token_count(s) >= settings.min_sentence_tokens)
    .map(str::to_string)
    .collect()
}

/// Rank non-stopword tokens by frequency. Ties keep first-occurrence order.
pub fn extract_key_terms(text: &str, settings: &SynthSettings) -> Vec<KeyTerm> {
  let stop: HashSet<&str> = settings.key_term_stopwords.iter().map(String::as_str).collect();
  let lower = text.to_lowercase();

  let mut order: Vec<KeyTerm> = Vec::new();
  let mut index: HashMap<&str, usize> = HashMap::new();
  for word in NON_WORD.split(&lower) {
    if word.chars().count() <= settings.min_term_len || stop.contains(word) {
      continue;
    }
    match index.get(word) {
      Some(&i) => order[i].frequency += 1,
      None => {
        index.insert(word, order.len());
        order.push(KeyTerm { term: word.to_string(), frequency: 1 });
      }
    }
  }

  // sort_by is stable, so equal counts stay in first-seen order
  order.sort_by(|a, b| b.frequency.cmp(&a.frequency));
  order.truncate(settings.key_term_limit);
  order
}

/// Every "Term is ...", "Term refers to ...", "Term means ...", "Term: ..."
/// match, grouped by pattern and in order of appearance within each pattern.
pub fn extract_definitions(text: &str) -> Vec<DefinitionMatch> {
  let mut out = Vec::new();
  for re in DEFINITION_PATTERNS.iter() {
    for caps in re.captures_iter(text) {
      let (Some(term), Some(def)) = (caps.get(1), caps.get(2)) else { continue };
      let definition = def.as_str().trim();
      if definition.is_empty() {
        continue;
      }
      out.push(DefinitionMatch {
        term: term.as_str().trim().to_string(),
        definition: definition.to_string(),
      });
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  const PHOTO: &str = "Photosynthesis is the process by which plants convert light energy into chemical energy. This process requires chlorophyll and occurs in the chloroplast of plant cells.";

  #[test]
  fn normalize_collapses_and_trims() {
    let s = normalize("  Mitochondria   are\n\tthe powerhouse\n of the cell.  ", 20).unwrap();
    assert_eq!(s, "Mitochondria are the powerhouse of the cell.");
  }

  #[test]
  fn normalize_rejects_short_text() {
    assert_eq!(
      normalize("Short note.", 20),
      Err(SynthError::InvalidInput { min_chars: 20, actual: 11 })
    );
    assert!(matches!(normalize("   \n  ", 20), Err(SynthError::InvalidInput { actual: 0, .. })));
  }

  #[test]
  fn sentences_keep_order_and_drop_fragments() {
    let s = SynthSettings::default();
    let text = "Cells divide by mitosis in most tissues. Too short! Why? Meiosis produces four distinct haploid cells!!! Ok.";
    let got = extract_sentences(text, &s);
    assert_eq!(
      got,
      vec![
        "Cells divide by mitosis in most tissues".to_string(),
        "Meiosis produces four distinct haploid cells".to_string(),
      ]
    );
  }

  #[test]
  fn sentences_need_four_tokens() {
    let s = SynthSettings::default();
    assert!(extract_sentences("Extraordinarily complicated phenomena.", &s).is_empty());
  }

  #[test]
  fn key_terms_rank_by_frequency_then_first_seen() {
    let s = SynthSettings::default();
    let terms = extract_key_terms(PHOTO, &s);
    // "process" is seen before "energy", both twice
    assert_eq!(terms[0], KeyTerm { term: "process".into(), frequency: 2 });
    assert_eq!(terms[1], KeyTerm { term: "energy".into(), frequency: 2 });
    // single occurrences follow in reading order
    assert_eq!(terms[2].term, "photosynthesis");
    assert_eq!(terms[3].term, "plants");
    assert!(terms.len() <= s.key_term_limit);
    assert!(terms.iter().all(|t| t.term != "which"));
  }

  #[test]
  fn key_terms_skip_short_and_stop_words() {
    let s = SynthSettings::default();
    let terms = extract_key_terms("the cat and the dog would have those", &s);
    assert!(terms.is_empty());
  }

  #[test]
  fn definitions_from_each_copula() {
    let text = "Osmosis is the diffusion of water. Entropy refers to disorder in a system. Homeostasis means internal balance. Catalyst: a substance that speeds reactions.";
    let defs = extract_definitions(text);
    let pairs: Vec<(&str, &str)> = defs.iter().map(|d| (d.term.as_str(), d.definition.as_str())).collect();
    assert_eq!(
      pairs,
      vec![
        ("Osmosis", "the diffusion of water"),
        ("Entropy", "disorder in a system"),
        ("Homeostasis", "internal balance"),
        ("Catalyst", "a substance that speeds reactions"),
      ]
    );
  }

  #[test]
  fn definitions_need_a_capitalised_term() {
    assert!(extract_definitions("photosynthesis is how plants eat light.").is_empty());
    let defs = extract_definitions(PHOTO);
    assert_eq!(defs[0].term, "Photosynthesis");
    assert!(defs[0].definition.starts_with("the process by which plants convert"));
  }

  #[test]
  fn multi_word_terms_are_captured() {
    let defs = extract_definitions("The Krebs Cycle is a series of chemical reactions.");
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].term, "The Krebs Cycle");
  }
}
