//! The four card generators and the blank-target picker.
//!
//! Each generator is pure given its picker, keeps input order, and caps its
//! own output. Ids are `<prefix>-<n>` with `n` counting emitted cards, so they
//! are unique within one synthesis call and stable across calls.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use tracing::warn;

use crate::config::{BlankPolicy, SynthSettings};
use crate::domain::{CardType, DefinitionMatch, FlashcardDraft, KeyTerm};
use crate::extract::token_count;
use crate::scoring::{calculate_difficulty, clamp_difficulty, determine_category};

pub const BLANK_MARKER: &str = "______";
pub const FILL_BLANK_PREFIX: &str = "Fill in the blank: ";

/// Chooses which important word of a sentence gets blanked.
pub trait BlankPicker {
  /// Index into `candidates` (never empty when called).
  fn pick(&mut self, candidates: &[&str]) -> usize;
}

/// Always the first candidate. Fully deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCandidate;

impl BlankPicker for FirstCandidate {
  fn pick(&mut self, _candidates: &[&str]) -> usize {
    0
  }
}

/// Uniform choice from a seedable RNG.
pub struct SeededPicker {
  rng: StdRng,
}

impl SeededPicker {
  pub fn new(seed: u64) -> Self {
    Self { rng: StdRng::seed_from_u64(seed) }
  }

  pub fn from_entropy() -> Self {
    Self { rng: StdRng::from_entropy() }
  }
}

impl BlankPicker for SeededPicker {
  fn pick(&mut self, candidates: &[&str]) -> usize {
    self.rng.gen_range(0..candidates.len())
  }
}

/// Picker for the configured policy.
pub fn picker_for(settings: &SynthSettings) -> Box<dyn BlankPicker> {
  match (settings.blank_policy, settings.blank_seed) {
    (BlankPolicy::First, _) => Box::new(FirstCandidate),
    (BlankPolicy::Random, Some(seed)) => Box::new(SeededPicker::new(seed)),
    (BlankPolicy::Random, None) => Box::new(SeededPicker::from_entropy()),
  }
}

fn make_card(kind: CardType, n: usize, question: String, answer: String, difficulty: u8, settings: &SynthSettings, classify: &str) -> FlashcardDraft {
  FlashcardDraft {
    id: format!("{}-{}", kind.id_prefix(), n),
    question,
    answer,
    category: determine_category(classify, settings),
    difficulty: clamp_difficulty(difficulty),
    kind,
  }
}

/// "What is {term}?" per definition match, in extraction order.
pub fn definition_cards(defs: &[DefinitionMatch], settings: &SynthSettings) -> Vec<FlashcardDraft> {
  defs
    .iter()
    .filter(|d| !d.term.trim().is_empty() && !d.definition.trim().is_empty())
    .take(settings.definition_cap)
    .enumerate()
    .map(|(n, d)| {
      make_card(
        CardType::Definition,
        n,
        format!("What is {}?", d.term),
        d.definition.clone(),
        calculate_difficulty(&d.definition, settings),
        settings,
        &d.definition,
      )
    })
    .collect()
}

/// One card per ranked key term that appears in some sentence; the first
/// such sentence becomes the answer.
pub fn concept_cards(terms: &[KeyTerm], sentences: &[String], settings: &SynthSettings) -> Vec<FlashcardDraft> {
  let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
  let mut out = Vec::new();
  for kt in terms {
    if out.len() >= settings.concept_cap {
      break;
    }
    let needle = kt.term.to_lowercase();
    let Some(i) = lowered.iter().position(|s| s.contains(needle.as_str())) else { continue };
    let sentence = &sentences[i];
    out.push(make_card(
      CardType::Concept,
      out.len(),
      format!("Explain the concept of \"{}\".", kt.term),
      sentence.clone(),
      calculate_difficulty(sentence, settings),
      settings,
      sentence,
    ));
  }
  out
}

/// Blank one important word (every case-insensitive whole-word occurrence)
/// in each of the first few long sentences.
pub fn fill_blank_cards(sentences: &[String], settings: &SynthSettings, picker: &mut dyn BlankPicker) -> Vec<FlashcardDraft> {
  let stop: HashSet<String> = settings.blank_stopwords.iter().map(|w| w.to_lowercase()).collect();
  let mut out = Vec::new();
  for sentence in sentences.iter().take(settings.fill_blank_sentences) {
    if token_count(sentence) <= settings.fill_blank_min_tokens {
      continue;
    }
    let candidates: Vec<&str> = sentence
      .split_whitespace()
      .filter(|w| w.chars().count() > 4 && w.chars().all(char::is_alphabetic))
      .filter(|w| !stop.contains(&w.to_lowercase()))
      .collect();
    if candidates.is_empty() {
      continue;
    }
    let idx = picker.pick(&candidates).min(candidates.len() - 1);
    let target = candidates[idx];
    let Some(blanked) = blank_out(sentence, target) else { continue };

    out.push(make_card(
      CardType::FillBlank,
      out.len(),
      format!("{FILL_BLANK_PREFIX}{blanked}"),
      target.to_string(),
      calculate_difficulty(sentence, settings) + 1,
      settings,
      sentence,
    ));
  }
  out
}

/// Replace every case-insensitive whole-word occurrence of `target`.
pub fn blank_out(sentence: &str, target: &str) -> Option<String> {
  let pattern = format!(r"(?i)\b{}\b", regex::escape(target));
  match Regex::new(&pattern) {
    Ok(re) => Some(re.replace_all(sentence, BLANK_MARKER).into_owned()),
    Err(e) => {
      warn!(target: "synth", %target, error = %e, "Could not build blank pattern; skipping sentence");
      None
    }
  }
}

/// Key-points question about the first capitalised concept of each of the
/// first few long sentences. No concept, no card.
pub fn comprehension_cards(sentences: &[String], settings: &SynthSettings) -> Vec<FlashcardDraft> {
  let mut out = Vec::new();
  for sentence in sentences.iter().take(settings.comprehension_sentences) {
    if token_count(sentence) <= settings.comprehension_min_tokens {
      continue;
    }
    let concepts = concepts_in(sentence, settings);
    let Some(first) = concepts.first() else { continue };
    out.push(make_card(
      CardType::Comprehension,
      out.len(),
      format!("What are the key points about {first}?"),
      sentence.clone(),
      calculate_difficulty(sentence, settings),
      settings,
      sentence,
    ));
  }
  out
}

/// Capitalised words long enough to name a concept, minus question and
/// demonstrative words. Surrounding punctuation is stripped.
pub fn concepts_in<'a>(sentence: &'a str, settings: &SynthSettings) -> Vec<&'a str> {
  sentence
    .split_whitespace()
    .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
    .filter(|w| w.chars().count() >= settings.concept_min_len)
    .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
    .filter(|w| !settings.concept_exclusions.iter().any(|x| x == w))
    .collect()
}
