//! Loading study configuration (synthesizer tuning + keyword tables) from TOML.
//!
//! See `StudyConfig` and `SynthSettings` for the expected schema. Every key is
//! optional; missing keys keep the built-in defaults from `seeds`.

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::seeds::*;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct StudyConfig {
  #[serde(default)]
  pub synth: SynthSettings,
}

/// One subject label and the lowercase keyword substrings that select it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CategoryRule {
  pub label: String,
  pub keywords: Vec<String>,
}

/// How the fill-in-the-blank generator chooses its target word.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BlankPolicy {
  /// Always the first important word of the sentence.
  #[default]
  First,
  /// Uniform pick among important words (seeded by `blank_seed` if set).
  Random,
}

/// Thresholds, caps and word tables used by the flashcard synthesizer.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SynthSettings {
  pub min_note_chars: usize,
  pub max_cards: usize,
  pub key_term_limit: usize,
  pub min_term_len: usize, // tokens must be strictly longer

  pub min_sentence_chars: usize, // fragments must be strictly longer
  pub min_sentence_tokens: usize,

  pub definition_cap: usize,
  pub concept_cap: usize,
  pub fill_blank_sentences: usize,
  pub fill_blank_min_tokens: usize, // sentences must be strictly longer
  pub comprehension_sentences: usize,
  pub comprehension_min_tokens: usize, // sentences must be strictly longer
  pub concept_min_len: usize,

  pub blank_policy: BlankPolicy,
  pub blank_seed: Option<u64>,

  pub categories: Vec<CategoryRule>,
  pub education_keywords: Vec<String>,
  pub education_category: String,
  pub default_category: String,

  pub key_term_stopwords: Vec<String>,
  pub blank_stopwords: Vec<String>,
  pub concept_exclusions: Vec<String>,
  pub connectives: Vec<String>,
}

impl Default for SynthSettings {
  fn default() -> Self {
    Self {
      min_note_chars: 20,
      max_cards: 12,
      key_term_limit: 10,
      min_term_len: 4,
      min_sentence_chars: 15,
      min_sentence_tokens: 4,
      definition_cap: 4,
      concept_cap: 4,
      fill_blank_sentences: 3,
      fill_blank_min_tokens: 8,
      comprehension_sentences: 2,
      comprehension_min_tokens: 10,
      concept_min_len: 6,
      blank_policy: BlankPolicy::First,
      blank_seed: None,
      categories: seed_categories(),
      education_keywords: seed_education_keywords(),
      education_category: "Education".into(),
      default_category: "General Knowledge".into(),
      key_term_stopwords: seed_key_term_stopwords(),
      blank_stopwords: seed_blank_stopwords(),
      concept_exclusions: seed_concept_exclusions(),
      connectives: seed_connectives(),
    }
  }
}

impl SynthSettings {
  /// Trim every word-table entry and drop the blank ones. An empty keyword
  /// would otherwise be a substring of every text.
  pub fn without_blank_entries(mut self) -> Self {
    for rule in &mut self.categories {
      prune(&mut rule.keywords);
    }
    prune(&mut self.education_keywords);
    prune(&mut self.key_term_stopwords);
    prune(&mut self.blank_stopwords);
    prune(&mut self.concept_exclusions);
    prune(&mut self.connectives);
    self
  }
}

fn prune(list: &mut Vec<String>) {
  let before = list.len();
  list.retain_mut(|w| {
    *w = w.trim().to_string();
    !w.is_empty()
  });
  if list.len() != before {
    warn!(target: "study_buddy", dropped = before - list.len(), "Ignoring blank word-table entries");
  }
}

/// Attempt to load `StudyConfig` from STUDY_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_study_config_from_env() -> Option<StudyConfig> {
  let path = std::env::var("STUDY_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_study_config(&s) {
      Ok(cfg) => {
        info!(target: "study_buddy", %path, categories = cfg.synth.categories.len(), "Loaded study config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "study_buddy", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "study_buddy", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

pub fn parse_study_config(s: &str) -> Result<StudyConfig, toml::de::Error> {
  let mut cfg = toml::from_str::<StudyConfig>(s)?;
  cfg.synth = cfg.synth.without_blank_entries();
  Ok(cfg)
}
