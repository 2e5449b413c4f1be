//! Seed data: built-in keyword tables and stoplists.
//!
//! These guarantee sensible behaviour without any external config; a TOML
//! file can replace any of them (see `config::SynthSettings`).

use crate::config::CategoryRule;

/// Subject tables in priority order. The first label with any keyword hit wins.
pub fn seed_categories() -> Vec<CategoryRule> {
  let table: [(&str, &[&str]); 8] = [
    ("Science", &["cell", "atom", "molecule", "dna", "protein", "enzyme", "biology", "chemistry", "physics", "theory", "hypothesis", "experiment"]),
    ("History", &["war", "empire", "revolution", "century", "ancient", "medieval", "modern", "civilization", "culture", "society"]),
    ("Mathematics", &["equation", "formula", "theorem", "proof", "calculate", "solve", "function", "derivative", "integral", "geometry"]),
    ("Literature", &["author", "novel", "poem", "character", "theme", "metaphor", "symbolism", "narrative", "plot", "setting"]),
    ("Technology", &["computer", "software", "algorithm", "database", "network", "programming", "code", "system", "data"]),
    ("Business", &["market", "strategy", "management", "finance", "economics", "profit", "revenue", "customer", "brand"]),
    ("Psychology", &["behavior", "cognitive", "emotion", "memory", "learning", "personality", "social", "mental", "brain"]),
    ("Medicine", &["disease", "treatment", "diagnosis", "symptom", "therapy", "patient", "medical", "health", "clinical"]),
  ];
  table
    .iter()
    .map(|(label, kws)| CategoryRule {
      label: (*label).to_string(),
      keywords: words(kws),
    })
    .collect()
}

/// Whole-word fallback checked when no subject table matched.
pub fn seed_education_keywords() -> Vec<String> {
  words(&["study", "learn", "education", "academic", "school", "university"])
}

/// Function words dropped before key-term counting.
pub fn seed_key_term_stopwords() -> Vec<String> {
  words(&[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "can", "this", "that", "these",
    "those", "from", "they", "their", "there", "which", "about",
  ])
}

/// Words never chosen as a fill-in-the-blank target.
pub fn seed_blank_stopwords() -> Vec<String> {
  words(&["that", "this", "with", "from", "they", "have", "been", "were", "will", "which", "where", "when"])
}

/// Capitalised words that are not concepts (sentence openers, question words).
pub fn seed_concept_exclusions() -> Vec<String> {
  words(&["The", "This", "That", "These", "Those", "When", "Where", "Which"])
}

/// Connectives that mark a harder card.
pub fn seed_connectives() -> Vec<String> {
  words(&["however", "therefore", "consequently"])
}

fn words(list: &[&str]) -> Vec<String> {
  list.iter().map(|w| (*w).to_string()).collect()
}
