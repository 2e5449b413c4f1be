//! Flashcard synthesis pipeline: note text in, ordered flashcard drafts out.
//!
//! Flow:
//! 1) Normalize whitespace and reject too-short notes.
//! 2) Extract sentences, ranked key terms and explicit definitions.
//! 3) Run the definition, concept, fill-in-blank and comprehension generators.
//! 4) Drop repeated questions (first wins) and cap the deck.
//!
//! Stateless: each call works on its own locals, so concurrent callers need no
//! locking.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::cards::{comprehension_cards, concept_cards, definition_cards, fill_blank_cards, picker_for, BlankPicker};
use crate::config::SynthSettings;
use crate::domain::FlashcardDraft;
use crate::error::SynthError;
use crate::extract::{extract_definitions, extract_key_terms, extract_sentences, normalize};

/// Entry point using the blank policy configured in `settings`.
pub fn synthesize_flashcards(notes: &str, settings: &SynthSettings) -> Result<Vec<FlashcardDraft>, SynthError> {
    let mut picker = picker_for(settings);
    synthesize_with(notes, settings, picker.as_mut())
}

/// Same as `synthesize_flashcards` with an explicit blank-target picker.
#[instrument(level = "debug", target = "synth", skip_all, fields(notes_len = notes.len()))]
pub fn synthesize_with(notes: &str, settings: &SynthSettings, picker: &mut dyn BlankPicker) -> Result<Vec<FlashcardDraft>, SynthError> {
    let text = normalize(notes, settings.min_note_chars)?;
    let sentences = extract_sentences(&text, settings);
    let key_terms = extract_key_terms(&text, settings);
    let definitions = extract_definitions(&text);

    let definition = definition_cards(&definitions, settings);
    let concept = concept_cards(&key_terms, &sentences, settings);
    let fill_blank = fill_blank_cards(&sentences, settings, picker);
    let comprehension = comprehension_cards(&sentences, settings);

    debug!(
        target: "synth",
        sentences = sentences.len(),
        key_terms = key_terms.len(),
        definitions = definitions.len(),
        definition_cards = definition.len(),
        concept_cards = concept.len(),
        fill_blank_cards = fill_blank.len(),
        comprehension_cards = comprehension.len(),
        "Generated candidate cards"
    );

    let all = definition
        .into_iter()
        .chain(concept)
        .chain(fill_blank)
        .chain(comprehension);
    let mut cards = dedup_by_question(all);
    cards.truncate(settings.max_cards);

    if cards.is_empty() {
        return Err(SynthError::EmptyResult);
    }
    Ok(cards)
}

/// Keep the first card for each lowercased, trimmed question.
pub fn dedup_by_question(cards: impl IntoIterator<Item = FlashcardDraft>) -> Vec<FlashcardDraft> {
    let mut seen = HashSet::new();
    cards
        .into_iter()
        .filter(|c| seen.insert(c.question.trim().to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{FirstCandidate, SeededPicker, BLANK_MARKER, FILL_BLANK_PREFIX};
    use crate::config::BlankPolicy;
    use crate::domain::CardType;

    const PHOTO: &str = "Photosynthesis is the process by which plants convert light energy into chemical energy. This process requires chlorophyll and occurs in the chloroplast of plant cells.";

    const HISTORY: &str = "The Roman Empire was one of the largest empires in ancient history. \
        Augustus became the first emperor after the collapse of the Republic. \
        Rome refers to the capital city that dominated the Mediterranean world. \
        However, economic troubles and military pressure weakened the empire over several centuries. \
        Constantinople: the eastern capital founded by Constantine on the Bosporus. \
        Historians consequently debate whether the empire fell or slowly transformed into medieval kingdoms.";

    fn fixtures() -> Vec<&'static str> {
        vec![PHOTO, HISTORY, "Mitochondria is the powerhouse of the cell. Mitochondria is the powerhouse of the cell."]
    }

    fn s() -> SynthSettings {
        SynthSettings::default()
    }

    #[test]
    fn photosynthesis_yields_definition_card() {
        let cards = synthesize_flashcards(PHOTO, &s()).unwrap();
        let def = cards.iter().find(|c| c.kind == CardType::Definition).unwrap();
        assert_eq!(def.question, "What is Photosynthesis?");
        assert!(def.answer.starts_with("the process by which plants convert"));
    }

    #[test]
    fn photosynthesis_full_deck_in_generator_order() {
        let cards = synthesize_flashcards(PHOTO, &s()).unwrap();
        let kinds: Vec<CardType> = cards.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CardType::Definition,
                CardType::Concept,
                CardType::Concept,
                CardType::Concept,
                CardType::Concept,
                CardType::FillBlank,
                CardType::FillBlank,
                CardType::Comprehension,
            ]
        );
        assert_eq!(cards[1].question, "Explain the concept of \"process\".");
        assert_eq!(
            cards[5].question,
            "Fill in the blank: ______ is the process by which plants convert light energy into chemical energy"
        );
        assert_eq!(cards[6].answer, "process");
        assert_eq!(cards[6].category, "Science");
        assert_eq!(cards[7].question, "What are the key points about Photosynthesis?");
    }

    #[test]
    fn short_input_is_invalid() {
        assert!(matches!(
            synthesize_flashcards("Short note.", &s()),
            Err(SynthError::InvalidInput { min_chars: 20, .. })
        ));
        assert!(matches!(synthesize_flashcards("", &s()), Err(SynthError::InvalidInput { .. })));
    }

    #[test]
    fn lowercase_short_sentences_still_get_concept_cards() {
        let notes = "plants need sunlight and water to grow. roots absorb minerals from damp soil.";
        let cards = synthesize_flashcards(notes, &s()).unwrap();
        assert!(!cards.is_empty());
        assert!(cards.iter().all(|c| c.kind == CardType::Concept));
    }

    #[test]
    fn nothing_extractable_is_empty_result() {
        let notes = "aaaa bbbb cccc dddd eeee ffff gggg";
        assert_eq!(synthesize_flashcards(notes, &s()), Err(SynthError::EmptyResult));
    }

    #[test]
    fn cards_satisfy_record_invariants() {
        for notes in fixtures() {
            let cards = synthesize_flashcards(notes, &s()).unwrap();
            assert!(cards.len() <= s().max_cards);
            let mut ids = HashSet::new();
            for c in &cards {
                assert!(!c.question.trim().is_empty());
                assert!(!c.answer.trim().is_empty());
                assert!((1..=5).contains(&c.difficulty));
                assert!(ids.insert(c.id.clone()), "duplicate id {}", c.id);
            }
        }
    }

    #[test]
    fn questions_are_unique_case_insensitively() {
        for notes in fixtures() {
            let cards = synthesize_flashcards(notes, &s()).unwrap();
            let mut seen = HashSet::new();
            for c in &cards {
                assert!(seen.insert(c.question.trim().to_lowercase()), "repeated question {}", c.question);
            }
        }
    }

    #[test]
    fn repeated_definitions_collapse_to_first() {
        let notes = "Energy is the capacity to do work. Energy is measured in joules by physicists.";
        let cards = synthesize_flashcards(notes, &s()).unwrap();
        let defs: Vec<_> = cards.iter().filter(|c| c.kind == CardType::Definition).collect();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].answer, "the capacity to do work");
    }

    #[test]
    fn dedup_ignores_case_and_padding() {
        let card = |id: &str, q: &str| FlashcardDraft {
            id: id.into(),
            question: q.into(),
            answer: "a".into(),
            category: "General Knowledge".into(),
            difficulty: 1,
            kind: CardType::Concept,
        };
        let out = dedup_by_question(vec![card("a", "What is X?"), card("b", "  what is x?  "), card("c", "What is Y?")]);
        let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn deck_is_capped() {
        let cards = synthesize_flashcards(HISTORY, &s()).unwrap();
        assert!(cards.len() <= 12);

        let mut tight = s();
        tight.max_cards = 3;
        let cards = synthesize_flashcards(HISTORY, &tight).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].kind, CardType::Definition);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        for notes in fixtures() {
            assert_eq!(synthesize_flashcards(notes, &s()), synthesize_flashcards(notes, &s()));
        }
        let a = synthesize_with(HISTORY, &s(), &mut SeededPicker::new(9)).unwrap();
        let b = synthesize_with(HISTORY, &s(), &mut SeededPicker::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_random_policy_is_reproducible_through_settings() {
        let mut settings = s();
        settings.blank_policy = BlankPolicy::Random;
        settings.blank_seed = Some(1234);
        assert_eq!(synthesize_flashcards(HISTORY, &settings), synthesize_flashcards(HISTORY, &settings));
    }

    #[test]
    fn fill_blank_answer_restores_source_sentence() {
        let text = normalize(HISTORY, 20).unwrap();
        let sentences: Vec<String> = extract_sentences(&text, &s()).iter().map(|x| x.to_lowercase()).collect();
        for picker_seed in [1u64, 2, 3] {
            let cards = synthesize_with(HISTORY, &s(), &mut SeededPicker::new(picker_seed)).unwrap();
            let blanks: Vec<_> = cards.iter().filter(|c| c.kind == CardType::FillBlank).collect();
            assert!(!blanks.is_empty());
            for c in blanks {
                let body = c.question.strip_prefix(FILL_BLANK_PREFIX).unwrap();
                assert!(body.contains(BLANK_MARKER));
                assert!(!body.to_lowercase().split_whitespace().any(|w| w == c.answer.to_lowercase()));
                let restored = body.replace(BLANK_MARKER, &c.answer).to_lowercase();
                assert!(sentences.contains(&restored), "no source sentence for {restored}");
            }
        }
    }

    #[test]
    fn first_candidate_picker_matches_default_policy() {
        let a = synthesize_with(HISTORY, &s(), &mut FirstCandidate).unwrap();
        let b = synthesize_flashcards(HISTORY, &s()).unwrap();
        assert_eq!(a, b);
    }
}
