//! Deck helpers over a generated card list: category listing, filtering and
//! shuffling. The caller owns the deck; nothing here keeps state between calls.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::FlashcardDraft;

/// Filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Distinct categories in first-seen order.
pub fn categories(cards: &[FlashcardDraft]) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();
  for c in cards {
    if !out.iter().any(|x| x == &c.category) {
      out.push(c.category.clone());
    }
  }
  out
}

/// Cards whose category equals `category` (case-insensitive).
/// `None`, an empty string or `"all"` keeps the whole deck.
pub fn filter_by_category<'a>(cards: &'a [FlashcardDraft], category: Option<&str>) -> Vec<&'a FlashcardDraft> {
  match category.map(str::trim) {
    None => cards.iter().collect(),
    Some(c) if c.is_empty() || c.eq_ignore_ascii_case(ALL_CATEGORIES) => cards.iter().collect(),
    Some(c) => cards.iter().filter(|card| card.category.eq_ignore_ascii_case(c)).collect(),
  }
}

/// Reorder the deck in place. Same rng state, same order.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [FlashcardDraft], rng: &mut R) {
  cards.shuffle(rng);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::CardType;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn card(id: &str, category: &str) -> FlashcardDraft {
    FlashcardDraft {
      id: id.into(),
      question: format!("Q {id}"),
      answer: format!("A {id}"),
      category: category.into(),
      difficulty: 2,
      kind: CardType::Concept,
    }
  }

  #[test]
  fn lists_categories_once_in_order() {
    let deck = vec![card("1", "Science"), card("2", "History"), card("3", "Science")];
    assert_eq!(categories(&deck), vec!["Science", "History"]);
    assert!(categories(&[]).is_empty());
  }

  #[test]
  fn filters_by_label() {
    let deck = vec![card("1", "Science"), card("2", "History"), card("3", "Science")];
    let ids: Vec<&str> = filter_by_category(&deck, Some("science")).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(filter_by_category(&deck, Some("All")).len(), 3);
    assert_eq!(filter_by_category(&deck, None).len(), 3);
    assert!(filter_by_category(&deck, Some("Medicine")).is_empty());
  }

  #[test]
  fn seeded_shuffle_is_a_reproducible_permutation() {
    let deck: Vec<FlashcardDraft> = (0..10).map(|i| card(&i.to_string(), "Science")).collect();

    let mut a = deck.clone();
    let mut b = deck.clone();
    shuffle(&mut a, &mut StdRng::seed_from_u64(42));
    shuffle(&mut b, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
    assert_ne!(a, deck);

    let mut ids: Vec<String> = a.iter().map(|c| c.id.clone()).collect();
    ids.sort();
    let mut expected: Vec<String> = deck.iter().map(|c| c.id.clone()).collect();
    expected.sort();
    assert_eq!(ids, expected);
  }

  #[test]
  fn shuffling_tiny_decks_is_harmless() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut empty: Vec<FlashcardDraft> = Vec::new();
    shuffle(&mut empty, &mut rng);
    assert!(empty.is_empty());

    let mut one = vec![card("only", "History")];
    shuffle(&mut one, &mut rng);
    assert_eq!(one[0].id, "only");
  }
}
