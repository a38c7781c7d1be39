use rand::Rng;
use rand::seq::SliceRandom;

use crate::cards::{Card, Rank, Suit};
use crate::error::EquityError;

/// The cards not yet assigned to any hand or the board.
///
/// A `Deck` is never mutated in place: removing cards yields a new deck and
/// sampling only reads it, so every trial draws from the same pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// All 52 cards, suit-major.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns a deck without `known`. Fails on the first card that is not
    /// present, which also catches a card listed twice.
    pub fn remove_known<'a, I>(&self, known: I) -> Result<Deck, EquityError>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut cards = self.cards.clone();
        for card in known {
            let position = cards
                .iter()
                .position(|c| c == card)
                .ok_or_else(|| EquityError::DuplicateOrUnknownCard(card.to_string()))?;
            cards.swap_remove(position);
        }
        Ok(Deck { cards })
    }

    /// Draws `count` distinct cards uniformly at random.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<Card>, EquityError> {
        if count > self.cards.len() {
            return Err(EquityError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.choose_multiple(rng, count).copied().collect())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn card(token: &str) -> Card {
        token.parse().unwrap()
    }

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(deck.len(), Deck::SIZE);
        assert_eq!(unique.len(), Deck::SIZE);
        assert_eq!(deck.cards()[0], card("2c"));
        assert_eq!(Deck::standard(), deck);
    }

    #[test]
    fn remove_known_returns_a_new_deck() {
        let deck = Deck::standard();
        let known = [card("Ah"), card("Kd")];
        let remaining = deck.remove_known(&known).unwrap();
        assert_eq!(remaining.len(), 50);
        assert!(!remaining.contains(&known[0]));
        assert!(!remaining.contains(&known[1]));
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn remove_known_rejects_repeated_card() {
        let deck = Deck::standard();
        let known = [card("Ah"), card("Kd"), card("Ah")];
        assert_eq!(
            deck.remove_known(&known),
            Err(EquityError::DuplicateOrUnknownCard("Ah".into()))
        );
    }

    #[test]
    fn sample_draws_distinct_cards_from_the_pool() {
        let deck = Deck::standard()
            .remove_known(&[card("Ah"), card("Ad")])
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let drawn = deck.sample(&mut rng, 5).unwrap();
            let unique: HashSet<Card> = drawn.iter().copied().collect();
            assert_eq!(unique.len(), 5);
            assert!(drawn.iter().all(|c| deck.contains(c)));
        }
        assert_eq!(deck.len(), 50);
    }

    #[test]
    fn sample_fails_when_pool_is_too_small() {
        let all = Deck::standard();
        let deck = all.remove_known(&all.cards()[..49]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            deck.sample(&mut rng, 5),
            Err(EquityError::InsufficientCards {
                requested: 5,
                remaining: 3
            })
        );
        assert_eq!(deck.sample(&mut rng, 3).unwrap().len(), 3);
    }
}
