use crate::game::card::Card;
use rand::prelude::*;
use rand::Rng;

/// A card deck drawn uniformly with replacement.
///
/// Besides its actionable `cards` a deck holds `blanks` cards with no effect on
/// movement, which fixes the draw probability of each actionable card at
/// `1 / (cards.len() + blanks)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deck {
    pub(crate) cards: &'static [Card],
    pub(crate) blanks: usize,
}

impl Deck {
    pub const fn new(cards: &'static [Card], blanks: usize) -> Deck {
        Deck { cards, blanks }
    }

    /// Get the actionable cards of the deck
    pub fn cards(&self) -> &[Card] {
        self.cards
    }

    /// Number of draw slots, blanks included
    pub fn len(&self) -> usize {
        self.cards.len() + self.blanks
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Card in draw slot `slot`; slots past the actionable cards are blanks.
    pub fn card_at(&self, slot: usize) -> Card {
        self.cards.get(slot).copied().unwrap_or(Card::NoOp)
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Card {
        if self.is_empty() {
            return Card::NoOp;
        }
        self.card_at(rng.random_range(0..self.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    static SAMPLE: [Card; 2] = [Card::ReleaseToken, Card::AdvanceTo(5)];

    #[test]
    fn test_slots_past_cards_are_blank() {
        let deck = Deck::new(&SAMPLE, 3);
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.card_at(0), Card::ReleaseToken);
        assert_eq!(deck.card_at(1), Card::AdvanceTo(5));
        for slot in 2..5 {
            assert_eq!(deck.card_at(slot), Card::NoOp);
        }
    }

    #[test]
    fn test_empty_deck_draws_noop() {
        let deck = Deck::new(&[], 0);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(&mut rng), Card::NoOp);
    }

    #[test]
    fn test_draw_frequencies_follow_blanks() {
        let deck = Deck::new(&SAMPLE, 2);
        let mut rng = StdRng::seed_from_u64(2025);
        let draws = 40_000;
        let blanks = (0..draws)
            .filter(|_| deck.draw(&mut rng) == Card::NoOp)
            .count();

        // 2 blank slots out of 4
        let ratio = blanks as f64 / draws as f64;
        assert!(
            (ratio - 0.5).abs() < 0.02,
            "Expected about half of the draws to be blank, got {:.3}",
            ratio
        );
    }
}
