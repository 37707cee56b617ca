use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
};

/// The draw pile. The top of the pile is the end of the vector.
#[derive(Debug)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Deck<R> {
    /// A full, shuffled deck.
    pub fn new(rng: R) -> Self {
        let mut deck = Self::from_cards(Self::standard_cards(), rng);
        deck.shuffle();
        deck
    }

    /// A deck drawn in exactly the given order, first element first.
    /// Once it runs out it refills from `rng` like any other deck.
    pub fn from_cards(mut cards: Vec<Card>, rng: R) -> Self {
        cards.reverse();
        Self { cards, rng }
    }

    pub fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::DrawTwo));
            }

            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        cards
    }

    pub(crate) fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Never fails: an empty pile is replaced by a freshly shuffled full deck.
    pub fn draw_card(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            debug!("draw pile is empty, refilling with a fresh deck");
            self.cards = Self::standard_cards();
            self.shuffle();
        }
    }

    pub fn draw_multiple(&mut self, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.draw_card()).collect()
    }

    pub fn put_on_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    pub fn cards_count(&self) -> usize {
        self.cards.len()
    }
}
