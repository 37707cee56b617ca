use crate::card::{Card, PlayedCard};
use crate::error::{Result, UnoError};

#[derive(Debug)]
pub struct Player {
    name: String,
    pub hand: Vec<Card>,
    pub called_uno: bool,
}

impl Player {
    pub fn new(name: String, cards: Vec<Card>) -> Self {
        Self {
            name,
            hand: cards,
            called_uno: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn has_one_card(&self) -> bool {
        self.hand.len() == 1
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Removes exactly one card, even if the hand holds duplicates of it.
    pub fn remove_card(&mut self, index: usize) -> Result<Card> {
        if index >= self.hand.len() {
            return Err(UnoError::IllegalState(format!(
                "{} has no card at index {index}",
                self.name
            )));
        }
        Ok(self.hand.remove(index))
    }

    pub fn playable_cards(&self, top: &PlayedCard) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|card| card.is_playable_on(top))
            .cloned()
            .collect()
    }

    pub fn score(&self) -> u32 {
        self.hand.iter().map(Card::points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, ColoredCard};

    fn red(number: u8) -> Card {
        Card::Colored(CardColor::Red, ColoredCard::Number(number))
    }

    #[test]
    fn score_sums_card_points() {
        let player = Player::new(
            "Alice".to_string(),
            vec![
                red(5),
                Card::Wild,
                Card::Colored(CardColor::Blue, ColoredCard::Skip),
                Card::Colored(CardColor::Green, ColoredCard::Number(0)),
            ],
        );
        assert_eq!(player.score(), 75);
    }

    #[test]
    fn empty_hand_scores_zero_and_wins() {
        let player = Player::new("Bob".to_string(), vec![]);
        assert_eq!(player.score(), 0);
        assert!(player.has_won());
    }

    #[test]
    fn remove_card_removes_a_single_duplicate() {
        let mut player = Player::new("Alice".to_string(), vec![red(5), red(5), red(7)]);

        let index = player.card_index(&red(5)).unwrap();
        assert_eq!(player.remove_card(index).unwrap(), red(5));

        assert_eq!(player.hand, vec![red(5), red(7)]);
    }

    #[test]
    fn remove_card_out_of_range_is_illegal_state() {
        let mut player = Player::new("Alice".to_string(), vec![red(1)]);
        let error = player.remove_card(3).unwrap_err();
        assert!(matches!(error, UnoError::IllegalState(_)));
        assert_eq!(player.cards_count(), 1);
    }

    #[test]
    fn playable_cards_filters_hand() {
        let player = Player::new(
            "Alice".to_string(),
            vec![
                red(1),
                Card::Colored(CardColor::Blue, ColoredCard::Number(5)),
                Card::Colored(CardColor::Blue, ColoredCard::Number(6)),
                Card::WildDrawFour,
            ],
        );
        let top = PlayedCard::Colored(CardColor::Green, ColoredCard::Number(5));

        assert_eq!(
            player.playable_cards(&top),
            vec![
                Card::Colored(CardColor::Blue, ColoredCard::Number(5)),
                Card::WildDrawFour,
            ]
        );
    }
}
