use crate::card::{Card, CardColor, PlayedCard};
use crate::error::Result;
use crate::player::Player;
use crate::turn::{GameOver, TurnSummary};

/// Everything the engine needs from whoever is sitting at the table.
///
/// The engine blocks on each call. A card outside `playable` is rejected
/// with [`Prompter::invalid_choice`] and asked for again.
pub trait Prompter {
    fn choose_card(&mut self, player: &Player, playable: &[Card]) -> Result<Card>;

    fn choose_color(&mut self, player: &Player) -> Result<CardColor>;

    /// Only asked right after `player` goes down to one card.
    fn call_uno(&mut self, player: &Player) -> Result<bool>;

    fn turn_started(&mut self, _player: &Player, _top_card: &PlayedCard) -> Result<()> {
        Ok(())
    }

    fn invalid_choice(&mut self, _player: &Player, _card: &Card) -> Result<()> {
        Ok(())
    }

    fn turn_ended(&mut self, _summary: &TurnSummary) -> Result<()> {
        Ok(())
    }

    fn game_over(&mut self, _result: &GameOver) -> Result<()> {
        Ok(())
    }
}
