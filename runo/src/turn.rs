use crate::card::{Card, CardColor, PlayedCard};

/// Something that happened during a turn, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    UnoPenalty(Vec<Card>),
    DrewCard(Card),
    Played(Card),
    UnoCalled,
    Reversed,
    Skipped(String),
    DrewTwo(String),
    ColorDeclared(CardColor),
    DrewFour(String),
    Won,
}

/// What the player saw and did during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub player: String,
    pub top_card: PlayedCard,
    pub hand: Vec<Card>,
    pub playable: Vec<Card>,
    pub events: Vec<TurnEvent>,
}

impl TurnSummary {
    pub fn played_card(&self) -> Option<&Card> {
        self.events.iter().find_map(|event| match event {
            TurnEvent::Played(card) => Some(card),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub winner: String,
    pub scores: Vec<PlayerScore>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub summary: TurnSummary,
    pub game_over: Option<GameOver>,
}

impl PlayTurnResult {
    pub fn won(&self) -> bool {
        self.game_over.is_some()
    }
}
