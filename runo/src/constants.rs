use strum::EnumCount;

use crate::card::CardColor;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: u8 = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: u8 = 2;
pub(crate) const DRAW_TWO_CARDS_PER_COLOR: u8 = 2;

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT) as u8;
pub(crate) const SKIP_CARDS_IN_DECK: u8 = SKIP_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub(crate) const REVERSE_CARDS_IN_DECK: u8 = REVERSE_CARDS_PER_COLOR * CardColor::COUNT as u8;
pub(crate) const DRAW_TWO_CARDS_IN_DECK: u8 = DRAW_TWO_CARDS_PER_COLOR * CardColor::COUNT as u8;

pub const WILD_CARDS_IN_DECK: u8 = 4;
pub const WILD_DRAW_FOUR_CARDS_IN_DECK: u8 = 4;

pub const TOTAL_CARDS_IN_DECK: u8 = NUMBER_CARDS_IN_DECK
    + SKIP_CARDS_IN_DECK
    + REVERSE_CARDS_IN_DECK
    + DRAW_TWO_CARDS_IN_DECK
    + WILD_CARDS_IN_DECK
    + WILD_DRAW_FOUR_CARDS_IN_DECK;

pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

pub const UNO_PENALTY_CARDS: usize = 2;
pub const DRAW_TWO_CARDS: usize = 2;
pub const WILD_DRAW_FOUR_CARDS: usize = 4;

pub(crate) const ACTION_CARD_POINTS: u32 = 20;
pub(crate) const WILD_CARD_POINTS: u32 = 50;

pub const GAME_RULES: &str = "\
UNO Game Rules:
1. Players take turns matching a card from their hand with the card on top of the discard pile.
2. A match is made by color or by number/symbol.
3. Special cards (Reverse, Skip, Draw Two, Wild, Wild Draw Four) have special actions.
4. If a player cannot match the top card, they must draw a card from the deck.
5. The first player to get rid of all their cards wins the round.
6. If you have one card left, you must call 'UNO' or draw two penalty cards.
7. Type '-h' at any prompt to view these rules.
";
