use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredCard {
    pub fn into_played_card(self, color: CardColor) -> PlayedCard {
        PlayedCard::Colored(color, self)
    }

    fn rank(&self) -> Rank {
        match self {
            ColoredCard::Number(number) => Rank::Number(*number),
            ColoredCard::Skip => Rank::Skip,
            ColoredCard::Reverse => Rank::Reverse,
            ColoredCard::DrawTwo => Rank::DrawTwo,
        }
    }
}

/// The face value of a card, independent of its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub fn is_wild(&self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// Points a card of this rank is worth when left in a hand at game end.
    pub fn points(&self) -> u32 {
        match self {
            Rank::Number(number) => u32::from(*number),
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => ACTION_CARD_POINTS,
            Rank::Wild | Rank::WildDrawFour => WILD_CARD_POINTS,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(number) => write!(f, "{number}"),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
            Rank::Wild => write!(f, "Wild"),
            Rank::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

impl Card {
    /// Wild cards have no color until they are played.
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    pub fn rank(&self) -> Rank {
        match self {
            Card::Colored(_, card) => card.rank(),
            Card::Wild => Rank::Wild,
            Card::WildDrawFour => Rank::WildDrawFour,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.rank().is_wild()
    }

    /// A card can go on top of `top` if the colors match, the ranks match, or it is wild.
    pub fn is_playable_on(&self, top: &PlayedCard) -> bool {
        let same_color = matches!((self.color(), top.color()), (Some(a), Some(b)) if a == b);
        same_color || self.rank() == top.rank() || self.is_wild()
    }

    pub fn points(&self) -> u32 {
        self.rank().points()
    }

    /// Wild cards land on the discard pile without a declared color.
    pub fn into_played_card(self) -> PlayedCard {
        match self {
            Card::Colored(color, card) => card.into_played_card(color),
            Card::Wild => PlayedCard::Wild(None),
            Card::WildDrawFour => PlayedCard::WildDrawFour(None),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => write!(f, "{} {}", color, card.rank()),
            Card::Wild | Card::WildDrawFour => write!(f, "{}", self.rank()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(Option<CardColor>),
    WildDrawFour(Option<CardColor>),
}

impl PlayedCard {
    /// The effective color: a wild's declared color overrides its colorless rank.
    pub fn color(&self) -> Option<CardColor> {
        match self {
            PlayedCard::Colored(color, _) => Some(*color),
            PlayedCard::Wild(color) | PlayedCard::WildDrawFour(color) => *color,
        }
    }

    pub fn rank(&self) -> Rank {
        match self {
            PlayedCard::Colored(_, card) => card.rank(),
            PlayedCard::Wild(_) => Rank::Wild,
            PlayedCard::WildDrawFour(_) => Rank::WildDrawFour,
        }
    }

    /// Returns false for colored cards, whose color can't be overwritten.
    pub fn declare_color(&mut self, new_color: CardColor) -> bool {
        match self {
            PlayedCard::Wild(color) | PlayedCard::WildDrawFour(color) => {
                *color = Some(new_color);
                true
            }
            PlayedCard::Colored(..) => false,
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.color()) {
            (PlayedCard::Colored(color, card), _) => write!(f, "{} {}", color, card.rank()),
            (_, Some(color)) => write!(f, "{} {}", color, self.rank()),
            (_, None) => write!(f, "{}", self.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn return_correct_string_for_number_card() {
        let red_3 = Card::Colored(CardColor::Red, ColoredCard::Number(3));
        assert_eq!(red_3.to_string(), "Red 3");

        let blue_9 = Card::Colored(CardColor::Blue, ColoredCard::Number(9));
        assert_eq!(blue_9.to_string(), "Blue 9");
    }

    #[test]
    fn return_correct_string_for_action_cards() {
        let yellow_skip = Card::Colored(CardColor::Yellow, ColoredCard::Skip);
        assert_eq!(yellow_skip.to_string(), "Yellow Skip");

        let red_reverse = Card::Colored(CardColor::Red, ColoredCard::Reverse);
        assert_eq!(red_reverse.to_string(), "Red Reverse");

        let blue_draw = Card::Colored(CardColor::Blue, ColoredCard::DrawTwo);
        assert_eq!(blue_draw.to_string(), "Blue Draw Two");
    }

    #[test]
    fn return_correct_string_for_wild_cards() {
        assert_eq!(Card::Wild.to_string(), "Wild");
        assert_eq!(Card::WildDrawFour.to_string(), "Wild Draw Four");
    }

    #[test]
    fn played_wild_shows_declared_color() {
        let mut played = Card::WildDrawFour.into_played_card();
        assert_eq!(played.to_string(), "Wild Draw Four");

        assert!(played.declare_color(CardColor::Green));
        assert_eq!(played.to_string(), "Green Wild Draw Four");
        assert_eq!(played.color(), Some(CardColor::Green));
        assert_eq!(played.rank(), Rank::WildDrawFour);
    }

    #[test]
    fn colored_played_card_keeps_its_color() {
        let mut played = Card::Colored(CardColor::Red, ColoredCard::Skip).into_played_card();
        assert!(!played.declare_color(CardColor::Blue));
        assert_eq!(played.color(), Some(CardColor::Red));
    }

    #[test]
    fn playable_when_colors_match() {
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5));
        let card = Card::Colored(CardColor::Red, ColoredCard::Skip);
        assert!(card.is_playable_on(&top));
    }

    #[test]
    fn playable_when_ranks_match() {
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5));
        let card = Card::Colored(CardColor::Blue, ColoredCard::Number(5));
        assert!(card.is_playable_on(&top));

        let top = PlayedCard::Colored(CardColor::Green, ColoredCard::DrawTwo);
        let card = Card::Colored(CardColor::Yellow, ColoredCard::DrawTwo);
        assert!(card.is_playable_on(&top));
    }

    #[test]
    fn wild_is_always_playable() {
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5));
        assert!(Card::Wild.is_playable_on(&top));
        assert!(Card::WildDrawFour.is_playable_on(&top));
    }

    #[test]
    fn not_playable_without_a_match() {
        let top = PlayedCard::Colored(CardColor::Red, ColoredCard::Number(5));
        let card = Card::Colored(CardColor::Blue, ColoredCard::Number(7));
        assert!(!card.is_playable_on(&top));
    }

    #[test]
    fn declared_wild_color_is_matched() {
        let top = PlayedCard::Wild(Some(CardColor::Yellow));
        assert!(Card::Colored(CardColor::Yellow, ColoredCard::Number(2)).is_playable_on(&top));
        assert!(!Card::Colored(CardColor::Blue, ColoredCard::Number(2)).is_playable_on(&top));
    }

    #[test]
    fn card_points() {
        assert_eq!(Card::Colored(CardColor::Red, ColoredCard::Number(5)).points(), 5);
        assert_eq!(Card::Colored(CardColor::Green, ColoredCard::Number(0)).points(), 0);
        assert_eq!(Card::Colored(CardColor::Blue, ColoredCard::Skip).points(), 20);
        assert_eq!(Card::Colored(CardColor::Blue, ColoredCard::Reverse).points(), 20);
        assert_eq!(Card::Colored(CardColor::Blue, ColoredCard::DrawTwo).points(), 20);
        assert_eq!(Card::Wild.points(), 50);
        assert_eq!(Card::WildDrawFour.points(), 50);
    }

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!(CardColor::from_str("red").unwrap(), CardColor::Red);
        assert_eq!(CardColor::from_str("YELLOW").unwrap(), CardColor::Yellow);
        assert!(CardColor::from_str("purple").is_err());
    }
}
