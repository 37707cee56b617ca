use std::io::{self, BufRead, Write};
use std::str::FromStr;

use runo::{
    card::{Card, CardColor, PlayedCard},
    constants::GAME_RULES,
    error::Result,
    player::Player,
    prompt::Prompter,
    turn::{GameOver, TurnEvent, TurnSummary},
};
use strum::IntoEnumIterator;

const HELP_FLAG: &str = "-h";

/// Line-based prompter. Typing `-h` at any prompt prints the rules.
pub struct TerminalPrompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> TerminalPrompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn read_player_names(&mut self) -> Result<Vec<String>> {
        loop {
            let line = self.ask("Enter player names separated by commas: ")?;
            let names = parse_player_names(&line);
            if !names.is_empty() {
                return Ok(names);
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
            }

            let line = line.trim();
            if line == HELP_FLAG {
                writeln!(self.output, "{GAME_RULES}")?;
                continue;
            }
            return Ok(line.to_string());
        }
    }
}

impl<I: BufRead, O: Write> Prompter for TerminalPrompter<I, O> {
    fn choose_card(&mut self, player: &Player, playable: &[Card]) -> Result<Card> {
        writeln!(self.output, "Playable cards:")?;
        for (i, card) in playable.iter().enumerate() {
            writeln!(self.output, "  {}) {card}", i + 1)?;
        }

        let question = format!("{}, choose a card to play: ", player.name());
        loop {
            let answer = self.ask(&question)?;
            if let Some(card) = parse_card_choice(&answer, playable, &player.hand) {
                return Ok(card);
            }
            writeln!(self.output, "Invalid choice. Please choose a playable card.")?;
        }
    }

    fn choose_color(&mut self, player: &Player) -> Result<CardColor> {
        let colors = CardColor::iter()
            .map(|color| color.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let question = format!("{}, choose a color ({colors}): ", player.name());
        loop {
            let answer = self.ask(&question)?;
            if let Ok(color) = CardColor::from_str(&answer) {
                return Ok(color);
            }
            writeln!(self.output, "Invalid color.")?;
        }
    }

    fn call_uno(&mut self, player: &Player) -> Result<bool> {
        let question = format!("{}, one card left! Type 'uno' to call it: ", player.name());
        let called = self.ask(&question)?.eq_ignore_ascii_case("uno");
        if called {
            writeln!(self.output, "{} successfully called UNO!", player.name())?;
        }
        Ok(called)
    }

    fn turn_started(&mut self, player: &Player, top_card: &PlayedCard) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}'s turn. Top card: {top_card}", player.name())?;
        writeln!(self.output, "Your hand: {}", join_cards(&player.hand))?;
        Ok(())
    }

    fn invalid_choice(&mut self, _player: &Player, card: &Card) -> Result<()> {
        writeln!(self.output, "{card} can't be played now. Please choose a playable card.")?;
        Ok(())
    }

    fn turn_ended(&mut self, summary: &TurnSummary) -> Result<()> {
        for event in &summary.events {
            writeln!(self.output, "{}", describe_event(&summary.player, event))?;
        }
        self.ask("Press Enter to end your turn and pass to the next player...")?;
        Ok(())
    }

    fn game_over(&mut self, result: &GameOver) -> Result<()> {
        writeln!(self.output, "{} has won the game!", result.winner)?;
        writeln!(self.output)?;
        writeln!(self.output, "Final Scores:")?;
        for score in &result.scores {
            writeln!(self.output, "{}: {} points", score.name, score.score)?;
        }
        Ok(())
    }
}

pub fn parse_player_names(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts a 1-based position in `playable` or the name of any card in `hand`.
fn parse_card_choice(answer: &str, playable: &[Card], hand: &[Card]) -> Option<Card> {
    if let Ok(position) = answer.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| playable.get(index))
            .cloned();
    }
    hand.iter()
        .find(|card| card.to_string().eq_ignore_ascii_case(answer))
        .cloned()
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_event(player: &str, event: &TurnEvent) -> String {
    match event {
        TurnEvent::UnoPenalty(cards) => format!(
            "{player} forgot to call UNO! Drew {} penalty cards.",
            cards.len()
        ),
        TurnEvent::DrewCard(_) => format!("{player} drew a card"),
        TurnEvent::Played(card) => format!("{player} played {card}"),
        TurnEvent::UnoCalled => format!("{player} called UNO"),
        TurnEvent::Reversed => "Turn order reversed".to_string(),
        TurnEvent::Skipped(skipped) => format!("{skipped} was skipped"),
        TurnEvent::DrewTwo(target) => format!("{target} draws two and is skipped"),
        TurnEvent::ColorDeclared(color) => format!("{player} changed color to {color}"),
        TurnEvent::DrewFour(target) => format!("{target} draws four and is skipped"),
        TurnEvent::Won => format!("{player} has no cards left"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use runo::card::ColoredCard;

    use super::*;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn red(number: u8) -> Card {
        Card::Colored(CardColor::Red, ColoredCard::Number(number))
    }

    #[test]
    fn player_names_are_trimmed() {
        assert_eq!(
            parse_player_names(" Ann, Ben ,,Cy "),
            vec!["Ann".to_string(), "Ben".to_string(), "Cy".to_string()]
        );
    }

    #[test]
    fn card_choice_by_position_or_name() {
        let playable = vec![red(1), Card::Wild];
        let hand = vec![red(1), Card::Wild, red(7)];

        assert_eq!(parse_card_choice("2", &playable, &hand), Some(Card::Wild));
        assert_eq!(parse_card_choice("red 7", &playable, &hand), Some(red(7)));
        assert_eq!(parse_card_choice("0", &playable, &hand), None);
        assert_eq!(parse_card_choice("3", &playable, &hand), None);
        assert_eq!(parse_card_choice("Blue 9", &playable, &hand), None);
    }

    #[test]
    fn choose_color_retries_until_valid() {
        let player = Player::new("Ann".to_string(), vec![]);
        let mut prompter = prompter("purple\n-h\nblue\n");

        assert_eq!(prompter.choose_color(&player).unwrap(), CardColor::Blue);

        let output = String::from_utf8(prompter.output).unwrap();
        assert!(output.contains("Invalid color."));
        assert!(output.contains("UNO Game Rules"));
    }

    #[test]
    fn call_uno_needs_the_word() {
        let player = Player::new("Ann".to_string(), vec![red(1)]);

        assert!(prompter("UNO\n").call_uno(&player).unwrap());
        assert!(!prompter("\n").call_uno(&player).unwrap());
    }

    #[test]
    fn closed_input_is_an_error() {
        let player = Player::new("Ann".to_string(), vec![red(1)]);
        assert!(prompter("").choose_card(&player, &[red(1)]).is_err());
    }
}
