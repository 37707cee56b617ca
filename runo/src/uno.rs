use std::collections::HashSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::card::{Card, PlayedCard, Rank};
use crate::constants::*;
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::player::Player;
use crate::prompt::Prompter;
use crate::turn::{GameOver, PlayTurnResult, PlayerScore, TurnEvent, TurnSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// +1 clockwise, -1 counter-clockwise.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

#[derive(Debug)]
pub struct Uno<R = ChaCha8Rng> {
    deck: Deck<R>,
    players: Vec<Player>,
    current_turn_player_index: usize,
    direction: Direction,
    last_played_card: PlayedCard,
    discard_pile: Vec<PlayedCard>,
    game_over: Option<GameOver>,
}

impl Uno<ChaCha8Rng> {
    pub fn new(player_names: Vec<String>) -> Result<Self> {
        Self::with_deck(player_names, Deck::from_entropy())
    }

    /// Same seed and names, same game.
    pub fn with_seed(player_names: Vec<String>, seed: u64) -> Result<Self> {
        Self::with_deck(player_names, Deck::from_seed(seed))
    }
}

impl<R: Rng> Uno<R> {
    /// Deals from `deck` as is; it is not shuffled again.
    pub fn with_deck(player_names: Vec<String>, mut deck: Deck<R>) -> Result<Self> {
        if player_names.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        let mut seen = HashSet::with_capacity(player_names.len());
        for name in &player_names {
            if !seen.insert(name.as_str()) {
                return Err(UnoError::DuplicatePlayerName(name.clone()));
            }
        }

        let players = player_names
            .into_iter()
            .map(|name| {
                let cards = deck.draw_multiple(HAND_SIZE);
                Player::new(name, cards)
            })
            .collect::<Vec<_>>();

        let last_played_card = Self::draw_starting_card(&mut deck);

        info!(
            players = players.len(),
            top_card = %last_played_card,
            "starting a new game"
        );

        Ok(Uno {
            deck,
            players,
            current_turn_player_index: 0,
            direction: Direction::Clockwise,
            last_played_card,
            discard_pile: Vec::new(),
            game_over: None,
        })
    }

    /// Wild cards go back to the bottom of the deck until a colored card turns up.
    fn draw_starting_card(deck: &mut Deck<R>) -> PlayedCard {
        loop {
            let card = deck.draw_card();
            if !card.is_wild() {
                return card.into_played_card();
            }
            debug!(card = %card, "wild starting card returned to the deck");
            deck.put_on_bottom(card);
        }
    }

    /// Plays turns until somebody empties their hand.
    pub fn run(&mut self, prompter: &mut impl Prompter) -> Result<GameOver> {
        loop {
            if let Some(game_over) = self.play_turn(prompter)?.game_over {
                return Ok(game_over);
            }
        }
    }

    pub fn play_turn(&mut self, prompter: &mut impl Prompter) -> Result<PlayTurnResult> {
        if self.game_over.is_some() {
            return Err(UnoError::GameAlreadyOver);
        }

        let player_index = self.current_turn_player_index;
        let top_card = self.last_played_card.clone();
        let mut events = Vec::new();

        prompter.turn_started(&self.players[player_index], &top_card)?;

        let player = &self.players[player_index];
        if player.has_one_card() && !player.called_uno {
            let penalty = self.draw_cards_to_player(player_index, UNO_PENALTY_CARDS);
            events.push(TurnEvent::UnoPenalty(penalty));
        }
        self.players[player_index].called_uno = false;

        let hand = self.players[player_index].hand.clone();
        let playable = self.players[player_index].playable_cards(&top_card);

        if playable.is_empty() {
            let mut drawn = self.draw_cards_to_player(player_index, 1);
            events.extend(drawn.pop().map(TurnEvent::DrewCard));
        } else {
            let card = self.choose_playable_card(prompter, player_index, &playable)?;
            let player = &mut self.players[player_index];
            let hand_index = player.card_index(&card).ok_or_else(|| {
                UnoError::IllegalState(format!(
                    "{card} is playable but not in {}'s hand",
                    player.name()
                ))
            })?;
            let card = player.remove_card(hand_index)?;

            let previous =
                std::mem::replace(&mut self.last_played_card, card.clone().into_played_card());
            self.discard_pile.push(previous);
            events.push(TurnEvent::Played(card.clone()));

            let player = &self.players[player_index];
            if player.has_one_card() && prompter.call_uno(player)? {
                self.players[player_index].called_uno = true;
                events.push(TurnEvent::UnoCalled);
            }

            if self.players[player_index].has_won() {
                events.push(TurnEvent::Won);
                let summary = self.summarize(player_index, top_card, hand, playable, events);
                let game_over = GameOver {
                    winner: summary.player.clone(),
                    scores: self.final_scores(),
                };
                info!(winner = %game_over.winner, "game over");
                self.game_over = Some(game_over.clone());
                prompter.game_over(&game_over)?;
                return Ok(PlayTurnResult {
                    summary,
                    game_over: Some(game_over),
                });
            }

            self.apply_card_effect(prompter, player_index, &card, &mut events)?;
        }

        self.move_turn_n_players_ahead(1);

        let summary = self.summarize(player_index, top_card, hand, playable, events);
        debug!(player = %summary.player, events = ?summary.events, "turn finished");
        prompter.turn_ended(&summary)?;

        Ok(PlayTurnResult {
            summary,
            game_over: None,
        })
    }

    fn choose_playable_card(
        &self,
        prompter: &mut impl Prompter,
        player_index: usize,
        playable: &[Card],
    ) -> Result<Card> {
        let player = &self.players[player_index];
        loop {
            let card = prompter.choose_card(player, playable)?;
            if playable.contains(&card) {
                return Ok(card);
            }
            warn!(player = %player.name(), card = %card, "rejected a card outside the legal set");
            prompter.invalid_choice(player, &card)?;
        }
    }

    fn apply_card_effect(
        &mut self,
        prompter: &mut impl Prompter,
        player_index: usize,
        card: &Card,
        events: &mut Vec<TurnEvent>,
    ) -> Result<()> {
        match card.rank() {
            Rank::Reverse => {
                self.direction = self.direction.reversed();
                events.push(TurnEvent::Reversed);
            }
            Rank::Skip => {
                self.move_turn_n_players_ahead(1);
                events.push(TurnEvent::Skipped(self.current_player_name()));
            }
            Rank::DrawTwo => {
                self.move_turn_n_players_ahead(1);
                self.draw_cards_to_player(self.current_turn_player_index, DRAW_TWO_CARDS);
                events.push(TurnEvent::DrewTwo(self.current_player_name()));
            }
            Rank::Wild | Rank::WildDrawFour => {
                let color = prompter.choose_color(&self.players[player_index])?;
                self.last_played_card.declare_color(color);
                events.push(TurnEvent::ColorDeclared(color));

                if card.rank() == Rank::WildDrawFour {
                    self.move_turn_n_players_ahead(1);
                    self.draw_cards_to_player(
                        self.current_turn_player_index,
                        WILD_DRAW_FOUR_CARDS,
                    );
                    events.push(TurnEvent::DrewFour(self.current_player_name()));
                }
            }
            Rank::Number(_) => {}
        }
        Ok(())
    }

    fn summarize(
        &self,
        player_index: usize,
        top_card: PlayedCard,
        hand: Vec<Card>,
        playable: Vec<Card>,
        events: Vec<TurnEvent>,
    ) -> TurnSummary {
        TurnSummary {
            player: self.players[player_index].name().to_string(),
            top_card,
            hand,
            playable,
            events,
        }
    }

    fn draw_cards_to_player(&mut self, player_index: usize, count: usize) -> Vec<Card> {
        let cards = self.deck.draw_multiple(count);
        self.players[player_index].add_cards(cards.iter().cloned());
        cards
    }

    fn current_player_name(&self) -> String {
        self.players[self.current_turn_player_index].name().to_string()
    }

    /// Every player's hand value, winner included.
    pub fn final_scores(&self) -> Vec<PlayerScore> {
        self.players
            .iter()
            .map(|player| PlayerScore {
                name: player.name().to_string(),
                score: player.score(),
            })
            .collect()
    }

    pub fn get_players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn get_current_turn_player_index(&self) -> usize {
        self.current_turn_player_index
    }

    pub fn get_current_turn_player(&self) -> &Player {
        &self.players[self.current_turn_player_index]
    }

    pub fn get_next_turn_player_index(&self) -> usize {
        self.get_nth_turn_player_index(1)
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn get_last_played_card(&self) -> &PlayedCard {
        &self.last_played_card
    }

    /// Cards beneath the top card, oldest first.
    pub fn get_discard_pile(&self) -> &[PlayedCard] {
        &self.discard_pile
    }

    pub fn get_deck(&self) -> &Deck<R> {
        &self.deck
    }

    pub fn get_game_over(&self) -> Option<&GameOver> {
        self.game_over.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    fn get_nth_turn_player_index(&self, n: usize) -> usize {
        let count = self.players.len() as isize;
        let offset = self.direction.step() * n as isize;
        (self.current_turn_player_index as isize + offset).rem_euclid(count) as usize
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        self.current_turn_player_index = self.get_nth_turn_player_index(n);
    }
}
