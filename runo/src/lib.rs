pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod player;
pub mod prompt;
pub mod turn;
pub mod uno;
