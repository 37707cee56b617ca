use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Player name `{0}` is taken")]
    DuplicatePlayerName(String),
    #[error("The game is already over")]
    GameAlreadyOver,
    /// An engine invariant was broken. Not expected in normal play.
    #[error("Illegal state: {0}")]
    IllegalState(String),
    #[error("Prompt failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
