//! Error taxonomy for the game.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A spawn template required by the game was not configured.
    MissingTemplate(&'static str),
    /// An operation was requested in a state that does not allow it.
    InvalidStateTransition(&'static str),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingTemplate(name) => write!(f, "missing spawn template `{name}`"),
            GameError::InvalidStateTransition(action) => {
                write!(f, "cannot {action} after the game is over")
            }
        }
    }
}

impl std::error::Error for GameError {}
