use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Too few moves: need at least 3, got {0}")]
    TooFewMoves(usize),

    #[error("Even number of moves: got {0}, need an odd count")]
    EvenMoveCount(usize),

    #[error("Duplicate move: {0}")]
    DuplicateMove(String),

    #[error("Empty move label at position {0}")]
    EmptyLabel(usize),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Selection out of range: {index} (valid: 1..={max})")]
    SelectionOutOfRange { index: usize, max: usize },

    #[error("Invalid round state: {0}")]
    InvalidState(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameError {
    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    pub fn crypto(msg: impl Into<String>) -> Self {
        Self::Crypto(msg.into())
    }

    /// Errors raised while validating the move list. No round is played.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::TooFewMoves(_) | Self::EvenMoveCount(_) | Self::DuplicateMove(_) | Self::EmptyLabel(_)
        )
    }
}
