//! Generalized rock-paper-scissors against the computer
//!
//! Any odd number (at least 3) of distinct moves forms a cycle where each move
//! beats the next half of the cycle and loses to the rest. The computer commits
//! to its move with an HMAC-SHA256 tag before the human picks, and reveals the
//! key afterwards so the tag can be checked.

pub mod commitment;
pub mod error;
pub mod game;
pub mod moves;
pub mod outcome;

pub use commitment::{
    compute_tag, generate_key, verify_tag, Commitment, CommitmentScheme, HmacCommitment, HmacKey,
};
pub use error::{GameError, Result};
pub use game::{Round, RoundResult, RoundState};
pub use moves::{MoveSet, MIN_MOVES};
pub use outcome::{Outcome, OutcomeTable};

/// Validate the move list and commit to a computer move
pub fn start_round<I, S>(labels: I) -> Result<Round>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Round::new(MoveSet::new(labels)?)
}
