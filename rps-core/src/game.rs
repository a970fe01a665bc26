use crate::commitment::{self, Commitment, CommitmentScheme, HmacCommitment, HmacKey};
use crate::{GameError, MoveSet, Outcome, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Round state against the computer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Computer move chosen and committed, waiting for the human
    Committed,
    Revealed { outcome: Outcome },
}

/// A single round: the computer commits first, the human picks, then the key is revealed
#[derive(Debug)]
pub struct Round {
    id: Uuid,
    moves: MoveSet,
    computer_index: usize,
    key: HmacKey,
    commitment: Commitment,
    state: RoundState,
}

impl Round {
    pub fn new(moves: MoveSet) -> Result<Self> {
        Self::with_rng(moves, &mut rand::thread_rng())
    }

    /// Computer move drawn from `rng`. The key always comes from the OS RNG.
    pub fn with_rng<R: Rng>(moves: MoveSet, rng: &mut R) -> Result<Self> {
        let computer_index = rng.gen_range(1..=moves.len());
        let computer_move = moves
            .get(computer_index)
            .ok_or_else(|| GameError::InvalidState("computer move out of range".to_string()))?;

        let key = commitment::generate_key();
        let commitment = HmacCommitment::commit(&key, computer_move.as_bytes())?;

        let round = Self {
            id: Uuid::new_v4(),
            moves,
            computer_index,
            key,
            commitment,
            state: RoundState::Committed,
        };

        tracing::info!(
            "Round {} committed to a move out of {}",
            round.id,
            round.moves.len()
        );
        Ok(round)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Tag to show before asking for the human's move
    pub fn commitment_tag(&self) -> String {
        self.commitment.tag_hex()
    }

    /// Lock in the human's move (1-based) and reveal the computer's move and key
    pub fn play(&mut self, user_index: usize) -> Result<RoundResult> {
        if !matches!(self.state, RoundState::Committed) {
            return Err(GameError::InvalidState(
                "Round already revealed".to_string(),
            ));
        }

        let max = self.moves.len();
        let user_move = self
            .moves
            .get(user_index)
            .ok_or(GameError::SelectionOutOfRange {
                index: user_index,
                max,
            })?
            .to_string();
        let computer_move = self
            .moves
            .get(self.computer_index)
            .ok_or_else(|| GameError::InvalidState("computer move out of range".to_string()))?
            .to_string();

        let outcome = self.moves.outcome_at(user_index - 1, self.computer_index - 1);
        self.state = RoundState::Revealed { outcome };

        tracing::info!(
            "Round {} revealed: {} vs {} -> {}",
            self.id,
            user_move,
            computer_move,
            outcome
        );

        Ok(RoundResult {
            id: self.id,
            user_move,
            computer_move,
            outcome,
            hmac: self.commitment.tag_hex(),
            key: self.key.to_hex(),
            committed_at: self.commitment.committed_at,
        })
    }
}

/// Everything needed to display a finished round and check it afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub id: Uuid,
    pub user_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub hmac: String,
    pub key: String,
    pub committed_at: DateTime<Utc>,
}

impl RoundResult {
    /// Recompute the tag from the revealed key and the computer's move
    pub fn verify(&self) -> bool {
        match HmacKey::from_hex(&self.key) {
            Ok(key) => commitment::verify_tag(&key, &self.computer_move, &self.hmac),
            Err(_) => false,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
