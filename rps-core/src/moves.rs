use crate::{GameError, Outcome, OutcomeTable, Result};
use std::collections::HashMap;

/// Smallest playable move list
pub const MIN_MOVES: usize = 3;

/// Ordered, duplicate-free, odd-length list of move labels.
///
/// Each move beats the `half_span` moves that follow it (wrapping around the
/// end of the list) and loses to the `half_span` moves that precede it.
#[derive(Debug, Clone)]
pub struct MoveSet {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
    half_span: usize,
}

impl MoveSet {
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(GameError::TooFewMoves(labels.len()));
        }

        if labels.len() % 2 == 0 {
            return Err(GameError::EvenMoveCount(labels.len()));
        }

        let mut positions = HashMap::with_capacity(labels.len());
        for (position, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(GameError::EmptyLabel(position + 1));
            }
            if positions.insert(label.clone(), position).is_some() {
                return Err(GameError::DuplicateMove(label.clone()));
            }
        }

        let half_span = labels.len() / 2;
        tracing::debug!("Move set of {} moves, half span {}", labels.len(), half_span);

        Ok(Self {
            labels,
            positions,
            half_span,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn half_span(&self) -> usize {
        self.half_span
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label for a 1-based menu index
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    /// Zero-based position of a label
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// (1-based index, label) pairs in menu order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (i + 1, label.as_str()))
    }

    /// Outcome of `first` played against `second`
    pub fn outcome(&self, first: &str, second: &str) -> Result<Outcome> {
        let i = self
            .position(first)
            .ok_or_else(|| GameError::UnknownMove(first.to_string()))?;
        let j = self
            .position(second)
            .ok_or_else(|| GameError::UnknownMove(second.to_string()))?;

        Ok(self.outcome_at(i, j))
    }

    /// Outcome by zero-based position. Panics if either position is out of range.
    pub fn outcome_at(&self, i: usize, j: usize) -> Outcome {
        assert!(
            i < self.len() && j < self.len(),
            "move position out of range: ({}, {}) for {} moves",
            i,
            j,
            self.len()
        );

        let h = self.half_span;
        if i == j {
            Outcome::Draw
        } else if (i < j && j - i <= h) || (i > j && i - j > h) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// Full pairwise table, row move against column move
    pub fn outcome_table(&self) -> OutcomeTable {
        let n = self.len();
        let rows = (0..n)
            .map(|i| (0..n).map(|j| self.outcome_at(i, j)).collect())
            .collect();

        OutcomeTable::new(self.labels.clone(), rows)
    }
}
