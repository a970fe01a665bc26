use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of comparing two moves, from the first move's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same comparison seen from the other side
    pub fn reverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    /// Sentence shown to the human player
    pub fn verdict(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a draw!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        };
        f.write_str(s)
    }
}

/// Pairwise outcome matrix for a move set.
///
/// Row `i` column `j` holds the outcome of move `i` played against move `j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTable {
    labels: Vec<String>,
    rows: Vec<Vec<Outcome>>,
}

impl OutcomeTable {
    pub(crate) fn new(labels: Vec<String>, rows: Vec<Vec<Outcome>>) -> Self {
        Self { labels, rows }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<Outcome>] {
        &self.rows
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Outcome> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

// Tab separated, header row starts with "Move"
impl fmt::Display for OutcomeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move")?;
        for label in &self.labels {
            write!(f, "\t{}", label)?;
        }
        writeln!(f)?;

        for (label, row) in self.labels.iter().zip(&self.rows) {
            write!(f, "{}", label)?;
            for outcome in row {
                write!(f, "\t{}", outcome)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
