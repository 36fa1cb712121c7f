use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::grid::{DigitMap, Square, SquareId};
use super::payout::PrizeDistribution;
use super::quarter::Quarter;

/// Stored winner name when the winning square was not sold.
pub const NO_WINNER: &str = "No Winner (Square not sold)";

/// A reported score for one checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub quarter: Quarter,
    pub team1: u16,
    pub team2: u16,
}

impl Score {
    pub fn new(quarter: Quarter, team1: u16, team2: u16) -> Self {
        Self {
            quarter,
            team1,
            team2,
        }
    }

    /// Last digit of each team's score, `(team1, team2)`.
    pub fn last_digits(&self) -> (u8, u8) {
        ((self.team1 % 10) as u8, (self.team2 % 10) as u8)
    }
}

/// Who takes the prize for a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    Player(String),
    /// The winning coordinates landed on an unsold square.
    NoWinner,
}

impl Winner {
    pub fn name(&self) -> &str {
        match self {
            Winner::Player(name) => name,
            Winner::NoWinner => NO_WINNER,
        }
    }

    pub fn player(&self) -> Option<&str> {
        match self {
            Winner::Player(name) => Some(name),
            Winner::NoWinner => None,
        }
    }

    pub fn from_stored(name: Option<String>) -> Self {
        match name {
            Some(n) if n != NO_WINNER && !n.trim().is_empty() => Winner::Player(n),
            _ => Winner::NoWinner,
        }
    }
}

impl Serialize for Winner {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Winner {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Winner::from_stored(Some(String::deserialize(deserializer)?)))
    }
}

/// Outcome of one checkpoint. Carries no timestamps so that resolving the
/// same score twice yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterWinner {
    pub quarter: Quarter,
    pub team1_score: u16,
    pub team2_score: u16,
    pub winning_square_id: Option<SquareId>,
    #[serde(rename = "winnerName")]
    pub winner: Winner,
    pub prize_cents: i64,
}

impl QuarterWinner {
    pub fn score(&self) -> Score {
        Score::new(self.quarter, self.team1_score, self.team2_score)
    }
}

/// Full view of a pool, as assembled from the games, squares and
/// quarter_results tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub host_id: String,
    pub host_name: String,
    pub title: String,
    pub team1: String,
    pub team2: String,
    pub squares: Vec<Square>,
    /// Team 1 digits, one per row.
    pub row_numbers: DigitMap,
    /// Team 2 digits, one per column.
    pub col_numbers: DigitMap,
    pub is_active: bool,
    pub is_locked: bool,
    pub is_completed: bool,
    pub current_quarter: Quarter,
    pub max_squares_per_user: u32,
    pub prizes: PrizeDistribution,
    pub scores: Vec<Score>,
    pub quarter_winners: Vec<QuarterWinner>,
    pub version: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Game {
    pub fn square_at(&self, id: SquareId) -> Option<&Square> {
        self.squares.iter().find(|s| s.id == id)
    }

    pub fn squares_sold(&self) -> u32 {
        self.squares.iter().filter(|s| s.claimed).count() as u32
    }

    pub fn squares_owned_by(&self, owner: &str) -> u32 {
        self.squares
            .iter()
            .filter(|s| s.owner() == Some(owner))
            .count() as u32
    }

    pub fn winner_for(&self, quarter: Quarter) -> Option<&QuarterWinner> {
        self.quarter_winners.iter().find(|w| w.quarter == quarter)
    }

    /// Total paid out so far across reported checkpoints.
    pub fn prizes_awarded(&self) -> i64 {
        self.quarter_winners.iter().map(|w| w.prize_cents).sum()
    }
}
