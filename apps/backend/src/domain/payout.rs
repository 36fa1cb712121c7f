use serde::{Deserialize, Serialize};

use super::grid::TOTAL_SQUARES;
use super::quarter::Quarter;
use crate::errors::domain::{DomainError, ValidationKind};

/// Default payout per checkpoint: $25.00, for a $100 pool.
pub const DEFAULT_QUARTER_PRIZE_CENTS: i64 = 2_500;

/// Upper bound for a single checkpoint payout: $1,000,000,000.00.
pub const MAX_QUARTER_PRIZE_CENTS: i64 = 100_000_000_000;

/// Configured payout of each checkpoint, in cents, assuming a sold-out board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeDistribution {
    pub q1: i64,
    pub q2: i64,
    pub q3: i64,
    #[serde(rename = "final")]
    pub final_score: i64,
}

impl Default for PrizeDistribution {
    fn default() -> Self {
        Self {
            q1: DEFAULT_QUARTER_PRIZE_CENTS,
            q2: DEFAULT_QUARTER_PRIZE_CENTS,
            q3: DEFAULT_QUARTER_PRIZE_CENTS,
            final_score: DEFAULT_QUARTER_PRIZE_CENTS,
        }
    }
}

impl PrizeDistribution {
    pub fn amount_for(&self, quarter: Quarter) -> i64 {
        match quarter {
            Quarter::Q1 => self.q1,
            Quarter::Q2 => self.q2,
            Quarter::Q3 => self.q3,
            Quarter::Final => self.final_score,
        }
    }

    pub fn total(&self) -> i64 {
        Quarter::ALL.iter().map(|q| self.amount_for(*q)).sum()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for q in Quarter::ALL {
            let amount = self.amount_for(q);
            if amount < 0 {
                return Err(DomainError::validation(
                    ValidationKind::InvalidPrizeDistribution,
                    format!("Prize for {} cannot be negative", q.label()),
                ));
            }
            if amount > MAX_QUARTER_PRIZE_CENTS {
                return Err(DomainError::validation(
                    ValidationKind::InvalidPrizeDistribution,
                    format!(
                        "Prize for {} cannot exceed {MAX_QUARTER_PRIZE_CENTS} cents",
                        q.label()
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Prize actually paid for a checkpoint: the configured amount scaled by the
/// fraction of the board that was sold, floored to the cent.
///
/// The result never exceeds `configured_cents`, so narrowing back is lossless.
pub fn scaled_prize(configured_cents: i64, squares_sold: u32) -> i64 {
    let sold = i128::from(squares_sold.min(TOTAL_SQUARES));
    let scaled = i128::from(configured_cents) * sold / i128::from(TOTAL_SQUARES);
    i64::try_from(scaled).unwrap_or(configured_cents)
}
