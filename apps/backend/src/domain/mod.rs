//! Domain layer: pure pool logic types and helpers.

pub mod claims;
pub mod game;
pub mod grid;
pub mod payout;
pub mod quarter;
pub mod resolution;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_claims;
#[cfg(test)]
mod tests_props_claims;
#[cfg(test)]
mod tests_props_resolution;
#[cfg(test)]
mod tests_resolution;

// Re-exports for ergonomics
pub use claims::{ClaimWrite, DesiredSquare};
pub use game::{Game, QuarterWinner, Score, Winner, NO_WINNER};
pub use grid::{initials_for, DigitMap, Square, SquareId, GRID_SIZE, TOTAL_SQUARES};
pub use payout::{scaled_prize, PrizeDistribution};
pub use quarter::Quarter;
pub use resolution::resolve_quarter;
