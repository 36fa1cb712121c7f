//! Adapters for external dependencies.

pub mod games_sea;
pub mod quarter_results_sea;
pub mod squares_sea;
pub mod user_codes_sea;
