//! DTOs for games_sea adapter.

/// DTO for creating a new game row.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub host_id: String,
    pub host_name: String,
    pub title: String,
    pub team1: String,
    pub team2: String,
    pub row_digits: String,
    pub col_digits: String,
    pub max_squares_per_user: i32,
    pub prize_q1: i64,
    pub prize_q2: i64,
    pub prize_q3: i64,
    pub prize_final: i64,
}

/// Field-level changes applied when a quarter result is recorded.
///
/// `completes` only ever sets `is_completed` to true, and `quarter` only
/// raises `current_quarter`; neither can move the game backwards.
#[derive(Debug, Clone, Copy)]
pub struct QuarterRecorded {
    pub game_id: i64,
    pub quarter: i16,
    pub completes: bool,
}
