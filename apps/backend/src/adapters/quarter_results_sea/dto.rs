//! DTOs for quarter_results_sea adapter.

/// Full replacement of one `(game_id, quarter)` result.
#[derive(Debug, Clone)]
pub struct QuarterResultUpsert {
    pub game_id: i64,
    pub quarter: i16,
    pub team1_score: i32,
    pub team2_score: i32,
    pub winning_square_id: Option<String>,
    pub winner_name: Option<String>,
    pub prize_cents: i64,
}
