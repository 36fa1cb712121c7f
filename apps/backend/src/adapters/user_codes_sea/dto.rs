//! DTOs for user_codes_sea adapter.

/// DTO for creating a join code.
#[derive(Debug, Clone)]
pub struct UserCodeCreate {
    pub game_id: i64,
    /// Already uppercased.
    pub code: String,
    pub squares_allowed: i32,
    pub player_name: Option<String>,
    pub player_email: Option<String>,
}

/// Partial update of a join code's metadata. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserCodeUpdate {
    pub id: i64,
    pub player_name: Option<String>,
    pub player_email: Option<String>,
    pub squares_allowed: Option<i32>,
}

impl UserCodeUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.player_name.is_none() && self.player_email.is_none() && self.squares_allowed.is_none()
    }
}
