//! Outbound player notifications: invitations and winner announcements.
//!
//! Delivery goes through the [`Notifier`] seam. Failures surface as
//! [`NotifyError`] and callers treat them as best-effort.

pub mod draft;
pub mod http;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::Quarter;

pub use draft::MailDraft;
pub use http::HttpNotifier;

/// Invitation to join a game with a join code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInvitation {
    pub player_name: String,
    pub player_email: String,
    pub game_title: String,
    pub host_name: String,
    pub join_code: String,
    pub game_url: String,
}

/// Announcement to the owner of a winning square.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerNotification {
    pub game_title: String,
    pub quarter: Quarter,
    pub winner_name: String,
    pub winner_email: String,
    /// Dollars, as the mail endpoint expects.
    pub prize_amount: f64,
    pub prize_cents: i64,
    pub team1: String,
    pub team2: String,
    pub team1_score: u16,
    pub team2_score: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// No endpoint configured for this kind of message.
    #[error("{0} notifications are disabled")]
    Disabled(&'static str),

    /// Network, DNS or timeout failure.
    #[error("mail endpoint request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("mail endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_invitation(&self, invitation: &PlayerInvitation) -> Result<(), NotifyError>;

    async fn send_winner(&self, notification: &WinnerNotification) -> Result<(), NotifyError>;
}

/// Notifier that drops every message; used when no endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send_invitation(&self, _invitation: &PlayerInvitation) -> Result<(), NotifyError> {
        Err(NotifyError::Disabled("invitation"))
    }

    async fn send_winner(&self, _notification: &WinnerNotification) -> Result<(), NotifyError> {
        Err(NotifyError::Disabled("winner"))
    }
}

/// Invitation link: `{base}?gameId={id}&code={code}`.
pub fn invitation_url(public_base_url: &str, game_id: i64, code: &str) -> String {
    format!("{public_base_url}?gameId={game_id}&code={code}")
}

/// Cents rendered as `$12.50`.
pub fn format_dollars(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}
