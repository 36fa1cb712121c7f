//! Mail delivery through HTTP endpoints that accept the JSON payloads of
//! [`PlayerInvitation`] and [`WinnerNotification`].

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::{Notifier, NotifyError, PlayerInvitation, WinnerNotification};
use crate::config::app::NotifyConfig;
use crate::logging::pii::Redacted;

pub struct HttpNotifier {
    client: reqwest::Client,
    invite_endpoint: Option<String>,
    winner_endpoint: Option<String>,
}

impl HttpNotifier {
    pub fn new(config: &NotifyConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            invite_endpoint: config.invite_endpoint.clone(),
            winner_endpoint: config.winner_endpoint.clone(),
        })
    }

    async fn post<T: Serialize + Sync>(&self, url: &str, payload: &T) -> Result<(), NotifyError> {
        let response = self.client.post(url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::HttpStatus(status.as_u16()));
        }
        debug!(url, status = status.as_u16(), "Mail endpoint accepted message");
        Ok(())
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send_invitation(&self, invitation: &PlayerInvitation) -> Result<(), NotifyError> {
        let url = self
            .invite_endpoint
            .as_deref()
            .ok_or(NotifyError::Disabled("invitation"))?;
        debug!(recipient = %Redacted(&invitation.player_email), "Sending invitation");
        self.post(url, invitation).await
    }

    async fn send_winner(&self, notification: &WinnerNotification) -> Result<(), NotifyError> {
        let url = self
            .winner_endpoint
            .as_deref()
            .ok_or(NotifyError::Disabled("winner"))?;
        debug!(
            recipient = %Redacted(&notification.winner_email),
            quarter = %notification.quarter,
            "Sending winner notification"
        );
        self.post(url, notification).await
    }
}
