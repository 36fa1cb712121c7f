//! Pre-filled `mailto:` drafts handed back to the host when a message could
//! not be delivered.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use super::{format_dollars, PlayerInvitation, WinnerNotification};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn invitation(inv: &PlayerInvitation) -> Self {
        let subject = format!("You're invited to join {} - Football Squares", inv.game_title);
        let body = format!(
            "Hi {player},\n\n\
             {host} has invited you to join their Football Squares game: \"{title}\"\n\n\
             Your join code is: {code}\n\n\
             Click here to join the game: {url}\n\n\
             How to play:\n\
             1. Click the link above or go to the game website\n\
             2. Enter your join code: {code}\n\
             3. Select your squares on the grid\n\
             4. Watch the game and see if you win!\n\n\
             Winners are determined by the last digit of each team's score at the end of each quarter. \
             There is no separate 4th quarter score: the final score is used, including overtime.\n\n\
             Good luck!\n\n\
             Game hosted by {host}",
            player = inv.player_name,
            host = inv.host_name,
            title = inv.game_title,
            code = inv.join_code,
            url = inv.game_url,
        );
        Self {
            to: inv.player_email.clone(),
            subject,
            body,
        }
    }

    pub fn winner(n: &WinnerNotification) -> Self {
        let label = n.quarter.label();
        let subject = format!("You won {label} in {}!", n.game_title);
        let body = format!(
            "Congratulations {winner}!\n\n\
             You won {label} in {title}.\n\n\
             Score: {team1} {s1} - {team2} {s2}\n\
             Winning numbers: {d1} & {d2}\n\
             Your prize: {prize}\n\n\
             Contact the game host to collect your winnings.",
            winner = n.winner_name,
            title = n.game_title,
            team1 = n.team1,
            team2 = n.team2,
            s1 = n.team1_score,
            s2 = n.team2_score,
            d1 = n.team1_score % 10,
            d2 = n.team2_score % 10,
            prize = format_dollars(n.prize_cents),
        );
        Self {
            to: n.winner_email.clone(),
            subject,
            body,
        }
    }

    /// `mailto:{to}?subject=...&body=...` with both parameters percent-encoded.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            utf8_percent_encode(&self.subject, COMPONENT),
            utf8_percent_encode(&self.body, COMPONENT)
        )
    }
}
