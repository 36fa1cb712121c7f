//! Score reconciliation: turns a reported score into the quarter's winner and
//! prize, persists it, and tells the winner.

use tracing::{debug, info, warn};

use crate::db::txn::with_txn;
use crate::domain::{resolve_quarter, Game, Quarter, QuarterWinner, Score};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::notify::WinnerNotification;
use crate::repos::{games, quarter_results, user_codes};
use crate::state::app_state::AppState;

/// Result of [`report_score`].
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub game: Game,
    pub winner: QuarterWinner,
    pub is_game_complete: bool,
    /// `None` after the final score.
    pub next_quarter: Option<Quarter>,
}

/// Records the score for one quarter and resolves its winner.
///
/// Reporting the same quarter again replaces that quarter's result and leaves
/// the other quarters alone. The winner notification is sent after commit and
/// its failure never fails the report.
pub async fn report_score(
    state: &AppState,
    game_id: i64,
    score: Score,
) -> Result<ScoreReport, AppError> {
    let (game, winner) = with_txn(state, move |txn| {
        Box::pin(async move {
            let game = games::require_game(txn, game_id).await?;
            let resolved = resolve_quarter(&game, score);
            let winner = quarter_results::upsert(txn, game_id, &resolved).await?;
            let game = games::record_quarter(txn, game_id, score.quarter).await?;
            Ok((game, winner))
        })
    })
    .await?;

    info!(
        game_id,
        quarter = %score.quarter,
        team1 = score.team1,
        team2 = score.team2,
        winner = winner.winner.name(),
        prize_cents = winner.prize_cents,
        version = game.version,
        "Quarter resolved"
    );

    notify_winner(state, &game, &winner).await;
    state.hub().publish(game.clone());

    Ok(ScoreReport {
        is_game_complete: game.is_completed,
        next_quarter: score.quarter.next(),
        winner,
        game,
    })
}

/// Best-effort winner email. Every failure is logged and swallowed.
async fn notify_winner(state: &AppState, game: &Game, winner: &QuarterWinner) {
    let Some(player) = winner.winner.player() else {
        debug!(game_id = game.id, quarter = %winner.quarter, "No winner to notify");
        return;
    };

    let email = match state.db() {
        Some(db) => user_codes::contact_email(db, game.id, player).await,
        None => return,
    };
    let email = match email {
        Ok(Some(email)) => email,
        Ok(None) => {
            debug!(game_id = game.id, winner = player, "Winner has no email on file");
            return;
        }
        Err(err) => {
            warn!(game_id = game.id, error = %err, "Winner email lookup failed");
            return;
        }
    };

    let notification = WinnerNotification {
        game_title: game.title.clone(),
        quarter: winner.quarter,
        winner_name: player.to_owned(),
        winner_email: email,
        prize_amount: winner.prize_cents as f64 / 100.0,
        prize_cents: winner.prize_cents,
        team1: game.team1.clone(),
        team2: game.team2.clone(),
        team1_score: winner.team1_score,
        team2_score: winner.team2_score,
    };

    match state.notifier.send_winner(&notification).await {
        Ok(()) => info!(
            game_id = game.id,
            quarter = %winner.quarter,
            to = %Redacted(&notification.winner_email),
            "Winner notified"
        ),
        Err(err) => warn!(
            game_id = game.id,
            quarter = %winner.quarter,
            error = %err,
            "Winner notification failed"
        ),
    }
}
