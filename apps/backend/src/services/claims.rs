//! Square claim submission.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::db::txn::with_txn;
use crate::domain::claims::{
    check_allowance, claiming_owners, find_conflicts, new_claims, validate_submission, ClaimWrite,
};
use crate::domain::{DesiredSquare, Game, SquareId};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::{games, squares, user_codes};
use crate::state::app_state::AppState;

/// Result of [`submit_claims`].
#[derive(Debug, Clone)]
pub struct ClaimOutcome {
    pub game: Game,
    /// Squares this submission newly claimed; empty for a no-op resubmission.
    pub claimed: Vec<SquareId>,
}

/// Applies a whole-board submission.
///
/// Either every new claim is written or none is: a square held by another
/// owner, at check time or at write time, rejects the submission with the
/// offending square ids.
pub async fn submit_claims(
    state: &AppState,
    game_id: i64,
    desired: Vec<DesiredSquare>,
) -> Result<ClaimOutcome, AppError> {
    validate_submission(&desired)?;

    let outcome = with_txn(state, move |txn| {
        Box::pin(async move {
            let game = games::require_game(txn, game_id).await?;
            if game.is_locked {
                return Err(DomainError::conflict(
                    ConflictKind::GameLocked,
                    "The host has locked square selection",
                )
                .into());
            }

            let conflicts = find_conflicts(&game.squares, &desired);
            if !conflicts.is_empty() {
                return Err(DomainError::squares_taken(
                    conflicts.iter().map(SquareId::to_string).collect(),
                )
                .into());
            }

            let writes = new_claims(&game.squares, &desired)?;
            if writes.is_empty() {
                return Ok(ClaimOutcome {
                    game,
                    claimed: Vec::new(),
                });
            }

            let mut allowances = HashMap::new();
            for owner in claiming_owners(&writes) {
                if let Some(allowed) = user_codes::redeemed_allowance(txn, game_id, &owner).await? {
                    allowances.insert(owner, allowed);
                }
            }
            check_allowance(&game.squares, &writes, &allowances, game.max_squares_per_user)?;

            write_claims(txn, game_id, &writes).await?;

            let game = games::touch_game(txn, game_id).await?;
            Ok(ClaimOutcome {
                game,
                claimed: writes.into_iter().map(|w| w.id).collect(),
            })
        })
    })
    .await?;

    if !outcome.claimed.is_empty() {
        info!(
            game_id,
            claimed = outcome.claimed.len(),
            sold = outcome.game.squares_sold(),
            version = outcome.game.version,
            "Squares claimed"
        );
        state.hub().publish(outcome.game.clone());
    }
    Ok(outcome)
}

/// Compare-and-swap every write. Any square already held fails the whole
/// batch with the lost ids; the caller's transaction must roll back the
/// writes that did land.
pub async fn write_claims<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    writes: &[ClaimWrite],
) -> Result<(), DomainError> {
    let mut lost = Vec::new();
    for write in writes {
        if !squares::claim_if_available(conn, game_id, write).await? {
            lost.push(write.id.to_string());
        }
    }
    if !lost.is_empty() {
        return Err(DomainError::squares_taken(lost));
    }
    Ok(())
}
