//! Validation of a batch of square claims against the persisted board.
//!
//! A submission is the caller's whole desired board. Only the squares it
//! marks as claimed matter; squares it marks unclaimed never release an
//! existing claim.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;

use super::grid::{initials_for, Square, SquareId};
use crate::errors::domain::{DomainError, ValidationKind};

/// One entry of a submitted board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredSquare {
    pub id: SquareId,
    pub claimed: bool,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_initials: Option<String>,
}

impl DesiredSquare {
    fn claimed_owner(&self) -> Option<&str> {
        if self.claimed {
            self.owner_name.as_deref().map(str::trim)
        } else {
            None
        }
    }
}

/// A square that changes from unclaimed to claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimWrite {
    pub id: SquareId,
    pub owner_name: String,
    pub owner_initials: String,
}

/// Rejects claimed entries without an owner and squares listed twice.
pub fn validate_submission(desired: &[DesiredSquare]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for d in desired {
        if !seen.insert(d.id) {
            return Err(DomainError::validation(
                ValidationKind::InvalidSquare,
                format!("Square {} is listed more than once", d.id),
            ));
        }
        if d.claimed && !matches!(d.claimed_owner(), Some(owner) if !owner.is_empty()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidSquare,
                format!("Claimed square {} needs an owner name", d.id),
            ));
        }
    }
    Ok(())
}

/// Squares the submission claims that are already held by a different owner,
/// in submission order.
pub fn find_conflicts(current: &[Square], desired: &[DesiredSquare]) -> Vec<SquareId> {
    let by_id: HashMap<SquareId, &Square> = current.iter().map(|s| (s.id, s)).collect();
    desired
        .iter()
        .filter_map(|d| {
            let wanted = d.claimed_owner()?;
            let held_by = by_id.get(&d.id).and_then(|s| s.owner())?;
            (held_by != wanted).then_some(d.id)
        })
        .collect()
}

/// Claims the submission adds. Squares already held by the same owner are
/// left out, so resubmitting one's own squares writes nothing.
///
/// Call after [`find_conflicts`] came back empty.
pub fn new_claims(
    current: &[Square],
    desired: &[DesiredSquare],
) -> Result<Vec<ClaimWrite>, DomainError> {
    let by_id: HashMap<SquareId, &Square> = current.iter().map(|s| (s.id, s)).collect();
    let mut writes = Vec::new();
    for d in desired {
        let Some(owner) = d.claimed_owner() else {
            continue;
        };
        let square = by_id.get(&d.id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidSquare,
                format!("Square {} does not exist on this board", d.id),
            )
        })?;
        if square.claimed {
            continue;
        }
        let owner_initials = d
            .owner_initials
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| initials_for(owner));
        writes.push(ClaimWrite {
            id: d.id,
            owner_name: owner.to_owned(),
            owner_initials,
        });
    }
    Ok(writes)
}

/// Distinct owners gaining at least one square.
pub fn claiming_owners(writes: &[ClaimWrite]) -> Vec<String> {
    let mut owners: Vec<String> = writes.iter().map(|w| w.owner_name.clone()).collect();
    owners.sort();
    owners.dedup();
    owners
}

/// Checks that no owner ends up holding more squares than allowed.
///
/// `allowances` maps an owner to the allowance of their redeemed join code;
/// owners without one fall back to `default_allowance`.
pub fn check_allowance(
    current: &[Square],
    writes: &[ClaimWrite],
    allowances: &HashMap<String, u32>,
    default_allowance: u32,
) -> Result<(), DomainError> {
    let mut gained: BTreeMap<&str, u32> = BTreeMap::new();
    for w in writes {
        *gained.entry(w.owner_name.as_str()).or_default() += 1;
    }

    for (owner, added) in gained {
        let held = current.iter().filter(|s| s.owner() == Some(owner)).count() as u32;
        let allowed = allowances.get(owner).copied().unwrap_or(default_allowance);
        if held + added > allowed {
            return Err(DomainError::validation(
                ValidationKind::SquareLimitExceeded,
                format!(
                    "{owner} may hold at most {allowed} squares, this would make {}",
                    held + added
                ),
            ));
        }
    }
    Ok(())
}
