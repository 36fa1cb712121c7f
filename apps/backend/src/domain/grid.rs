use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// Rows and columns per board.
pub const GRID_SIZE: u8 = 10;
/// Squares per board.
pub const TOTAL_SQUARES: u32 = (GRID_SIZE as u32) * (GRID_SIZE as u32);

/// Coordinates of a square, rendered as `"{row}-{col}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareId {
    pub row: u8,
    pub col: u8,
}

impl SquareId {
    pub fn new(row: u8, col: u8) -> Result<Self, DomainError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidSquare,
                format!("Square {row}-{col} is outside the 10x10 grid"),
            ));
        }
        Ok(Self { row, col })
    }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for SquareId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            DomainError::validation(ValidationKind::InvalidSquare, format!("Invalid square id: {s}"))
        };
        let (row, col) = s.split_once('-').ok_or_else(invalid)?;
        let row: u8 = row.trim().parse().map_err(|_| invalid())?;
        let col: u8 = col.trim().parse().map_err(|_| invalid())?;
        SquareId::new(row, col)
    }
}

impl Serialize for SquareId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SquareId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One cell of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Square {
    pub id: SquareId,
    pub row: u8,
    pub col: u8,
    pub claimed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_initials: Option<String>,
}

impl Square {
    pub fn unclaimed(id: SquareId) -> Self {
        Self {
            id,
            row: id.row,
            col: id.col,
            claimed: false,
            owner_name: None,
            owner_initials: None,
        }
    }

    /// Owner of a claimed square. Unclaimed squares have no owner even if a
    /// stale name is still attached.
    pub fn owner(&self) -> Option<&str> {
        if self.claimed {
            self.owner_name.as_deref()
        } else {
            None
        }
    }
}

/// Builds the 100 unclaimed squares of a fresh board in row-major order.
pub fn empty_board() -> Vec<Square> {
    (0..GRID_SIZE)
        .flat_map(|row| (0..GRID_SIZE).map(move |col| Square::unclaimed(SquareId { row, col })))
        .collect()
}

/// First letter of each whitespace-separated word, uppercased.
pub fn initials_for(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Digits printed along one edge of the board; position `i` holds the digit
/// assigned to row (or column) `i`.
///
/// A well-formed map is a permutation of 0-9. Maps loaded from storage are
/// not repaired when they are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitMap([u8; GRID_SIZE as usize]);

impl DigitMap {
    pub fn from_digits(digits: [u8; GRID_SIZE as usize]) -> Result<Self, DomainError> {
        if let Some(bad) = digits.iter().find(|d| **d > 9) {
            return Err(DomainError::validation_other(format!(
                "Digit map entries must be 0-9, got {bad}"
            )));
        }
        Ok(Self(digits))
    }

    /// Fresh random permutation of 0-9.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(rng);
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; GRID_SIZE as usize] {
        &self.0
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; GRID_SIZE as usize];
        for d in self.0 {
            let slot = &mut seen[d as usize];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Position of `digit` on this edge; the first match wins when the map
    /// holds duplicates.
    pub fn position_of(&self, digit: u8) -> Option<u8> {
        self.0
            .iter()
            .position(|d| *d == digit)
            .and_then(|i| u8::try_from(i).ok())
    }

    /// Storage form: ten ASCII digits, e.g. `"3917046285"`.
    pub fn to_db_string(&self) -> String {
        self.0.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Parses the storage form. Anything other than exactly ten digits means
    /// the row is corrupted.
    pub fn from_db_str(raw: &str) -> Result<Self, DomainError> {
        let corrupted = || {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Stored digit map is malformed: {raw:?}"),
            )
        };
        let bytes = raw.as_bytes();
        if bytes.len() != GRID_SIZE as usize {
            return Err(corrupted());
        }
        let mut digits = [0u8; GRID_SIZE as usize];
        for (slot, b) in digits.iter_mut().zip(bytes) {
            if !b.is_ascii_digit() {
                return Err(corrupted());
            }
            *slot = b - b'0';
        }
        // Non-permutations load as-is; resolution reports them.
        Ok(Self(digits))
    }
}
