use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// One of the four scoring checkpoints.
///
/// `Final` is the final score of the game, overtime included; there is no
/// separate 4th-quarter-only checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Final,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Final];

    pub const fn number(self) -> u8 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Final => 4,
        }
    }

    /// The checkpoint after this one, `None` after the final score.
    pub const fn next(self) -> Option<Quarter> {
        match self {
            Quarter::Q1 => Some(Quarter::Q2),
            Quarter::Q2 => Some(Quarter::Q3),
            Quarter::Q3 => Some(Quarter::Final),
            Quarter::Final => None,
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Quarter::Final)
    }

    /// Human label used in notifications ("Quarter 2", "Final Score").
    pub fn label(self) -> String {
        match self {
            Quarter::Final => "Final Score".to_string(),
            q => format!("Quarter {}", q.number()),
        }
    }
}

impl TryFrom<u8> for Quarter {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Quarter::Q1),
            2 => Ok(Quarter::Q2),
            3 => Ok(Quarter::Q3),
            4 => Ok(Quarter::Final),
            other => Err(DomainError::validation(
                ValidationKind::InvalidQuarter,
                format!("Quarter must be between 1 and 4, got {other}"),
            )),
        }
    }
}

impl TryFrom<i16> for Quarter {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        let narrowed = u8::try_from(value).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidQuarter,
                format!("Quarter must be between 1 and 4, got {value}"),
            )
        })?;
        Quarter::try_from(narrowed)
    }
}

impl From<Quarter> for u8 {
    fn from(q: Quarter) -> Self {
        q.number()
    }
}

impl From<Quarter> for i16 {
    fn from(q: Quarter) -> Self {
        i16::from(q.number())
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}
