// Proptest generators for pool domain types.

use proptest::prelude::*;

use crate::domain::grid::{DigitMap, GRID_SIZE};
use crate::domain::Quarter;

pub fn quarter() -> impl Strategy<Value = Quarter> {
    prop_oneof![
        Just(Quarter::Q1),
        Just(Quarter::Q2),
        Just(Quarter::Q3),
        Just(Quarter::Final),
    ]
}

/// A shuffled permutation of 0-9.
pub fn digit_map() -> impl Strategy<Value = DigitMap> {
    Just((0..10u8).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|v| {
            let mut digits = [0u8; GRID_SIZE as usize];
            digits.copy_from_slice(&v);
            DigitMap::from_digits(digits).unwrap()
        })
}

/// Realistic football-ish score.
pub fn team_score() -> impl Strategy<Value = u16> {
    0u16..80
}

/// Which squares are sold, as a 100-entry mask.
pub fn sold_mask() -> impl Strategy<Value = Vec<bool>> {
    proptest::collection::vec(any::<bool>(), 100)
}
