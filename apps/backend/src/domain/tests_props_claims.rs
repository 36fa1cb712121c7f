//! Property tests for claim validation (pure domain, no DB).
//!
//! Properties tested:
//! - A conflict is reported exactly for squares held by a different owner
//! - Writes never target a square that is already claimed

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::claims::{find_conflicts, new_claims};
use crate::domain::fixtures::{claim, empty_game};
use crate::domain::{test_prelude, DesiredSquare};

const OWNERS: [&str; 3] = ["Alice", "Bob", "Carol"];

fn owner_slots() -> impl Strategy<Value = Vec<Option<usize>>> {
    proptest::collection::vec(proptest::option::of(0usize..OWNERS.len()), 100)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_conflicts_are_exactly_foreign_claims(
        held in owner_slots(),
        wanted in owner_slots(),
    ) {
        let mut game = empty_game();
        let ids: Vec<_> = game.squares.iter().map(|s| s.id).collect();
        for (id, owner) in ids.iter().zip(&held) {
            if let Some(o) = owner {
                claim(&mut game, *id, OWNERS[*o]);
            }
        }
        let desired: Vec<DesiredSquare> = ids
            .iter()
            .zip(&wanted)
            .map(|(id, owner)| DesiredSquare {
                id: *id,
                claimed: owner.is_some(),
                owner_name: owner.map(|o| OWNERS[o].to_string()),
                owner_initials: None,
            })
            .collect();

        let conflicts: HashSet<_> = find_conflicts(&game.squares, &desired).into_iter().collect();
        for (i, id) in ids.iter().enumerate() {
            let expected = matches!((held[i], wanted[i]), (Some(h), Some(w)) if h != w);
            prop_assert_eq!(conflicts.contains(id), expected);
        }

        if conflicts.is_empty() {
            let writes = new_claims(&game.squares, &desired).unwrap();
            for w in writes {
                let idx = (w.id.row as usize) * 10 + w.id.col as usize;
                prop_assert!(held[idx].is_none());
            }
        }
    }
}
