use std::collections::HashMap;

use crate::domain::claims::{
    check_allowance, claiming_owners, find_conflicts, new_claims, validate_submission,
};
use crate::domain::fixtures::{claim, empty_game, sq};
use crate::domain::{DesiredSquare, SquareId};
use crate::errors::domain::{DomainError, ValidationKind};

fn want(id: SquareId, owner: &str) -> DesiredSquare {
    DesiredSquare {
        id,
        claimed: true,
        owner_name: Some(owner.to_string()),
        owner_initials: None,
    }
}

fn open(id: SquareId) -> DesiredSquare {
    DesiredSquare {
        id,
        claimed: false,
        owner_name: None,
        owner_initials: None,
    }
}

#[test]
fn conflicts_name_every_square_held_by_someone_else() {
    let mut game = empty_game();
    claim(&mut game, sq(0, 0), "Bob");
    claim(&mut game, sq(3, 4), "Carol");
    claim(&mut game, sq(5, 5), "Alice");

    let desired = vec![
        want(sq(0, 0), "Alice"),
        want(sq(1, 1), "Alice"),
        want(sq(3, 4), "Alice"),
        want(sq(5, 5), "Alice"),
    ];

    assert_eq!(
        find_conflicts(&game.squares, &desired),
        vec![sq(0, 0), sq(3, 4)]
    );
}

#[test]
fn unclaimed_entries_never_conflict_or_release() {
    let mut game = empty_game();
    claim(&mut game, sq(0, 0), "Bob");

    let desired = vec![open(sq(0, 0)), want(sq(0, 1), "Alice")];

    assert!(find_conflicts(&game.squares, &desired).is_empty());
    let writes = new_claims(&game.squares, &desired).unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].id, sq(0, 1));
}

#[test]
fn resubmitting_own_squares_writes_nothing() {
    let mut game = empty_game();
    claim(&mut game, sq(2, 2), "Alice");

    let desired = vec![want(sq(2, 2), "Alice")];
    assert!(find_conflicts(&game.squares, &desired).is_empty());
    assert!(new_claims(&game.squares, &desired).unwrap().is_empty());
}

#[test]
fn initials_default_from_owner_name() {
    let game = empty_game();
    let mut custom = want(sq(0, 1), "Grace Hopper");
    custom.owner_initials = Some("GMH".into());
    let desired = vec![want(sq(0, 0), "  grace hopper "), custom];

    let writes = new_claims(&game.squares, &desired).unwrap();
    assert_eq!(writes[0].owner_name, "grace hopper");
    assert_eq!(writes[0].owner_initials, "GH");
    assert_eq!(writes[1].owner_initials, "GMH");
}

#[test]
fn claimed_entry_without_owner_is_invalid() {
    let mut anonymous = want(sq(0, 0), "x");
    anonymous.owner_name = Some("   ".into());
    let err = validate_submission(&[anonymous]).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidSquare, _)
    ));
}

#[test]
fn duplicate_entries_are_invalid() {
    let err = validate_submission(&[want(sq(1, 1), "A"), open(sq(1, 1))]).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidSquare, _)
    ));
}

#[test]
fn allowance_counts_held_and_new_squares() {
    let mut game = empty_game();
    claim(&mut game, sq(0, 0), "Alice");
    claim(&mut game, sq(0, 1), "Alice");

    let desired: Vec<_> = (2..5).map(|c| want(sq(0, c), "Alice")).collect();
    let writes = new_claims(&game.squares, &desired).unwrap();

    // 2 held + 3 new = 5, exactly the game default.
    assert!(check_allowance(&game.squares, &writes, &HashMap::new(), 5).is_ok());

    // A redeemed code with a smaller allowance wins over the default.
    let allowances = HashMap::from([("Alice".to_string(), 4)]);
    let err = check_allowance(&game.squares, &writes, &allowances, 5).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::SquareLimitExceeded, _)
    ));
}

#[test]
fn owners_without_new_squares_are_not_checked() {
    let mut game = empty_game();
    for c in 0..8 {
        claim(&mut game, sq(1, c), "Bob");
    }
    let desired: Vec<_> = (0..8).map(|c| want(sq(1, c), "Bob")).collect();
    let writes = new_claims(&game.squares, &desired).unwrap();
    assert!(writes.is_empty());
    assert!(check_allowance(&game.squares, &writes, &HashMap::new(), 5).is_ok());
}

#[test]
fn claiming_owners_are_distinct_and_sorted() {
    let game = empty_game();
    let desired = vec![
        want(sq(0, 0), "Zed"),
        want(sq(0, 1), "Amy"),
        want(sq(0, 2), "Zed"),
    ];
    let writes = new_claims(&game.squares, &desired).unwrap();
    assert_eq!(claiming_owners(&writes), vec!["Amy", "Zed"]);
}

#[test]
fn desired_square_parses_from_client_json() {
    let d: DesiredSquare = serde_json::from_str(
        r#"{"id":"4-7","claimed":true,"ownerName":"Ada","ownerInitials":"AL"}"#,
    )
    .unwrap();
    assert_eq!(d.id, sq(4, 7));
    assert!(serde_json::from_str::<DesiredSquare>(r#"{"id":"4-10","claimed":false}"#).is_err());
}
