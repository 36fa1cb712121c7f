use backend::errors::ErrorCode;
use backend::services::codes::{
    find_active_code, generate_code, list_codes, redeem_code, retire_code, update_code,
    InvitationStatus, JoinCodeChanges, NewJoinCode, DEFAULT_SQUARES_ALLOWED,
};

use crate::support::factory::identity_game;
use crate::support::test_state::test_state;

fn invite(name: &str, email: &str) -> NewJoinCode {
    NewJoinCode {
        squares_allowed: Some(4),
        player_name: Some(name.to_string()),
        player_email: Some(email.to_string()),
        send_email: true,
    }
}

#[tokio::test]
async fn plain_code_gets_defaults_and_a_game_link() {
    let (state, notifier) = test_state().await;
    let game = identity_game(&state).await;

    let generated = generate_code(&state, game.id, NewJoinCode::default())
        .await
        .unwrap();

    assert_eq!(generated.code.game_id, game.id);
    assert_eq!(generated.code.code.len(), 6);
    assert_eq!(generated.code.squares_allowed, DEFAULT_SQUARES_ALLOWED);
    assert!(!generated.code.is_used);
    assert_eq!(
        generated.game_url,
        format!(
            "{}?gameId={}&code={}",
            state.config.public_base_url, game.id, generated.code.code
        )
    );
    assert_eq!(generated.invitation, InvitationStatus::NotRequested);
    assert!(notifier.invitations().is_empty());
}

#[tokio::test]
async fn invitation_is_sent_when_asked_for() {
    let (state, notifier) = test_state().await;
    let game = identity_game(&state).await;

    let generated = generate_code(&state, game.id, invite("Ada Lovelace", "ada@example.com"))
        .await
        .unwrap();

    assert_eq!(generated.invitation, InvitationStatus::Sent);
    let sent = notifier.invitations();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].player_email, "ada@example.com");
    assert_eq!(sent[0].join_code, generated.code.code);
    assert_eq!(sent[0].game_title, game.title);
    assert_eq!(sent[0].host_name, game.host_name);
    assert_eq!(sent[0].game_url, generated.game_url);
}

#[tokio::test]
async fn failed_invitation_falls_back_to_a_mail_draft() {
    let (state, notifier) = test_state().await;
    let game = identity_game(&state).await;
    notifier.fail_all();

    let generated = generate_code(&state, game.id, invite("Ada Lovelace", "ada@example.com"))
        .await
        .unwrap();

    match generated.invitation {
        InvitationStatus::Failed { mailto_url } => {
            assert!(mailto_url.starts_with("mailto:ada@example.com?"), "{mailto_url}");
        }
        other => panic!("expected a failed invitation, got {other:?}"),
    }
    // The code itself was still created
    assert_eq!(list_codes(&state, game.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn invitation_needs_an_email_address() {
    let (state, notifier) = test_state().await;
    let game = identity_game(&state).await;

    let generated = generate_code(&state, game.id, invite("Ada Lovelace", "  "))
        .await
        .unwrap();

    assert_eq!(generated.invitation, InvitationStatus::NotRequested);
    assert_eq!(generated.code.player_email, None);
    assert!(notifier.invitations().is_empty());
}

#[tokio::test]
async fn generation_validates_input_and_game() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;

    let zero = NewJoinCode {
        squares_allowed: Some(0),
        ..NewJoinCode::default()
    };
    let err = generate_code(&state, game.id, zero).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let err = generate_code(&state, 777, NewJoinCode::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let err = list_codes(&state, 777).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
}

#[tokio::test]
async fn codes_redeem_exactly_once() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    let generated = generate_code(&state, game.id, NewJoinCode::default())
        .await
        .unwrap();
    let lower = generated.code.code.to_ascii_lowercase();

    let found = find_active_code(&state, &lower).await.unwrap();
    assert_eq!(found.id, generated.code.id);

    let redeemed = redeem_code(&state, &lower, "  Ada Lovelace ").await.unwrap();
    assert!(redeemed.is_used);
    assert!(redeemed.used_at.is_some());
    assert_eq!(redeemed.assigned_user_name.as_deref(), Some("Ada Lovelace"));

    let err = redeem_code(&state, &generated.code.code, "Bob Builder")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::JoinCodeUsed);

    let err = find_active_code(&state, &generated.code.code)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::JoinCodeNotFound);
}

#[tokio::test]
async fn redeem_rejects_unknown_codes_and_blank_names() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    let generated = generate_code(&state, game.id, NewJoinCode::default())
        .await
        .unwrap();

    let err = redeem_code(&state, "ZZZZZZ", "Ada Lovelace").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::JoinCodeNotFound);

    let err = redeem_code(&state, &generated.code.code, "   ").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let err = find_active_code(&state, "not a code").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::JoinCodeNotFound);
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    let generated = generate_code(&state, game.id, invite("Ada Lovelace", "ada@example.com"))
        .await
        .unwrap();

    let updated = update_code(
        &state,
        generated.code.id,
        JoinCodeChanges {
            squares_allowed: Some(10),
            ..JoinCodeChanges::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.squares_allowed, 10);
    assert_eq!(updated.player_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(updated.player_email.as_deref(), Some("ada@example.com"));

    let too_many = JoinCodeChanges {
        squares_allowed: Some(101),
        ..JoinCodeChanges::default()
    };
    let err = update_code(&state, generated.code.id, too_many)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let err = update_code(&state, 31_337, JoinCodeChanges::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::JoinCodeNotFound);
}

#[tokio::test]
async fn retired_code_can_no_longer_be_redeemed() {
    let (state, _) = test_state().await;
    let game = identity_game(&state).await;
    let generated = generate_code(&state, game.id, NewJoinCode::default())
        .await
        .unwrap();

    let retired = retire_code(&state, generated.code.id).await.unwrap();
    assert!(retired.is_used);
    assert_eq!(retired.assigned_user_name, None);

    let err = redeem_code(&state, &generated.code.code, "Ada Lovelace")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::JoinCodeUsed);

    // Still listed for the host
    let listed = list_codes(&state, game.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].is_used);
}
