use std::sync::Arc;

use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use sea_orm::DatabaseConnection;

use super::notifier::RecordingNotifier;

/// Fresh migrated in-memory database plus a recording notifier.
pub async fn test_state() -> (AppState, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let state = build_state()
        .with_in_memory_db()
        .with_notifier(notifier.clone())
        .build()
        .await
        .expect("build test state");
    (state, notifier)
}

pub fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("test state has a database")
}
