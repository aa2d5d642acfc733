use crate::models::StatusResponse;
use crate::state::AppState;
use axum::{Json, extract::State};
use tracing::warn;

/// Report the backend's current counter value.
///
/// An absent or unreadable document reads as zero, mirroring the
/// allocator's own fallback.
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let last_number = match state.store.load().await {
        Ok(snapshot) => snapshot.document.last_number,
        Err(err) => {
            warn!("status read failed, reporting zero: {err}");
            0
        }
    };

    Json(StatusResponse { last_number })
}
