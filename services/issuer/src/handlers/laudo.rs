use crate::error::AppError;
use crate::models::{IssueRequest, IssueResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use types::certificate::Certificate;
use types::number::LaudoNumber;

/// Issue a new laudo: allocate the next number, build the certificate,
/// record it for listing.
///
/// A well-formed request always answers 201: a backend that failed to
/// persist the counter only downgrades the response with
/// `persisted: false` and an advisory warning. Unparseable payloads are
/// rejected up front with the JSON error body, before any number is
/// consumed.
pub async fn issue_laudo(
    State(state): State<AppState>,
    payload: Result<Json<IssueRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IssueResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let allocation = state.allocator.allocate_next().await;
    let number = LaudoNumber::new(allocation.number);

    let issue_date = Utc::now().date_naive();
    let certificate = Certificate::issue(number, issue_date, payload.into_fields());

    state.issued.insert(allocation.number, certificate.clone());

    let warning = (!allocation.persisted)
        .then(|| "counter update failed; the issued number may repeat".to_string());

    let response = IssueResponse {
        number,
        display_number: state.number_format.format(number),
        issue_date,
        expiry_date: certificate.expiry_date,
        persisted: allocation.persisted,
        warning,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// List every certificate issued by this process, ordered by number.
pub async fn list_laudos(State(state): State<AppState>) -> Json<Vec<Certificate>> {
    let mut certificates: Vec<Certificate> = state
        .issued
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    certificates.sort_by_key(|certificate| certificate.number);
    Json(certificates)
}

/// Fetch a single issued certificate by raw number.
pub async fn get_laudo(
    State(state): State<AppState>,
    Path(number): Path<u64>,
) -> Result<Json<Certificate>, AppError> {
    state
        .issued
        .get(&number)
        .map(|entry| Json(entry.value().clone()))
        .ok_or_else(|| AppError::NotFound(format!("laudo {number} was not issued here")))
}
