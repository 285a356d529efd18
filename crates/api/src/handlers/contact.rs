//! Handler for the public contact form.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::contact::{parse_submission, SUBMITTED_MESSAGE};
use folio_db::repositories::ContactRepo;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

/// Body of a successful submission.
#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub message: &'static str,
}

/// POST /api/contact/
///
/// Stores the message unread and acknowledges with 201. The payload is taken
/// as raw JSON so absent fields produce the form's own validation message.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ContactAccepted>)> {
    let Json(payload) = payload?;
    let submission = parse_submission(&payload)?;

    let contact = ContactRepo::create(&state.pool, &submission).await?;

    tracing::info!(contact_id = contact.id, "Contact message stored");

    Ok((
        StatusCode::CREATED,
        Json(ContactAccepted {
            message: SUBMITTED_MESSAGE,
        }),
    ))
}
