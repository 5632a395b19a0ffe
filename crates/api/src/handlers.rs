//! API handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use vigil_core::{Amount, CoreError, EventKind, UserId};

use crate::state::AppState;

/// Incoming `POST /event` payload.
///
/// `amount` arrives as either a decimal string or a bare number. `t` is the
/// optional seconds-within-minute override (0-59) used to stamp the event's
/// logical timestamp; the rest of the timestamp comes from the server clock.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(rename = "type")]
    pub event_type: String,
    pub user_id: UserId,
    pub amount: RawAmount,
    #[serde(default)]
    pub t: Option<u32>,
}

/// Amount as it appears on the wire
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(f64),
}

impl RawAmount {
    fn to_amount(&self) -> Result<Amount, CoreError> {
        match self {
            RawAmount::Text(s) => s.parse(),
            RawAmount::Number(n) => Amount::from_f64(*n),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(err: impl ToString) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// `POST /event` - validate, evaluate against the user's history, commit.
///
/// Validation failures reject with 400 before the store is touched; a
/// rejected request records nothing.
pub async fn post_event(
    State(state): State<AppState>,
    Json(payload): Json<EventRequest>,
) -> Response {
    let kind = match EventKind::from_str(&payload.event_type) {
        Ok(kind) => kind,
        Err(err) => return bad_request(err),
    };
    let amount = match payload.amount.to_amount() {
        Ok(amount) => amount,
        Err(err) => return bad_request(err),
    };
    if let Some(t) = payload.t {
        if t > 59 {
            return bad_request(CoreError::SecondsOutOfRange(t));
        }
    }

    let evaluation = state.engine.ingest(&payload.user_id, kind, amount, payload.t);
    Json(evaluation).into_response()
}

/// `GET /health` - liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
