use std::collections::HashMap;

use axum::{
    Json,
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use mysticalbeach_inquiry::{EventType, InquiryError, InquiryResult};

use crate::routes::AppState;

/// POST /inquiry - Reservation form submission
pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let outcome = app_state.inquiry_command.try_submit(&input).await;

    let status = match &outcome {
        Ok(()) => StatusCode::OK,
        Err(InquiryError::Validate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(InquiryError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
        Err(InquiryError::Render(_) | InquiryError::Delivery(_)) => StatusCode::BAD_GATEWAY,
    };

    (status, Json(InquiryResult::from(outcome)))
}

/// GET /inquiry/event-types - Options for the form's event select
pub async fn event_types() -> impl IntoResponse {
    Json(EventType::labels())
}
