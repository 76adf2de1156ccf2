use std::collections::HashMap;
use axum::routing::{delete, post};
use axum::{Extension, Form, Json, Router};
use axum::response::IntoResponse;
use serde_json::json;
use tracing::{info, warn};
use crate::models::feedback::FeedbackCode;
use crate::models::reservation::ReservationPayload;
use crate::stub::form_field;
use crate::stub::state::{is_available_vaccine, is_valid_citizen_id, StubState};

pub const CANCEL_SUCCESS: &str = "cancel reservation successfully";
pub const CANCEL_NOT_FOUND: &str = "cancel reservation failed: there is no reservation for this citizen";

pub fn router(state: StubState) -> Router {
    Router::new()
        .route("/reservation", post(add_reservation))
        .route("/reservation_database", delete(delete_reservation))
        .route_layer(Extension(state))
}

pub async fn add_reservation(
    Extension(state): Extension<StubState>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let feedback = reservation_feedback(&state, &form);
    Json(json!({ "feedback": feedback.message() }))
}

pub async fn delete_reservation(
    Extension(state): Extension<StubState>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let removed = form_field(&form, "citizen_id")
        .and_then(|citizen_id| state.lock().reservations.remove(citizen_id));

    let feedback = match removed {
        Some(reservation) => {
            info!("Removed reservation for {}", reservation.citizen_id);
            CANCEL_SUCCESS
        }
        None => {
            warn!("No reservation to remove for {:?}", form.get("citizen_id"));
            CANCEL_NOT_FOUND
        }
    };
    Json(json!({ "feedback": feedback }))
}

fn reservation_feedback(
    state: &StubState,
    form: &HashMap<String, String>,
) -> FeedbackCode {
    let fields = (
        form_field(form, "citizen_id"),
        form_field(form, "site_name"),
        form_field(form, "vaccine_name"),
    );
    let (citizen_id, site_name, vaccine_name) = match fields {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return FeedbackCode::MissingKey,
    };

    if !is_valid_citizen_id(citizen_id) {
        return FeedbackCode::InvalidId;
    }

    let mut database = state.lock();
    // unknown ids get the same answer as malformed ones
    if !database.citizens.contains_key(citizen_id) {
        return FeedbackCode::InvalidId;
    }
    if !is_available_vaccine(vaccine_name) {
        return FeedbackCode::InvalidVaccine;
    }
    if database.reservations.contains_key(citizen_id) {
        return FeedbackCode::Reserved;
    }

    info!("Reserved {} at {} for {}", vaccine_name, site_name, citizen_id);
    database.reservations.insert(
        citizen_id.to_string(),
        ReservationPayload {
            citizen_id: citizen_id.to_string(),
            site_name: site_name.to_string(),
            vaccine_name: vaccine_name.to_string(),
        },
    );
    FeedbackCode::Success
}
