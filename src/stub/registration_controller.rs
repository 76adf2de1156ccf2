use std::collections::HashMap;
use axum::routing::post;
use axum::{Extension, Form, Json, Router};
use axum::response::IntoResponse;
use serde_json::json;
use time::Date;
use time::macros::format_description;
use tracing::info;
use crate::models::citizen::CitizenPayload;
use crate::stub::form_field;
use crate::stub::state::{is_valid_citizen_id, StubState};

pub const REGISTRATION_SUCCESS: &str = "registration success!";
pub const REGISTRATION_MISSING_KEY: &str = "registration failed: missing some attribute";
pub const REGISTRATION_INVALID_ID: &str = "registration failed: invalid citizen ID";
pub const REGISTRATION_INVALID_BIRTH_DATE: &str = "registration failed: invalid birth date format";
pub const REGISTRATION_ALREADY_REGISTERED: &str = "registration failed: this person already registered";

pub fn router(state: StubState) -> Router {
    Router::new()
        .route("/registration", post(register_citizen))
        .route_layer(Extension(state))
}

pub async fn register_citizen(
    Extension(state): Extension<StubState>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    Json(json!({ "feedback": registration_feedback(&state, &form) }))
}

fn registration_feedback(
    state: &StubState,
    form: &HashMap<String, String>,
) -> &'static str {
    let fields = (
        form_field(form, "citizen_id"),
        form_field(form, "name"),
        form_field(form, "surname"),
        form_field(form, "birth_date"),
        form_field(form, "occupation"),
        form_field(form, "address"),
    );
    let (citizen_id, name, surname, birth_date, occupation, address) = match fields {
        (Some(a), Some(b), Some(c), Some(d), Some(e), Some(f)) => (a, b, c, d, e, f),
        _ => return REGISTRATION_MISSING_KEY,
    };

    if !is_valid_citizen_id(citizen_id) {
        return REGISTRATION_INVALID_ID;
    }
    if Date::parse(birth_date, format_description!("[day]/[month]/[year]")).is_err() {
        return REGISTRATION_INVALID_BIRTH_DATE;
    }

    let mut database = state.lock();
    if database.citizens.contains_key(citizen_id) {
        return REGISTRATION_ALREADY_REGISTERED;
    }

    info!("Registered citizen {}", citizen_id);
    database.citizens.insert(
        citizen_id.to_string(),
        CitizenPayload {
            citizen_id: citizen_id.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            birth_date: birth_date.to_string(),
            occupation: occupation.to_string(),
            address: address.to_string(),
        },
    );
    REGISTRATION_SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(citizen: &CitizenPayload) -> HashMap<String, String> {
        serde_json::from_value(serde_json::to_value(citizen).unwrap()).unwrap()
    }

    #[test]
    fn registers_once_then_refuses() {
        let state = StubState::default();
        let citizen = form(&CitizenPayload::default());
        assert_eq!(registration_feedback(&state, &citizen), REGISTRATION_SUCCESS);
        assert_eq!(registration_feedback(&state, &citizen), REGISTRATION_ALREADY_REGISTERED);
    }

    #[test]
    fn rejects_malformed_citizens() {
        let state = StubState::default();
        let mut missing = form(&CitizenPayload::default());
        missing.remove("occupation");
        assert_eq!(registration_feedback(&state, &missing), REGISTRATION_MISSING_KEY);

        let bad_id = form(&CitizenPayload::default().with_citizen_id("12345"));
        assert_eq!(registration_feedback(&state, &bad_id), REGISTRATION_INVALID_ID);

        let bad_date = form(&CitizenPayload::default().with_birth_date("2001-01-01"));
        assert_eq!(registration_feedback(&state, &bad_date), REGISTRATION_INVALID_BIRTH_DATE);

        assert!(state.lock().citizens.is_empty());
    }
}
