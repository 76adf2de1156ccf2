pub mod common;
use crate::common::stub_and_client;
use wcg_reservation_check::models::citizen::CitizenPayload;
use wcg_reservation_check::models::feedback::FeedbackCode;
use wcg_reservation_check::models::reservation::ReservationPayload;

#[test]
fn test_health_endpoint() {
    let (stub, _) = stub_and_client();
    let resp = reqwest::blocking::get(format!("{}/health", stub.base_url()))
        .expect("Failed to send /health request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["reservations"], 0);
}

#[test]
fn test_register_then_reserve() {
    let (stub, client) = stub_and_client();

    let registered = client
        .register_citizen(&CitizenPayload::default())
        .expect("Failed to register");
    assert_eq!(registered.status, 200);
    assert!(stub.is_registered("1234567890123"));

    let reserved = client
        .make_reservation(&ReservationPayload::default())
        .expect("Failed to reserve");
    assert_eq!(reserved.status, 200);
    assert_eq!(reserved.feedback_code(), Some(FeedbackCode::Success));
    assert_eq!(stub.reservation_for("1234567890123"), Some(ReservationPayload::default()));
}

#[test]
fn test_delete_clears_reservation() {
    let (stub, client) = stub_and_client();
    client.register_citizen(&CitizenPayload::default()).unwrap();
    client.make_reservation(&ReservationPayload::default()).unwrap();

    let deleted = client
        .delete_reservation(&ReservationPayload::default())
        .expect("Failed to delete");
    assert_eq!(deleted.feedback_code(), None);
    assert!(stub.reservation_for("1234567890123").is_none());

    let again = client.make_reservation(&ReservationPayload::default()).unwrap();
    assert_eq!(again.feedback_code(), Some(FeedbackCode::Success));
}

#[test]
fn test_unknown_endpoint_still_decodes_feedback() {
    let (stub, _) = stub_and_client();
    let resp = reqwest::blocking::get(format!("{}/vaccines", stub.base_url())).unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body: serde_json::Value = resp.json().unwrap();
    assert!(body["feedback"].is_string());
}

#[test]
fn test_unreachable_service_is_an_error() {
    let (stub, client) = stub_and_client();
    drop(stub);
    let err = client
        .make_reservation(&ReservationPayload::default())
        .unwrap_err();
    assert!(format!("{:#}", err).contains("/reservation"));
}
