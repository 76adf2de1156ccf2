use anyhow::ensure;
use crate::client::ApiResponse;
use crate::models::feedback::FeedbackCode;
use crate::suite::fixture::{Fixture, UNREGISTERED_CITIZEN_ID};

fn expect_feedback(
    response: &ApiResponse,
    expected: FeedbackCode,
    context: &str,
) -> anyhow::Result<()> {
    ensure!(
        response.feedback == expected.message(),
        "{}: expected feedback {:?} ({}), got {:?}",
        context,
        expected.message(),
        expected,
        response.feedback,
    );
    Ok(())
}

pub fn make_reservation(fixture: &Fixture) -> anyhow::Result<()> {
    let response = fixture.client().make_reservation(&fixture.reservation)?;
    ensure!(
        response.status == 200,
        "expected status 200, got {}",
        response.status
    );
    expect_feedback(&response, FeedbackCode::Success, "valid reservation")
}

pub fn reserve_missing_key(fixture: &Fixture) -> anyhow::Result<()> {
    for payload in &fixture.missing_key_payloads {
        let response = fixture.client().make_reservation(payload)?;
        expect_feedback(&response, FeedbackCode::MissingKey, &format!("{:?}", payload))?;
    }
    Ok(())
}

pub fn reserve_invalid_citizen_id(fixture: &Fixture) -> anyhow::Result<()> {
    for payload in &fixture.invalid_citizen_id_payloads {
        let response = fixture.client().make_reservation(payload)?;
        expect_feedback(&response, FeedbackCode::InvalidId, &format!("citizen_id {:?}", payload.citizen_id))?;
    }
    Ok(())
}

pub fn reserve_unregistered_citizen_id(fixture: &Fixture) -> anyhow::Result<()> {
    let payload = fixture.reservation.clone().with_citizen_id(UNREGISTERED_CITIZEN_ID);
    let response = fixture.client().make_reservation(&payload)?;
    // the service files unknown ids under the invalid-id answer
    expect_feedback(&response, FeedbackCode::InvalidId, "unregistered citizen")
}

pub fn reserve_same_id(fixture: &Fixture) -> anyhow::Result<()> {
    let first = fixture.client().make_reservation(&fixture.reservation)?;
    expect_feedback(&first, FeedbackCode::Success, "first reservation")?;

    let second = fixture.client().make_reservation(&fixture.reservation)?;
    expect_feedback(&second, FeedbackCode::Reserved, "second reservation")
}

pub fn reserve_invalid_vaccine(fixture: &Fixture) -> anyhow::Result<()> {
    for payload in &fixture.invalid_vaccine_payloads {
        let response = fixture.client().make_reservation(payload)?;
        expect_feedback(&response, FeedbackCode::InvalidVaccine, &format!("vaccine_name {:?}", payload.vaccine_name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(feedback: &str) -> ApiResponse {
        ApiResponse { status: 200, feedback: feedback.to_string() }
    }

    #[test]
    fn matching_feedback_passes() {
        let ok = response("reservation success!");
        assert!(expect_feedback(&ok, FeedbackCode::Success, "ok").is_ok());
    }

    #[test]
    fn mismatch_names_both_messages() {
        let reserved = response(FeedbackCode::Reserved.message());
        let err = expect_feedback(&reserved, FeedbackCode::Success, "first reservation").unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("first reservation"));
        assert!(text.contains("reservation success!"));
        assert!(text.contains("there is already a reservation"));
    }
}
