use tracing::{debug, warn};
use crate::client::ReservationClient;
use crate::models::citizen::CitizenPayload;
use crate::models::reservation::ReservationPayload;

pub const UNREGISTERED_CITIZEN_ID: &str = "1111111111111";

/// Per-scenario environment: a registered sample citizen with no reservation.
///
/// The held reservation is deleted again when the fixture is dropped. Cleanup is
/// best effort; a failed delete is only logged, so a broken run can leave state
/// behind on the remote service.
pub struct Fixture<'a> {
    client: &'a ReservationClient,
    pub reservation: ReservationPayload,
    pub missing_key_payloads: Vec<ReservationPayload>,
    pub invalid_citizen_id_payloads: Vec<ReservationPayload>,
    pub invalid_vaccine_payloads: Vec<ReservationPayload>,
}

impl<'a> Fixture<'a> {
    pub fn set_up(client: &'a ReservationClient) -> anyhow::Result<Self> {
        // clear any reservation left over from an earlier run
        let deleted = client.delete_reservation_status(&ReservationPayload::default())?;
        debug!("Pre-run cleanup answered {}", deleted);

        // the body is ignored, the citizen may already be registered
        let registered = client.register_citizen_status(&CitizenPayload::default())?;
        debug!("Sample citizen registration answered {}", registered);

        let base = ReservationPayload::default();

        Ok(Self {
            client,
            reservation: base.clone(),
            missing_key_payloads: missing_key_payloads(&base),
            invalid_citizen_id_payloads: invalid_citizen_id_payloads(&base),
            invalid_vaccine_payloads: invalid_vaccine_payloads(&base),
        })
    }

    pub fn client(&self) -> &ReservationClient {
        self.client
    }
}

fn missing_key_payloads(base: &ReservationPayload) -> Vec<ReservationPayload> {
    vec![
        base.clone().with_citizen_id(""),
        base.clone().with_site_name(""),
        base.clone().with_vaccine_name(""),
    ]
}

fn invalid_citizen_id_payloads(base: &ReservationPayload) -> Vec<ReservationPayload> {
    vec![
        // shorter than 13 digits
        base.clone().with_citizen_id("625648"),
        // longer than 13 digits
        base.clone().with_citizen_id("1122334455667788"),
        // letters mixed in
        base.clone().with_citizen_id("12abc567กข890"),
    ]
}

// accepted names are Pfizer, Astra, Sinofarm and Sinovac
fn invalid_vaccine_payloads(base: &ReservationPayload) -> Vec<ReservationPayload> {
    vec![
        base.clone().with_vaccine_name("P"),
        base.clone().with_vaccine_name("PFIZER"),
        base.clone().with_vaccine_name("Moderna"),
    ]
}

impl Drop for Fixture<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.client.delete_reservation_status(&self.reservation) {
            warn!("Failed to delete reservation for {} during teardown due to: {:#}", self.reservation.citizen_id, e);
        }
    }
}
