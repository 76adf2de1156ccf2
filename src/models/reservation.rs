use serde::{Deserialize, Serialize};

pub const SAMPLE_CITIZEN_ID: &str = "1234567890123";
pub const SAMPLE_SITE_NAME: &str = "OGYH";
pub const SAMPLE_VACCINE_NAME: &str = "Pfizer";

/// Form body accepted by `/reservation` and `/reservation_database`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReservationPayload {
    pub citizen_id: String,
    pub site_name: String,
    pub vaccine_name: String,
}

impl Default for ReservationPayload {
    fn default() -> Self {
        Self {
            citizen_id: SAMPLE_CITIZEN_ID.to_string(),
            site_name: SAMPLE_SITE_NAME.to_string(),
            vaccine_name: SAMPLE_VACCINE_NAME.to_string(),
        }
    }
}

impl ReservationPayload {
    pub fn with_citizen_id(mut self, citizen_id: impl Into<String>) -> Self {
        self.citizen_id = citizen_id.into();
        self
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    pub fn with_vaccine_name(mut self, vaccine_name: impl Into<String>) -> Self {
        self.vaccine_name = vaccine_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_sample_values() {
        let payload = ReservationPayload::default();
        assert_eq!(payload.citizen_id, "1234567890123");
        assert_eq!(payload.site_name, "OGYH");
        assert_eq!(payload.vaccine_name, "Pfizer");
    }

    #[test]
    fn overrides_only_touch_one_field() {
        let payload = ReservationPayload::default().with_site_name("");
        assert_eq!(payload.site_name, "");
        assert_eq!(payload.citizen_id, SAMPLE_CITIZEN_ID);
        assert_eq!(payload.vaccine_name, SAMPLE_VACCINE_NAME);
    }

    #[test]
    fn serializes_with_form_field_names() {
        let body = serde_json::to_value(ReservationPayload::default().with_vaccine_name("Sinovac")).unwrap();
        assert_eq!(body["vaccine_name"], "Sinovac");
        assert_eq!(body["citizen_id"], SAMPLE_CITIZEN_ID);
        assert_eq!(body["site_name"], SAMPLE_SITE_NAME);
    }
}
