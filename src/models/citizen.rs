use serde::{Deserialize, Serialize};
use crate::models::reservation::SAMPLE_CITIZEN_ID;

/// Form body accepted by `/registration`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CitizenPayload {
    pub citizen_id: String,
    pub name: String,
    pub surname: String,
    pub birth_date: String,
    pub occupation: String,
    pub address: String,
}

impl Default for CitizenPayload {
    fn default() -> Self {
        Self {
            citizen_id: SAMPLE_CITIZEN_ID.to_string(),
            name: "John".to_string(),
            surname: "Doe".to_string(),
            birth_date: "01/01/2001".to_string(),
            occupation: "Student".to_string(),
            address: "1/53 Ngamwongwaan, Laksi, Bangkok 10210".to_string(),
        }
    }
}

impl CitizenPayload {
    pub fn with_citizen_id(mut self, citizen_id: impl Into<String>) -> Self {
        self.citizen_id = citizen_id.into();
        self
    }

    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = birth_date.into();
        self
    }
}
