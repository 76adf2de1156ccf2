use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use crate::models::citizen::CitizenPayload;
use crate::models::reservation::ReservationPayload;

pub const AVAILABLE_VACCINES: [&str; 4] = ["Pfizer", "Astra", "Sinofarm", "Sinovac"];

#[derive(Default, Debug)]
pub struct StubDatabase {
    pub citizens: HashMap<String, CitizenPayload>,
    pub reservations: HashMap<String, ReservationPayload>,
}

/// Shared in-memory store behind the stand-in endpoints.
#[derive(Clone, Default, Debug)]
pub struct StubState {
    database: Arc<Mutex<StubDatabase>>,
}

impl StubState {
    pub fn lock(&self) -> MutexGuard<'_, StubDatabase> {
        // a panicked handler leaves the maps intact, keep serving
        self.database.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Thirteen ASCII digits.
pub fn is_valid_citizen_id(citizen_id: &str) -> bool {
    citizen_id.chars().count() == 13 && citizen_id.chars().all(|c| c.is_ascii_digit())
}

pub fn is_available_vaccine(vaccine_name: &str) -> bool {
    AVAILABLE_VACCINES.contains(&vaccine_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citizen_id_must_be_thirteen_digits() {
        assert!(is_valid_citizen_id("1234567890123"));
        assert!(!is_valid_citizen_id("625648"));
        assert!(!is_valid_citizen_id("1122334455667788"));
        assert!(!is_valid_citizen_id("12abc567กข890"));
        assert!(!is_valid_citizen_id(""));
    }

    #[test]
    fn vaccine_names_are_case_sensitive() {
        assert!(is_available_vaccine("Pfizer"));
        assert!(is_available_vaccine("Sinovac"));
        assert!(!is_available_vaccine("PFIZER"));
        assert!(!is_available_vaccine("P"));
        assert!(!is_available_vaccine("Moderna"));
    }
}
