use std::fmt;
use serde::{Deserialize, Serialize};

/// Outcome strings the reservation endpoint puts in its `feedback` field.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCode {
    Success,
    MissingKey,
    InvalidId,
    NotRegistered,
    Reserved,
    InvalidVaccine,
}

impl FeedbackCode {
    pub const ALL: [FeedbackCode; 6] = [
        FeedbackCode::Success,
        FeedbackCode::MissingKey,
        FeedbackCode::InvalidId,
        FeedbackCode::NotRegistered,
        FeedbackCode::Reserved,
        FeedbackCode::InvalidVaccine,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FeedbackCode::Success => "success",
            FeedbackCode::MissingKey => "missing_key",
            FeedbackCode::InvalidId => "invalid_id",
            FeedbackCode::NotRegistered => "not_registered",
            FeedbackCode::Reserved => "reserved",
            FeedbackCode::InvalidVaccine => "invalid_vaccine",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackCode::Success => "reservation success!",
            FeedbackCode::MissingKey => "reservation failed: missing some attribute",
            FeedbackCode::InvalidId => "reservation failed: invalid citizen ID",
            FeedbackCode::NotRegistered => "reservation failed: citizen ID is not registered",
            FeedbackCode::Reserved => {
                "reservation failed: there is already a reservation for this citizen"
            }
            // the service reuses its report wording here
            FeedbackCode::InvalidVaccine => "report failed: invalid vaccine name",
        }
    }

    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.message() == message)
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
