use std::time::Duration;
use clap::Parser;
use crate::client::DEFAULT_BASE_URL;

/// Reservation endpoint checks for the WCG vaccine API.
#[derive(Parser, Clone, Debug)]
#[clap(version)]
pub struct Config {
    /// Base URL of the service under test
    #[clap(env = "WCG_BASE_URL", long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout, reqwest's default when unset
    #[clap(env = "WCG_TIMEOUT_SECS", long)]
    pub timeout_secs: Option<u64>,

    /// Only run scenarios whose name contains this text
    #[clap(env = "WCG_SCENARIO", long)]
    pub scenario: Option<String>,

    /// Run against an in-process stand-in instead of `base_url`
    #[clap(long)]
    pub stub: bool,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_live_service() {
        let config = Config::try_parse_from(["wcg-reservation-check"]).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout().is_none());
        assert!(!config.stub);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "wcg-reservation-check",
            "--base-url", "http://localhost:3000",
            "--timeout-secs", "5",
            "--scenario", "same_id",
            "--stub",
        ]).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.scenario.as_deref(), Some("same_id"));
        assert!(config.stub);
    }
}
