use tracing::{error, info};
use crate::client::ReservationClient;
use crate::suite::fixture::Fixture;

pub mod fixture;
pub mod scenarios;

pub type ScenarioFn = fn(&Fixture) -> anyhow::Result<()>;

pub struct Scenario {
    pub name: &'static str,
    pub run: ScenarioFn,
}

pub const SCENARIOS: [Scenario; 6] = [
    Scenario { name: "make_reservation", run: scenarios::make_reservation },
    Scenario { name: "reserve_missing_key", run: scenarios::reserve_missing_key },
    Scenario { name: "reserve_invalid_citizen_id", run: scenarios::reserve_invalid_citizen_id },
    Scenario { name: "reserve_unregistered_citizen_id", run: scenarios::reserve_unregistered_citizen_id },
    Scenario { name: "reserve_same_id", run: scenarios::reserve_same_id },
    Scenario { name: "reserve_invalid_vaccine", run: scenarios::reserve_invalid_vaccine },
];

pub struct ScenarioOutcome {
    pub name: &'static str,
    pub result: anyhow::Result<()>,
}

#[derive(Default)]
pub struct SuiteReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs every scenario whose name contains `filter`, each inside a fresh fixture.
pub fn run_suite(
    client: &ReservationClient,
    filter: Option<&str>,
) -> SuiteReport {
    let mut report = SuiteReport::default();

    for scenario in SCENARIOS.iter().filter(|s| filter.map_or(true, |f| s.name.contains(f))) {
        info!("Running {}", scenario.name);
        let result = Fixture::set_up(client)
            .and_then(|fixture| (scenario.run)(&fixture));

        match &result {
            Ok(_) => info!("{} ... ok", scenario.name),
            Err(e) => error!("{} ... FAILED: {:#}", scenario.name, e),
        }
        report.outcomes.push(ScenarioOutcome { name: scenario.name, result });
    }

    report
}
