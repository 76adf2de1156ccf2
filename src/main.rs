use std::process::ExitCode;
use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wcg_reservation_check::client::ReservationClient;
use wcg_reservation_check::config::Config;
use wcg_reservation_check::stub::spawn_stub;
use wcg_reservation_check::suite::run_suite;

fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Could not run the reservation checks due to: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<bool> {
    // keep the stub alive until the suite is done
    let stub = if config.stub { Some(spawn_stub()?) } else { None };
    let base_url = match &stub {
        Some(stub) => stub.base_url(),
        None => config.base_url.clone(),
    };

    info!("Checking reservation endpoint at {}", base_url);
    let client = ReservationClient::new(&base_url, config.timeout())?;
    let report = run_suite(&client, config.scenario.as_deref());

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(_) => println!("{} ... ok", outcome.name),
            Err(e) => println!("{} ... FAILED\n    {:#}", outcome.name, e),
        }
    }
    println!("\n{} passed; {} failed", report.passed(), report.failed());

    Ok(report.is_success())
}
