mod check;
mod config;
mod event;
mod github;
mod http;
mod logger;
mod messages;
mod outcome;

use anyhow::{Context, Result};
use config::Config;
use outcome::Outcome;

#[tokio::main]
async fn main() {
    if let Err(err) = logger::init() {
        eprintln!("Cannot initialize the logger: {}", err);
    }

    log::info!("Starting PR check...");
    let outcome = Outcome::from_result(execute().await);

    std::process::exit(outcome.report());
}

async fn execute() -> Result<Outcome> {
    let config = Config::load().context("Cannot load the action inputs")?;

    check::run(&config).await
}
