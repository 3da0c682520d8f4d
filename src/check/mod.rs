pub mod reporter;
pub mod resolver;
mod template;
pub mod validator;

use crate::{
    config::Config, event::TriggerEvent, github::github_client::GithubClient,
    messages::Messages, outcome::Outcome,
};
use anyhow::{Context, Result};

pub async fn run(config: &Config) -> Result<Outcome> {
    let messages = Messages::load(config.language).context("Cannot load the message catalog")?;
    log::debug!("Using {} messages", messages.language());

    log::info!("Event context: {}", config.event_name);
    log::info!(
        "Repository: {}/{}",
        config.repository.owner,
        config.repository.name
    );
    let event_path = config.event_path.as_deref();
    let event = TriggerEvent::load(&config.event_name, &config.sha, event_path).await?;

    let client = GithubClient::new(&config.token, &config.api_url);
    let comment_client = if config.has_custom_comment_token() {
        log::debug!("Using the custom token for comments");
        GithubClient::new(&config.comment_token, &config.api_url)
    } else {
        client.clone()
    };

    let repo = client.repo(&config.repository.owner, &config.repository.name);
    let Some(pr) = resolver::resolve(&event, &repo).await else {
        log::info!("No PR found to verify.");
        return Ok(Outcome::Skipped);
    };

    log::info!("Verifying required PR fields...");
    let missing = validator::validate(&pr);

    let comment_repo = comment_client.repo(&config.repository.owner, &config.repository.name);
    reporter::report(&pr, &missing, &messages, &comment_repo).await
}
