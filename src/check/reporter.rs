use super::{template, validator::MissingField};
use crate::{
    github::{
        builder::BuilderExecutor, handler::repository_handler::RepositoryHandler,
        response::PullRequest,
    },
    http,
    messages::Messages,
    outcome::Outcome,
};
use anyhow::Result;

pub const INCOMPLETE_REASON: &str = "PR is incomplete. See the added comment.";

/// Turns the validation result into the run outcome, commenting on the pull
/// request when fields are missing.
///
/// A missing field always fails the run, whether or not the comment could be
/// posted. Only rendering errors are returned as `Err`.
pub async fn report(
    pr: &PullRequest,
    missing: &[MissingField],
    messages: &Messages,
    repo: &RepositoryHandler<'_>,
) -> Result<Outcome> {
    if missing.is_empty() {
        log::info!("✅ PR #{} has all required fields filled.", pr.number);
        return Ok(Outcome::Success);
    }

    log::info!("Missing required fields, trying to add comment...");
    let body = template::render(messages, missing)?;

    log::info!("Creating comment on PR #{} of {}", pr.number, repo.full_name());
    let result = repo
        .issue(pr.number)
        .create_comment()
        .body(body)
        .execute()
        .await;

    let outcome = match result {
        Ok(comment) => {
            log::info!("Comment {} added successfully: {}", comment.id, comment.html_url);
            Outcome::Failure(INCOMPLETE_REASON.to_owned())
        }
        Err(err) => {
            let status = err
                .downcast_ref::<http::Error>()
                .and_then(http::Error::status);
            log::error!("Error creating comment (status {:?}): {}", status, err);
            if is_permission_denied(&err) {
                log::error!(
                    "PERMISSION ERROR: Check if the token has permission to write in issues/pull requests"
                );
                log::error!(
                    "Add \"permissions: {{ issues: write, pull-requests: write }}\" to your workflow file"
                );
            }
            Outcome::Failure(format!("Unable to add comment: {}", err))
        }
    };

    Ok(outcome)
}

pub fn is_permission_denied(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<http::Error>()
            .is_some_and(http::Error::is_permission_denied)
    })
}
