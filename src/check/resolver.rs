use crate::{
    event::TriggerEvent,
    github::{
        github_client::PER_PAGE, handler::repository_handler::RepositoryHandler,
        response::PullRequest,
    },
};

/// Finds the pull request a run should verify.
///
/// For pushes, open pull requests are scanned in API order and the first one
/// whose commits include the pushed SHA wins. Lookup errors never abort the
/// run: a failed page ends the search, a failed commit listing skips that PR.
pub async fn resolve(event: &TriggerEvent, repo: &RepositoryHandler<'_>) -> Option<PullRequest> {
    match event {
        TriggerEvent::PullRequest(pr) => {
            log::info!("Processing pull request #{} {:?}", pr.number, pr.title);
            if let Some(head) = &pr.head {
                log::debug!("Head {} at {}", head.name, head.sha);
            }
            Some(pr.clone())
        }
        TriggerEvent::Push { sha } => {
            log::info!("Push event detected, searching for associated PRs...");
            find_by_commit(repo, sha).await
        }
        TriggerEvent::Other { name } => {
            log::info!("Event {:?} carries no pull request", name);
            None
        }
    }
}

async fn find_by_commit(repo: &RepositoryHandler<'_>, sha: &str) -> Option<PullRequest> {
    log::info!("Current commit SHA: {}", sha);
    if sha.is_empty() {
        log::warn!("Push event without a commit SHA");
        return None;
    }

    let mut page = 1;
    loop {
        let pulls = match repo.pull_requests().list_open(page).await {
            Ok(pulls) => pulls,
            Err(err) => {
                log::warn!("Error listing PRs of {}: {:#}", repo.full_name(), err);
                return None;
            }
        };

        log::info!("Found {} open PRs on page {}", pulls.len(), page);

        for pull in &pulls {
            log::info!("Checking commits of PR #{} ({})...", pull.number, pull.state);
            match repo.pull_request(pull.number).commits().await {
                Ok(commits) => {
                    log::info!("PR #{} has {} commits", pull.number, commits.len());
                    if commits.iter().any(|commit| commit.sha == sha) {
                        log::info!("Found PR #{} related to commit {}", pull.number, sha);
                        return Some(pull.clone());
                    }
                }
                Err(err) => {
                    log::warn!("Error searching commits for PR #{}: {:#}", pull.number, err);
                }
            }
        }

        if pulls.len() < PER_PAGE {
            return None;
        }
        page += 1;
    }
}
