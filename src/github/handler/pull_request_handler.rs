use crate::github::{
    github_client::GithubClient,
    response::{Commit, PullRequest},
};
use anyhow::Result;

const OPEN: &str = "open";

pub struct PullRequestsHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> PullRequestsHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        PullRequestsHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// One page of open pull requests, in the order the API returns them
    pub async fn list_open(&self, page: u32) -> Result<Vec<PullRequest>> {
        self.client
            .list_pull_requests(&self.owner, &self.repo, OPEN, page)
            .await
    }
}

pub struct PullRequestHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    number: u64,
}

impl<'a> PullRequestHandler<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
    ) -> Self {
        PullRequestHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    pub async fn commits(&self) -> Result<Vec<Commit>> {
        self.client
            .list_pull_request_commits(&self.owner, &self.repo, self.number)
            .await
    }
}
