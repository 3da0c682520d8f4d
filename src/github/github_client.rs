use super::{
    dto::comment_dto::CommentDto,
    handler::repository_handler::RepositoryHandler,
    request::CreateCommentRequest,
    response::{Comment, Commit, PullRequest},
};
use crate::{get, http, http::HttpClient, post};
use anyhow::Result;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Page size for list endpoints, the maximum GitHub accepts
pub const PER_PAGE: usize = 100;

#[derive(Clone)]
pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub fn repo(
        &self,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(super) async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        state: &str,
        page: u32,
    ) -> Result<Vec<PullRequest>> {
        let uri = format!(
            "{}/repos/{}/{}/pulls?state={}&per_page={}&page={}",
            self.api_url, owner, repo, state, PER_PAGE, page
        );

        let response = get!(self, &uri)?;
        let pulls = http::parse::<Vec<PullRequest>>(&response)?;

        Ok(pulls)
    }

    /// Collects every page of the pull request commit list
    pub(super) async fn list_pull_request_commits(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<Commit>> {
        let mut commits = Vec::new();
        let mut page = 1;

        loop {
            let uri = format!(
                "{}/repos/{}/{}/pulls/{}/commits?per_page={}&page={}",
                self.api_url, owner, repo, pull_number, PER_PAGE, page
            );

            let response = get!(self, &uri)?;
            let batch = http::parse::<Vec<Commit>>(&response)?;
            let last_page = batch.len() < PER_PAGE;

            commits.extend(batch);

            if last_page {
                break;
            }
            page += 1;
        }

        Ok(commits)
    }

    pub(super) async fn create_comment(&self, comment: CommentDto) -> Result<Comment> {
        log::debug!("Creating comment on #{}", comment.issue_number);
        let uri = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, comment.owner, comment.repo, comment.issue_number
        );

        let request = CreateCommentRequest::new(comment.body);
        let body: String = serde_json::to_string(&request)?;

        let response = post!(self, &uri, body)?;
        let comment = http::parse::<Comment>(&response)?;

        Ok(comment)
    }
}
