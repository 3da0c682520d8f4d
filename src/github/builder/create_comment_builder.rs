use super::BuilderExecutor;
use crate::github::{dto::comment_dto::CommentDto, github_client::GithubClient, response::Comment};
use anyhow::Result;

pub struct CreateCommentBuilder<'a> {
    client: &'a GithubClient,
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
    pub body: String,
}

impl<'a> CreateCommentBuilder<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
    ) -> Self {
        CreateCommentBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            issue_number,
            body: String::new(),
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl BuilderExecutor for CreateCommentBuilder<'_> {
    type Output = Comment;

    async fn execute(self) -> Result<Self::Output> {
        let comment = CommentDto::new(self.owner, self.repo, self.issue_number, self.body);

        self.client.create_comment(comment).await
    }
}
