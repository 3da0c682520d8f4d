pub struct CommentDto {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
    pub body: String,
}

impl CommentDto {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
        body: impl Into<String>,
    ) -> Self {
        CommentDto {
            owner: owner.into(),
            repo: repo.into(),
            issue_number,
            body: body.into(),
        }
    }
}
