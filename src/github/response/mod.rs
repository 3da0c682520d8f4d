mod comment_response;
mod commit_response;
mod pull_request_response;

pub use comment_response::Comment;
pub use commit_response::Commit;
pub use pull_request_response::PullRequest;
