mod create_comment_request;

pub use create_comment_request::CreateCommentRequest;
