pub mod builder;
pub mod dto;
pub mod github_client;
pub mod handler;
pub mod macros;
pub mod request;
pub mod response;
