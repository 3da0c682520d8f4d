pub mod comment_dto;
