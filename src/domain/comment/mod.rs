// src/domain/comment/mod.rs
//! Patient testimonials shown on the public site.
pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentId, CommentUpdate, Initials, NewComment, Rating};
pub use repository::CommentRepository;
