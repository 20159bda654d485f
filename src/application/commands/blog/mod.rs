// src/application/commands/blog/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateBlogPostCommand, CreateBlogPostCommandBuilder};
pub use delete::DeleteBlogPostCommand;
pub use service::BlogCommandService;
pub use update::UpdateBlogPostCommand;
