pub mod blog;
pub mod comments;
pub mod faqs;
pub mod media;
pub mod messages;
pub mod services;
pub mod settings;
pub mod users;
