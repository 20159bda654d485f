mod create_admin;
mod login;
mod password;
mod service;

pub use create_admin::{CreateAdminCommand, DEFAULT_ADMIN_NAME};
pub use login::{LoginResult, LoginUserCommand};
pub use service::UserCommandService;
