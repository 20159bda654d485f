use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, UserName},
};

pub const DEFAULT_ADMIN_NAME: &str = "Admin User";

pub struct CreateAdminCommand {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl UserCommandService {
    /// Provision an administrator. Used by the `create_admin` binary; there is
    /// no HTTP route for it.
    pub async fn create_admin(&self, command: CreateAdminCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        let name = UserName::new(
            command
                .name
                .unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
        )?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("a user with this email already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::new(email, name, PasswordHash::new(hashed)?, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = %user.id, "admin account created");
        Ok(user.into())
    }
}
