// src/bin/create_admin.rs
use anyhow::{Context, Result, bail};
use clinic_cms::application::commands::users::{CreateAdminCommand, UserCommandService};
use clinic_cms::config::AppConfig;
use clinic_cms::infrastructure::{
    database,
    repositories::PostgresUserRepository,
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use std::sync::Arc;

const USAGE: &str = "usage: create_admin <email> <password> [name]";

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    let name = args.next();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool).await?;

    let users = UserCommandService::new(
        Arc::new(PostgresUserRepository::new(pool)),
        Arc::new(Argon2PasswordHasher),
        Arc::new(BiscuitTokenManager::new(
            config.biscuit_private_key(),
            config.token_ttl(),
        )?),
        Arc::new(SystemClock),
    );

    let admin = users
        .create_admin(CreateAdminCommand {
            email,
            password,
            name,
        })
        .await?;

    println!("created admin {} <{}> ({})", admin.name, admin.email, admin.id);
    Ok(())
}
