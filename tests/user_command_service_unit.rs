// tests/user_command_service_unit.rs
use clinic_cms::application::{
    commands::users::{CreateAdminCommand, DEFAULT_ADMIN_NAME, LoginUserCommand},
    error::ApplicationError,
};

mod support;
use support::{
    ADMIN_EMAIL, ADMIN_PASSWORD, InMemoryUsers, TEST_TOKEN, admin, build_context,
    build_context_with_users,
};

fn create(email: &str, password: &str, name: Option<&str>) -> CreateAdminCommand {
    CreateAdminCommand {
        email: email.into(),
        password: password.into(),
        name: name.map(Into::into),
    }
}

fn login(email: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        email: email.into(),
        password: password.into(),
    }
}

/// 管理者を作成し、そのままログインできる
#[tokio::test]
async fn create_admin_then_login() {
    let ctx = build_context_with_users(InMemoryUsers::empty());
    let users = &ctx.services.user_commands;

    let created = users
        .create_admin(create("  Doctor@Clinic.Example ", "long enough pw", None))
        .await
        .unwrap();
    assert_eq!(created.email, "doctor@clinic.example");
    assert_eq!(created.name, DEFAULT_ADMIN_NAME);
    assert_eq!(ctx.users.len(), 1);

    let result = users
        .login(login("doctor@clinic.example", "long enough pw"))
        .await
        .unwrap();
    assert_eq!(result.user.id, created.id);
    assert_eq!(result.token.expires_in, 3600);
}

#[tokio::test]
async fn create_admin_rejects_duplicates_and_weak_input() {
    let ctx = build_context();
    let users = &ctx.services.user_commands;

    let err = users
        .create_admin(create(ADMIN_EMAIL, "another password", Some("Twin")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");

    let err = users
        .create_admin(create("new@clinic.example", "short", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");

    let err = users
        .create_admin(create("not-an-email", "long enough pw", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");

    let err = users
        .create_admin(create("new@clinic.example", "long enough pw", Some("   ")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");

    assert_eq!(ctx.users.len(), 2);
}

/// 誤った資格情報はすべて同じ Unauthorized になる
#[tokio::test]
async fn login_failures_do_not_reveal_which_part_was_wrong() {
    let ctx = build_context();
    let users = &ctx.services.user_commands;

    for (email, password) in [
        (ADMIN_EMAIL, "wrong password"),
        ("nobody@clinic.example", ADMIN_PASSWORD),
        ("not-an-email", ADMIN_PASSWORD),
    ] {
        let err = users.login(login(email, password)).await.unwrap_err();
        assert!(
            matches!(&err, ApplicationError::Unauthorized(msg) if msg == "invalid credentials"),
            "{email}: {err:?}"
        );
    }

    let err = users
        .login(login("former@clinic.example", ADMIN_PASSWORD))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");
}

#[tokio::test]
async fn login_issues_token_for_seeded_admin() {
    let ctx = build_context();
    let result = ctx
        .services
        .user_commands
        .login(login(ADMIN_EMAIL, ADMIN_PASSWORD))
        .await
        .unwrap();
    assert_eq!(result.token.token, TEST_TOKEN);

    let profile = ctx.services.user_queries.get_profile(&admin()).await.unwrap();
    assert_eq!(profile.email, ADMIN_EMAIL);
}
