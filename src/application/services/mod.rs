// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            blog::BlogCommandService, comments::CommentCommandService, faqs::FaqCommandService,
            media::MediaCommandService, messages::ContactCommandService,
            services::ClinicServiceCommandService, settings::SettingsCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            security::{PasswordHasher, TokenManager},
            storage::MediaStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            blog::BlogQueryService, comments::CommentQueryService, faqs::FaqQueryService,
            media::MediaQueryService, messages::ContactQueryService,
            services::ClinicServiceQueryService, settings::SettingsQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        blog::{BlogPostReadRepository, BlogPostWriteRepository},
        clinic_service::{ClinicServiceReadRepository, ClinicServiceWriteRepository},
        comment::CommentRepository,
        content::SlugService,
        faq::FaqRepository,
        media::MediaRepository,
        message::ContactMessageRepository,
        settings::SettingsRepository,
        user::UserRepository,
    },
};

/// Store handles injected at startup.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub post_writes: Arc<dyn BlogPostWriteRepository>,
    pub post_reads: Arc<dyn BlogPostReadRepository>,
    pub service_writes: Arc<dyn ClinicServiceWriteRepository>,
    pub service_reads: Arc<dyn ClinicServiceReadRepository>,
    pub faqs: Arc<dyn FaqRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub messages: Arc<dyn ContactMessageRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub media: Arc<dyn MediaRepository>,
}

/// Infrastructure adapters behind the application ports.
#[derive(Clone)]
pub struct Ports {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub media_storage: Arc<dyn MediaStorage>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub service_commands: Arc<ClinicServiceCommandService>,
    pub service_queries: Arc<ClinicServiceQueryService>,
    pub faq_commands: Arc<FaqCommandService>,
    pub faq_queries: Arc<FaqQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub contact_queries: Arc<ContactQueryService>,
    pub settings_commands: Arc<SettingsCommandService>,
    pub settings_queries: Arc<SettingsQueryService>,
    pub media_commands: Arc<MediaCommandService>,
    pub media_queries: Arc<MediaQueryService>,
    token_manager: Arc<dyn TokenManager>,
    user_repo: Arc<dyn UserRepository>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports) -> Self {
        let Ports {
            password_hasher,
            token_manager,
            media_storage,
            clock,
            slugger,
        } = ports;

        let post_slugs = Arc::new(SlugService::new(
            Arc::clone(&repos.post_reads),
            Arc::clone(&slugger),
            "post",
        ));
        let service_slugs = Arc::new(SlugService::new(
            Arc::clone(&repos.service_reads),
            Arc::clone(&slugger),
            "service",
        ));

        Self {
            user_commands: Arc::new(UserCommandService::new(
                Arc::clone(&repos.users),
                password_hasher,
                Arc::clone(&token_manager),
                Arc::clone(&clock),
            )),
            user_queries: Arc::new(UserQueryService::new(Arc::clone(&repos.users))),
            blog_commands: Arc::new(BlogCommandService::new(
                Arc::clone(&repos.post_writes),
                Arc::clone(&repos.post_reads),
                post_slugs,
                Arc::clone(&clock),
            )),
            blog_queries: Arc::new(BlogQueryService::new(Arc::clone(&repos.post_reads))),
            service_commands: Arc::new(ClinicServiceCommandService::new(
                Arc::clone(&repos.service_writes),
                Arc::clone(&repos.service_reads),
                service_slugs,
                Arc::clone(&clock),
            )),
            service_queries: Arc::new(ClinicServiceQueryService::new(Arc::clone(
                &repos.service_reads,
            ))),
            faq_commands: Arc::new(FaqCommandService::new(
                Arc::clone(&repos.faqs),
                Arc::clone(&clock),
            )),
            faq_queries: Arc::new(FaqQueryService::new(Arc::clone(&repos.faqs))),
            comment_commands: Arc::new(CommentCommandService::new(
                Arc::clone(&repos.comments),
                Arc::clone(&clock),
            )),
            comment_queries: Arc::new(CommentQueryService::new(Arc::clone(&repos.comments))),
            contact_commands: Arc::new(ContactCommandService::new(
                Arc::clone(&repos.messages),
                Arc::clone(&clock),
            )),
            contact_queries: Arc::new(ContactQueryService::new(Arc::clone(&repos.messages))),
            settings_commands: Arc::new(SettingsCommandService::new(
                Arc::clone(&repos.settings),
                Arc::clone(&clock),
            )),
            settings_queries: Arc::new(SettingsQueryService::new(
                Arc::clone(&repos.settings),
                Arc::clone(&clock),
            )),
            media_commands: Arc::new(MediaCommandService::new(
                Arc::clone(&repos.media),
                media_storage,
                clock,
            )),
            media_queries: Arc::new(MediaQueryService::new(Arc::clone(&repos.media))),
            token_manager,
            user_repo: repos.users,
        }
    }

    /// Verify a raw bearer token and make sure the account behind it can
    /// still act as admin.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        match self.user_repo.find_by_id(user.id).await? {
            Some(account) if account.is_active => Ok(user),
            Some(_) => Err(ApplicationError::forbidden("account is disabled")),
            None => Err(ApplicationError::unauthorized("unknown account")),
        }
    }
}
