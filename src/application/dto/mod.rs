pub mod auth;
pub mod blog;
pub mod comments;
pub mod faqs;
pub mod media;
pub mod messages;
pub mod pagination;
pub mod services;
pub mod settings;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use blog::{AuthorDto, BlogPostDto};
pub use comments::CommentDto;
pub use faqs::FaqDto;
pub use media::MediaDto;
pub use messages::ContactMessageDto;
pub use pagination::Paginated;
pub use services::ClinicServiceDto;
pub use settings::SiteSettingsDto;
pub use users::UserDto;
