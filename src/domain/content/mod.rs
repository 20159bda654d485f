pub mod pagination;
pub mod services;
pub mod slug;
pub mod value_objects;

pub use pagination::{Page, PageRequest};
pub use services::{SlugIndex, SlugService};
pub use slug::slugify;
pub use value_objects::{Body, Slug, Title, optional_text};
