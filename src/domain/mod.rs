// src/domain/mod.rs

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn parse(value: &str) -> $crate::domain::errors::DomainResult<Self> {
                uuid::Uuid::parse_str(value).map(Self).map_err(|_| {
                    $crate::domain::errors::DomainError::Validation(format!(
                        "invalid identifier '{value}'"
                    ))
                })
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for uuid::Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

pub mod blog;
pub mod clinic_service;
pub mod comment;
pub mod content;
pub mod errors;
pub mod faq;
pub mod media;
pub mod message;
pub mod settings;
pub mod user;
