// src/domain/content/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

macro_rules! non_empty_text {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Validation(
                        concat!($label, " cannot be empty").into(),
                    ));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_text!(
    /// Human readable display title of a content item.
    Title,
    "title"
);

non_empty_text!(
    /// URL segment derived from a [`Title`]. Unique per resource type.
    Slug,
    "slug"
);

non_empty_text!(
    /// Long-form text such as a post body or a service description.
    Body,
    "content"
);

impl Body {
    /// Same as [`Body::new`] but names the offending field in the error.
    pub fn named(value: impl Into<String>, field: &str) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(format!("{field} cannot be empty")));
        }
        Ok(Self(value))
    }
}

/// Treat blank optional text as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        let err = Title::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "title cannot be empty"));
    }

    #[test]
    fn empty_slug_is_rejected() {
        assert!(matches!(Slug::new(""), Err(DomainError::Validation(_))));
    }

    #[test]
    fn named_body_reports_field() {
        let err = Body::named("", "description").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "description cannot be empty"));
    }

    #[test]
    fn optional_text_drops_blank_values() {
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some("x".into())), Some("x".into()));
        assert_eq!(optional_text(None), None);
    }
}
