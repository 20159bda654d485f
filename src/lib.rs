//! Backend for a clinic website: blog posts and service pages addressed by
//! title-derived slugs, plus FAQs, testimonials, contact messages, media
//! uploads and site settings behind a single admin login.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
