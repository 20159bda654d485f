// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod blog;
pub mod comments;
pub mod contact;
pub mod faqs;
pub mod health;
pub mod media;
pub mod services;
pub mod settings;
