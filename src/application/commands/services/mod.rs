// src/application/commands/services/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateClinicServiceCommand;
pub use delete::DeleteClinicServiceCommand;
pub use service::ClinicServiceCommandService;
pub use update::UpdateClinicServiceCommand;
