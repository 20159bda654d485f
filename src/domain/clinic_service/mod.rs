// src/domain/clinic_service/mod.rs
//! Treatments and procedures the clinic advertises.
pub mod entity;
pub mod repository;

pub use entity::{ClinicService, ClinicServiceUpdate, NewClinicService, ServiceId};
pub use repository::{ClinicServiceReadRepository, ClinicServiceWriteRepository};
