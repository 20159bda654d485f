mod service;

pub use service::ClinicServiceQueryService;
