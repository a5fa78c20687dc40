// Domain layer - core models
pub mod dashboard;
pub mod status;
