// Application layer - use cases and repository seams
pub mod dashboard_service;
pub mod document_repository;
