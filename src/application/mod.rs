// marklet/src/application/mod.rs
pub mod error;
pub mod services;

// Re-export key services for easier imports
pub use services::session_service_impl::SessionServiceImpl;
