// src/infrastructure/di/mod.rs
pub mod service_container;
