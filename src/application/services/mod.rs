// src/application/services/mod.rs
pub mod session_service;
pub mod session_service_impl;
