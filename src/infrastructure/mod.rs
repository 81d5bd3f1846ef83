// src/infrastructure/mod.rs
pub mod di;
pub mod error;
pub mod json;
pub mod kv;
pub mod link_opener;
