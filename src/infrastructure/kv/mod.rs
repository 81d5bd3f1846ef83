// src/infrastructure/kv/mod.rs
pub mod file_store;
pub mod memory_store;
