// src/domain/repositories/mod.rs
pub mod kv_store;
