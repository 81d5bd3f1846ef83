// src/domain/services/mod.rs
pub mod link_opener;
