// src/domain/mod.rs
pub mod bookmark;
pub mod color;
pub mod draft;
pub mod error;
pub mod event;
pub mod repositories;
pub mod selection;
pub mod services;
