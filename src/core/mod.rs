// src/core/mod.rs
pub mod engine;
pub mod normalizer;
pub mod resolver;
pub mod types;
