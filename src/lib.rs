// src/lib.rs

pub mod c_api;
pub mod core;
pub mod manifest;

pub use crate::core::engine::TranslatorEngine;
pub use crate::core::types::{SignCard, SignSheet, SignSymbol, TranslationResult, Word};
