//! SnipGuard Core Types
//!
//! This crate provides the fundamental types shared across SnipGuard:
//! - Detection records and secret categories
//! - Masking configuration
//! - Core error types

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ConfidenceTier, Detection, MaskConfig, SecretKind};
