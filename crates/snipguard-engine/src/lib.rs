//! SnipGuard Secret Detection and Masking
//!
//! This crate implements the secret-scanning pipeline:
//! - Pattern-based detection (provider tokens, key blocks, PII shapes)
//! - Line-oriented context heuristics for `keyword = value` assignments
//! - Entropy-informed confidence scoring
//! - Offset-stable masking of detected spans
//! - Aggregate reporting and remediation advice

pub mod confidence;
pub mod context;
pub mod detector;
pub mod entropy;
pub mod masker;
pub mod pattern;
pub mod registry;
pub mod report;
pub mod scanner;

pub use confidence::score;
pub use detector::{merge_overlapping, run_patterns, ScanDiagnostic};
pub use entropy::shannon_entropy;
pub use masker::{mask_detections, MaskOutcome};
pub use pattern::{RegexMatcher, SecretMatcher, Span};
pub use registry::{PatternRegistry, RegistrySnapshot};
pub use report::{recommendations, stats, ScanStats};
pub use scanner::{ScanResult, ScannerConfig, SecretScanner};
