//! Integration tests for the SnipGuard pipeline
//!
//! See the `tests/` directory for end-to-end scenarios.
