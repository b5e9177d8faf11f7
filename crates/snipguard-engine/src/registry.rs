//! Pattern registry: immutable built-ins plus a mutable custom overlay
//!
//! The registry is read-mostly and not internally locked; concurrent
//! mutation needs external synchronization. Each scan runs against one
//! [`RegistrySnapshot`] so mid-scan registration can never change the
//! pattern set under a running detector.

use crate::pattern::{self, SecretMatcher, BUILTIN_PATTERNS};
use snipguard_core::{Error, Result, SecretKind};
use std::sync::Arc;
use tracing::debug;

/// Registry of secret patterns
#[derive(Default)]
pub struct PatternRegistry {
    custom: Vec<(String, Arc<dyn SecretMatcher>)>,
}

impl PatternRegistry {
    /// Registry with only the built-in table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom pattern.
    ///
    /// The pattern is compiled and trial-matched before acceptance; on
    /// failure the registry is left unchanged. Built-in names are
    /// namespace-protected and cannot be shadowed. Re-registering an
    /// existing custom name replaces it.
    pub fn register(&mut self, name: &str, pattern: &str) -> Result<()> {
        if pattern::is_builtin_name(name) {
            return Err(Error::ReservedPatternName(name.to_string()));
        }

        let matcher = pattern::validate_custom(name, pattern)?;
        self.custom.retain(|(n, _)| n != name);
        self.custom.push((name.to_string(), matcher));
        debug!(pattern = name, "registered custom pattern");
        Ok(())
    }

    /// Remove a custom pattern. Returns whether it was present.
    /// Built-ins cannot be unregistered.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|(n, _)| n != name);
        self.custom.len() != before
    }

    /// Names of the currently registered custom patterns
    pub fn custom_names(&self) -> Vec<&str> {
        self.custom.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Immutable merged view of built-ins and custom patterns.
    ///
    /// Detectors hold this for the duration of one scan; later registry
    /// mutation does not affect a snapshot already taken.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let mut entries: Vec<(SecretKind, Arc<dyn SecretMatcher>)> = BUILTIN_PATTERNS
            .iter()
            .map(|p| (p.kind.clone(), Arc::clone(&p.matcher)))
            .collect();
        for (name, matcher) in &self.custom {
            entries.push((SecretKind::Custom(name.clone()), Arc::clone(matcher)));
        }
        RegistrySnapshot { entries }
    }
}

/// One immutable merged pattern set, used for the whole of one scan call
pub struct RegistrySnapshot {
    entries: Vec<(SecretKind, Arc<dyn SecretMatcher>)>,
}

impl RegistrySnapshot {
    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<(SecretKind, Arc<dyn SecretMatcher>)>) -> Self {
        Self { entries }
    }

    /// All patterns: built-ins first, then custom entries
    pub fn patterns(&self) -> impl Iterator<Item = (&SecretKind, &Arc<dyn SecretMatcher>)> {
        self.entries.iter().map(|(k, m)| (k, m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_has_builtins() {
        let registry = PatternRegistry::new();
        assert!(registry.snapshot().len() >= 25);
    }

    #[test]
    fn test_register_and_unregister() {
        let mut registry = PatternRegistry::new();
        let base = registry.snapshot().len();

        registry
            .register("vault_token", r"\bhvs\.[A-Za-z0-9]{24,}\b")
            .unwrap();
        assert_eq!(registry.snapshot().len(), base + 1);
        assert_eq!(registry.custom_names(), vec!["vault_token"]);

        assert!(registry.unregister("vault_token"));
        assert!(!registry.unregister("vault_token"));
        assert_eq!(registry.snapshot().len(), base);
    }

    #[test]
    fn test_invalid_pattern_leaves_registry_unchanged() {
        let mut registry = PatternRegistry::new();
        let err = registry.register("broken", "[unclosed").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(registry.custom_names().is_empty());
    }

    #[test]
    fn test_builtin_names_are_protected() {
        let mut registry = PatternRegistry::new();
        let err = registry.register("aws_access_key", r"AKIA.*").unwrap_err();
        assert!(matches!(err, Error::ReservedPatternName(_)));
    }

    #[test]
    fn test_reregister_replaces() {
        let mut registry = PatternRegistry::new();
        registry.register("svc", r"svc-[0-9]{8}").unwrap();
        registry.register("svc", r"svc-[0-9]{12}").unwrap();
        assert_eq!(registry.custom_names(), vec!["svc"]);
    }

    #[test]
    fn test_snapshot_is_stable_across_mutation() {
        let mut registry = PatternRegistry::new();
        let snapshot = registry.snapshot();
        let before = snapshot.len();
        registry.register("svc", r"svc-[0-9]{8}").unwrap();
        assert_eq!(snapshot.len(), before);
    }
}
