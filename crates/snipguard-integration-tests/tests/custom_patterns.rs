//! Custom pattern registration exercised through the full pipeline

use snipguard_core::{Error, MaskConfig, SecretKind};
use snipguard_engine::SecretScanner;

#[test]
fn custom_pattern_detects_and_masks() {
    let mut scanner = SecretScanner::new();
    scanner
        .register_pattern("internal_service_key", r"\bsvc-[0-9a-f]{24}\b")
        .unwrap();

    let content = "deploy with svc-0123456789abcdef01234567 from CI";
    let result = scanner.detect(content);
    let hit = result
        .detections
        .iter()
        .find(|d| d.kind == SecretKind::Custom("internal_service_key".into()))
        .expect("custom pattern fired");
    assert_eq!(hit.value, "svc-0123456789abcdef01234567");

    let outcome = scanner.mask(content, &MaskConfig::default());
    assert!(outcome.content.starts_with("deploy with "));
    assert!(outcome.content.ends_with(" from CI"));
    assert!(!outcome.content.contains("svc-0123456789abcdef01234567"));
}

#[test]
fn invalid_custom_pattern_is_rejected_before_scanning() {
    let mut scanner = SecretScanner::new();
    let err = scanner.register_pattern("broken", "(unclosed").unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { .. }));

    // Registry unchanged: a scan behaves exactly as with no custom patterns
    let clean = SecretScanner::new();
    let content = "password = hunter22secret";
    assert_eq!(
        scanner.detect(content).detections,
        clean.detect(content).detections
    );
}

#[test]
fn builtin_names_cannot_be_shadowed() {
    let mut scanner = SecretScanner::new();
    let err = scanner
        .register_pattern("aws_access_key", r"AKIA.*")
        .unwrap_err();
    assert!(matches!(err, Error::ReservedPatternName(_)));
}

#[test]
fn scan_result_serializes_to_json() {
    let mut scanner = SecretScanner::new();
    scanner
        .register_pattern("internal_service_key", r"\bsvc-[0-9a-f]{24}\b")
        .unwrap();

    let result = scanner.detect("key svc-0123456789abcdef01234567");
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["detections"].is_array());
    assert!(json["diagnostics"].is_array());

    let detections = json["detections"].as_array().unwrap();
    assert!(!detections.is_empty());
    assert!(detections[0]["confidence"].is_number());
}
