//! Aggregate reporting and remediation advice

use serde::{Deserialize, Serialize};
use snipguard_core::{Detection, SecretKind};
use std::collections::HashMap;

/// Counts and confidence buckets for one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of detections
    pub total: usize,

    /// Detections per kind name
    pub by_kind: HashMap<String, usize>,

    /// Detections with confidence >= 0.8
    pub high_confidence: usize,

    /// Detections with confidence in [0.5, 0.8)
    pub medium_confidence: usize,

    /// Detections with confidence < 0.5
    pub low_confidence: usize,
}

/// Aggregate detections into counts and confidence buckets
pub fn stats(detections: &[Detection]) -> ScanStats {
    let mut by_kind: HashMap<String, usize> = HashMap::new();
    let mut high = 0;
    let mut medium = 0;
    let mut low = 0;

    for detection in detections {
        *by_kind.entry(detection.kind.name().into_owned()).or_insert(0) += 1;
        if detection.confidence >= 0.8 {
            high += 1;
        } else if detection.confidence >= 0.5 {
            medium += 1;
        } else {
            low += 1;
        }
    }

    ScanStats {
        total: detections.len(),
        by_kind,
        high_confidence: high,
        medium_confidence: medium,
        low_confidence: low,
    }
}

/// One remediation message per distinct detection kind, de-duplicated,
/// ordered by first occurrence in the detection list.
pub fn recommendations(detections: &[Detection]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for detection in detections {
        let advice = advice_for(&detection.kind);
        if !seen.contains(&advice) {
            seen.push(advice);
        }
    }
    seen
}

fn advice_for(kind: &SecretKind) -> String {
    match kind {
        SecretKind::AwsAccessKey | SecretKind::AwsSecretKey => {
            "Revoke the AWS credential in IAM, rotate it, and load it from the environment or a secret store".into()
        }
        SecretKind::GithubToken | SecretKind::GitlabToken => {
            "Revoke the VCS access token and re-issue it with the minimum required scopes".into()
        }
        SecretKind::SlackToken
        | SecretKind::StripeKey
        | SecretKind::GoogleApiKey
        | SecretKind::SendgridKey
        | SecretKind::TwilioKey
        | SecretKind::NpmToken
        | SecretKind::OpenaiKey
        | SecretKind::AnthropicKey
        | SecretKind::DigitaloceanToken
        | SecretKind::TelegramBotToken
        | SecretKind::HerokuKey => {
            "Rotate the provider API key from its console and move it to a secret manager".into()
        }
        SecretKind::PrivateKey => {
            "Treat the private key as compromised: generate a new key pair and revoke anything signed with it".into()
        }
        SecretKind::Certificate => {
            "Remove the certificate from the snippet and distribute it through your PKI tooling instead".into()
        }
        SecretKind::Jwt => {
            "Invalidate the session token and shorten token lifetimes; never share bearer tokens in snippets".into()
        }
        SecretKind::ConnectionString => {
            "Change the database password and reference the connection string from an environment variable".into()
        }
        SecretKind::GenericApiKey
        | SecretKind::GenericSecret
        | SecretKind::GenericToken
        | SecretKind::GenericPassword => {
            "Move the hardcoded credential to an environment variable or secret store and rotate it".into()
        }
        SecretKind::Email | SecretKind::PhoneNumber => {
            "Replace personal contact details with placeholder values before sharing".into()
        }
        SecretKind::Ipv4Address | SecretKind::Ipv6Address => {
            "Replace internal addresses with documentation ranges (e.g. 192.0.2.0/24)".into()
        }
        SecretKind::CreditCard => {
            "Never include payment card numbers in snippets; use test card numbers instead".into()
        }
        SecretKind::HashValue => {
            "Verify the hash is not a credential digest; prefer synthetic sample data".into()
        }
        SecretKind::Custom(name) => {
            format!("Rotate the credential matched by custom pattern '{name}' and store it outside the code")
        }
        SecretKind::Context(keyword) => {
            format!("Review the '{keyword}' assignment and move any real credential to a secret store")
        }
    }
}
