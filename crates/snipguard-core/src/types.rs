//! Detection records, secret categories, and masking configuration

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Category of a detected secret
///
/// Built-in variants are fixed at compile time; runtime-registered
/// patterns report as `Custom(name)` and line-heuristic hits report as
/// `Context(keyword)` so consumers can tell the namespaces apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretKind {
    /// AWS Access Key ID (AKIA...)
    AwsAccessKey,
    /// AWS Secret Access Key assignment
    AwsSecretKey,
    /// GitHub token (ghp_/gho_/ghu_/ghs_/ghr_ or fine-grained github_pat_)
    GithubToken,
    /// GitLab Personal Access Token (glpat-...)
    GitlabToken,
    /// Slack token (xox[baprs]-...)
    SlackToken,
    /// Stripe secret/restricted key (sk_live_, sk_test_, rk_live_)
    StripeKey,
    /// Google API key (AIza...)
    GoogleApiKey,
    /// SendGrid API key (SG....)
    SendgridKey,
    /// Twilio API key (SK + 32 hex)
    TwilioKey,
    /// npm access token (npm_...)
    NpmToken,
    /// OpenAI API key (sk-..., sk-proj-...)
    OpenaiKey,
    /// Anthropic API key (sk-ant-...)
    AnthropicKey,
    /// DigitalOcean token (dop_v1_/doo_v1_...)
    DigitaloceanToken,
    /// Telegram bot token (digits:alphanum)
    TelegramBotToken,
    /// Heroku API key assignment (uuid)
    HerokuKey,
    /// PEM private key block (BEGIN ... PRIVATE KEY)
    PrivateKey,
    /// PEM certificate block (BEGIN CERTIFICATE)
    Certificate,
    /// JSON Web Token (three base64url segments)
    Jwt,
    /// Database connection string with embedded credentials
    ConnectionString,
    /// Generic `api_key = ...` assignment
    GenericApiKey,
    /// Generic `secret = ...` assignment
    GenericSecret,
    /// Generic `token = ...` assignment
    GenericToken,
    /// Generic `password = ...` assignment
    GenericPassword,
    /// Email address
    Email,
    /// IPv4 address
    Ipv4Address,
    /// IPv6 address
    Ipv6Address,
    /// Phone number
    PhoneNumber,
    /// Credit-card-shaped digit run
    CreditCard,
    /// Bare MD5/SHA-style hex digest
    HashValue,
    /// Runtime-registered custom pattern, by registered name
    Custom(String),
    /// Context-heuristic hit, by the sensitive keyword that triggered it
    Context(String),
}

impl SecretKind {
    /// Confidence tier used as the scoring base
    pub fn tier(&self) -> ConfidenceTier {
        match self {
            SecretKind::AwsAccessKey
            | SecretKind::AwsSecretKey
            | SecretKind::GithubToken
            | SecretKind::GitlabToken
            | SecretKind::SlackToken
            | SecretKind::StripeKey
            | SecretKind::GoogleApiKey
            | SecretKind::SendgridKey
            | SecretKind::TwilioKey
            | SecretKind::NpmToken
            | SecretKind::OpenaiKey
            | SecretKind::AnthropicKey
            | SecretKind::DigitaloceanToken
            | SecretKind::TelegramBotToken
            | SecretKind::HerokuKey
            | SecretKind::PrivateKey
            | SecretKind::Certificate => ConfidenceTier::VeryHigh,
            SecretKind::Jwt | SecretKind::ConnectionString => ConfidenceTier::High,
            SecretKind::GenericApiKey
            | SecretKind::GenericSecret
            | SecretKind::GenericToken
            | SecretKind::GenericPassword
            | SecretKind::Custom(_) => ConfidenceTier::Medium,
            SecretKind::Email
            | SecretKind::Ipv4Address
            | SecretKind::Ipv6Address
            | SecretKind::PhoneNumber
            | SecretKind::CreditCard
            | SecretKind::HashValue => ConfidenceTier::Low,
            SecretKind::Context(_) => ConfidenceTier::Context,
        }
    }

    /// Whether this category matches multi-line delimited blocks.
    /// Multi-line secrets always mask to a literal redaction tag.
    pub fn is_multiline(&self) -> bool {
        matches!(self, SecretKind::PrivateKey | SecretKind::Certificate)
    }

    /// Whether this category came from the context heuristic scanner
    pub fn is_context(&self) -> bool {
        matches!(self, SecretKind::Context(_))
    }

    /// Stable snake_case name, used as the aggregation key in reports
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            SecretKind::AwsAccessKey => Cow::Borrowed("aws_access_key"),
            SecretKind::AwsSecretKey => Cow::Borrowed("aws_secret_key"),
            SecretKind::GithubToken => Cow::Borrowed("github_token"),
            SecretKind::GitlabToken => Cow::Borrowed("gitlab_token"),
            SecretKind::SlackToken => Cow::Borrowed("slack_token"),
            SecretKind::StripeKey => Cow::Borrowed("stripe_key"),
            SecretKind::GoogleApiKey => Cow::Borrowed("google_api_key"),
            SecretKind::SendgridKey => Cow::Borrowed("sendgrid_key"),
            SecretKind::TwilioKey => Cow::Borrowed("twilio_key"),
            SecretKind::NpmToken => Cow::Borrowed("npm_token"),
            SecretKind::OpenaiKey => Cow::Borrowed("openai_key"),
            SecretKind::AnthropicKey => Cow::Borrowed("anthropic_key"),
            SecretKind::DigitaloceanToken => Cow::Borrowed("digitalocean_token"),
            SecretKind::TelegramBotToken => Cow::Borrowed("telegram_bot_token"),
            SecretKind::HerokuKey => Cow::Borrowed("heroku_key"),
            SecretKind::PrivateKey => Cow::Borrowed("private_key"),
            SecretKind::Certificate => Cow::Borrowed("certificate"),
            SecretKind::Jwt => Cow::Borrowed("jwt"),
            SecretKind::ConnectionString => Cow::Borrowed("connection_string"),
            SecretKind::GenericApiKey => Cow::Borrowed("generic_api_key"),
            SecretKind::GenericSecret => Cow::Borrowed("generic_secret"),
            SecretKind::GenericToken => Cow::Borrowed("generic_token"),
            SecretKind::GenericPassword => Cow::Borrowed("generic_password"),
            SecretKind::Email => Cow::Borrowed("email"),
            SecretKind::Ipv4Address => Cow::Borrowed("ipv4_address"),
            SecretKind::Ipv6Address => Cow::Borrowed("ipv6_address"),
            SecretKind::PhoneNumber => Cow::Borrowed("phone_number"),
            SecretKind::CreditCard => Cow::Borrowed("credit_card"),
            SecretKind::HashValue => Cow::Borrowed("hash_value"),
            SecretKind::Custom(name) => Cow::Owned(format!("custom:{name}")),
            SecretKind::Context(keyword) => Cow::Owned(format!("context:{keyword}")),
        }
    }

    /// Uppercase tag used inside literal `[REDACTED_<TAG>]` markers
    pub fn redaction_tag(&self) -> String {
        self.name().replace(':', "_").to_uppercase()
    }
}

impl std::fmt::Display for SecretKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Base confidence tier for a secret category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// Unambiguous provider token or key/certificate block
    VeryHigh,
    /// Structured but reusable shapes (JWT, connection strings)
    High,
    /// Generic key/secret/token/password assignments
    Medium,
    /// PII-like patterns prone to false positives
    Low,
    /// Context-heuristic hits; fixed low confidence, never re-scored
    Context,
}

impl ConfidenceTier {
    /// Base score for this tier
    pub fn base_score(self) -> f64 {
        match self {
            ConfidenceTier::VeryHigh => 0.9,
            ConfidenceTier::High => 0.75,
            ConfidenceTier::Medium => 0.55,
            ConfidenceTier::Low => 0.35,
            ConfidenceTier::Context => 0.3,
        }
    }
}

/// A located span of sensitive text
///
/// `position` and `length` always refer to the original, unmasked
/// content. Detections handed to the masker must be sorted ascending by
/// `position` and must not overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Category that matched
    pub kind: SecretKind,

    /// The exact matched substring from the original content
    pub value: String,

    /// Zero-based byte offset into the original content
    pub position: usize,

    /// Byte length of `value`; kept explicit since masking mutates copies
    pub length: usize,

    /// Confidence score in [0.1, 1.0]
    pub confidence: f64,
}

impl Detection {
    /// Detection with a placeholder confidence, scored later in the pipeline
    pub fn unscored(kind: SecretKind, value: impl Into<String>, position: usize) -> Self {
        let value = value.into();
        let length = value.len();
        Self {
            kind,
            value,
            position,
            length,
            confidence: 0.0,
        }
    }

    /// Exclusive end offset of the span in the original content
    pub fn end(&self) -> usize {
        self.position + self.length
    }

    /// Whether this span overlaps another
    pub fn overlaps(&self, other: &Detection) -> bool {
        self.position < other.end() && other.position < self.end()
    }
}

/// Masking configuration, re-specified per call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Character used to fill masked spans
    pub mask_char: char,

    /// Keep the masked value the same length as the original
    pub preserve_length: bool,

    /// Number of leading characters left visible
    pub show_first: usize,

    /// Number of trailing characters left visible
    pub show_last: usize,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            mask_char: '*',
            preserve_length: true,
            show_first: 4,
            show_last: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tiers() {
        assert_eq!(SecretKind::AwsAccessKey.tier(), ConfidenceTier::VeryHigh);
        assert_eq!(SecretKind::PrivateKey.tier(), ConfidenceTier::VeryHigh);
        assert_eq!(SecretKind::Jwt.tier(), ConfidenceTier::High);
        assert_eq!(SecretKind::ConnectionString.tier(), ConfidenceTier::High);
        assert_eq!(SecretKind::GenericPassword.tier(), ConfidenceTier::Medium);
        assert_eq!(SecretKind::Email.tier(), ConfidenceTier::Low);
        assert_eq!(
            SecretKind::Context("password".into()).tier(),
            ConfidenceTier::Context
        );
    }

    #[test]
    fn test_multiline_kinds() {
        assert!(SecretKind::PrivateKey.is_multiline());
        assert!(SecretKind::Certificate.is_multiline());
        assert!(!SecretKind::Jwt.is_multiline());
        assert!(!SecretKind::Custom("x".into()).is_multiline());
    }

    #[test]
    fn test_context_namespace_is_distinct() {
        let ctx = SecretKind::Context("token".into());
        let pat = SecretKind::GenericToken;
        assert_ne!(ctx, pat);
        assert!(ctx.name().starts_with("context:"));
        assert!(!pat.name().starts_with("context:"));
    }

    #[test]
    fn test_redaction_tag() {
        assert_eq!(SecretKind::PrivateKey.redaction_tag(), "PRIVATE_KEY");
        assert_eq!(
            SecretKind::Custom("vault_token".into()).redaction_tag(),
            "CUSTOM_VAULT_TOKEN"
        );
    }

    #[test]
    fn test_detection_end_and_overlap() {
        let a = Detection::unscored(SecretKind::GenericToken, "abcdef", 10);
        let b = Detection::unscored(SecretKind::Email, "xyz", 14);
        let c = Detection::unscored(SecretKind::Email, "xyz", 16);
        assert_eq!(a.end(), 16);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_detection_length_matches_value() {
        let d = Detection::unscored(SecretKind::GenericSecret, "hunter22", 0);
        assert_eq!(d.length, d.value.len());
    }

    #[test]
    fn test_kind_serde_round_trip() {
        let kinds = vec![
            SecretKind::AwsAccessKey,
            SecretKind::PrivateKey,
            SecretKind::Custom("internal_key".into()),
            SecretKind::Context("password".into()),
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            let back: SecretKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_mask_config_defaults() {
        let config = MaskConfig::default();
        assert_eq!(config.mask_char, '*');
        assert!(config.preserve_length);
        assert_eq!(config.show_first, 4);
        assert_eq!(config.show_last, 4);
    }
}
