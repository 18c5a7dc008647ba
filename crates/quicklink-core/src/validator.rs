use crate::error::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt::Display;
use url::Url;

/// Schemes accepted by [`UrlPolicy::default`].
pub const DEFAULT_SCHEMES: [&str; 2] = ["http", "https"];

/// A long URL that passed validation: absolute, with an accepted scheme and
/// a non-empty host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongUrl(Url);

impl LongUrl {
    /// Returns the URL in its normalized serialization.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    pub fn host(&self) -> &str {
        // validated on construction
        self.0.host_str().unwrap_or_default()
    }
}

impl Display for LongUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LongUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Syntactic rules a long URL must satisfy. No reachability check is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPolicy {
    schemes: Vec<String>,
}

impl Default for UrlPolicy {
    fn default() -> Self {
        Self::with_schemes(DEFAULT_SCHEMES)
    }
}

impl UrlPolicy {
    /// Creates a policy accepting the given schemes (compared case-insensitively).
    pub fn with_schemes<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            schemes: schemes
                .into_iter()
                .map(|s| s.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }

    pub fn allows(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Validates `input` as an absolute URL.
    ///
    /// Blank input is rejected with [`ValidationError::EmptyInput`] before
    /// any parsing happens.
    pub fn validate(&self, input: &str) -> Result<LongUrl, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let url = Url::parse(input)
            .map_err(|e| ValidationError::InvalidUrl(format!("{}: {}", input.trim(), e)))?;

        if !self.allows(url.scheme()) {
            return Err(ValidationError::InvalidUrl(format!(
                "unsupported scheme '{}', expected one of: {}",
                url.scheme(),
                self.schemes.join(", ")
            )));
        }

        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(LongUrl(url)),
            _ => Err(ValidationError::InvalidUrl(format!(
                "missing host: {}",
                input.trim()
            ))),
        }
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}

/// Validates `input` against the default http/https policy.
pub fn validate(input: &str) -> Result<LongUrl, ValidationError> {
    UrlPolicy::default().validate(input)
}

pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_http_urls() {
        for input in [
            "https://example.com/page",
            "http://example.com",
            "https://sub.example.co.uk:8443/a/b?q=1#frag",
            "HTTPS://EXAMPLE.COM",
            "http://127.0.0.1:8080/",
            "https://[::1]/",
        ] {
            assert!(is_valid(input), "{input} should be valid");
        }
    }

    #[test]
    fn rejects_blank_input_as_empty() {
        for input in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(validate(input), Err(ValidationError::EmptyInput));
        }
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(matches!(
            validate("example.com"),
            Err(ValidationError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate("www.example.com/page"),
            Err(ValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn rejects_non_url_text() {
        assert!(matches!(
            validate("not a url"),
            Err(ValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn rejects_missing_host() {
        assert!(matches!(
            validate("http://"),
            Err(ValidationError::InvalidUrl(_))
        ));

        let policy = UrlPolicy::with_schemes(["file"]);
        assert!(matches!(
            policy.validate("file:///etc/hosts"),
            Err(ValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn rejects_unsupported_schemes() {
        for input in ["ftp://example.com", "mailto:user@example.com", "javascript:alert(1)"] {
            assert!(
                matches!(validate(input), Err(ValidationError::InvalidUrl(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn custom_policy_widens_schemes() {
        let policy = UrlPolicy::with_schemes(["http", "https", "FTP"]);
        assert!(policy.allows("ftp"));
        assert!(policy.is_valid("ftp://files.example.com/pub"));
        assert!(!policy.is_valid("mailto:user@example.com"));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let url = validate("  https://example.com/page  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
        assert_eq!(url.host(), "example.com");
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn serializes_as_string() {
        let url = validate("https://example.com").unwrap();
        assert_eq!(
            serde_json::to_string(&url).unwrap(),
            "\"https://example.com/\""
        );
    }
}
