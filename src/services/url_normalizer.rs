//! URL normalization: repairs raw address-bar input into a canonical
//! absolute URL, or a search-engine URL under the search-fallback policy.
//!
//! Purely syntactic — no network access, no DNS.

use url::Url;

use crate::types::errors::UrlError;
use crate::types::settings::UnparsablePolicy;

/// Search endpoint used by the fallback policy.
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Builds the search-fallback URL for a raw query. The raw text is
/// form-encoded, not the scheme-prefixed candidate.
pub fn search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}?q={}", SEARCH_ENDPOINT, encoded)
}

/// Normalizer holding the configured policy for unparsable input.
pub struct UrlNormalizer {
    policy: UnparsablePolicy,
}

impl UrlNormalizer {
    pub fn new(policy: UnparsablePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnparsablePolicy {
        self.policy
    }

    /// Normalizes raw input into a canonical absolute URL.
    ///
    /// Input already carrying an `http://`/`https://` scheme is kept as-is;
    /// anything else gets `https://` prepended. The candidate then goes
    /// through a strict parse, and the parser-normalized form (lower-cased
    /// host, explicit path) is returned. Parse failures resolve per the
    /// configured [`UnparsablePolicy`]; whitespace-only input is invalid
    /// under either policy.
    pub fn normalize(&self, raw: &str) -> Result<String, UrlError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UrlError::Invalid(raw.to_string()));
        }

        // Scheme detection is case-insensitive; the parser lower-cases the
        // scheme during canonicalization anyway.
        let lowered = trimmed.to_ascii_lowercase();
        let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        match Url::parse(&candidate) {
            Ok(parsed) => Ok(String::from(parsed)),
            Err(_) => match self.policy {
                UnparsablePolicy::SearchFallback => Ok(search_url(trimmed)),
                UnparsablePolicy::ErrorPage => Err(UrlError::Invalid(raw.to_string())),
            },
        }
    }
}

impl Default for UrlNormalizer {
    fn default() -> Self {
        Self::new(UnparsablePolicy::default())
    }
}
