use serde::{Deserialize, Serialize};

/// Simulated latency for a fresh navigation, in milliseconds.
pub const DEFAULT_NAVIGATE_DELAY_MS: u64 = 800;
/// Simulated latency for back/forward/refresh, in milliseconds.
pub const DEFAULT_REVISIT_DELAY_MS: u64 = 500;

/// What the URL normalizer does with input that survives scheme-prefixing
/// but still fails a strict parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnparsablePolicy {
    /// Treat the raw text as a search query and synthesize a search-engine
    /// URL. The default.
    #[default]
    SearchFallback,
    /// Report the input as invalid; the tab shows the `about:invalid`
    /// error page.
    ErrorPage,
}

/// User-tunable session settings, persisted as JSON by the settings engine.
///
/// Missing fields deserialize to their defaults, so settings files written
/// by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Key into the built-in personality table.
    pub personality: String,
    /// Overrides the personality's home URL when set.
    pub home_url_override: Option<String>,
    pub navigate_delay_ms: u64,
    pub revisit_delay_ms: u64,
    pub unparsable_input: UnparsablePolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            personality: "classic".to_string(),
            home_url_override: None,
            navigate_delay_ms: DEFAULT_NAVIGATE_DELAY_MS,
            revisit_delay_ms: DEFAULT_REVISIT_DELAY_MS,
            unparsable_input: UnparsablePolicy::default(),
        }
    }
}
