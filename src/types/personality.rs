use serde::Serialize;

/// Visual tokens a presentation layer may apply for a personality.
///
/// The navigation core never reads these; they ride along so an external
/// shell can theme itself from the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleTokens {
    pub background: &'static str,
    pub foreground: &'static str,
    pub accent: &'static str,
    pub chrome: &'static str,
}

/// A browser personality: display name, home URL, and style tokens,
/// selected by key.
///
/// The four variants are one data-driven table rather than per-name
/// branches; the navigation controller only ever reads `home_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrowserPersonality {
    pub key: &'static str,
    pub name: &'static str,
    pub home_url: &'static str,
    pub style: StyleTokens,
}

/// The built-in personality table. The first entry is the default.
pub const PERSONALITIES: [BrowserPersonality; 4] = [
    BrowserPersonality {
        key: "classic",
        name: "Classic",
        home_url: "https://www.example.com",
        style: StyleTokens {
            background: "#ffffff",
            foreground: "#24292f",
            accent: "#0969da",
            chrome: "#f6f8fa",
        },
    },
    BrowserPersonality {
        key: "midnight",
        name: "Midnight",
        home_url: "https://github.com",
        style: StyleTokens {
            background: "#0d1117",
            foreground: "#c9d1d9",
            accent: "#58a6ff",
            chrome: "#161b22",
        },
    },
    BrowserPersonality {
        key: "paper",
        name: "Paper",
        home_url: "https://en.wikipedia.org",
        style: StyleTokens {
            background: "#f4ecd8",
            foreground: "#3b2f2f",
            accent: "#8b4513",
            chrome: "#e9ddc0",
        },
    },
    BrowserPersonality {
        key: "neon",
        name: "Neon",
        home_url: "https://news.ycombinator.com",
        style: StyleTokens {
            background: "#000000",
            foreground: "#39ff14",
            accent: "#ff6ec7",
            chrome: "#111111",
        },
    },
];

impl BrowserPersonality {
    /// Looks up a personality by key.
    pub fn by_key(key: &str) -> Option<&'static BrowserPersonality> {
        PERSONALITIES.iter().find(|p| p.key == key)
    }

    /// The default personality (first table entry).
    pub fn default_personality() -> &'static BrowserPersonality {
        &PERSONALITIES[0]
    }
}
