use std::fmt;

use crate::types::tab::TabId;

// === UrlError ===

/// Errors produced by URL normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The raw input cannot be repaired into a usable address.
    Invalid(String),
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::Invalid(raw) => write!(f, "Invalid URL input: {}", raw),
        }
    }
}

impl std::error::Error for UrlError {}

// === TabError ===

/// Errors related to tab registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(TabId),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
        }
    }
}

impl std::error::Error for TabError {}

// === NavigationError ===

/// Errors related to navigation controller operations.
///
/// Illegal history moves are not errors: `back`/`forward` report them as a
/// `false` return and leave the tab untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The operation targeted a tab id not present in the registry.
    UnknownTab(TabId),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::UnknownTab(id) => write!(f, "Unknown tab: {}", id),
        }
    }
}

impl std::error::Error for NavigationError {}

// === SettingsError ===

/// Errors related to settings persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing the settings file.
    Io(String),
    /// Failed to serialize or deserialize settings.
    Serialization(String),
    /// The given personality key does not exist in the personality table.
    UnknownPersonality(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::Serialization(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::UnknownPersonality(key) => {
                write!(f, "Unknown personality: {}", key)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
