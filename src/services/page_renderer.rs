//! Presentation adapter boundary: maps `(url, loading)` to display
//! content. The navigation core never inspects what comes back.

use crate::services::navigation::{self, ABOUT_INVALID, INVALID_URL_TITLE};
use crate::types::page::PageContent;

/// Trait implemented by presentation layers consuming engine state.
pub trait ContentRenderer {
    fn render(&self, url: &str, loading: bool) -> PageContent;
}

/// Built-in placeholder renderer for the simulation: a loading page, a
/// special-cased error page for the `about:invalid` sentinel, and a
/// hostname-derived placeholder for everything else.
pub struct PlaceholderRenderer;

impl ContentRenderer for PlaceholderRenderer {
    fn render(&self, url: &str, loading: bool) -> PageContent {
        if loading {
            return PageContent {
                heading: "Loading...".to_string(),
                body: format!("Fetching {}", url),
                error: false,
            };
        }
        if url == ABOUT_INVALID {
            return PageContent {
                heading: INVALID_URL_TITLE.to_string(),
                body: "The address could not be understood. Check the URL and try again."
                    .to_string(),
                error: true,
            };
        }
        PageContent {
            heading: navigation::resolve_title(url),
            body: format!(
                "Page content for {} would be displayed here. This is a simulation; no network request was made.",
                url
            ),
            error: false,
        }
    }
}
