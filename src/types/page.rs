use serde::Serialize;

/// Display content for one page, produced by a presentation adapter from
/// `(url, loading)`.
///
/// The navigation core never inspects this; it exists purely for rendering
/// layers and the RPC surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub heading: String,
    pub body: String,
    /// True when the content represents the invalid-address error page.
    pub error: bool,
}
