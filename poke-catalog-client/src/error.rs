/// Errors surfaced by catalog operations.
///
/// Unknown species and absent format/tier scopes are not errors; those
/// return empty results. Only transport and decoding problems reach here.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
