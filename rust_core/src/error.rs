use thiserror::Error;

/// Failures that abort a whole feed request.
///
/// Per-item metafield problems are deliberately not represented here: a
/// missing or malformed reference price resolves to `None` at the item level
/// and never propagates.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error reaching Shopify: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Shopify API responded with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid response format from Shopify API: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
