//! Service configuration loaded once at startup from environment variables.
//!
//! The pipeline never reads ambient environment state; everything it needs is
//! captured in an immutable `Config` passed down at construction time.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Shop host, e.g. `my-shop.myshopify.com` (no scheme).
    pub shop_url: String,
    /// Static Admin API access token sent as `X-Shopify-Access-Token`.
    pub access_token: String,
    /// Listen port for the feed server (default: 3000).
    pub port: u16,
    /// Maximum orders enriched concurrently per feed request (default: 4).
    pub max_concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing credentials are not an error here: calls fail at the upstream
    /// boundary with an authorization error instead, which the feed surfaces.
    pub fn from_env() -> Self {
        Self {
            shop_url: env::var("SHOPIFY_SHOP_URL").unwrap_or_default(),
            access_token: env::var("SHOPIFY_ACCESS_TOKEN").unwrap_or_default(),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            max_concurrency: env::var("FEED_MAX_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
        }
    }

    /// Log current configuration (useful at startup). Never logs the token.
    pub fn log_config(&self) {
        log::info!("Config loaded:");
        log::info!("  shop_url configured: {}", !self.shop_url.is_empty());
        log::info!(
            "  access_token configured: {}",
            !self.access_token.is_empty()
        );
        log::info!("  port: {}", self.port);
        log::info!("  max_concurrency: {}", self.max_concurrency);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        env::remove_var("PORT");
        env::remove_var("FEED_MAX_CONCURRENCY");

        let config = Config::from_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.max_concurrency, 4);
    }
}
