//! Upstream API clients.

pub mod shopify;

pub use shopify::{RrpSource, ShopifyClient};
