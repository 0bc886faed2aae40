//! Feed Core - Shopify order enrichment pipeline.
//!
//! This module provides:
//! - Shopify Admin API client (orders + variant metafields)
//! - Reference-price (RRP) resolution from `sparklayer/rrp` metafields
//! - Currency-aware price normalization with structured-over-plain precedence
//! - Per-order enrichment combining transactional and reference prices
//! - Feed assembly with bounded concurrent order processing

pub mod clients;
pub mod config;
pub mod enrich;
pub mod error;
pub mod feed;
pub mod models;
pub mod pricing;

pub use config::Config;
pub use error::{FeedError, Result};
