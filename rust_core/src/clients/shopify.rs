//! Shopify Admin API client.
//!
//! Two read-only operations back the feed: the bulk order fetch and the
//! per-variant metafield lookup. Order-fetch failures abort the feed request;
//! metafield failures are absorbed locally so a single variant cannot take
//! the whole feed down.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{FeedError, Result};
use crate::models::{Metafield, MetafieldsResponse, Order, OrdersResponse};

const API_VERSION: &str = "2024-01";

/// Field projection for the order fetch; everything downstream needs and
/// nothing more.
const ORDER_FIELDS: &str = "id,order_number,created_at,tags,currency,presentment_currency,\
total_discounts,total_price,line_items,total_shipping_price_set,total_discounts_set,\
total_price_set";

const RRP_NAMESPACE: &str = "sparklayer";
const RRP_KEY: &str = "rrp";

/// Source of reference-price metafields keyed by variant id.
///
/// The live client implements this against the metafields endpoint; tests
/// substitute an in-memory map so enrichment runs without a network.
#[async_trait]
pub trait RrpSource: Send + Sync {
    async fn rrp_metafield(&self, variant_id: i64) -> Option<Metafield>;
}

#[derive(Clone)]
pub struct ShopifyClient {
    client: Client,
    shop_url: String,
    access_token: String,
}

impl std::fmt::Debug for ShopifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyClient")
            .field("shop_url", &self.shop_url)
            .field("has_token", &!self.access_token.is_empty())
            .finish()
    }
}

impl ShopifyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            shop_url: config.shop_url.clone(),
            access_token: config.access_token.clone(),
        }
    }

    /// Fetch all orders regardless of status, projected to the fields the
    /// pipeline consumes.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>> {
        let url = format!(
            "https://{}/admin/api/{}/orders.json?status=any&fields={}",
            self.shop_url, API_VERSION, ORDER_FIELDS
        );
        debug!("Fetching orders: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FeedError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: OrdersResponse = serde_json::from_str(&body)
            .map_err(|e| FeedError::Format(format!("orders response: {}", e)))?;

        let orders = data
            .orders
            .ok_or_else(|| FeedError::Format("no orders array in response".to_string()))?;

        info!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    /// Fetch the RRP metafield for one variant.
    ///
    /// Any failure (transport, upstream status, response shape) is logged
    /// and mapped to `None`; enrichment tolerates variants without a
    /// reference price.
    pub async fn fetch_variant_rrp_metafield(&self, variant_id: i64) -> Option<Metafield> {
        let url = format!(
            "https://{}/admin/api/{}/variants/{}/metafields.json",
            self.shop_url, API_VERSION, variant_id
        );
        debug!("Fetching metafields for variant {}: {}", variant_id, url);

        match self.try_fetch_metafields(&url).await {
            Ok(metafields) => {
                debug!(
                    "Received {} metafields for variant {}",
                    metafields.len(),
                    variant_id
                );
                let found = metafields
                    .into_iter()
                    .find(|m| m.namespace == RRP_NAMESPACE && m.key == RRP_KEY);
                if found.is_none() {
                    debug!("No RRP metafield for variant {}", variant_id);
                }
                found
            }
            Err(e) => {
                warn!("Metafield lookup failed for variant {}: {}", variant_id, e);
                None
            }
        }
    }

    async fn try_fetch_metafields(&self, url: &str) -> Result<Vec<Metafield>> {
        let response = self
            .client
            .get(url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FeedError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: MetafieldsResponse = serde_json::from_str(&body)
            .map_err(|e| FeedError::Format(format!("metafields response: {}", e)))?;
        Ok(data.metafields)
    }
}

#[async_trait]
impl RrpSource for ShopifyClient {
    async fn rrp_metafield(&self, variant_id: i64) -> Option<Metafield> {
        self.fetch_variant_rrp_metafield(variant_id).await
    }
}
