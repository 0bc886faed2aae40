//! Feed assembly: fetch every order once, enrich them concurrently, and hand
//! back one ordered list. The feed is all-or-nothing per request.

use futures_util::stream::{self, StreamExt};
use futures_util::FutureExt;
use log::info;

use crate::clients::{RrpSource, ShopifyClient};
use crate::enrich::enrich_order;
use crate::error::Result;
use crate::models::{EnrichedOrder, Order};

/// Enrich a batch of orders with bounded concurrency.
///
/// At most `max_concurrency` orders are in flight at once; line-item
/// metafield lookups stay sequential within each order. Results come back in
/// input order.
pub async fn enrich_orders<S>(
    orders: &[Order],
    rrp_source: &S,
    max_concurrency: usize,
) -> Vec<EnrichedOrder>
where
    S: RrpSource + ?Sized,
{
    let futures: Vec<_> = orders
        .iter()
        .map(|order| enrich_order(order, rrp_source).boxed())
        .collect();
    stream::iter(futures)
        .buffered(max_concurrency.max(1))
        .collect()
        .await
}

/// Pipeline entry point: one upstream order fetch, then concurrent
/// enrichment of every order.
pub async fn build_orders_feed(
    client: &ShopifyClient,
    max_concurrency: usize,
) -> Result<Vec<EnrichedOrder>> {
    let orders = client.fetch_orders().await?;
    info!("Processing {} orders...", orders.len());

    let enriched = enrich_orders(&orders, client, max_concurrency).await;
    info!("Successfully processed {} orders", enriched.len());
    Ok(enriched)
}
