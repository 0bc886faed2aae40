//! Data model for the enrichment pipeline.
//!
//! `order` holds the upstream Shopify shapes (deserialized defensively, since
//! the API omits fields freely); `enriched` holds the normalized feed output.

pub mod enriched;
pub mod order;

pub use enriched::{EnrichedLineItem, EnrichedOrder};
pub use order::{
    LineItem, Metafield, MetafieldsResponse, Money, MoneySet, Order, OrdersResponse, RawAmount,
};
