//! Per-order enrichment: currency resolution, wholesale detection, and the
//! pairing of transactional prices with reference prices.

use log::{debug, warn};

use crate::clients::RrpSource;
use crate::models::{EnrichedLineItem, EnrichedOrder, LineItem, Order};
use crate::pricing::format::{resolve_amount, ResolvedAmount};
use crate::pricing::rrp::resolve_reference_price;

/// Substring in the free-text tags field that marks a wholesale order.
const B2B_TAG: &str = "b2b";

/// The currency every price in the order resolves against: presentment
/// currency when the shop presents in the buyer's currency, base currency
/// otherwise.
pub fn effective_currency(order: &Order) -> &str {
    order
        .presentment_currency
        .as_deref()
        .unwrap_or(&order.currency)
}

fn is_b2b(tags: Option<&str>) -> bool {
    tags.map(|t| t.to_lowercase().contains(B2B_TAG))
        .unwrap_or(false)
}

/// Render a required money field, falling back to `0.00` when neither the
/// structured nor the plain form yields a number.
fn format_required(
    resolved: ResolvedAmount,
    currency: &str,
    field: &str,
    order_number: i64,
) -> String {
    match resolved.format(currency) {
        Some(formatted) => formatted,
        None => {
            warn!(
                "Order {}: no usable {} value, defaulting to 0.00",
                order_number, field
            );
            "0.00".to_string()
        }
    }
}

/// Enrich one order.
///
/// Line items are processed in their original order, each with its own
/// metafield lookup; items keep their input position in the output and a
/// failed reference-price resolution affects only that item.
pub async fn enrich_order<S>(order: &Order, rrp_source: &S) -> EnrichedOrder
where
    S: RrpSource + ?Sized,
{
    let currency = effective_currency(order).to_string();
    debug!("Processing order {} ({})", order.order_number, currency);

    let total_discount = format_required(
        resolve_amount(
            order.total_discounts_set.as_ref(),
            order.total_discounts.as_ref(),
        ),
        &currency,
        "total discount",
        order.order_number,
    );
    let total_price = format_required(
        resolve_amount(order.total_price_set.as_ref(), order.total_price.as_ref()),
        &currency,
        "total price",
        order.order_number,
    );

    let mut items = Vec::with_capacity(order.line_items.len());
    for item in &order.line_items {
        items.push(enrich_line_item(item, &currency, order.order_number, rrp_source).await);
    }

    EnrichedOrder {
        order_number: order.order_number,
        order_date: order.created_at.clone(),
        is_b2b: is_b2b(order.tags.as_deref()),
        currency,
        items,
        total_discount,
        total_price,
    }
}

async fn enrich_line_item<S>(
    item: &LineItem,
    currency: &str,
    order_number: i64,
    rrp_source: &S,
) -> EnrichedLineItem
where
    S: RrpSource + ?Sized,
{
    let metafield = match item.variant_id {
        Some(variant_id) => rrp_source.rrp_metafield(variant_id).await,
        None => None,
    };
    let before_price = resolve_reference_price(metafield.as_ref(), currency);

    EnrichedLineItem {
        product_name: item.title.clone(),
        sku: item.sku.clone(),
        quantity: item.quantity,
        before_price,
        your_price: format_required(
            resolve_amount(item.price_set.as_ref(), item.price.as_ref()),
            currency,
            "price",
            order_number,
        ),
        line_item_discount: format_required(
            resolve_amount(
                item.total_discount_set.as_ref(),
                item.total_discount.as_ref(),
            ),
            currency,
            "line discount",
            order_number,
        ),
    }
}
