use serde::Serialize;

/// One order in the served feed, with every price normalized to a
/// two-decimal string in the order's effective currency.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedOrder {
    #[serde(rename = "orderNumber")]
    pub order_number: i64,
    #[serde(rename = "orderDate")]
    pub order_date: Option<String>,
    #[serde(rename = "isB2B")]
    pub is_b2b: bool,
    pub currency: String,
    pub items: Vec<EnrichedLineItem>,
    #[serde(rename = "totalDiscount")]
    pub total_discount: String,
    #[serde(rename = "totalPrice")]
    pub total_price: String,
}

/// One line item, pairing the transactional price with the reference price
/// resolved from variant metadata. `before_price` serializes as `null` when
/// no reference price matched, so consumers can tell "no RRP" apart from a
/// zero price.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedLineItem {
    #[serde(rename = "productName")]
    pub product_name: String,
    pub sku: Option<String>,
    pub quantity: i64,
    #[serde(rename = "beforePrice")]
    pub before_price: Option<String>,
    #[serde(rename = "yourPrice")]
    pub your_price: String,
    #[serde(rename = "lineItemDiscount")]
    pub line_item_discount: String,
}
