use serde::{Deserialize, Serialize};

/// A numeric-like value as Shopify sends it: usually a decimal string
/// (`"50.00"`), occasionally a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(f64),
}

impl RawAmount {
    /// Numeric value of the raw amount, or `None` when unparseable.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawAmount::Text(s) => s.trim().parse::<f64>().ok(),
            RawAmount::Number(n) if n.is_finite() => Some(*n),
            RawAmount::Number(_) => None,
        }
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

/// A currency-structured monetary amount.
#[derive(Debug, Clone, Deserialize)]
pub struct Money {
    pub amount: RawAmount,
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Shop/presentment money pair attached to price-bearing order fields.
/// The presentment side takes precedence over the plain field when present.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneySet {
    #[serde(default)]
    pub shop_money: Option<Money>,
    #[serde(default)]
    pub presentment_money: Option<Money>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    pub title: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub quantity: i64,
    /// Variant the RRP metafield is attached to. Absent for custom items.
    #[serde(default)]
    pub variant_id: Option<i64>,
    #[serde(default)]
    pub price: Option<RawAmount>,
    #[serde(default)]
    pub total_discount: Option<RawAmount>,
    #[serde(default)]
    pub price_set: Option<MoneySet>,
    #[serde(default)]
    pub total_discount_set: Option<MoneySet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<i64>,
    pub order_number: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Free-text comma-separated tags; `b2b` anywhere marks a wholesale order.
    #[serde(default)]
    pub tags: Option<String>,
    pub currency: String,
    #[serde(default)]
    pub presentment_currency: Option<String>,
    #[serde(default)]
    pub total_discounts: Option<RawAmount>,
    #[serde(default)]
    pub total_price: Option<RawAmount>,
    #[serde(default)]
    pub total_discounts_set: Option<MoneySet>,
    #[serde(default)]
    pub total_price_set: Option<MoneySet>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// Envelope of `GET /orders.json`. `orders` stays optional so a shape
/// mismatch is reported as a format error rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Option<Vec<Order>>,
}

/// A namespaced key/value attribute attached to a variant by an app
/// integration. The pipeline only ever reads these.
#[derive(Debug, Clone, Deserialize)]
pub struct Metafield {
    pub namespace: String,
    pub key: String,
    /// Metafield payload. Kept as a raw JSON value because variants carry
    /// metafields of arbitrary types; RRP entries arrive as a JSON string
    /// that itself encodes an array of `{currency_code, value}` objects.
    pub value: serde_json::Value,
}

/// Envelope of `GET /variants/{id}/metafields.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetafieldsResponse {
    #[serde(default)]
    pub metafields: Vec<Metafield>,
}
