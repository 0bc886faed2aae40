use crate::models::{MoneySet, RawAmount};

/// Format a raw upstream value as a two-decimal string.
///
/// Currency is accepted for future precision variation but every supported
/// currency currently formats to two decimal places. Returns `None` instead
/// of a sentinel when the value is unparseable, so callers can distinguish
/// "zero" from "garbage".
pub fn format_amount(raw: &RawAmount, _currency: &str) -> Option<String> {
    raw.as_f64().map(|v| format!("{:.2}", v))
}

/// Outcome of the precedence rule for one price-bearing field.
///
/// The currency-structured presentment amount wins over the plain field
/// whenever it is present, regardless of the plain field's value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedAmount {
    Structured(RawAmount),
    Plain(RawAmount),
    Missing,
}

impl ResolvedAmount {
    /// Two-decimal rendering of the resolved value, `None` when the field is
    /// missing entirely or the winning value is unparseable.
    pub fn format(&self, currency: &str) -> Option<String> {
        match self {
            ResolvedAmount::Structured(raw) | ResolvedAmount::Plain(raw) => {
                format_amount(raw, currency)
            }
            ResolvedAmount::Missing => None,
        }
    }
}

/// Resolve one money field from its structured set and plain form.
pub fn resolve_amount(set: Option<&MoneySet>, plain: Option<&RawAmount>) -> ResolvedAmount {
    if let Some(money) = set.and_then(|s| s.presentment_money.as_ref()) {
        return ResolvedAmount::Structured(money.amount.clone());
    }
    match plain {
        Some(raw) => ResolvedAmount::Plain(raw.clone()),
        None => ResolvedAmount::Missing,
    }
}
