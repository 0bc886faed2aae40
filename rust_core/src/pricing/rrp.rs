use log::warn;
use serde::Deserialize;

use crate::models::{Metafield, RawAmount};
use crate::pricing::format::format_amount;

/// One per-currency entry inside the RRP metafield payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RrpEntry {
    pub currency_code: String,
    pub value: RawAmount,
}

/// Resolve the reference price for one line item.
///
/// The metafield value is a JSON-encoded array of `{currency_code, value}`
/// pairs; the first entry matching the order's effective currency
/// (case-insensitive) wins. Every failure mode (absent metafield, malformed
/// payload, no matching currency, unparseable value) resolves to `None`
/// rather than an error: one bad record must never sink the order or feed.
pub fn resolve_reference_price(metafield: Option<&Metafield>, currency: &str) -> Option<String> {
    let metafield = metafield?;

    let raw = match metafield.value.as_str() {
        Some(raw) => raw,
        None => {
            warn!("RRP metafield value is not a string: {}", metafield.value);
            return None;
        }
    };

    let entries: Vec<RrpEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Malformed RRP metafield value {:?}: {}", raw, e);
            return None;
        }
    };

    entries
        .iter()
        .find(|entry| entry.currency_code.eq_ignore_ascii_case(currency))
        .and_then(|entry| format_amount(&entry.value, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rrp_metafield(value: &str) -> Metafield {
        Metafield {
            namespace: "sparklayer".to_string(),
            key: "rrp".to_string(),
            value: serde_json::Value::String(value.to_string()),
        }
    }

    #[test]
    fn test_matches_currency_case_insensitively() {
        let metafield =
            rrp_metafield(r#"[{"currency_code":"USD","value":60},{"currency_code":"EUR","value":55}]"#);

        assert_eq!(
            resolve_reference_price(Some(&metafield), "usd"),
            Some("60.00".to_string())
        );
        assert_eq!(
            resolve_reference_price(Some(&metafield), "EUR"),
            Some("55.00".to_string())
        );
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let metafield = rrp_metafield(
            r#"[{"currency_code":"USD","value":"60.00"},{"currency_code":"usd","value":"75.00"}]"#,
        );

        assert_eq!(
            resolve_reference_price(Some(&metafield), "USD"),
            Some("60.00".to_string())
        );
    }

    #[test]
    fn test_no_entry_for_currency() {
        let metafield = rrp_metafield(r#"[{"currency_code":"GBP","value":48}]"#);

        assert_eq!(resolve_reference_price(Some(&metafield), "USD"), None);
    }

    #[test]
    fn test_absent_metafield() {
        assert_eq!(resolve_reference_price(None, "USD"), None);
    }

    #[test]
    fn test_malformed_payload_is_absorbed() {
        for bad in ["not json", "{\"currency_code\":\"USD\"}", "[{\"nope\":1}]"] {
            let metafield = rrp_metafield(bad);
            assert_eq!(resolve_reference_price(Some(&metafield), "USD"), None);
        }
    }

    #[test]
    fn test_non_string_value_is_absorbed() {
        let metafield = Metafield {
            namespace: "sparklayer".to_string(),
            key: "rrp".to_string(),
            value: serde_json::json!([{"currency_code": "USD", "value": 60}]),
        };

        // The payload must be a JSON-encoded string, not a bare array.
        assert_eq!(resolve_reference_price(Some(&metafield), "USD"), None);
    }

    #[test]
    fn test_string_values_format_to_two_decimals() {
        let metafield = rrp_metafield(r#"[{"currency_code":"USD","value":"59.9"}]"#);

        assert_eq!(
            resolve_reference_price(Some(&metafield), "USD"),
            Some("59.90".to_string())
        );
    }
}
