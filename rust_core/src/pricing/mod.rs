//! Price normalization: two-decimal formatting, the structured-over-plain
//! precedence rule, and reference-price resolution from RRP metafields.

pub mod format;
pub mod rrp;

pub use format::{format_amount, resolve_amount, ResolvedAmount};
pub use rrp::resolve_reference_price;
