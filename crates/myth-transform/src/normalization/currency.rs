//! Symbol-prefixed currency amount parsing.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::{MapError, Result};

/// Literal meaning "no price recorded" rather than a real zero amount.
const UNSET_AMOUNT: &str = "¥0";

/// Parses an amount of the form symbol + comma-grouped digits
/// (e.g. `¥12,345`).
///
/// Blank input and the zero literal both mean the price is not set. The
/// leading symbol character is dropped without being inspected; a remainder
/// that fails decimal parsing is a fatal [`MapError::InvalidAmount`].
pub fn parse_amount(raw: Option<&str>) -> Result<Option<BigDecimal>> {
    let amount = raw.unwrap_or("");
    if amount.is_empty() || amount == UNSET_AMOUNT {
        return Ok(None);
    }
    let mut chars = amount.chars();
    chars.next(); // currency symbol
    let digits = chars.as_str().replace(',', "");
    BigDecimal::from_str(&digits)
        .map(Some)
        .map_err(|_| MapError::InvalidAmount(amount.to_string()))
}
