//! Per-market distribution assembly.
//!
//! Each market gets its own pure builder over the raw fields relevant to
//! it. A candidate whose six fields are all absent collapses to `None` so
//! a record whose source row had no data for a market carries no
//! placeholder sub-record; a candidate with even one present field is
//! retained.

use myth_model::figurine::Distribution;
use myth_model::source::SourceFigurine;
use myth_model::vocabulary::DISTRIBUTORS;

use crate::error::Result;
use crate::normalization::currency::parse_amount;
use crate::normalization::datetime::{date_confirmation, parse_optional_date};
use crate::normalization::vocabulary::resolve;

/// Builds the primary-market distribution. This market has no distributor
/// concept, but is the only one carrying a first-announcement date.
pub fn primary_distribution(source: &SourceFigurine) -> Result<Option<Distribution>> {
    let candidate = Distribution {
        distributor: None,
        base_price: parse_amount(source.price_jpy.as_deref())?,
        first_announcement_date: parse_optional_date(source.ann_jpy.as_deref())?,
        pre_order_date: parse_optional_date(source.preorder_jpy.as_deref())?,
        release_date: parse_optional_date(source.release_jpy.as_deref())?,
        release_date_confirmed: date_confirmation(source.release_jpy.as_deref()),
    };
    Ok(retain_populated(candidate, "JPY"))
}

/// Builds the secondary-market distribution. No first-announcement concept
/// on this market.
pub fn secondary_distribution(source: &SourceFigurine) -> Result<Option<Distribution>> {
    let candidate = Distribution {
        distributor: resolve(
            &DISTRIBUTORS,
            source.distributor_mxn.as_deref(),
            "Distributor (MXN)",
        ),
        base_price: parse_amount(source.price_mxn.as_deref())?,
        first_announcement_date: None,
        pre_order_date: parse_optional_date(source.preorder_mxn.as_deref())?,
        release_date: parse_optional_date(source.release_mxn.as_deref())?,
        release_date_confirmed: date_confirmation(source.release_mxn.as_deref()),
    };
    Ok(retain_populated(candidate, "MXN"))
}

fn retain_populated(candidate: Distribution, market: &str) -> Option<Distribution> {
    if candidate.is_empty() {
        tracing::debug!(market, "no distribution data for market");
        None
    } else {
        Some(candidate)
    }
}
