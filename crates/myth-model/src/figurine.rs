//! Normalized figurine record and its per-market distribution data.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::enums::{
    Anniversary, Category, DistributionChannel, Distributor, LineUp, Series, Status,
};

/// Distribution data for one market.
///
/// A `Distribution` held by a [`Figurine`] is never all-absent: the mapping
/// engine collapses an empty candidate to `None` at the slot level instead
/// of storing a placeholder. The `release_date_confirmed` flag is tri-state:
/// `None` means unknown, `Some(false)` means the release date is only an
/// approximate month/year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Distributor handling this market. Only meaningful on the secondary
    /// market; the primary market has no distributor concept.
    pub distributor: Option<Distributor>,
    pub base_price: Option<BigDecimal>,
    /// First public announcement. Primary market only.
    pub first_announcement_date: Option<NaiveDate>,
    pub pre_order_date: Option<NaiveDate>,
    pub release_date: Option<NaiveDate>,
    pub release_date_confirmed: Option<bool>,
}

impl Distribution {
    /// Returns true when none of the six fields carry data.
    pub fn is_empty(&self) -> bool {
        self.distributor.is_none()
            && self.base_price.is_none()
            && self.first_announcement_date.is_none()
            && self.pre_order_date.is_none()
            && self.release_date.is_none()
            && self.release_date_confirmed.is_none()
    }
}

/// A normalized figurine record.
///
/// # Equality contract
///
/// `PartialEq`, `Eq` and `Hash` cover the identifying attributes only:
/// base name, line-up, series, category, the ten attribute flags, and
/// anniversary. Distribution slots, URL, distribution channel, image lists
/// and remarks are metadata and never participate. Two records describing
/// the same figurine therefore compare equal even when their market data
/// was exported at different times.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Figurine {
    pub base_name: String,

    pub distribution_jpy: Option<Distribution>,
    pub distribution_mxn: Option<Distribution>,

    pub tamashii_url: Option<String>,
    pub distribution_channel: Option<DistributionChannel>,
    pub line_up: Option<LineUp>,
    pub series: Option<Series>,
    pub category: Option<Category>,

    pub metal: bool,
    pub oce: bool,
    pub revival: bool,
    pub plain: bool,
    pub broken: bool,
    pub golden: bool,
    pub gold: bool,
    pub hk: bool,
    pub comic: bool,
    pub set: bool,

    pub anniversary: Option<Anniversary>,

    pub official_images: Option<Vec<String>>,
    pub other_images: Option<Vec<String>>,
    pub remarks: Option<String>,
}

impl Figurine {
    /// Human-readable name: the base name followed by fixed-order
    /// qualifiers for the original-color edition, revivals, and
    /// anniversary milestones.
    pub fn displayable_name(&self) -> String {
        let mut name = self.base_name.clone();
        if self.oce {
            name.push_str(" (Original Color Edition)");
        }
        if self.revival {
            name.push_str(" (Revival)");
        }
        if let Some(anniversary) = self.anniversary {
            name.push_str(&format!(" ({}th Anniversary)", anniversary.description()));
        }
        name
    }

    /// Derives the release-lifecycle status from the primary-market
    /// distribution, relative to a caller-supplied reference date.
    pub fn status(&self, today: NaiveDate) -> Status {
        let Some(distribution) = &self.distribution_jpy else {
            return Status::Prototype;
        };
        match distribution.release_date {
            Some(date) if date <= today => Status::Released,
            Some(_) => match distribution.release_date_confirmed {
                Some(true) => Status::FutureRelease,
                _ => Status::ReleaseTbd,
            },
            None => {
                if distribution.first_announcement_date.is_some()
                    || distribution.pre_order_date.is_some()
                {
                    Status::Unreleased
                } else {
                    Status::Prototype
                }
            }
        }
    }
}

impl PartialEq for Figurine {
    fn eq(&self, other: &Self) -> bool {
        self.base_name == other.base_name
            && self.line_up == other.line_up
            && self.series == other.series
            && self.category == other.category
            && self.metal == other.metal
            && self.oce == other.oce
            && self.revival == other.revival
            && self.plain == other.plain
            && self.broken == other.broken
            && self.golden == other.golden
            && self.gold == other.gold
            && self.hk == other.hk
            && self.comic == other.comic
            && self.set == other.set
            && self.anniversary == other.anniversary
    }
}

impl Eq for Figurine {}

impl Hash for Figurine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base_name.hash(state);
        self.line_up.hash(state);
        self.series.hash(state);
        self.category.hash(state);
        self.metal.hash(state);
        self.oce.hash(state);
        self.revival.hash(state);
        self.plain.hash(state);
        self.broken.hash(state);
        self.golden.hash(state);
        self.gold.hash(state);
        self.hk.hash(state);
        self.comic.hash(state);
        self.set.hash(state);
        self.anniversary.hash(state);
    }
}
