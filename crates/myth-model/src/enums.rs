//! Closed enumerations for figurine catalog attributes.
//!
//! Every categorical column in the catalog export maps to one of these
//! fixed sets. The accepted raw input literals live in the vocabulary
//! tables ([`crate::vocabulary`]); the `description()` accessors carry the
//! canonical display text, which is not always identical to the accepted
//! input literal (see [`LineUp::FiguartsZero`] and [`Category::Gold`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel through which a figurine was distributed at release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistributionChannel {
    /// Regular retail stores.
    Stores,
    /// Tamashii Web Shop exclusive.
    Ws,
    /// Tamashii World Tour exclusive.
    Wt,
    /// Tamashii Nations exclusive.
    Tn,
    /// Tamashii Store exclusive.
    Ts,
    /// Other limited editions.
    Other,
}

impl DistributionChannel {
    /// Returns the canonical display text for this channel.
    pub fn description(&self) -> &'static str {
        match self {
            DistributionChannel::Stores => "Stores",
            DistributionChannel::Ws => "Tamashii Web Shop",
            DistributionChannel::Wt => "Tamashii World Tour",
            DistributionChannel::Tn => "Tamashii Nations",
            DistributionChannel::Ts => "Tamashii Store",
            DistributionChannel::Other => "Other Limited Edition",
        }
    }
}

impl fmt::Display for DistributionChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Product line-up a figurine belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineUp {
    MythClothEx,
    MythCloth,
    Appendix,
    ScLegend,
    Figuarts,
    /// Display text differs from the accepted input literal
    /// ("Figuarts Zero Metallic Touch"); both are intentional.
    FiguartsZero,
    ScCrown,
    Ddp,
}

impl LineUp {
    /// Returns the canonical display text for this line-up.
    pub fn description(&self) -> &'static str {
        match self {
            LineUp::MythClothEx => "Myth Cloth EX",
            LineUp::MythCloth => "Myth Cloth",
            LineUp::Appendix => "Appendix",
            LineUp::ScLegend => "Saint Cloth Legend",
            LineUp::Figuarts => "Figuarts",
            LineUp::FiguartsZero => "Figuarts Zero Touche Métallique",
            LineUp::ScCrown => "Saint Cloth Crown",
            LineUp::Ddp => "DD Panoramation",
        }
    }
}

impl fmt::Display for LineUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Narrative series a figurine's character comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Series {
    SaintSeiya,
    SaintiaSho,
    Sog,
    SsLegendOfSanctuary,
    SsOmega,
    LostCanvas,
    SsTheBeginning,
}

impl Series {
    /// Returns the canonical display text for this series.
    pub fn description(&self) -> &'static str {
        match self {
            Series::SaintSeiya => "Saint Seiya",
            Series::SaintiaSho => "Saintia Sho",
            Series::Sog => "Soul of Gold",
            Series::SsLegendOfSanctuary => "Saint Seiya Legend Of Sanctuary",
            Series::SsOmega => "Saint Seiya Omega",
            Series::LostCanvas => "The Lost Canvas",
            Series::SsTheBeginning => "Saint Seiya The Beginning",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Character class or armor group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    V1,
    V2,
    V3,
    V4,
    V5,
    Secondary,
    Black,
    Steel,
    Silver,
    /// Display text differs from the accepted input literal
    /// ("Gold Saint"); both are intentional.
    Gold,
    Robe,
    Scale,
    Surplice,
    Specter,
    Judge,
    God,
    Inheritor,
}

impl Category {
    /// Returns the canonical display text for this category.
    pub fn description(&self) -> &'static str {
        match self {
            Category::V1 => "Bronze Saint V1",
            Category::V2 => "Bronze Saint V2",
            Category::V3 => "Bronze Saint V3",
            Category::V4 => "Bronze Saint V4",
            Category::V5 => "Bronze Saint V5",
            Category::Secondary => "Bronze Secondary",
            Category::Black => "Black Saint",
            Category::Steel => "Steel",
            Category::Silver => "Silver Saint",
            Category::Gold => "Golden Saint",
            Category::Robe => "God Robe",
            Category::Scale => "Poseidon Scale",
            Category::Surplice => "Surplice Saint",
            Category::Specter => "Specter",
            Category::Judge => "Judge",
            Category::God => "God",
            Category::Inheritor => "Inheritor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Distributor handling the secondary market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Distributor {
    Dam,
    Dtm,
}

impl Distributor {
    /// Returns the canonical display text for this distributor.
    pub fn description(&self) -> &'static str {
        match self {
            Distributor::Dam => "Distribuidora Animexico",
            Distributor::Dtm => "Distribuidora TM",
        }
    }
}

impl fmt::Display for Distributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Anniversary milestone a figurine commemorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Anniversary {
    A10,
    A15,
    A20,
    A30,
    A40,
    A50,
}

impl Anniversary {
    /// Returns the milestone year count as display text.
    pub fn description(&self) -> &'static str {
        match self {
            Anniversary::A10 => "10",
            Anniversary::A15 => "15",
            Anniversary::A20 => "20",
            Anniversary::A30 => "30",
            Anniversary::A40 => "40",
            Anniversary::A50 => "50",
        }
    }
}

impl fmt::Display for Anniversary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Release-lifecycle state of a figurine, derived from its primary-market
/// distribution data. See [`crate::figurine::Figurine::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Shown as a prototype only; no announcement or schedule data yet.
    Prototype,
    /// Announced or pre-orderable, but without a release date.
    Unreleased,
    /// Scheduled, but the release date is only an approximate month/year.
    ReleaseTbd,
    /// Release date has passed.
    Released,
    /// Confirmed release date in the future.
    FutureRelease,
}

impl Status {
    /// Returns the status name as it appears in catalog views.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Prototype => "Prototype",
            Status::Unreleased => "Unreleased",
            Status::ReleaseTbd => "Release TBD",
            Status::Released => "Released",
            Status::FutureRelease => "Future Release",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
