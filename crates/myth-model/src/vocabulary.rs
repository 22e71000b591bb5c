//! Closed vocabularies mapping raw export literals to enumeration codes.
//!
//! Each categorical column accepts a fixed set of raw string literals.
//! Matching is exact and case-sensitive, with no trimming and no fuzzy
//! fallback: an export value either is one of the known literals or it
//! degrades to "absent". Unknown values are never an error.

use crate::enums::{Anniversary, Category, DistributionChannel, Distributor, LineUp, Series};

/// An immutable raw-literal → code lookup table for one closed vocabulary.
#[derive(Debug)]
pub struct Vocabulary<T: 'static> {
    entries: &'static [(&'static str, T)],
}

impl<T: Copy> Vocabulary<T> {
    /// Creates a vocabulary over a fixed entry table.
    pub const fn new(entries: &'static [(&'static str, T)]) -> Self {
        Self { entries }
    }

    /// Resolves a raw value to its code.
    ///
    /// Exact, case-sensitive match only; blank or unrecognized input
    /// resolves to `None`.
    pub fn resolve(&self, raw: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(literal, _)| *literal == raw)
            .map(|(_, code)| *code)
    }

    /// Iterates the accepted raw literals, in table order.
    pub fn literals(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(literal, _)| *literal)
    }
}

/// Accepted literals for the `Distribution` column.
pub static DISTRIBUTION_CHANNELS: Vocabulary<DistributionChannel> = Vocabulary::new(&[
    ("Stores", DistributionChannel::Stores),
    ("Tamashii Web Shop", DistributionChannel::Ws),
    ("Tamashii World Tour", DistributionChannel::Wt),
    ("Tamashii Nations", DistributionChannel::Tn),
    ("Tamashii Store", DistributionChannel::Ts),
    ("Other Limited Edition", DistributionChannel::Other),
]);

/// Accepted literals for the `LineUp` column.
///
/// `Figuarts Zero Metallic Touch` is the accepted input literal even though
/// the code's display text reads differently; the display text is not an
/// accepted input.
pub static LINE_UPS: Vocabulary<LineUp> = Vocabulary::new(&[
    ("Myth Cloth EX", LineUp::MythClothEx),
    ("Myth Cloth", LineUp::MythCloth),
    ("Appendix", LineUp::Appendix),
    ("Saint Cloth Legend", LineUp::ScLegend),
    ("Figuarts", LineUp::Figuarts),
    ("Saint Cloth Crown", LineUp::ScCrown),
    ("DD Panoramation", LineUp::Ddp),
    ("Figuarts Zero Metallic Touch", LineUp::FiguartsZero),
]);

/// Accepted literals for the `Series` column.
pub static SERIES: Vocabulary<Series> = Vocabulary::new(&[
    ("Saint Seiya", Series::SaintSeiya),
    ("Saintia Sho", Series::SaintiaSho),
    ("Soul of Gold", Series::Sog),
    ("Saint Seiya Legend Of Sanctuary", Series::SsLegendOfSanctuary),
    ("Saint Seiya Omega", Series::SsOmega),
    ("The Lost Canvas", Series::LostCanvas),
    ("Saint Seiya The Beginning", Series::SsTheBeginning),
]);

/// Accepted literals for the `Group` column.
pub static CATEGORIES: Vocabulary<Category> = Vocabulary::new(&[
    ("Bronze Saint V1", Category::V1),
    ("Bronze Saint V2", Category::V2),
    ("Bronze Saint V3", Category::V3),
    ("Bronze Saint V4", Category::V4),
    ("Bronze Saint V5", Category::V5),
    ("Bronze Secondary", Category::Secondary),
    ("Black Saint", Category::Black),
    ("Steel", Category::Steel),
    ("Silver Saint", Category::Silver),
    ("Gold Saint", Category::Gold),
    ("God Robe", Category::Robe),
    ("Poseidon Scale", Category::Scale),
    ("Surplice Saint", Category::Surplice),
    ("Specter", Category::Specter),
    ("Judge", Category::Judge),
    ("God", Category::God),
    ("Inheritor", Category::Inheritor),
]);

/// Accepted literals for the `Distributor (MXN)` column.
pub static DISTRIBUTORS: Vocabulary<Distributor> = Vocabulary::new(&[
    ("DAM", Distributor::Dam),
    ("DTM", Distributor::Dtm),
]);

/// Accepted literals for the `Anniversary` column.
pub static ANNIVERSARIES: Vocabulary<Anniversary> = Vocabulary::new(&[
    ("10", Anniversary::A10),
    ("15", Anniversary::A15),
    ("20", Anniversary::A20),
    ("30", Anniversary::A30),
    ("40", Anniversary::A40),
    ("50", Anniversary::A50),
]);
