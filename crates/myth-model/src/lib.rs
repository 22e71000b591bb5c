pub mod enums;
pub mod figurine;
pub mod source;
pub mod vocabulary;

pub use enums::{
    Anniversary, Category, DistributionChannel, Distributor, LineUp, Series, Status,
};
pub use figurine::{Distribution, Figurine};
pub use source::SourceFigurine;
pub use vocabulary::Vocabulary;
