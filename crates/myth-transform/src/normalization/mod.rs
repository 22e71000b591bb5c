//! Field-level normalization for raw catalog values.
//!
//! - **datetime**: release-calendar date parsing and the confirmation flag
//! - **currency**: symbol-prefixed decimal amounts
//! - **text**: boolean flags, delimited lists, blank handling
//! - **vocabulary**: closed-vocabulary resolution

pub mod currency;
pub mod datetime;
pub mod text;
pub mod vocabulary;

// Re-export commonly used items
pub use currency::parse_amount;
pub use datetime::{date_confirmation, parse_date, parse_optional_date};
pub use text::{non_blank, parse_flag, split_list};
pub use vocabulary::resolve;
