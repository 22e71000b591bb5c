//! Catalog record normalization engine.
//!
//! Turns raw, string-valued catalog rows into strongly-typed
//! [`Figurine`](myth_model::figurine::Figurine) records:
//!
//! - **normalization**: field-level parsers (dates, currency amounts,
//!   flags, delimited lists, closed vocabularies)
//! - **distribution**: per-market distribution assembly with the
//!   empty-candidate collapse rule
//! - **mapper**: whole-record orchestration
//!
//! The engine is purely functional: one row in, one record out, or a fatal
//! [`MapError`] with nothing partially built. The caller decides whether a
//! failed row skips or halts a batch.

pub mod distribution;
pub mod error;
pub mod mapper;
pub mod normalization;

pub use error::{MapError, Result};
pub use mapper::map_figurine;
