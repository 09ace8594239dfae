//! Common types used across the Kuna client library.

pub mod coerce;
pub mod common;
pub mod records;

pub use coerce::MappingIssue;
pub use common::*;
pub use records::*;
