//! Domain aggregates exposed by the lead pipeline service layer.

pub mod lead;
pub mod types;
