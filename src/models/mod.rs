//! Database models backing the lead repository.

pub mod config;
pub mod lead;
