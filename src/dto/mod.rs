//! DTOs bridging the service layer with the HTTP boundary.

pub mod lead;
