//! Serde and formatting helpers shared by the type definitions

pub mod datetime;
pub mod id;
