//! Command implementations for the draft-value CLI

pub mod fold;
pub mod parse_rank;
pub mod point_values;
