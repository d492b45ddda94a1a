//! Utility functions

pub mod path;
pub mod sql;
