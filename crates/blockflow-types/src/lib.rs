#![forbid(unsafe_code)]
#![doc = "Common types for the blockflow workspace: mode and direction identifiers, error codes."]

pub mod algorithm;
pub mod error;

pub use algorithm::*;
pub use error::*;
