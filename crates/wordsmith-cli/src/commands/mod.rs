pub mod branch;
pub mod cases;
pub mod convert;
mod error;
pub mod input;
pub mod stats;

#[cfg(test)]
mod convert_tests;
#[cfg(test)]
mod input_tests;

pub use error::{Error, Result};
