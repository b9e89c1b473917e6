//! A simple factorial implementation, packaged as a library.

mod factorial;

pub use factorial::*;

use std::num::ParseIntError;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("factorial is not defined for negative numbers: {0}")]
    Negative(i64),
    #[error("{0}")]
    Parse(#[from] ParseIntError),
}
