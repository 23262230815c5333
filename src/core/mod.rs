//! Core invoice types, line classification, and total verification.
//!
//! This module provides the read-only invoice model handed over by the
//! billing engine, and the classifier that decides which line items
//! contribute to the billed amount.

mod builder;
mod classify;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use classify::*;
pub use error::*;
pub use types::*;
pub use validation::*;
