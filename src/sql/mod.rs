//! SQL for the advertisements table: fixed identifiers, values as parameters.

mod builder;
pub use builder::*;
