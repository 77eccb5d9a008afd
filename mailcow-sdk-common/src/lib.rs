//! Shared building blocks for `mailcow-sdk`: the error type, failure-body handling and
//! the one-or-many response normalizer.

mod error;
pub mod helper;
pub mod one_or_many;

pub use error::Error;
pub use one_or_many::{OneOrMany, into_vec_result};
