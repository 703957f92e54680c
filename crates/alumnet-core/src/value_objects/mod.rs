//! Value objects - identifier types shared across entities

mod id;

pub use id::{Id, IdParseError};
