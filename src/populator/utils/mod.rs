//! Shared helpers for section rendering.

pub mod dates;
pub mod markup;

pub use dates::*;
pub use markup::*;
