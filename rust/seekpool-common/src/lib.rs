//! Core definitions (error types and helper macros), relied upon by all seekpool-* crates.

pub mod error;
pub mod result;

pub use result::Result;
