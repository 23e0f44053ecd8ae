//! Common utilities module
//!
//! Shared error type used across the hand tracking pipeline.

pub mod error;

pub use error::{PipelineError, Result};
