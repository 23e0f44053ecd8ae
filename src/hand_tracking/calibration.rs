//! Calibration module
//!
//! The eight user-tunable scalars that drive pseudo-depth and anchor
//! placement, plus their persistence behind a small key/value contract.

mod calibration_store;
mod json_store;
mod memory_store;
mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use calibration_store::{CalibrationStore, EditOutcome};
pub use json_store::JsonSettingsStore;
pub use memory_store::MemorySettingsStore;
pub use store::SettingsStore;
pub use types::{CalibrationField, CalibrationSettings};
