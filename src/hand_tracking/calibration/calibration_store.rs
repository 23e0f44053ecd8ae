use tracing::{debug, info, warn};

use crate::hand_tracking::calibration::store::SettingsStore;
use crate::hand_tracking::calibration::types::{CalibrationField, CalibrationSettings};
use crate::hand_tracking::common::error::{PipelineError, Result};

/// Result of committing a text edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text did not parse; the value and storage are unchanged
    Rejected,
    /// Value updated and persisted
    Applied { anchor_changed: bool },
}

/// Calibration values mirrored into a persistent settings store.
pub struct CalibrationStore<S: SettingsStore> {
    store: S,
    settings: CalibrationSettings,
}

impl<S: SettingsStore> CalibrationStore<S> {
    /// Loads every field from `store`, falling back to `defaults`.
    pub fn load(store: S, defaults: &CalibrationSettings) -> Self {
        let mut settings = *defaults;
        for field in CalibrationField::ALL {
            settings.set(field, store.get_f32(field.key(), defaults.get(field)));
        }

        info!(?settings, "Calibration loaded");
        Self { store, settings }
    }

    pub fn settings(&self) -> &CalibrationSettings {
        &self.settings
    }

    pub fn get(&self, field: CalibrationField) -> f32 {
        self.settings.get(field)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Text shown in the field's input box.
    pub fn field_text(&self, field: CalibrationField) -> String {
        self.settings.get(field).to_string()
    }

    /// Commits a text edit for `field`.
    ///
    /// Unparsable text is not an error: it yields [`EditOutcome::Rejected`]
    /// and nothing is written.
    pub fn apply_text(&mut self, field: CalibrationField, text: &str) -> Result<EditOutcome> {
        let Some(value) = field.parse_value(text) else {
            debug!(?field, text, "Rejected calibration input");
            return Ok(EditOutcome::Rejected);
        };

        self.set(field, value)?;
        Ok(EditOutcome::Applied {
            anchor_changed: field.affects_anchor(),
        })
    }

    /// Sets `field` and persists all values. Non-finite values are refused
    /// and leave the settings untouched.
    pub fn set(&mut self, field: CalibrationField, value: f32) -> Result<()> {
        if !value.is_finite() {
            return Err(PipelineError::NonFiniteCalibration {
                key: field.key(),
                value,
            });
        }
        self.settings.set(field, value);
        debug!(?field, value, "Calibration updated");
        self.save()
    }

    /// Writes all eight values and flushes the store.
    ///
    /// Non-finite values have no stored form and are skipped, so the stored
    /// key keeps its previous value.
    pub fn save(&mut self) -> Result<()> {
        for field in CalibrationField::ALL {
            let value = self.settings.get(field);
            if !value.is_finite() {
                warn!(?field, value, "Not persisting non-finite calibration value");
                continue;
            }
            self.store.set_f32(field.key(), value);
        }
        self.store.flush().inspect_err(|e| {
            warn!("Failed to persist calibration: {}", e);
        })
    }
}
