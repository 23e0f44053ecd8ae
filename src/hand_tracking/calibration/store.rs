use crate::hand_tracking::common::error::Result;

/// Persisted key/value storage for float settings.
pub trait SettingsStore {
    /// Stored value for `key`, or `default` when nothing is stored.
    fn get_f32(&self, key: &str, default: f32) -> f32;

    fn set_f32(&mut self, key: &str, value: f32);

    /// Makes pending writes durable.
    fn flush(&mut self) -> Result<()>;
}
