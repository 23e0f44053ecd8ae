#[cfg(test)]
mod tests {
    use crate::hand_tracking::calibration::{
        CalibrationField, CalibrationSettings, CalibrationStore, EditOutcome, JsonSettingsStore,
        MemorySettingsStore, SettingsStore,
    };
    use crate::hand_tracking::common::error::{PipelineError, Result};

    struct FailingStore;

    impl SettingsStore for FailingStore {
        fn get_f32(&self, _key: &str, default: f32) -> f32 {
            default
        }

        fn set_f32(&mut self, _key: &str, _value: f32) {}

        fn flush(&mut self) -> Result<()> {
            Err(PipelineError::IoError(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn test_unset_name_returns_default() {
        let store = MemorySettingsStore::new();

        assert_eq!(store.get_f32("HandVisualizer_DepthScale", 3.5), 3.5);
    }

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemorySettingsStore::new();

        store.set_f32("HandVisualizer_XOffset", -0.25);

        assert_eq!(store.get_f32("HandVisualizer_XOffset", 0.0), -0.25);
    }

    #[test]
    fn test_load_uses_defaults_for_missing_keys() {
        let mut store = MemorySettingsStore::new();
        store.set_f32(CalibrationField::MaxDepth.key(), 4.0);
        let defaults = CalibrationSettings::default();

        let calibration = CalibrationStore::load(store, &defaults);

        assert_eq!(calibration.settings().max_depth, 4.0);
        assert_eq!(calibration.settings().min_depth, defaults.min_depth);
        assert_eq!(calibration.settings().visualization_scale, defaults.visualization_scale);
    }

    #[test]
    fn test_valid_text_updates_and_persists_all_fields() {
        let mut calibration =
            CalibrationStore::load(MemorySettingsStore::new(), &CalibrationSettings::default());

        let outcome = calibration
            .apply_text(CalibrationField::DepthScale, " 2.5 ")
            .unwrap();

        assert_eq!(outcome, EditOutcome::Applied { anchor_changed: false });
        assert_eq!(calibration.settings().depth_scale, 2.5);
        assert_eq!(calibration.store().flush_count(), 1);
        for field in CalibrationField::ALL {
            assert!(calibration.store().contains(field.key()));
        }
    }

    #[test]
    fn test_invalid_text_is_rejected_without_write() {
        let mut calibration =
            CalibrationStore::load(MemorySettingsStore::new(), &CalibrationSettings::default());

        for text in ["", "abc", "1.2.3", "NaN", "inf", "0,5"] {
            let outcome = calibration.apply_text(CalibrationField::MinDepth, text).unwrap();
            assert_eq!(outcome, EditOutcome::Rejected, "accepted {:?}", text);
        }

        assert_eq!(calibration.settings().min_depth, 0.1);
        assert_eq!(calibration.store().flush_count(), 0);
        assert!(!calibration.store().contains(CalibrationField::MinDepth.key()));
    }

    #[test]
    fn test_anchor_fields_report_anchor_change() {
        let mut calibration =
            CalibrationStore::load(MemorySettingsStore::new(), &CalibrationSettings::default());

        let distance = calibration
            .apply_text(CalibrationField::VisualizationDistance, "1")
            .unwrap();
        let scale = calibration
            .apply_text(CalibrationField::VisualizationScale, "0.2")
            .unwrap();
        let offset = calibration.apply_text(CalibrationField::ZOffset, "-1e-2").unwrap();

        assert_eq!(distance, EditOutcome::Applied { anchor_changed: true });
        assert_eq!(scale, EditOutcome::Applied { anchor_changed: true });
        assert_eq!(offset, EditOutcome::Applied { anchor_changed: false });
        assert_eq!(calibration.settings().z_offset, -0.01);
    }

    #[test]
    fn test_field_text_renders_current_value() {
        let calibration =
            CalibrationStore::load(MemorySettingsStore::new(), &CalibrationSettings::default());

        assert_eq!(calibration.field_text(CalibrationField::MaxDepth), "10");
        assert_eq!(calibration.field_text(CalibrationField::MinDepth), "0.1");
    }

    #[test]
    fn test_flush_failure_is_reported() {
        let mut calibration = CalibrationStore::load(FailingStore, &CalibrationSettings::default());

        let result = calibration.apply_text(CalibrationField::XOffset, "1");

        assert!(matches!(result, Err(PipelineError::IoError(_))));
        // in-memory value still reflects the edit
        assert_eq!(calibration.settings().x_offset, 1.0);
    }

    #[test]
    fn test_json_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("calibration.json");

        {
            let store = JsonSettingsStore::open(&path).unwrap();
            let mut calibration = CalibrationStore::load(store, &CalibrationSettings::default());
            calibration.apply_text(CalibrationField::YOffset, "0.75").unwrap();
        }

        let reopened = JsonSettingsStore::open(&path).unwrap();
        assert_eq!(reopened.get_f32(CalibrationField::YOffset.key(), 0.0), 0.75);
        assert_eq!(reopened.get_f32(CalibrationField::MaxDepth.key(), 0.0), 10.0);
    }

    #[test]
    fn test_set_refuses_non_finite_value() {
        let mut calibration =
            CalibrationStore::load(MemorySettingsStore::new(), &CalibrationSettings::default());

        let result = calibration.set(CalibrationField::MaxDepth, f32::NAN);

        assert!(matches!(
            result,
            Err(PipelineError::NonFiniteCalibration { key: "HandVisualizer_MaxDepth", .. })
        ));
        assert_eq!(calibration.settings().max_depth, 10.0);
        assert_eq!(calibration.store().flush_count(), 0);
    }

    #[test]
    fn test_non_finite_default_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibration.json");
        let defaults = CalibrationSettings {
            max_depth: f32::NAN,
            ..CalibrationSettings::default()
        };

        {
            let store = JsonSettingsStore::open(&path).unwrap();
            let mut calibration = CalibrationStore::load(store, &defaults);
            calibration.apply_text(CalibrationField::XOffset, "1").unwrap();
        }

        let reopened = JsonSettingsStore::open(&path).unwrap();
        assert_eq!(reopened.get_f32(CalibrationField::XOffset.key(), 0.0), 1.0);
        assert_eq!(reopened.get_f32(CalibrationField::MaxDepth.key(), 7.0), 7.0);
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        let store = JsonSettingsStore::open(dir.path().join("absent.json")).unwrap();

        assert_eq!(store.get_f32("anything", 1.5), 1.5);
    }

    #[test]
    fn test_json_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let result = JsonSettingsStore::open(&path);

        assert!(matches!(result, Err(PipelineError::Serialization(_))));
    }
}
