#[cfg(test)]
mod error_tests {
    use std::error::Error;
    use webcam_bootstrap::errors::{CaptureError, ConfigError};

    #[test]
    fn test_capture_error_display() {
        let error = CaptureError::AcquisitionFailed("Permission denied".to_string());
        assert_eq!(
            error.to_string(),
            "Capture acquisition failed: Permission denied"
        );
    }

    #[test]
    fn test_surface_missing_names_surface() {
        let error = CaptureError::SurfaceMissing("video".to_string());
        assert!(error.to_string().contains("video"));
    }

    #[test]
    fn test_capture_error_has_no_source() {
        let error = CaptureError::Unsupported("audio".to_string());
        let _error_trait: &dyn Error = &error;
        assert!(error.source().is_none());
    }

    #[test]
    fn test_config_error_keeps_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let error = ConfigError::Write(io);
        assert!(error.to_string().contains("Failed to write config file"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_error_from_toml() {
        let parse_error = toml::from_str::<toml::Value>("key = [").unwrap_err();
        let error: ConfigError = parse_error.into();
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
