use delite_core::DeliteError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Raw stream has an odd length ({len} bytes); samples are 16-bit")]
    OddLength { len: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Processing error: {0}")]
    Core(#[from] DeliteError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_run_error_read() {
        let error = RunError::Read {
            path: PathBuf::from("in.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to read in.bin: missing");
    }

    #[test]
    fn test_run_error_write() {
        let error = RunError::Write {
            path: PathBuf::from("out.bmp"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "Failed to write out.bmp: denied");
    }

    #[test]
    fn test_run_error_odd_length() {
        let error = RunError::OddLength { len: 7 };
        assert_eq!(
            error.to_string(),
            "Raw stream has an odd length (7 bytes); samples are 16-bit"
        );
    }

    #[test]
    fn test_run_error_config() {
        let error = RunError::Config("bad yaml".to_string());
        assert_eq!(error.to_string(), "Config error: bad yaml");
    }

    #[test]
    fn test_run_error_from_core_error() {
        let error: RunError = DeliteError::InsufficientSamples(3).into();
        match &error {
            RunError::Core(DeliteError::InsufficientSamples(3)) => {}
            other => panic!("Expected Core variant, got {other:?}"),
        }
        assert_eq!(
            error.to_string(),
            "Processing error: insufficient samples for a preview: got 3, need at least 16"
        );
    }
}
