use crate::error::RunError;
use delite_core::{AdjustmentLevel, Adjuster};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "DELITE_CONFIG";

/// Run defaults loaded from a YAML config file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AdjustConfig {
    /// Number of brightest pixels to attenuate
    #[serde(default = "default_pixel_count")]
    pub pixel_count: usize,

    /// Attenuation percentage (0-100)
    #[serde(default = "default_adjustment_level")]
    pub adjustment_level: u32,

    /// Where the preview bitmap is written
    #[serde(default = "default_preview_path")]
    pub preview_path: PathBuf,

    /// Where the adjusted raw stream is written
    #[serde(default = "default_altered_path")]
    pub altered_path: PathBuf,

    /// Preview resolution in pixels per meter (informational only)
    #[serde(default)]
    pub resolution: Resolution,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Resolution {
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
}

/// Values given on the command line, which take precedence over the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub pixel_count: Option<usize>,
    pub adjustment_level: Option<u32>,
    pub preview_path: Option<PathBuf>,
    pub altered_path: Option<PathBuf>,
}

fn default_pixel_count() -> usize {
    50
}

fn default_adjustment_level() -> u32 {
    50
}

fn default_preview_path() -> PathBuf {
    PathBuf::from("out.bmp")
}

fn default_altered_path() -> PathBuf {
    PathBuf::from("altered.bin")
}

impl AdjustConfig {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, RunError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| RunError::Config(e.to_string()))
    }

    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self, RunError> {
        let content = std::fs::read_to_string(path).map_err(|source| RunError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from `explicit`, else from `$DELITE_CONFIG`, else defaults.
    ///
    /// A named file that cannot be read or parsed is an error; it is never
    /// silently replaced by defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, RunError> {
        Self::resolve_with_env(explicit, std::env::var_os(CONFIG_ENV_VAR))
    }

    /// [`resolve`](Self::resolve) with the environment value passed in.
    /// An empty value counts as unset.
    pub fn resolve_with_env(
        explicit: Option<&Path>,
        env_path: Option<OsString>,
    ) -> Result<Self, RunError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match env_path {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replace config values with any command-line values that were given
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(count) = overrides.pixel_count {
            self.pixel_count = count;
        }
        if let Some(level) = overrides.adjustment_level {
            self.adjustment_level = level;
        }
        if let Some(path) = overrides.preview_path {
            self.preview_path = path;
        }
        if let Some(path) = overrides.altered_path {
            self.altered_path = path;
        }
        self
    }

    /// Build the core adjuster, validating the adjustment level
    pub fn adjuster(&self) -> Result<Adjuster, RunError> {
        let level = AdjustmentLevel::new(self.adjustment_level)?;
        Ok(Adjuster::new(self.pixel_count, level).resolution(self.resolution.x, self.resolution.y))
    }
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            pixel_count: default_pixel_count(),
            adjustment_level: default_adjustment_level(),
            preview_path: default_preview_path(),
            altered_path: default_altered_path(),
            resolution: Resolution::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delite_core::DeliteError;

    #[test]
    fn test_default_config() {
        let config = AdjustConfig::default();

        assert_eq!(config.pixel_count, 50);
        assert_eq!(config.adjustment_level, 50);
        assert_eq!(config.preview_path, PathBuf::from("out.bmp"));
        assert_eq!(config.altered_path, PathBuf::from("altered.bin"));
        assert_eq!(config.resolution, Resolution { x: 0, y: 0 });
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            AdjustConfig::from_yaml_str("  \n").unwrap(),
            AdjustConfig::default()
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AdjustConfig::from_yaml_str("pixel_count: 10\nresolution:\n  x: 2835\n")
            .unwrap();

        assert_eq!(config.pixel_count, 10);
        assert_eq!(config.adjustment_level, 50);
        assert_eq!(config.resolution, Resolution { x: 2835, y: 0 });
        assert_eq!(config.preview_path, PathBuf::from("out.bmp"));
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
pixel_count: 200
adjustment_level: 75
preview_path: previews/frame.bmp
altered_path: frames/frame.raw
resolution:
  x: 3780
  y: 3780
"#;
        let config = AdjustConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.pixel_count, 200);
        assert_eq!(config.adjustment_level, 75);
        assert_eq!(config.preview_path, PathBuf::from("previews/frame.bmp"));
        assert_eq!(config.altered_path, PathBuf::from("frames/frame.raw"));
        assert_eq!(config.resolution, Resolution { x: 3780, y: 3780 });
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = AdjustConfig::from_yaml_str("pixel_cuont: 3").unwrap_err();
        assert!(matches!(err, RunError::Config(_)));
    }

    #[test]
    fn test_adjuster_validates_level() {
        let config = AdjustConfig {
            adjustment_level: 101,
            ..Default::default()
        };
        match config.adjuster() {
            Err(RunError::Core(DeliteError::LevelOutOfRange(101))) => {}
            other => panic!("Expected LevelOutOfRange, got {other:?}"),
        }

        let adjuster = AdjustConfig::default().adjuster().unwrap();
        assert_eq!(adjuster.pixel_count(), 50);
        assert_eq!(adjuster.level().percent(), 50);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AdjustConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, RunError::Read { .. }));
    }

    #[test]
    fn test_resolve_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delite.yaml");
        std::fs::write(&path, "adjustment_level: 20\n").unwrap();

        let config = AdjustConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.adjustment_level, 20);
    }

    #[test]
    fn test_resolve_from_env_var() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.yaml");
        std::fs::write(&path, "pixel_count: 7\n").unwrap();

        let config = AdjustConfig::resolve_with_env(None, Some(path.into_os_string())).unwrap();
        assert_eq!(config.pixel_count, 7);
        assert_eq!(config.adjustment_level, 50);
    }

    #[test]
    fn test_explicit_file_wins_over_env_var() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.yaml");
        std::fs::write(&explicit, "pixel_count: 3\n").unwrap();

        let config = AdjustConfig::resolve_with_env(
            Some(&explicit),
            Some(dir.path().join("missing.yaml").into_os_string()),
        )
        .unwrap();
        assert_eq!(config.pixel_count, 3);
    }

    #[test]
    fn test_empty_or_unset_env_var_uses_defaults() {
        assert_eq!(
            AdjustConfig::resolve_with_env(None, Some(OsString::new())).unwrap(),
            AdjustConfig::default()
        );
        assert_eq!(
            AdjustConfig::resolve_with_env(None, None).unwrap(),
            AdjustConfig::default()
        );
    }

    #[test]
    fn test_env_var_naming_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AdjustConfig::resolve_with_env(
            None,
            Some(dir.path().join("missing.yaml").into_os_string()),
        )
        .unwrap_err();
        assert!(matches!(err, RunError::Read { .. }));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = AdjustConfig::from_yaml_str(
            "pixel_count: 10\nadjustment_level: 20\npreview_path: file.bmp\naltered_path: file.bin\n",
        )
        .unwrap()
        .with_overrides(ConfigOverrides {
            pixel_count: Some(99),
            adjustment_level: Some(80),
            preview_path: Some(PathBuf::from("flag.bmp")),
            altered_path: None,
        });

        assert_eq!(config.pixel_count, 99);
        assert_eq!(config.adjustment_level, 80);
        assert_eq!(config.preview_path, PathBuf::from("flag.bmp"));
        assert_eq!(config.altered_path, PathBuf::from("file.bin"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = AdjustConfig::from_yaml_str("pixel_count: 10\n").unwrap();
        assert_eq!(
            config.clone().with_overrides(ConfigOverrides::default()),
            config
        );
    }
}
