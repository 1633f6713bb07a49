pub mod config;

pub use config::{AdjustConfig, ConfigOverrides, Resolution, CONFIG_ENV_VAR};
