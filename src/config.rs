//! Mesh configuration
//!
//! Small TOML config for the two tunable components: the health monitor
//! loop and the compute engine. Loading order:
//!
//! 1. `INTERMESH_CONFIG` environment variable (path to a TOML file)
//! 2. `intermesh.toml` in the current working directory
//! 3. Built-in defaults
//!
//! Configuration is plain instance state handed to constructors; there
//! is no process-wide global.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;

/// Environment variable naming an explicit config file path.
pub const CONFIG_ENV_VAR: &str = "INTERMESH_CONFIG";

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "intermesh.toml";

/// Health monitor loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Seconds between monitor-loop cycles
    pub check_interval_secs: f64,
    /// Whether degraded cycles reactivate inactive services
    pub auto_repair: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 5.0,
            auto_repair: true,
        }
    }
}

/// Compute engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
    /// Backend name reported by health checks
    pub backend: String,
    /// Reported optimization level (carried through, not interpreted)
    pub optimization_level: u8,
    /// Iterations used when a task asks for zero
    pub default_iterations: u32,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            backend: "simulator".to_string(),
            optimization_level: 2,
            default_iterations: 100,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    pub monitor: MonitorConfig,
    pub compute: ComputeConfig,
}

impl MeshConfig {
    /// Load following the documented order. Falls back to defaults when
    /// no file is found; a file that exists but cannot be read or
    /// parsed is an error rather than a silent fallback.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            info!(path = %path, "Loading config from {CONFIG_ENV_VAR}");
            return Self::from_file(&path);
        }

        let cwd_file = Path::new(CONFIG_FILE_NAME);
        if cwd_file.exists() {
            info!(path = CONFIG_FILE_NAME, "Loading config from working directory");
            return Self::from_file(CONFIG_FILE_NAME);
        }

        warn!("No config file found — using built-in defaults");
        Ok(Self::default())
    }

    /// Load from an explicit TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let config = MeshConfig::default();
        assert!((config.monitor.check_interval_secs - 5.0).abs() < f64::EPSILON);
        assert!(config.monitor.auto_repair);
        assert_eq!(config.compute.backend, "simulator");
        assert_eq!(config.compute.optimization_level, 2);
        assert_eq!(config.compute.default_iterations, 100);
    }

    #[test]
    fn partial_file_keeps_defaults_for_omitted_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[monitor]\ncheck_interval_secs = 0.5\n\n[compute]\nbackend = \"annealer\"\n"
        )
        .unwrap();

        let config = MeshConfig::from_file(file.path()).unwrap();
        assert!((config.monitor.check_interval_secs - 0.5).abs() < f64::EPSILON);
        assert!(config.monitor.auto_repair);
        assert_eq!(config.compute.backend, "annealer");
        assert_eq!(config.compute.optimization_level, 2);
    }

    #[test]
    fn unparseable_file_is_an_error_not_a_fallback() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "monitor = \"not a table\"").unwrap();

        let result = MeshConfig::from_file(file.path());
        assert!(matches!(result, Err(crate::error::ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = MeshConfig::from_file("/nonexistent/intermesh.toml");
        assert!(matches!(result, Err(crate::error::ConfigError::Io { .. })));
    }
}
