//! Error taxonomy for the integration core
//!
//! The core never aborts a caller's flow on these conditions: each fault
//! is rendered into a structured result (an error-status `Message` or
//! `TaskResult`), logged, and returned. The typed variants exist so the
//! detail strings stay uniform and so hosts can match on them where a
//! fault does surface as an `Err` (config loading).

use thiserror::Error;

/// Recorded fault conditions inside the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationFault {
    /// Message delivery targeted a name not present in the registry.
    #[error("Service {0} not registered")]
    TargetNotRegistered(String),

    /// The compute engine received a task kind it does not dispatch.
    #[error("Unknown task type: {0}")]
    UnknownTaskType(String),
}

/// Failure to load the mesh configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_detail_strings_match_report_shape() {
        let fault = IntegrationFault::TargetNotRegistered("analytics".to_string());
        assert_eq!(fault.to_string(), "Service analytics not registered");

        let fault = IntegrationFault::UnknownTaskType("quantum_teleport".to_string());
        assert_eq!(fault.to_string(), "Unknown task type: quantum_teleport");
    }
}
