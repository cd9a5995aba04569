//! Validation checks over the loaded inventories
//!
//! Checks are pure: they take the rule set and inventories and return a
//! [`CheckOutcome`]. Nothing here logs; [`report`] turns outcomes into log
//! lines and an exit status.

pub mod injection;
pub mod partition;
pub mod report;

use thiserror::Error;

use crate::config::plugins::DEFAULT_CLUSTER_ALIAS;
use crate::inventory::SourceLocation;

pub use injection::check_injections;
pub use partition::check_partition;

/// One validation failure, with everything needed to locate it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error(
        "cluster alias {} is not allowed, please explicitly specify the name of the cluster",
        DEFAULT_CLUSTER_ALIAS
    )]
    DefaultClusterAlias { glob: String, bundle: String },

    #[error("gzip must be enabled for job configs")]
    JobConfigGzipDisabled { glob: String, bundle: String },

    #[error("failed to check if config is a jobconfig: {reason}")]
    JobConfigProbeFailed { glob: String, reason: String },

    #[error("File matches glob from more than one ConfigMap: {first}, {second}.")]
    AmbiguousMatch {
        source_file: String,
        glob: String,
        first: String,
        second: String,
    },

    #[error("File matches glob from unexpected ConfigMap {matched} instead of {expected}.")]
    UnexpectedBundle {
        source_file: String,
        glob: String,
        matched: String,
        expected: String,
    },

    #[error("Config file does not belong to any auto-updating config.")]
    Uncovered { source_file: String },

    #[error("Could not find CI Operator configuration file for that key.")]
    UnknownConfigKey {
        location: SourceLocation,
        key: String,
    },

    #[error("Invalid config map shard for injected CI-Operator config key.")]
    WrongInjectedBundle {
        location: SourceLocation,
        key: String,
        got: String,
        expected: String,
    },
}

/// A glob that could not be evaluated against a file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to check glob match.")]
pub struct Warning {
    pub source_file: String,
    pub glob: String,
    pub reason: String,
}

/// Failures and warnings produced by one or more checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub failures: Vec<Failure>,
    pub warnings: Vec<Warning>,
}

impl CheckOutcome {
    /// Append another outcome after this one
    pub fn merge(&mut self, other: CheckOutcome) {
        self.failures.extend(other.failures);
        self.warnings.extend(other.warnings);
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
