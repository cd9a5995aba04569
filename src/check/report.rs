//! Turning check outcomes into log lines and a final verdict

use tracing::{error, info, warn};

use super::{CheckOutcome, Failure, Warning};
use crate::error::{Result, ShardError};

/// Log every warning and failure with its structured context
pub fn emit(outcome: &CheckOutcome) {
    for warning in &outcome.warnings {
        emit_warning(warning);
    }
    for failure in &outcome.failures {
        emit_failure(failure);
    }
}

fn emit_warning(warning: &Warning) {
    warn!(
        source_file = %warning.source_file,
        glob = %warning.glob,
        error = %warning.reason,
        "{warning}"
    );
}

fn emit_failure(failure: &Failure) {
    match failure {
        Failure::DefaultClusterAlias { glob, bundle }
        | Failure::JobConfigGzipDisabled { glob, bundle } => {
            error!(glob = %glob, config_map = %bundle, "{failure}");
        }
        Failure::JobConfigProbeFailed { glob, .. } => {
            error!(glob = %glob, "{failure}");
        }
        Failure::AmbiguousMatch {
            source_file, glob, ..
        }
        | Failure::UnexpectedBundle {
            source_file, glob, ..
        } => {
            error!(source_file = %source_file, glob = %glob, "{failure}");
        }
        Failure::Uncovered { source_file } => {
            error!(source_file = %source_file, "{failure}");
        }
        Failure::UnknownConfigKey { location, key } => {
            error!(
                source_file = %location.source_file,
                job_kind = %location.job_kind,
                job = %location.job,
                container = location.container,
                key = %key,
                "{failure}"
            );
        }
        Failure::WrongInjectedBundle {
            location,
            key,
            got,
            expected,
        } => {
            error!(
                source_file = %location.source_file,
                job_kind = %location.job_kind,
                job = %location.job,
                container = location.container,
                key = %key,
                got = %got,
                expected = %expected,
                "{failure}"
            );
        }
    }
}

/// All-or-nothing verdict for a run
pub fn verdict(outcome: &CheckOutcome) -> Result<()> {
    if outcome.is_clean() {
        info!(
            warnings = outcome.warnings.len(),
            "All configurations belong to the correct auto-updating config."
        );
        return Ok(());
    }

    Err(ShardError::ValidationFailed {
        count: outcome.failures.len(),
    })
}
