//! Partition check: every file belongs to exactly one correct bundle
//!
//! Rule-level checks (no `default` cluster alias, gzip for job configs) are
//! evaluated once per rule. Path-level checks walk every record against
//! every rule, so one run reports all coverage, uniqueness and correctness
//! problems.

use super::{CheckOutcome, Failure, Warning};
use crate::config::RuleSet;
use crate::config::plugins::DEFAULT_CLUSTER_ALIAS;
use crate::glob::GlobMatcher;
use crate::inventory::PathRecord;
use crate::layout::JOB_CONFIG_IN_REPO_PATH;

/// Run rule-level and path-level partition checks
pub fn check_partition(
    records: &[PathRecord],
    rules: &RuleSet,
    matcher: &impl GlobMatcher,
) -> CheckOutcome {
    let mut outcome = check_rules(rules, matcher);
    outcome.merge(check_paths(records, rules, matcher));
    outcome
}

/// Checks that depend only on the rules, never on the discovered files
pub fn check_rules(rules: &RuleSet, matcher: &impl GlobMatcher) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for (glob, bundle) in rules {
        if bundle.has_cluster_alias(DEFAULT_CLUSTER_ALIAS) {
            outcome.failures.push(Failure::DefaultClusterAlias {
                glob: glob.clone(),
                bundle: bundle.name.clone(),
            });
        }

        match matcher.is_match(glob, JOB_CONFIG_IN_REPO_PATH) {
            Err(e) => outcome.failures.push(Failure::JobConfigProbeFailed {
                glob: glob.clone(),
                reason: e.to_string(),
            }),
            Ok(true) if !bundle.gzip_enabled() => {
                outcome.failures.push(Failure::JobConfigGzipDisabled {
                    glob: glob.clone(),
                    bundle: bundle.name.clone(),
                });
            }
            Ok(_) => {}
        }
    }

    outcome
}

/// Coverage, uniqueness and correctness of every record against the rules
pub fn check_paths(
    records: &[PathRecord],
    rules: &RuleSet,
    matcher: &impl GlobMatcher,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for record in records {
        let mut matched_bundle: Option<&str> = None;

        for (glob, bundle) in rules {
            let matches = match matcher.is_match(glob, &record.path) {
                Ok(matches) => matches,
                Err(e) => {
                    outcome.warnings.push(Warning {
                        source_file: record.path.clone(),
                        glob: glob.clone(),
                        reason: e.to_string(),
                    });
                    false
                }
            };
            if !matches {
                continue;
            }

            if let Some(first) = matched_bundle {
                outcome.failures.push(Failure::AmbiguousMatch {
                    source_file: record.path.clone(),
                    glob: glob.clone(),
                    first: first.to_string(),
                    second: bundle.name.clone(),
                });
            }
            if bundle.name != record.bundle {
                outcome.failures.push(Failure::UnexpectedBundle {
                    source_file: record.path.clone(),
                    glob: glob.clone(),
                    matched: bundle.name.clone(),
                    expected: record.bundle.clone(),
                });
            }
            if matched_bundle.is_none() {
                matched_bundle = Some(bundle.name.as_str());
            }
        }

        if matched_bundle.is_none() {
            outcome.failures.push(Failure::Uncovered {
                source_file: record.path.clone(),
            });
        }
    }

    outcome
}
