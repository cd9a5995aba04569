//! Validate command implementation
//!
//! Loads the config-updater rules and both inventories, runs the partition
//! and injection checks, logs what they found and settles the exit status.

use tracing::info;

use crate::check::{self, CheckOutcome, report};
use crate::cli::Options;
use crate::config::PluginConfig;
use crate::error::Result;
use crate::glob::{GlobMatcher, WaxMatcher};
use crate::inventory::{build_config_inventory, build_job_inventory};
use crate::layout::RepoLayout;

/// Run validate command
pub fn run(options: &Options) -> Result<()> {
    let layout = RepoLayout::new(&options.release_repo_dir);
    let outcome = validate_repo(&layout, &WaxMatcher)?;
    report::emit(&outcome);
    report::verdict(&outcome)
}

/// Load everything under `layout` and check it, without logging results
pub fn validate_repo(layout: &RepoLayout, matcher: &impl GlobMatcher) -> Result<CheckOutcome> {
    let rules = PluginConfig::load(&layout.plugin_config())?.into_rules();
    let configs = build_config_inventory(layout.root(), &layout.ciop_config_dir())?;
    let jobs = build_job_inventory(layout.root(), &layout.job_config_dir())?;

    info!(
        rules = rules.len(),
        configs = configs.records.len(),
        jobs = jobs.records.len(),
        injections = jobs.injections.len(),
        "Loaded release repository."
    );

    let mut records = configs.records;
    records.extend(jobs.records);

    let mut outcome = check::check_partition(&records, &rules, matcher);
    outcome.merge(check::check_injections(&jobs.injections, &configs.index));
    Ok(outcome)
}
