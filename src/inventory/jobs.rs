//! Prow job configuration inventory

use std::path::Path;

use tracing::debug;

use super::{InjectionReference, PathRecord, SourceLocation, yaml_files};
use crate::config::JobConfig;
use crate::error::Result;
use crate::naming::{ConfigKind, FileInfo};
use crate::path_utils;

/// Every job configuration file and every injected config reference in them
#[derive(Debug, Clone, Default)]
pub struct JobInventory {
    pub records: Vec<PathRecord>,
    pub injections: Vec<InjectionReference>,
}

/// Walk `job_dir` and record every job configuration in it
pub fn build_job_inventory(repo_root: &Path, job_dir: &Path) -> Result<JobInventory> {
    let mut inventory = JobInventory::default();

    for path in yaml_files(job_dir)? {
        let job_config = JobConfig::load(&path)?;
        let info = FileInfo::from_path(job_dir, &path, ConfigKind::Job);
        let relative = path_utils::relative_to(repo_root, &path);

        let injections = injection_references(&job_config, &relative);
        debug!(
            source_file = %relative,
            bundle = %info.bundle_name(),
            injections = injections.len(),
            "Found job configuration."
        );

        inventory.injections.extend(injections);
        inventory
            .records
            .push(PathRecord::new(relative, info.bundle_name()));
    }

    Ok(inventory)
}

/// Collect `CONFIG_SPEC` config map references from every job with a pod spec
pub fn injection_references(job_config: &JobConfig, source_file: &str) -> Vec<InjectionReference> {
    let mut references = Vec::new();

    for (job_kind, job, spec) in job_config.jobs_with_spec() {
        for (container, definition) in spec.containers.iter().enumerate() {
            for selector in definition.env.iter().filter_map(|env| env.injected_config()) {
                references.push(InjectionReference {
                    key: selector.key.clone(),
                    bundle: selector.name.clone(),
                    location: SourceLocation {
                        source_file: source_file.to_string(),
                        job_kind,
                        job: job.name.clone(),
                        container,
                    },
                });
            }
        }
    }

    references
}
