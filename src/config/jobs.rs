//! Prow job configuration files
//!
//! Only the pieces of a job needed to find injected configuration are
//! modelled: job names, pod spec containers and their environment.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Environment variable through which jobs receive their CI operator config
pub const CONFIG_SPEC_ENV: &str = "CONFIG_SPEC";

/// A job configuration file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobConfig {
    /// `org/repo` -> presubmit jobs
    #[serde(default)]
    pub presubmits: BTreeMap<String, Vec<Job>>,

    /// `org/repo` -> postsubmit jobs
    #[serde(default)]
    pub postsubmits: BTreeMap<String, Vec<Job>>,

    #[serde(default)]
    pub periodics: Vec<Job>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Presubmit,
    Postsubmit,
    Periodic,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobKind::Presubmit => "presubmit",
            JobKind::Postsubmit => "postsubmit",
            JobKind::Periodic => "periodic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Job {
    pub name: String,

    #[serde(default)]
    pub spec: Option<PodSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub env: Vec<EnvVar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,

    #[serde(default)]
    pub value_from: Option<EnvVarSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVarSource {
    #[serde(default)]
    pub config_map_key_ref: Option<ConfigMapKeySelector>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigMapKeySelector {
    /// Config map the value is read from
    #[serde(default)]
    pub name: String,

    pub key: String,
}

impl EnvVar {
    /// The config map key reference this variable injects, if it is `CONFIG_SPEC`
    pub fn injected_config(&self) -> Option<&ConfigMapKeySelector> {
        if self.name != CONFIG_SPEC_ENV {
            return None;
        }
        self.value_from.as_ref()?.config_map_key_ref.as_ref()
    }
}

impl JobConfig {
    /// Load a job configuration file
    pub fn load(path: &Path) -> Result<Self> {
        super::read_yaml(path)
    }

    /// All jobs with a pod spec, tagged with their kind
    pub fn jobs_with_spec(&self) -> impl Iterator<Item = (JobKind, &Job, &PodSpec)> {
        let presubmits = self
            .presubmits
            .values()
            .flatten()
            .map(|job| (JobKind::Presubmit, job));
        let postsubmits = self
            .postsubmits
            .values()
            .flatten()
            .map(|job| (JobKind::Postsubmit, job));
        let periodics = self.periodics.iter().map(|job| (JobKind::Periodic, job));

        presubmits
            .chain(postsubmits)
            .chain(periodics)
            .filter_map(|(kind, job)| job.spec.as_ref().map(|spec| (kind, job, spec)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOBS: &str = r"
presubmits:
  openshift/origin:
  - name: pull-ci-openshift-origin-master-unit
    spec:
      containers:
      - args:
        - --target=unit
        env:
        - name: CONFIG_SPEC
          valueFrom:
            configMapKeyRef:
              name: ci-operator-master-configs
              key: openshift-origin-master.yaml
        - name: OTHER
          value: plain
  - name: pull-ci-openshift-origin-master-no-spec
postsubmits:
  openshift/origin:
  - name: branch-ci-openshift-origin-master-images
    spec:
      containers:
      - env:
        - name: CONFIG_SPEC
          value: inline
periodics:
- name: periodic-ci-openshift-origin-master-e2e
  spec:
    containers:
    - env: []
    - env:
      - name: CONFIG_SPEC
        valueFrom:
          configMapKeyRef:
            name: ci-operator-master-configs
            key: openshift-origin-master.yaml
";

    fn parse(yaml: &str) -> JobConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_jobs_with_spec_skips_specless_jobs() {
        let config = parse(JOBS);
        let kinds: Vec<_> = config
            .jobs_with_spec()
            .map(|(kind, job, _)| (kind, job.name.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (JobKind::Presubmit, "pull-ci-openshift-origin-master-unit"),
                (JobKind::Postsubmit, "branch-ci-openshift-origin-master-images"),
                (JobKind::Periodic, "periodic-ci-openshift-origin-master-e2e"),
            ]
        );
    }

    #[test]
    fn test_injected_config_requires_config_spec_ref() {
        let config = parse(JOBS);
        let presubmit = &config.presubmits["openshift/origin"][0];
        let env = &presubmit.spec.as_ref().unwrap().containers[0].env;

        let selector = env[0].injected_config().unwrap();
        assert_eq!(selector.name, "ci-operator-master-configs");
        assert_eq!(selector.key, "openshift-origin-master.yaml");
        assert!(env[1].injected_config().is_none());

        let postsubmit = &config.postsubmits["openshift/origin"][0];
        let inline = &postsubmit.spec.as_ref().unwrap().containers[0].env[0];
        assert!(inline.injected_config().is_none());
    }

    #[test]
    fn test_job_kind_display() {
        assert_eq!(JobKind::Presubmit.to_string(), "presubmit");
        assert_eq!(JobKind::Periodic.to_string(), "periodic");
    }
}
