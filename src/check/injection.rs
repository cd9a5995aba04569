//! Injection check: `CONFIG_SPEC` references point at the right bundle

use super::{CheckOutcome, Failure};
use crate::inventory::{ConfigIndex, InjectionReference};

/// Check every injected config reference against the config index
pub fn check_injections(references: &[InjectionReference], index: &ConfigIndex) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for reference in references {
        let Some(record) = index.get(&reference.key) else {
            outcome.failures.push(Failure::UnknownConfigKey {
                location: reference.location.clone(),
                key: reference.key.clone(),
            });
            continue;
        };

        if reference.bundle != record.bundle {
            outcome.failures.push(Failure::WrongInjectedBundle {
                location: reference.location.clone(),
                key: reference.key.clone(),
                got: reference.bundle.clone(),
                expected: record.bundle.clone(),
            });
        }
    }

    outcome
}
