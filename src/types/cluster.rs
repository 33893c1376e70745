// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;
use std::fmt;

/// An MSK cluster and the SCRAM secrets bound (or to be bound) to it.
///
/// Created once per run by cluster discovery. During the associated-secrets
/// fan-out exactly one task holds `&mut` access to a given record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub name: String,
    pub arn: String,
    /// Kafka version, display only
    pub version: String,
    /// Secret ARNs that should be bound, computed by the ownership matcher
    pub desired_secrets: Vec<String>,
    /// Secret ARNs currently bound, as reported by the registry
    pub actual_secrets: Vec<String>,
    pub change_set: ChangeSet,
}

impl Cluster {
    pub fn new(
        name: impl Into<String>,
        arn: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Cluster {
            name: name.into(),
            arn: arn.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Check if applying this cluster's change set would change anything
    pub fn has_changes(&self) -> bool {
        !self.change_set.is_empty()
    }
}

/// Secret ARNs needed to move a cluster's actual bindings to the desired ones
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    pub to_add: Vec<String>,
    pub to_remove: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// One `+arn` line per addition, then one `-arn` line per removal
impl fmt::Display for ChangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arn in &self.to_add {
            writeln!(f, "+{}", arn)?;
        }
        for arn in &self.to_remove {
            writeln!(f, "-{}", arn)?;
        }
        Ok(())
    }
}
