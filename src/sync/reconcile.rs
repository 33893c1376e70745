// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ownership matching and change-set computation.

use crate::types::{ChangeSet, Cluster, Secret};

/// Elements of `src` that do not occur in `cmp`, in `src` order.
///
/// Duplicates in `src` that are missing from `cmp` are kept.
pub fn diff(src: &[String], cmp: &[String]) -> Vec<String> {
    src.iter().filter(|s| !cmp.contains(*s)).cloned().collect()
}

/// Check if a secret belongs to a cluster.
///
/// It does when any `Cluster` tag value is a case-sensitive prefix of the
/// cluster name. A tag of `prod` therefore matches both `prod-east` and
/// `prod-west`.
pub fn belongs_to(cluster: &Cluster, secret: &Secret) -> bool {
    secret
        .cluster_tags()
        .any(|value| cluster.name.starts_with(value))
}

/// ARNs of every secret that belongs to the cluster, in secret order
pub fn desired_secrets(cluster: &Cluster, secrets: &[Secret]) -> Vec<String> {
    secrets
        .iter()
        .filter(|s| belongs_to(cluster, s))
        .map(|s| s.arn.clone())
        .collect()
}

pub fn compute_change_set(desired: &[String], actual: &[String]) -> ChangeSet {
    ChangeSet {
        to_add: diff(desired, actual),
        to_remove: diff(actual, desired),
    }
}

/// Recompute the cluster's change set from its desired and actual secrets
pub fn reconcile_cluster(cluster: &mut Cluster) {
    cluster.change_set = compute_change_set(&cluster.desired_secrets, &cluster.actual_secrets);
}

/// Match secrets to every cluster, then reconcile each one
pub fn reconcile(clusters: &mut [Cluster], secrets: &[Secret]) {
    for cluster in clusters {
        cluster.desired_secrets = desired_secrets(cluster, secrets);
        reconcile_cluster(cluster);
    }
}
