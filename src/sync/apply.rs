// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Applies computed change sets to the cluster registry.

use tracing::{info, instrument, warn};

use crate::constants::SCRAM_BATCH_LIMIT;
use crate::error::{BinderError, Result};
use crate::registry::{ClusterRegistry, UnprocessedSecret};
use crate::types::Cluster;

/// Outcome of applying change sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub associated: usize,
    pub disassociated: usize,
    /// Secrets the registry accepted the call for but did not process
    pub unprocessed: Vec<UnprocessedSecret>,
}

#[derive(Clone, Copy)]
enum Operation {
    Associate,
    Disassociate,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Associate => "associate",
            Operation::Disassociate => "disassociate",
        }
    }
}

/// Associate each cluster's additions, then disassociate its removals.
///
/// Clusters are handled one after another. The first failed call aborts.
pub async fn apply_change_sets<R: ClusterRegistry + ?Sized>(
    registry: &R,
    clusters: &[Cluster],
) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    for cluster in clusters.iter().filter(|c| c.has_changes()) {
        apply_cluster(registry, cluster, &mut report).await?;
    }

    Ok(report)
}

#[instrument(skip(registry, cluster, report), fields(cluster = %cluster.name))]
async fn apply_cluster<R: ClusterRegistry + ?Sized>(
    registry: &R,
    cluster: &Cluster,
    report: &mut ApplyReport,
) -> Result<()> {
    info!(
        "Updating secrets: +{} -{}",
        cluster.change_set.to_add.len(),
        cluster.change_set.to_remove.len()
    );

    for batch in cluster.change_set.to_add.chunks(SCRAM_BATCH_LIMIT) {
        let unprocessed = call(registry, cluster, Operation::Associate, batch).await?;
        report.associated += processed(batch, &unprocessed);
        report.unprocessed.extend(unprocessed);
    }

    for batch in cluster.change_set.to_remove.chunks(SCRAM_BATCH_LIMIT) {
        let unprocessed = call(registry, cluster, Operation::Disassociate, batch).await?;
        report.disassociated += processed(batch, &unprocessed);
        report.unprocessed.extend(unprocessed);
    }

    Ok(())
}

/// Batch entries the registry did not report back as unprocessed
fn processed(batch: &[String], unprocessed: &[UnprocessedSecret]) -> usize {
    batch
        .iter()
        .filter(|arn| !unprocessed.iter().any(|u| &u.arn == *arn))
        .count()
}

async fn call<R: ClusterRegistry + ?Sized>(
    registry: &R,
    cluster: &Cluster,
    operation: Operation,
    batch: &[String],
) -> Result<Vec<UnprocessedSecret>> {
    let result = match operation {
        Operation::Associate => registry.associate_secrets(&cluster.arn, batch).await,
        Operation::Disassociate => registry.disassociate_secrets(&cluster.arn, batch).await,
    };

    let unprocessed = result.map_err(|e| BinderError::Apply {
        operation: operation.name(),
        cluster: cluster.name.clone(),
        message: e.to_string(),
    })?;

    for u in &unprocessed {
        warn!(
            "Unprocessed scram secret: {} code: {} message: {}",
            u.arn,
            u.code.as_deref().unwrap_or("-"),
            u.message.as_deref().unwrap_or("-")
        );
    }

    Ok(unprocessed)
}
