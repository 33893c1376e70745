// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Central coordinator for one discovery and reconciliation run.

use futures::future::try_join_all;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{BinderError, Result};
use crate::registry::{paginate, ClusterRegistry, SecretStore};
use crate::sync::apply::{apply_change_sets, ApplyReport};
use crate::sync::progress::{ProgressReporter, ProgressSink};
use crate::sync::reconcile::reconcile;
use crate::types::{Cluster, Secret};

/// Binds Secrets Manager secrets to MSK clusters.
///
/// Each run re-derives clusters, secrets and bindings from scratch.
pub struct Binder<R, S> {
    registry: R,
    store: S,
    config: Config,
}

impl<R: ClusterRegistry, S: SecretStore> Binder<R, S> {
    pub fn new(registry: R, store: S, config: Config) -> Self {
        Self {
            registry,
            store,
            config,
        }
    }

    /// Discover, fetch current bindings and reconcile every cluster.
    ///
    /// Any failure aborts the run before a change set is computed.
    pub async fn run<P: ProgressSink>(&self, progress: P) -> Result<Vec<Cluster>> {
        let (mut clusters, secrets) = self.discover().await?;
        self.fetch_associated_secrets(&mut clusters, progress).await?;

        reconcile(&mut clusters, &secrets);

        let changed = clusters.iter().filter(|c| c.has_changes()).count();
        info!("Reconciled {} clusters, {} with changes", clusters.len(), changed);
        Ok(clusters)
    }

    /// List clusters and candidate secrets concurrently.
    /// Both listings must succeed; the first error is returned.
    #[instrument(skip(self))]
    pub async fn discover(&self) -> Result<(Vec<Cluster>, Vec<Secret>)> {
        let clusters = async {
            let clusters =
                paginate("list clusters", |token| self.registry.list_clusters(token)).await?;
            info!("Found {} clusters", clusters.len());
            Ok::<_, BinderError>(clusters)
        };

        let prefix = self.config.secret_prefix.as_str();
        let secrets = async {
            let secrets =
                paginate("list secrets", |token| self.store.list_secrets(prefix, token)).await?;
            info!("Found {} secrets with prefix {}", secrets.len(), prefix);
            Ok::<_, BinderError>(secrets)
        };

        tokio::try_join!(clusters, secrets)
            .map_err(|e| BinderError::discovery("list clusters and secrets", e))
    }

    /// Fill in `actual_secrets` for every cluster, one concurrent fetch per
    /// cluster, while a single reporter forwards progress.
    ///
    /// Each fetch owns the only mutable borrow of its cluster. On failure the
    /// first error is returned and the partially filled clusters must not be
    /// reconciled.
    #[instrument(skip_all, fields(clusters = clusters.len()))]
    pub async fn fetch_associated_secrets<P: ProgressSink>(
        &self,
        clusters: &mut [Cluster],
        progress: P,
    ) -> Result<()> {
        if clusters.is_empty() {
            return Ok(());
        }

        let (reporter, handle) = ProgressReporter::new(clusters.len(), progress);
        let registry = &self.registry;

        // Owns `handle`, so the channel closes once every fetch is done
        let fetches = async move {
            try_join_all(clusters.iter_mut().map(move |cluster| {
                let handle = handle.clone();
                async move {
                    fetch_cluster_secrets(registry, cluster).await?;
                    handle.completed(&cluster.name).await;
                    Ok::<_, BinderError>(())
                }
            }))
            .await
        };
        let report = async move { Ok::<_, BinderError>(reporter.run().await) };

        let (_, reported) = tokio::try_join!(fetches, report)
            .map_err(|e| BinderError::discovery("list associated secrets", e))?;

        debug!(reported, "All clusters reported");
        Ok(())
    }

    /// Apply every cluster's change set to the registry
    pub async fn apply(&self, clusters: &[Cluster]) -> Result<ApplyReport> {
        apply_change_sets(&self.registry, clusters).await
    }
}

#[instrument(skip(registry, cluster), fields(cluster = %cluster.name))]
async fn fetch_cluster_secrets<R: ClusterRegistry + ?Sized>(
    registry: &R,
    cluster: &mut Cluster,
) -> Result<()> {
    let arn = cluster.arn.as_str();
    let secrets = paginate("list scram secrets", |token| {
        registry.list_associated_secrets(arn, token)
    })
    .await
    .map_err(|e| BinderError::AssociatedSecrets {
        cluster: cluster.name.clone(),
        source: Box::new(e),
    })?;

    debug!("Found {} associated secrets", secrets.len());
    cluster.actual_secrets = secrets;
    Ok(())
}
