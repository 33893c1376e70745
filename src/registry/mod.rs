// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cursor-paged access to the cluster registry (MSK) and the secret store
//! (Secrets Manager).

pub mod kafka;
pub mod paginator;
pub mod secrets_manager;

use async_trait::async_trait;
use aws_sdk_kafka::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::error::{BinderError, Result};
use crate::types::{Cluster, Secret};

pub use kafka::KafkaRegistry;
pub use paginator::paginate;
pub use secrets_manager::SecretsManagerStore;

/// One page of a listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation cursor, `None` on the last page
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }
}

/// A secret the registry refused to (dis)associate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnprocessedSecret {
    pub arn: String,
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Cluster registry: lists clusters and their bound SCRAM secrets
#[async_trait]
pub trait ClusterRegistry: Send + Sync {
    /// Fetch one page of clusters
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page<Cluster>>;

    /// Fetch one page of secret ARNs currently bound to a cluster
    async fn list_associated_secrets(
        &self,
        cluster_arn: &str,
        next_token: Option<String>,
    ) -> Result<Page<String>>;

    /// Bind secrets to a cluster, returning the ones that were not processed
    async fn associate_secrets(
        &self,
        cluster_arn: &str,
        secret_arns: &[String],
    ) -> Result<Vec<UnprocessedSecret>>;

    /// Unbind secrets from a cluster, returning the ones that were not processed
    async fn disassociate_secrets(
        &self,
        cluster_arn: &str,
        secret_arns: &[String],
    ) -> Result<Vec<UnprocessedSecret>>;
}

/// Secret store: lists candidate secrets by name prefix
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch one page of secrets whose name starts with `name_prefix`
    async fn list_secrets(
        &self,
        name_prefix: &str,
        next_token: Option<String>,
    ) -> Result<Page<Secret>>;
}

/// Convert an SDK error, preferring the API-level message when there is one
pub(crate) fn api_error<E, R>(err: SdkError<E, R>) -> BinderError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err.as_service_error().and_then(|e| e.message()) {
        Some(message) => BinderError::Api(message.to_string()),
        None => BinderError::Api(DisplayErrorContext(&err).to_string()),
    }
}
