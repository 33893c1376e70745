// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory paged registries for tests.
//!
//! Page `n` is requested with continuation token `"n"`; the first page is
//! requested without a token.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{BinderError, Result};
use crate::registry::{ClusterRegistry, Page, SecretStore, UnprocessedSecret};
use crate::types::{Cluster, Secret, Tag};

/// A call made against a mock registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListClusters(Option<String>),
    ListAssociated(String, Option<String>),
    Associate(String, Vec<String>),
    Disassociate(String, Vec<String>),
    ListSecrets(String, Option<String>),
}

fn serve_page<T: Clone>(pages: &[Vec<T>], token: Option<&str>) -> Page<T> {
    let index: usize = token.and_then(|t| t.parse().ok()).unwrap_or(0);
    let items = pages.get(index).cloned().unwrap_or_default();
    let next = (index + 1 < pages.len()).then(|| (index + 1).to_string());
    Page::new(items, next)
}

#[derive(Default)]
struct RegistryState {
    cluster_pages: Vec<Vec<Cluster>>,
    associated_pages: HashMap<String, Vec<Vec<String>>>,
    delays: HashMap<String, Duration>,
    /// Keyed by operation name, or `operation:cluster_arn`
    failures: HashMap<String, String>,
    unprocessed: Vec<String>,
    calls: Vec<Call>,
}

/// Cluster registry serving canned pages
#[derive(Clone, Default)]
pub struct MockClusterRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl MockClusterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cluster_pages(self, pages: Vec<Vec<Cluster>>) -> Self {
        self.state.lock().unwrap().cluster_pages = pages;
        self
    }

    /// Serve `pages` of secret ARNs for the cluster with ARN `cluster_arn`
    pub fn with_associated_pages(self, cluster_arn: &str, pages: Vec<Vec<&str>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|p| p.into_iter().map(String::from).collect())
            .collect();
        self.state
            .lock()
            .unwrap()
            .associated_pages
            .insert(cluster_arn.to_string(), pages);
        self
    }

    /// Delay every associated-secrets page for one cluster
    pub fn with_delay(self, cluster_arn: &str, delay: Duration) -> Self {
        self.state
            .lock()
            .unwrap()
            .delays
            .insert(cluster_arn.to_string(), delay);
        self
    }

    /// Fail `operation` ("list_clusters", "list_associated", "associate",
    /// "disassociate"), optionally only for one cluster ARN
    pub fn with_failure(self, operation: &str, cluster_arn: Option<&str>, message: &str) -> Self {
        let key = match cluster_arn {
            Some(arn) => format!("{}:{}", operation, arn),
            None => operation.to_string(),
        };
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(key, message.to_string());
        self
    }

    /// Report this secret ARN as unprocessed whenever it is (dis)associated
    pub fn with_unprocessed(self, secret_arn: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .unprocessed
            .push(secret_arn.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn check_failure(
        state: &RegistryState,
        operation: &str,
        cluster_arn: Option<&str>,
    ) -> Result<()> {
        let scoped =
            cluster_arn.and_then(|arn| state.failures.get(&format!("{}:{}", operation, arn)));
        match scoped.or_else(|| state.failures.get(operation)) {
            Some(message) => Err(BinderError::Api(message.clone())),
            None => Ok(()),
        }
    }

    fn batch(
        &self,
        operation: &str,
        cluster_arn: &str,
        secret_arns: &[String],
    ) -> Result<Vec<UnprocessedSecret>> {
        let mut state = self.state.lock().unwrap();
        let call = match operation {
            "associate" => Call::Associate(cluster_arn.to_string(), secret_arns.to_vec()),
            _ => Call::Disassociate(cluster_arn.to_string(), secret_arns.to_vec()),
        };
        state.calls.push(call);
        Self::check_failure(&state, operation, Some(cluster_arn))?;

        // One entry per registration, so repeated registrations over-report
        Ok(state
            .unprocessed
            .iter()
            .filter(|arn| secret_arns.contains(*arn))
            .map(|arn| UnprocessedSecret {
                arn: arn.clone(),
                code: Some("InvalidSecret".to_string()),
                message: Some("secret is not encrypted with a customer managed key".to_string()),
            })
            .collect())
    }
}

#[async_trait]
impl ClusterRegistry for MockClusterRegistry {
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page<Cluster>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListClusters(next_token.clone()));
        Self::check_failure(&state, "list_clusters", None)?;
        Ok(serve_page(&state.cluster_pages, next_token.as_deref()))
    }

    async fn list_associated_secrets(
        &self,
        cluster_arn: &str,
        next_token: Option<String>,
    ) -> Result<Page<String>> {
        let delay = {
            let mut state = self.state.lock().unwrap();
            state
                .calls
                .push(Call::ListAssociated(cluster_arn.to_string(), next_token.clone()));
            state.delays.get(cluster_arn).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.lock().unwrap();
        Self::check_failure(&state, "list_associated", Some(cluster_arn))?;
        let pages = state
            .associated_pages
            .get(cluster_arn)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(serve_page(pages, next_token.as_deref()))
    }

    async fn associate_secrets(
        &self,
        cluster_arn: &str,
        secret_arns: &[String],
    ) -> Result<Vec<UnprocessedSecret>> {
        self.batch("associate", cluster_arn, secret_arns)
    }

    async fn disassociate_secrets(
        &self,
        cluster_arn: &str,
        secret_arns: &[String],
    ) -> Result<Vec<UnprocessedSecret>> {
        self.batch("disassociate", cluster_arn, secret_arns)
    }
}

#[derive(Default)]
struct StoreState {
    pages: Vec<Vec<Secret>>,
    failure: Option<String>,
    calls: Vec<Call>,
}

/// Secret store serving canned pages
#[derive(Clone, Default)]
pub struct MockSecretStore {
    state: Arc<Mutex<StoreState>>,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages(self, pages: Vec<Vec<Secret>>) -> Self {
        self.state.lock().unwrap().pages = pages;
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.state.lock().unwrap().failure = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }
}

#[async_trait]
impl SecretStore for MockSecretStore {
    async fn list_secrets(
        &self,
        name_prefix: &str,
        next_token: Option<String>,
    ) -> Result<Page<Secret>> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(Call::ListSecrets(name_prefix.to_string(), next_token.clone()));
        if let Some(message) = &state.failure {
            return Err(BinderError::Api(message.clone()));
        }
        Ok(serve_page(&state.pages, next_token.as_deref()))
    }
}

/// A cluster whose ARN is `arn:<name>`
pub fn cluster(name: &str) -> Cluster {
    Cluster::new(name, format!("arn:{}", name), "3.5.1")
}

/// A secret tagged `Cluster=<owner>`
pub fn secret(arn: &str, owner: &str) -> Secret {
    Secret::new(arn, format!("AmazonMSK_{}", arn), vec![Tag::new("Cluster", owner)])
}
