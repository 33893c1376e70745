// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! MSK cluster registry backed by `aws-sdk-kafka`

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_kafka::types::{ClusterInfo, UnprocessedScramSecret};
use aws_sdk_kafka::Client;
use tracing::{instrument, warn};

use super::{api_error, ClusterRegistry, Page, UnprocessedSecret};
use crate::constants::UNKNOWN_VERSION;
use crate::error::Result;
use crate::types::Cluster;

pub struct KafkaRegistry {
    client: Client,
    page_size: i32,
}

impl std::fmt::Debug for KafkaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KafkaRegistry")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl KafkaRegistry {
    pub fn new(sdk_config: &SdkConfig, page_size: i32) -> Self {
        Self {
            client: Client::new(sdk_config),
            page_size,
        }
    }
}

#[async_trait]
impl ClusterRegistry for KafkaRegistry {
    #[instrument(skip(self))]
    async fn list_clusters(&self, next_token: Option<String>) -> Result<Page<Cluster>> {
        let output = self
            .client
            .list_clusters()
            .max_results(self.page_size)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(api_error)?;

        let clusters = output
            .cluster_info_list
            .unwrap_or_default()
            .into_iter()
            .filter_map(cluster_from_info)
            .collect();

        Ok(Page::new(clusters, output.next_token))
    }

    #[instrument(skip(self))]
    async fn list_associated_secrets(
        &self,
        cluster_arn: &str,
        next_token: Option<String>,
    ) -> Result<Page<String>> {
        let output = self
            .client
            .list_scram_secrets()
            .cluster_arn(cluster_arn)
            .max_results(self.page_size)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(api_error)?;

        Ok(Page::new(
            output.secret_arn_list.unwrap_or_default(),
            output.next_token,
        ))
    }

    #[instrument(skip(self, secret_arns), fields(count = secret_arns.len()))]
    async fn associate_secrets(
        &self,
        cluster_arn: &str,
        secret_arns: &[String],
    ) -> Result<Vec<UnprocessedSecret>> {
        let output = self
            .client
            .batch_associate_scram_secret()
            .cluster_arn(cluster_arn)
            .set_secret_arn_list(Some(secret_arns.to_vec()))
            .send()
            .await
            .map_err(api_error)?;

        Ok(unprocessed(output.unprocessed_scram_secrets))
    }

    #[instrument(skip(self, secret_arns), fields(count = secret_arns.len()))]
    async fn disassociate_secrets(
        &self,
        cluster_arn: &str,
        secret_arns: &[String],
    ) -> Result<Vec<UnprocessedSecret>> {
        let output = self
            .client
            .batch_disassociate_scram_secret()
            .cluster_arn(cluster_arn)
            .set_secret_arn_list(Some(secret_arns.to_vec()))
            .send()
            .await
            .map_err(api_error)?;

        Ok(unprocessed(output.unprocessed_scram_secrets))
    }
}

/// Map a raw MSK cluster entry, skipping entries without an ARN
fn cluster_from_info(info: ClusterInfo) -> Option<Cluster> {
    let Some(arn) = info.cluster_arn else {
        warn!(
            "Skipping cluster {:?} without an ARN",
            info.cluster_name.as_deref().unwrap_or_default()
        );
        return None;
    };

    let name = info.cluster_name.unwrap_or_else(|| arn.clone());
    let version = info
        .current_broker_software_info
        .and_then(|b| b.kafka_version)
        .unwrap_or_else(|| UNKNOWN_VERSION.to_string());

    Some(Cluster::new(name, arn, version))
}

fn unprocessed(entries: Option<Vec<UnprocessedScramSecret>>) -> Vec<UnprocessedSecret> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|e| UnprocessedSecret {
            arn: e.secret_arn.unwrap_or_default(),
            code: e.error_code,
            message: e.error_message,
        })
        .collect()
}
