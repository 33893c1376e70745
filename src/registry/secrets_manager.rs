// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret store backed by `aws-sdk-secretsmanager`

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::types::{Filter, FilterNameStringType, SecretListEntry};
use aws_sdk_secretsmanager::Client;
use tracing::{instrument, warn};

use super::{api_error, Page, SecretStore};
use crate::error::Result;
use crate::types::{Secret, Tag};

pub struct SecretsManagerStore {
    client: Client,
    page_size: i32,
}

impl std::fmt::Debug for SecretsManagerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsManagerStore")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl SecretsManagerStore {
    pub fn new(sdk_config: &SdkConfig, page_size: i32) -> Self {
        Self {
            client: Client::new(sdk_config),
            page_size,
        }
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    #[instrument(skip(self))]
    async fn list_secrets(
        &self,
        name_prefix: &str,
        next_token: Option<String>,
    ) -> Result<Page<Secret>> {
        // The name filter matches on prefix server side
        let filter = Filter::builder()
            .key(FilterNameStringType::Name)
            .values(name_prefix)
            .build();

        let output = self
            .client
            .list_secrets()
            .filters(filter)
            .max_results(self.page_size)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(api_error)?;

        let secrets = output
            .secret_list
            .unwrap_or_default()
            .into_iter()
            .filter_map(secret_from_entry)
            .collect();

        Ok(Page::new(secrets, output.next_token))
    }
}

/// Map a raw Secrets Manager entry, skipping entries without an ARN
fn secret_from_entry(entry: SecretListEntry) -> Option<Secret> {
    let Some(arn) = entry.arn else {
        warn!(
            "Skipping secret {:?} without an ARN",
            entry.name.as_deref().unwrap_or_default()
        );
        return None;
    };

    let name = entry.name.unwrap_or_else(|| arn.clone());
    let tags = entry
        .tags
        .unwrap_or_default()
        .into_iter()
        .filter_map(|t| match (t.key, t.value) {
            (Some(key), Some(value)) => Some(Tag::new(key, value)),
            _ => None,
        })
        .collect();

    Some(Secret::new(arn, name, tags))
}
