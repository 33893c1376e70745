// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::Serialize;

use crate::constants::tags;

/// A candidate SCRAM secret from Secrets Manager. Read-only after discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Secret {
    pub arn: String,
    pub name: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Secret {
    pub fn new(arn: impl Into<String>, name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Secret {
            arn: arn.into(),
            name: name.into(),
            tags,
        }
    }

    /// Values of every `Cluster` tag, in tag order
    pub fn cluster_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .filter(|t| t.key == tags::CLUSTER)
            .map(|t| t.value.as_str())
    }
}
