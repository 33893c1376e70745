// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinderError {
    #[error("AWS API error: {0}")]
    Api(String),

    #[error("unable to {operation}: {source}")]
    Pagination {
        operation: &'static str,
        #[source]
        source: Box<BinderError>,
    },

    #[error("cluster {cluster}: {source}")]
    AssociatedSecrets {
        cluster: String,
        #[source]
        source: Box<BinderError>,
    },

    #[error("unable to {stage}: {source}")]
    Discovery {
        stage: &'static str,
        #[source]
        source: Box<BinderError>,
    },

    #[error("unable to {operation} secrets for {cluster}: {message}")]
    Apply {
        operation: &'static str,
        cluster: String,
        message: String,
    },
}

impl BinderError {
    /// Wrap a failure with the discovery stage it aborted
    pub fn discovery(stage: &'static str, source: BinderError) -> Self {
        BinderError::Discovery {
            stage,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, BinderError>;
