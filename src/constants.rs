// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Secrets Manager tag keys used for ownership
pub mod tags {
    /// Tag whose value must be a prefix of the owning cluster's name
    pub const CLUSTER: &str = "Cluster";
}

/// Name prefix MSK requires for SCRAM secrets
pub const DEFAULT_SECRET_PREFIX: &str = "AmazonMSK_";

/// Pagination limits for the AWS listing calls
pub mod paging {
    /// Default page size for every listing call
    pub const DEFAULT_PAGE_SIZE: i32 = 100;
    /// Largest page size MSK and Secrets Manager accept
    pub const MAX_PAGE_SIZE: i32 = 100;
}

/// Most secret ARNs accepted by one BatchAssociate/BatchDisassociate call
pub const SCRAM_BATCH_LIMIT: usize = 10;

/// Displayed when a cluster reports no broker software version
pub const UNKNOWN_VERSION: &str = "unknown";
