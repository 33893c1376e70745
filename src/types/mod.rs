// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Domain records for one discovery run.

pub mod cluster;
pub mod secret;

pub use cluster::{ChangeSet, Cluster};
pub use secret::{Secret, Tag};
