// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Discovery, reconciliation and apply pipeline.

pub mod apply;
pub mod manager;
pub mod progress;
pub mod reconcile;

pub use apply::{apply_change_sets, ApplyReport};
pub use manager::Binder;
pub use progress::{LogSink, ProgressHandle, ProgressReporter, ProgressSink};
pub use reconcile::{belongs_to, compute_change_set, diff, reconcile};
