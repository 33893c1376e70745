// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Progress fan-in for the per-cluster fetches.
//!
//! Every fetch task reports its cluster name through a [`ProgressHandle`]
//! once it has finished. A single [`ProgressReporter`] drains the channel and
//! forwards a `processed/total name` message to a [`ProgressSink`]. The
//! channel holds one slot per cluster, so producers never wait on the
//! reporter.

use tokio::sync::mpsc;
use tracing::{error, info};

/// Receives progress messages for display
pub trait ProgressSink: Send {
    fn message(&mut self, message: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(&str) + Send,
{
    fn message(&mut self, message: &str) {
        self(message)
    }
}

/// Sink that logs every progress message
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn message(&mut self, message: &str) {
        info!(progress = %message, "Listed associated secrets");
    }
}

/// Handle the fetch tasks use to report a finished cluster
#[derive(Clone, Debug)]
pub struct ProgressHandle {
    event_tx: mpsc::Sender<String>,
}

impl ProgressHandle {
    pub async fn completed(&self, cluster_name: &str) {
        if let Err(e) = self.event_tx.send(cluster_name.to_string()).await {
            error!("Failed to send progress for {}: {}", cluster_name, e);
        }
    }
}

/// Single consumer of the completion channel
pub struct ProgressReporter<S> {
    total: usize,
    event_rx: mpsc::Receiver<String>,
    sink: S,
}

impl<S: ProgressSink> ProgressReporter<S> {
    /// Create a reporter expecting `total` completions.
    ///
    /// The channel capacity equals `total` (at least one slot).
    pub fn new(total: usize, sink: S) -> (Self, ProgressHandle) {
        let (event_tx, event_rx) = mpsc::channel(total.max(1));

        let reporter = Self {
            total,
            event_rx,
            sink,
        };
        (reporter, ProgressHandle { event_tx })
    }

    /// Drain completions until `total` have arrived or every handle is gone.
    /// Returns the number of completions seen.
    pub async fn run(mut self) -> usize {
        let mut processed = 0;

        while processed < self.total {
            let Some(name) = self.event_rx.recv().await else {
                break;
            };
            processed += 1;
            self.sink
                .message(&format_progress(processed, self.total, &name));
        }

        processed
    }
}

pub fn format_progress(processed: usize, total: usize, cluster_name: &str) -> String {
    format!("{}/{} — {}", processed, total, cluster_name)
}
