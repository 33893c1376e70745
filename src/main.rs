// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use msk_secret_binder::config::Config;
use msk_secret_binder::printer;
use msk_secret_binder::registry::{KafkaRegistry, SecretsManagerStore};
use msk_secret_binder::sync::{Binder, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr, stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Bind secrets to AWS MSK clusters");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: secret_prefix={} page_size={} apply={}",
        config.secret_prefix, config.page_size, config.apply
    );

    // Create AWS clients
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    let sdk_config = loader.load().await;

    let binder = Binder::new(
        KafkaRegistry::new(&sdk_config, config.page_size),
        SecretsManagerStore::new(&sdk_config, config.page_size),
        config.clone(),
    );

    let clusters = binder
        .run(LogSink)
        .await
        .context("unable to reconcile cluster secrets")?;

    printer::render(&mut io::stdout().lock(), &clusters, config.output)
        .context("unable to print clusters")?;

    let pending = clusters.iter().filter(|c| c.has_changes()).count();
    if pending == 0 {
        return Ok(());
    }

    if !config.apply {
        info!("{} clusters have changes, set APPLY=true to apply them", pending);
        return Ok(());
    }

    let report = binder
        .apply(&clusters)
        .await
        .context("unable to apply change sets")?;
    info!(
        "Associated {} and disassociated {} secrets",
        report.associated, report.disassociated
    );
    if !report.unprocessed.is_empty() {
        warn!("{} secrets were not processed", report.unprocessed.len());
    }

    Ok(())
}
