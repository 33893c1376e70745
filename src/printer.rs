// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Renders the reconciled cluster list.

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::types::Cluster;

const HEADERS: [&str; 5] = [
    "Cluster Name",
    "Version",
    "Associated Secrets",
    "Additions",
    "Removals",
];

/// Render the clusters in the configured format
pub fn render<W: Write>(out: &mut W, clusters: &[Cluster], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            print_overview(out, clusters)?;
            print_change_sets(out, clusters)
        }
        OutputFormat::Json => print_json(out, clusters),
    }
}

/// One row per cluster with binding and change counts
pub fn print_overview<W: Write>(out: &mut W, clusters: &[Cluster]) -> io::Result<()> {
    let rows: Vec<[String; 5]> = clusters
        .iter()
        .map(|c| {
            [
                c.name.clone(),
                c.version.clone(),
                c.actual_secrets.len().to_string(),
                c.change_set.to_add.len().to_string(),
                c.change_set.to_remove.len().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    write_row(out, &HEADERS, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    writeln!(out)
}

fn write_row<W: Write, S: AsRef<str>>(
    out: &mut W,
    cells: &[S],
    widths: &[usize],
) -> io::Result<()> {
    let last = cells.len().saturating_sub(1);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            write!(out, "{}", cell.as_ref())?;
        } else {
            write!(out, "{:<width$}  ", cell.as_ref(), width = *width)?;
        }
    }
    writeln!(out)
}

/// The `+`/`-` lines of every cluster that has changes
pub fn print_change_sets<W: Write>(out: &mut W, clusters: &[Cluster]) -> io::Result<()> {
    let mut changed = false;
    for cluster in clusters.iter().filter(|c| c.has_changes()) {
        changed = true;
        writeln!(out, "{}", cluster.name)?;
        write!(out, "{}", cluster.change_set)?;
        writeln!(out)?;
    }

    if !changed {
        writeln!(out, "No changes.")?;
    }
    Ok(())
}

pub fn print_json<W: Write>(out: &mut W, clusters: &[Cluster]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, clusters)?;
    writeln!(out)
}
