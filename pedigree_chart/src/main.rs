// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `pedigree`: export Sosa pages to JSON and print ancestor charts.
//!
//! ```bash
//! # Convert the raw page into the JSON document
//! pedigree export --source source/raw_page.txt --output export/genealogy.json
//!
//! # Print the chart with one branch opened past the default horizon
//! pedigree show --root-dir . --expand 8
//!
//! # Print the materialized tree as JSON
//! pedigree show --json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use pedigree_chart::render::render_text;
use pedigree_chart::{ChartConfig, FileSource, LoadState, Loader, Source, export_page};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pedigree", version, about = "Sosa pedigree export and chart viewer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a tab-separated Sosa page into the genealogy JSON document
    Export {
        /// Raw text page
        #[arg(long, default_value = "source/raw_page.txt")]
        source: PathBuf,
        /// JSON document to write
        #[arg(long, default_value = "export/genealogy.json")]
        output: PathBuf,
    },
    /// Load the genealogy document and print the chart
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Document path [env: PEDIGREE_SOURCE]
    #[arg(long)]
    source: Option<String>,
    /// Directory the document path is resolved against [env: PEDIGREE_ROOT]
    #[arg(long)]
    root_dir: Option<PathBuf>,
    /// Fetch over HTTP below this URL instead of reading files [env: PEDIGREE_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,
    /// Generations shown before auto-collapsing [env: PEDIGREE_DEPTH]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<u32>,
    /// Force a node open (repeatable)
    #[arg(long, value_name = "ID")]
    expand: Vec<u64>,
    /// Force a node closed (repeatable, applied after --expand)
    #[arg(long, value_name = "ID")]
    collapse: Vec<u64>,
    /// Print the materialized tree as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    /// Environment configuration overlaid with the flags that were given.
    fn config(&self) -> ChartConfig {
        let mut config = ChartConfig::from_env();
        if let Some(source) = &self.source {
            config.source.clone_from(source);
        }
        if let Some(root_dir) = &self.root_dir {
            config.root_dir.clone_from(root_dir);
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(depth) = self.depth {
            config.default_depth = depth;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match Cli::parse().command {
        Command::Export { source, output } => {
            println!("{}", export_page(&source, &output)?);
            Ok(())
        }
        Command::Show(args) => show(&args).await,
    }
}

async fn show(args: &ShowArgs) -> anyhow::Result<()> {
    let config = args.config();
    match config.base_url.clone() {
        #[cfg(feature = "http")]
        Some(base_url) => {
            let source = pedigree_chart::HttpSource::new(base_url);
            print_chart(Loader::new(source, config), args).await
        }
        #[cfg(not(feature = "http"))]
        Some(base_url) => bail!(
            "cannot load from {base_url} ({}): built without the `http` feature",
            pedigree_chart::config::ENV_BASE_URL
        ),
        None => {
            let source = FileSource::new(config.root_dir.clone());
            print_chart(Loader::new(source, config), args).await
        }
    }
}

async fn print_chart<S: Source>(mut loader: Loader<S>, args: &ShowArgs) -> anyhow::Result<()> {
    match loader.load().await {
        LoadState::Ready(_) => {}
        LoadState::Empty(message) => bail!("nothing to show: {message}"),
        LoadState::Error(message) => bail!("{message}"),
        other => bail!("load did not finish: {other:?}"),
    }
    loader.apply_overrides(&args.expand, &args.collapse);

    let Some(chart) = loader.chart() else {
        bail!("no chart loaded");
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&chart.tree)?);
    } else {
        print!("{}", render_text(&chart.tree, loader.disclosure()));
    }
    Ok(())
}
