//! Command-line entry point.
//!
//! Loads a JSON document catalog, replays the requested filters as control
//! events, and prints the resulting list.
//!
//! # Usage
//!
//! ```text
//! doclist documents.json --query fees --category PDS --category Guide --sort year-desc
//! doclist documents.json --config doclist.toml --trace-level debug
//! doclist --set catalog=documents.json --set categories=PDS,Form
//! ```
//!
//! # Precedence
//!
//! `--set` overrides values from `--config`, and dedicated flags override
//! both. Categories given later replace the earlier selection.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use doclist::catalog::{Catalog, JsonCatalog};
use doclist::ui::{compute_viewmodel, render};
use doclist::{Config, DocumentList, Event, InitialFilter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "doclist", version, about = "Filter and sort a document catalog")]
struct Cli {
    /// JSON catalog to list. Falls back to `catalog` in the config file.
    #[arg(value_name = "CATALOG")]
    catalog: Option<PathBuf>,

    /// Free-text search query.
    #[arg(short, long)]
    query: Option<String>,

    /// Category to show (repeatable).
    #[arg(short, long = "category", value_name = "CATEGORY")]
    categories: Vec<String>,

    /// Sort mode: title, year-desc or recency.
    #[arg(short, long)]
    sort: Option<String>,

    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Configuration override (repeatable), e.g. `sort=recency`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Tracing filter directive (overridden by RUST_LOG).
    #[arg(long = "trace-level", value_name = "LEVEL")]
    trace_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> doclist::Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        let flags = Config {
            catalog_path: self.catalog,
            query: self.query,
            categories: self.categories,
            sort: self.sort,
            trace_level: self.trace_level,
        };

        Ok(base
            .overlay(Config::from_overrides(&self.overrides)?)
            .overlay(flags))
    }
}

fn run(config: &Config) -> doclist::Result<String> {
    let _span = tracing::info_span!("run").entered();

    let Some(catalog_path) = config.catalog_path.as_ref() else {
        return Err(doclist::DoclistError::Config(
            "no catalog given (pass a path or set `catalog` in the config file)".to_string(),
        ));
    };

    let documents = JsonCatalog::new(catalog_path).documents()?;
    tracing::info!(documents = documents.len(), path = ?catalog_path, "catalog loaded");

    let requested = config.initial_filter()?;

    let mut list = DocumentList::new(documents, InitialFilter::default());
    list.store_mut().subscribe(|state| {
        tracing::debug!(
            query = %state.query,
            categories = ?state.categories,
            sort = %state.sort,
            "filter state changed"
        );
    });

    let mut events: Vec<Event> = requested
        .categories
        .into_iter()
        .flatten()
        .map(|category| Event::CategoryToggled(category.as_str().to_string()))
        .collect();
    events.extend(requested.sort.map(|mode| Event::SortChanged(mode.as_str().to_string())));
    events.extend(requested.query.map(Event::QueryChanged));

    for event in &events {
        list.apply(event)?;
    }

    let vm = compute_viewmodel(&mut list);
    Ok(render(&vm))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    doclist::observability::init_tracing(&config);

    match run(&config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "listing failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
