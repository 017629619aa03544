use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use catisland_common::config::Config;
use catisland_common::endpoint::{self, EndpointDescriptor};
use catisland_common::{error, info, success, warn};
use catisland_core::aggregator::{AggregationResult, Aggregator};
use catisland_core::export;
use catisland_core::fetcher::HttpFetcher;
use colored::*;
use tracing::debug;

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn poll(config_file: &Path, json_file: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    print::header("reading configuration", cfg.quiet);
    let endpoints: Vec<EndpointDescriptor> = load_endpoints(config_file)?;

    print::header("collecting status", cfg.quiet);
    let result: AggregationResult = collect(endpoints, cfg).await?;

    report(&result, cfg);

    if let Some(path) = json_file {
        let apps = result.into_applications();
        export::write_json(path, &apps)?;
        success!("Wrote {} to {}", format::plural(apps.len(), "app", "apps"), path.display());
    }

    Ok(())
}

fn load_endpoints(config_file: &Path) -> anyhow::Result<Vec<EndpointDescriptor>> {
    info!("Reading from config file {}", config_file.display());

    let content: String = fs::read_to_string(config_file)
        .with_context(|| format!("failed to read config file {}", config_file.display()))?;
    let endpoints = endpoint::parse_endpoints(&content)
        .with_context(|| format!("invalid config file {}", config_file.display()))?;

    for endpoint in &endpoints {
        debug!(%endpoint, "loaded endpoint");
    }

    Ok(endpoints)
}

async fn collect(endpoints: Vec<EndpointDescriptor>, cfg: &Config) -> anyhow::Result<AggregationResult> {
    let total: usize = endpoints.len();
    info!("Getting results from {}.", format::plural(total, "host", "hosts"));

    let fetcher = Arc::new(HttpFetcher::new(cfg.timeout)?);
    let aggregator = Aggregator::new(fetcher)
        .with_concurrency(cfg.concurrency)
        .with_progress(Box::new(spinner::report_collection_progress));

    let start_time: Instant = Instant::now();
    if total > 0 {
        spinner::start_collection(total);
    }

    let result = aggregator.run(endpoints).await;

    spinner::finish_collection();
    success!(
        "Finished collecting results in {:.2}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(result)
}

fn report(result: &AggregationResult, cfg: &Config) {
    print::header("applications", cfg.quiet);
    if result.application_count() == 0 {
        print::no_results();
    } else if cfg.quiet < 2 {
        for app in result.applications() {
            print::print(&format::application_line(app));
        }
    }

    if !result.failures().is_empty() {
        mprint!();
        print::header("errors", cfg.quiet);
        for failure in result.failures() {
            error!("{}", failure.error);
        }
    }

    mprint!();
    print_summary(result, cfg);
}

fn print_summary(result: &AggregationResult, cfg: &Config) {
    if cfg.quiet == 0 {
        print::fat_separator();
        print::aligned_line("Hosts", result.hosts().to_string());
        print::aligned_line("Succeeded", result.succeeded().to_string().green());
        print::aligned_line("Failed", failed_count(result.failures().len()));
        print::aligned_line("Applications", result.application_count().to_string().bold());
        print::fat_separator();
    }

    if every_host_failed(result.hosts(), result.succeeded()) {
        warn!("None of the {} answered with a status listing.", format::plural(result.hosts(), "host", "hosts"));
    }

    success!("{} total.", format::plural(result.application_count(), "app", "apps"));
}

fn every_host_failed(hosts: usize, succeeded: usize) -> bool {
    hosts > 0 && succeeded == 0
}

fn failed_count(failed: usize) -> ColoredString {
    match failed {
        0 => failed.to_string().color(colors::TEXT_DEFAULT),
        _ => failed.to_string().red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catisland_common::error::ConfigError;

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("catisland-{name}-{}.txt", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn every_host_failed_needs_at_least_one_host() {
        assert!(every_host_failed(3, 0));
        assert!(!every_host_failed(3, 1));
        assert!(!every_host_failed(0, 0));
    }

    #[test]
    fn load_endpoints_reads_file() {
        let path = write_config("load", "http://a:8080;admin;pw\r\n\r\nhttp://b:8080;admin;pw\r\n");
        let endpoints = load_endpoints(&path).unwrap();
        let _ = fs::remove_file(&path);

        let addresses: Vec<&str> = endpoints.iter().map(EndpointDescriptor::address).collect();
        assert_eq!(addresses, vec!["http://a:8080", "http://b:8080"]);
    }

    #[test]
    fn load_endpoints_fails_on_missing_file() {
        let path = std::env::temp_dir().join("catisland-no-such-config.txt");
        let err = load_endpoints(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn load_endpoints_surfaces_config_error() {
        let path = write_config("broken", "http://a:8080;admin;pw\nhttp://b:8080;;pw\n");
        let err = load_endpoints(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        let cause = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(cause, ConfigError::EmptyField { field: "username", .. }));
        assert!(format!("{err:#}").contains("line 2"));
    }
}
