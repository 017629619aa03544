use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use catisland_common::endpoint::parse_endpoints;
use catisland_core::aggregator::{AggregationResult, Aggregator};
use catisland_core::error::HostError;
use catisland_core::export;
use catisland_core::fetcher::HttpFetcher;
use serde_json::Value;

use super::stub::StubManager;

const TOMCAT_OK: &str = "OK - Listed applications for virtual host localhost
/:running:0:ROOT
/manager:running:1:manager
/shop:stopped:0:shop
";

async fn run(config: &str, concurrency: usize) -> AggregationResult {
    let endpoints = parse_endpoints(config).unwrap();
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();

    Aggregator::new(Arc::new(fetcher))
        .with_concurrency(concurrency)
        .run(endpoints)
        .await
}

#[tokio::test]
async fn mixed_fleet_reports_apps_and_errors() {
    let healthy = StubManager::start(200, TOMCAT_OK).await;
    let failing = StubManager::start(200, "FAIL - down").await;
    let forbidden = StubManager::start(403, "403 Access Denied").await;
    let offline = StubManager::unreachable().await;

    let config = [&healthy, &failing, &forbidden, &offline]
        .iter()
        .map(|m| m.config_line())
        .collect::<Vec<_>>()
        .join("\r\n");

    let result = run(&config, 5).await;

    let apps: BTreeSet<String> = result.applications().map(ToString::to_string).collect();
    let expected: BTreeSet<String> = [
        format!("{}/ (running)", healthy.url),
        format!("{}/manager (running)", healthy.url),
        format!("{}/shop (stopped)", healthy.url),
    ]
    .into_iter()
    .collect();
    assert_eq!(apps, expected);

    assert_eq!(result.hosts(), 4);
    assert_eq!(result.succeeded(), 1);
    assert_eq!(result.failures().len(), 3);

    for failure in result.failures() {
        assert_eq!(failure.error.address(), failure.address);
        if failure.address == failing.url {
            assert!(matches!(failure.error, HostError::RemoteFailure { .. }));
            assert!(failure.error.to_string().contains("FAIL - down"));
        } else if failure.address == forbidden.url {
            assert!(failure.error.to_string().contains("403"));
        } else {
            assert_eq!(failure.address, offline.url);
            assert!(matches!(failure.error, HostError::Transport { .. }));
        }
    }
}

#[tokio::test]
async fn duplicated_endpoint_does_not_duplicate_apps() {
    let manager = StubManager::start(200, TOMCAT_OK).await;
    let config = format!("{0}\n{0}\n\n{0}\n", manager.config_line());

    let result = run(&config, 2).await;

    assert_eq!(result.hosts(), 3);
    assert_eq!(result.succeeded(), 3);
    assert_eq!(result.application_count(), 3);
}

#[tokio::test]
async fn many_hosts_under_small_cap_all_report() {
    let mut managers = Vec::new();
    for _ in 0..12 {
        managers.push(StubManager::start(200, "OK\n/app:running:0:app\n").await);
    }
    let config = managers
        .iter()
        .map(StubManager::config_line)
        .collect::<Vec<_>>()
        .join("\n");

    let result = run(&config, 5).await;

    assert_eq!(result.hosts(), 12);
    assert!(result.failures().is_empty());
    // Every manager has its own address, so nothing collapses.
    assert_eq!(result.application_count(), 12);
}

#[tokio::test]
async fn empty_config_yields_empty_report() {
    let result = run("\r\n\n   \n", 5).await;

    assert_eq!(result.hosts(), 0);
    assert_eq!(result.application_count(), 0);
    assert!(result.failures().is_empty());
    assert_eq!(export::to_json(&result.into_applications()).unwrap(), "[]");
}

#[tokio::test]
async fn merged_apps_export_to_json() {
    let manager = StubManager::start(200, TOMCAT_OK).await;
    let path = std::env::temp_dir().join(format!("catisland-pipeline-{}.json", std::process::id()));

    let result = run(&manager.config_line(), 5).await;
    export::write_json(&path, &result.into_applications()).unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let _ = std::fs::remove_file(&path);

    let entries = written.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e["Host"] == manager.url.as_str()));
    assert!(entries.iter().any(|e| e["Path"] == "/shop" && e["State"] == "stopped"));
}

#[test]
fn malformed_config_is_rejected_before_any_request() {
    let err = parse_endpoints("http://a;user;pw\nhttp://b;user\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}
