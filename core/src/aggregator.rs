//! # Aggregation Engine
//!
//! Polls every configured endpoint and merges the outcomes into one
//! deduplicated set of applications.
//!
//! A run has three moving parts:
//! 1. **Dispatch**: a single task walks the endpoints in config order and spawns
//!    one worker per endpoint once a permit from the admission gate (a
//!    [`Semaphore`]) is available.
//! 2. **Work**: each worker fetches and parses one status listing, releases its
//!    permit and sends a tagged [`HostOutcome`] down the results channel.
//! 3. **Collect**: the caller's task is the only owner of the merge state. It
//!    receives exactly one outcome per endpoint before handing out the result.
//!
//! A failed host never stops the others, and nothing is retried.

use std::sync::Arc;

use catisland_common::application::ApplicationRecord;
use catisland_common::endpoint::EndpointDescriptor;
use catisland_common::config::DEFAULT_CONCURRENCY;
use indexmap::IndexMap;
use indexmap::map::Entry;
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error};

use crate::error::HostError;
use crate::fetcher::StatusFetcher;
use crate::parser;

/// Called after every collected outcome with `(collected, total)`.
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// A host that failed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFailure {
    pub address: String,
    pub error: HostError,
}

/// Result of one fetch-and-parse attempt, tagged with the endpoint's position.
#[derive(Debug)]
struct HostOutcome {
    index: usize,
    address: String,
    result: Result<Vec<ApplicationRecord>, HostError>,
}

/// Merged view of a finished run.
#[derive(Debug, Default)]
pub struct AggregationResult {
    applications: IndexMap<String, ApplicationRecord>,
    failures: Vec<HostFailure>,
    hosts: usize,
}

impl AggregationResult {
    /// Deduplicated applications in the order they were first seen.
    pub fn applications(&self) -> impl Iterator<Item = &ApplicationRecord> {
        self.applications.values()
    }

    pub fn into_applications(self) -> Vec<ApplicationRecord> {
        self.applications.into_values().collect()
    }

    pub fn application_count(&self) -> usize {
        self.applications.len()
    }

    /// Failed hosts in the order their outcomes arrived.
    pub fn failures(&self) -> &[HostFailure] {
        &self.failures
    }

    /// Number of endpoints the run was started with.
    pub fn hosts(&self) -> usize {
        self.hosts
    }

    pub fn succeeded(&self) -> usize {
        self.hosts - self.failures.len()
    }
}

/// Merge state, owned by the collecting task for the lifetime of one run.
struct Merge {
    result: AggregationResult,
    reported: Vec<bool>,
}

impl Merge {
    fn new(hosts: usize) -> Self {
        Self {
            result: AggregationResult {
                hosts,
                ..AggregationResult::default()
            },
            reported: vec![false; hosts],
        }
    }

    fn absorb(&mut self, outcome: HostOutcome) {
        self.reported[outcome.index] = true;

        match outcome.result {
            Ok(apps) => {
                debug!(host = %outcome.address, apps = apps.len(), "merging status");
                for app in apps {
                    match self.result.applications.entry(app.composed()) {
                        Entry::Occupied(existing) => {
                            debug!(app = %existing.key(), "dropping duplicate application");
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(app);
                        }
                    }
                }
            }
            Err(error) => {
                debug!(host = %outcome.address, %error, "host failed");
                self.result.failures.push(HostFailure {
                    address: outcome.address,
                    error,
                });
            }
        }
    }

    /// Records a failure for every endpoint that never reported back.
    fn finish(mut self, endpoints: &[String]) -> AggregationResult {
        for (address, _) in endpoints.iter().zip(&self.reported).filter(|(_, seen)| !**seen) {
            error!(host = %address, "worker ended without an outcome");
            self.result.failures.push(HostFailure {
                address: address.clone(),
                error: HostError::Lost {
                    address: address.clone(),
                },
            });
        }
        self.result
    }
}

/// Fans status requests out over a fleet of endpoints.
pub struct Aggregator {
    fetcher: Arc<dyn StatusFetcher>,
    concurrency: usize,
    on_progress: Option<ProgressCallback>,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn StatusFetcher>) -> Self {
        Self {
            fetcher,
            concurrency: DEFAULT_CONCURRENCY,
            on_progress: None,
        }
    }

    /// Sets the size of the admission gate. Values below 1 are raised to 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Polls every endpoint and returns once all of them have reported.
    pub async fn run(&self, endpoints: Vec<EndpointDescriptor>) -> AggregationResult {
        let total: usize = endpoints.len();
        let mut merge = Merge::new(total);
        if total == 0 {
            return merge.result;
        }

        let addresses: Vec<String> = endpoints.iter().map(|e| e.address().to_string()).collect();
        let gate = Arc::new(Semaphore::new(self.concurrency));
        let (tx, mut rx) = mpsc::channel::<HostOutcome>(total);

        let dispatcher = tokio::spawn(dispatch(endpoints, Arc::clone(&self.fetcher), gate, tx));

        for collected in 1..=total {
            let Some(outcome) = rx.recv().await else {
                break;
            };
            merge.absorb(outcome);

            if let Some(on_progress) = &self.on_progress {
                on_progress(collected, total);
            }
        }

        if let Err(e) = dispatcher.await {
            error!("dispatcher task failed: {e}");
        }

        merge.finish(&addresses)
    }
}

async fn dispatch(
    endpoints: Vec<EndpointDescriptor>,
    fetcher: Arc<dyn StatusFetcher>,
    gate: Arc<Semaphore>,
    tx: mpsc::Sender<HostOutcome>,
) {
    for (index, endpoint) in endpoints.into_iter().enumerate() {
        // The gate is never closed, so acquiring only waits.
        let Ok(permit) = Arc::clone(&gate).acquire_owned().await else {
            break;
        };

        let fetcher = Arc::clone(&fetcher);
        let tx = tx.clone();

        tokio::spawn(async move {
            let result = poll_host(fetcher.as_ref(), &endpoint).await;
            drop(permit);

            let outcome = HostOutcome {
                index,
                address: endpoint.address().to_string(),
                result,
            };
            // Capacity equals the endpoint count, so this never waits.
            let _ = tx.send(outcome).await;
        });
    }
}

async fn poll_host(
    fetcher: &dyn StatusFetcher,
    endpoint: &EndpointDescriptor,
) -> Result<Vec<ApplicationRecord>, HostError> {
    debug!(%endpoint, "requesting status");
    let raw: String = fetcher.fetch(endpoint).await?;
    parser::parse_status(endpoint.address(), &raw)
}
