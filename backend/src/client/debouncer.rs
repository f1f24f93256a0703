//! Debounced baby cost estimates.
//!
//! Form edits arrive faster than estimates are worth computing. The debouncer
//! waits until the input has been quiet for a while, estimates the latest
//! snapshot once, and publishes the outcome on a `watch` channel. A newer
//! snapshot arriving while an estimate is in flight cancels that estimate.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::tools_client::ToolsClient;
use crate::api::{BabyCostRequest, BabyCostResult};
use crate::services::baby_cost::{estimate, PricingTable};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Anything that can turn a cost request into a breakdown.
#[async_trait]
pub trait CostEstimator: Send + Sync + 'static {
    async fn estimate(&self, request: &BabyCostRequest) -> anyhow::Result<BabyCostResult>;
}

#[async_trait]
impl CostEstimator for ToolsClient {
    async fn estimate(&self, request: &BabyCostRequest) -> anyhow::Result<BabyCostResult> {
        Ok(self.baby_cost(request).await?)
    }
}

/// Offline estimates against an in-process pricing table.
#[async_trait]
impl CostEstimator for PricingTable {
    async fn estimate(&self, request: &BabyCostRequest) -> anyhow::Result<BabyCostResult> {
        Ok(estimate(request, self)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EstimateState {
    /// Nothing submitted yet.
    Idle,
    /// Input received, estimate not published yet.
    Pending,
    Ready(BabyCostResult),
    /// The latest estimate failed. Not retried; the next submission tries again.
    Failed(String),
}

pub struct CostEstimateDebouncer {
    input: mpsc::UnboundedSender<BabyCostRequest>,
    state: watch::Receiver<EstimateState>,
    task: JoinHandle<()>,
}

impl CostEstimateDebouncer {
    /// Must be called within a tokio runtime.
    pub fn new<E: CostEstimator>(estimator: E) -> Self {
        Self::with_quiet_period(estimator, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period<E: CostEstimator>(estimator: E, quiet_period: Duration) -> Self {
        let (input, requests) = mpsc::unbounded_channel();
        let (publisher, state) = watch::channel(EstimateState::Idle);
        let task = tokio::spawn(run(estimator, quiet_period, requests, publisher));
        Self { input, state, task }
    }

    /// Queue a new input snapshot, superseding any earlier one.
    pub fn submit(&self, request: BabyCostRequest) {
        if self.input.send(request).is_err() {
            log::warn!("cost estimate worker has stopped; dropping input");
        }
    }

    pub fn state(&self) -> EstimateState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<EstimateState> {
        self.state.clone()
    }
}

impl Drop for CostEstimateDebouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<E: CostEstimator>(
    estimator: E,
    quiet_period: Duration,
    mut requests: mpsc::UnboundedReceiver<BabyCostRequest>,
    publisher: watch::Sender<EstimateState>,
) {
    let mut latest: Option<BabyCostRequest> = None;

    loop {
        let Some(request) = latest.take() else {
            match requests.recv().await {
                Some(request) => {
                    latest = Some(request);
                    publisher.send_if_modified(|state| {
                        if *state == EstimateState::Pending {
                            false
                        } else {
                            *state = EstimateState::Pending;
                            true
                        }
                    });
                    continue;
                }
                None => return,
            }
        };

        tokio::select! {
            next = requests.recv() => match next {
                Some(newer) => latest = Some(newer),
                None => return,
            },
            _ = tokio::time::sleep(quiet_period) => {
                tokio::select! {
                    next = requests.recv() => match next {
                        Some(newer) => latest = Some(newer),
                        None => return,
                    },
                    outcome = estimator.estimate(&request) => {
                        let state = match outcome {
                            Ok(result) => EstimateState::Ready(result),
                            Err(e) => {
                                log::warn!("cost estimate failed: {:#}", e);
                                EstimateState::Failed(format!("{:#}", e))
                            }
                        };
                        publisher.send_replace(state);
                    }
                }
            }
        }
    }
}
