//! Typed async client for the tools HTTP API.
//!
//! [`ToolsClient`] wraps one `reqwest` call per endpoint. Failures are
//! surfaced to the caller as they happen; nothing is retried unless
//! [`ToolsClient::with_retries`] asks for it, and then only transport errors.
//!
//! [`CostEstimateDebouncer`] sits in front of any [`CostEstimator`] and turns
//! a stream of form edits into one estimate per quiet period.

mod debouncer;
mod tools_client;

pub use debouncer::{CostEstimateDebouncer, CostEstimator, EstimateState, DEFAULT_QUIET_PERIOD};
pub use tools_client::{ClientError, ToolsClient};
