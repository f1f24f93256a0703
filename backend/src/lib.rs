//! # JanmaSethu Tools Backend
//!
//! Date-driven reproductive health calculators for the JanmaSethu client.
//!
//! This crate holds the calculation core behind the JanmaSethu tools pages:
//! due date and ovulation math, conception windows, the week-by-week
//! pregnancy guide, the "Am I pregnant?" quiz, the infant vaccination
//! schedule and the first-year baby cost estimator. The backend exposes a
//! REST API via Axum for the React frontend.
//!
//! ## Features
//!
//! - **Calendar Dates**: Timezone-free day arithmetic with a configurable
//!   reference offset deciding what "today" is
//! - **Reference Tables**: Vaccination schedule, pregnancy weeks and pricing
//!   data shipped as data files and validated on load
//! - **HTTP API**: RESTful endpoints under `/api/tools` (feature `http-server`)
//! - **Client**: Typed async client and debounced cost estimates (feature `client`)
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API requests and responses
//! - [`models`]: Value objects (dates, cycle length, trimesters) and errors
//! - [`services`]: The calculators, all pure functions of their inputs
//! - [`routes`]: Route-specific request/response types and paths
//! - [`config`]: Server configuration (TOML file plus environment overrides)
//! - `http`: Axum-based HTTP server and request handlers
//! - `client`: reqwest-based client for the HTTP API

pub mod api;

pub mod config;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(feature = "client")]
pub mod client;
