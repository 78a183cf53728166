//! # Routelens
//!
//! Hub-level airline network audit and demand forecasting engine.
//!
//! This crate ingests historical airline route/traffic records (one row per
//! airline-route-year-month) and produces a strategic audit for a selected
//! hub airport: per-route profitability, market-position classification, and
//! a short-term monthly passenger forecast. The optional REST API exposes the
//! results to an external presentation layer.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Canonical data model shared by ingestion, engines, and API
//! - [`ingest`]: CSV normalization into canonical flight records
//! - [`store`]: Object-store abstraction, dataset loading, and caching
//! - [`services`]: The audit and forecast engines
//! - [`algorithms`]: Regression model backing the forecast engine
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Both engines are stateless pure functions over an in-memory record
//! snapshot; repeated calls with different hub/destination arguments never
//! interfere. Only the dataset load itself is cached, keyed by its source
//! bucket and prefix, with manual invalidation.

pub mod algorithms;
pub mod ingest;
pub mod models;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
