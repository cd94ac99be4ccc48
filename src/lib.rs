//! statuswatch - service status dashboard
//!
//! Polls third-party and internal status endpoints, normalizes each response
//! into a severity (`ok`, `warning`, `major`, `unknown`), keeps a history of
//! every refresh and raises notifications when a source goes down.
//!
//! The pipeline for one source is:
//!
//! ```text
//! fetch (status) -> normalize -> widget state (refresh) -> effects (events) -> store
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod events;
pub mod logging;
pub mod metrics;
pub mod refresh;
pub mod registry;
pub mod snapshot;
pub mod status;
pub mod store;
