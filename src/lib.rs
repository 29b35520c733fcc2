//! chart-conductor: controller layer for declarative chart engines.
//!
//! This crate provides a Rust-idiomatic host API for driving a chart engine
//! that renders from a declarative option document: lifecycle management,
//! wholesale option application, loading toggles, action dispatch, and a
//! normalized interaction-event registry with incremental listener sync.

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod events;
pub mod extensions;
pub mod telemetry;

pub use api::{ChartBehavior, ChartController, LifecyclePhase};
pub use error::{ChartError, ChartResult};
