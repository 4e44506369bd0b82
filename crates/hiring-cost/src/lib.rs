//! Net hiring cost estimation for Italian employers.
//!
//! The [`workflows::hiring`] module owns the subsidy rules and the estimator;
//! [`config`], [`error`] and [`telemetry`] carry the service plumbing shared
//! with the HTTP and CLI front ends.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
