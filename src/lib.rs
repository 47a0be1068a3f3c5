//! Cordura - healthcare scorecard sanity classifier
//!
//! This library classifies the latest observation of every
//! (metric, pavilion) pair in a scorecard table against that pair's
//! trailing baseline: the mean and sample standard deviation of all
//! earlier periods. Values within one standard deviation are sane,
//! values within two are borderline, and anything further out is
//! insane. Missing values and malformed baselines get their own tiers
//! so nothing disappears silently.

pub mod analysis;
pub mod baseline;
pub mod classify;
pub mod cli;
pub mod csv_output;
pub mod json_output;
pub mod period;
pub mod report;
pub mod scorecard;
