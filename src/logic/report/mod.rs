//! Report Module
//!
//! Grouping, summary và detail view cho scan results.

pub mod aggregate;
pub mod details;

pub use aggregate::{
    group_by_category, group_by_layer, layer_description, threats_only, ScanSummary,
};
pub use details::{dangerous_permissions, DataUsageBand, ThreatDetails};
