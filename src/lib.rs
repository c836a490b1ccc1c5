//! SpyGuard Core
//!
//! Classifies mobile application metadata as safe or as one of several
//! threat categories using three detection layers: threat database match,
//! permission/name heuristics, and behavioral signals.

pub mod api;
pub mod constants;
pub mod logic;

pub use api::commands::SpyGuardApi;
pub use logic::threat::{
    ApplicationDescriptor, ClassificationEngine, ClassificationResult, DetectionLayer, RiskLevel,
    ThreatCategory,
};
pub use logic::threat_db::{DatabaseStatus, FeedConfig, Provenance, ThreatDatabase};
