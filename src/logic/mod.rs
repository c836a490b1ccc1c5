//! Logic Module - Business Logic & Engines
//!
//! - `threat/` - 3-layer classification engine
//! - `threat_db/` - Threat database (offline default + remote refresh)
//! - `report/` - Grouping, summary, detail view
//! - `scanner` - Scan pipeline + installed-app seam

pub mod threat;
pub mod threat_db;
pub mod report;
pub mod scanner;
pub mod samples;
