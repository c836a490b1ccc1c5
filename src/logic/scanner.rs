//! Scan Pipeline
//!
//! Refresh database -> list installed apps -> classify -> keep threats.
//! Enumerating installed apps belongs to the host platform; it plugs in via
//! `InstalledAppSource`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::logic::report::{threats_only, ScanSummary};
use crate::logic::threat::{ApplicationDescriptor, ClassificationEngine, ClassificationResult};
use crate::logic::threat_db::DatabaseStatus;

/// Host-provided enumeration of installed applications
pub trait InstalledAppSource: Send + Sync {
    fn list_installed_applications(&self) -> Vec<ApplicationDescriptor>;
}

/// Host without device access: nothing to scan
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInstalledApps;

impl InstalledAppSource for NoInstalledApps {
    fn list_installed_applications(&self) -> Vec<ApplicationDescriptor> {
        Vec::new()
    }
}

/// Fixed descriptor list (externally supplied or synthetic)
#[derive(Debug, Clone, Default)]
pub struct StaticAppSource {
    apps: Vec<ApplicationDescriptor>,
}

impl StaticAppSource {
    pub fn new(apps: Vec<ApplicationDescriptor>) -> Self {
        Self { apps }
    }
}

impl InstalledAppSource for StaticAppSource {
    fn list_installed_applications(&self) -> Vec<ApplicationDescriptor> {
        self.apps.clone()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub threats: Vec<ClassificationResult>,
    pub summary: ScanSummary,
    pub database: DatabaseStatus,
    pub scanned_at: DateTime<Utc>,
}

/// Full scan. The refresh is best-effort; the scan runs on whatever snapshot
/// is current afterwards.
pub async fn scan_for_threats(
    engine: &ClassificationEngine,
    source: &dyn InstalledAppSource,
) -> ScanReport {
    let database = engine.database().refresh().await;

    let apps = source.list_installed_applications();
    let results = engine.classify_batch(&apps);
    let summary = ScanSummary::from_results(&results);

    log::info!(
        "Scan complete: {} apps, {} threats (database {})",
        summary.total_scanned,
        summary.threat_count,
        database.provenance
    );

    ScanReport {
        threats: threats_only(&results),
        summary,
        database,
        scanned_at: Utc::now(),
    }
}
