//! API Commands
//!
//! The only entry points the presentation layer calls. Everything routes
//! through one `SpyGuardApi`, which owns the engine and its database.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;

use crate::logic::report::{self, ScanSummary, ThreatDetails};
use crate::logic::scanner::{self, InstalledAppSource, ScanReport};
use crate::logic::threat::{
    ApplicationDescriptor, ClassificationEngine, ClassificationResult, DetectionLayer,
    ThreatCategory,
};
use crate::logic::threat_db::{DatabaseStatus, FeedConfig, ThreatDatabase};

#[derive(Clone)]
pub struct SpyGuardApi {
    engine: ClassificationEngine,
}

impl SpyGuardApi {
    pub fn new(database: Arc<ThreatDatabase>) -> Self {
        Self {
            engine: ClassificationEngine::new(database),
        }
    }

    /// API over a fresh store built from `config`
    pub fn with_config(config: FeedConfig) -> Self {
        Self::new(Arc::new(ThreatDatabase::new(config)))
    }

    pub fn engine(&self) -> &ClassificationEngine {
        &self.engine
    }

    // --- Classification ---

    pub fn classify(&self, descriptor: &ApplicationDescriptor) -> ClassificationResult {
        self.engine.classify(descriptor)
    }

    pub fn classify_batch(&self, descriptors: &[ApplicationDescriptor]) -> Vec<ClassificationResult> {
        self.engine.classify_batch(descriptors)
    }

    // --- Database ---

    pub async fn refresh(&self) -> DatabaseStatus {
        self.engine.database().refresh().await
    }

    pub fn status(&self) -> DatabaseStatus {
        self.engine.database().status()
    }

    // --- Scan ---

    pub async fn scan(&self, source: &dyn InstalledAppSource) -> ScanReport {
        scanner::scan_for_threats(&self.engine, source).await
    }

    // --- Aggregation ---

    pub fn group_by_category(
        &self,
        results: &[ClassificationResult],
    ) -> BTreeMap<ThreatCategory, Vec<ClassificationResult>> {
        report::group_by_category(results)
    }

    pub fn group_by_layer(
        &self,
        results: &[ClassificationResult],
    ) -> BTreeMap<DetectionLayer, Vec<ClassificationResult>> {
        report::group_by_layer(results)
    }

    pub fn layer_description(&self, layer: u8) -> &'static str {
        report::layer_description(layer)
    }

    pub fn summary(&self, results: &[ClassificationResult]) -> ScanSummary {
        ScanSummary::from_results(results)
    }

    pub fn threat_details(&self, result: &ClassificationResult) -> ThreatDetails {
        ThreatDetails::from_result(result)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorInput {
    Many(Vec<ApplicationDescriptor>),
    One(Box<ApplicationDescriptor>),
}

/// Parse descriptors from JSON: an array, or a single object
pub fn parse_descriptors(json: &str) -> anyhow::Result<Vec<ApplicationDescriptor>> {
    let input: DescriptorInput =
        serde_json::from_str(json).context("Descriptor JSON must be an object or an array of objects")?;
    Ok(match input {
        DescriptorInput::Many(list) => list,
        DescriptorInput::One(single) => vec![*single],
    })
}

pub fn load_descriptors(path: &Path) -> anyhow::Result<Vec<ApplicationDescriptor>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_descriptors(&content)
}
