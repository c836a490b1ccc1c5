//! Result Aggregation
//!
//! Grouping và summary cho danh sách kết quả (dùng cho presentation).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::logic::threat::{ClassificationResult, DetectionLayer, RiskLevel, ThreatCategory};

/// Partition by category. Relative input order is preserved inside each group.
pub fn group_by_category(
    results: &[ClassificationResult],
) -> BTreeMap<ThreatCategory, Vec<ClassificationResult>> {
    let mut groups: BTreeMap<ThreatCategory, Vec<ClassificationResult>> = BTreeMap::new();
    for result in results {
        groups.entry(result.category).or_default().push(result.clone());
    }
    groups
}

/// Partition by detection layer. Relative input order is preserved inside each group.
pub fn group_by_layer(
    results: &[ClassificationResult],
) -> BTreeMap<DetectionLayer, Vec<ClassificationResult>> {
    let mut groups: BTreeMap<DetectionLayer, Vec<ClassificationResult>> = BTreeMap::new();
    for result in results {
        groups.entry(result.detection_layer).or_default().push(result.clone());
    }
    groups
}

/// Fixed label for a layer number; anything outside 1..=3 is "Unknown"
pub fn layer_description(layer: u8) -> &'static str {
    match layer {
        1 => "Known Threat (Database Match)",
        2 => "Unknown Threat (Suspicious Permissions)",
        3 => "Behavioral Alert (Suspicious Activity)",
        _ => "Unknown",
    }
}

/// Non-safe results only, in input order
pub fn threats_only(results: &[ClassificationResult]) -> Vec<ClassificationResult> {
    results.iter().filter(|r| r.is_threat()).cloned().collect()
}

// ============================================================================
// SCAN SUMMARY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub total_scanned: usize,
    pub threat_count: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    /// No threats found
    pub protected: bool,
}

impl ScanSummary {
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let mut summary = ScanSummary {
            total_scanned: results.len(),
            ..Default::default()
        };

        for result in results.iter().filter(|r| r.is_threat()) {
            summary.threat_count += 1;
            match result.risk_level {
                RiskLevel::High => summary.high_risk += 1,
                RiskLevel::Medium => summary.medium_risk += 1,
                RiskLevel::Low => summary.low_risk += 1,
                RiskLevel::Safe => {}
            }
        }

        summary.protected = summary.threat_count == 0;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::samples::sample_descriptors;
    use crate::logic::threat::classify_with_snapshot;
    use crate::logic::threat_db::offline_snapshot;

    fn sample_results() -> Vec<ClassificationResult> {
        let snapshot = offline_snapshot();
        sample_descriptors()
            .iter()
            .map(|d| classify_with_snapshot(d, &snapshot))
            .collect()
    }

    fn ids(results: &[ClassificationResult]) -> Vec<String> {
        results.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_group_by_category_reconstructs_input() {
        let results = sample_results();
        let groups = group_by_category(&results);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, results.len());

        for (category, members) in &groups {
            assert!(members.iter().all(|r| r.category == *category));
            // Relative order within group follows input order
            let expected: Vec<String> = results
                .iter()
                .filter(|r| r.category == *category)
                .map(|r| r.id.clone())
                .collect();
            assert_eq!(ids(members), expected);
        }

        let mut all: Vec<String> = groups.values().flat_map(|g| ids(g)).collect();
        let mut original = ids(&results);
        all.sort();
        original.sort();
        assert_eq!(all, original);
    }

    #[test]
    fn test_group_by_layer_reconstructs_input() {
        let results = sample_results();
        let groups = group_by_layer(&results);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, results.len());
        assert!(groups.contains_key(&DetectionLayer::DatabaseMatch));
        assert!(groups.contains_key(&DetectionLayer::PermissionHeuristics));
        assert!(groups.contains_key(&DetectionLayer::Behavioral));
        for (layer, members) in &groups {
            assert!(members.iter().all(|r| r.detection_layer == *layer));
        }
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_by_category(&[]).is_empty());
        assert!(group_by_layer(&[]).is_empty());
    }

    #[test]
    fn test_layer_description_labels() {
        assert_eq!(layer_description(1), "Known Threat (Database Match)");
        assert_eq!(layer_description(2), "Unknown Threat (Suspicious Permissions)");
        assert_eq!(layer_description(3), "Behavioral Alert (Suspicious Activity)");
        assert_eq!(layer_description(0), "Unknown");
        assert_eq!(layer_description(7), "Unknown");
        assert_eq!(
            DetectionLayer::Behavioral.description(),
            "Behavioral Alert (Suspicious Activity)"
        );
    }

    #[test]
    fn test_scan_summary_counts() {
        let results = sample_results();
        let summary = ScanSummary::from_results(&results);

        assert_eq!(summary.total_scanned, 11);
        assert_eq!(summary.threat_count, threats_only(&results).len());
        assert_eq!(
            summary.high_risk + summary.medium_risk + summary.low_risk,
            summary.threat_count
        );
        assert!(!summary.protected);
    }

    #[test]
    fn test_empty_scan_is_protected() {
        let summary = ScanSummary::from_results(&[]);
        assert!(summary.protected);
        assert_eq!(summary.threat_count, 0);
    }
}
