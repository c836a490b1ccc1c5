//! Detection Layers
//!
//! Ba rule sets độc lập. Mỗi layer là pure function: descriptor (đã
//! normalize) + snapshot -> `Option<LayerVerdict>`. `None` = layer clear.

use crate::logic::threat_db::ThreatSnapshot;

use super::rules::{
    DESC_KNOWN_MALICIOUS, DESC_PREDATORY_LOAN, DESC_UNKNOWN_SENSITIVE, GENERAL_BACKGROUND_LIMIT_MB,
    LAYER2_DANGEROUS_PERMISSIONS, LOAN_FINANCE_INDICATORS, READ_CONTACTS,
    SIMPLE_TOOL_BACKGROUND_LIMIT_MB, SIMPLE_TOOL_KEYWORDS,
};
use super::types::{ClassificationResult, LayerVerdict, RiskLevel, ThreatCategory};

// ============================================================================
// LAYER 1: DATABASE MATCH
// ============================================================================

/// Blacklisted package -> spyware. Absolute priority.
pub fn analyze_layer1(app: &ClassificationResult, snapshot: &ThreatSnapshot) -> Option<LayerVerdict> {
    if snapshot.is_blacklisted(&app.package_name) {
        return Some(LayerVerdict::new(
            ThreatCategory::Spyware,
            RiskLevel::High,
            DESC_KNOWN_MALICIOUS,
        ));
    }
    None
}

// ============================================================================
// LAYER 2: UNKNOWN APP TRAP (Heuristics)
// ============================================================================

/// Permission/name heuristics. System and whitelisted apps are skipped.
pub fn analyze_layer2(app: &ClassificationResult, snapshot: &ThreatSnapshot) -> Option<LayerVerdict> {
    if app.is_system_app || snapshot.is_whitelisted(&app.package_name) {
        return None;
    }

    // Predatory loan app (priority check)
    if is_loan_or_finance_app(app) && has_permission(&app.permissions, READ_CONTACTS) {
        return Some(LayerVerdict::new(
            ThreatCategory::LoanApp,
            RiskLevel::High,
            DESC_PREDATORY_LOAN,
        ));
    }

    if has_layer2_dangerous_permission(&app.permissions) {
        return Some(LayerVerdict::new(
            ThreatCategory::UnknownThreat,
            RiskLevel::High,
            DESC_UNKNOWN_SENSITIVE,
        ));
    }

    None
}

// ============================================================================
// LAYER 3: HIDDEN DATA WATCHDOG (Behavioral)
// ============================================================================

/// Behavioral signals: background sensors, then background data.
pub fn analyze_layer3(app: &ClassificationResult) -> Option<LayerVerdict> {
    let camera = app.is_using_camera_in_background.unwrap_or(false);
    let mic = app.is_using_mic_in_background.unwrap_or(false);

    if camera || mic {
        let sensor = if camera { "camera" } else { "microphone" };
        return Some(LayerVerdict::new(
            ThreatCategory::Spyware,
            RiskLevel::High,
            format!("Spyware Alert: App is using {} while screen is off/locked", sensor),
        ));
    }

    let background_mb = app.background_data_mb;

    if is_simple_tool_app(app) && background_mb > SIMPLE_TOOL_BACKGROUND_LIMIT_MB {
        return Some(LayerVerdict::new(
            ThreatCategory::DataLeak,
            RiskLevel::High,
            format!(
                "Data leak detected: Simple tool app using {}MB of background data",
                background_mb
            ),
        ));
    }

    if !app.is_system_app && background_mb > GENERAL_BACKGROUND_LIMIT_MB {
        return Some(LayerVerdict::new(
            ThreatCategory::DataLeak,
            RiskLevel::Medium,
            format!("High background data usage detected: {}MB", background_mb),
        ));
    }

    None
}

// ============================================================================
// HELPERS
// ============================================================================

fn name_or_package_contains(app: &ClassificationResult, keywords: &[&str]) -> bool {
    let name = app.name.to_lowercase();
    let package = app.package_name.to_lowercase();
    keywords
        .iter()
        .any(|keyword| name.contains(keyword) || package.contains(keyword))
}

pub fn is_loan_or_finance_app(app: &ClassificationResult) -> bool {
    name_or_package_contains(app, LOAN_FINANCE_INDICATORS)
}

pub fn is_simple_tool_app(app: &ClassificationResult) -> bool {
    name_or_package_contains(app, SIMPLE_TOOL_KEYWORDS)
}

fn has_permission(permissions: &[String], permission: &str) -> bool {
    permissions.iter().any(|p| p == permission)
}

fn has_layer2_dangerous_permission(permissions: &[String]) -> bool {
    permissions
        .iter()
        .any(|p| LAYER2_DANGEROUS_PERMISSIONS.contains(&p.as_str()))
}
