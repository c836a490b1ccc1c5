//! App Classifier
//!
//! CHỈ chứa logic orchestrate các layers - không có rules, không có I/O.
//! Input: ApplicationDescriptor + ThreatSnapshot
//! Output: ClassificationResult
//!
//! Evaluation order is Layer 1 -> Layer 3 -> Layer 2: a confirmed-bad
//! identity wins unconditionally, and observed behavior outranks merely
//! requested permissions.

use std::sync::Arc;

use chrono::Utc;

use crate::logic::threat_db::{ThreatDatabase, ThreatSnapshot};

use super::layers::{analyze_layer1, analyze_layer2, analyze_layer3};
use super::rules::{DESC_NO_THREATS, DESC_VERIFIED_SAFE, UNKNOWN_APP_NAME};
use super::types::{
    ApplicationDescriptor, ClassificationResult, DetectionLayer, LayerVerdict, RiskLevel,
    ThreatCategory,
};

// ============================================================================
// ENGINE
// ============================================================================

/// Classification engine bound to a threat database
#[derive(Clone)]
pub struct ClassificationEngine {
    database: Arc<ThreatDatabase>,
}

impl ClassificationEngine {
    pub fn new(database: Arc<ThreatDatabase>) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Arc<ThreatDatabase> {
        &self.database
    }

    /// Classify one descriptor against the current snapshot
    pub fn classify(&self, descriptor: &ApplicationDescriptor) -> ClassificationResult {
        classify_with_snapshot(descriptor, &self.database.snapshot())
    }

    /// Classify each descriptor independently; output order follows input.
    /// The whole batch reads one snapshot.
    pub fn classify_batch(&self, descriptors: &[ApplicationDescriptor]) -> Vec<ClassificationResult> {
        let snapshot = self.database.snapshot();
        let results: Vec<ClassificationResult> = descriptors
            .iter()
            .map(|descriptor| classify_with_snapshot(descriptor, &snapshot))
            .collect();

        log::debug!(
            "Classified {} apps, {} flagged",
            results.len(),
            results.iter().filter(|r| r.is_threat()).count()
        );
        results
    }
}

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Pure classification against an explicit snapshot
pub fn classify_with_snapshot(
    descriptor: &ApplicationDescriptor,
    snapshot: &ThreatSnapshot,
) -> ClassificationResult {
    let mut app = normalize(descriptor);

    // LAYER 1: blacklist first
    if let Some(verdict) = analyze_layer1(&app, snapshot) {
        apply(&mut app, verdict, DetectionLayer::DatabaseMatch);
        return app;
    }

    // LAYER 3: behavioral, ahead of Layer 2 so it can override it
    if let Some(verdict) = analyze_layer3(&app) {
        apply(&mut app, verdict, DetectionLayer::Behavioral);
        return app;
    }

    // LAYER 2: heuristics for unknown apps
    if let Some(verdict) = analyze_layer2(&app, snapshot) {
        apply(&mut app, verdict, DetectionLayer::PermissionHeuristics);
        return app;
    }

    app.description = if snapshot.is_whitelisted(&app.package_name) {
        DESC_VERIFIED_SAFE
    } else {
        DESC_NO_THREATS
    }
    .to_string();

    app
}

/// Fill defaults: the result starts out safe, layer 1, empty description
pub fn normalize(descriptor: &ApplicationDescriptor) -> ClassificationResult {
    ClassificationResult {
        id: descriptor
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Utc::now().timestamp_millis().to_string()),
        name: descriptor
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_APP_NAME.to_string()),
        package_name: descriptor.package_name.clone().unwrap_or_default(),
        category: ThreatCategory::Safe,
        risk_level: RiskLevel::Safe,
        permissions: descriptor.permissions.clone().unwrap_or_default(),
        data_usage_mb: sanitize_mb(descriptor.data_usage_mb),
        background_data_mb: sanitize_mb(descriptor.background_data_mb),
        has_launcher_icon: descriptor.has_launcher_icon.unwrap_or(true),
        is_system_app: descriptor.is_system_app.unwrap_or(false),
        description: String::new(),
        detection_layer: DetectionLayer::DatabaseMatch,
        is_using_camera_in_background: descriptor.is_using_camera_in_background,
        is_using_mic_in_background: descriptor.is_using_mic_in_background,
    }
}

/// Missing, negative or non-finite usage counts as zero
fn sanitize_mb(value: Option<f64>) -> f64 {
    match value {
        Some(mb) if mb.is_finite() && mb > 0.0 => mb,
        _ => 0.0,
    }
}

fn apply(app: &mut ClassificationResult, verdict: LayerVerdict, layer: DetectionLayer) {
    app.category = verdict.category;
    app.risk_level = verdict.risk_level;
    app.description = verdict.description;
    app.detection_layer = layer;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::threat_db::{offline_snapshot, FeedConfig};

    fn engine() -> ClassificationEngine {
        ClassificationEngine::new(Arc::new(ThreatDatabase::offline()))
    }

    #[test]
    fn test_scenario_blacklisted_spyware() {
        let desc = ApplicationDescriptor::new("ShadowSpy Pro", "com.shadow.spy.pro")
            .with_permissions(["READ_CONTACTS", "READ_SMS", "CAMERA", "RECORD_AUDIO", "ACCESS_FINE_LOCATION"])
            .with_system_app(false);

        let result = engine().classify(&desc);
        assert_eq!(result.category, ThreatCategory::Spyware);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.detection_layer, DetectionLayer::DatabaseMatch);
        assert_eq!(result.description, "Known malicious app detected in threat database");
    }

    #[test]
    fn test_scenario_predatory_loan() {
        // Not blacklisted in this snapshot
        let snapshot = ThreatSnapshot::new(Vec::<String>::new(), Vec::<String>::new());
        let desc = ApplicationDescriptor::new("Barwaqt Easy Loan", "com.barwaqt.loan")
            .with_permissions(["READ_CONTACTS"])
            .with_system_app(false);

        let result = classify_with_snapshot(&desc, &snapshot);
        assert_eq!(result.category, ThreatCategory::LoanApp);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.detection_layer, DetectionLayer::PermissionHeuristics);
    }

    #[test]
    fn test_scenario_behavior_overrides_permissions() {
        let desc = ApplicationDescriptor::new("Smart Calculator Pro", "com.smart.calculator.pro")
            .with_permissions(["READ_CONTACTS"])
            .with_background_data(15.0)
            .with_system_app(false);

        let result = engine().classify(&desc);
        assert_eq!(result.category, ThreatCategory::DataLeak);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.detection_layer, DetectionLayer::Behavioral);
        assert!(result.description.contains("15MB"));
    }

    #[test]
    fn test_scenario_whitelisted_is_verified_safe() {
        let desc = ApplicationDescriptor::new("WhatsApp", "com.whatsapp")
            .with_permissions(["READ_CONTACTS", "CAMERA", "RECORD_AUDIO"])
            .with_system_app(false);

        let result = engine().classify(&desc);
        assert_eq!(result.category, ThreatCategory::Safe);
        assert_eq!(result.risk_level, RiskLevel::Safe);
        assert_eq!(result.description.to_lowercase(), "verified safe application");
        assert_eq!(result.detection_layer, DetectionLayer::DatabaseMatch);
    }

    #[test]
    fn test_blacklist_wins_over_everything() {
        let mut desc = ApplicationDescriptor::new("Calculator", "com.bad")
            .with_background_data(500.0)
            .with_system_app(true)
            .with_permissions(Vec::<String>::new());
        desc.is_using_camera_in_background = Some(true);
        // Present in both lists: blacklist checked first
        let snapshot = ThreatSnapshot::new(vec!["com.bad"], vec!["com.bad"]);

        let result = classify_with_snapshot(&desc, &snapshot);
        assert_eq!(result.category, ThreatCategory::Spyware);
        assert_eq!(result.detection_layer, DetectionLayer::DatabaseMatch);
    }

    #[test]
    fn test_background_sensor_flags_with_no_permissions() {
        let mut desc = ApplicationDescriptor::new("Photo Gallery Plus", "com.photo.gallery.plus");
        desc.is_using_mic_in_background = Some(true);

        let result = engine().classify(&desc);
        assert_eq!(result.category, ThreatCategory::Spyware);
        assert_eq!(result.detection_layer, DetectionLayer::Behavioral);
        assert!(result.permissions.is_empty());
    }

    #[test]
    fn test_whitelisted_app_still_subject_to_behavior() {
        let desc = ApplicationDescriptor::new("WhatsApp", "com.whatsapp").with_background_data(100.0);

        let result = engine().classify(&desc);
        assert_eq!(result.category, ThreatCategory::DataLeak);
        assert_eq!(result.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_system_app_never_flagged_by_layer2() {
        let desc = ApplicationDescriptor::new("Contacts Cash", "com.android.contacts")
            .with_permissions(["READ_CONTACTS", "READ_SMS", "CAMERA"])
            .with_system_app(true);

        let result = engine().classify(&desc);
        assert_eq!(result.category, ThreatCategory::Safe);
        assert_eq!(result.description, "No threats detected");
    }

    #[test]
    fn test_empty_descriptor_defaults() {
        let result = engine().classify(&ApplicationDescriptor::default());

        assert!(!result.id.is_empty());
        assert_eq!(result.name, "Unknown App");
        assert_eq!(result.package_name, "");
        assert!(result.has_launcher_icon);
        assert!(!result.is_system_app);
        assert_eq!(result.data_usage_mb, 0.0);
        assert_eq!(result.category, ThreatCategory::Safe);
        assert_eq!(result.description, "No threats detected");
    }

    #[test]
    fn test_empty_id_and_name_treated_as_missing() {
        let mut desc = ApplicationDescriptor::new("", "com.example.notes");
        desc.id = Some(String::new());

        let result = engine().classify(&desc);
        assert!(!result.id.is_empty());
        assert!(result.id.parse::<i64>().is_ok());
        assert_eq!(result.name, "Unknown App");
        assert_eq!(result.package_name, "com.example.notes");
    }

    #[test]
    fn test_negative_and_nan_usage_default_to_zero() {
        let mut desc = ApplicationDescriptor::new("Torch", "com.torch");
        desc.background_data_mb = Some(-80.0);
        desc.data_usage_mb = Some(f64::NAN);

        let result = engine().classify(&desc);
        assert_eq!(result.background_data_mb, 0.0);
        assert_eq!(result.data_usage_mb, 0.0);
        assert_eq!(result.category, ThreatCategory::Safe);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let mut desc = ApplicationDescriptor::new("TotalClean Booster", "com.totalclean.boost")
            .with_permissions(["READ_CONTACTS", "CAMERA"])
            .with_background_data(15.0);
        desc.id = Some("4".to_string());

        let engine = engine();
        assert_eq!(engine.classify(&desc), engine.classify(&desc));
    }

    #[test]
    fn test_batch_preserves_order_and_independence() {
        let descs = vec![
            ApplicationDescriptor::new("WhatsApp", "com.whatsapp"),
            ApplicationDescriptor::new("ShadowSpy", "com.shadow.spy.pro"),
            ApplicationDescriptor::new("Notes", "com.notes").with_permissions(["CAMERA"]),
        ];

        let engine = engine();
        let batch = engine.classify_batch(&descs);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].package_name, "com.whatsapp");
        assert_eq!(batch[1].category, ThreatCategory::Spyware);
        assert_eq!(batch[2].category, ThreatCategory::UnknownThreat);

        for (desc, result) in descs.iter().zip(&batch) {
            let single = engine.classify(desc);
            assert_eq!(single.category, result.category);
            assert_eq!(single.description, result.description);
        }
    }

    #[test]
    fn test_engine_reads_injected_snapshot() {
        let db = ThreatDatabase::with_snapshot(
            ThreatSnapshot::new(Vec::<String>::new(), vec!["com.custom.bad"]),
            FeedConfig::disabled(),
        );
        let engine = ClassificationEngine::new(Arc::new(db));

        let result = engine.classify(&ApplicationDescriptor::new("Custom", "com.custom.bad"));
        assert_eq!(result.category, ThreatCategory::Spyware);
        // Offline default no longer applies
        let shadow = engine.classify(&ApplicationDescriptor::new("ShadowSpy", "com.shadow.spy.pro"));
        assert_eq!(shadow.category, ThreatCategory::Safe);
        assert_ne!(*engine.database().snapshot(), offline_snapshot());
    }
}
