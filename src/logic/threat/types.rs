//! Threat Types
//!
//! Core types cho app classification.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// THREAT CATEGORY
// ============================================================================

/// Category assigned to an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThreatCategory {
    /// Known malicious identity or live sensor abuse
    Spyware,
    /// Predatory loan app harvesting contacts
    LoanApp,
    HiddenTracker,
    /// Anomalous background data
    DataLeak,
    /// Unverified app asking for sensitive permissions
    UnknownThreat,
    Safe,
}

impl ThreatCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatCategory::Spyware => "spyware",
            ThreatCategory::LoanApp => "loanApp",
            ThreatCategory::HiddenTracker => "hiddenTracker",
            ThreatCategory::DataLeak => "dataLeak",
            ThreatCategory::UnknownThreat => "unknownThreat",
            ThreatCategory::Safe => "safe",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ThreatCategory::Spyware => "Spyware",
            ThreatCategory::LoanApp => "Predatory Loan App",
            ThreatCategory::HiddenTracker => "Hidden Tracker",
            ThreatCategory::DataLeak => "Data Leak",
            ThreatCategory::UnknownThreat => "Unknown Threat",
            ThreatCategory::Safe => "Safe",
        }
    }

    pub fn is_threat(&self) -> bool {
        *self != ThreatCategory::Safe
    }
}

impl std::fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Risk levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Safe,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Safe => "safe",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Safe => 0,
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "#FF0033",   // Danger
            RiskLevel::Medium => "#FFB800", // Warning
            RiskLevel::Low => "#00B8FF",    // Info
            RiskLevel::Safe => "#00FF41",   // Safe
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DETECTION LAYER
// ============================================================================

/// Which layer produced the verdict.
///
/// Serialized as the bare layer number (1, 2, 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DetectionLayer {
    /// Layer 1 - threat database match
    DatabaseMatch = 1,
    /// Layer 2 - permission/name heuristics
    PermissionHeuristics = 2,
    /// Layer 3 - behavioral watchdog
    Behavioral = 3,
}

impl DetectionLayer {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn description(&self) -> &'static str {
        crate::logic::report::layer_description(self.number())
    }
}

impl From<DetectionLayer> for u8 {
    fn from(layer: DetectionLayer) -> Self {
        layer.number()
    }
}

impl TryFrom<u8> for DetectionLayer {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DetectionLayer::DatabaseMatch),
            2 => Ok(DetectionLayer::PermissionHeuristics),
            3 => Ok(DetectionLayer::Behavioral),
            other => Err(format!("Invalid detection layer: {}", other)),
        }
    }
}

impl std::fmt::Display for DetectionLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ============================================================================
// APPLICATION DESCRIPTOR (input)
// ============================================================================

/// Metadata describing one installed application.
///
/// Every field is optional; missing values are defaulted during
/// classification, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Foreground data usage (MB)
    #[serde(default, rename = "dataUsageMB", skip_serializing_if = "Option::is_none")]
    pub data_usage_mb: Option<f64>,
    /// Background data usage (MB)
    #[serde(default, rename = "backgroundDataMB", skip_serializing_if = "Option::is_none")]
    pub background_data_mb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_launcher_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system_app: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_using_camera_in_background: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_using_mic_in_background: Option<bool>,
}

impl ApplicationDescriptor {
    /// Descriptor with just a display name and package name
    pub fn new(name: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            package_name: Some(package_name.into()),
            ..Default::default()
        }
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = Some(permissions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_background_data(mut self, mb: f64) -> Self {
        self.background_data_mb = Some(mb);
        self
    }

    pub fn with_system_app(mut self, is_system_app: bool) -> Self {
        self.is_system_app = Some(is_system_app);
        self
    }
}

// ============================================================================
// CLASSIFICATION RESULT (output)
// ============================================================================

/// Fully populated classification of one descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub id: String,
    pub name: String,
    pub package_name: String,
    pub category: ThreatCategory,
    pub risk_level: RiskLevel,
    pub permissions: Vec<String>,
    #[serde(rename = "dataUsageMB")]
    pub data_usage_mb: f64,
    #[serde(rename = "backgroundDataMB")]
    pub background_data_mb: f64,
    pub has_launcher_icon: bool,
    pub is_system_app: bool,
    pub description: String,
    /// Layer that fired; `DatabaseMatch` when nothing fired (evaluated, safe)
    pub detection_layer: DetectionLayer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_using_camera_in_background: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_using_mic_in_background: Option<bool>,
}

impl ClassificationResult {
    pub fn is_threat(&self) -> bool {
        self.category.is_threat()
    }
}

/// Verdict produced by a single layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerVerdict {
    pub category: ThreatCategory,
    pub risk_level: RiskLevel,
    pub description: String,
}

impl LayerVerdict {
    pub fn new(category: ThreatCategory, risk_level: RiskLevel, description: impl Into<String>) -> Self {
        Self {
            category,
            risk_level,
            description: description.into(),
        }
    }
}
