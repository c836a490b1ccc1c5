//! Threat Detail View
//!
//! Annotations shown next to a single result: dangerous permissions,
//! hidden-app warning, data usage band.

use serde::Serialize;

use crate::logic::threat::rules::{
    DATA_USAGE_ELEVATED_MB, DATA_USAGE_EXCESSIVE_MB, HIDDEN_APP_DATA_LIMIT_MB,
};
use crate::logic::threat::{ClassificationResult, DANGEROUS_PERMISSIONS};

/// Dangerous permissions held by the app, in the app's own order
pub fn dangerous_permissions(result: &ClassificationResult) -> Vec<String> {
    result
        .permissions
        .iter()
        .filter(|p| DANGEROUS_PERMISSIONS.contains(&p.as_str()))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataUsageBand {
    Normal,
    Elevated,
    Excessive,
}

impl DataUsageBand {
    pub fn from_mb(mb: f64) -> Self {
        if mb > DATA_USAGE_EXCESSIVE_MB {
            DataUsageBand::Excessive
        } else if mb > DATA_USAGE_ELEVATED_MB {
            DataUsageBand::Elevated
        } else {
            DataUsageBand::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatDetails {
    pub name: String,
    pub package_name: String,
    /// e.g. "Layer 3: Behavioral Alert (Suspicious Activity)"
    pub detection_method: String,
    pub dangerous_permissions: Vec<String>,
    /// No launcher icon
    pub hidden_app: bool,
    pub suspicious_data_usage: bool,
    pub data_usage_band: DataUsageBand,
}

impl ThreatDetails {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let hidden_app = !result.has_launcher_icon;

        Self {
            name: result.name.clone(),
            package_name: result.package_name.clone(),
            detection_method: format!(
                "Layer {}: {}",
                result.detection_layer,
                result.detection_layer.description()
            ),
            dangerous_permissions: dangerous_permissions(result),
            hidden_app,
            suspicious_data_usage: hidden_app && result.data_usage_mb > HIDDEN_APP_DATA_LIMIT_MB,
            data_usage_band: DataUsageBand::from_mb(result.data_usage_mb),
        }
    }
}
