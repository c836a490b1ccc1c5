//! Classification Rules & Thresholds
//!
//! Keyword lists, permission sets và thresholds cho 3 layers.
//! KHÔNG chứa logic classify - chỉ constants.

// ============================================================================
// PERMISSIONS
// ============================================================================

pub const READ_CONTACTS: &str = "READ_CONTACTS";
pub const READ_SMS: &str = "READ_SMS";
pub const CAMERA: &str = "CAMERA";

/// Layer 2 trips on any of these from an unverified app
pub const LAYER2_DANGEROUS_PERMISSIONS: &[&str] = &[READ_CONTACTS, READ_SMS, CAMERA];

/// Permissions highlighted as dangerous in the detail view
pub const DANGEROUS_PERMISSIONS: &[&str] = &[
    READ_CONTACTS,
    READ_SMS,
    CAMERA,
    "RECORD_AUDIO",
    "ACCESS_FINE_LOCATION",
    "READ_EXTERNAL_STORAGE",
    "READ_CALL_LOG",
];

// ============================================================================
// NAME KEYWORDS (matched case-insensitively against name + package)
// ============================================================================

/// Loan / finance indicators, including local terms (barwaqt, qarz, paisa)
pub const LOAN_FINANCE_INDICATORS: &[&str] = &[
    "loan", "cash", "money", "finance", "credit", "lending", "barwaqt", "qarz", "paisa",
];

/// Apps that have no business using much background data
pub const SIMPLE_TOOL_KEYWORDS: &[&str] = &[
    "calculator", "flashlight", "torch", "compass", "ruler", "level", "timer", "stopwatch",
    "clock", "alarm",
];

// ============================================================================
// BACKGROUND DATA THRESHOLDS (MB, strictly greater than)
// ============================================================================

/// Simple tool apps above this are leaking data
pub const SIMPLE_TOOL_BACKGROUND_LIMIT_MB: f64 = 10.0;

/// Any non-system app above this is flagged
pub const GENERAL_BACKGROUND_LIMIT_MB: f64 = 50.0;

// ============================================================================
// DESCRIPTIONS
// ============================================================================

pub const DESC_KNOWN_MALICIOUS: &str = "Known malicious app detected in threat database";
pub const DESC_PREDATORY_LOAN: &str =
    "Predatory loan app detected - requests contact access to harass borrowers";
pub const DESC_UNKNOWN_SENSITIVE: &str =
    "Unknown app requesting sensitive permissions - potential security risk";
pub const DESC_VERIFIED_SAFE: &str = "Verified safe application";
pub const DESC_NO_THREATS: &str = "No threats detected";

/// Display name used when the descriptor carries none
pub const UNKNOWN_APP_NAME: &str = "Unknown App";

// ============================================================================
// DETAIL VIEW THRESHOLDS
// ============================================================================

/// Total data usage above this marks a hidden app as suspicious
pub const HIDDEN_APP_DATA_LIMIT_MB: f64 = 10.0;

/// Data usage bands: <= ELEVATED is normal, <= EXCESSIVE is elevated
pub const DATA_USAGE_ELEVATED_MB: f64 = 20.0;
pub const DATA_USAGE_EXCESSIVE_MB: f64 = 50.0;
