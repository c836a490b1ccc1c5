//! Threat Module
//!
//! Phân loại app dựa trên threat database, permissions và behavior.
//! Đây là CORE STEP - nơi quyết định category/risk cho từng app.
//!
//! ## Structure
//! - `types`: Core types (ApplicationDescriptor, ClassificationResult, ...)
//! - `rules`: Keyword lists, permission sets, thresholds
//! - `layers`: The three detection layers
//! - `classifier`: Layer orchestration + engine
//!
//! ## Usage
//! ```ignore
//! use spyguard_core::logic::threat::{ClassificationEngine, ApplicationDescriptor};
//!
//! let result = engine.classify(&ApplicationDescriptor::new("Flashlight", "com.super.flashlight"));
//! if result.is_threat() {
//!     println!("Layer {}: {}", result.detection_layer, result.description);
//! }
//! ```

pub mod types;
pub mod rules;
pub mod layers;
pub mod classifier;

pub use types::{
    ApplicationDescriptor,
    ClassificationResult,
    DetectionLayer,
    LayerVerdict,
    RiskLevel,
    ThreatCategory,
};

pub use rules::{DANGEROUS_PERMISSIONS, LAYER2_DANGEROUS_PERMISSIONS};

pub use classifier::{classify_with_snapshot, normalize, ClassificationEngine};
