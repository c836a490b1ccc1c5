//! Demonstration descriptors
//!
//! Synthetic apps covering every layer, for the `demo` command and tests.

use crate::logic::threat::ApplicationDescriptor;

struct Sample {
    id: &'static str,
    name: &'static str,
    package_name: &'static str,
    permissions: &'static [&'static str],
    data_usage_mb: f64,
    background_data_mb: f64,
    has_launcher_icon: bool,
    camera_in_background: Option<bool>,
}

const SAMPLES: &[Sample] = &[
    // Layer 1 (blacklisted)
    Sample {
        id: "1",
        name: "ShadowSpy Pro",
        package_name: "com.shadow.spy.pro",
        permissions: &["READ_CONTACTS", "READ_SMS", "CAMERA", "RECORD_AUDIO", "ACCESS_FINE_LOCATION"],
        data_usage_mb: 45.0,
        background_data_mb: 30.0,
        has_launcher_icon: false,
        camera_in_background: None,
    },
    Sample {
        id: "2",
        name: "QuickCash Loan",
        package_name: "com.quickcash.loan",
        permissions: &["READ_CONTACTS", "READ_EXTERNAL_STORAGE", "CAMERA", "ACCESS_FINE_LOCATION"],
        data_usage_mb: 120.0,
        background_data_mb: 45.0,
        has_launcher_icon: true,
        camera_in_background: None,
    },
    Sample {
        id: "3",
        name: "Barwaqt Easy Loan",
        package_name: "com.barwaqt.loan",
        permissions: &["READ_CONTACTS", "READ_SMS", "READ_EXTERNAL_STORAGE", "CAMERA"],
        data_usage_mb: 85.0,
        background_data_mb: 25.0,
        has_launcher_icon: true,
        camera_in_background: None,
    },
    // Layer 2 (unknown apps with dangerous permissions)
    Sample {
        id: "4",
        name: "TotalClean Booster",
        package_name: "com.totalclean.boost",
        permissions: &["READ_CONTACTS", "CAMERA", "READ_SMS", "ACCESS_FINE_LOCATION"],
        data_usage_mb: 35.0,
        background_data_mb: 15.0,
        has_launcher_icon: true,
        camera_in_background: None,
    },
    Sample {
        id: "5",
        name: "PK Fast Loan Hub",
        package_name: "com.pkfast.loan.hub",
        permissions: &["READ_CONTACTS", "READ_EXTERNAL_STORAGE", "CAMERA"],
        data_usage_mb: 55.0,
        background_data_mb: 20.0,
        has_launcher_icon: true,
        camera_in_background: None,
    },
    Sample {
        id: "6",
        name: "SystemService Helper",
        package_name: "com.system.helper.unknown",
        permissions: &["READ_SMS", "CAMERA", "RECORD_AUDIO"],
        data_usage_mb: 25.0,
        background_data_mb: 18.0,
        has_launcher_icon: false,
        camera_in_background: None,
    },
    // Layer 3 (behavioral)
    Sample {
        id: "7",
        name: "Super Flashlight",
        package_name: "com.super.flashlight.free",
        permissions: &["CAMERA"],
        data_usage_mb: 35.0,
        background_data_mb: 28.0,
        has_launcher_icon: true,
        camera_in_background: None,
    },
    Sample {
        id: "8",
        name: "Smart Calculator Pro",
        package_name: "com.smart.calculator.pro",
        permissions: &["READ_CONTACTS", "ACCESS_FINE_LOCATION"],
        data_usage_mb: 20.0,
        background_data_mb: 15.0,
        has_launcher_icon: true,
        camera_in_background: None,
    },
    Sample {
        id: "9",
        name: "Photo Gallery Plus",
        package_name: "com.photo.gallery.plus",
        permissions: &["READ_EXTERNAL_STORAGE", "CAMERA"],
        data_usage_mb: 150.0,
        background_data_mb: 5.0,
        has_launcher_icon: true,
        camera_in_background: Some(true),
    },
    // Whitelisted
    Sample {
        id: "10",
        name: "WhatsApp",
        package_name: "com.whatsapp",
        permissions: &["READ_CONTACTS", "CAMERA", "RECORD_AUDIO"],
        data_usage_mb: 500.0,
        background_data_mb: 100.0,
        has_launcher_icon: true,
        camera_in_background: None,
    },
    Sample {
        id: "11",
        name: "JazzCash",
        package_name: "com.jazz.cash",
        permissions: &["READ_CONTACTS", "CAMERA", "READ_SMS"],
        data_usage_mb: 80.0,
        background_data_mb: 10.0,
        has_launcher_icon: true,
        camera_in_background: None,
    },
];

pub fn sample_descriptors() -> Vec<ApplicationDescriptor> {
    SAMPLES
        .iter()
        .map(|s| ApplicationDescriptor {
            id: Some(s.id.to_string()),
            name: Some(s.name.to_string()),
            package_name: Some(s.package_name.to_string()),
            permissions: Some(s.permissions.iter().map(|p| p.to_string()).collect()),
            data_usage_mb: Some(s.data_usage_mb),
            background_data_mb: Some(s.background_data_mb),
            has_launcher_icon: Some(s.has_launcher_icon),
            is_system_app: Some(false),
            is_using_camera_in_background: s.camera_in_background,
            is_using_mic_in_background: None,
        })
        .collect()
}
