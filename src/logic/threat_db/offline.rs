//! Embedded offline database (fallback)

use once_cell::sync::Lazy;

use super::types::ThreatSnapshot;

/// Verified-safe packages
pub const OFFLINE_WHITELIST: &[&str] = &[
    "com.whatsapp",
    "com.facebook.katana",
    "com.instagram.android",
    "com.jazz.cash",
    "com.easypaisa.app.mobile",
    "com.hbl.mobile",
    "com.ubercab",
    "com.careem.acma",
    "com.google.android.apps.messaging",
    "com.google.android.gm",
    "com.google.android.apps.photos",
    "com.samsung.android.messaging",
    "com.apple.mobilesms",
    "com.google.android.calculator",
    "com.android.calculator2",
    "com.android.flashlight",
];

/// Confirmed-malicious packages
pub const OFFLINE_BLACKLIST: &[&str] = &[
    "com.easyloan.personal",
    "com.barwaqt.loan",
    "com.pk.loan.credit",
    "com.spyware.tracker",
    "com.shadow.spy.pro",
    "com.hidden.tracker",
    "com.quickcash.loan",
    "com.easymoney.finance",
    "com.instant.loan.hub",
];

static OFFLINE_SNAPSHOT: Lazy<ThreatSnapshot> =
    Lazy::new(|| ThreatSnapshot::new(OFFLINE_WHITELIST.iter().copied(), OFFLINE_BLACKLIST.iter().copied()));

/// Snapshot every store starts from
pub fn offline_snapshot() -> ThreatSnapshot {
    OFFLINE_SNAPSHOT.clone()
}
