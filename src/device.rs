//! Intune device management: Defender protection state and managed apps.
//!
//! This is where the flag enums live. `WindowsArchitecture`,
//! `WindowsDeviceType`, `WindowsDeviceHealthState` and
//! `WindowsDefenderProductStatus` are bitmasks on the wire, written as
//! comma-joined names (`"x86,arm"`).
//!
//! The app hierarchy is three levels deep:
//! `WindowsUniversalAppX` → `MobileLobApp` → `MobileApp` → `Entity`.
//! [`AnyMobileApp`] resolves an app payload to its concrete type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::{wire_enum, wire_flags};
use crate::entity::Entity;
use crate::odata::discriminated_union;
use crate::parse_node::impl_graph_model;

// ── Flag enums ─────────────────────────────────────────────────────────

wire_flags! {
    /// Processor architectures an app package supports.
    pub struct WindowsArchitecture: u32 {
        empty = "none";
        const X86 = 1 << 0 => "x86";
        const X64 = 1 << 1 => "x64";
        const ARM = 1 << 2 => "arm";
        const NEUTRAL = 1 << 3 => "neutral";
        const ARM64 = 1 << 4 => "arm64";
    }
}

wire_flags! {
    /// Windows device families an app package targets.
    pub struct WindowsDeviceType: u32 {
        empty = "none";
        const DESKTOP = 1 << 0 => "desktop";
        const MOBILE = 1 << 1 => "mobile";
        const HOLOGRAPHIC = 1 << 2 => "holographic";
        const TEAM = 1 << 3 => "team";
    }
}

wire_flags! {
    /// Pending remediation work reported by Defender. Empty means clean.
    pub struct WindowsDeviceHealthState: u32 {
        empty = "clean";
        const FULL_SCAN_PENDING = 1 << 0 => "fullScanPending";
        const REBOOT_PENDING = 1 << 1 => "rebootPending";
        const MANUAL_STEPS_PENDING = 1 << 2 => "manualStepsPending";
        const OFFLINE_SCAN_PENDING = 1 << 3 => "offlineScanPending";
        const CRITICAL = 1 << 4 => "critical";
    }
}

wire_flags! {
    /// Defender product status bits.
    pub struct WindowsDefenderProductStatus: u32 {
        empty = "noStatus";
        const SERVICE_NOT_RUNNING = 1 << 0 => "serviceNotRunning";
        const SERVICE_STARTED_WITHOUT_MALWARE_PROTECTION = 1 << 1 => "serviceStartedWithoutMalwareProtection";
        const PENDING_FULL_SCAN_DUE_TO_THREAT_ACTION = 1 << 2 => "pendingFullScanDueToThreatAction";
        const PENDING_REBOOT_DUE_TO_THREAT_ACTION = 1 << 3 => "pendingRebootDueToThreatAction";
        const PENDING_MANUAL_STEPS_DUE_TO_THREAT_ACTION = 1 << 4 => "pendingManualStepsDueToThreatAction";
        const AV_SIGNATURES_OUT_OF_DATE = 1 << 5 => "avSignaturesOutOfDate";
        const AS_SIGNATURES_OUT_OF_DATE = 1 << 6 => "asSignaturesOutOfDate";
        const NO_QUICK_SCAN_HAPPENED_FOR_SPECIFIED_PERIOD = 1 << 7 => "noQuickScanHappenedForSpecifiedPeriod";
        const NO_FULL_SCAN_HAPPENED_FOR_SPECIFIED_PERIOD = 1 << 8 => "noFullScanHappenedForSpecifiedPeriod";
        const SYSTEM_INITIATED_SCAN_IN_PROGRESS = 1 << 9 => "systemInitiatedScanInProgress";
        const SYSTEM_INITIATED_CLEAN_IN_PROGRESS = 1 << 10 => "systemInitiatedCleanInProgress";
        const SAMPLES_PENDING_SUBMISSION = 1 << 11 => "samplesPendingSubmission";
        const PRODUCT_RUNNING_IN_EVALUATION_MODE = 1 << 12 => "productRunningInEvaluationMode";
        const PRODUCT_RUNNING_IN_NON_GENUINE_MODE = 1 << 13 => "productRunningInNonGenuineMode";
        const PRODUCT_EXPIRED = 1 << 14 => "productExpired";
        const OFFLINE_SCAN_REQUIRED = 1 << 15 => "offlineScanRequired";
        const SERVICE_SHUTDOWN_AS_PART_OF_SYSTEM_SHUTDOWN = 1 << 16 => "serviceShutdownAsPartOfSystemShutdown";
        const THREAT_REMEDIATION_FAILED_CRITICALLY = 1 << 17 => "threatRemediationFailedCritically";
        const THREAT_REMEDIATION_FAILED_NON_CRITICALLY = 1 << 18 => "threatRemediationFailedNonCritically";
        const NO_STATUS_FLAGS_SET = 1 << 19 => "noStatusFlagsSet";
        const PLATFORM_OUT_OF_DATE = 1 << 20 => "platformOutOfDate";
        const PLATFORM_UPDATE_IN_PROGRESS = 1 << 21 => "platformUpdateInProgress";
        const PLATFORM_ABOUT_TO_BE_OUTDATED = 1 << 22 => "platformAboutToBeOutdated";
        const SIGNATURE_OR_PLATFORM_END_OF_LIFE_IS_PAST_OR_IS_IMPENDING = 1 << 23 => "signatureOrPlatformEndOfLifeIsPastOrIsImpending";
        const WINDOWS_S_MODE_SIGNATURES_IN_USE_ON_NON_WIN10_S_INSTALL = 1 << 24 => "windowsSModeSignaturesInUseOnNonWin10SInstall";
    }
}

wire_enum! {
    pub enum MobileAppPublishingState {
        NotPublished = "notPublished",
        Processing = "processing",
        Published = "published",
    }
}

// ── Protection state ───────────────────────────────────────────────────

/// Defender health of a managed Windows device.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowsProtectionState {
    #[serde(flatten)]
    pub base: Entity,

    pub anti_malware_version: Option<String>,
    pub device_state: Option<WindowsDeviceHealthState>,
    pub engine_version: Option<String>,
    pub full_scan_overdue: Option<bool>,
    pub full_scan_required: Option<bool>,
    pub is_virtual_machine: Option<bool>,
    pub last_full_scan_date_time: Option<DateTime<Utc>>,
    pub last_full_scan_signature_version: Option<String>,
    pub last_quick_scan_date_time: Option<DateTime<Utc>>,
    pub last_quick_scan_signature_version: Option<String>,
    pub last_reported_date_time: Option<DateTime<Utc>>,
    pub malware_protection_enabled: Option<bool>,
    pub network_inspection_system_enabled: Option<bool>,
    pub product_status: Option<WindowsDefenderProductStatus>,
    pub quick_scan_overdue: Option<bool>,
    pub real_time_protection_enabled: Option<bool>,
    pub reboot_required: Option<bool>,
    pub signature_update_overdue: Option<bool>,
    pub signature_version: Option<String>,
    pub tamper_protection_enabled: Option<bool>,
}

impl_graph_model! {
    WindowsProtectionState = "#microsoft.graph.windowsProtectionState", base: Entity {
        anti_malware_version => "antiMalwareVersion",
        device_state => "deviceState",
        engine_version => "engineVersion",
        full_scan_overdue => "fullScanOverdue",
        full_scan_required => "fullScanRequired",
        is_virtual_machine => "isVirtualMachine",
        last_full_scan_date_time => "lastFullScanDateTime",
        last_full_scan_signature_version => "lastFullScanSignatureVersion",
        last_quick_scan_date_time => "lastQuickScanDateTime",
        last_quick_scan_signature_version => "lastQuickScanSignatureVersion",
        last_reported_date_time => "lastReportedDateTime",
        malware_protection_enabled => "malwareProtectionEnabled",
        network_inspection_system_enabled => "networkInspectionSystemEnabled",
        product_status => "productStatus",
        quick_scan_overdue => "quickScanOverdue",
        real_time_protection_enabled => "realTimeProtectionEnabled",
        reboot_required => "rebootRequired",
        signature_update_overdue => "signatureUpdateOverdue",
        signature_version => "signatureVersion",
        tamper_protection_enabled => "tamperProtectionEnabled",
    }
}

// ── Mobile apps ────────────────────────────────────────────────────────

/// Base of every app managed by Intune.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MobileApp {
    #[serde(flatten)]
    pub base: Entity,

    pub created_date_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub developer: Option<String>,
    /// Admin-provided or imported title of the app.
    pub display_name: Option<String>,
    pub information_url: Option<String>,
    /// Whether the app is featured in the Company Portal.
    pub is_featured: Option<bool>,
    pub last_modified_date_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub owner: Option<String>,
    pub privacy_information_url: Option<String>,
    pub publisher: Option<String>,
    pub publishing_state: Option<MobileAppPublishingState>,
}

impl_graph_model! {
    MobileApp = "#microsoft.graph.mobileApp", base: Entity {
        created_date_time => "createdDateTime",
        description => "description",
        developer => "developer",
        display_name => "displayName",
        information_url => "informationUrl",
        is_featured => "isFeatured",
        last_modified_date_time => "lastModifiedDateTime",
        notes => "notes",
        owner => "owner",
        privacy_information_url => "privacyInformationUrl",
        publisher => "publisher",
        publishing_state => "publishingState",
    }
}

/// A web link published as an app.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebApp {
    #[serde(flatten)]
    pub base: MobileApp,

    pub app_url: Option<String>,
    /// Open the link in the Intune Managed Browser.
    pub use_managed_browser: Option<bool>,
}

impl_graph_model! {
    WebApp = "#microsoft.graph.webApp", base: MobileApp {
        app_url => "appUrl",
        use_managed_browser => "useManagedBrowser",
    }
}

/// A line-of-business app with uploaded content. Abstract on the service.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MobileLobApp {
    #[serde(flatten)]
    pub base: MobileApp,

    pub committed_content_version: Option<String>,
    pub file_name: Option<String>,
    /// Total size in bytes, including all uploaded files. Read-only.
    pub size: Option<i64>,
}

impl_graph_model! {
    MobileLobApp = "#microsoft.graph.mobileLobApp", base: MobileApp {
        committed_content_version => "committedContentVersion",
        file_name => "fileName",
        size => "size",
    }
}

/// A Windows Universal AppX line-of-business package.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowsUniversalAppX {
    #[serde(flatten)]
    pub base: MobileLobApp,

    pub applicable_architectures: Option<WindowsArchitecture>,
    pub applicable_device_types: Option<WindowsDeviceType>,
    pub identity_name: Option<String>,
    pub identity_publisher_hash: Option<String>,
    pub identity_resource_identifier: Option<String>,
    pub identity_version: Option<String>,
    /// Whether the package is a bundle.
    pub is_bundle: Option<bool>,
}

impl_graph_model! {
    WindowsUniversalAppX = "#microsoft.graph.windowsUniversalAppX", base: MobileLobApp {
        applicable_architectures => "applicableArchitectures",
        applicable_device_types => "applicableDeviceTypes",
        identity_name => "identityName",
        identity_publisher_hash => "identityPublisherHash",
        identity_resource_identifier => "identityResourceIdentifier",
        identity_version => "identityVersion",
        is_bundle => "isBundle",
    }
}

discriminated_union! {
    /// Any managed app, resolved by `@odata.type`.
    pub enum AnyMobileApp {
        WebApp(WebApp),
        MobileLobApp(MobileLobApp),
        WindowsUniversalAppX(WindowsUniversalAppX),
        _ => MobileApp(MobileApp),
    }
}
