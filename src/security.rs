//! `microsoft.graph.security`: alerts raised by Defender and the evidence
//! attached to them.
//!
//! Evidence is polymorphic. `Alert.evidence` holds [`AnyAlertEvidence`],
//! so each element of the collection resolves to its own concrete type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::{skip_nulls, wire_enum};
use crate::entity::Entity;
use crate::odata::{AdditionalData, discriminated_union};
use crate::parse_node::impl_graph_model;

// ── Enums ──────────────────────────────────────────────────────────────

wire_enum! {
    pub enum AlertSeverity {
        Unknown = "unknown",
        Informational = "informational",
        Low = "low",
        Medium = "medium",
        High = "high",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum AlertStatus {
        Unknown = "unknown",
        New = "new",
        InProgress = "inProgress",
        Resolved = "resolved",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    /// Analyst verdict on whether an alert is real.
    pub enum AlertClassification {
        Unknown = "unknown",
        FalsePositive = "falsePositive",
        TruePositive = "truePositive",
        InformationalExpectedActivity = "informationalExpectedActivity",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    /// What the analyst concluded the alert activity was.
    pub enum AlertDetermination {
        Unknown = "unknown",
        Apt = "apt",
        Malware = "malware",
        SecurityPersonnel = "securityPersonnel",
        SecurityTesting = "securityTesting",
        UnwantedSoftware = "unwantedSoftware",
        Other = "other",
        MultiStagedAttack = "multiStagedAttack",
        CompromisedAccount = "compromisedAccount",
        Phishing = "phishing",
        MaliciousUserActivity = "maliciousUserActivity",
        NotMalicious = "notMalicious",
        NotEnoughDataToValidate = "notEnoughDataToValidate",
        ConfirmedUserActivity = "confirmedUserActivity",
        LineOfBusinessApplication = "lineOfBusinessApplication",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    /// Detection technology that raised the alert.
    pub enum DetectionSource {
        Unknown = "unknown",
        MicrosoftDefenderForEndpoint = "microsoftDefenderForEndpoint",
        Antivirus = "antivirus",
        SmartScreen = "smartScreen",
        CustomTi = "customTi",
        MicrosoftDefenderForOffice365 = "microsoftDefenderForOffice365",
        AutomatedInvestigation = "automatedInvestigation",
        MicrosoftThreatExperts = "microsoftThreatExperts",
        CustomDetection = "customDetection",
        MicrosoftDefenderForIdentity = "microsoftDefenderForIdentity",
        CloudAppSecurity = "cloudAppSecurity",
        Microsoft365Defender = "microsoft365Defender",
        AzureAdIdentityProtection = "azureAdIdentityProtection",
        Manual = "manual",
        MicrosoftDataLossPrevention = "microsoftDataLossPrevention",
        AppGovernancePolicy = "appGovernancePolicy",
        AppGovernanceDetection = "appGovernanceDetection",
        UnknownFutureValue = "unknownFutureValue",
        MicrosoftDefenderForCloud = "microsoftDefenderForCloud",
    }
}

wire_enum! {
    /// Product that owns the alert.
    pub enum ServiceSource {
        Unknown = "unknown",
        MicrosoftDefenderForEndpoint = "microsoftDefenderForEndpoint",
        MicrosoftDefenderForIdentity = "microsoftDefenderForIdentity",
        MicrosoftDefenderForCloudApps = "microsoftDefenderForCloudApps",
        MicrosoftDefenderForOffice365 = "microsoftDefenderForOffice365",
        Microsoft365Defender = "microsoft365Defender",
        AzureAdIdentityProtection = "azureAdIdentityProtection",
        MicrosoftAppGovernance = "microsoftAppGovernance",
        DataLossPrevention = "dataLossPrevention",
        UnknownFutureValue = "unknownFutureValue",
        MicrosoftDefenderForCloud = "microsoftDefenderForCloud",
    }
}

wire_enum! {
    pub enum DefenderAvStatus {
        NotReporting = "notReporting",
        Disabled = "disabled",
        NotUpdated = "notUpdated",
        Updated = "updated",
        Unknown = "unknown",
        NotSupported = "notSupported",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum DeviceHealthStatus {
        Active = "active",
        Inactive = "inactive",
        ImpairedCommunication = "impairedCommunication",
        NoSensorData = "noSensorData",
        NoSensorDataImpairedCommunication = "noSensorDataImpairedCommunication",
        Unknown = "unknown",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum OnboardingStatus {
        InsufficientInfo = "insufficientInfo",
        Onboarded = "onboarded",
        CanBeOnboarded = "canBeOnboarded",
        Unsupported = "unsupported",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum DeviceRiskScore {
        None = "none",
        Informational = "informational",
        Low = "low",
        Medium = "medium",
        High = "high",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum EvidenceRemediationStatus {
        None = "none",
        Remediated = "remediated",
        Prevented = "prevented",
        Blocked = "blocked",
        NotFound = "notFound",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum EvidenceVerdict {
        Unknown = "unknown",
        Suspicious = "suspicious",
        Malicious = "malicious",
        NoThreatsFound = "noThreatsFound",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    /// Part an evidence item played in the alert.
    pub enum EvidenceRole {
        Unknown = "unknown",
        Contextual = "contextual",
        Scanned = "scanned",
        Source = "source",
        Destination = "destination",
        Created = "created",
        Added = "added",
        Compromised = "compromised",
        Edited = "edited",
        Attacked = "attacked",
        Attacker = "attacker",
        CommandAndControl = "commandAndControl",
        Loaded = "loaded",
        Suspicious = "suspicious",
        PolicyViolator = "policyViolator",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum IoTDeviceImportanceType {
        Unknown = "unknown",
        Low = "low",
        Normal = "normal",
        High = "high",
        UnknownFutureValue = "unknownFutureValue",
    }
}

wire_enum! {
    pub enum VmCloudProvider {
        Unknown = "unknown",
        Azure = "azure",
        UnknownFutureValue = "unknownFutureValue",
    }
}

// ── Complex types ──────────────────────────────────────────────────────

/// An analyst note on an alert.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertComment {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,

    pub comment: Option<String>,
    pub created_by_display_name: Option<String>,
    pub created_date_time: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    AlertComment = "#microsoft.graph.security.alertComment" {
        odata_type => "@odata.type",
        comment => "comment",
        created_by_display_name => "createdByDisplayName",
        created_date_time => "createdDateTime",
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggedOnUser {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,

    pub account_name: Option<String>,
    pub domain_name: Option<String>,

    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    LoggedOnUser = "#microsoft.graph.security.loggedOnUser" {
        odata_type => "@odata.type",
        account_name => "accountName",
        domain_name => "domainName",
    }
}

/// Cloud VM identity of a device.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VmMetadata {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,

    pub cloud_provider: Option<VmCloudProvider>,
    pub resource_id: Option<String>,
    pub subscription_id: Option<String>,
    pub vm_id: Option<String>,

    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    VmMetadata = "#microsoft.graph.security.vmMetadata" {
        odata_type => "@odata.type",
        cloud_provider => "cloudProvider",
        resource_id => "resourceId",
        subscription_id => "subscriptionId",
        vm_id => "vmId",
    }
}

// ── Evidence ───────────────────────────────────────────────────────────

/// Base of every evidence type attached to an alert.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertEvidence {
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,

    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "skip_nulls")]
    pub detailed_roles: Option<Vec<String>>,
    pub remediation_status: Option<EvidenceRemediationStatus>,
    pub remediation_status_details: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub roles: Option<Vec<EvidenceRole>>,
    #[serde(deserialize_with = "skip_nulls")]
    pub tags: Option<Vec<String>>,
    pub verdict: Option<EvidenceVerdict>,

    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    AlertEvidence = "#microsoft.graph.security.alertEvidence" {
        odata_type => "@odata.type",
        created_date_time => "createdDateTime",
        detailed_roles => "detailedRoles",
        remediation_status => "remediationStatus",
        remediation_status_details => "remediationStatusDetails",
        roles => "roles",
        tags => "tags",
        verdict => "verdict",
    }
}

/// A device onboarded to Defender for Endpoint.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceEvidence {
    #[serde(flatten)]
    pub base: AlertEvidence,

    pub azure_ad_device_id: Option<String>,
    pub defender_av_status: Option<DefenderAvStatus>,
    pub device_dns_name: Option<String>,
    pub dns_domain: Option<String>,
    pub first_seen_date_time: Option<DateTime<Utc>>,
    pub health_status: Option<DeviceHealthStatus>,
    pub host_name: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub ip_interfaces: Option<Vec<String>>,
    pub last_external_ip_address: Option<String>,
    pub last_ip_address: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub logged_on_users: Option<Vec<LoggedOnUser>>,
    /// Device id in Defender for Endpoint, not Entra ID.
    pub mde_device_id: Option<String>,
    pub nt_domain: Option<String>,
    pub onboarding_status: Option<OnboardingStatus>,
    pub os_build: Option<i64>,
    pub os_platform: Option<String>,
    pub rbac_group_id: Option<i32>,
    pub rbac_group_name: Option<String>,
    pub risk_score: Option<DeviceRiskScore>,
    pub version: Option<String>,
    pub vm_metadata: Option<VmMetadata>,
}

impl_graph_model! {
    DeviceEvidence = "#microsoft.graph.security.deviceEvidence", base: AlertEvidence {
        azure_ad_device_id => "azureAdDeviceId",
        defender_av_status => "defenderAvStatus",
        device_dns_name => "deviceDnsName",
        dns_domain => "dnsDomain",
        first_seen_date_time => "firstSeenDateTime",
        health_status => "healthStatus",
        host_name => "hostName",
        ip_interfaces => "ipInterfaces",
        last_external_ip_address => "lastExternalIpAddress",
        last_ip_address => "lastIpAddress",
        logged_on_users => "loggedOnUsers",
        mde_device_id => "mdeDeviceId",
        nt_domain => "ntDomain",
        onboarding_status => "onboardingStatus",
        os_build => "osBuild",
        os_platform => "osPlatform",
        rbac_group_id => "rbacGroupId",
        rbac_group_name => "rbacGroupName",
        risk_score => "riskScore",
        version => "version",
        vm_metadata => "vmMetadata",
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IpEvidence {
    #[serde(flatten)]
    pub base: AlertEvidence,

    /// ISO 3166 alpha-2 country code of the address.
    pub country_letter_code: Option<String>,
    pub ip_address: Option<String>,
}

impl_graph_model! {
    IpEvidence = "#microsoft.graph.security.ipEvidence", base: AlertEvidence {
        country_letter_code => "countryLetterCode",
        ip_address => "ipAddress",
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlEvidence {
    #[serde(flatten)]
    pub base: AlertEvidence,

    pub url: Option<String>,
}

impl_graph_model! {
    UrlEvidence = "#microsoft.graph.security.urlEvidence", base: AlertEvidence {
        url => "url",
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AzureResourceEvidence {
    #[serde(flatten)]
    pub base: AlertEvidence,

    pub resource_id: Option<String>,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
}

impl_graph_model! {
    AzureResourceEvidence = "#microsoft.graph.security.azureResourceEvidence", base: AlertEvidence {
        resource_id => "resourceId",
        resource_name => "resourceName",
        resource_type => "resourceType",
    }
}

/// A network interface seen on a device.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NicEvidence {
    #[serde(flatten)]
    pub base: AlertEvidence,

    pub ip_address: Option<IpEvidence>,
    pub mac_address: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub vlans: Option<Vec<String>>,
}

impl_graph_model! {
    NicEvidence = "#microsoft.graph.security.nicEvidence", base: AlertEvidence {
        ip_address => "ipAddress",
        mac_address => "macAddress",
        vlans => "vlans",
    }
}

/// An IoT/OT device seen by Defender for IoT.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IoTDeviceEvidence {
    #[serde(flatten)]
    pub base: AlertEvidence,

    pub device_id: Option<String>,
    pub device_name: Option<String>,
    pub device_page_link: Option<String>,
    pub device_sub_type: Option<String>,
    pub device_type: Option<String>,
    pub importance: Option<IoTDeviceImportanceType>,
    #[serde(rename = "ioTHub")]
    pub io_t_hub: Option<AzureResourceEvidence>,
    #[serde(rename = "ioTSecurityAgentId")]
    pub io_t_security_agent_id: Option<String>,
    pub ip_address: Option<IpEvidence>,
    pub is_authorized: Option<bool>,
    pub is_programming: Option<bool>,
    pub is_scanner: Option<bool>,
    pub mac_address: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub nics: Option<Vec<NicEvidence>>,
    pub operating_system: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub owners: Option<Vec<String>>,
    #[serde(deserialize_with = "skip_nulls")]
    pub protocols: Option<Vec<String>>,
    /// Purdue model layer, e.g. `"Process control"`.
    pub purdue_layer: Option<String>,
    pub sensor: Option<String>,
    pub serial_number: Option<String>,
    pub site: Option<String>,
    pub source: Option<String>,
    pub source_ref: Option<UrlEvidence>,
    pub zone: Option<String>,
}

impl_graph_model! {
    IoTDeviceEvidence = "#microsoft.graph.security.ioTDeviceEvidence", base: AlertEvidence {
        device_id => "deviceId",
        device_name => "deviceName",
        device_page_link => "devicePageLink",
        device_sub_type => "deviceSubType",
        device_type => "deviceType",
        importance => "importance",
        io_t_hub => "ioTHub",
        io_t_security_agent_id => "ioTSecurityAgentId",
        ip_address => "ipAddress",
        is_authorized => "isAuthorized",
        is_programming => "isProgramming",
        is_scanner => "isScanner",
        mac_address => "macAddress",
        manufacturer => "manufacturer",
        model => "model",
        nics => "nics",
        operating_system => "operatingSystem",
        owners => "owners",
        protocols => "protocols",
        purdue_layer => "purdueLayer",
        sensor => "sensor",
        serial_number => "serialNumber",
        site => "site",
        source => "source",
        source_ref => "sourceRef",
        zone => "zone",
    }
}

discriminated_union! {
    /// Any evidence item, resolved by `@odata.type`.
    pub enum AnyAlertEvidence {
        DeviceEvidence(DeviceEvidence),
        IoTDeviceEvidence(IoTDeviceEvidence),
        IpEvidence(IpEvidence),
        UrlEvidence(UrlEvidence),
        AzureResourceEvidence(AzureResourceEvidence),
        NicEvidence(NicEvidence),
        // Evidence kinds this crate does not model (files, processes, mailboxes).
        _ => AlertEvidence(AlertEvidence),
    }
}

// ── Alert ──────────────────────────────────────────────────────────────

/// A security alert from any Microsoft 365 Defender product.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alert {
    #[serde(flatten)]
    pub base: Entity,

    pub actor_display_name: Option<String>,
    /// Custom details and dynamic content of the alert. Distinct from the
    /// unmodelled-property map on `base`.
    #[serde(rename = "additionalData")]
    pub additional_properties: Option<serde_json::Map<String, serde_json::Value>>,
    pub alert_policy_id: Option<String>,
    pub alert_web_url: Option<String>,
    /// Owner of the alert, or `None` when unassigned.
    pub assigned_to: Option<String>,
    pub category: Option<String>,
    pub classification: Option<AlertClassification>,
    #[serde(deserialize_with = "skip_nulls")]
    pub comments: Option<Vec<AlertComment>>,
    pub created_date_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub detection_source: Option<DetectionSource>,
    pub detector_id: Option<String>,
    pub determination: Option<AlertDetermination>,
    #[serde(deserialize_with = "skip_nulls")]
    pub evidence: Option<Vec<AnyAlertEvidence>>,
    pub first_activity_date_time: Option<DateTime<Utc>>,
    pub incident_id: Option<String>,
    pub incident_web_url: Option<String>,
    pub last_activity_date_time: Option<DateTime<Utc>>,
    pub last_update_date_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "skip_nulls")]
    pub mitre_techniques: Option<Vec<String>>,
    pub product_name: Option<String>,
    /// Alert id as known to the producing product.
    pub provider_alert_id: Option<String>,
    pub recommended_actions: Option<String>,
    pub resolved_date_time: Option<DateTime<Utc>>,
    pub service_source: Option<ServiceSource>,
    pub severity: Option<AlertSeverity>,
    pub status: Option<AlertStatus>,
    #[serde(deserialize_with = "skip_nulls")]
    pub system_tags: Option<Vec<String>>,
    pub tenant_id: Option<String>,
    pub threat_display_name: Option<String>,
    pub threat_family_name: Option<String>,
    pub title: Option<String>,
}

impl_graph_model! {
    Alert = "#microsoft.graph.security.alert", base: Entity {
        actor_display_name => "actorDisplayName",
        additional_properties => "additionalData",
        alert_policy_id => "alertPolicyId",
        alert_web_url => "alertWebUrl",
        assigned_to => "assignedTo",
        category => "category",
        classification => "classification",
        comments => "comments",
        created_date_time => "createdDateTime",
        description => "description",
        detection_source => "detectionSource",
        detector_id => "detectorId",
        determination => "determination",
        evidence => "evidence",
        first_activity_date_time => "firstActivityDateTime",
        incident_id => "incidentId",
        incident_web_url => "incidentWebUrl",
        last_activity_date_time => "lastActivityDateTime",
        last_update_date_time => "lastUpdateDateTime",
        mitre_techniques => "mitreTechniques",
        product_name => "productName",
        provider_alert_id => "providerAlertId",
        recommended_actions => "recommendedActions",
        resolved_date_time => "resolvedDateTime",
        service_source => "serviceSource",
        severity => "severity",
        status => "status",
        system_tags => "systemTags",
        tenant_id => "tenantId",
        threat_display_name => "threatDisplayName",
        threat_family_name => "threatFamilyName",
        title => "title",
    }
}

impl Alert {
    /// Evidence items of concrete type `DeviceEvidence`.
    pub fn devices(&self) -> impl Iterator<Item = &DeviceEvidence> {
        self.evidence.iter().flatten().filter_map(|item| match item {
            AnyAlertEvidence::DeviceEvidence(device) => Some(device),
            _ => None,
        })
    }
}
