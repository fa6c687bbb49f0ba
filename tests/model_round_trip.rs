//! Round-trip tests for every model.
//!
//! Each test feeds a payload that sets every property in the model's
//! field-deserializer table and checks that:
//! - serde and the table-driven parser build the same value;
//! - serializing writes the payload back unchanged;
//! - the serialized keys are exactly the table's keys;
//! - an empty object decodes to all-`None` and writes back as `{}`.
//!
//! Timestamps use whole seconds and floats are exactly representable as
//! `f32`, so the written JSON compares equal to the input.

use std::fmt::Debug;

use graph_models::calendar::{
    Calendar, CalendarPermission, DateTimeTimeZone, EmailAddress, Event, ItemBody, OutlookItem,
    Recipient,
};
use graph_models::call_records::MediaStream;
use graph_models::device::{
    MobileApp, MobileLobApp, WebApp, WindowsProtectionState, WindowsUniversalAppX,
};
use graph_models::entity::Entity;
use graph_models::learning::LearningContent;
use graph_models::parse_node::{Parsable, parse_object};
use graph_models::security::{
    Alert, AlertComment, AlertEvidence, AzureResourceEvidence, DeviceEvidence, IoTDeviceEvidence,
    IpEvidence, LoggedOnUser, NicEvidence, UrlEvidence, VmMetadata,
};
use graph_models::todo::TodoTask;
use serde_json::{Value, json};

// =============================================================================
// HELPERS
// =============================================================================

fn assert_round_trip<T: Parsable + PartialEq + Debug>(payload: Value) {
    let type_name = std::any::type_name::<T>();

    let via_serde: T = serde_json::from_value(payload.clone()).unwrap();
    let via_table: T = parse_object(payload.clone()).unwrap();
    assert_eq!(via_table, via_serde, "{type_name}: table and serde disagree");
    assert!(
        via_serde.additional_data().is_empty(),
        "{type_name}: every payload key should be modelled, leftover {:?}",
        via_serde.additional_data()
    );

    let written = serde_json::to_value(&via_serde).unwrap();
    assert_eq!(written, payload, "{type_name}: serialize changed the payload");

    let mut keys: Vec<&str> = written
        .as_object()
        .expect("models serialize as objects")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, T::wire_fields(), "{type_name}: key set differs from table");

    let empty: T = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, T::default(), "{type_name}: absent fields should be None");
    assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
    assert_eq!(parse_object::<T>(json!({})).unwrap(), T::default());
}

const T1: &str = "2024-03-01T09:30:00Z";
const T2: &str = "2024-03-02T17:45:10Z";

fn email() -> Value {
    json!({"@odata.type": "#microsoft.graph.emailAddress", "address": "adele@contoso.com", "name": "Adele Vance"})
}

fn zoned(date_time: &str) -> Value {
    json!({"@odata.type": "#microsoft.graph.dateTimeTimeZone", "dateTime": date_time, "timeZone": "Pacific Standard Time"})
}

fn body() -> Value {
    json!({"@odata.type": "#microsoft.graph.itemBody", "content": "<p>Agenda</p>", "contentType": "html"})
}

fn alert_evidence_fields(odata_type: &str) -> serde_json::Map<String, Value> {
    let Value::Object(map) = json!({
        "@odata.type": odata_type,
        "createdDateTime": T1,
        "detailedRoles": ["PrimaryDevice"],
        "remediationStatus": "remediated",
        "remediationStatusDetails": "quarantined",
        "roles": ["compromised", "attacked"],
        "tags": ["critical-asset"],
        "verdict": "malicious"
    }) else {
        unreachable!()
    };
    map
}

fn with_evidence_base(odata_type: &str, own: Value) -> Value {
    let mut map = alert_evidence_fields(odata_type);
    let Value::Object(own) = own else {
        panic!("own fields must be an object")
    };
    map.extend(own);
    Value::Object(map)
}

// =============================================================================
// ENTITY AND CALENDAR
// =============================================================================

#[test]
fn entity_round_trips() {
    assert_round_trip::<Entity>(json!({"@odata.type": "#microsoft.graph.entity", "id": "e-1"}));
}

#[test]
fn complex_types_round_trip() {
    assert_round_trip::<EmailAddress>(email());
    assert_round_trip::<DateTimeTimeZone>(zoned("2024-03-01T09:30:00.0000000"));
    assert_round_trip::<ItemBody>(body());
    assert_round_trip::<Recipient>(json!({
        "@odata.type": "#microsoft.graph.recipient",
        "emailAddress": email()
    }));
}

#[test]
fn calendar_round_trips() {
    assert_round_trip::<Calendar>(json!({
        "@odata.type": "#microsoft.graph.calendar",
        "id": "AAMkAGViNDU7zAAAAAGtlAAA=",
        "allowedOnlineMeetingProviders": ["teamsForBusiness", "skypeForBusiness"],
        "calendarPermissions": [
            {"@odata.type": "#microsoft.graph.calendarPermission", "id": "perm-1", "role": "read"}
        ],
        "canEdit": true,
        "canShare": true,
        "canViewPrivateItems": false,
        "changeKey": "nfZyf7VcrEKLNoU37KWlkQAAA0x0+w==",
        "color": "lightGreen",
        "defaultOnlineMeetingProvider": "teamsForBusiness",
        "events": [
            {"@odata.type": "#microsoft.graph.event", "id": "evt-1", "subject": "Standup"}
        ],
        "hexColor": "#8bc34a",
        "isDefaultCalendar": true,
        "isRemovable": false,
        "isTallyingResponses": true,
        "name": "Calendar",
        "owner": email()
    }));
}

#[test]
fn calendar_permission_round_trips() {
    assert_round_trip::<CalendarPermission>(json!({
        "@odata.type": "#microsoft.graph.calendarPermission",
        "id": "RGVmYXVsdA==",
        "allowedRoles": ["none", "freeBusyRead", "limitedRead", "read", "write"],
        "emailAddress": email(),
        "isInsideOrganization": true,
        "isRemovable": true,
        "role": "freeBusyRead"
    }));
}

#[test]
fn outlook_item_round_trips() {
    assert_round_trip::<OutlookItem>(json!({
        "@odata.type": "#microsoft.graph.outlookItem",
        "id": "item-1",
        "categories": ["Red category"],
        "changeKey": "ck",
        "createdDateTime": T1,
        "lastModifiedDateTime": T2
    }));
}

#[test]
fn event_round_trips() {
    assert_round_trip::<Event>(json!({
        "@odata.type": "#microsoft.graph.event",
        "id": "AAMkAGIAAAoZDOFAAA=",
        "categories": [],
        "changeKey": "ZlnW4RIAV06KYYwlrfNZvQAAKGWwbw==",
        "createdDateTime": T1,
        "lastModifiedDateTime": T2,
        "allowNewTimeProposals": true,
        "body": body(),
        "bodyPreview": "Agenda",
        "end": zoned("2024-03-04T10:00:00.0000000"),
        "hasAttachments": false,
        "hideAttendees": false,
        "iCalUId": "040000008200E00074C5B7101A82E008",
        "importance": "normal",
        "isAllDay": false,
        "isCancelled": false,
        "isDraft": false,
        "isOnlineMeeting": true,
        "isOrganizer": true,
        "isReminderOn": true,
        "onlineMeetingProvider": "teamsForBusiness",
        "onlineMeetingUrl": "https://teams.microsoft.com/l/meetup-join/abc",
        "organizer": {"@odata.type": "#microsoft.graph.recipient", "emailAddress": email()},
        "originalStart": T1,
        "reminderMinutesBeforeStart": 15,
        "responseRequested": true,
        "sensitivity": "normal",
        "seriesMasterId": "AAMkAGIAAAoZDOFBBB=",
        "showAs": "busy",
        "start": zoned("2024-03-04T09:30:00.0000000"),
        "subject": "Plan summer company picnic",
        "transactionId": "7E163156-7762-4BEB-A1C6-729EA81755A7",
        "type": "occurrence",
        "webLink": "https://outlook.office365.com/owa/?itemid=AAMkAGI"
    }));
}

// =============================================================================
// TO DO TASKS AND LEARNING CONTENT
// =============================================================================

#[test]
fn todo_task_round_trips() {
    assert_round_trip::<TodoTask>(json!({
        "@odata.type": "#microsoft.graph.todoTask",
        "id": "AlMKXwbQAAAJws6wcAAAA=",
        "body": {"@odata.type": "#microsoft.graph.itemBody", "content": "", "contentType": "text"},
        "bodyLastModifiedDateTime": T1,
        "categories": ["Important"],
        "completedDateTime": zoned("2024-03-05T00:00:00.0000000"),
        "createdDateTime": T1,
        "dueDateTime": zoned("2024-03-06T00:00:00.0000000"),
        "hasAttachments": false,
        "importance": "high",
        "isReminderOn": true,
        "lastModifiedDateTime": T2,
        "reminderDateTime": zoned("2024-03-05T08:00:00.0000000"),
        "startDateTime": zoned("2024-03-01T00:00:00.0000000"),
        "status": "waitingOnOthers",
        "title": "A new task"
    }));
}

#[test]
fn learning_content_round_trips() {
    assert_round_trip::<LearningContent>(json!({
        "@odata.type": "#microsoft.graph.learningContent",
        "id": "77029588-a660-46b6-ba58-3ce4d21d5678",
        "additionalTags": ["Create virtual machine"],
        "contentWebUrl": "https://contoso.com/courses/LP4471",
        "contributors": ["Lina Wagner"],
        "createdDateTime": T1,
        "description": "Create a VM in the portal",
        "duration": "PT20M",
        "externalId": "LP4471",
        "format": "Book",
        "isActive": true,
        "isPremium": false,
        "isSearchable": true,
        "languageTag": "en-us",
        "lastModifiedDateTime": T2,
        "level": "advanced",
        "numberOfPages": 9,
        "skillTags": ["Machine learning"],
        "sourceName": "Contoso",
        "thumbnailWebUrl": "https://contoso.com/thumb.png",
        "title": "Manage classes in Teams"
    }));
}

// =============================================================================
// DEVICE
// =============================================================================

#[test]
fn windows_protection_state_round_trips() {
    assert_round_trip::<WindowsProtectionState>(json!({
        "@odata.type": "#microsoft.graph.windowsProtectionState",
        "id": "a6ea6b53-6b53-a6ea-536b-eaa6536beaa6",
        "antiMalwareVersion": "4.18.2402.1",
        "deviceState": "fullScanPending,rebootPending",
        "engineVersion": "1.1.24020.3",
        "fullScanOverdue": false,
        "fullScanRequired": true,
        "isVirtualMachine": false,
        "lastFullScanDateTime": T1,
        "lastFullScanSignatureVersion": "1.405.0.0",
        "lastQuickScanDateTime": T2,
        "lastQuickScanSignatureVersion": "1.405.1.0",
        "lastReportedDateTime": T2,
        "malwareProtectionEnabled": true,
        "networkInspectionSystemEnabled": true,
        "productStatus": "serviceNotRunning,avSignaturesOutOfDate,platformUpdateInProgress",
        "quickScanOverdue": false,
        "realTimeProtectionEnabled": true,
        "rebootRequired": true,
        "signatureUpdateOverdue": false,
        "signatureVersion": "1.405.1.0",
        "tamperProtectionEnabled": true
    }));
}

fn mobile_app_fields(odata_type: &str) -> serde_json::Map<String, Value> {
    let Value::Object(map) = json!({
        "@odata.type": odata_type,
        "id": "app-1",
        "createdDateTime": T1,
        "description": "Expense reporting",
        "developer": "Contoso Dev",
        "displayName": "Contoso Expenses",
        "informationUrl": "https://contoso.com/info",
        "isFeatured": true,
        "lastModifiedDateTime": T2,
        "notes": "Pilot",
        "owner": "IT",
        "privacyInformationUrl": "https://contoso.com/privacy",
        "publisher": "Contoso",
        "publishingState": "published"
    }) else {
        unreachable!()
    };
    map
}

fn with_app_base(odata_type: &str, own: Value) -> Value {
    let mut map = mobile_app_fields(odata_type);
    let Value::Object(own) = own else {
        panic!("own fields must be an object")
    };
    map.extend(own);
    Value::Object(map)
}

#[test]
fn mobile_app_round_trips() {
    assert_round_trip::<MobileApp>(Value::Object(mobile_app_fields("#microsoft.graph.mobileApp")));
}

#[test]
fn web_app_round_trips() {
    assert_round_trip::<WebApp>(with_app_base(
        "#microsoft.graph.webApp",
        json!({"appUrl": "https://expenses.contoso.com", "useManagedBrowser": true}),
    ));
}

#[test]
fn mobile_lob_app_round_trips() {
    assert_round_trip::<MobileLobApp>(with_app_base(
        "#microsoft.graph.mobileLobApp",
        json!({"committedContentVersion": "2", "fileName": "expenses.msix", "size": 52428800}),
    ));
}

#[test]
fn windows_universal_appx_round_trips() {
    assert_round_trip::<WindowsUniversalAppX>(with_app_base(
        "#microsoft.graph.windowsUniversalAppX",
        json!({
            "committedContentVersion": "2",
            "fileName": "expenses.appxbundle",
            "size": 52428800,
            "applicableArchitectures": "x86,x64,arm64",
            "applicableDeviceTypes": "desktop,holographic",
            "identityName": "Contoso.Expenses",
            "identityPublisherHash": "8wekyb3d8bbwe",
            "identityResourceIdentifier": "neutral",
            "identityVersion": "1.4.0.0",
            "isBundle": true
        }),
    ));
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn alert_support_types_round_trip() {
    assert_round_trip::<AlertComment>(json!({
        "@odata.type": "#microsoft.graph.security.alertComment",
        "comment": "Escalated to tier 2",
        "createdByDisplayName": "Analyst",
        "createdDateTime": T1
    }));
    assert_round_trip::<LoggedOnUser>(json!({
        "@odata.type": "#microsoft.graph.security.loggedOnUser",
        "accountName": "yonif",
        "domainName": "CONTOSO"
    }));
    assert_round_trip::<VmMetadata>(json!({
        "@odata.type": "#microsoft.graph.security.vmMetadata",
        "cloudProvider": "azure",
        "resourceId": "/subscriptions/sub-1/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/vm1",
        "subscriptionId": "sub-1",
        "vmId": "vm-1"
    }));
}

#[test]
fn alert_evidence_round_trips() {
    assert_round_trip::<AlertEvidence>(Value::Object(alert_evidence_fields(
        "#microsoft.graph.security.alertEvidence",
    )));
}

#[test]
fn device_evidence_round_trips() {
    assert_round_trip::<DeviceEvidence>(with_evidence_base(
        "#microsoft.graph.security.deviceEvidence",
        json!({
            "azureAdDeviceId": "f18bd540-d5e4-46e0-8ddd-3d03a59e4e14",
            "defenderAvStatus": "updated",
            "deviceDnsName": "yonif-lap3.middleeast.corp.microsoft.com",
            "dnsDomain": "middleeast.corp.microsoft.com",
            "firstSeenDateTime": T1,
            "healthStatus": "active",
            "hostName": "yonif-lap3",
            "ipInterfaces": ["1.1.1.1"],
            "lastExternalIpAddress": "2.2.2.2",
            "lastIpAddress": "10.0.0.4",
            "loggedOnUsers": [{"accountName": "yonif", "domainName": "MIDDLEEAST"}],
            "mdeDeviceId": "73e7e2de709dff64ef64b1d0c30e67fab63279db",
            "ntDomain": "MIDDLEEAST",
            "onboardingStatus": "onboarded",
            "osBuild": 22424,
            "osPlatform": "Windows10",
            "rbacGroupId": 75,
            "rbacGroupName": "UnassignedGroup",
            "riskScore": "medium",
            "version": "Other",
            "vmMetadata": {"cloudProvider": "azure", "vmId": "vm-1"}
        }),
    ));
}

#[test]
fn small_evidence_types_round_trip() {
    assert_round_trip::<IpEvidence>(with_evidence_base(
        "#microsoft.graph.security.ipEvidence",
        json!({"countryLetterCode": "US", "ipAddress": "203.0.113.5"}),
    ));
    assert_round_trip::<UrlEvidence>(with_evidence_base(
        "#microsoft.graph.security.urlEvidence",
        json!({"url": "https://contoso.example/payload"}),
    ));
    assert_round_trip::<AzureResourceEvidence>(with_evidence_base(
        "#microsoft.graph.security.azureResourceEvidence",
        json!({
            "resourceId": "/subscriptions/sub-1/resourceGroups/rg/providers/Microsoft.Devices/IotHubs/hub",
            "resourceName": "hub",
            "resourceType": "IotHubs"
        }),
    ));
    assert_round_trip::<NicEvidence>(with_evidence_base(
        "#microsoft.graph.security.nicEvidence",
        json!({
            "ipAddress": {"ipAddress": "10.1.0.9"},
            "macAddress": "00-15-5D-01-02-03",
            "vlans": ["100", "200"]
        }),
    ));
}

#[test]
fn iot_device_evidence_round_trips() {
    assert_round_trip::<IoTDeviceEvidence>(with_evidence_base(
        "#microsoft.graph.security.ioTDeviceEvidence",
        json!({
            "deviceId": "iot-17",
            "deviceName": "PLC-17",
            "devicePageLink": "https://security.microsoft.com/device/iot-17",
            "deviceSubType": "PLC",
            "deviceType": "Industrial",
            "importance": "high",
            "ioTHub": {"resourceName": "hub"},
            "ioTSecurityAgentId": "agent-7",
            "ipAddress": {"ipAddress": "10.1.0.17"},
            "isAuthorized": true,
            "isProgramming": false,
            "isScanner": false,
            "macAddress": "00-15-5D-01-02-17",
            "manufacturer": "Contoso Automation",
            "model": "CA-9000",
            "nics": [{"macAddress": "00-15-5D-01-02-17"}],
            "operatingSystem": "VxWorks",
            "owners": ["ot-team"],
            "protocols": ["Modbus", "S7"],
            "purdueLayer": "Process control",
            "sensor": "sensor-3",
            "serialNumber": "SN-0017",
            "site": "Plant A",
            "source": "Microsoft Defender for IoT",
            "sourceRef": {"url": "https://security.microsoft.com/iot/17"},
            "zone": "Line 2"
        }),
    ));
}

#[test]
fn alert_round_trips() {
    assert_round_trip::<Alert>(json!({
        "@odata.type": "#microsoft.graph.security.alert",
        "id": "da637578995287051192_756343937",
        "actorDisplayName": "Nobelium",
        "additionalData": {"detectionUri": "https://contoso.example/rule/42", "score": 7},
        "alertPolicyId": "policy-1",
        "alertWebUrl": "https://security.microsoft.com/alerts/da637578995287051192_756343937",
        "assignedTo": "secAdmin@contoso.com",
        "category": "DefenseEvasion",
        "classification": "truePositive",
        "comments": [
            {"comment": "Demo comment", "createdByDisplayName": "Analyst", "createdDateTime": T1}
        ],
        "createdDateTime": T1,
        "description": "A hidden file has been launched.",
        "detectionSource": "antivirus",
        "detectorId": "e0da400f-affd-43ef-b1d5-afc2eb6f2756",
        "determination": "malware",
        "evidence": [
            {
                "@odata.type": "#microsoft.graph.security.deviceEvidence",
                "verdict": "unknown",
                "mdeDeviceId": "73e7e2de709dff64ef64b1d0c30e67fab63279db"
            },
            {
                "@odata.type": "#microsoft.graph.security.urlEvidence",
                "url": "https://contoso.example/payload"
            }
        ],
        "firstActivityDateTime": T1,
        "incidentId": "28282",
        "incidentWebUrl": "https://security.microsoft.com/incidents/28282",
        "lastActivityDateTime": T2,
        "lastUpdateDateTime": T2,
        "mitreTechniques": ["T1564.001"],
        "productName": "Microsoft Defender for Endpoint",
        "providerAlertId": "da637578995287051192_756343937",
        "recommendedActions": "Collect artifacts",
        "resolvedDateTime": T2,
        "serviceSource": "microsoftDefenderForEndpoint",
        "severity": "high",
        "status": "resolved",
        "systemTags": ["Defender Experts"],
        "tenantId": "b3c1b5fc-828c-45fa-a1e1-10d74f6d6e9c",
        "threatDisplayName": "Trojan:Win32/Wacatac",
        "threatFamilyName": "Wacatac",
        "title": "Suspicious execution of hidden file"
    }));
}

// =============================================================================
// CALL RECORDS
// =============================================================================

#[test]
fn media_stream_round_trips() {
    assert_round_trip::<MediaStream>(json!({
        "@odata.type": "#microsoft.graph.callRecords.mediaStream",
        "audioCodec": "silk",
        "averageAudioDegradation": 0.5,
        "averageAudioNetworkJitter": "PT0.043S",
        "averageBandwidthEstimate": 9965083,
        "averageFreezeDuration": "PT0.2S",
        "averageJitter": "PT0.012S",
        "averagePacketLossRate": 0.25,
        "averageRatioOfConcealedSamples": 0.125,
        "averageReceivedFrameRate": 29.75,
        "averageRoundTripTime": "PT0.08S",
        "averageVideoFrameLossPercentage": 0.0625,
        "averageVideoFrameRate": 30.0,
        "averageVideoPacketLossRate": 0.03125,
        "endDateTime": T2,
        "isAudioForwardErrorCorrectionUsed": true,
        "lowFrameRateRatio": 0.5,
        "lowVideoProcessingCapabilityRatio": 0.25,
        "maxAudioNetworkJitter": "PT0.1S",
        "maxJitter": "PT0.05S",
        "maxPacketLossRate": 0.75,
        "maxRatioOfConcealedSamples": 0.375,
        "maxRoundTripTime": "PT0.3S",
        "packetUtilization": 67,
        "postForwardErrorCorrectionPacketLossRate": 0.015625,
        "rmsFreezeDuration": "PT0.4S",
        "startDateTime": T1,
        "streamDirection": "calleeToCaller",
        "streamId": "1504545584",
        "videoCodec": "h264",
        "wasMediaBypassed": false
    }));
}
