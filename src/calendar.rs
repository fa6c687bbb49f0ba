//! Outlook calendar family: calendars, their sharing permissions, and events.
//!
//! `Event` composes `OutlookItem`, which composes `Entity`, so an event
//! payload carries `id`, `changeKey` and `categories` alongside its own
//! properties in one flat JSON object.
//!
//! Reference: <https://learn.microsoft.com/en-us/graph/api/resources/calendar>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::{skip_nulls, wire_enum};
use crate::entity::Entity;
use crate::odata::AdditionalData;
use crate::parse_node::impl_graph_model;

// ── Enums ──────────────────────────────────────────────────────────────

wire_enum! {
    /// Permission level a user has on a shared calendar.
    pub enum CalendarRoleType {
        None = "none",
        FreeBusyRead = "freeBusyRead",
        LimitedRead = "limitedRead",
        Read = "read",
        Write = "write",
        DelegateWithoutPrivateEventAccess = "delegateWithoutPrivateEventAccess",
        DelegateWithPrivateEventAccess = "delegateWithPrivateEventAccess",
        Custom = "custom",
    }
}

wire_enum! {
    /// Theme color of a calendar in the Outlook UI.
    pub enum CalendarColor {
        Auto = "auto",
        LightBlue = "lightBlue",
        LightGreen = "lightGreen",
        LightOrange = "lightOrange",
        LightGray = "lightGray",
        LightYellow = "lightYellow",
        LightTeal = "lightTeal",
        LightPink = "lightPink",
        LightBrown = "lightBrown",
        LightRed = "lightRed",
        MaxColor = "maxColor",
    }
}

wire_enum! {
    pub enum OnlineMeetingProviderType {
        Unknown = "unknown",
        SkypeForBusiness = "skypeForBusiness",
        SkypeForConsumer = "skypeForConsumer",
        TeamsForBusiness = "teamsForBusiness",
    }
}

wire_enum! {
    /// How an event shows on the owner's free/busy schedule.
    pub enum FreeBusyStatus {
        Unknown = "unknown",
        Free = "free",
        Tentative = "tentative",
        Busy = "busy",
        Oof = "oof",
        WorkingElsewhere = "workingElsewhere",
    }
}

wire_enum! {
    pub enum Importance {
        Low = "low",
        Normal = "normal",
        High = "high",
    }
}

wire_enum! {
    pub enum Sensitivity {
        Normal = "normal",
        Personal = "personal",
        Private = "private",
        Confidential = "confidential",
    }
}

wire_enum! {
    /// Position of an event within a recurring series.
    pub enum EventType {
        SingleInstance = "singleInstance",
        Occurrence = "occurrence",
        Exception = "exception",
        SeriesMaster = "seriesMaster",
    }
}

wire_enum! {
    pub enum BodyType {
        Text = "text",
        Html = "html",
    }
}

// ── Complex types ──────────────────────────────────────────────────────

/// Name and SMTP address of a person or mailbox.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailAddress {
    pub address: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    EmailAddress = "#microsoft.graph.emailAddress" {
        address => "address",
        name => "name",
        odata_type => "@odata.type",
    }
}

/// A wall-clock time paired with the IANA or Windows time zone it is in.
///
/// `dateTime` has no offset on the wire (`"2017-04-15T12:00:00.0000000"`),
/// so it is kept as the string Graph sent.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateTimeTimeZone {
    pub date_time: Option<String>,
    pub time_zone: Option<String>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    DateTimeTimeZone = "#microsoft.graph.dateTimeTimeZone" {
        date_time => "dateTime",
        time_zone => "timeZone",
        odata_type => "@odata.type",
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemBody {
    pub content: Option<String>,
    pub content_type: Option<BodyType>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    ItemBody = "#microsoft.graph.itemBody" {
        content => "content",
        content_type => "contentType",
        odata_type => "@odata.type",
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: Option<EmailAddress>,
    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    Recipient = "#microsoft.graph.recipient" {
        email_address => "emailAddress",
        odata_type => "@odata.type",
    }
}

// ── Entities ───────────────────────────────────────────────────────────

/// A container for events: a user's calendar or a group's calendar.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Calendar {
    #[serde(flatten)]
    pub base: Entity,

    /// Online meeting services usable for meetings in this calendar.
    #[serde(deserialize_with = "skip_nulls")]
    pub allowed_online_meeting_providers: Option<Vec<OnlineMeetingProviderType>>,

    /// Users the calendar is shared with.
    #[serde(deserialize_with = "skip_nulls")]
    pub calendar_permissions: Option<Vec<CalendarPermission>>,

    /// `true` if the signed-in user can write to the calendar.
    pub can_edit: Option<bool>,

    pub can_share: Option<bool>,

    pub can_view_private_items: Option<bool>,

    /// Version of the calendar object; changes whenever the calendar does.
    pub change_key: Option<String>,

    pub color: Option<CalendarColor>,

    pub default_online_meeting_provider: Option<OnlineMeetingProviderType>,

    /// Events in the calendar. Navigation property.
    #[serde(deserialize_with = "skip_nulls")]
    pub events: Option<Vec<Event>>,

    /// Color in `#RRGGBB` form; empty when no color is set.
    pub hex_color: Option<String>,

    pub is_default_calendar: Option<bool>,

    pub is_removable: Option<bool>,

    /// Whether meeting responses are tallied for events in this calendar.
    pub is_tallying_responses: Option<bool>,

    pub name: Option<String>,

    /// The user who created or added the calendar.
    pub owner: Option<EmailAddress>,
}

impl_graph_model! {
    Calendar = "#microsoft.graph.calendar", base: Entity {
        allowed_online_meeting_providers => "allowedOnlineMeetingProviders",
        calendar_permissions => "calendarPermissions",
        can_edit => "canEdit",
        can_share => "canShare",
        can_view_private_items => "canViewPrivateItems",
        change_key => "changeKey",
        color => "color",
        default_online_meeting_provider => "defaultOnlineMeetingProvider",
        events => "events",
        hex_color => "hexColor",
        is_default_calendar => "isDefaultCalendar",
        is_removable => "isRemovable",
        is_tallying_responses => "isTallyingResponses",
        name => "name",
        owner => "owner",
    }
}

/// A user's permission on a shared calendar.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarPermission {
    #[serde(flatten)]
    pub base: Entity,

    /// Roles the sharee may be granted, determined by the sharing context.
    #[serde(deserialize_with = "skip_nulls")]
    pub allowed_roles: Option<Vec<CalendarRoleType>>,

    pub email_address: Option<EmailAddress>,

    pub is_inside_organization: Option<bool>,

    /// `false` for the owner's own entry and for "My Organization".
    pub is_removable: Option<bool>,

    pub role: Option<CalendarRoleType>,
}

impl_graph_model! {
    CalendarPermission = "#microsoft.graph.calendarPermission", base: Entity {
        allowed_roles => "allowedRoles",
        email_address => "emailAddress",
        is_inside_organization => "isInsideOrganization",
        is_removable => "isRemovable",
        role => "role",
    }
}

/// Common base of Outlook items (messages, events, contacts).
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutlookItem {
    #[serde(flatten)]
    pub base: Entity,

    #[serde(deserialize_with = "skip_nulls")]
    pub categories: Option<Vec<String>>,

    pub change_key: Option<String>,

    pub created_date_time: Option<DateTime<Utc>>,

    pub last_modified_date_time: Option<DateTime<Utc>>,
}

impl_graph_model! {
    OutlookItem = "#microsoft.graph.outlookItem", base: Entity {
        categories => "categories",
        change_key => "changeKey",
        created_date_time => "createdDateTime",
        last_modified_date_time => "lastModifiedDateTime",
    }
}

/// An event in a calendar.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(flatten)]
    pub base: OutlookItem,

    pub allow_new_time_proposals: Option<bool>,
    pub body: Option<ItemBody>,
    pub body_preview: Option<String>,
    pub end: Option<DateTimeTimeZone>,
    pub has_attachments: Option<bool>,
    pub hide_attendees: Option<bool>,
    #[serde(rename = "iCalUId")]
    pub ical_uid: Option<String>,
    pub importance: Option<Importance>,
    pub is_all_day: Option<bool>,
    pub is_cancelled: Option<bool>,
    pub is_draft: Option<bool>,
    pub is_online_meeting: Option<bool>,
    pub is_organizer: Option<bool>,
    pub is_reminder_on: Option<bool>,
    pub online_meeting_provider: Option<OnlineMeetingProviderType>,
    pub online_meeting_url: Option<String>,
    pub organizer: Option<Recipient>,
    /// Start time of an occurrence before it was moved, for exceptions.
    pub original_start: Option<DateTime<Utc>>,
    pub reminder_minutes_before_start: Option<i32>,
    pub response_requested: Option<bool>,
    pub sensitivity: Option<Sensitivity>,
    pub series_master_id: Option<String>,
    pub show_as: Option<FreeBusyStatus>,
    pub start: Option<DateTimeTimeZone>,
    pub subject: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub web_link: Option<String>,
}

impl_graph_model! {
    Event = "#microsoft.graph.event", base: OutlookItem {
        allow_new_time_proposals => "allowNewTimeProposals",
        body => "body",
        body_preview => "bodyPreview",
        end => "end",
        has_attachments => "hasAttachments",
        hide_attendees => "hideAttendees",
        ical_uid => "iCalUId",
        importance => "importance",
        is_all_day => "isAllDay",
        is_cancelled => "isCancelled",
        is_draft => "isDraft",
        is_online_meeting => "isOnlineMeeting",
        is_organizer => "isOrganizer",
        is_reminder_on => "isReminderOn",
        online_meeting_provider => "onlineMeetingProvider",
        online_meeting_url => "onlineMeetingUrl",
        organizer => "organizer",
        original_start => "originalStart",
        reminder_minutes_before_start => "reminderMinutesBeforeStart",
        response_requested => "responseRequested",
        sensitivity => "sensitivity",
        series_master_id => "seriesMasterId",
        show_as => "showAs",
        start => "start",
        subject => "subject",
        transaction_id => "transactionId",
        event_type => "type",
        web_link => "webLink",
    }
}
