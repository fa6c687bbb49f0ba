//! Microsoft To Do tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{DateTimeTimeZone, Importance, ItemBody};
use crate::codec::{skip_nulls, wire_enum};
use crate::entity::Entity;
use crate::parse_node::impl_graph_model;

wire_enum! {
    pub enum TaskStatus {
        NotStarted = "notStarted",
        InProgress = "inProgress",
        Completed = "completed",
        WaitingOnOthers = "waitingOnOthers",
        Deferred = "deferred",
    }
}

/// A task in a To Do task list.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TodoTask {
    #[serde(flatten)]
    pub base: Entity,

    pub body: Option<ItemBody>,
    pub body_last_modified_date_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "skip_nulls")]
    pub categories: Option<Vec<String>>,
    pub completed_date_time: Option<DateTimeTimeZone>,
    pub created_date_time: Option<DateTime<Utc>>,
    pub due_date_time: Option<DateTimeTimeZone>,
    pub has_attachments: Option<bool>,
    pub importance: Option<Importance>,
    pub is_reminder_on: Option<bool>,
    pub last_modified_date_time: Option<DateTime<Utc>>,
    pub reminder_date_time: Option<DateTimeTimeZone>,
    pub start_date_time: Option<DateTimeTimeZone>,
    pub status: Option<TaskStatus>,
    pub title: Option<String>,
}

impl_graph_model! {
    TodoTask = "#microsoft.graph.todoTask", base: Entity {
        body => "body",
        body_last_modified_date_time => "bodyLastModifiedDateTime",
        categories => "categories",
        completed_date_time => "completedDateTime",
        created_date_time => "createdDateTime",
        due_date_time => "dueDateTime",
        has_attachments => "hasAttachments",
        importance => "importance",
        is_reminder_on => "isReminderOn",
        last_modified_date_time => "lastModifiedDateTime",
        reminder_date_time => "reminderDateTime",
        start_date_time => "startDateTime",
        status => "status",
        title => "title",
    }
}
