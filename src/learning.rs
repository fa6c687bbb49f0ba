//! Viva Learning content published by a learning provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::{skip_nulls, wire_enum};
use crate::entity::Entity;
use crate::parse_node::impl_graph_model;

wire_enum! {
    /// Difficulty of a learning course.
    pub enum Level {
        Beginner = "beginner",
        Intermediate = "intermediate",
        Advanced = "advanced",
        UnknownFutureValue = "unknownFutureValue",
    }
}

/// Metadata for a course or item in a provider's catalog.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LearningContent {
    #[serde(flatten)]
    pub base: Entity,

    #[serde(deserialize_with = "skip_nulls")]
    pub additional_tags: Option<Vec<String>>,
    /// Deep link to the content on the provider's site. Required on create.
    pub content_web_url: Option<String>,
    #[serde(deserialize_with = "skip_nulls")]
    pub contributors: Option<Vec<String>>,
    pub created_date_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
    /// ISO 8601 duration, e.g. `"PT1H30M"`.
    pub duration: Option<String>,
    /// Provider-side identifier; unique per provider.
    pub external_id: Option<String>,
    pub format: Option<String>,
    /// Inactive content is hidden from learners. Defaults to `true` server-side.
    pub is_active: Option<bool>,
    pub is_premium: Option<bool>,
    pub is_searchable: Option<bool>,
    /// BCP 47 language tag, e.g. `"en-us"`.
    pub language_tag: Option<String>,
    pub last_modified_date_time: Option<DateTime<Utc>>,
    pub level: Option<Level>,
    pub number_of_pages: Option<i32>,
    #[serde(deserialize_with = "skip_nulls")]
    pub skill_tags: Option<Vec<String>>,
    pub source_name: Option<String>,
    pub thumbnail_web_url: Option<String>,
    pub title: Option<String>,
}

impl_graph_model! {
    LearningContent = "#microsoft.graph.learningContent", base: Entity {
        additional_tags => "additionalTags",
        content_web_url => "contentWebUrl",
        contributors => "contributors",
        created_date_time => "createdDateTime",
        description => "description",
        duration => "duration",
        external_id => "externalId",
        format => "format",
        is_active => "isActive",
        is_premium => "isPremium",
        is_searchable => "isSearchable",
        language_tag => "languageTag",
        last_modified_date_time => "lastModifiedDateTime",
        level => "level",
        number_of_pages => "numberOfPages",
        skill_tags => "skillTags",
        source_name => "sourceName",
        thumbnail_web_url => "thumbnailWebUrl",
        title => "title",
    }
}
