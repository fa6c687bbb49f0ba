//! The `Entity` base record and the entity factory.
//!
//! Every Graph entity type composes `Entity` (directly or through an
//! intermediate base such as `OutlookItem` or `MobileApp`) as a flattened
//! `base` field, so `id` and `@odata.type` sit in the same JSON object as the
//! derived properties.
//!
//! [`GraphEntity`] is the polymorphic factory: given any entity payload it
//! builds the concrete type named by `@odata.type`, or a plain [`Entity`]
//! when the tag is missing or unknown.

use serde::{Deserialize, Serialize};

use crate::calendar::{Calendar, CalendarPermission, Event, OutlookItem};
use crate::device::{
    MobileApp, MobileLobApp, WebApp, WindowsProtectionState, WindowsUniversalAppX,
};
use crate::learning::LearningContent;
use crate::odata::{AdditionalData, discriminated_union};
use crate::parse_node::{Parsable, impl_graph_model};
use crate::security::Alert;
use crate::todo::TodoTask;

/// A model with a fixed `@odata.type` discriminator.
///
/// Implemented by every entity and complex type through
/// `impl_graph_model!`; derived records delegate to their `base`.
pub trait GraphModel: Parsable {
    /// The discriminator naming this type on the wire.
    const ODATA_TYPE: &'static str;

    /// The discriminator carried by this instance, if any.
    fn odata_type(&self) -> Option<&str>;

    fn set_odata_type(&mut self, value: Option<String>);

    /// An empty record with `@odata.type` preset to [`Self::ODATA_TYPE`].
    fn tagged() -> Self {
        let mut model = Self::default();
        model.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        model
    }
}

/// Base of every Graph entity.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Unique identifier of the entity. Read-only.
    pub id: Option<String>,

    #[serde(rename = "@odata.type")]
    pub odata_type: Option<String>,

    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl_graph_model! {
    Entity = "#microsoft.graph.entity" {
        id => "id",
        odata_type => "@odata.type",
    }
}

discriminated_union! {
    /// Any entity, resolved to its concrete type by `@odata.type`.
    pub enum GraphEntity {
        Calendar(Calendar),
        CalendarPermission(CalendarPermission),
        OutlookItem(OutlookItem),
        Event(Event),
        TodoTask(TodoTask),
        LearningContent(LearningContent),
        MobileApp(MobileApp),
        WebApp(WebApp),
        MobileLobApp(MobileLobApp),
        WindowsUniversalAppX(WindowsUniversalAppX),
        WindowsProtectionState(WindowsProtectionState),
        SecurityAlert(Alert),
        // Untagged payloads and tags this crate does not model.
        _ => Entity(Entity),
    }
}

impl GraphEntity {
    /// The `id` of the inner entity.
    pub fn id(&self) -> Option<&str> {
        match self {
            GraphEntity::Calendar(m) => m.base.id.as_deref(),
            GraphEntity::CalendarPermission(m) => m.base.id.as_deref(),
            GraphEntity::OutlookItem(m) => m.base.id.as_deref(),
            GraphEntity::Event(m) => m.base.base.id.as_deref(),
            GraphEntity::TodoTask(m) => m.base.id.as_deref(),
            GraphEntity::LearningContent(m) => m.base.id.as_deref(),
            GraphEntity::MobileApp(m) => m.base.id.as_deref(),
            GraphEntity::WebApp(m) => m.base.base.id.as_deref(),
            GraphEntity::MobileLobApp(m) => m.base.base.id.as_deref(),
            GraphEntity::WindowsUniversalAppX(m) => m.base.base.base.id.as_deref(),
            GraphEntity::WindowsProtectionState(m) => m.base.id.as_deref(),
            GraphEntity::SecurityAlert(m) => m.base.id.as_deref(),
            GraphEntity::Entity(m) => m.id.as_deref(),
        }
    }
}
