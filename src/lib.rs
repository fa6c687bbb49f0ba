//! Typed Microsoft Graph models: enum codecs, entity records, field
//! deserializer tables and `@odata.type` polymorphism.
//!
//! Payloads decode either through serde (`serde_json::from_value`) or
//! through each model's field-deserializer table
//! ([`parse_node::parse_object`]); both paths agree. Polymorphic payloads go
//! through a discriminated union such as [`entity::GraphEntity`], which picks
//! the concrete type named by `@odata.type` and falls back to the base type
//! for tags it does not know.
//!
//! # Modules
//!
//! - [`codec`] — Plain and bitmask enum codecs (`wire_enum!`, `wire_flags!`).
//! - [`error`] — Typed error hierarchy (`GraphError`) for all library operations.
//! - [`parse_node`] — Field-deserializer tables and the table-driven parser.
//! - [`odata`] — Discriminator lookup, `ODataList`, `discriminated_union!`.
//! - [`entity`] — `Entity`, `GraphModel` and the `GraphEntity` factory.
//! - [`calendar`] — Calendars, permissions and events.
//! - [`todo`] — To Do tasks.
//! - [`learning`] — Viva Learning content.
//! - [`device`] — Defender protection state and Intune mobile apps.
//! - [`security`] — Security alerts and their evidence.
//! - [`call_records`] — Teams call media streams.
//!
//! # Quick Start
//!
//! ```ignore
//! use graph_models::entity::GraphEntity;
//!
//! let payload = serde_json::json!({
//!     "@odata.type": "#microsoft.graph.calendar",
//!     "id": "AAMkAGI2",
//!     "name": "Calendar",
//! });
//! let entity = GraphEntity::from_value(payload)?;
//! assert_eq!(entity.variant_name(), "Calendar");
//! ```

pub mod calendar;
pub mod call_records;
pub mod codec;
pub mod device;
pub mod entity;
pub mod error;
pub mod learning;
pub mod odata;
pub mod parse_node;
pub mod security;
pub mod todo;
