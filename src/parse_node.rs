//! Field-deserializer tables and the table-driven parser.
//!
//! Every model exposes [`Parsable::field_deserializers`]: a map from wire
//! property name to a callback that decodes that one property from a
//! [`ParseNode`] and assigns it on the target. [`parse_object`] drives the
//! table over a JSON object; keys without an entry land in the model's
//! `additional_data` so nothing in the payload is dropped.
//!
//! A derived model's table holds its own properties plus every entry of its
//! base's table, projected onto the `base` field. The callbacks decode
//! through serde, so the table and `serde_json::from_value` always agree on
//! what a property means. Each table is built once per type and shared.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{GraphError, Result, json_kind};
use crate::odata::AdditionalData;

/// One JSON value handed to a field callback.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    value: Value,
}

impl ParseNode {
    pub fn new(value: Value) -> Self {
        ParseNode { value }
    }

    /// The raw JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The member `name` of an object node, if present.
    pub fn child(&self, name: &str) -> Option<ParseNode> {
        self.value.get(name).cloned().map(ParseNode::new)
    }

    /// Decodes this node as the wire property `wire` of model `T`.
    ///
    /// The node is wrapped as `{ wire: value }` and decoded as a whole `T`,
    /// so property-level serde attributes (renames, null-skipping
    /// collections, enum codecs) apply exactly as they do for a full
    /// payload. Failures name the wire property.
    pub fn property<T: DeserializeOwned>(&self, wire: &str) -> Result<T> {
        let mut single = serde_json::Map::with_capacity(1);
        single.insert(wire.to_string(), self.value.clone());
        serde_json::from_value(Value::Object(single)).map_err(|source| GraphError::Field {
            field: wire.to_string(),
            source,
        })
    }
}

/// Callback that decodes one property onto a model.
pub type FieldDeserializer<T> = Box<dyn Fn(&mut T, &ParseNode) -> Result<()> + Send + Sync>;

/// Wire property name → callback.
pub type FieldDeserializers<T> = HashMap<&'static str, FieldDeserializer<T>>;

/// Boxes a field callback. Gives the closure its signature up front so
/// table entries need no annotations.
pub fn field<T, F>(callback: F) -> FieldDeserializer<T>
where
    F: Fn(&mut T, &ParseNode) -> Result<()> + Send + Sync + 'static,
{
    Box::new(callback)
}

/// A model that can be built from its field-deserializer table.
pub trait Parsable: Sized + Default + Serialize + DeserializeOwned + 'static {
    /// The model's field-deserializer table, base entries included.
    fn field_deserializers() -> &'static FieldDeserializers<Self>;

    /// Wire properties the model does not describe.
    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;

    /// Sorted wire property names from the table.
    fn wire_fields() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::field_deserializers().keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Builds `T` by dispatching each property of `value` through
/// `T::field_deserializers()`.
///
/// # Errors
///
/// - `GraphError::NotAnObject` — `value` is not a JSON object.
/// - `GraphError::Field` — a property's callback rejected its value.
pub fn parse_object<T: Parsable>(value: Value) -> Result<T> {
    let Value::Object(members) = value else {
        return Err(GraphError::NotAnObject {
            type_name: std::any::type_name::<T>(),
            found: json_kind(&value),
        });
    };

    let table = T::field_deserializers();
    let mut target = T::default();
    for (key, member) in members {
        match table.get(key.as_str()) {
            Some(deserialize) => deserialize(&mut target, &ParseNode::new(member))?,
            None => {
                tracing::trace!(
                    model = std::any::type_name::<T>(),
                    property = %key,
                    "storing unmodelled property"
                );
                target.additional_data_mut().insert(key, member);
            }
        }
    }
    Ok(target)
}

/// Implements [`Parsable`] and [`GraphModel`](crate::entity::GraphModel)
/// for a model struct.
///
/// Root form — the struct owns `odata_type` and `additional_data`:
///
/// ```ignore
/// impl_graph_model! {
///     Entity = "#microsoft.graph.entity" {
///         id => "id",
///         odata_type => "@odata.type",
///     }
/// }
/// ```
///
/// Derived form — the struct has a flattened `base: Parent` field:
///
/// ```ignore
/// impl_graph_model! {
///     Calendar = "#microsoft.graph.calendar", base: Entity {
///         can_edit => "canEdit",
///     }
/// }
/// ```
macro_rules! impl_graph_model {
    (@fields $res:ident, $name:ident, $( $field:ident => $wire:literal, )*) => {
        $(
            $res.insert(
                $wire,
                $crate::parse_node::field(|m: &mut $name, node| {
                    m.$field = node.property::<$name>($wire)?.$field;
                    Ok(())
                }),
            );
        )*
    };

    ($name:ident = $odata:literal { $( $field:ident => $wire:literal, )* }) => {
        impl $crate::parse_node::Parsable for $name {
            fn field_deserializers() -> &'static $crate::parse_node::FieldDeserializers<Self> {
                static TABLE: ::std::sync::LazyLock<$crate::parse_node::FieldDeserializers<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        let mut res = $crate::parse_node::FieldDeserializers::<$name>::new();
                        $crate::parse_node::impl_graph_model!(@fields res, $name, $( $field => $wire, )*);
                        res
                    });
                &TABLE
            }

            fn additional_data(&self) -> &$crate::odata::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut $crate::odata::AdditionalData {
                &mut self.additional_data
            }
        }

        impl $crate::entity::GraphModel for $name {
            const ODATA_TYPE: &'static str = $odata;

            fn odata_type(&self) -> Option<&str> {
                self.odata_type.as_deref()
            }

            fn set_odata_type(&mut self, value: Option<String>) {
                self.odata_type = value;
            }
        }
    };

    ($name:ident = $odata:literal, base: $base:ty { $( $field:ident => $wire:literal, )* }) => {
        impl $crate::parse_node::Parsable for $name {
            fn field_deserializers() -> &'static $crate::parse_node::FieldDeserializers<Self> {
                static TABLE: ::std::sync::LazyLock<$crate::parse_node::FieldDeserializers<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        let mut res = $crate::parse_node::FieldDeserializers::<$name>::new();
                        for (&wire, deserialize) in
                            <$base as $crate::parse_node::Parsable>::field_deserializers()
                        {
                            res.insert(
                                wire,
                                $crate::parse_node::field(move |m: &mut $name, node| {
                                    deserialize(&mut m.base, node)
                                }),
                            );
                        }
                        $crate::parse_node::impl_graph_model!(@fields res, $name, $( $field => $wire, )*);
                        res
                    });
                &TABLE
            }

            fn additional_data(&self) -> &$crate::odata::AdditionalData {
                $crate::parse_node::Parsable::additional_data(&self.base)
            }

            fn additional_data_mut(&mut self) -> &mut $crate::odata::AdditionalData {
                $crate::parse_node::Parsable::additional_data_mut(&mut self.base)
            }
        }

        impl $crate::entity::GraphModel for $name {
            const ODATA_TYPE: &'static str = $odata;

            fn odata_type(&self) -> Option<&str> {
                $crate::entity::GraphModel::odata_type(&self.base)
            }

            fn set_odata_type(&mut self, value: Option<String>) {
                $crate::entity::GraphModel::set_odata_type(&mut self.base, value);
            }
        }
    };
}
pub(crate) use impl_graph_model;
