//! OData plumbing shared by every model.
//!
//! - [`discriminator`] — reads the `@odata.type` tag of a payload.
//! - [`AdditionalData`] — properties a model does not describe.
//! - [`ODataList`] — the `{ "value": [...] }` collection envelope.
//! - [`discriminated_union!`] — closed sum types keyed by `@odata.type`,
//!   with a fallback variant for tags the union does not know.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GraphError, Result, json_kind};
use crate::parse_node::{Parsable, parse_object};

/// Wire name of the discriminator property.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Wire properties captured verbatim because the model has no field for them.
pub type AdditionalData = serde_json::Map<String, Value>;

/// Reads the `@odata.type` discriminator of a JSON payload.
///
/// Absent and `null` both mean "no discriminator" (`Ok(None)`).
///
/// # Errors
///
/// - `GraphError::NotAnObject` — the payload is not a JSON object.
/// - `GraphError::InvalidDiscriminator` — the tag is present but not a string.
pub fn discriminator(value: &Value) -> Result<Option<&str>> {
    let Value::Object(members) = value else {
        return Err(GraphError::NotAnObject {
            type_name: "polymorphic payload",
            found: json_kind(value),
        });
    };
    match members.get(ODATA_TYPE_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(tag)) => Ok(Some(tag.as_str())),
        Some(other) => Err(GraphError::InvalidDiscriminator {
            found: json_kind(other),
        }),
    }
}

/// OData collection envelope returned by list endpoints.
///
/// Graph wraps collections in `{ "value": [...] }` with an optional
/// `@odata.context` metadata URL. Paging and count annotations
/// (`@odata.nextLink`, `@odata.count`, ...) are kept in `additional_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ODataList<T> {
    #[serde(
        rename = "@odata.context",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub context: Option<String>,

    /// The array of result items.
    pub value: Vec<T>,

    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl<T> ODataList<T> {
    /// A bare envelope around `value`.
    pub fn new(value: Vec<T>) -> Self {
        ODataList {
            context: None,
            value,
            additional_data: AdditionalData::new(),
        }
    }

    /// URL of the next page, if the service paged the collection.
    pub fn next_link(&self) -> Option<&str> {
        self.additional_data
            .get("@odata.nextLink")
            .and_then(Value::as_str)
    }
}

/// How a discriminated union decodes the record it resolved.
///
/// [`SerdeDecoder`] goes through `serde_json::from_value`; [`TableDecoder`]
/// goes through the model's field-deserializer table.
pub trait RecordDecoder {
    fn decode<T: Parsable>(value: Value) -> Result<T>;
}

/// Decodes with serde.
pub struct SerdeDecoder;

impl RecordDecoder for SerdeDecoder {
    fn decode<T: Parsable>(value: Value) -> Result<T> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Decodes with [`parse_object`].
pub struct TableDecoder;

impl RecordDecoder for TableDecoder {
    fn decode<T: Parsable>(value: Value) -> Result<T> {
        parse_object(value)
    }
}

/// Declares a polymorphic family as a closed enum.
///
/// ```ignore
/// discriminated_union! {
///     pub enum AnyMobileApp {
///         WebApp(WebApp),
///         WindowsUniversalAppX(WindowsUniversalAppX),
///         _ => MobileApp(MobileApp),
///     }
/// }
/// ```
///
/// Each variant type implements `GraphModel`; its `ODATA_TYPE` is the tag
/// that selects it. Payloads with no tag, the base's own tag, or a tag
/// outside the list become the fallback (`_ =>`) variant.
macro_rules! discriminated_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident($ty:ty), )+
            _ => $fallback:ident($fallback_ty:ty),
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $variant($ty), )+
            $fallback($fallback_ty),
        }

        impl $name {
            /// Discriminators resolved to a dedicated variant.
            pub const KNOWN_TYPES: &'static [&'static str] =
                &[ $( <$ty as $crate::entity::GraphModel>::ODATA_TYPE, )+ ];

            /// Builds the variant named by the payload's `@odata.type`,
            /// decoding with serde.
            pub fn from_value(value: ::serde_json::Value) -> $crate::error::Result<Self> {
                Self::decode_with::<$crate::odata::SerdeDecoder>(value)
            }

            /// Builds the variant named by the payload's `@odata.type`,
            /// decoding with the variant's field-deserializer table.
            pub fn parse(value: ::serde_json::Value) -> $crate::error::Result<Self> {
                Self::decode_with::<$crate::odata::TableDecoder>(value)
            }

            fn decode_with<D: $crate::odata::RecordDecoder>(
                value: ::serde_json::Value,
            ) -> $crate::error::Result<Self> {
                let Some(tag) = $crate::odata::discriminator(&value)?.map(str::to_owned) else {
                    return Ok($name::$fallback(D::decode(value)?));
                };
                $(
                    if tag == <$ty as $crate::entity::GraphModel>::ODATA_TYPE {
                        return Ok($name::$variant(D::decode(value)?));
                    }
                )+
                if tag != <$fallback_ty as $crate::entity::GraphModel>::ODATA_TYPE {
                    ::tracing::debug!(
                        union = stringify!($name),
                        odata_type = %tag,
                        "unrecognized discriminator, using base type"
                    );
                }
                Ok($name::$fallback(D::decode(value)?))
            }

            /// The `@odata.type` carried by the inner record.
            pub fn odata_type(&self) -> Option<&str> {
                match self {
                    $( $name::$variant(inner) => $crate::entity::GraphModel::odata_type(inner), )+
                    $name::$fallback(inner) => $crate::entity::GraphModel::odata_type(inner),
                }
            }

            /// Unmodelled properties captured on the inner record.
            pub fn additional_data(&self) -> &$crate::odata::AdditionalData {
                match self {
                    $( $name::$variant(inner) => $crate::parse_node::Parsable::additional_data(inner), )+
                    $name::$fallback(inner) => $crate::parse_node::Parsable::additional_data(inner),
                }
            }

            /// Rust name of the resolved variant.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => stringify!($variant), )+
                    $name::$fallback(_) => stringify!($fallback),
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(inner: $ty) -> Self {
                    $name::$variant(inner)
                }
            }
        )+

        impl From<$fallback_ty> for $name {
            fn from(inner: $fallback_ty) -> Self {
                $name::$fallback(inner)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                match self {
                    $( $name::$variant(inner) => ::serde::Serialize::serialize(inner, serializer), )+
                    $name::$fallback(inner) => ::serde::Serialize::serialize(inner, serializer),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_value(value).map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
pub(crate) use discriminated_union;
