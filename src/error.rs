//! Typed error hierarchy for the graph-models crate.
//!
//! Every fallible operation in the crate returns [`GraphError`]. Variants map
//! to the places a Graph payload can be rejected:
//! - `UnrecognizedEnumValue` — an enum or flag string outside the known set.
//! - `InvalidDiscriminator` — `@odata.type` present but not a string.
//! - `NotAnObject` — a record was expected but the JSON value is not an object.
//! - `Field` — a single wire property failed to decode in the field table.
//! - `Parse` — serde_json rejected the payload as a whole.
//!
//! Record accessors cannot fail: fields are plain struct members, so there
//! is no storage error to report.

/// Unified error type for all graph-models operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A wire string did not name any member of the enum (or, for flag
    /// enums, one of the comma-separated tokens did not).
    #[error("unrecognized value {value:?} for {type_name}")]
    UnrecognizedEnumValue {
        /// Rust name of the enum type being parsed.
        type_name: &'static str,
        /// The offending wire string, verbatim.
        value: String,
    },

    /// The `@odata.type` property existed but held something other than a
    /// string.
    #[error("@odata.type must be a string, found {found}")]
    InvalidDiscriminator {
        /// JSON kind of the value found (`number`, `object`, ...).
        found: &'static str,
    },

    /// A JSON object was required to build a record.
    #[error("expected a JSON object for {type_name}, found {found}")]
    NotAnObject {
        /// Rust name of the record type being built.
        type_name: &'static str,
        /// JSON kind of the value found.
        found: &'static str,
    },

    /// A property's callback in the field-deserializer table failed.
    ///
    /// `field` is the wire name (e.g. `allowedOnlineMeetingProviders`), which
    /// is what callers see in the payload they are debugging.
    #[error("failed to deserialize field {field}: {source}")]
    Field {
        /// Wire property name.
        field: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// serde_json rejected the payload.
    #[error("failed to parse payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Names the JSON kind of `value` for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn unrecognized_enum_value_names_type_and_value() {
        let err = GraphError::UnrecognizedEnumValue {
            type_name: "CalendarRoleType",
            value: "freeBusyWrite".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("CalendarRoleType"), "display should name the enum");
        assert!(
            msg.contains("\"freeBusyWrite\""),
            "display should quote the rejected value"
        );
    }

    #[test]
    fn invalid_discriminator_reports_json_kind() {
        let err = GraphError::InvalidDiscriminator { found: "number" };
        assert_eq!(err.to_string(), "@odata.type must be a string, found number");
    }

    #[test]
    fn field_error_chains_to_serde() {
        let source = serde_json::from_str::<bool>("\"yes\"").unwrap_err();
        let err = GraphError::Field {
            field: "canEdit".to_string(),
            source,
        };
        assert!(err.to_string().contains("canEdit"));
        assert!(
            err.source().is_some(),
            "Field variant should chain to serde_json::Error"
        );
    }

    #[test]
    fn parse_error_wraps_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad json}}").unwrap_err();
        let err: GraphError = json_err.into();
        assert!(err.to_string().contains("failed to parse payload"));
        assert!(err.source().is_some());
    }

    #[test]
    fn json_kind_covers_every_value() {
        use serde_json::json;
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!("x")), "string");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphError>();
    }
}
