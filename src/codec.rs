//! Enum codecs: wire string ⇄ typed value.
//!
//! Graph enums travel as lowerCamelCase strings (`"freeBusyRead"`,
//! `"unknownFutureValue"`). Two shapes exist:
//!
//! - **Plain enums** declared with [`wire_enum!`]: one variant per wire
//!   string, looked up exactly and case-sensitively.
//! - **Flag enums** declared with [`wire_flags!`]: a `bitflags` set whose
//!   members are powers of two, written as a comma-joined list in
//!   declaration order (`"x86,arm"`). One wire name (e.g. `"none"`) stands
//!   for the empty set.
//!
//! Both shapes reject unrecognized input with
//! [`GraphError::UnrecognizedEnumValue`] instead of yielding a silent null
//! or zero, and both implement serde through the same parser so JSON
//! decoding surfaces the same error.

use serde::{Deserialize, Deserializer};

use crate::error::{GraphError, Result};

/// A closed set of named values with a lowerCamelCase wire form.
pub trait WireEnum: Sized + Copy + 'static {
    /// Rust type name, used in error messages.
    const TYPE_NAME: &'static str;
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The wire string for this variant.
    fn as_wire_str(&self) -> &'static str;

    /// Looks up the variant whose wire string is exactly `s`.
    fn parse_wire(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_wire_str() == s)
            .ok_or_else(|| GraphError::UnrecognizedEnumValue {
                type_name: Self::TYPE_NAME,
                value: s.to_string(),
            })
    }
}

/// A bitmask enum with a comma-joined wire form.
pub trait WireFlags: bitflags::Flags + Copy + 'static {
    /// Rust type name, used in error messages.
    const TYPE_NAME: &'static str;
    /// Wire name written for (and accepted as) the empty set.
    const EMPTY_NAME: &'static str;
    /// Wire name of every single-bit flag, in canonical order.
    const NAMES: &'static [(&'static str, Self)];
}

/// Writes `flags` as its canonical comma-joined wire string.
pub fn format_flags<F: WireFlags>(flags: &F) -> String {
    let names: Vec<&str> = F::NAMES
        .iter()
        .filter(|(_, flag)| flags.contains(*flag))
        .map(|(name, _)| *name)
        .collect();
    if names.is_empty() {
        return F::EMPTY_NAME.to_string();
    }
    names.join(",")
}

/// Parses a comma-joined wire string into a flag set.
///
/// Tokens may appear in any order and may carry surrounding whitespace.
/// The empty-set name contributes nothing. Any other unknown token, or an
/// empty input, fails the whole parse.
pub fn parse_flags<F: WireFlags>(s: &str) -> Result<F> {
    let mut flags = F::empty();
    for token in s.split(',').map(str::trim) {
        if token == F::EMPTY_NAME {
            continue;
        }
        let (_, flag) = F::NAMES
            .iter()
            .find(|(name, _)| *name == token)
            .ok_or_else(|| GraphError::UnrecognizedEnumValue {
                type_name: F::TYPE_NAME,
                value: s.to_string(),
            })?;
        flags.insert(*flag);
    }
    Ok(flags)
}

/// serde `deserialize_with` helper for collection properties: `null`
/// elements are dropped instead of failing the whole payload.
pub fn skip_nulls<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|items| items.into_iter().flatten().collect()))
}

/// Declares a plain wire enum.
///
/// ```ignore
/// wire_enum! {
///     /// Role a delegate holds on a calendar.
///     pub enum CalendarRoleType {
///         None = "none",
///         FreeBusyRead = "freeBusyRead",
///     }
/// }
/// ```
///
/// Generates the enum, `as_str`, [`WireEnum`], `Display`, `FromStr` and
/// string-based serde impls.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// The lowerCamelCase wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl $crate::codec::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[ $( $name::$variant, )+ ];

            fn as_wire_str(&self) -> &'static str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::GraphError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::codec::WireEnum>::parse_wire(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::codec::WireEnum>::parse_wire(&raw)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
pub(crate) use wire_enum;

/// Declares a bitmask wire enum on top of `bitflags`.
///
/// ```ignore
/// wire_flags! {
///     pub struct WindowsArchitecture: u32 {
///         empty = "none";
///         const X86 = 1 << 0 => "x86";
///         const X64 = 1 << 1 => "x64";
///     }
/// }
/// ```
macro_rules! wire_flags {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $bits:ty {
            empty = $empty:literal;
            $( $(#[$fmeta:meta])* const $flag:ident = $value:expr => $wire:literal; )+
        }
    ) => {
        ::bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis struct $name: $bits {
                $( $(#[$fmeta])* const $flag = $value; )+
            }
        }

        impl $crate::codec::WireFlags for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const EMPTY_NAME: &'static str = $empty;
            const NAMES: &'static [(&'static str, Self)] = &[ $( ($wire, $name::$flag), )+ ];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::codec::format_flags(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::GraphError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::codec::parse_flags(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::codec::format_flags(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::codec::parse_flags(&raw).map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
pub(crate) use wire_flags;
