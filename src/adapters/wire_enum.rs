use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};

use crate::error::AdapterError;

/// One member of a string-coded enum and the wire strings bound to it.
///
/// `canonical` is what gets written. Reading accepts `canonical` and every
/// entry of `alternates`, so the canonical value is always part of the
/// accepted set.
#[derive(Debug, Clone, Copy)]
pub struct WireMapping<W> {
    pub member: W,
    pub name: &'static str,
    pub canonical: &'static str,
    pub alternates: &'static [&'static str],
}

impl<W> WireMapping<W> {
    /// Case-sensitive check against the accepted input strings.
    pub fn accepts(&self, wire: &str) -> bool {
        self.canonical == wire || self.alternates.iter().any(|alternate| *alternate == wire)
    }

    pub fn accepted(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical).chain(self.alternates.iter().copied())
    }
}

/// A string-coded enum backed by a static mapping table.
///
/// Implementations are generated by [`wire_enum!`](crate::wire_enum).
pub trait WireEnum: Copy + PartialEq + Sized + 'static {
    const TYPE_NAME: &'static str;
    const MAPPINGS: &'static [WireMapping<Self>];

    /// Canonical wire string for this member.
    fn to_wire(self) -> &'static str;

    /// Resolve a wire string to a member.
    ///
    /// Configured values are tried first, then the declared member names.
    fn from_wire(wire: &str) -> Result<Self, AdapterError> {
        Self::MAPPINGS
            .iter()
            .find(|mapping| mapping.accepts(wire))
            .or_else(|| Self::MAPPINGS.iter().find(|mapping| mapping.name == wire))
            .map(|mapping| mapping.member)
            .ok_or_else(|| AdapterError::unrecognized_enum_value(Self::TYPE_NAME, wire))
    }
}

/// Serde visitor shared by every `wire_enum!` type.
pub struct WireEnumVisitor<W> {
    marker: PhantomData<W>,
}

impl<W> WireEnumVisitor<W> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<W> Default for WireEnumVisitor<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, W: WireEnum> Visitor<'de> for WireEnumVisitor<W> {
    type Value = W;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a wire string for enum {}", W::TYPE_NAME)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        W::from_wire(v).map_err(E::custom)
    }
}

/// Declare a string-coded enum together with its wire mapping table.
///
/// Each member may name a canonical wire string followed by alternates that
/// are accepted on input only. A member without a wire string uses its own
/// name in both directions.
///
/// ```
/// meeting_api_models::wire_enum! {
///     pub enum AudioType {
///         Both => "both",
///         Telephony => "telephony" | "phone",
///         Voip,
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (@canonical $variant:ident) => {
        stringify!($variant)
    };
    (@canonical $variant:ident, $canonical:literal) => {
        $canonical
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $canonical:literal $(| $alternate:literal)*)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::adapters::wire_enum::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const MAPPINGS: &'static [$crate::adapters::wire_enum::WireMapping<Self>] = &[
                $(
                    $crate::adapters::wire_enum::WireMapping {
                        member: $name::$variant,
                        name: stringify!($variant),
                        canonical: $crate::wire_enum!(@canonical $variant $(, $canonical)?),
                        alternates: &[$($($alternate),*)?],
                    },
                )+
            ];

            fn to_wire(self) -> &'static str {
                match self {
                    $(
                        $name::$variant => $crate::wire_enum!(@canonical $variant $(, $canonical)?),
                    )+
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::adapters::wire_enum::WireEnum::to_wire(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer.deserialize_str(
                    $crate::adapters::wire_enum::WireEnumVisitor::<$name>::new(),
                )
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::adapters::wire_enum::WireEnum::to_wire(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::AdapterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::adapters::wire_enum::WireEnum>::from_wire(s)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::wire_enum! {
        enum AudioType {
            Both => "both",
            Telephony => "telephony" | "phone" | "pstn",
            Voip,
        }
    }

    #[test]
    fn test_decode_canonical_and_alternates() {
        assert_eq!(AudioType::from_wire("both").unwrap(), AudioType::Both);

        // Every alternate resolves to the same member as the canonical value
        for wire in ["telephony", "phone", "pstn"] {
            assert_eq!(AudioType::from_wire(wire).unwrap(), AudioType::Telephony);
        }
    }

    #[test]
    fn test_encode_ignores_alternates() {
        let decoded = AudioType::from_wire("pstn").unwrap();
        assert_eq!(decoded.to_wire(), "telephony");
        assert_eq!(serde_json::to_string(&decoded).unwrap(), r#""telephony""#);
    }

    #[test]
    fn test_unconfigured_member_uses_declared_name() {
        assert_eq!(AudioType::Voip.to_wire(), "Voip");
        assert_eq!(AudioType::from_wire("Voip").unwrap(), AudioType::Voip);
    }

    #[test]
    fn test_declared_name_is_accepted_as_fallback() {
        // Configured members still resolve by their declared name
        assert_eq!(AudioType::from_wire("Telephony").unwrap(), AudioType::Telephony);
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        let result = AudioType::from_wire("BOTH");
        assert!(matches!(
            result,
            Err(AdapterError::UnrecognizedEnumValue { type_name: "AudioType", ref value }) if value == "BOTH"
        ));
    }

    #[test]
    fn test_canonical_round_trip_for_every_member() {
        for mapping in AudioType::MAPPINGS {
            let decoded = AudioType::from_wire(mapping.canonical).unwrap();
            assert_eq!(decoded, mapping.member);
            assert_eq!(decoded.to_wire(), mapping.canonical);
        }
    }

    #[test]
    fn test_canonical_is_accepted() {
        for mapping in AudioType::MAPPINGS {
            assert!(mapping.accepts(mapping.canonical));
            assert_eq!(mapping.accepted().next(), Some(mapping.canonical));
        }
    }

    #[test]
    fn test_serde_error_names_value_and_type() {
        let result = serde_json::from_str::<AudioType>(r#""carrier-pigeon""#);
        assert!(result.is_err());

        let message = result.unwrap_err().to_string();
        assert!(message.contains("carrier-pigeon"));
        assert!(message.contains("AudioType"));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(AudioType::Telephony.to_string(), "telephony");
        assert_eq!("phone".parse::<AudioType>().unwrap(), AudioType::Telephony);
    }
}
