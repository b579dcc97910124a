use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use tracing::debug;

/// An enum the vendor encodes as an integer status code.
///
/// Unlike [`WireEnum`](super::WireEnum), decoding never fails: codes missing
/// from `CODES` resolve to `FALLBACK` so new vendor codes do not break
/// existing consumers.
pub trait CodedEnum: Copy + PartialEq + Sized + 'static {
    const TYPE_NAME: &'static str;
    const FALLBACK: Self;
    const CODES: &'static [(i64, Self)];

    fn code(self) -> i64;

    fn from_code(code: i64) -> Self {
        match Self::CODES.iter().find(|(candidate, _)| *candidate == code) {
            Some((_, member)) => *member,
            None => {
                debug!(
                    enum_type = Self::TYPE_NAME,
                    code, "Unmapped status code, using fallback member"
                );
                Self::FALLBACK
            }
        }
    }

    fn is_fallback(self) -> bool {
        self == Self::FALLBACK
    }
}

/// Serde visitor shared by every `coded_enum!` type.
///
/// Accepts integers and strings holding an integer; anything else that is a
/// string maps to the fallback member.
pub struct CodedEnumVisitor<C> {
    marker: PhantomData<C>,
}

impl<C> CodedEnumVisitor<C> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<C> Default for CodedEnumVisitor<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, C: CodedEnum> Visitor<'de> for CodedEnumVisitor<C> {
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer status code for enum {}", C::TYPE_NAME)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(C::from_code(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match i64::try_from(v) {
            Ok(code) => Ok(C::from_code(code)),
            Err(_) => Ok(C::FALLBACK),
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match v.trim().parse::<i64>() {
            Ok(code) => Ok(C::from_code(code)),
            Err(_) => {
                debug!(
                    enum_type = C::TYPE_NAME,
                    value = v,
                    "Non-numeric status code, using fallback member"
                );
                Ok(C::FALLBACK)
            }
        }
    }
}

/// Declare an integer-coded enum with an explicit code table.
///
/// The first member is marked `fallback`; it has its own code and is also
/// what every unmapped code decodes to.
///
/// ```
/// meeting_api_models::coded_enum! {
///     pub enum LineStatus {
///         fallback Unknown = -1,
///         Idle = 0,
///         Busy = 1,
///     }
/// }
/// ```
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$fallback_meta:meta])*
            fallback $fallback:ident = $fallback_code:literal,
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(#[$fallback_meta])*
            $fallback,
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::adapters::coded_enum::CodedEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const FALLBACK: Self = $name::$fallback;
            const CODES: &'static [(i64, Self)] = &[
                ($fallback_code, $name::$fallback),
                $(($code, $name::$variant),)+
            ];

            fn code(self) -> i64 {
                match self {
                    $name::$fallback => $fallback_code,
                    $($name::$variant => $code,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$fallback
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_i64($crate::adapters::coded_enum::CodedEnum::code(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(
                    $crate::adapters::coded_enum::CodedEnumVisitor::<$name>::new(),
                )
            }
        }
    };
}
