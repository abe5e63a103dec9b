//! Typed access to INI values.
//!
//! INI text stores every value as a string. This module provides the
//! [`Converter`] trait together with a closed set of stateless converters,
//! one per supported numeric type. They back
//! [`IniField::get_as`](crate::IniField::get_as) and
//! [`IniField::set_as`](crate::IniField::set_as), and can also be used on
//! their own.
//!
//! ## Conversion never fails
//!
//! [`Converter::parse`] returns `None` for text that does not parse, and the
//! field accessors substitute [`Converter::default_value`] (zero, for every
//! converter in this module). A caller that has to distinguish "missing" from
//! "unparsable" inspects the raw string instead.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::convert::{Converter, Float64, Int32};
//!
//! assert_eq!(Int32.parse("42"), Some(42));
//! assert_eq!(Int32.parse(" 42 "), Some(42));
//! assert_eq!(Int32.parse("forty-two"), None);
//! assert_eq!(Int32.default_value(), 0);
//!
//! assert_eq!(Float64.format(&2.5), "2.5");
//! ```

/// A strategy for moving between INI text and a native value type.
///
/// Implementations are stateless unit structs, so picking a converter costs
/// nothing at runtime and the compiler monomorphizes each call site. The set
/// is closed on purpose: every converter has a total `parse`-or-default
/// behavior, which keeps field access infallible.
///
/// # Examples
///
/// ```rust
/// use inidoc::convert::{Converter, UInt16};
///
/// assert_eq!(UInt16.parse("8080"), Some(8080));
/// assert_eq!(UInt16.parse("-1"), None);
/// assert_eq!(UInt16.format(&8080), "8080");
/// ```
pub trait Converter {
    /// The native type this converter produces and accepts.
    type Value;

    /// Parses raw INI text into the native type.
    ///
    /// The input is trimmed first. Returns `None` when the trimmed text is
    /// not a valid rendering of [`Self::Value`].
    fn parse(&self, raw: &str) -> Option<Self::Value>;

    /// Renders a native value back into INI text.
    fn format(&self, value: &Self::Value) -> String;

    /// The fallback substituted when parsing fails.
    fn default_value(&self) -> Self::Value;
}

macro_rules! converters {
    ($($(#[$docs:meta])* $name:ident => $ty:ty),+ $(,)?) => {
        $(
            $(#[$docs])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl Converter for $name {
                type Value = $ty;

                #[inline]
                fn parse(&self, raw: &str) -> Option<Self::Value> {
                    raw.trim().parse().ok()
                }

                #[inline]
                fn format(&self, value: &Self::Value) -> String {
                    value.to_string()
                }

                #[inline]
                fn default_value(&self) -> Self::Value {
                    <$ty>::default()
                }
            }
        )+
    };
}

converters! {
    /// Converts to and from `i8`.
    Int8 => i8,
    /// Converts to and from `u8`.
    UInt8 => u8,
    /// Converts to and from `i16`.
    Int16 => i16,
    /// Converts to and from `u16`.
    UInt16 => u16,
    /// Converts to and from `i32`.
    Int32 => i32,
    /// Converts to and from `u32`.
    UInt32 => u32,
    /// Converts to and from `i64`.
    Int64 => i64,
    /// Converts to and from `u64`.
    UInt64 => u64,
    /// Converts to and from `f32`.
    Float32 => f32,
    /// Converts to and from `f64`.
    Float64 => f64,
    /// Converts to and from [`rust_decimal::Decimal`], which keeps exact
    /// base-10 precision for values like currency amounts.
    Decimal => rust_decimal::Decimal,
}
