//! A single key/value entry.
//!
//! This module provides [`IniField`], which pairs a key with its raw text
//! value and a default. Fields are created through
//! [`IniDocument`](crate::IniDocument) and [`IniSection`](crate::IniSection)
//! (`add_field`, `get_field`, and friends), never free-standing, so every
//! field belongs to exactly one collection.
//!
//! ## Raw and typed access
//!
//! [`IniField::get`] returns the raw text. [`IniField::get_as`] runs a
//! [`Converter`](crate::convert::Converter) over it, falling back to the
//! converter's default when the text does not parse:
//!
//! ```rust
//! use inidoc::IniDocument;
//! use inidoc::convert::Int32;
//!
//! let mut doc = IniDocument::default();
//! doc.add_field("port", "8080");
//!
//! assert_eq!(doc.get_field("port").get(), "8080");
//! assert_eq!(doc.get_field("port").get_as(Int32), 8080);
//!
//! doc.get_field("port").set("not a number");
//! assert_eq!(doc.get_field("port").get_as(Int32), 0);
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::convert::Converter;

/// A key/value entry of a document or section.
///
/// The key and the default value are fixed at creation; the raw value is the
/// only mutable part. A field created without an explicit value starts out
/// holding its default, so `get_field_or("retries", "3").get()` returns `"3"`
/// until something sets the field.
///
/// # Examples
///
/// ```rust
/// use inidoc::IniDocument;
///
/// let mut doc = IniDocument::default();
/// let field = doc.get_field_or("greeting", "hello");
/// assert_eq!(field.key(), "greeting");
/// assert_eq!(field.get(), "hello");
/// assert_eq!(field.default_value(), "hello");
///
/// field.set("goodbye");
/// assert_eq!(doc.get_field("greeting").get(), "goodbye");
/// assert_eq!(doc.get_field("greeting").default_value(), "hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniField {
    key: String,
    raw_value: String,
    default_value: String,
}

impl IniField {
    /// Creates a field. Without an explicit value the field starts out
    /// holding `default_value`; an explicit empty string stays empty.
    pub(crate) fn new(key: &str, value: Option<&str>, default_value: &str) -> Self {
        IniField {
            key: key.to_string(),
            raw_value: match value {
                Some(value) => value.to_string(),
                None => default_value.to_string(),
            },
            default_value: default_value.to_string(),
        }
    }

    /// Returns the key of this field.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw text value of this field.
    #[inline]
    #[must_use]
    pub fn get(&self) -> &str {
        &self.raw_value
    }

    /// Returns the default value of this field.
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Sets the raw text value of this field.
    pub fn set(&mut self, value: &str) {
        self.raw_value = value.to_string();
    }

    /// Converts the raw value with `converter`, substituting the converter's
    /// default when the raw text does not parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::convert::{Float64, UInt8};
    ///
    /// let mut doc = inidoc::from_str("volume = 0.75\nretries = many");
    /// assert_eq!(doc.get_field("volume").get_as(Float64), 0.75);
    /// assert_eq!(doc.get_field("retries").get_as(UInt8), 0);
    /// ```
    #[must_use]
    pub fn get_as<C: Converter>(&self, converter: C) -> C::Value {
        converter
            .parse(&self.raw_value)
            .unwrap_or_else(|| converter.default_value())
    }

    /// Formats `value` with `converter` and stores the result as the raw
    /// text value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::IniDocument;
    /// use inidoc::convert::Int64;
    ///
    /// let mut doc = IniDocument::default();
    /// doc.get_field("answer").set_as(Int64, 42);
    /// assert_eq!(doc.get_field("answer").get(), "42");
    /// ```
    pub fn set_as<C: Converter>(&mut self, converter: C, value: C::Value) {
        self.raw_value = converter.format(&value);
    }
}

/// Formats the field as its raw value, mirroring the string a lookup
/// returns.
impl fmt::Display for IniField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_value)
    }
}

/// Serializes as the raw value string; the key is carried by the enclosing
/// collection.
impl Serialize for IniField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{Float64, Int32, UInt16};

    #[test]
    fn test_new_without_value_takes_default() {
        let field = IniField::new("timeout", None, "30");
        assert_eq!(field.get(), "30");
        assert_eq!(field.default_value(), "30");
    }

    #[test]
    fn test_new_with_value_keeps_value() {
        let field = IniField::new("timeout", Some("60"), "30");
        assert_eq!(field.get(), "60");
        assert_eq!(field.default_value(), "30");
    }

    #[test]
    fn test_new_with_empty_value_stays_empty() {
        let field = IniField::new("timeout", Some(""), "30");
        assert_eq!(field.get(), "");
        assert_eq!(field.default_value(), "30");
    }

    #[test]
    fn test_set_replaces_raw_value_only() {
        let mut field = IniField::new("timeout", None, "30");
        field.set("45");
        assert_eq!(field.get(), "45");
        assert_eq!(field.default_value(), "30");
    }

    #[test]
    fn test_get_as_parses_and_falls_back() {
        let mut field = IniField::new("port", Some("8080"), "");
        assert_eq!(field.get_as(Int32), 8080);
        assert_eq!(field.get_as(UInt16), 8080);
        field.set("eight thousand");
        assert_eq!(field.get_as(Int32), 0);
    }

    #[test]
    fn test_set_as_formats() {
        let mut field = IniField::new("ratio", None, "");
        field.set_as(Float64, 0.5);
        assert_eq!(field.get(), "0.5");
    }

    #[test]
    fn test_display_is_raw_value() {
        let field = IniField::new("name", Some("borrowed"), "");
        assert_eq!(field.to_string(), "borrowed");
    }
}
