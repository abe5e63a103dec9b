//! Named groups of fields.
//!
//! This module provides [`IniSection`], the `[name]`-headed block of an INI
//! file. Sections are created and owned by an
//! [`IniDocument`](crate::IniDocument); their field operations mirror the
//! document's global ones, scoped to the section's own collection.
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::IniDocument;
//!
//! let mut doc = IniDocument::default();
//! let section = doc.create_section("server");
//! section.add_field("host", "localhost");
//! section.add_field("port", "8080");
//!
//! assert_eq!(section.name(), "server");
//! assert_eq!(doc.render(), "[server]\nhost = localhost\nport = 8080");
//! ```

use serde::{Serialize, Serializer};

use crate::{FieldMap, IniField};

/// A named, ordered group of fields.
///
/// The name is fixed at creation and unique within the owning document.
/// All field semantics (insertion order, in-place replacement, default
/// accumulation) are those of [`FieldMap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    fields: FieldMap,
}

impl IniSection {
    pub(crate) fn new(name: &str) -> Self {
        IniSection {
            name: name.to_string(),
            fields: FieldMap::new(),
        }
    }

    /// Returns the name of this section.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the section's field collection.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Returns the section's field collection mutably.
    #[inline]
    #[must_use]
    pub fn fields_mut(&mut self) -> &mut FieldMap {
        &mut self.fields
    }

    /// Adds a field with an explicit value, replacing in place on an
    /// existing key. See [`FieldMap::add`].
    pub fn add_field(&mut self, key: &str, value: &str) -> &mut IniField {
        self.fields.add(key, value)
    }

    /// Adds a field with an optional value and a default value. See
    /// [`FieldMap::add_with_default`] for the replacement rules.
    pub fn add_field_with_default(
        &mut self,
        key: &str,
        value: Option<&str>,
        default_value: &str,
    ) -> &mut IniField {
        self.fields.add_with_default(key, value, default_value)
    }

    /// Returns the field for `key`, creating an empty-valued one when
    /// absent.
    pub fn get_field(&mut self, key: &str) -> &mut IniField {
        self.fields.get_or_add(key, "")
    }

    /// Returns the field for `key`, creating one holding `default_value`
    /// when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut doc = inidoc::from_str("[net]\ntimeout = 20");
    /// let net = doc.get_section("net");
    /// assert_eq!(net.get_field_or("timeout", "30").get(), "20");
    /// assert_eq!(net.get_field_or("retries", "3").get(), "3");
    /// ```
    pub fn get_field_or(&mut self, key: &str, default_value: &str) -> &mut IniField {
        self.fields.get_or_add(key, default_value)
    }

    /// Returns the field for `key` without creating it.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&IniField> {
        self.fields.get(key)
    }

    /// Returns the field for `key` mutably, without creating it.
    #[must_use]
    pub fn field_mut(&mut self, key: &str) -> Option<&mut IniField> {
        self.fields.get_mut(key)
    }

    /// Removes the field for `key`, preserving the order of the rest.
    pub fn remove_field(&mut self, key: &str) -> Option<IniField> {
        self.fields.remove(key)
    }
}

/// Serializes as a map of key to raw value; the section name is carried by
/// the enclosing document.
impl Serialize for IniSection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}
