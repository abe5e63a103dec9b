//! Ordered field collection.
//!
//! This module provides [`FieldMap`], the collection behind both the global
//! fields of an [`IniDocument`](crate::IniDocument) and the fields of every
//! [`IniSection`](crate::IniSection). It keeps fields in insertion order
//! with unique, case-sensitive keys, which is what makes documents
//! round-trip: a file parsed and rendered again keeps its lines where they
//! were.
//!
//! ## Why IndexMap?
//!
//! `FieldMap` wraps [`IndexMap`] instead of `HashMap` to ensure:
//!
//! - **Stable output**: fields render in the order they were added
//! - **Positional replacement**: re-adding a key keeps its original slot
//! - **Ordered removal**: removing a field shifts nothing else around
//!
//! ## Examples
//!
//! ```rust
//! use inidoc::FieldMap;
//!
//! let mut fields = FieldMap::new();
//! fields.add("host", "localhost");
//! fields.add("port", "8080");
//! fields.add("host", "0.0.0.0");
//!
//! let keys: Vec<_> = fields.keys().cloned().collect();
//! assert_eq!(keys, vec!["host", "port"]);
//! assert_eq!(fields.get("host").map(|f| f.get()), Some("0.0.0.0"));
//! ```

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::IniField;

/// An ordered collection of uniquely keyed fields.
///
/// Keys are case-sensitive and compared exactly. Adding a key that already
/// exists replaces the field in place, so the collection's order only ever
/// grows at the end or shrinks where a field is removed.
///
/// # Examples
///
/// ```rust
/// use inidoc::FieldMap;
///
/// let mut fields = FieldMap::new();
/// fields.add("first", "1");
/// fields.add("second", "2");
///
/// // Iteration maintains insertion order.
/// let keys: Vec<_> = fields.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldMap(IndexMap<String, IniField>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::FieldMap;
    ///
    /// let fields = FieldMap::new();
    /// assert!(fields.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with the specified capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::FieldMap;
    ///
    /// let fields = FieldMap::with_capacity(10);
    /// assert!(fields.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Adds a field with an explicit value.
    ///
    /// If the key already exists, the field is replaced in place: it keeps
    /// its position and its previously accumulated default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// fields.add("mode", "fast");
    /// fields.add("mode", "safe");
    ///
    /// assert_eq!(fields.len(), 1);
    /// assert_eq!(fields.get("mode").map(|f| f.get()), Some("safe"));
    /// ```
    pub fn add(&mut self, key: &str, value: &str) -> &mut IniField {
        self.add_with_default(key, Some(value), "")
    }

    /// Adds a field with an optional value and a default value.
    ///
    /// On an existing key the field is replaced in place. The replacement's
    /// default is the incoming `default_value` when non-empty, otherwise the
    /// existing field's default. The replacement's value is `value` when
    /// given, otherwise that resolved default. A missing key simply appends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// fields.add_with_default("mode", None, "fast");
    /// assert_eq!(fields.get("mode").map(|f| f.get()), Some("fast"));
    ///
    /// // An explicit value wins; the earlier default survives the replacement.
    /// fields.add_with_default("mode", Some("safe"), "");
    /// let field = fields.get("mode").unwrap();
    /// assert_eq!(field.get(), "safe");
    /// assert_eq!(field.default_value(), "fast");
    /// ```
    pub fn add_with_default(
        &mut self,
        key: &str,
        value: Option<&str>,
        default_value: &str,
    ) -> &mut IniField {
        match self.0.entry(key.to_string()) {
            Entry::Occupied(entry) => {
                let default_value = if default_value.is_empty() {
                    entry.get().default_value().to_string()
                } else {
                    default_value.to_string()
                };
                let slot = entry.into_mut();
                *slot = IniField::new(key, value, &default_value);
                slot
            }
            Entry::Vacant(entry) => entry.insert(IniField::new(key, value, default_value)),
        }
    }

    /// Returns the field for `key`, creating it when absent.
    ///
    /// A created field starts out holding `default_value`, so this never
    /// fails and `get_or_add(key, d).get()` is always a usable value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// assert_eq!(fields.get_or_add("retries", "3").get(), "3");
    ///
    /// // A second call returns the existing field untouched.
    /// assert_eq!(fields.get_or_add("retries", "9").get(), "3");
    /// ```
    pub fn get_or_add(&mut self, key: &str, default_value: &str) -> &mut IniField {
        match self.0.entry(key.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(IniField::new(key, None, default_value)),
        }
    }

    /// Returns a reference to the field for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// fields.add("host", "localhost");
    /// assert_eq!(fields.get("host").map(|f| f.get()), Some("localhost"));
    /// assert!(fields.get("HOST").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&IniField> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the field for `key`.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut IniField> {
        self.0.get_mut(key)
    }

    /// Removes the field for `key`, preserving the order of the remaining
    /// fields. Returns the removed field, or `None` when the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::FieldMap;
    ///
    /// let mut fields = FieldMap::new();
    /// fields.add("a", "1");
    /// fields.add("b", "2");
    /// fields.add("c", "3");
    ///
    /// let removed = fields.remove("b").unwrap();
    /// assert_eq!(removed.get(), "2");
    ///
    /// let keys: Vec<_> = fields.keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "c"]);
    /// assert!(fields.remove("b").is_none());
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<IniField> {
        self.0.shift_remove(key)
    }

    /// Returns the number of fields in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, IniField> {
        self.0.keys()
    }

    /// Returns an iterator over the fields, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, IniField> {
        self.0.values()
    }

    /// Returns an iterator of mutable references to the fields, in insertion
    /// order. Keys stay fixed; only values can change through it.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, IniField> {
        self.0.values_mut()
    }

    /// Returns an iterator over the key/field pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, IniField> {
        self.0.iter()
    }
}

/// Equality is order-sensitive: the same fields in a different order render
/// differently, so the collections compare as different.
impl PartialEq for FieldMap {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for FieldMap {}

impl IntoIterator for FieldMap {
    type Item = (String, IniField);
    type IntoIter = indexmap::map::IntoIter<String, IniField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a IniField);
    type IntoIter = indexmap::map::Iter<'a, String, IniField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Serializes as a map of key to raw value, in insertion order.
impl Serialize for FieldMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, field) in &self.0 {
            map.serialize_entry(key, field)?;
        }
        map.end()
    }
}
