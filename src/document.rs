//! The INI document model.
//!
//! This module provides [`IniDocument`], the root owner of everything the
//! crate works with: a file path used for I/O, the global fields that appear
//! before any section header, and the named sections in insertion order.
//!
//! ## Reading
//!
//! A document is bound to a path and parsed from it. A file that does not
//! exist is not an error; the document simply comes back unchanged, which
//! makes first-run bootstrapping a non-event:
//!
//! ```rust
//! use inidoc::IniDocument;
//!
//! let doc = IniDocument::new("/nonexistent/app.ini").parse().unwrap();
//! assert!(doc.is_empty());
//! ```
//!
//! Text that is already in memory goes through [`IniDocument::parse_str`]
//! or the crate-level [`from_str`](crate::from_str).
//!
//! ## Editing
//!
//! Lookups never fail. [`IniDocument::get_section`] and
//! [`IniDocument::get_field`] create what they cannot find, so
//! read-modify-write code needs no `match` on missing entries:
//!
//! ```rust
//! use inidoc::IniDocument;
//!
//! let mut doc = IniDocument::default();
//! doc.get_section("server").get_field_or("port", "8080").set("9000");
//! assert_eq!(doc.render(), "[server]\nport = 9000");
//! ```
//!
//! ## Writing
//!
//! [`IniDocument::write`] persists to the stored path;
//! [`IniDocument::write_to`] targets another path and leaves the stored one
//! alone. Both have `_with_options` forms taking
//! [`ExportOptions`](crate::ExportOptions), and [`IniDocument::render`]
//! produces the text without touching the file system.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::{parse, render, ExportOptions, FieldMap, IniField, IniSection};

/// An in-memory INI file: global fields plus named sections, bound to a
/// path for reading and writing.
///
/// Everything reachable from a document is owned by it. Sections and fields
/// hand out references into the document rather than living on their own,
/// so there is exactly one copy of each value and edits are always visible
/// on the next render.
///
/// # Examples
///
/// ```rust
/// use inidoc::IniDocument;
///
/// let mut doc = inidoc::from_str("[paths]\ndata = /var/lib/app");
/// doc.get_section("paths").add_field("cache", "/tmp/app");
///
/// assert_eq!(
///     doc.render(),
///     "[paths]\ndata = /var/lib/app\ncache = /tmp/app"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct IniDocument {
    path: PathBuf,
    fields: FieldMap,
    sections: IndexMap<String, IniSection>,
}

impl IniDocument {
    /// Creates an empty document bound to `path`.
    ///
    /// Nothing is read yet; call [`parse`](Self::parse) for that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::IniDocument;
    /// use std::path::Path;
    ///
    /// let doc = IniDocument::new("config/app.ini");
    /// assert_eq!(doc.path(), Path::new("config/app.ini"));
    /// assert!(doc.is_empty());
    /// ```
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        IniDocument {
            path: path.into(),
            fields: FieldMap::new(),
            sections: IndexMap::new(),
        }
    }

    /// Returns the path this document reads from and writes to.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebinds the document to another path. Content is unaffected.
    pub fn set_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.path = path.into();
    }

    /// Returns `true` when the document has no global fields and no
    /// sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.sections.is_empty()
    }

    /// Returns the section named `name`, appending a new empty one when no
    /// section has that name. Calling it twice with the same name yields
    /// the same section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::IniDocument;
    ///
    /// let mut doc = IniDocument::default();
    /// doc.create_section("server").add_field("host", "localhost");
    /// doc.create_section("server").add_field("port", "8080");
    ///
    /// assert_eq!(doc.sections().count(), 1);
    /// assert_eq!(doc.section("server").unwrap().fields().len(), 2);
    /// ```
    pub fn create_section(&mut self, name: &str) -> &mut IniSection {
        match self.sections.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(IniSection::new(name)),
        }
    }

    /// Returns the section named `name`, creating it when absent. Alias of
    /// [`create_section`](Self::create_section) kept for read-flavored call
    /// sites.
    pub fn get_section(&mut self, name: &str) -> &mut IniSection {
        self.create_section(name)
    }

    /// Returns the section named `name` without creating it.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    /// Returns the section named `name` mutably, without creating it.
    #[must_use]
    pub fn section_mut(&mut self, name: &str) -> Option<&mut IniSection> {
        self.sections.get_mut(name)
    }

    /// Removes the section named `name`, preserving the order of the rest.
    /// Returns the removed section, or `None` when no section has that
    /// name.
    pub fn remove_section(&mut self, name: &str) -> Option<IniSection> {
        self.sections.shift_remove(name)
    }

    /// Returns an iterator over the sections, in insertion order.
    pub fn sections(&self) -> indexmap::map::Values<'_, String, IniSection> {
        self.sections.values()
    }

    /// Adds a global field with an explicit value, replacing in place on an
    /// existing key. See [`FieldMap::add`].
    pub fn add_field(&mut self, key: &str, value: &str) -> &mut IniField {
        self.fields.add(key, value)
    }

    /// Adds a global field with an optional value and a default value. See
    /// [`FieldMap::add_with_default`] for the replacement rules.
    pub fn add_field_with_default(
        &mut self,
        key: &str,
        value: Option<&str>,
        default_value: &str,
    ) -> &mut IniField {
        self.fields.add_with_default(key, value, default_value)
    }

    /// Returns the global field for `key`, creating an empty-valued one
    /// when absent.
    pub fn get_field(&mut self, key: &str) -> &mut IniField {
        self.fields.get_or_add(key, "")
    }

    /// Returns the global field for `key`, creating one holding
    /// `default_value` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let mut doc = inidoc::from_str("present = yes");
    /// assert_eq!(doc.get_field_or("present", "no").get(), "yes");
    /// assert_eq!(doc.get_field_or("absent", "no").get(), "no");
    /// ```
    pub fn get_field_or(&mut self, key: &str, default_value: &str) -> &mut IniField {
        self.fields.get_or_add(key, default_value)
    }

    /// Returns the global field for `key` without creating it.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&IniField> {
        self.fields.get(key)
    }

    /// Returns the global field for `key` mutably, without creating it.
    #[must_use]
    pub fn field_mut(&mut self, key: &str) -> Option<&mut IniField> {
        self.fields.get_mut(key)
    }

    /// Removes the global field for `key`, preserving the order of the
    /// rest.
    pub fn remove_field(&mut self, key: &str) -> Option<IniField> {
        self.fields.remove(key)
    }

    /// Returns the global field collection.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Returns the global field collection mutably.
    #[inline]
    #[must_use]
    pub fn fields_mut(&mut self) -> &mut FieldMap {
        &mut self.fields
    }

    /// Parses `text` into this document, merging with whatever it already
    /// holds. Existing keys take the incoming value; existing sections are
    /// reopened rather than duplicated.
    pub fn parse_str(&mut self, text: &str) {
        parse::parse_str_into(self, text);
    }

    /// Parses pre-split lines into this document. Agrees with
    /// [`parse_str`](Self::parse_str) on every input.
    pub fn parse_lines<'a, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        parse::parse_lines_into(self, lines);
    }

    /// Reads and parses the file at the document's path, merging into the
    /// document. A file that does not exist leaves the document unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] when the file exists but cannot be read, and
    /// when reading fails for any reason other than not-found.
    pub fn parse(mut self) -> Result<Self> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                self.parse_str(&text);
                Ok(self)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(self),
            Err(err) => Err(Error::read(self.path, err)),
        }
    }

    /// Renders the document with default [`ExportOptions`].
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with_options(ExportOptions::default())
    }

    /// Renders the document with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inidoc::ExportOptions;
    ///
    /// let doc = inidoc::from_str("[a]\nk = v");
    /// let compact = ExportOptions::new().with_key_value_whitespace(false);
    /// assert_eq!(doc.render_with_options(compact), "[a]\nk=v");
    /// ```
    #[must_use]
    pub fn render_with_options(&self, options: ExportOptions) -> String {
        render::render(self, options)
    }

    /// Renders with default options and writes to the document's path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the file cannot be written.
    pub fn write(&self) -> Result<()> {
        self.write_with_options(ExportOptions::default())
    }

    /// Renders with the given options and writes to the document's path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the file cannot be written.
    pub fn write_with_options(&self, options: ExportOptions) -> Result<()> {
        self.write_to_with_options(&self.path, options)
    }

    /// Renders with default options and writes to `path`, leaving the
    /// document's own path untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the file cannot be written.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_to_with_options(path, ExportOptions::default())
    }

    /// Renders with the given options and writes to `path`, leaving the
    /// document's own path untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the file cannot be written.
    pub fn write_to_with_options<P: AsRef<Path>>(
        &self,
        path: P,
        options: ExportOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render_with_options(options)).map_err(|err| Error::write(path, err))
    }
}

#[cfg(feature = "async")]
impl IniDocument {
    /// Async form of [`parse`](Self::parse): reads via `tokio::fs`, then
    /// runs the same synchronous tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] when the file exists but cannot be read, and
    /// when reading fails for any reason other than not-found.
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn parse_async(mut self) -> Result<Self> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                self.parse_str(&text);
                Ok(self)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(self),
            Err(err) => Err(Error::read(self.path, err)),
        }
    }

    /// Async form of [`write`](Self::write).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the file cannot be written.
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn write_async(&self) -> Result<()> {
        self.write_with_options_async(ExportOptions::default())
            .await
    }

    /// Async form of [`write_with_options`](Self::write_with_options).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the file cannot be written.
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn write_with_options_async(&self, options: ExportOptions) -> Result<()> {
        self.write_to_with_options_async(&self.path, options).await
    }

    /// Async form of [`write_to`](Self::write_to).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the file cannot be written.
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn write_to_async<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_to_with_options_async(path, ExportOptions::default())
            .await
    }

    /// Async form of
    /// [`write_to_with_options`](Self::write_to_with_options).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] when the file cannot be written.
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn write_to_with_options_async<P: AsRef<Path>>(
        &self,
        path: P,
        options: ExportOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        tokio::fs::write(path, self.render_with_options(options))
            .await
            .map_err(|err| Error::write(path, err))
    }
}

/// Formats via [`IniDocument::render`] with default options.
impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Equality compares content only: global fields then sections, both in
/// order. The backing path is an I/O binding and takes no part, so a
/// document equals its own re-parse from another location.
impl PartialEq for IniDocument {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields && self.sections.iter().eq(other.sections.iter())
    }
}

impl Eq for IniDocument {}

/// Serializes as one map: global fields inline as key to value, then each
/// section as name to its own map of fields.
impl Serialize for IniDocument {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + self.sections.len()))?;
        for (key, field) in self.fields.iter() {
            map.serialize_entry(key, field)?;
        }
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}
