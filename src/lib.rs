//! # inidoc
//!
//! A library for reading, editing, and writing INI configuration files.
//!
//! ## What is INI?
//!
//! The oldest configuration format still in daily use: key/value fields,
//! optionally grouped under `[section]` headers, with `;` comments. This
//! crate models a file as an [`IniDocument`] that preserves field and
//! section order, so a parsed file renders back with its lines where they
//! were.
//!
//! ## Key Features
//!
//! - **Round-trips**: insertion order is preserved end to end; re-adding a
//!   key replaces it in place rather than moving it
//! - **Lookups never fail**: [`IniDocument::get_section`] and
//!   [`IniDocument::get_field`] create what is missing, which makes
//!   config-with-defaults code linear and `match`-free
//! - **Tolerant parser**: malformed lines are skipped and a missing file is
//!   treated as empty input, never as an error
//! - **Formatting control**: delimiter spacing, blank lines, and
//!   alphabetical ordering are independent [`ExportOptions`] toggles
//! - **Typed access**: converters in [`convert`] turn raw text into
//!   integers, floats, or decimals with a zero-cost strategy type
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! inidoc = "0.1"
//! ```
//!
//! ### Parse, edit, render
//!
//! ```rust
//! let mut doc = inidoc::from_str(
//!     "title = My App\n\n[server]\nhost = localhost\nport = 8080",
//! );
//!
//! doc.get_section("server").get_field("port").set("9090");
//! doc.add_field("version", "2.0");
//!
//! assert_eq!(
//!     doc.render(),
//!     "title = My App\nversion = 2.0\n\n[server]\nhost = localhost\nport = 9090",
//! );
//! ```
//!
//! ### Working with files
//!
//! A document is bound to a path; parsing tolerates the file not existing
//! yet, so the first run and every later run share one code path:
//!
//! ```rust,no_run
//! use inidoc::IniDocument;
//!
//! fn main() -> inidoc::Result<()> {
//!     let mut config = IniDocument::new("config.ini").parse()?;
//!
//!     // Reads the stored value, or seeds "8080" on first run.
//!     let port = config
//!         .get_section("server")
//!         .get_field_or("port", "8080")
//!         .get()
//!         .to_string();
//!     println!("listening on {port}");
//!
//!     config.write()?;
//!     Ok(())
//! }
//! ```
//!
//! ### Building documents with the ini! macro
//!
//! ```rust
//! use inidoc::ini;
//!
//! let doc = ini! {
//!     "version" = 2,
//!     ["server"] {
//!         "host" = "localhost",
//!         "port" = 8080,
//!     }
//! };
//!
//! assert_eq!(
//!     doc.render(),
//!     "version = 2\n\n[server]\nhost = localhost\nport = 8080",
//! );
//! ```
//!
//! ### Typed values
//!
//! ```rust
//! use inidoc::convert::{Float64, UInt16};
//!
//! let mut doc = inidoc::from_str("[server]\nport = 8080\nload = oops");
//! let server = doc.get_section("server");
//!
//! assert_eq!(server.get_field("port").get_as(UInt16), 8080);
//! // Unparsable text falls back to the converter default instead of failing.
//! assert_eq!(server.get_field("load").get_as(Float64), 0.0);
//! ```
//!
//! ## Optional Features
//!
//! - **`async`**: async file I/O (`parse_async` and the `write*_async`
//!   family on [`IniDocument`]) backed by `tokio::fs`, running the same
//!   synchronous algorithms around awaited reads and writes:
//!
//! ```toml
//! [dependencies]
//! inidoc = { version = "0.1", features = ["async"] }
//! ```
//!
//! ## Format Reference
//!
//! The exact dialect (line forms, tolerance rules, output layout) is
//! documented in the [`format`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable programs:
//!
//! - **`quickstart.rs`** - Parse a file, edit it, write it back
//! - **`typed_values.rs`** - Converters and formatting options
//!
//! Run any example with: `cargo run --example <name>`

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod convert;
pub mod document;
pub mod error;
pub mod field;
pub mod fields;
pub mod format;
pub mod macros;
pub mod options;
pub mod section;

mod parse;
mod render;

pub use convert::Converter;
pub use document::IniDocument;
pub use error::{Error, Result};
pub use field::IniField;
pub use fields::FieldMap;
pub use options::ExportOptions;
pub use section::IniSection;

use std::io;

/// Parses INI text into a new document.
///
/// Parsing never fails: lines that fit no form are skipped. The document's
/// path is empty; bind one with [`IniDocument::set_path`] if the document
/// should be written later.
///
/// # Examples
///
/// ```rust
/// let doc = inidoc::from_str("[db]\nurl = postgres://localhost/app");
/// assert_eq!(
///     doc.section("db").and_then(|s| s.field("url")).map(|f| f.get()),
///     Some("postgres://localhost/app"),
/// );
/// ```
#[must_use]
pub fn from_str(text: &str) -> IniDocument {
    let mut document = IniDocument::default();
    document.parse_str(text);
    document
}

/// Parses pre-split lines into a new document.
///
/// Agrees with [`from_str`] on every input; use it when the text already
/// exists as lines and joining them first would only cost an allocation.
///
/// # Examples
///
/// ```rust
/// let lines = vec!["[db]", "url = postgres://localhost/app"];
/// assert_eq!(
///     inidoc::from_lines(lines),
///     inidoc::from_str("[db]\nurl = postgres://localhost/app"),
/// );
/// ```
#[must_use]
pub fn from_lines<'a, I>(lines: I) -> IniDocument
where
    I: IntoIterator<Item = &'a str>,
{
    let mut document = IniDocument::default();
    document.parse_lines(lines);
    document
}

/// Parses INI text from raw bytes into a new document.
///
/// # Examples
///
/// ```rust
/// let doc = inidoc::from_slice(b"key = value").unwrap();
/// assert_eq!(doc.field("key").map(|f| f.get()), Some("value"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Utf8`] when the bytes are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<IniDocument> {
    Ok(from_str(std::str::from_utf8(bytes)?))
}

/// Parses INI text from an I/O stream into a new document.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let doc = inidoc::from_reader(Cursor::new("key = value")).unwrap();
/// assert_eq!(doc.field("key").map(|f| f.get()), Some("value"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] when reading from the reader fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<IniDocument>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(from_str(&text))
}

/// Renders a document to INI text with default [`ExportOptions`].
#[must_use]
pub fn to_string(document: &IniDocument) -> String {
    document.render()
}

/// Renders a document to INI text with the given options.
///
/// # Examples
///
/// ```rust
/// use inidoc::{ini, to_string_with_options, ExportOptions};
///
/// let doc = ini! { ["a"] { "k" = "v" } };
/// let compact = ExportOptions::new().with_key_value_whitespace(false);
/// assert_eq!(to_string_with_options(&doc, compact), "[a]\nk=v");
/// ```
#[must_use]
pub fn to_string_with_options(document: &IniDocument, options: ExportOptions) -> String {
    document.render_with_options(options)
}

/// Renders a document with default options and writes the text to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] when writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, document: &IniDocument) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, document, ExportOptions::default())
}

/// Renders a document with the given options and writes the text to
/// `writer`.
///
/// # Examples
///
/// ```rust
/// use inidoc::{ini, to_writer_with_options, ExportOptions};
///
/// let doc = ini! { "k" = "v" };
/// let mut buffer = Vec::new();
/// to_writer_with_options(&mut buffer, &doc, ExportOptions::default()).unwrap();
/// assert_eq!(buffer, b"k = v");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] when writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    document: &IniDocument,
    options: ExportOptions,
) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(document.render_with_options(options).as_bytes())?;
    Ok(())
}
