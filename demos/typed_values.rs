//! Typed field access with converters and output formatting control.
//!
//! Run with: cargo run --example typed_values

use inidoc::convert::{Decimal, Float64, UInt16, UInt32};
use inidoc::{to_string_with_options, ExportOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = inidoc::from_str(
        "[server]\nport = 8080\nworkers = 4\n\n[billing]\nrate = 19.99\ntax = 0.0825",
    );

    // Converters parse the raw text, falling back to zero when it does not
    // parse as the requested type.
    let server = doc.get_section("server");
    let port = server.get_field("port").get_as(UInt16);
    let workers = server.get_field("workers").get_as(UInt32);
    println!("port {} with {} workers", port, workers);

    // Decimal keeps exact base-10 precision, which floats cannot promise.
    let billing = doc.get_section("billing");
    let rate = billing.get_field("rate").get_as(Decimal);
    let tax = billing.get_field("tax").get_as(Float64);
    println!("rate {} (tax {})\n", rate, tax);

    // Typed writes format the value back to text.
    doc.get_section("server").get_field("port").set_as(UInt16, 9090);

    // Default output: spaced delimiter, blank line between sections.
    println!("Default format:\n{}\n", doc);

    // Compact output for machine consumption.
    let compact = ExportOptions::new()
        .with_key_value_whitespace(false)
        .with_newline_after_section(false);
    println!("Compact format:\n{}\n", to_string_with_options(&doc, compact));

    // Alphabetical ordering gives deterministic output regardless of how
    // the document was built.
    let sorted = ExportOptions::new()
        .with_alphabetical_sections(true)
        .with_alphabetical_fields(true);
    println!("Sorted format:\n{}", to_string_with_options(&doc, sorted));

    Ok(())
}
