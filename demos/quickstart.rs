//! Reading, editing, and writing an INI configuration file.
//!
//! Run with: cargo run --example quickstart

use inidoc::IniDocument;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir();
    let path = dir.join("inidoc_quickstart.ini");

    // A missing file is not an error: the first run starts from an empty
    // document, later runs pick up what was saved.
    let mut config = IniDocument::new(&path).parse()?;

    // Lookups create what they cannot find, so defaults are declared at
    // the point of use.
    let server = config.get_section("server");
    let host = server.get_field_or("host", "localhost").get().to_string();
    let port = server.get_field_or("port", "8080").get().to_string();
    println!("server: {}:{}\n", host, port);

    // Edit a value and record when we last ran.
    config.get_section("server").get_field("port").set("9090");
    config.add_field("last_run", "2026-08-23");

    println!("Rendered document:\n{}\n", config);

    config.write()?;
    println!("✓ Saved to {}", path.display());

    // Reload and confirm the edit survived the trip to disk.
    let reloaded = IniDocument::new(&path).parse()?;
    assert_eq!(
        reloaded
            .section("server")
            .and_then(|s| s.field("port"))
            .map(|f| f.get()),
        Some("9090")
    );
    println!("✓ Reloaded copy matches");

    Ok(())
}
