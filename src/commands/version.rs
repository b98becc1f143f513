//! Version command implementation
//!
//! Besides the version, prints the built-in configuration so users have a
//! starting point for their own `avkg.yaml`.

use console::Style;

use crate::config::{CONFIG_FILE, Config};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!(
        "{} {}",
        Style::new().bold().apply_to(env!("CARGO_PKG_NAME")),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();

    println!("{}", Style::new().bold().apply_to(format!("Default {CONFIG_FILE}:")));
    for line in Config::default().to_yaml()?.lines() {
        println!("  {line}");
    }
    println!();

    println!(
        "Built with Rust {} ({})",
        env!("CARGO_PKG_RUST_VERSION"),
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );

    Ok(())
}
