//! Build script for relaybench-firmware
//!
//! - Emits the ESP-IDF link environment
//! - Validates board.toml at compile time

use std::fs;
use std::path::Path;

use relaybench_core::config::BoardConfig;

fn main() {
    embuild::espidf::sysenv::output();
    validate_config();
}

/// Validate board.toml with the same rules the firmware applies at boot
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config_path = Path::new("board.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read board.toml", &e.to_string()),
    };

    let config: BoardConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => fail("Invalid board.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("board.toml wiring or timing rejected", &e.to_string());
    }

    println!("cargo:warning=board.toml validated successfully");
}

fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
