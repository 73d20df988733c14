//! Build script for filament-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml and turns it into a `const ClockConfig`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use filament_core::config::ClockConfig;

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate clock.toml, then emit `clock_config.rs`
fn generate_config() {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a clock.toml configuration file.          ║\n\
            ║  Please create one in the filament-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: ClockConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid clock.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Inconsistent thresholds in clock.toml                    ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("clock_config.rs"), render_config(&config)).unwrap();

    println!("cargo:warning=clock.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the configuration as a Rust constant
fn render_config(config: &ClockConfig) -> String {
    let seed_time = match config.seed_time {
        Some(t) => format!("WallTime::new({}, {})", t.hour(), t.minute()),
        None => "None".to_string(),
    };
    let palette = &config.palette;

    format!(
        "// Generated from clock.toml by build.rs\n\
         pub const CLOCK_CONFIG: ClockConfig = ClockConfig {{\n    \
             ticks_per_second: {},\n    \
             long_press_ticks: {},\n    \
             short_press_ticks: {},\n    \
             press_ceiling: {},\n    \
             sleep_timeout_ticks: {},\n    \
             fade_steps: {},\n    \
             seed_time: {},\n    \
             palette: IndicatorPalette {{\n        \
                 clock: Color12::from_packed({:#05X}),\n        \
                 set_hours: Color12::from_packed({:#05X}),\n        \
                 set_minutes: Color12::from_packed({:#05X}),\n        \
                 off: Color12::from_packed({:#05X}),\n    \
             }},\n\
         }};\n",
        config.ticks_per_second,
        config.long_press_ticks,
        config.short_press_ticks,
        config.press_ceiling,
        config.sleep_timeout_ticks,
        config.fade_steps,
        seed_time,
        palette.clock.packed(),
        palette.set_hours.packed(),
        palette.set_minutes.packed(),
        palette.off.packed(),
    )
}
