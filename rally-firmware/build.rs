//! Build script for rally-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time and turns it into a
//!   `MatchConfig` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Must match `rally_core::scheduler::OVERRUN_MAX`
const OVERRUN_MAX: u32 = 32767;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameFile {
    timing: Timing,
    handshake: Handshake,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Timing {
    tick_rate_hz: u32,
    display_rate_hz: u32,
    paddle_rate_hz: u32,
    ball_rate_hz: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Handshake {
    window_ticks: u32,
    attempts: u32,
}

fn main() {
    setup_linker();
    let game = validate_config();
    generate_config(&game);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and range-check game.toml
fn validate_config() -> GameFile {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read game.toml", &[e.to_string()]),
    };

    let game: GameFile = match toml::from_str(&content) {
        Ok(game) => game,
        Err(e) => fail(
            "Invalid game.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = check_ranges(&game);
    if !errors.is_empty() {
        fail("Invalid timing in game.toml", &errors);
    }

    println!("cargo:warning=game.toml validated successfully");
    game
}

fn check_ranges(game: &GameFile) -> Vec<String> {
    let mut errors = Vec::new();
    let timing = &game.timing;

    if timing.tick_rate_hz == 0 || timing.tick_rate_hz > u16::MAX as u32 {
        errors.push(format!("[timing] tick_rate_hz must be 1-{}", u16::MAX));
    }

    for (name, rate) in [
        ("display_rate_hz", timing.display_rate_hz),
        ("paddle_rate_hz", timing.paddle_rate_hz),
        ("ball_rate_hz", timing.ball_rate_hz),
    ] {
        if rate == 0 || rate > timing.tick_rate_hz {
            errors.push(format!("[timing] {} must be 1-tick_rate_hz", name));
        } else if timing.tick_rate_hz / rate >= OVERRUN_MAX {
            errors.push(format!("[timing] {} is too slow for the tick rate", name));
        }
    }

    let handshake = &game.handshake;
    if handshake.window_ticks == 0 || handshake.window_ticks >= OVERRUN_MAX {
        errors.push(format!("[handshake] window_ticks must be 1-{}", OVERRUN_MAX - 1));
    }
    if handshake.attempts == 0 || handshake.attempts > u16::MAX as u32 {
        errors.push(format!("[handshake] attempts must be 1-{}", u16::MAX));
    }

    errors
}

/// Write the validated values as a `MatchConfig` constant
fn generate_config(game: &GameFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("match_config.rs")).unwrap();

    writeln!(
        f,
        "pub const MATCH_CONFIG: MatchConfig = MatchConfig {{\n    \
            tick_rate_hz: {},\n    \
            display_rate_hz: {},\n    \
            paddle_rate_hz: {},\n    \
            ball_rate_hz: {},\n    \
            handshake_window_ticks: {},\n    \
            handshake_attempts: {},\n\
        }};",
        game.timing.tick_rate_hz,
        game.timing.display_rate_hz,
        game.timing.paddle_rate_hz,
        game.timing.ball_rate_hz,
        game.handshake.window_ticks,
        game.handshake.attempts,
    )
    .unwrap();
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(lines)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
