//! Memory hierarchy simulator CLI.
//!
//! This binary replays access traces against a configured hierarchy. It performs:
//! 1. **Trace replay:** Execute a text trace of word reads and writes.
//! 2. **Configuration:** Load a JSON config file, with built-in defaults for
//!    every omitted field.
//! 3. **Reporting:** Print read results, the final cycle count, and the
//!    per-level statistics.

use clap::{Parser, Subcommand};
use std::{fs, process};

use memsim_core::config::Config;
use memsim_core::Hierarchy;

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    author,
    version,
    about = "Two-level write-back cache hierarchy simulator",
    long_about = "Replay a word-access trace through a direct-mapped L1 and a \
two-way L2 over a flat backing store, accounting simulated cycles.\n\n\
Trace format, one access per line ('#' starts a comment):\n  \
R <addr>\n  W <addr> <value>\n\n\
Addresses and values accept decimal or 0x-prefixed hex.\n\n\
Examples:\n  memsim run -f traces/qsort.trace\n  \
memsim run -f trace.txt --config small-l1.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a trace file through the hierarchy.
    Run {
        /// Trace file to replay.
        #[arg(short, long)]
        file: String,

        /// JSON config file (omitted fields use the built-in defaults).
        #[arg(short, long)]
        config: Option<String>,

        /// Suppress per-read output; print only the final report.
        #[arg(short, long)]
        quiet: bool,
    },
}

/// One parsed trace access.
#[derive(Debug, Clone, Copy)]
enum Access {
    Read(u32),
    Write(u32, u32),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            config,
            quiet,
        }) => cmd_run(&file, config.as_deref(), quiet),
        None => {
            eprintln!("memsim — pass a subcommand");
            eprintln!();
            eprintln!("  memsim run -f <trace>                  Replay with defaults");
            eprintln!("  memsim run -f <trace> -c <config.json> Replay with a custom config");
            eprintln!();
            eprintln!("  memsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Replays the trace: builds the hierarchy, applies each access in order, and
/// prints the final cycle count and statistics. A fatal out-of-range access
/// aborts the replay with exit code 1.
fn cmd_run(trace_path: &str, config_path: Option<&str>, quiet: bool) {
    let config = load_config(config_path);
    let accesses = load_trace(trace_path);

    println!(
        "Configuration: store {} KiB, L1 {} lines, L2 {} sets x 2 ways",
        config.dram.size_bytes / 1024,
        config.l1.lines,
        config.l2.sets
    );
    println!("[*] Replaying {} accesses from {}", accesses.len(), trace_path);
    println!();

    let mut hier = Hierarchy::new(&config);

    for (number, access) in accesses.iter().enumerate() {
        let result = match *access {
            Access::Read(addr) => hier.read_u32(addr).map(|value| {
                if !quiet {
                    println!("R {addr:#010x} => {value:#010x}");
                }
            }),
            Access::Write(addr, value) => hier.write_u32(addr, value),
        };
        if let Err(e) = result {
            eprintln!("\n[!] FATAL at trace line {}: {}", number + 1, e);
            hier.stats().print();
            process::exit(1);
        }
    }

    println!("\n[*] Replay complete in {} cycles", hier.time());
    hier.stats().print();
}

/// Loads the JSON config at `path`, or the built-in defaults when absent.
fn load_config(path: Option<&str>) -> Config {
    match path {
        None => Config::default(),
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config {path}: {e}");
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {path}: {e}");
                process::exit(1);
            })
        }
    }
}

/// Parses the whole trace file up front so malformed lines fail before any
/// simulation runs.
fn load_trace(path: &str) -> Vec<Access> {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading trace {path}: {e}");
        process::exit(1);
    });

    let mut accesses = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(access) => accesses.push(access),
            None => {
                eprintln!("Error: malformed trace line {}: {line:?}", number + 1);
                eprintln!("  expected 'R <addr>' or 'W <addr> <value>'");
                process::exit(1);
            }
        }
    }
    accesses
}

/// Parses one non-empty trace line into an [`Access`].
fn parse_line(line: &str) -> Option<Access> {
    let mut parts = line.split_whitespace();
    let op = parts.next()?;
    let addr = parse_number(parts.next()?)?;
    let access = match op {
        "R" | "r" => {
            if parts.next().is_some() {
                return None;
            }
            Access::Read(addr)
        }
        "W" | "w" => {
            let value = parse_number(parts.next()?)?;
            if parts.next().is_some() {
                return None;
            }
            Access::Write(addr, value)
        }
        _ => return None,
    };
    Some(access)
}

/// Accepts decimal or `0x`-prefixed hex.
fn parse_number(text: &str) -> Option<u32> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else {
        text.parse().ok()
    }
}
