//! Command-line entry point for park-prune.
//!
//! Usage:
//!   park-prune [path] [--id `<ID>`]... [--dry-run]   - Remove target entries from the data file
//!   park-prune --list-targets                       - Show the built-in removal list

use clap::{Arg, ArgAction, Command};
use park_prune::prune::{prune_file, PruneOptions, DEFAULT_DATA_FILE, DEFAULT_TARGETS};
use std::path::Path;

fn main() {
    let matches = Command::new("park-prune")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Removes known-bad park entries from the texas-parks data module")
        .arg(
            Arg::new("path")
                .help("Path to the data file (default: src/data/texas-parks.ts)")
                .index(1),
        )
        .arg(
            Arg::new("id")
                .long("id")
                .help("Remove this identifier instead of the built-in list (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Report what would be removed without rewriting the file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-targets")
                .long("list-targets")
                .help("List the built-in target identifiers")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-targets") {
        handle_list_targets_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or(DEFAULT_DATA_FILE);
    let ids: Vec<&str> = match matches.get_many::<String>("id") {
        Some(values) => values.map(String::as_str).collect(),
        None => DEFAULT_TARGETS.iter().map(|t| t.id).collect(),
    };
    let options = PruneOptions {
        dry_run: matches.get_flag("dry-run"),
    };

    if let Err(e) = prune_file(Path::new(path), &ids, &options) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the list-targets command
fn handle_list_targets_command() {
    println!("Built-in removal targets:\n");
    for target in DEFAULT_TARGETS {
        println!("  {} - {}", target.id, target.note);
    }
}
