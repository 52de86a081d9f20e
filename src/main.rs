//! CLI entry point for keybind-recorder
//!
//! Provides command-line access to recording replays, key labels,
//! the key name table and settings validation.

use clap::{Parser, Subcommand};
use colored::*;
use keybind_recorder::{
    config::{expand_path, load_settings},
    core::{
        is_alphabetic, is_modifier, is_pointer_button, label, parse_key, validate_settings,
        KeyId, KeySet, Keybind, RecordSettings, VirtualKeyboard,
    },
    logging,
    replay::{parse_script, Edge},
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "keybind-recorder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a key script through a recording
    Record {
        /// Script file: one line of held keys per tick
        #[arg(short, long)]
        script: PathBuf,

        /// Record settings file (defaults when omitted)
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Print the label for a set of keys
    Label {
        /// Key names, aliases or codes
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// List every named key
    Keys,

    /// Validate a record settings file
    Check {
        /// Record settings file
        #[arg(short, long)]
        settings: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Record { script, settings } => record(&script, settings.as_deref())?,
        Commands::Label { keys } => print_label(&keys)?,
        Commands::Keys => list_keys(),
        Commands::Check { settings } => check_settings(&settings)?,
    }

    Ok(())
}

/// Replay a script and print what the recording and edge detection saw
fn record(script_path: &Path, settings_path: Option<&Path>) -> anyhow::Result<()> {
    let settings = match settings_path {
        Some(path) => load_settings(path)?,
        None => RecordSettings::default(),
    };

    let script_path = expand_path(script_path)?;
    let content = fs::read_to_string(&script_path)
        .map_err(|e| anyhow::anyhow!("Failed to read script: {}", e))?;
    let script = parse_script(&content)?;

    println!(
        "{} Replaying {} tick{} from {}",
        "→".cyan(),
        script.len(),
        if script.len() == 1 { "" } else { "s" },
        script_path.display()
    );

    let keyboard = VirtualKeyboard::new();
    let mut keybind = Keybind::with_settings(settings);
    let report = script.run(&mut keybind);

    for tick in &report.recording {
        let marker = if tick.finished {
            "✓".green().bold()
        } else {
            "·".dimmed()
        };

        println!(
            "  {} {} held: {:<24} recorded: {}",
            marker,
            format!("{:>4}", tick.tick).dimmed(),
            label(&tick.held, &keyboard),
            label(&tick.preview, &keyboard).cyan()
        );
    }

    match &report.recorded {
        Some(keys) => {
            println!(
                "\n{} Recorded keybind: {}",
                "✓".green().bold(),
                label(keys, &keyboard).cyan().bold()
            );
        }
        None => {
            println!(
                "\n{} Script ended before the recording finished",
                "✗".red().bold()
            );
            std::process::exit(1);
        }
    }

    if report.events.is_empty() {
        println!("{}", "No press or release after recording".dimmed());
    }

    for event in &report.events {
        let edge = match event.edge {
            Edge::Pressed => event.edge.to_string().green(),
            Edge::Released => event.edge.to_string().yellow(),
        };
        println!("  {} {}", format!("{:>4}", event.tick).dimmed(), edge);
    }

    Ok(())
}

/// Print the label of the given keys
fn print_label(names: &[String]) -> anyhow::Result<()> {
    let keys = names
        .iter()
        .map(|name| parse_key(name))
        .collect::<Result<KeySet, _>>()?;

    println!("{}", label(&keys, &VirtualKeyboard::new()));
    Ok(())
}

/// List every code that has a name
fn list_keys() {
    let keyboard = VirtualKeyboard::new();

    for code in 0..=u8::MAX {
        let key = KeyId::new(code);
        let name = label(&KeySet::from([key]), &keyboard);
        if name.starts_with("0x") {
            continue;
        }

        let mut tags = Vec::new();
        if is_modifier(key) {
            tags.push("modifier".magenta());
        }
        if is_pointer_button(key) {
            tags.push("pointer".blue());
        }
        if is_alphabetic(key) {
            tags.push("abc".green());
        }

        let tags = tags
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{} {:<16} {}", format!("0x{:02X}", code).dimmed(), name, tags);
    }
}

/// Validate a settings file and print warnings
fn check_settings(settings_path: &Path) -> anyhow::Result<()> {
    let settings = load_settings(settings_path)?;
    let warnings = validate_settings(&settings);

    if warnings.is_empty() {
        println!("{} {}", "✓".green().bold(), "Settings look good".bold());
        return Ok(());
    }

    println!(
        "{} Found {} warning{}:\n",
        "⚠".yellow().bold(),
        warnings.len(),
        if warnings.len() == 1 { "" } else { "s" }
    );

    for (i, warning) in warnings.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), warning);
    }

    std::process::exit(1);
}
