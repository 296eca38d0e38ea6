//! CLI frontend for World of Zuul.

mod commands;

use std::process;

use clap::{ArgAction, Parser, Subcommand};

use zuul_engine::GameConfig;

#[derive(Parser)]
#[command(
    name = "zuul",
    about = "World of Zuul — a very simple text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log more (-v for debug, -vv for trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk around the campus (the default)
    Play {
        /// Room to start in
        #[arg(short, long, default_value = zuul_core::START_ROOM)]
        start: String,

        /// Prompt shown before each command
        #[arg(long, default_value = "> ")]
        prompt: String,
    },

    /// Print every room with its exits and items
    Map {
        /// Output format: table, json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        None => commands::play::run(&GameConfig::default()),
        Some(Commands::Play { start, prompt }) => commands::play::run(
            &GameConfig::default()
                .with_start_room(start)
                .with_prompt(prompt),
        ),
        Some(Commands::Map { format }) => commands::map::run(&format),
    };

    if let Err(e) = result {
        log::debug!("exiting with error: {e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
