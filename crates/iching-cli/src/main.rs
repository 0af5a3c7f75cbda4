//! CLI frontend for the I Ching catalog and yarrow-stalk oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "iching",
    about = "I Ching: trigrams, hexagrams, changes, and yarrow-stalk readings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a trigram
    Trigram {
        /// Trigram number (1-8)
        number: String,

        /// List the hexagrams containing this trigram
        #[arg(long)]
        hexagrams: bool,

        /// Only hexagrams with the trigram in this half: top, bottom
        #[arg(short, long, requires = "hexagrams")]
        position: Option<String>,
    },

    /// Show a hexagram
    Hexagram {
        /// Hexagram number (1-64)
        number: String,

        /// List all 63 changes to other hexagrams
        #[arg(long)]
        changes: bool,

        /// Show the change to another hexagram
        #[arg(long, value_name = "NUMBER")]
        change_to: Option<String>,

        /// Flip lines, bottom first: "100001" flips lines 1 and 6
        #[arg(long, value_name = "LINES")]
        flip: Option<String>,
    },

    /// List the trigrams in a named arrangement
    Sequence {
        /// Arrangement name: earlierHeaven, laterHeaven
        name: String,
    },

    /// Cast a reading for a question
    Ask {
        /// The question; it seeds the yarrow-stalk draw
        question: String,

        /// Seed from the question only, so the same question gives the same reading
        #[arg(short, long)]
        seeded: bool,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the trigram/hexagram relationship graph as JSON
    Graph {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Trigram {
            number,
            hexagrams,
            position,
        } => commands::trigram::run(&number, hexagrams, position.as_deref()),
        Commands::Hexagram {
            number,
            changes,
            change_to,
            flip,
        } => commands::hexagram::run(&number, changes, change_to.as_deref(), flip.as_deref()),
        Commands::Sequence { name } => commands::sequence::run(&name),
        Commands::Ask {
            question,
            seeded,
            json,
        } => commands::ask::run(&question, seeded, json),
        Commands::Graph { output } => commands::graph::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
