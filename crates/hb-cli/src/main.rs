//! CLI frontend for the Heldenblatt character sheet tools.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hb",
    about = "Heldenblatt: tabletop character sheets from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a template character file to fill in
    Init {
        /// Path of the character file to create
        #[arg(default_value = "character.json")]
        file: PathBuf,
    },

    /// Validate a character file and list every problem
    Check {
        /// Character file (JSON)
        file: PathBuf,
    },

    /// Show the derived character summary
    Show {
        /// Character file (JSON)
        file: PathBuf,
    },

    /// Export the character sheet as a document
    Export {
        /// Character file (JSON)
        file: PathBuf,

        /// Output format: pdf, markdown, json
        #[arg(short, long, default_value = "pdf")]
        format: String,

        /// Output file path, or "-" for stdout (default: character_sheet.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Title printed at the top of the sheet
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Look up the description of a spell
    Spell {
        /// Spell name (e.g. "magic missile")
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { file } => commands::init::run(&file),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Export {
            file,
            format,
            output,
            title,
        } => commands::export::run(&file, &format, output.as_deref(), title.as_deref()),
        Commands::Spell { name } => commands::spell::run(&name.join(" ")),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
