//! quizbank CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::CatalogArgs;

#[derive(Parser)]
#[command(
    name = "quizbank",
    version,
    about = "JavaScript and React interview question catalog"
)]
struct Cli {
    /// Question bank file, directory, or JSON snapshot
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List questions, optionally for one section
    List {
        /// Section to list (e.g. "arrays", "hooks")
        #[arg(long)]
        section: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show one question with its code sample and answer
    Show {
        /// Question ID
        id: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Find questions whose prompt contains some text (case-insensitive)
    Search {
        /// Text to look for
        text: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List questions carrying a tag
    Tagged {
        /// Tag to filter by
        tag: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Draw distinct questions at random
    Sample {
        /// How many questions to draw (default from config)
        count: Option<usize>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show question counts per section
    Sections,

    /// Validate question bank files
    Validate,

    /// Write the catalog to a JSON snapshot
    Export {
        /// Output file
        #[arg(long)]
        output: PathBuf,
    },

    /// Create starter config and example question banks
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbank=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let args = CatalogArgs {
        catalog: cli.catalog,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::List { section, format } => commands::list::execute(args, section, format),
        Commands::Show { id, format } => commands::show::execute(args, id, format),
        Commands::Search { text, format } => commands::query::search(args, text, format),
        Commands::Tagged { tag, format } => commands::query::tagged(args, tag, format),
        Commands::Sample {
            count,
            seed,
            format,
        } => commands::sample::execute(args, count, seed, format),
        Commands::Sections => commands::sections::execute(args),
        Commands::Validate => commands::validate::execute(args),
        Commands::Export { output } => commands::export::execute(args, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
