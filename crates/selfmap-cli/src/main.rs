mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    config::ConfigSubcommand, needs::NeedsSubcommand, pattern::PatternSubcommand,
    vice::ViceSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "selfmap",
    about = "Self-knowledge lookup tables — needs, vices, patterns, birth charts, and content audits",
    version,
    propagate_version = true
)]
struct Cli {
    /// Content root (default: auto-detect from selfmap.yaml or .git/)
    #[arg(long, global = true, env = "SELFMAP_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log at debug level
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Need vocabulary, signatures, and suggested actions
    Needs {
        #[command(subcommand)]
        subcommand: NeedsSubcommand,
    },

    /// Vice glossary and the needs underneath each vice
    Vice {
        #[command(subcommand)]
        subcommand: ViceSubcommand,
    },

    /// Relational patterns and their unmet needs
    Pattern {
        #[command(subcommand)]
        subcommand: PatternSubcommand,
    },

    /// Western sign for a birth date
    Zodiac {
        /// Birth date (YYYY-MM-DD)
        date: String,
    },

    /// Chinese animal and element for a birth year
    Chinese {
        /// Birth year (e.g. 1990)
        year: i32,
    },

    /// Tzolkin kin, seal, and tone for a birth date
    Tzolkin {
        /// Birth date (YYYY-MM-DD)
        date: String,
    },

    /// Numerology profile for a life path or name number
    Numerology {
        /// Number to profile (e.g. 7, 11, 16)
        value: u32,
    },

    /// Composed birth chart with attribute stats
    Chart {
        /// Birth date (YYYY-MM-DD)
        date: String,

        /// Moon sign name
        #[arg(long)]
        moon: Option<String>,

        /// Rising sign name
        #[arg(long)]
        rising: Option<String>,
    },

    /// Audit a content tree against the shipped recommendations
    Audit {
        /// Render the Markdown report to the configured path
        #[arg(long)]
        write: bool,

        /// Only show checks with this status (pass, partial, fail, skip)
        #[arg(long)]
        only: Option<String>,
    },

    /// Validate the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Needs { subcommand } => cmd::needs::run(subcommand, cli.json),
        Commands::Vice { subcommand } => cmd::vice::run(subcommand, cli.json),
        Commands::Pattern { subcommand } => cmd::pattern::run(subcommand, cli.json),
        Commands::Zodiac { date } => cmd::zodiac::run(&date, cli.json),
        Commands::Chinese { year } => cmd::chinese::run(year, cli.json),
        Commands::Tzolkin { date } => cmd::tzolkin::run(&date, cli.json),
        Commands::Numerology { value } => cmd::numerology::run(value, cli.json),
        Commands::Chart { date, moon, rising } => {
            cmd::chart::run(&date, moon.as_deref(), rising.as_deref(), cli.json)
        }
        Commands::Audit { write, only } => cmd::audit::run(&root, write, only.as_deref(), cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
