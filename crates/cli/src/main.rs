use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feedlens_engine::FilterEngine;
use feedlens_profile::{expand_local, parse_generated};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

mod profile_io;

#[derive(Parser)]
#[command(name = "feedlens")]
#[command(about = "Topic filtering for social-feed timeline payloads", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a captured timeline response body against a profile
    Filter {
        /// Profile file (.json or .toml)
        #[arg(short, long)]
        profile: PathBuf,

        /// Response body file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file; writes stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print filter statistics as JSON on stderr
        #[arg(long)]
        stats: bool,
    },

    /// Score a piece of text against a profile
    Score {
        /// Profile file (.json or .toml)
        #[arg(short, long)]
        profile: PathBuf,

        /// Text to score
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Generate keywords for a topic with the local fallback generator
    Keywords {
        /// Topic name
        #[arg(long)]
        name: String,

        /// Topic description
        #[arg(long, default_value = "")]
        description: String,

        /// Comma-separated keywords to seed the list with (markup tolerated)
        #[arg(long, default_value = "")]
        existing: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Filter {
            profile,
            input,
            output,
            stats,
        } => run_filter(&profile, input.as_deref(), output.as_deref(), stats),
        Commands::Score { profile, text } => run_score(&profile, &text.join(" ")),
        Commands::Keywords {
            name,
            description,
            existing,
        } => run_keywords(&name, &description, &existing),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run_filter(
    profile_path: &std::path::Path,
    input: Option<&std::path::Path>,
    output: Option<&std::path::Path>,
    stats: bool,
) -> Result<()> {
    let profile = profile_io::load_profile(profile_path)?;
    let body = read_body(input)?;

    let engine = FilterEngine::new();
    let outcome = engine.filter(&body, Some(&profile));

    match output {
        Some(path) => fs::write(path, &outcome.body)
            .with_context(|| format!("writing output to {}", path.display()))?,
        None => println!("{}", outcome.body),
    }

    if stats {
        match &outcome.stats {
            Some(stats) => eprintln!("{}", serde_json::to_string(stats)?),
            None => log::warn!("Response passed through unchanged; no statistics"),
        }
    }
    Ok(())
}

fn run_score(profile_path: &std::path::Path, text: &str) -> Result<()> {
    let profile = profile_io::load_profile(profile_path)?;
    let engine = FilterEngine::new();
    let result = engine.matcher().score(text, &profile);
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn run_keywords(name: &str, description: &str, existing: &str) -> Result<()> {
    let seed = parse_generated(existing);
    for keyword in expand_local(name, description, &seed) {
        println!("{keyword}");
    }
    Ok(())
}

fn read_body(input: Option<&std::path::Path>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading body from {}", path.display()))
        }
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("reading body from stdin")?;
            Ok(body)
        }
    }
}
