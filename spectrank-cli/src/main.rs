mod config;
mod output;
mod parse;

use clap::Parser;
use spectrank_core::{
    aggregate, build_transition_matrix, constants::DEFAULT_TRANSITION_FLOOR, format_matrix,
    rankings_to_comparisons, AggregateOptions, ItemIndex,
};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "spectrank",
    version,
    about = "Aggregate partial rankings with Borda Count and Rank Centrality"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Aggregate a rankings file into Borda and Rank Centrality scoreboards
    Rank(RankArgs),
    /// Convert race-results CSVs into a rankings file
    Prepare(PrepareArgs),
    /// Create a default config file at ~/.config/spectrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// File with one delimited ranking per line, winner first (stdin if omitted)
    #[arg(long)]
    rankings: Option<PathBuf>,

    /// Field delimiter within a ranking line (default: ",")
    #[arg(long)]
    delimiter: Option<String>,

    /// Irreducibility floor for the transition matrix
    #[arg(long)]
    floor: Option<f64>,

    /// Output JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Print the transition matrix to stderr before scoring
    #[arg(long)]
    show_matrix: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/spectrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct PrepareArgs {
    /// CSV of race results: a header row, then one race per row of 1-based
    /// competitor numbers in finish order
    #[arg(long)]
    races: PathBuf,

    /// CSV of competitor names with an "x" column; row order defines the
    /// competitor numbering
    #[arg(long)]
    names: PathBuf,

    /// Output rankings file (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Delimiter for the emitted ranking lines
    #[arg(long, default_value = parse::DEFAULT_DELIMITER)]
    delimiter: String,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Prepare(args) => run_prepare(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default delimiter or transition floor.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let delimiter = args
        .delimiter
        .clone()
        .or(cfg.delimiter)
        .unwrap_or_else(|| parse::DEFAULT_DELIMITER.to_string());
    let floor = args.floor.or(cfg.transition_floor).unwrap_or(DEFAULT_TRANSITION_FLOOR);

    let content = match args.rankings {
        Some(ref path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read rankings file {}: {e}", path.display()))),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail("No rankings provided. Use --rankings <file> or pipe ranking lines via stdin.");
            }
            let mut buffer = String::new();
            stdin
                .lock()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|e| bail(format!("Failed to read stdin: {e}")));
            buffer
        }
    };

    let rankings = parse::parse_rankings(&content, &delimiter).unwrap_or_else(|e| bail(e));
    if rankings.is_empty() {
        bail("No rankings found in the input.");
    }

    if args.verbose {
        eprintln!("Loaded {} rankings (delimiter {delimiter:?})", rankings.len());
    }

    if args.show_matrix {
        let comparisons = rankings_to_comparisons(&rankings);
        let index = ItemIndex::from_comparisons(&comparisons);
        let indexed = index.index_comparisons(&comparisons);
        match build_transition_matrix(&indexed, floor) {
            Ok(p) => eprint!("{}", format_matrix(&p)),
            Err(e) => bail(e),
        }
    }

    let result = aggregate(&rankings, &AggregateOptions { transition_floor: floor })
        .unwrap_or_else(|e| bail(e));

    if args.verbose {
        eprintln!("Scored {} items", result.borda.len());
    }

    if args.json {
        output::print_json(&result.borda, &result.centrality, rankings.len());
    } else {
        output::print_tables(&result.borda, &result.centrality, rankings.len());
    }
}

fn run_prepare(args: PrepareArgs) {
    let names_content = std::fs::read_to_string(&args.names)
        .unwrap_or_else(|e| bail(format!("Failed to read names file {}: {e}", args.names.display())));
    let names = parse::parse_competitor_names(&names_content)
        .unwrap_or_else(|e| bail(format!("{}: {e}", args.names.display())));

    let races_content = std::fs::read_to_string(&args.races)
        .unwrap_or_else(|e| bail(format!("Failed to read races file {}: {e}", args.races.display())));
    let lines = parse::races_to_rankings(&races_content, &names, &args.delimiter)
        .unwrap_or_else(|e| bail(format!("{}: {e}", args.races.display())));

    match args.output {
        Some(ref path) => {
            std::fs::write(path, lines.join("\n") + "\n")
                .unwrap_or_else(|e| bail(format!("Failed to write {}: {e}", path.display())));
            eprintln!("Wrote {} rankings to {}", lines.len(), path.display());
        }
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }
}
