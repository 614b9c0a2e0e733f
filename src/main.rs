//! Letter Boxed Solver - CLI
//!
//! Solves Letter Boxed puzzles from a dictionary file, generates random
//! solvable puzzles, and browses them in a TUI.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use letter_boxed::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, solve_puzzle},
    core::Board,
    output::{print_benchmark_result, print_puzzle, print_solve_result, print_user_board},
    solver::{GeneratorConfig, generator::DEFAULT_MAX_ATTEMPTS},
    wordlists::load_from_file,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Find NYT Letter Boxed solutions. Valid solutions are two words, \
             wherein the second word begins with the last letter of the first.",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    solve: SolveArgs,

    /// Path to a plaintext dictionary, one word per line (need not be sorted)
    #[arg(short = 'w', long, global = true, default_value = "/usr/share/dict/words")]
    wordlist: PathBuf,

    /// Seed for random puzzle generation (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Random boards to try before giving up on generation
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options for solving (the default command)
#[derive(Args)]
struct SolveArgs {
    /// The allowed letters, in clockwise order, e.g. tnlihawrudof.
    /// If omitted, a random set of letters is selected.
    #[arg(short, long)]
    letters: Option<String>,

    /// Number of solutions to show
    #[arg(short = 'n', long, default_value_t = letter_boxed::commands::solve::DEFAULT_TOP)]
    top: usize,

    /// Show every solution
    #[arg(short, long)]
    all: bool,

    /// Fail instead of generating a new puzzle when the letters have no solution
    #[arg(long)]
    no_fallback: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random puzzle that has a two-word solution
    Generate {
        /// Also print the shortest solution
        #[arg(short, long)]
        reveal: bool,
    },

    /// Measure how often random boards are solvable
    Benchmark {
        /// Number of random boards to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Interactive TUI mode
    Play,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "letter_boxed=info"
    } else {
        "letter_boxed=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    debug!(seed, wordlist = %cli.wordlist.display(), "starting");
    let mut rng = StdRng::seed_from_u64(seed);

    let generator = GeneratorConfig {
        max_attempts: cli.max_attempts,
    };

    match cli.command {
        None => run_solve_command(cli.solve, &cli.wordlist, generator, &mut rng),
        Some(Commands::Generate { reveal }) => {
            run_generate_command(reveal, &cli.wordlist, generator, &mut rng)
        }
        Some(Commands::Benchmark { count }) => run_benchmark_command(count, seed, &cli.wordlist),
        Some(Commands::Play) => run_play_command(&cli.wordlist, generator, rng),
    }
}

fn run_solve_command(
    args: SolveArgs,
    wordlist: &Path,
    generator: GeneratorConfig,
    rng: &mut StdRng,
) -> Result<()> {
    let mut config = SolveConfig::new(args.letters);
    config.top = args.top;
    config.show_all = args.all;
    config.fallback = !args.no_fallback;
    config.generator = generator;

    // Shown before the dictionary scan, which can take a while
    if let Some(letters) = &config.letters {
        print_user_board(&Board::from_letters(letters)?);
    }

    let result = solve_puzzle(&config, wordlist, rng)?;
    print_solve_result(&result, &config);
    Ok(())
}

fn run_generate_command(
    reveal: bool,
    wordlist: &Path,
    generator: GeneratorConfig,
    rng: &mut StdRng,
) -> Result<()> {
    let mut config = SolveConfig::new(None);
    config.generator = generator;

    let result = solve_puzzle(&config, wordlist, rng)?;
    print_puzzle(&result);

    if reveal && let Some(best) = result.solution.best() {
        println!("{best}");
    }
    Ok(())
}

fn run_benchmark_command(count: usize, seed: u64, wordlist: &Path) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;

    println!("Running benchmark on {count} random boards (seed {seed})...");
    let config = BenchmarkConfig {
        boards: count,
        seed,
        show_progress: true,
    };
    let result = run_benchmark(&dictionary, config);
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(wordlist: &Path, generator: GeneratorConfig, mut rng: StdRng) -> Result<()> {
    use letter_boxed::interactive::{App, run_tui};
    use letter_boxed::solver::generate;

    let dictionary = load_dictionary(wordlist)?;
    let solution = generate(&mut rng, &dictionary, generator)?;

    let app = App::new(&dictionary, solution, rng, generator);
    run_tui(app)
}

fn load_dictionary(wordlist: &Path) -> Result<Vec<String>> {
    load_from_file(wordlist)
        .with_context(|| format!("Failed to read dictionary {}", wordlist.display()))
}
