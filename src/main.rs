//! Bulls and Cows CLI
//!
//! Interactive command-line front-end for the Bulls and Cows engine.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bulls_cows::advisor::rank_candidates;
use bulls_cows::autoplay::{autoplay, average_guesses, benchmark_distribution, MAX_AUTOPLAY_TURNS};
use bulls_cows::{AdvisorMode, Code, EngineError, GameConfig, GameSession, NUM_CODES};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Debug, Parser)]
#[command(
    name = "bulls-cows",
    version,
    about = "Bulls and Cows with candidate elimination and entropy tracking"
)]
struct Cli {
    /// Number of suggested guesses shown after each guess
    #[arg(short = 'k', long, default_value_t = GameConfig::DEFAULT_SUGGESTIONS)]
    suggestions: usize,

    /// Do not track entropy reduction per guess
    #[arg(long)]
    no_reduction: bool,

    /// Suggestion strategy: "random" or "entropy"
    #[arg(long, default_value_t = AdvisorMode::Random)]
    advisor: AdvisorMode,

    /// Seed for the secret and the suggestions
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play interactively (default)
    Play,
    /// Let the advisor solve for a given secret
    Solve { secret: String },
    /// Self-play against every possible secret
    Bench,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stderr = io::stderr();
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(9) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn format_codes(codes: &[Code]) -> String {
    codes
        .iter()
        .map(Code::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_suggestions(suggestions: &[Code]) {
    if suggestions.is_empty() {
        println!("No suggestions available.");
    } else {
        println!("Suggested next guesses: {}", format_codes(suggestions));
    }
}

fn submit(session: &mut GameSession, input: &str, rng: &mut StdRng) -> Result<()> {
    match session.submit_input(input, rng) {
        Ok(outcome) => {
            println!();
            println!("{}", outcome.feedback);
            if outcome.won {
                println!();
                println!(
                    "🎉 Congratulations! You guessed the secret number in {} attempts!",
                    session.attempts()
                );
                println!("Type 'reset' to play again.");
            } else {
                println!("Entropy: {:.2} bits", outcome.entropy);
                if let Some(reduction) = outcome.entropy_reduction {
                    println!("Entropy reduction: {:.2} bits", reduction);
                }
                println!("Remaining possibilities: {}", outcome.remaining);
                print_suggestions(&outcome.suggestions);
            }
            println!();
            Ok(())
        }
        Err(EngineError::InvalidGuess(err)) => {
            println!("Invalid guess! Please enter 4 different digits. ({})", err);
            Ok(())
        }
        Err(EngineError::AlreadyWon { attempts }) => {
            println!(
                "You already won in {} attempts. Type 'reset' to play again.",
                attempts
            );
            Ok(())
        }
        Err(err @ EngineError::InternalInconsistency { .. }) => {
            Err(anyhow::Error::new(err).context("the game state is inconsistent, please report this"))
        }
    }
}

fn print_history(session: &GameSession) {
    let history = session.history();
    if history.is_empty() {
        println!("No guesses yet.");
        return;
    }
    println!();
    println!("{:>4} {:>6} {:>6} {:>6} {:>10}", "#", "Guess", "Bulls", "Cows", "Remaining");
    println!("{}", "-".repeat(36));
    for (i, record) in history.iter().enumerate() {
        println!(
            "{:>4} {:>6} {:>6} {:>6} {:>10}",
            i + 1,
            record.guess,
            record.feedback.bulls,
            record.feedback.cows,
            record.remaining
        );
    }
    println!();
}

fn print_stats(session: &GameSession) {
    println!();
    println!("{:>4} {:>14} {:>16}", "#", "Entropy (bits)", "Reduction (bits)");
    println!("{}", "-".repeat(36));
    let reductions = session.reduction_history();
    for (i, entropy) in session.entropy_history().iter().enumerate() {
        match reductions.get(i) {
            Some(reduction) => println!("{:>4} {:>14.3} {:>16.3}", i, entropy, reduction),
            None => println!("{:>4} {:>14.3} {:>16}", i, entropy, "-"),
        }
    }
    println!();
}

fn print_top(session: &GameSession, n: usize) {
    let top = rank_candidates(session.candidates(), n);
    if top.is_empty() {
        println!("No possible codes remaining.");
        return;
    }
    println!();
    println!("Top {} guesses:", top.len());
    println!("{:>4} {:>6} {:>12} {:>12}", "#", "Code", "Info (bits)", "Exp. Remain");
    println!("{}", "-".repeat(38));
    for (i, analysis) in top.iter().enumerate() {
        println!(
            "{:>4} {:>6} {:>12.3} {:>12.1}",
            i + 1,
            analysis.code,
            analysis.expected_information,
            analysis.expected_remaining
        );
    }
    println!();
}

fn run_interactive(config: GameConfig, rng: &mut StdRng) -> Result<()> {
    print_banner();

    let mut session = GameSession::new(config, rng);
    println!(
        "{} possible codes, {:.2} bits of entropy.",
        session.remaining_count(),
        session.current_entropy()
    );
    println!("Type 'help' for commands, or enter a 4-digit guess to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" => {
                if session.is_won() {
                    println!("The game is over. Type 'reset' to play again.");
                } else {
                    print_suggestions(&session.suggestions(rng));
                }
            }
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                print_top(&session, n);
            }
            "history" | "hist" => {
                print_history(&session);
            }
            "stats" => {
                print_stats(&session);
            }
            "reset" => {
                session.reset(rng);
                println!(
                    "New game started. {} possible codes.",
                    session.remaining_count()
                );
            }
            _ => {
                submit(&mut session, parts[0], rng)?;
            }
        }
    }

    Ok(())
}

fn run_solve(secret: &str, config: GameConfig, rng: &mut StdRng) -> Result<()> {
    let secret = Code::parse(secret).with_context(|| format!("invalid secret '{}'", secret))?;

    println!("Solving for: {}", secret);
    println!();

    let records = autoplay(secret, config, rng)?;
    for (i, record) in records.iter().enumerate() {
        println!(
            "Guess {}: {} → {} ({} left)",
            i + 1,
            record.guess,
            record.feedback,
            record.remaining
        );
    }

    println!();
    match records.last() {
        Some(record) if record.feedback.is_win() => {
            println!("Solved in {} guesses.", records.len());
        }
        _ => {
            println!("Not solved within {} guesses.", MAX_AUTOPLAY_TURNS);
        }
    }
    Ok(())
}

fn run_bench(config: GameConfig, seed: u64) -> Result<()> {
    println!(
        "Running self-play against all {} secrets (advisor: {})...",
        NUM_CODES, config.advisor
    );

    let spinner = Spinner::new("Computing...");
    let start = Instant::now();
    let distribution = benchmark_distribution(config, seed);
    let elapsed = start.elapsed();
    spinner.stop();
    let distribution = distribution?;

    let total: usize = distribution.iter().map(|(_, c)| c).sum();

    println!("Results:");
    println!("{}", "=".repeat(40));
    println!();
    println!("Guess distribution:");
    for (guesses, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {:>2} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", average_guesses(&distribution));
    println!("Total games: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = GameConfig::new()
        .with_suggestion_count(cli.suggestions)
        .with_reduction_tracking(!cli.no_reduction)
        .with_advisor(cli.advisor);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_interactive(config, &mut rng),
        Command::Solve { secret } => run_solve(&secret, config, &mut rng),
        Command::Bench => run_bench(config, cli.seed.unwrap_or(0)),
    }
}
