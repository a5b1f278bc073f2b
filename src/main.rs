use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

use krugi::clipboard::copy_to_clipboard;
use krugi::{Counter, CounterSnapshot, CounterStore, TARGET_CIRCLES};

/// Track practice circles toward the 5556 goal
#[derive(Parser)]
#[command(name = "krugi")]
#[command(about = "Persisted counter for practice circles", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Override the state directory (default: platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add circles done today (non-positive amounts are ignored)
    Add {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Show current count, target and percentage (default command)
    Status,
    /// Copy the summary string to the clipboard
    Copy,
    /// Set the total to an absolute value, clamped to the target
    Set {
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
    /// Reset the counter to zero
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("krugi started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = match cli.data_dir {
        Some(dir) => dir,
        None => CounterStore::default_root()?,
    };
    let store = CounterStore::new(root)?;
    let mut counter = Counter::open(store)?;

    // Mutating commands report the new state through the change listener,
    // so a silently discarded input prints nothing at all.
    counter.on_change(Box::new(|snapshot| print_count_line(&snapshot)));

    match cli.command {
        Some(Commands::Add { amount }) => counter.increment(amount)?,
        Some(Commands::Set { count }) => counter.set_count(count)?,
        Some(Commands::Reset { force }) => {
            if force || confirm_reset()? {
                counter.reset()?;
            } else {
                println!("Reset cancelled");
            }
        }
        Some(Commands::Copy) => {
            let summary = counter.summary();
            println!("{summary}");
            println!("{}", copy_to_clipboard(&summary));
        }
        Some(Commands::Status) | None => print_status(counter.state()),
    }

    Ok(())
}

fn confirm_reset() -> anyhow::Result<bool> {
    println!("Reset the counter to zero? This cannot be undone. (y/N)");
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn print_count_line(snapshot: &CounterSnapshot) {
    let marker = if snapshot.is_complete() { "🎉" } else { "✅" };
    println!(
        "{marker} {} из {TARGET_CIRCLES} ({:.0}%)",
        snapshot.total_circles,
        snapshot.progress() * 100.0
    );
}

fn print_status(snapshot: &CounterSnapshot) {
    println!("{} из {TARGET_CIRCLES}", snapshot.total_circles);
    println!(
        "[{}] {:.0}%",
        progress_bar(snapshot.progress(), 30),
        snapshot.progress() * 100.0
    );
    if snapshot.is_complete() {
        println!("🎉 Цель достигнута");
    }
}

fn progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
