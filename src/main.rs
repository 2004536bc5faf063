use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::process;

use bintree::{Tree, TreeError};
use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Builds a binary tree and walks through its queries: display, mirror, BST
/// check, extrema, root-to-leaf paths and path sums
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Values to add to the tree, in order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_value = "5,8,4,3,7,1,2,6")]
    values: Vec<i32>,

    /// Path sum to look for; read from stdin when omitted
    #[arg(long, allow_hyphen_values = true)]
    sum: Option<i32>,

    /// Log verbosity, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("failed to read the target sum: {0}")]
    Io(#[from] io::Error),

    #[error("target sum is not an integer: {0}")]
    Parse(#[from] ParseIntError),
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let mut tree: Tree<i32> = cli.values.iter().copied().collect();
    tracing::info!(count = tree.count(), height = tree.height(), "built tree");

    println!("Contents of the binary tree:\n");
    print!("{tree}");
    section();

    println!("Mirrored binary tree:\n");
    tree.mirror();
    print!("{tree}");
    section();

    if tree.is_bst() {
        println!("This binary tree is a binary search tree");
    } else {
        println!("This binary tree is not a binary search tree");
    }
    section();

    println!("Maximum value: {}", tree.max()?);
    println!("Minimum value: {}", tree.min()?);
    section();

    println!("Root to leaf paths of:\n");
    tree.mirror();
    print!("{tree}");
    println!();
    tree.for_each_path(|path| {
        let line: Vec<String> = path.iter().map(|value| value.to_string()).collect();
        println!("{}", line.join(" "));
    })?;
    section();

    let target = match cli.sum {
        Some(sum) => sum,
        None => read_target()?,
    };
    if tree.has_path_with_sum(target)? {
        println!("Some root to leaf path sums to {target}");
    } else {
        println!("No root to leaf path sums to {target}");
    }

    Ok(())
}

fn section() {
    println!("\n------------------------------\n");
}

fn read_target() -> Result<i32, DemoError> {
    print!("Enter the sum to look for: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().parse()?)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::debug!(?filter, "logging initialised");
}
