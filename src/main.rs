// Needed to write partial lines to the console
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use par_knn::{evaluate, load_table, Dataset};

/// Classify a query table by majority vote among each row's k nearest
/// neighbors in a labeled reference table.
#[derive(Parser)]
struct Args {
    /// Reference (training) table
    reference: PathBuf,
    /// Query (testing) table
    query: PathBuf,
    /// Number of neighbors consulted per query
    k: usize,
    /// Number of distinct class labels
    #[arg(long, default_value_t = 10)]
    labels: usize,
    /// Print the full confusion matrix after the summary
    #[arg(long)]
    matrix: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> par_knn::Result<()> {
    let reference = load_timed("reference", &args.reference)?;
    let query = load_timed("query", &args.query)?;

    print!("Classifying with k = {}... ", args.k);
    let _ = io::stdout().flush();
    let now = Instant::now();
    let evaluation = evaluate(&reference, &query, args.k, args.labels)?;
    println!("Done [{}ms]", now.elapsed().as_millis());

    println!(
        "hit: {} ({:.2}%); miss: {} ({:.2}%)",
        evaluation.hits(),
        evaluation.hit_rate(),
        evaluation.misses(),
        evaluation.miss_rate()
    );
    if args.matrix {
        print!("{}", evaluation.confusion());
    }
    Ok(())
}

fn load_timed(role: &str, path: &Path) -> par_knn::Result<Dataset> {
    print!("Loading {} data... ", role);
    let _ = io::stdout().flush();
    let now = Instant::now();
    let dataset = load_table(path)?;
    println!(
        "Loaded {} examples with {} features from {} [{}ms]",
        dataset.len(),
        dataset.n_features(),
        path.display(),
        now.elapsed().as_millis()
    );
    Ok(dataset)
}
