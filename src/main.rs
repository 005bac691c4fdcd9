mod banner;

use clap::Parser;
use colored::Colorize;
use crane::discovery::discover_inputs;
use crane::runner::{self, Job, Report};
use crane::solve::Answers;
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "crane",
    about = "Zero-copy crate-stacking puzzle solver",
    version,
    long_about = "Crane reads crate diagrams followed by move lists and prints the top \
                  crate of every stack after replaying the moves one crate at a time \
                  (part 1) and as whole blocks (part 2).\n\n\
                  Run `crane` with no arguments to see the available solvers."
)]
struct Cli {
    /// Input files or directories.  Files are run by every selected solver;
    /// directories are searched for `.txt` inputs named after a solver.
    #[arg()]
    paths: Vec<PathBuf>,

    /// Only run solvers whose name contains one of the given comma-separated
    /// patterns (e.g. --include folded).
    #[arg(short = 'i', long = "include", value_delimiter = ',')]
    include: Option<Vec<String>>,

    /// Skip solvers whose name contains one of the given comma-separated
    /// patterns.
    #[arg(short = 'e', long = "exclude", value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// Run each solver this many times on the loaded input and report the
    /// mean time per run.  Jobs run sequentially when greater than 1.
    #[arg(
        short = 'r',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    repeat: u32,

    /// Emit results as JSON instead of the default text format.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    solver: &'a str,
    file: String,
    #[serde(flatten)]
    answers: &'a Answers,
    runs: u32,
    mean_us: f64,
}

fn main() {
    let cli = Cli::parse();

    // ── no paths → show welcome screen ────────────────────────────────────────
    if cli.paths.is_empty() {
        banner::show_welcome();
        return;
    }

    let include = cli.include.unwrap_or_default();
    let exclude = cli.exclude.unwrap_or_default();
    let solvers = runner::select(&include, &exclude);

    // ── job planning ──────────────────────────────────────────────────────────
    let mut jobs: Vec<Job> = Vec::new();
    for path in &cli.paths {
        if path.is_file() {
            jobs.extend(solvers.iter().map(|&solver| Job {
                solver,
                path: path.clone(),
            }));
        } else if path.is_dir() {
            match discover_inputs(path) {
                Ok(found) => jobs.extend(runner::match_inputs(&solvers, &found)),
                Err(e) => fail(&format!("{}: {e}", path.display())),
            }
        } else {
            fail(&format!("input not found: {}", path.display()));
        }
    }

    // ── run ───────────────────────────────────────────────────────────────────
    let results = runner::run_all(&jobs, cli.repeat);
    let mut reports: Vec<Report> = Vec::new();
    let mut errors: Vec<String> = Vec::new();
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => errors.push(format!("{e:#}")),
        }
    }
    let total: Duration = reports.iter().map(|r| r.mean).sum();

    // ── output ────────────────────────────────────────────────────────────────
    if cli.json {
        print_json(&reports, &errors, total);
    } else {
        let mut current_file = None;
        for r in &reports {
            if current_file != Some(&r.path) {
                println!("{}", r.path.display().to_string().bold());
                current_file = Some(&r.path);
            }
            println!(
                "{} in {:>7.2} ms : part1={:<10} part2={:<10}",
                format!("{:<30}", r.solver).cyan(),
                millis(r.mean),
                r.answers.part_a,
                r.answers.part_b
            );
        }
        for e in &errors {
            eprintln!("{}: {e}", "error".red().bold());
        }
        if jobs.is_empty() {
            println!("{}", "No matching inputs".yellow());
        }
        println!("Total time : {:>7.2} ms", millis(total));
    }

    // ── exit code ─────────────────────────────────────────────────────────────
    if !errors.is_empty() {
        process::exit(2);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}: {message}", "error".red().bold());
    process::exit(2);
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn print_json(reports: &[Report], errors: &[String], total: Duration) {
    let results: Vec<JsonResult<'_>> = reports
        .iter()
        .map(|r| JsonResult {
            solver: r.solver,
            file: r.path.display().to_string(),
            answers: &r.answers,
            runs: r.runs,
            mean_us: r.mean.as_secs_f64() * 1e6,
        })
        .collect();

    let output = serde_json::json!({
        "results":  results,
        "errors":   errors,
        "total_us": total.as_secs_f64() * 1e6,
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&output).expect("serde_json::Value is always serialisable")
    );
}
