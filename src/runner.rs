//! Solver registry and the timed run harness.
//!
//! A [`Job`] pairs a registered [`Solver`] with an input file.  Running a job
//! reads the file into memory once, then calls the solver `repeat` times on
//! the same buffer, checking that every run gives the same answers.

use crate::solve::{self, Answers};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

// ── Registry ──────────────────────────────────────────────────────────────────

pub type SolveFn = fn(&str) -> crate::error::Result<Answers>;

#[derive(Debug, Clone, Copy)]
pub struct Solver {
    pub name: &'static str,
    /// Input files whose name contains this key are run by the solver.
    pub input_key: &'static str,
    pub run: SolveFn,
}

pub const SOLVERS: &[Solver] = &[
    Solver {
        name: "day05",
        input_key: "day05",
        run: solve::solve,
    },
    Solver {
        name: "day05_folded",
        input_key: "day05",
        run: solve::solve_folded,
    },
];

/// Solvers whose name contains one of `include` (all when empty) and none
/// of `exclude`.
pub fn select(include: &[String], exclude: &[String]) -> Vec<&'static Solver> {
    SOLVERS
        .iter()
        .filter(|s| include.is_empty() || include.iter().any(|p| s.name.contains(p.as_str())))
        .filter(|s| !exclude.iter().any(|p| s.name.contains(p.as_str())))
        .collect()
}

// ── Jobs ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Job {
    pub solver: &'static Solver,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub solver: &'static str,
    pub path: PathBuf,
    pub answers: Answers,
    pub runs: u32,
    /// Mean wall time of one run, file loading excluded.
    pub mean: Duration,
}

/// Every (file, solver) pair where the file name carries the solver's key.
///
/// Jobs are grouped by file, in `files` order, so reports for one input stay
/// together.
pub fn match_inputs(solvers: &[&'static Solver], files: &[PathBuf]) -> Vec<Job> {
    let mut jobs = Vec::new();
    for path in files {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        for &solver in solvers {
            if name.contains(solver.input_key) {
                jobs.push(Job {
                    solver,
                    path: path.clone(),
                });
            }
        }
    }
    jobs
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Run one job `repeat` times (at least once).
pub fn run(job: &Job, repeat: u32) -> Result<Report> {
    let input = read_input(&job.path)?;
    let runs = repeat.max(1);
    let context = || format!("{} on {}", job.solver.name, job.path.display());

    let start = Instant::now();
    let answers = (job.solver.run)(&input).with_context(context)?;
    for run in 1..runs {
        let again = (job.solver.run)(&input).with_context(context)?;
        if again != answers {
            bail!(
                "{}: run {} gave {again}, first run gave {answers}",
                context(),
                run + 1
            );
        }
    }
    let mean = start.elapsed() / runs;

    Ok(Report {
        solver: job.solver.name,
        path: job.path.clone(),
        answers,
        runs,
        mean,
    })
}

/// Run every job, in parallel unless timings are being collected over
/// several repetitions.  Results keep the order of `jobs`.
pub fn run_all(jobs: &[Job], repeat: u32) -> Vec<Result<Report>> {
    if repeat > 1 {
        jobs.iter().map(|job| run(job, repeat)).collect()
    } else {
        jobs.par_iter().map(|job| run(job, repeat)).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
