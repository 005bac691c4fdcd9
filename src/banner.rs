//! Welcome screen shown when `crane` is invoked with no paths.

use colored::Colorize;
use crane::runner::SOLVERS;
use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

const LOGO: &[&str] = &[
    "  ██████╗██████╗  █████╗ ███╗   ██╗███████╗",
    " ██╔════╝██╔══██╗██╔══██╗████╗  ██║██╔════╝",
    " ██║     ██████╔╝███████║██╔██╗ ██║█████╗  ",
    " ██║     ██╔══██╗██╔══██║██║╚██╗██║██╔══╝  ",
    " ╚██████╗██║  ██║██║  ██║██║ ╚████║███████╗",
    "  ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝╚══════╝",
];

const USAGE: &[(&str, &str)] = &[
    ("crane data/", "run every solver on matching inputs"),
    ("crane data/day05.txt", "run every solver on one file"),
    ("crane data/ -i folded", "only solvers whose name matches"),
    ("crane data/ -e folded", "skip solvers whose name matches"),
    ("crane data/ -r 10000", "repeat each run and report the mean"),
    ("crane data/ --json", "emit structured JSON output"),
];

fn pause(ms: u64) {
    let _ = io::stdout().flush();
    thread::sleep(Duration::from_millis(ms));
}

/// Print the overview.  The logo is revealed line by line on a TTY and
/// printed plainly otherwise.
pub fn show_welcome() {
    let animate = io::stdout().is_terminal();
    let version = env!("CARGO_PKG_VERSION");

    println!();
    for (i, line) in LOGO.iter().enumerate() {
        let coloured = match i {
            0 | 5 => line.truecolor(40, 110, 170).bold(),
            1 | 4 => line.truecolor(60, 140, 200).bold(),
            _ => line.truecolor(80, 170, 230).bold(),
        };
        println!("  {coloured}");
        if animate {
            pause(35);
        }
    }
    println!();
    println!(
        "  {}",
        format!("Crate-stacking puzzle solver  —  v{version}")
            .white()
            .bold()
    );
    println!();

    let rule = "─".repeat(70);
    println!("  {}", rule.truecolor(60, 60, 60));
    println!();
    println!("  {}", "Solvers".bold().underline());
    println!();
    for solver in SOLVERS {
        println!(
            "    {}  {}",
            format!("{:<16}", solver.name).cyan().bold(),
            format!("inputs matching *{}*.txt", solver.input_key).truecolor(120, 120, 120),
        );
    }
    println!();
    println!("  {}", "Usage".bold().underline());
    println!();
    for (cmd, desc) in USAGE {
        println!(
            "    {}  {}",
            format!("{cmd:<28}").green().bold(),
            desc.truecolor(120, 120, 120),
        );
        if animate {
            pause(20);
        }
    }
    println!();
    println!("  {}", rule.truecolor(60, 60, 60));
    println!();
}
