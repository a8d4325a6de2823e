//! Page-replacement simulator CLI.
//!
//! Replays a page reference string against a fixed frame count under one or
//! more eviction policies and prints faults, hits and hit ratio per policy.
//! A thin wrapper: all simulation logic lives in the `pagesim` library.

use std::process;

use clap::{Parser, ValueEnum};

use pagesim::{PageId, Policy, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    version,
    about = "Simulate memory-page replacement policies over a reference string",
    long_about = "Replays a page reference string against a fixed number of frames and \
reports faults, hits and hit ratio for each selected eviction policy.\n\n\
Examples:\n  \
pagesim --frames 3 --refs 7,0,1,2,0,3,0,4,2,3,0,3,2\n  \
pagesim --frames 4 --refs 1,2,3,4,1,2,5,1,2,3,4,5 --policy optimal --trace"
)]
struct Cli {
    /// Page reference string, comma separated (e.g. 7,0,1,2,0,3).
    #[arg(short, long, value_delimiter = ',', required = true)]
    refs: Vec<u32>,

    /// Number of page frames available to the simulation.
    #[arg(short, long)]
    frames: usize,

    /// Policies to simulate; defaults to all four.
    #[arg(short, long, value_enum)]
    policy: Vec<PolicyArg>,

    /// Also print the per-reference page sequence ("-" marks a hit).
    #[arg(long)]
    trace: bool,
}

/// CLI-facing policy names; kept separate so the library stays free of
/// argument-parsing concerns.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyArg {
    Fifo,
    Optimal,
    Lru,
    Clock,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fifo => Policy::Fifo,
            PolicyArg::Optimal => Policy::Optimal,
            PolicyArg::Lru => Policy::Lru,
            PolicyArg::Clock => Policy::Clock,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let references: Vec<PageId> = cli.refs.iter().copied().map(PageId::new).collect();

    let sim = match Simulator::new(references, cli.frames) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let policies: Vec<Policy> = if cli.policy.is_empty() {
        Policy::ALL.to_vec()
    } else {
        cli.policy.iter().map(|&arg| Policy::from(arg)).collect()
    };

    println!(
        "Reference string: {} entries, {} frames",
        sim.references().len(),
        sim.capacity()
    );
    println!();

    for policy in policies {
        let result = sim.run(policy);

        println!("Policy: {}", policy);
        println!("  Faults:    {}", result.stats.faults);
        println!("  Hits:      {}", result.stats.hits);
        println!("  Hit ratio: {:.2}%", result.stats.hit_ratio() * 100.0);
        if cli.trace {
            println!("  Sequence:  {}", result.trace);
        }
        println!();
    }
}
