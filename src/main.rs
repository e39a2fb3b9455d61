use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use quadbench::{
    fib::ProviderKind,
    harness::{HarnessBuilder, HarnessSettings},
    logging::init_logging,
    profile::{FibProfile, Profile, ProfileLoader, SortProfile},
    report::{RunRecord, WorkloadOutcome},
    sequence::SequenceSpec,
    sort::SortVariant,
    workloads::register_profile,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Bubble sort and threaded Fibonacci micro-benchmarks")]
struct Cli {
    /// Directory for JSON run reports (no reports when omitted)
    #[arg(long, global = true)]
    report_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sort a random sequence with one or more bubble sort variants
    Sort {
        /// Variant to run; repeat for several (defaults to both)
        #[arg(long = "variant", value_enum)]
        variants: Vec<SortVariant>,

        #[arg(long, default_value_t = 10_000)]
        len: usize,

        #[arg(long, default_value_t = 0)]
        min: i64,

        #[arg(long, default_value_t = 100)]
        max: i64,

        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
    /// Compute fib(n) on one thread per logical processor and sum the results
    Fib {
        #[arg(long, default_value_t = 38)]
        n: u32,

        /// Override the worker count (defaults to the processor count)
        #[arg(long)]
        threads: Option<usize>,

        #[arg(long, value_enum, default_value_t = ProviderKind::Recursive)]
        provider: ProviderKind,
    },
    /// Run every workload defined in a profile
    Run {
        /// Path to a profile YAML file (built-in profile when omitted)
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let profile = match cli.command {
        Command::Sort {
            variants,
            len,
            min,
            max,
            seed,
        } => Profile {
            name: "sort".to_string(),
            description: None,
            seed,
            sort: Some(SortProfile {
                variants: if variants.is_empty() {
                    SortVariant::all()
                } else {
                    dedup_variants(variants)
                },
                sequence: SequenceSpec { len, min, max },
            }),
            fibonacci: None,
        },
        Command::Fib {
            n,
            threads,
            provider,
        } => Profile {
            name: "fib".to_string(),
            description: None,
            seed: 0,
            sort: None,
            fibonacci: Some(FibProfile {
                n,
                threads,
                provider,
            }),
        },
        Command::Run { profile } => match profile {
            Some(path) => ProfileLoader::new(".").load(path)?,
            None => Profile::builtin(),
        },
    };
    profile.validate()?;

    let settings = HarnessSettings {
        profile_name: profile.name.clone(),
        seed: profile.seed,
        report_dir: cli.report_dir,
    };
    let mut builder = HarnessBuilder::new(settings);
    register_profile(&mut builder, &profile);
    let mut harness = builder.build();

    harness.run_with_hook(print_record)?;
    Ok(())
}

/// Keeps the first occurrence of each repeated `--variant`.
fn dedup_variants(variants: Vec<SortVariant>) -> Vec<SortVariant> {
    let mut unique = Vec::with_capacity(variants.len());
    for variant in variants {
        if !unique.contains(&variant) {
            unique.push(variant);
        }
    }
    unique
}

fn print_record(record: &RunRecord) {
    match &record.outcome {
        WorkloadOutcome::BubbleSort {
            variant,
            len,
            sort_ms,
            stats,
        } => println!(
            "{variant} bubble sort of {len} values: {sort_ms:.3} ms, {} passes, {} comparisons, {} swaps",
            stats.passes, stats.comparisons, stats.swaps
        ),
        WorkloadOutcome::Fibonacci { report, .. } => {
            println!("Sum of Fibonacci results: {}", report.sum);
            println!("Time taken: {}", report.elapsed.as_secs_f64());
        }
    }
}
