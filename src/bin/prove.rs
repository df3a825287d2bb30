//! Command-line theorem prover for the clause language

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use refute::{parse_file, prove, SearchConfig, Verdict};

#[derive(Parser)]
#[command(name = "prove")]
#[command(version)]
#[command(about = "Prove a query by resolution refutation", long_about = None)]
struct Cli {
    /// Input file: clauses terminated by `.`, one query terminated by `?`
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Print only the result line
    #[arg(short, long)]
    quiet: bool,

    /// Emit the verdict and proof as JSON
    #[arg(long)]
    json: bool,

    /// Maximum search iterations before giving up
    #[arg(long, default_value_t = 10_000)]
    max_iterations: usize,

    /// Maximum knowledge-base size before giving up
    #[arg(long, default_value_t = 10_000)]
    max_clauses: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let problem = parse_file(&cli.input)
        .with_context(|| format!("failed to load '{}'", cli.input.display()))?;

    if !cli.quiet && !cli.json {
        println!("Input clauses: ");
        print!("{}", problem);
        println!();
    }

    let config = SearchConfig {
        max_iterations: cli.max_iterations,
        max_clauses: cli.max_clauses,
    };
    let verdict = prove(&problem, &config).context("proof search failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(match verdict {
            Verdict::ResourceLimit => ExitCode::from(2),
            _ => ExitCode::SUCCESS,
        });
    }

    match verdict {
        Verdict::Proved(proof) => {
            println!("Result: TRUE.");
            if !cli.quiet {
                println!("\nProof clauses added:");
                print!("{}", proof);
            }
            Ok(ExitCode::SUCCESS)
        }
        Verdict::Disproved => {
            println!("Result: FALSE. No solution.");
            Ok(ExitCode::SUCCESS)
        }
        Verdict::ResourceLimit => {
            println!(
                "Result: UNDECIDED. Gave up after {} iterations or {} clauses.",
                cli.max_iterations, cli.max_clauses
            );
            Ok(ExitCode::from(2))
        }
    }
}
