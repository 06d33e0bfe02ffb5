//! Command-line host for the simulator.
//!
//! Reads a JSON [`SimulationRequest`] from a file or stdin (or generates a
//! random workload), runs it, and prints the JSON response on stdout.
//! Logs go to stderr.
//!
//! Environment variables:
//! - `RUST_LOG`: log filter (default: info)
//! - `CPUSIM_LOG_JSON`: JSON log output when `1` or `true`

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_cpusched::dispatching::PriorityOrder;
use u_cpusched::models::{random_workload, Time, WorkloadShape};
use u_cpusched::{simulate, Algorithm, SimulationRequest};

#[derive(Parser, Debug)]
#[command(name = "cpusim", version, about = "Simulate CPU scheduling policies")]
struct Cli {
    /// JSON request file; `-` or omitted reads stdin.
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate a random workload with this many processes.
    #[arg(long, value_name = "COUNT")]
    random: Option<usize>,

    /// Seed for `--random`.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Latest arrival for `--random`.
    #[arg(long, default_value_t = 10)]
    max_arrival: Time,

    /// Longest burst for `--random`.
    #[arg(long, default_value_t = 10)]
    max_burst: Time,

    /// Algorithm (FCFS, SJF, SRTF, Priority, RoundRobin); overrides the request.
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Round-robin quantum; overrides the request.
    #[arg(short, long)]
    quantum: Option<Time>,

    /// Priority order (lower|higher); overrides the request.
    #[arg(long)]
    priority_order: Option<PriorityOrder>,

    /// Pretty-print the response.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut request = load_request(&cli)?;
    if let Some(algorithm) = cli.algorithm {
        request.algorithm = algorithm;
    }
    if let Some(quantum) = cli.quantum {
        request.time_quantum = Some(quantum);
    }
    if let Some(order) = cli.priority_order {
        request.priority_order = Some(order);
    }

    info!(
        algorithm = %request.algorithm,
        processes = request.processes.len(),
        "running simulation"
    );
    let response = simulate(&request)?;

    let out = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{out}");
    Ok(())
}

fn load_request(cli: &Cli) -> Result<SimulationRequest> {
    if let Some(count) = cli.random {
        let shape = WorkloadShape::with_count(count)
            .with_max_arrival(cli.max_arrival)
            .with_max_burst(cli.max_burst);
        let processes = random_workload(&mut StdRng::seed_from_u64(cli.seed), &shape);
        let algorithm = cli.algorithm.unwrap_or(Algorithm::Fcfs);
        let mut request = SimulationRequest::new(processes, algorithm);
        // --quantum and --priority-order still override these in main
        request.time_quantum = Some(2);
        request.priority_order = Some(PriorityOrder::Lower);
        return Ok(request);
    }

    let raw = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("parsing simulation request")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("CPUSIM_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}
