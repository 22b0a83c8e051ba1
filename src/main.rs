use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dense_qsim::deutsch::{run_deutsch, run_deutsch_jozsa, DeutschOracle, JozsaOracle, Verdict};
use dense_qsim::{QuantumCircuit, QuantumCircuitExecution};

#[derive(Parser)]
#[command(name = "dense-qsim")]
#[command(about = "Decide constant vs balanced oracles with a dense state-vector simulator")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the compiled unitary of the circuit
    #[arg(long, global = true)]
    show_matrix: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deutsch algorithm, one input qubit and one output qubit
    Deutsch {
        /// Oracle to hide; picked at random when omitted
        #[arg(short, long, value_enum)]
        oracle: Option<DeutschOracle>,
    },

    /// Deutsch-Jozsa algorithm over several input qubits
    DeutschJozsa {
        #[arg(short, long, value_enum)]
        oracle: JozsaOracle,

        /// Number of input qubits; the circuit has one more
        #[arg(short, long, default_value = "3")]
        inputs: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn report(
    circuit: &mut QuantumCircuit,
    execution: &QuantumCircuitExecution,
    verdict: Verdict,
    show_matrix: bool,
) -> Result<()> {
    println!("Circuit: {}", circuit);
    if show_matrix {
        println!("Compiled unitary:\n{}", circuit.compile()?.matrix());
    }
    println!("Output state:\n{}", execution);

    let probabilities = execution.measure_probabilities()?;
    let width = execution.num_qubits();
    for (i, probability) in probabilities.iter().enumerate() {
        println!("P(|{:0width$b}>) = {:.6}", i, probability, width = width);
    }

    match verdict {
        Verdict::Constant => println!("The oracle was constant"),
        Verdict::Balanced => println!("The oracle was balanced"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Deutsch { oracle } => {
            let oracle = oracle.unwrap_or_else(|| DeutschOracle::random(&mut rand::rng()));
            info!(?oracle, "running Deutsch");
            let (mut circuit, execution, verdict) = run_deutsch(oracle)?;
            report(&mut circuit, &execution, verdict, cli.show_matrix)?;
        }
        Commands::DeutschJozsa { oracle, inputs } => {
            info!(?oracle, inputs, "running Deutsch-Jozsa");
            let (mut circuit, execution, verdict) = run_deutsch_jozsa(oracle, inputs)?;
            report(&mut circuit, &execution, verdict, cli.show_matrix)?;
        }
    }

    Ok(())
}
