//! Deutsch and Deutsch-Jozsa circuits.
//!
//! Both problems decide, with a single execution, whether a hidden boolean
//! function is constant or balanced. The function is wired in as an oracle
//! on one extra output qubit, the last one.

use clap::ValueEnum;
use rand::Rng;
use tracing::info;

use crate::circuit::QuantumCircuit;
use crate::error::Result;
use crate::execution::QuantumCircuitExecution;
use crate::matrix::Tolerance;
use crate::vector::Ket;

/// Oracles for the one-input Deutsch problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DeutschOracle {
    /// f(0) != f(1)
    Balanced,
    /// f(x) = 0
    ConstantZero,
    /// f(x) = 1
    ConstantOne,
}

impl DeutschOracle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..3) {
            0 => DeutschOracle::Balanced,
            1 => DeutschOracle::ConstantOne,
            _ => DeutschOracle::ConstantZero,
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            DeutschOracle::Balanced => Verdict::Balanced,
            DeutschOracle::ConstantZero | DeutschOracle::ConstantOne => Verdict::Constant,
        }
    }
}

/// Oracles for the multi-input Deutsch-Jozsa problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum JozsaOracle {
    /// NOT on the output qubit
    Constant,
    /// Parity of the inputs, one CNOT per input qubit
    Balanced,
}

impl JozsaOracle {
    /// The oracle as a standalone circuit over `num_inputs + 1` qubits.
    pub fn circuit(&self, num_inputs: usize) -> Result<QuantumCircuit> {
        let output = num_inputs;
        let mut oracle = QuantumCircuit::new(num_inputs + 1);
        match self {
            JozsaOracle::Constant => {
                oracle.X(output)?;
            }
            JozsaOracle::Balanced => {
                for input in 0..num_inputs {
                    oracle.CX(input, output)?;
                }
            }
        }
        Ok(oracle)
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            JozsaOracle::Constant => Verdict::Constant,
            JozsaOracle::Balanced => Verdict::Balanced,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Constant,
    Balanced,
}

/// `H(0, 1) -> oracle -> H(0)` over two qubits.
pub fn deutsch_circuit(oracle: DeutschOracle) -> Result<QuantumCircuit> {
    let mut circuit = QuantumCircuit::new(2);
    circuit.H(&[0, 1])?;

    match oracle {
        DeutschOracle::Balanced => {
            circuit.CX(0, 1)?;
        }
        DeutschOracle::ConstantOne => {
            circuit.X(1)?;
        }
        DeutschOracle::ConstantZero => {}
    }

    circuit.H(&[0])?;
    Ok(circuit)
}

/// Hadamard on every qubit, the oracle as one sub-circuit, then Hadamard on
/// the input qubits.
pub fn deutsch_jozsa_circuit(oracle: JozsaOracle, num_inputs: usize) -> Result<QuantumCircuit> {
    let num_qubits = num_inputs + 1;
    let all = (0..num_qubits).collect::<Vec<_>>();
    let inputs = (0..num_inputs).collect::<Vec<_>>();

    let mut circuit = QuantumCircuit::new(num_qubits);
    circuit
        .H(&all)?
        .add_circuit(&oracle.circuit(num_inputs)?)?
        .H(&inputs)?;
    Ok(circuit)
}

/// Every qubit starts in |1>.
pub fn register_input(num_qubits: usize) -> Vec<Ket> {
    vec![Ket::ONE; num_qubits]
}

/// A constant oracle leaves qubit 0 in |1>; any of the balanced oracles
/// here drive it to |0>.
pub fn classify(execution: &QuantumCircuitExecution) -> Result<Verdict> {
    let probability = execution.measure_probability_on(0)?;
    let verdict = if (probability - 1.0).abs() <= Tolerance::STD.re {
        Verdict::Constant
    } else {
        Verdict::Balanced
    };

    info!(probability, ?verdict, "classified oracle");
    Ok(verdict)
}

/// Builds, runs and classifies the circuit for `oracle`.
pub fn run_deutsch(oracle: DeutschOracle) -> Result<(QuantumCircuit, QuantumCircuitExecution, Verdict)> {
    let mut circuit = deutsch_circuit(oracle)?;
    let execution = circuit.exec(&register_input(2))?;
    let verdict = classify(&execution)?;
    Ok((circuit, execution, verdict))
}

pub fn run_deutsch_jozsa(
    oracle: JozsaOracle,
    num_inputs: usize,
) -> Result<(QuantumCircuit, QuantumCircuitExecution, Verdict)> {
    let mut circuit = deutsch_jozsa_circuit(oracle, num_inputs)?;
    let execution = circuit.exec(&register_input(num_inputs + 1))?;
    let verdict = classify(&execution)?;
    Ok((circuit, execution, verdict))
}
