pub mod circuit;
pub mod deutsch;
pub mod error;
pub mod execution;
pub mod gates;
pub mod matrix;
pub mod vector;

#[cfg(test)]
mod test_util;

use num_complex::Complex;

pub type Qbit = Complex<f64>;

pub use circuit::QuantumCircuit;
pub use error::{Result, SimError};
pub use execution::QuantumCircuitExecution;
pub use gates::{Gate, GateKind};
pub use matrix::{Matrix, Tolerance};
pub use vector::{kron_kets, Bra, ColumnVector, Ket, RowVector};
