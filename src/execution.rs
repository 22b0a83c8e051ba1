use std::fmt::Display;

use crate::error::{Result, SimError};
use crate::vector::{kron_kets, ColumnVector, Ket};

/// Result of running a circuit once: the input kets, the register built
/// from them and the evolved output state.
#[derive(Clone, Debug)]
pub struct QuantumCircuitExecution {
    inputs: Vec<Ket>,
    register: ColumnVector,
    output: ColumnVector,
}

fn bitstring(index: usize, width: usize) -> String {
    format!("{:0width$b}", index, width = width)
}

/// `'0'` maps to |0>, `'1'` to |1>; the first character is qubit 0.
fn computational_basis(bits: &str) -> Vec<Ket> {
    bits.chars()
        .map(|c| if c == '1' { Ket::ONE } else { Ket::ZERO })
        .collect()
}

impl QuantumCircuitExecution {
    pub(crate) fn new(inputs: Vec<Ket>, register: ColumnVector, output: ColumnVector) -> Self {
        Self {
            inputs,
            register,
            output,
        }
    }

    pub fn inputs(&self) -> &[Ket] {
        &self.inputs
    }

    pub fn register(&self) -> &ColumnVector {
        &self.register
    }

    pub fn output(&self) -> &ColumnVector {
        &self.output
    }

    pub fn num_qubits(&self) -> usize {
        self.output.size().ilog2() as usize
    }

    /// Probability of reading out the product state of `basis`, one ket per
    /// qubit.
    pub fn measure_probability(&self, basis: &[Ket]) -> Result<f64> {
        // n basis kets span a space of 2^n
        let num_qubits = self.num_qubits();
        if basis.len() != num_qubits {
            return Err(SimError::BasisSizeMismatch {
                expected: num_qubits,
                actual: basis.len(),
            });
        }

        let basis = kron_kets(basis);
        let magnitude = self.output.dotp(&basis)? / basis.dotp(&basis)?;
        Ok(magnitude.norm_sqr())
    }

    /// Probabilities of every computational basis outcome, indexed by the
    /// outcome's binary value (index 0 is all qubits off).
    pub fn measure_probabilities(&self) -> Result<Vec<f64>> {
        let num_qubits = self.num_qubits();
        (0..self.output.size())
            .map(|i| self.measure_probability(&computational_basis(&bitstring(i, num_qubits))))
            .collect()
    }

    /// Marginal probability that `qubit` reads 1.
    pub fn measure_probability_on(&self, qubit: usize) -> Result<f64> {
        let num_qubits = self.num_qubits();
        if qubit >= num_qubits {
            return Err(SimError::QubitIndexOutOfRange {
                index: qubit,
                num_qubits,
            });
        }

        let mut sum = 0.0;
        for i in 0..self.output.size() {
            let bits = bitstring(i, num_qubits);
            if bits.as_bytes()[qubit] == b'0' {
                continue;
            }
            sum += self.measure_probability(&computational_basis(&bits))?;
        }
        Ok(sum)
    }
}

impl Display for QuantumCircuitExecution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bin_width = self.num_qubits();

        for (i, value) in self.output.amplitudes().iter().enumerate() {
            writeln!(f, "|{:0width$b}>: {}", i, value, width = bin_width)?;
        }

        Ok(())
    }
}
