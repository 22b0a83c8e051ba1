use std::borrow::Cow;
use std::fmt::Display;

use tracing::{debug, trace};

use crate::error::{Result, SimError};
use crate::execution::QuantumCircuitExecution;
use crate::gates::Gate;
use crate::vector::{kron_kets, ColumnVector, Ket};

/// An ordered list of gates over a fixed number of qubits. The gate at
/// index 0 is applied first.
///
/// The fused unitary is cached after [`QuantumCircuit::compile`] and
/// dropped again by every call that appends a gate.
#[derive(Clone, Debug)]
pub struct QuantumCircuit {
    num_qubits: usize,
    gates: Vec<Gate>,
    compiled: Option<Gate>,
}

impl QuantumCircuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            compiled: None,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled.is_some()
    }

    fn add_gate(&mut self, gate: Gate) -> &mut Self {
        trace!(kind = gate.kind().name(), index = self.gates.len(), "append gate");
        self.compiled = None;
        self.gates.push(gate);
        self
    }

    /// Adds a single or multi-qubit Hadamard gate over the listed qubits.
    #[allow(non_snake_case)]
    pub fn H(&mut self, qubits: &[usize]) -> Result<&mut Self> {
        if qubits.len() > self.num_qubits {
            return Err(SimError::TooManyQubits {
                requested: qubits.len(),
                available: self.num_qubits,
            });
        }
        let gate = Gate::hadamard(qubits, self.num_qubits)?;
        Ok(self.add_gate(gate))
    }

    #[allow(non_snake_case)]
    pub fn X(&mut self, qubit: usize) -> Result<&mut Self> {
        let gate = Gate::pauli_x(qubit, self.num_qubits)?;
        Ok(self.add_gate(gate))
    }

    #[allow(non_snake_case)]
    pub fn CX(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        let gate = Gate::controlled_x(control, target, self.num_qubits)?;
        Ok(self.add_gate(gate))
    }

    /// Appends the whole of `other` as one gate.
    pub fn add_circuit(&mut self, other: &QuantumCircuit) -> Result<&mut Self> {
        if other.num_qubits != self.num_qubits {
            return Err(SimError::QubitCountMismatch {
                expected: self.num_qubits,
                actual: other.num_qubits,
            });
        }

        let gate = other.unitary()?.into_owned();
        Ok(self.add_gate(gate))
    }

    fn build_unitary(&self) -> Result<Gate> {
        if self.gates.is_empty() {
            Ok(Gate::wire(self.num_qubits))
        } else {
            Gate::combine(&self.gates)
        }
    }

    /// The cached unitary if there is one, otherwise a freshly fused one.
    fn unitary(&self) -> Result<Cow<'_, Gate>> {
        match &self.compiled {
            Some(gate) => Ok(Cow::Borrowed(gate)),
            None => self.build_unitary().map(Cow::Owned),
        }
    }

    /// Fuses all gates into one unitary. A circuit without gates compiles
    /// to the identity.
    pub fn compile(&mut self) -> Result<&Gate> {
        let gate = match self.compiled.take() {
            Some(gate) => gate,
            None => {
                debug!(
                    num_qubits = self.num_qubits,
                    num_gates = self.gates.len(),
                    "compiling circuit"
                );
                self.build_unitary()?
            }
        };
        let gate: &Gate = self.compiled.insert(gate);
        Ok(gate)
    }

    /// Runs the circuit on the product state of `qubit_states`, where
    /// `qubit_states[0]` is the most significant qubit.
    pub fn exec(&mut self, qubit_states: &[Ket]) -> Result<QuantumCircuitExecution> {
        let num_qubits = self.num_qubits;
        if qubit_states.len() != num_qubits {
            return Err(SimError::QubitCountMismatch {
                expected: num_qubits,
                actual: qubit_states.len(),
            });
        }

        let register = kron_kets(qubit_states);
        let unitary = self.compile()?;
        let output = unitary.matrix().multiply(register.matrix())?;

        debug!(num_qubits, "executed circuit");
        Ok(QuantumCircuitExecution::new(
            qubit_states.to_vec(),
            register,
            ColumnVector::from_matrix(&output),
        ))
    }
}

impl Display for QuantumCircuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} qubits:", self.num_qubits)?;
        if self.gates.is_empty() {
            return write!(f, " (empty)");
        }
        for (i, gate) in self.gates.iter().enumerate() {
            let separator = if i == 0 { " " } else { " -> " };
            write!(f, "{}{}", separator, gate.kind().name())?;
        }
        Ok(())
    }
}
