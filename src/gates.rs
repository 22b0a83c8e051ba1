use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt::Display;

use nalgebra::DMatrix;
use num_complex::Complex;
use tracing::trace;

use crate::error::{Result, SimError};
use crate::matrix::{Matrix, Tolerance};
use crate::vector::{Bra, Ket};
use crate::Qbit;

const ONE: Qbit = Complex::new(1.0, 0.0);
const ZERO: Qbit = Complex::new(0.0, 0.0);
const ROOT2_INV: Qbit = Complex::new(FRAC_1_SQRT_2, 0.0);
const MINUS_ROOT2_INV: Qbit = Complex::new(-FRAC_1_SQRT_2, 0.0);

const HADAMARD_ENTRIES: [Qbit; 4] = [ROOT2_INV, ROOT2_INV, ROOT2_INV, MINUS_ROOT2_INV];
const PAULI_X_ENTRIES: [Qbit; 4] = [ZERO, ONE, ONE, ZERO];

pub fn h_matrix() -> Matrix {
    Matrix::from(DMatrix::from_row_slice(2, 2, &HADAMARD_ENTRIES))
}

pub fn x_matrix() -> Matrix {
    Matrix::from(DMatrix::from_row_slice(2, 2, &PAULI_X_ENTRIES))
}

pub fn id_matrix() -> Matrix {
    Matrix::identity(2)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateKind {
    Hadamard,
    Wire,
    PauliX,
    ControlledX,
    /// Product of several gates, e.g. a compiled circuit
    Combined,
}

impl GateKind {
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Hadamard => "Hadamard",
            GateKind::Wire => "Identity",
            GateKind::PauliX => "Pauli-X",
            GateKind::ControlledX => "C-X",
            GateKind::Combined => "Combined",
        }
    }
}

/// A unitary acting on every qubit of a circuit. Single-qubit operations are
/// expanded with identities on the untouched qubits, so the matrix is always
/// `2^n x 2^n`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gate {
    matrix: Matrix,
    kind: GateKind,
}

fn check_index(index: usize, num_qubits: usize) -> Result<()> {
    if index >= num_qubits {
        return Err(SimError::QubitIndexOutOfRange { index, num_qubits });
    }
    Ok(())
}

/// Kronecker chain over qubit positions `0..num_qubits`, qubit 0 outermost.
fn expand<'a>(num_qubits: usize, mut factor_at: impl FnMut(usize) -> &'a Matrix) -> Matrix {
    let mut matrix = Matrix::identity(1);
    for i in 0..num_qubits {
        matrix = matrix.kronecker(factor_at(i));
    }
    matrix
}

impl Gate {
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn num_qubits(&self) -> usize {
        self.matrix.rows().ilog2() as usize
    }

    /// The identity on `num_qubits` qubits.
    pub fn wire(num_qubits: usize) -> Self {
        Self {
            matrix: Matrix::identity(1 << num_qubits),
            kind: GateKind::Wire,
        }
    }

    /// Hadamard on every qubit listed in `qubits`, identity elsewhere. An
    /// empty list yields the identity.
    pub fn hadamard(qubits: &[usize], num_qubits: usize) -> Result<Self> {
        let mut qubits = qubits.to_vec();
        qubits.sort_unstable();
        for &qubit in &qubits {
            check_index(qubit, num_qubits)?;
        }

        let h = h_matrix();
        let id = id_matrix();
        let matrix = expand(num_qubits, |i| {
            if qubits.binary_search(&i).is_ok() {
                &h
            } else {
                &id
            }
        });

        trace!(?qubits, num_qubits, "built Hadamard gate");
        Ok(Self {
            matrix,
            kind: GateKind::Hadamard,
        })
    }

    pub fn pauli_x(qubit: usize, num_qubits: usize) -> Result<Self> {
        check_index(qubit, num_qubits)?;

        let x = x_matrix();
        let id = id_matrix();
        let matrix = expand(num_qubits, |i| if i == qubit { &x } else { &id });

        trace!(qubit, num_qubits, "built Pauli-X gate");
        Ok(Self {
            matrix,
            kind: GateKind::PauliX,
        })
    }

    /// `|0><0|_c (x) I + |1><1|_c (x) X_t`, which flips `target` iff
    /// `control` is set, whichever of the two comes first.
    pub fn controlled_x(control: usize, target: usize, num_qubits: usize) -> Result<Self> {
        check_index(control, num_qubits)?;
        check_index(target, num_qubits)?;

        if control == target {
            return Err(SimError::ControlIsTarget { qubit: control });
        }

        // |0><0|
        let zero_zero = Ket::ZERO.outer(&Bra::ZERO);
        // |1><1|
        let one_one = Ket::ONE.outer(&Bra::ONE);

        let x = x_matrix();
        let id = id_matrix();

        let zero_matrix = expand(num_qubits, |i| if i == control { &zero_zero } else { &id });
        let one_matrix = expand(num_qubits, |i| {
            if i == control {
                &one_one
            } else if i == target {
                &x
            } else {
                &id
            }
        });

        trace!(control, target, num_qubits, "built C-X gate");
        Ok(Self {
            matrix: zero_matrix.add(&one_matrix)?,
            kind: GateKind::ControlledX,
        })
    }

    /// Fuses `gates`, given in application order, into one gate. The last
    /// gate is the leftmost factor: `[g0, g1, g2]` becomes `g2 * g1 * g0`.
    pub fn combine(gates: &[Gate]) -> Result<Self> {
        let (last, rest) = gates.split_last().ok_or(SimError::NothingToCombine)?;

        let mut matrix = last.matrix.clone();
        for gate in rest.iter().rev() {
            matrix = matrix.multiply(&gate.matrix)?;
        }

        Ok(Self {
            matrix,
            kind: GateKind::Combined,
        })
    }

    /// Gates are equal when their kinds match and their matrices agree
    /// within `tolerance`.
    pub fn approx_eq(&self, other: &Gate, tolerance: Tolerance) -> bool {
        self.kind == other.kind && self.matrix.approx_eq(&other.matrix, tolerance)
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.kind.name())?;
        write!(f, "{}", self.matrix)
    }
}
