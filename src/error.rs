//! Error types for circuit construction, execution and measurement

use thiserror::Error;

/// Errors raised by the simulator. All of them indicate a caller mistake
/// and abort the operation that detected them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// More Hadamard targets than the circuit has qubits
    #[error("Too many qubits provided for H gate: {requested} on a {available}-qubit circuit")]
    TooManyQubits { requested: usize, available: usize },

    /// Input register or sub-circuit does not match the circuit's qubit count
    #[error("Qubit count mismatch: circuit has {expected} qubits, got {actual}")]
    QubitCountMismatch { expected: usize, actual: usize },

    #[error("Cannot {operation} matrices of shape {left:?} and {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A measurement over 2^n amplitudes needs exactly n basis kets
    #[error("Measurement basis has {actual} kets, expected {expected}")]
    BasisSizeMismatch { expected: usize, actual: usize },

    #[error("Qubit index {index} out of bounds for the number of qubits {num_qubits}")]
    QubitIndexOutOfRange { index: usize, num_qubits: usize },

    #[error("Control and target qubits cannot be the same (qubit {qubit})")]
    ControlIsTarget { qubit: usize },

    #[error("Matrix data has {actual} elements, expected {expected}")]
    DataLengthMismatch { expected: usize, actual: usize },

    #[error("Cannot view a matrix of shape {actual:?} as a {view}, expected {expected:?}")]
    ShapeMismatch {
        view: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("No gates to combine")]
    NothingToCombine,
}

pub type Result<T> = std::result::Result<T, SimError>;
