//! Vector views over [`Matrix`]: single-qubit kets and bras, and the column
//! and row vectors that hold multi-qubit register states.

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex;

use crate::error::{Result, SimError};
use crate::matrix::Matrix;
use crate::Qbit;

/// Single-qubit state `a0|0> + a1|1>`, a 2x1 column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ket {
    amplitudes: [Qbit; 2],
}

impl Ket {
    /// |0>
    pub const ZERO: Ket = Ket::new(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0));
    /// |1>
    pub const ONE: Ket = Ket::new(Complex::new(0.0, 0.0), Complex::new(1.0, 0.0));
    /// |+>
    pub const PLUS: Ket = Ket::new(
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(FRAC_1_SQRT_2, 0.0),
    );
    /// |->
    pub const MINUS: Ket = Ket::new(
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(-FRAC_1_SQRT_2, 0.0),
    );

    pub const fn new(zero: Qbit, one: Qbit) -> Self {
        Self {
            amplitudes: [zero, one],
        }
    }

    pub fn amplitudes(&self) -> [Qbit; 2] {
        self.amplitudes
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Bra {
        Bra::new(self.amplitudes[0].conj(), self.amplitudes[1].conj())
    }

    /// Outer product `|self><bra|` as a 2x2 matrix.
    pub fn outer(&self, bra: &Bra) -> Matrix {
        self.to_matrix().kronecker(&bra.to_matrix())
    }

    pub fn to_matrix(&self) -> Matrix {
        Matrix::from(nalgebra::DMatrix::from_column_slice(2, 1, &self.amplitudes))
    }
}

impl TryFrom<&Matrix> for Ket {
    type Error = SimError;

    fn try_from(matrix: &Matrix) -> Result<Self> {
        if matrix.shape() != (2, 1) {
            return Err(SimError::ShapeMismatch {
                view: "ket",
                expected: (2, 1),
                actual: matrix.shape(),
            });
        }
        Ok(Ket::new(matrix[(0, 0)], matrix[(1, 0)]))
    }
}

impl From<Ket> for Matrix {
    fn from(ket: Ket) -> Self {
        ket.to_matrix()
    }
}

/// Dual of a [`Ket`], a 1x2 row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bra {
    amplitudes: [Qbit; 2],
}

impl Bra {
    /// <0|
    pub const ZERO: Bra = Bra::new(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0));
    /// <1|
    pub const ONE: Bra = Bra::new(Complex::new(0.0, 0.0), Complex::new(1.0, 0.0));

    pub const fn new(zero: Qbit, one: Qbit) -> Self {
        Self {
            amplitudes: [zero, one],
        }
    }

    pub fn amplitudes(&self) -> [Qbit; 2] {
        self.amplitudes
    }

    pub fn to_matrix(&self) -> Matrix {
        Matrix::from(nalgebra::DMatrix::from_row_slice(1, 2, &self.amplitudes))
    }
}

impl TryFrom<&Matrix> for Bra {
    type Error = SimError;

    fn try_from(matrix: &Matrix) -> Result<Self> {
        if matrix.shape() != (1, 2) {
            return Err(SimError::ShapeMismatch {
                view: "bra",
                expected: (1, 2),
                actual: matrix.shape(),
            });
        }
        Ok(Bra::new(matrix[(0, 0)], matrix[(0, 1)]))
    }
}

/// An `n x 1` matrix, typically a register state of `log2(n)` qubits.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnVector {
    inner: Matrix,
}

impl ColumnVector {
    /// Flattens any matrix, in row-major order, into a column.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        Self::from_amplitudes(&matrix.to_row_major())
    }

    pub fn from_amplitudes(amplitudes: &[Qbit]) -> Self {
        Self {
            inner: Matrix::from(nalgebra::DMatrix::from_column_slice(
                amplitudes.len(),
                1,
                amplitudes,
            )),
        }
    }

    pub fn size(&self) -> usize {
        self.inner.rows()
    }

    /// A column of two entries has the shape of a bra's transpose.
    pub fn is_bra(&self) -> bool {
        self.size() == 2
    }

    pub fn matrix(&self) -> &Matrix {
        &self.inner
    }

    pub fn amplitude(&self, index: usize) -> Qbit {
        self.inner[(index, 0)]
    }

    pub fn amplitudes(&self) -> Vec<Qbit> {
        (0..self.size()).map(|i| self.amplitude(i)).collect()
    }

    /// Inner product `sum self[i] * conj(other[i])`, conjugate-linear in
    /// the second argument.
    pub fn dotp(&self, other: &ColumnVector) -> Result<Qbit> {
        if self.size() != other.size() {
            return Err(SimError::DimensionMismatch {
                operation: "take the inner product of",
                left: self.inner.shape(),
                right: other.inner.shape(),
            });
        }

        Ok(other.inner.as_dmatrix().dotc(self.inner.as_dmatrix()))
    }
}

impl From<ColumnVector> for Matrix {
    fn from(vector: ColumnVector) -> Self {
        vector.inner
    }
}

/// A `1 x n` matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct RowVector {
    inner: Matrix,
}

impl RowVector {
    /// Flattens any matrix, in row-major order, into a row.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        let data = matrix.to_row_major();
        Self {
            inner: Matrix::from(nalgebra::DMatrix::from_row_slice(1, data.len(), &data)),
        }
    }

    pub fn size(&self) -> usize {
        self.inner.cols()
    }

    /// A row of two entries has the shape of a ket's transpose.
    pub fn is_ket(&self) -> bool {
        self.size() == 2
    }

    pub fn matrix(&self) -> &Matrix {
        &self.inner
    }
}

/// Kronecker product of `kets` in order, so `kets[0]` is the most
/// significant qubit of the resulting register.
pub fn kron_kets(kets: &[Ket]) -> ColumnVector {
    let register = kets
        .iter()
        .fold(Matrix::identity(1), |acc, ket| acc.kronecker(&ket.to_matrix()));
    ColumnVector::from_matrix(&register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_complex_eq;
    use crate::matrix::Tolerance;

    #[test]
    fn test_standard_kets() {
        let [a0, a1] = Ket::PLUS.amplitudes();
        assert_approx_complex_eq!(FRAC_1_SQRT_2, 0.0, a0);
        assert_approx_complex_eq!(FRAC_1_SQRT_2, 0.0, a1);

        let [a0, a1] = Ket::MINUS.amplitudes();
        assert_approx_complex_eq!(FRAC_1_SQRT_2, 0.0, a0);
        assert_approx_complex_eq!(-FRAC_1_SQRT_2, 0.0, a1);

        assert_eq!(Bra::ZERO, Ket::ZERO.dagger());
        assert_eq!(Bra::ONE, Ket::ONE.dagger());
    }

    #[test]
    fn test_projectors() -> Result<()> {
        let zero_zero = Matrix::from_real_rows(2, 2, &[1.0, 0.0, 0.0, 0.0])?;
        let one_one = Matrix::from_real_rows(2, 2, &[0.0, 0.0, 0.0, 1.0])?;

        assert!(Ket::ZERO.outer(&Bra::ZERO).approx_eq(&zero_zero, Tolerance::STD));
        assert!(Ket::ONE.outer(&Bra::ONE).approx_eq(&one_one, Tolerance::STD));
        Ok(())
    }

    #[test]
    fn test_ket_from_matrix() -> Result<()> {
        let column = Matrix::from_real_rows(2, 1, &[0.6, 0.8])?;
        let ket = Ket::try_from(&column)?;
        assert_approx_complex_eq!(0.6, 0.0, ket.amplitudes()[0]);
        assert_approx_complex_eq!(0.8, 0.0, ket.amplitudes()[1]);

        let too_long = Matrix::from_real_rows(4, 1, &[1.0, 0.0, 0.0, 0.0])?;
        assert_eq!(
            Err(SimError::ShapeMismatch {
                view: "ket",
                expected: (2, 1),
                actual: (4, 1),
            }),
            Ket::try_from(&too_long)
        );

        assert!(Ket::try_from(&Bra::ZERO.to_matrix()).is_err());
        Ok(())
    }

    #[test]
    fn test_bra_from_matrix() -> Result<()> {
        let row = Matrix::from_real_rows(1, 2, &[0.0, 1.0])?;
        assert_eq!(Bra::ONE, Bra::try_from(&row)?);
        assert!(Bra::try_from(&Ket::ONE.to_matrix()).is_err());
        Ok(())
    }

    #[test]
    fn test_column_vector_flattens_row_major() -> Result<()> {
        let m = Matrix::from_real_rows(2, 2, &[1.0, 2.0, 3.0, 4.0])?;
        let column = ColumnVector::from_matrix(&m);

        assert_eq!(4, column.size());
        assert!(column.matrix().is_column_vector());
        assert!(!column.is_bra());
        assert_approx_complex_eq!(2.0, 0.0, column.amplitude(1));
        assert_approx_complex_eq!(3.0, 0.0, column.amplitude(2));
        Ok(())
    }

    #[test]
    fn test_row_vector() -> Result<()> {
        let m = Matrix::from_real_rows(2, 1, &[1.0, 2.0])?;
        let row = RowVector::from_matrix(&m);

        assert!(row.matrix().is_row_vector());
        assert!(row.is_ket());
        assert_approx_complex_eq!(2.0, 0.0, row.matrix()[(0, 1)]);

        let wide = RowVector::from_matrix(&Matrix::zeros(2, 2));
        assert_eq!(4, wide.size());
        assert!(!wide.is_ket());
        Ok(())
    }

    #[test]
    fn test_kron_kets_ordering() {
        // |10> has its amplitude at index 2
        let register = kron_kets(&[Ket::ONE, Ket::ZERO]);
        assert_eq!(4, register.size());
        assert_approx_complex_eq!(1.0, 0.0, register.amplitude(2));
        assert_approx_complex_eq!(0.0, 0.0, register.amplitude(1));

        let register = kron_kets(&[Ket::ZERO, Ket::ONE, Ket::ONE]);
        assert_approx_complex_eq!(1.0, 0.0, register.amplitude(3));
    }

    #[test]
    fn test_kron_kets_empty_is_scalar_one() {
        let register = kron_kets(&[]);
        assert_eq!(1, register.size());
        assert_approx_complex_eq!(1.0, 0.0, register.amplitude(0));
    }

    #[test]
    fn test_dotp_conjugates_second_argument() -> Result<()> {
        let a = ColumnVector::from_amplitudes(&[Complex::new(0.0, 1.0), Complex::new(1.0, 0.0)]);
        let b = ColumnVector::from_amplitudes(&[Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)]);

        // i * conj(i) = 1
        assert_approx_complex_eq!(1.0, 0.0, a.dotp(&b)?);
        assert_approx_complex_eq!(2.0, 0.0, a.dotp(&a)?);

        let short = ColumnVector::from_amplitudes(&[Complex::new(1.0, 0.0)]);
        assert!(a.dotp(&short).is_err());
        Ok(())
    }
}
