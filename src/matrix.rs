use std::fmt::Display;
use std::ops::Index;

use nalgebra::DMatrix;
use num_complex::Complex;

use crate::error::{Result, SimError};
use crate::Qbit;

/// Per-component tolerance used to compare complex matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub re: f64,
    pub im: f64,
}

impl Tolerance {
    pub const STD: Tolerance = Tolerance::uniform(1e-8);

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub const fn uniform(epsilon: f64) -> Self {
        Self {
            re: epsilon,
            im: epsilon,
        }
    }

    fn accepts(&self, a: Qbit, b: Qbit) -> bool {
        (a.re - b.re).abs() <= self.re && (a.im - b.im).abs() <= self.im
    }
}

/// Dense complex matrix. Values are never mutated after construction,
/// every operation returns a new matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    inner: DMatrix<Qbit>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            inner: DMatrix::zeros(rows, cols),
        }
    }

    pub fn identity(size: usize) -> Self {
        Self {
            inner: DMatrix::identity(size, size),
        }
    }

    /// Builds a matrix from row-major data. `data` must hold exactly
    /// `rows * cols` elements.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Qbit]) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(SimError::DataLengthMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }

        Ok(Self {
            inner: DMatrix::from_row_slice(rows, cols, data),
        })
    }

    /// Same as [`Matrix::from_row_slice`] for purely real data.
    pub fn from_real_rows(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        let data = data
            .iter()
            .map(|&re| Complex::new(re, 0.0))
            .collect::<Vec<_>>();
        Self::from_row_slice(rows, cols, &data)
    }

    pub fn rows(&self) -> usize {
        self.inner.nrows()
    }

    pub fn cols(&self) -> usize {
        self.inner.ncols()
    }

    /// Distance between the starts of two consecutive rows. Matrices are
    /// always stored contiguously, so this equals the column count.
    pub fn stride(&self) -> usize {
        self.cols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_column_vector(&self) -> bool {
        self.cols() == 1
    }

    pub fn is_row_vector(&self) -> bool {
        self.rows() == 1
    }

    /// Elements in row-major order.
    pub fn to_row_major(&self) -> Vec<Qbit> {
        self.inner.transpose().iter().copied().collect()
    }

    pub(crate) fn as_dmatrix(&self) -> &DMatrix<Qbit> {
        &self.inner
    }

    /// Kronecker (tensor) product. `self` occupies the outer, most
    /// significant block structure of the result.
    pub fn kronecker(&self, other: &Matrix) -> Matrix {
        let (ar, ac) = self.shape();
        let (br, bc) = other.shape();
        let mut result = DMatrix::zeros(ar * br, ac * bc);

        for ra in 0..ar {
            for ca in 0..ac {
                let value_a = self.inner[(ra, ca)];
                for rb in 0..br {
                    for cb in 0..bc {
                        let new_row = ra * br + rb;
                        let new_col = ca * bc + cb;
                        result[(new_row, new_col)] = value_a * other.inner[(rb, cb)];
                    }
                }
            }
        }

        Matrix { inner: result }
    }

    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(SimError::DimensionMismatch {
                operation: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }

        Ok(Matrix {
            inner: &self.inner * &other.inner,
        })
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.shape() != other.shape() || self.stride() != other.stride() {
            return Err(SimError::DimensionMismatch {
                operation: "add",
                left: self.shape(),
                right: other.shape(),
            });
        }

        Ok(Matrix {
            inner: &self.inner + &other.inner,
        })
    }

    /// Approximate equality: shapes must match exactly and every element
    /// must lie within `tolerance` on both the real and imaginary part.
    pub fn approx_eq(&self, other: &Matrix, tolerance: Tolerance) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        self.inner
            .iter()
            .zip(other.inner.iter())
            .all(|(&a, &b)| tolerance.accepts(a, b))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Qbit;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.inner[index]
    }
}

impl From<DMatrix<Qbit>> for Matrix {
    fn from(inner: DMatrix<Qbit>) -> Self {
        Self { inner }
    }
}

fn format_imag(im: f64) -> String {
    if im == 1.0 {
        "i".to_string()
    } else if im == -1.0 {
        "-i".to_string()
    } else {
        format!("{}i", im)
    }
}

fn format_complex(value: Qbit) -> String {
    if value.re != 0.0 && value.im != 0.0 {
        format!("({}+{})", value.re, format_imag(value.im))
    } else if value.im == 0.0 {
        format!("{}", value.re)
    } else {
        format_imag(value.im)
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.shape();

        write!(f, "[")?;
        for r in 0..rows {
            for c in 0..cols {
                write!(f, "{}", format_complex(self.inner[(r, c)]))?;
                if c + 1 != cols || r + 1 != rows {
                    write!(f, ", ")?;
                }
            }
            if r + 1 != rows {
                write!(f, "\n ")?;
            }
        }
        write!(f, "]")
    }
}
