use crate::*;

/// this trait for mark the square matrix's dimension
pub trait SquareMatrixDimension<const D: usize> {}

pub trait SquareMatrix<T: Scalar>: Sized + Copy {
  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn transpose(&self) -> Self;

  #[inline]
  fn transpose_self(&mut self) {
    *self = self.transpose();
  }

  /// Closed form cofactor expansion, hand expanded per dimension.
  #[must_use]
  fn det(&self) -> T;

  /// Closed form adjugate over determinant. An exactly zero determinant is
  /// the only failure.
  fn inverse(&self) -> Result<Self, SingularMatrix>;

  #[must_use]
  fn inverse_or_identity(&self) -> Self {
    self.inverse().unwrap_or_else(|_| Self::identity())
  }

  #[inline]
  fn invert(&mut self) -> Result<(), SingularMatrix> {
    *self = self.inverse()?;
    Ok(())
  }
}
