use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Mat2<T> {
  pub a1: T, pub a2: T,
  pub b1: T, pub b2: T,
}

impl<T: Scalar> SquareMatrixDimension<2> for Mat2<T> {}
impl<T: Scalar> SquareMatrix<T> for Mat2<T> {
  fn identity() -> Self {
    Self::one()
  }

  fn transpose(&self) -> Self {
    let (a1, a2) = (self.a1, self.b1);
    let (b1, b2) = (self.a2, self.b2);
    #[rustfmt::skip]
    let m = Mat2 {
      a1, a2,
      b1, b2,
    };
    m
  }

  fn det(&self) -> T {
    self.a1 * self.b2 - self.a2 * self.b1
  }

  fn inverse(&self) -> Result<Self, SingularMatrix> {
    let det = self.det();
    if det == T::zero() {
      return Err(SingularMatrix);
    }
    let inv_det = T::one() / det;
    #[rustfmt::skip]
    let m = Self {
      a1:  self.b2 * inv_det, a2: -self.a2 * inv_det,
      b1: -self.b1 * inv_det, b2:  self.a1 * inv_det,
    };
    Ok(m)
  }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat2<T> {}

impl<T> Mul for Mat2<T>
where
  T: Copy + Mul<Output = T> + Add<Output = T>,
{
  type Output = Self;

  fn mul(self, b: Self) -> Self {
    let a = self;

    Mat2 {
      a1: a.a1 * b.a1 + a.b1 * b.a2,
      a2: a.a2 * b.a1 + a.b2 * b.a2,
      b1: a.a1 * b.b1 + a.b1 * b.b2,
      b2: a.a2 * b.b1 + a.b2 * b.b2,
    }
  }
}

impl<T> Mul<Vec2<T>> for Mat2<T>
where
  T: Copy + Add<Output = T> + Mul<Output = T>,
{
  type Output = Vec2<T>;

  fn mul(self, v: Vec2<T>) -> Vec2<T> {
    Vec2 {
      x: v.x * self.a1 + v.y * self.b1,
      y: v.x * self.a2 + v.y * self.b2,
    }
  }
}

impl<T> Mat2<T>
where
  T: Copy,
{
  pub fn new(m11: T, m12: T, m21: T, m22: T) -> Self {
    Self {
      a1: m11,
      a2: m12,
      b1: m21,
      b2: m22,
    }
  }

  pub fn from_cols(c0: Vec2<T>, c1: Vec2<T>) -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: c0.x, a2: c0.y,
      b1: c1.x, b2: c1.y,
    };
    m
  }

  pub fn right(&self) -> Vec2<T> {
    Vec2::new(self.a1, self.a2)
  }

  pub fn up(&self) -> Vec2<T> {
    Vec2::new(self.b1, self.b2)
  }
}

impl<T: Scalar> Default for Mat2<T> {
  /// The default matrix is the identity, not all zero.
  fn default() -> Self {
    Self::identity()
  }
}

impl<T> num_traits::Zero for Mat2<T>
where
  T: num_traits::Zero + Copy + PartialEq,
{
  #[inline(always)]
  fn zero() -> Self {
    #[rustfmt::skip]
    let m = Mat2 {
      a1: T::zero(), a2: T::zero(),
      b1: T::zero(), b2: T::zero(),
    };
    m
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.eq(&Self::zero())
  }
}

impl<T> num_traits::One for Mat2<T>
where
  T: num_traits::One + num_traits::Zero + Copy,
{
  #[inline(always)]
  fn one() -> Self {
    #[rustfmt::skip]
    let m = Mat2 {
      a1: T::one(),  a2: T::zero(),
      b1: T::zero(), b2: T::one(),
    };
    m
  }
}

impl<T> From<(T, T, T, T)> for Mat2<T>
where
  T: Copy,
{
  fn from(v: (T, T, T, T)) -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: v.0, a2: v.1,
      b1: v.2, b2: v.3,
    };
    m
  }
}

impl_matrix_arith!(Mat2 { a1, a2, b1, b2 });
impl_fixed_array_conversions!(Mat2<T> { a1: 0, a2: 1, b1: 2, b2: 3 }, 4);
impl_matrix_columns!(Mat2<T>, 2, Vec2);

impl<T: Debug> fmt::Display for Mat2<T> {
  /// Row major bracketed rows, for diagnostics only.
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "[ {:?}, {:?} ]", self.a1, self.b1)?;
    write!(f, "[ {:?}, {:?} ]", self.a2, self.b2)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_identity() {
    let m = Mat2::<f32>::default();
    assert_eq!(m[0], vec2(1., 0.));
    assert_eq!(m[1], vec2(0., 1.));
  }

  #[test]
  fn columnwise_addition() {
    let a = Mat2::from_cols(vec2(1.0_f32, 2.), vec2(3., 4.));
    let b = Mat2::from_cols(vec2(0.0_f32, 3.), vec2(4., 0.));
    let sum = a + b;
    assert_eq!(sum[0], vec2(1., 5.));
    assert_eq!(sum[1], vec2(7., 4.));
  }

  #[test]
  fn product_against_diagonal() {
    let mut a = Mat2::<f32>::identity();
    a[1][1] = 2.;
    let mut b = Mat2::<f32>::identity();
    b[0][0] = 3.;
    b[1][1] = 4.;
    let c = a * b;
    assert_eq!(c[0][0], 3.);
    assert_eq!(c[1][1], 8.);

    let v = a * vec2(3.0_f32, 4.);
    assert_eq!(v, vec2(3., 8.));
  }

  #[test]
  fn inverse_undoes_the_matrix() {
    let m = Mat2::from_cols(vec2(1.0_f32, 2.), vec2(3., 4.));
    let id = m * m.inverse().unwrap();
    assert!((id.a1 - 1.).abs() < 1e-6);
    assert!(id.a2.abs() < 1e-6);
    assert!(id.b1.abs() < 1e-6);
    assert!((id.b2 - 1.).abs() < 1e-6);
  }

  #[test]
  fn singular_matrix_is_an_error() {
    let m = Mat2::from_cols(vec2(1.0_f32, 2.), vec2(2., 4.));
    assert_eq!(m.inverse(), Err(SingularMatrix));
    let mut m2 = m;
    assert!(m2.invert().is_err());
    assert_eq!(m2, m);
    assert_eq!(m.inverse_or_identity(), Mat2::identity());
  }

  #[test]
  fn double_transpose_is_original() {
    let m = Mat2::from_cols(vec2(1.0_f32, 2.), vec2(3., 4.));
    assert_eq!(m.transpose().transpose(), m);
    let mut n = m;
    n.transpose_self();
    assert_eq!(n[0], vec2(1., 3.));
  }

  #[test]
  #[should_panic(expected = "out of bounds")]
  fn out_of_range_column_panics() {
    let m = Mat2::<f32>::identity();
    let _ = m[2];
  }

  #[test]
  fn display_renders_rows() {
    let m = Mat2::from_cols(vec2(1.0_f32, 2.), vec2(3., 4.));
    assert_eq!(m.to_string(), "[ 1.0, 3.0 ]\n[ 2.0, 4.0 ]");
  }
}
