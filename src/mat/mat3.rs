use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Mat3<T> {
  pub a1: T, pub a2: T, pub a3: T,
  pub b1: T, pub b2: T, pub b3: T,
  pub c1: T, pub c2: T, pub c3: T,
}

impl<T: Scalar> SquareMatrixDimension<3> for Mat3<T> {}
impl<T: Scalar> SquareMatrix<T> for Mat3<T> {
  fn identity() -> Self {
    Self::one()
  }

  fn transpose(&self) -> Self {
    #[rustfmt::skip]
    let m = Mat3::new(
      self.a1, self.b1, self.c1,
      self.a2, self.b2, self.c2,
      self.a3, self.b3, self.c3,
    );
    m
  }

  fn det(&self) -> T {
    let t11 = self.c3 * self.b2 - self.b3 * self.c2;
    let t12 = self.b3 * self.c1 - self.c3 * self.b1;
    let t13 = self.c2 * self.b1 - self.b2 * self.c1;
    self.a1 * t11 + self.a2 * t12 + self.a3 * t13
  }

  fn inverse(&self) -> Result<Self, SingularMatrix> {
    let det = self.det();
    if det == T::zero() {
      return Err(SingularMatrix);
    }

    let inv_det = T::one() / det;

    Ok(Self {
      a1: (self.c3 * self.b2 - self.b3 * self.c2) * inv_det,
      a2: (self.a3 * self.c2 - self.c3 * self.a2) * inv_det,
      a3: (self.b3 * self.a2 - self.a3 * self.b2) * inv_det,
      b1: (self.b3 * self.c1 - self.c3 * self.b1) * inv_det,
      b2: (self.c3 * self.a1 - self.a3 * self.c1) * inv_det,
      b3: (self.a3 * self.b1 - self.b3 * self.a1) * inv_det,
      c1: (self.c2 * self.b1 - self.b2 * self.c1) * inv_det,
      c2: (self.a2 * self.c1 - self.c2 * self.a1) * inv_det,
      c3: (self.b2 * self.a1 - self.a2 * self.b1) * inv_det,
    })
  }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat3<T> {}

// a 2d point through the homogeneous 2d affine transform, with the divide
impl<T> Mul<Vec2<T>> for Mat3<T>
where
  T: Scalar,
{
  type Output = Vec2<T>;

  fn mul(self, v: Vec2<T>) -> Vec2<T> {
    let v = self * v.expand_with(T::one());
    Vec2::new(v.x, v.y) / v.z
  }
}

impl<T> Mul<Vec3<T>> for Mat3<T>
where
  T: Copy + Add<Output = T> + Mul<Output = T>,
{
  type Output = Vec3<T>;

  fn mul(self, v: Vec3<T>) -> Vec3<T> {
    Vec3 {
      x: v.x * self.a1 + v.y * self.b1 + v.z * self.c1,
      y: v.x * self.a2 + v.y * self.b2 + v.z * self.c2,
      z: v.x * self.a3 + v.y * self.b3 + v.z * self.c3,
    }
  }
}

impl<T> Mul for Mat3<T>
where
  T: Copy + Mul<Output = T> + Add<Output = T>,
{
  type Output = Self;

  fn mul(self, m: Self) -> Self {
    let a = self;

    Self {
      a1: a.a1 * m.a1 + a.b1 * m.a2 + a.c1 * m.a3,
      a2: a.a2 * m.a1 + a.b2 * m.a2 + a.c2 * m.a3,
      a3: a.a3 * m.a1 + a.b3 * m.a2 + a.c3 * m.a3,

      b1: a.a1 * m.b1 + a.b1 * m.b2 + a.c1 * m.b3,
      b2: a.a2 * m.b1 + a.b2 * m.b2 + a.c2 * m.b3,
      b3: a.a3 * m.b1 + a.b3 * m.b2 + a.c3 * m.b3,

      c1: a.a1 * m.c1 + a.b1 * m.c2 + a.c1 * m.c3,
      c2: a.a2 * m.c1 + a.b2 * m.c2 + a.c2 * m.c3,
      c3: a.a3 * m.c1 + a.b3 * m.c2 + a.c3 * m.c3,
    }
  }
}

impl<T> Mat3<T>
where
  T: Copy,
{
  pub fn new(m11: T, m12: T, m13: T, m21: T, m22: T, m23: T, m31: T, m32: T, m33: T) -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: m11, a2: m12, a3: m13,
      b1: m21, b2: m22, b3: m23,
      c1: m31, c2: m32, c3: m33,
    };
    m
  }

  pub fn from_cols(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: c0.x, a2: c0.y, a3: c0.z,
      b1: c1.x, b2: c1.y, b3: c1.z,
      c1: c2.x, c2: c2.y, c3: c2.z,
    };
    m
  }

  pub fn right(&self) -> Vec3<T> {
    Vec3::new(self.a1, self.a2, self.a3)
  }

  pub fn up(&self) -> Vec3<T> {
    Vec3::new(self.b1, self.b2, self.b3)
  }

  pub fn forward(&self) -> Vec3<T> {
    Vec3::new(self.c1, self.c2, self.c3)
  }

  pub fn to_mat2(self) -> Mat2<T> {
    #[rustfmt::skip]
    let m = Mat2 {
      a1: self.a1, a2: self.a2,
      b1: self.b1, b2: self.b2,
    };
    m
  }
}

impl<T> Mat3<T>
where
  T: Scalar,
{
  /// Rotation about the axis by theta radians, after Rodrigues. The axis
  /// is assumed unit length and is not validated.
  pub fn rotate(axis: Vec3<T>, theta: T) -> Self {
    let (s, c) = theta.sin_cos();

    let x = axis.x;
    let y = axis.y;
    let z = axis.z;

    let t = T::one() - c;
    let tx = t * x;
    let ty = t * y;
    let tz = t * z;

    let a1 = tx * x + c;
    let a2 = tx * y + s * z;
    let a3 = tx * z - s * y;

    let b1 = tx * y - s * z;
    let b2 = ty * y + c;
    let b3 = ty * z + s * x;

    let c1 = tx * z + s * y;
    let c2 = ty * z - s * x;
    let c3 = tz * z + c;

    #[rustfmt::skip]
    let m = Mat3::new(
      a1, a2, a3,
      b1, b2, b3,
      c1, c2, c3,
    );
    m
  }

  /// 2d affine scale, the homogeneous row untouched.
  pub fn scale(scale: impl Into<Vec2<T>>) -> Self {
    let Vec2 { x, y } = scale.into();
    #[rustfmt::skip]
    let m = Mat3::new(
      x,         T::zero(), T::zero(),
      T::zero(), y,         T::zero(),
      T::zero(), T::zero(), T::one(),
    );
    m
  }

  /// 2d affine translation in the last column.
  pub fn translate(translate: impl Into<Vec2<T>>) -> Self {
    let Vec2 { x, y } = translate.into();
    #[rustfmt::skip]
    let m = Mat3::new(
      T::one(),  T::zero(), T::zero(),
      T::zero(), T::one(),  T::zero(),
      x,         y,         T::one(),
    );
    m
  }
}

impl<T: Scalar> Default for Mat3<T> {
  /// The default matrix is the identity, not all zero.
  fn default() -> Self {
    Self::identity()
  }
}

impl<T> num_traits::Zero for Mat3<T>
where
  T: num_traits::Zero + Copy + PartialEq,
{
  #[inline(always)]
  fn zero() -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: T::zero(), a2: T::zero(), a3: T::zero(),
      b1: T::zero(), b2: T::zero(), b3: T::zero(),
      c1: T::zero(), c2: T::zero(), c3: T::zero(),
    };
    m
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.eq(&Self::zero())
  }
}

impl<T> num_traits::One for Mat3<T>
where
  T: num_traits::One + num_traits::Zero + Copy,
{
  #[inline(always)]
  fn one() -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: T::one(),  a2: T::zero(), a3: T::zero(),
      b1: T::zero(), b2: T::one(),  b3: T::zero(),
      c1: T::zero(), c2: T::zero(), c3: T::one(),
    };
    m
  }
}

impl_matrix_arith!(Mat3 { a1, a2, a3, b1, b2, b3, c1, c2, c3 });
impl_fixed_array_conversions!(Mat3<T> {
  a1: 0, a2: 1, a3: 2,
  b1: 3, b2: 4, b3: 5,
  c1: 6, c2: 7, c3: 8
}, 9);
impl_matrix_columns!(Mat3<T>, 3, Vec3);

impl<T: Debug> fmt::Display for Mat3<T> {
  /// Row major bracketed rows, for diagnostics only.
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "[ {:?}, {:?}, {:?} ]", self.a1, self.b1, self.c1)?;
    writeln!(f, "[ {:?}, {:?}, {:?} ]", self.a2, self.b2, self.c2)?;
    write!(f, "[ {:?}, {:?}, {:?} ]", self.a3, self.b3, self.c3)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_identity() {
    let m = Mat3::<f32>::default();
    for i in 0..3 {
      for j in 0..3 {
        assert_eq!(m[i][j], if i == j { 1. } else { 0. });
      }
    }
  }

  #[test]
  fn affine_pipeline_matches_cgmath() {
    let cgmath_mat1 = cgmath::Matrix3::<f32>::from_translation(cgmath::vec2(1., 2.));
    let cgmath_mat2 = cgmath::Matrix3::<f32>::from_nonuniform_scale(3., -2.);
    let cgmath_point = cgmath::vec3(1., 2., 3.);
    let cgmath_r = cgmath_mat1 * cgmath_mat2 * cgmath_point;
    let cgmath_r: [f32; 3] = *cgmath_r.as_ref();

    let mat1 = Mat3::<f32>::translate((1., 2.));
    let mat2 = Mat3::<f32>::scale((3., -2.));
    let point = vec3(1., 2., 3.);
    let r = mat1 * mat2 * point;
    let r: [f32; 3] = r.into();

    assert_eq!(cgmath_r, r)
  }

  #[test]
  fn columnwise_addition() {
    let mut m1 = Mat3::<f32>::identity();
    m1[1][1] = 2.;
    m1[2][2] = 3.;
    let mut m2 = Mat3::<f32>::identity();
    m2[0][1] = 4.;
    m2[2][0] = 8.;
    let m3 = m1 + m2;
    assert_eq!(m3[0], vec3(2., 4., 0.));
    assert_eq!(m3[1], vec3(0., 3., 0.));
    assert_eq!(m3[2], vec3(8., 0., 4.));
  }

  #[test]
  fn inverse_undoes_the_matrix() {
    let m = Mat3::from_cols(
      vec3(2.0_f32, 0., 1.),
      vec3(1., 3., 0.),
      vec3(0., 1., 4.),
    );
    let id = m * m.inverse().unwrap();
    let id: [f32; 9] = id.into();
    let expected: [f32; 9] = Mat3::identity().into();
    for (got, want) in id.iter().zip(expected) {
      assert!((got - want).abs() < 1e-6);
    }
  }

  #[test]
  fn singular_matrix_is_an_error() {
    let m = Mat3::from_cols(
      vec3(1.0_f32, 2., 3.),
      vec3(2., 4., 6.),
      vec3(0., 1., 0.),
    );
    assert_eq!(m.det(), 0.);
    assert_eq!(m.inverse(), Err(SingularMatrix));
  }

  #[test]
  fn to_mat2_keeps_the_linear_block() {
    let m = Mat3::<f32>::translate((5., 6.)) * Mat3::scale((2., 3.));
    assert_eq!(m.to_mat2(), Mat2::from_cols(vec2(2., 0.), vec2(0., 3.)));
  }

  #[test]
  fn double_transpose_is_original() {
    let m = Mat3::from_cols(
      vec3(1.0_f32, 2., 3.),
      vec3(4., 5., 6.),
      vec3(7., 8., 9.),
    );
    assert_eq!(m.transpose().transpose(), m);
  }

  #[test]
  #[should_panic(expected = "out of bounds")]
  fn out_of_range_column_panics() {
    let m = Mat3::<f32>::identity();
    let _ = m[3];
  }
}
