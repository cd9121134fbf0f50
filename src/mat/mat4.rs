use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

/// 4x4 column major matrix. The fields are grouped by column, `a` through
/// `d`, with the row index in the digit, so `d1..d3` hold the translation
/// of an affine transform.
#[repr(C)]
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Mat4<T> {
  pub a1: T, pub a2: T, pub a3: T, pub a4: T,
  pub b1: T, pub b2: T, pub b3: T, pub b4: T,
  pub c1: T, pub c2: T, pub c3: T, pub c4: T,
  pub d1: T, pub d2: T, pub d3: T, pub d4: T,
}

impl<T: Scalar> SquareMatrixDimension<4> for Mat4<T> {}
impl<T: Scalar> SquareMatrix<T> for Mat4<T> {
  fn identity() -> Self {
    Self::one()
  }

  fn transpose(&self) -> Self {
    #[rustfmt::skip]
    let m = Mat4::new(
      self.a1, self.b1, self.c1, self.d1,
      self.a2, self.b2, self.c2, self.d2,
      self.a3, self.b3, self.c3, self.d3,
      self.a4, self.b4, self.c4, self.d4,
    );
    m
  }

  fn det(&self) -> T {
    let (s, c) = self.subfactors();
    s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
  }

  fn inverse(&self) -> Result<Self, SingularMatrix> {
    let (s, c) = self.subfactors();
    let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
    if det == T::zero() {
      return Err(SingularMatrix);
    }

    let inv_det = T::one() / det;

    Ok(Self {
      a1: (self.b2 * c[5] - self.b3 * c[4] + self.b4 * c[3]) * inv_det,
      b1: (-self.b1 * c[5] + self.b3 * c[2] - self.b4 * c[1]) * inv_det,
      c1: (self.b1 * c[4] - self.b2 * c[2] + self.b4 * c[0]) * inv_det,
      d1: (-self.b1 * c[3] + self.b2 * c[1] - self.b3 * c[0]) * inv_det,

      a2: (-self.a2 * c[5] + self.a3 * c[4] - self.a4 * c[3]) * inv_det,
      b2: (self.a1 * c[5] - self.a3 * c[2] + self.a4 * c[1]) * inv_det,
      c2: (-self.a1 * c[4] + self.a2 * c[2] - self.a4 * c[0]) * inv_det,
      d2: (self.a1 * c[3] - self.a2 * c[1] + self.a3 * c[0]) * inv_det,

      a3: (self.d2 * s[5] - self.d3 * s[4] + self.d4 * s[3]) * inv_det,
      b3: (-self.d1 * s[5] + self.d3 * s[2] - self.d4 * s[1]) * inv_det,
      c3: (self.d1 * s[4] - self.d2 * s[2] + self.d4 * s[0]) * inv_det,
      d3: (-self.d1 * s[3] + self.d2 * s[1] - self.d3 * s[0]) * inv_det,

      a4: (-self.c2 * s[5] + self.c3 * s[4] - self.c4 * s[3]) * inv_det,
      b4: (self.c1 * s[5] - self.c3 * s[2] + self.c4 * s[1]) * inv_det,
      c4: (-self.c1 * s[4] + self.c2 * s[2] - self.c4 * s[0]) * inv_det,
      d4: (self.c1 * s[3] - self.c2 * s[1] + self.c3 * s[0]) * inv_det,
    })
  }
}

impl<T: Scalar> Mat4<T> {
  /// The six 2x2 minors of the upper and lower half, shared between the
  /// determinant and the inverse.
  fn subfactors(&self) -> ([T; 6], [T; 6]) {
    let s = [
      self.a1 * self.b2 - self.a2 * self.b1,
      self.a1 * self.b3 - self.a3 * self.b1,
      self.a1 * self.b4 - self.a4 * self.b1,
      self.a2 * self.b3 - self.a3 * self.b2,
      self.a2 * self.b4 - self.a4 * self.b2,
      self.a3 * self.b4 - self.a4 * self.b3,
    ];
    let c = [
      self.c1 * self.d2 - self.c2 * self.d1,
      self.c1 * self.d3 - self.c3 * self.d1,
      self.c1 * self.d4 - self.c4 * self.d1,
      self.c2 * self.d3 - self.c3 * self.d2,
      self.c2 * self.d4 - self.c4 * self.d2,
      self.c3 * self.d4 - self.c4 * self.d3,
    ];
    (s, c)
  }
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

// a point through the homogeneous transform, with the perspective divide
impl<T> Mul<Vec3<T>> for Mat4<T>
where
  T: Scalar,
{
  type Output = Vec3<T>;

  fn mul(self, v: Vec3<T>) -> Vec3<T> {
    let v = self * v.expand_with_one();
    v.xyz() / v.w
  }
}

impl<T> Mul<Vec4<T>> for Mat4<T>
where
  T: Copy + Add<Output = T> + Mul<Output = T>,
{
  type Output = Vec4<T>;

  fn mul(self, v: Vec4<T>) -> Vec4<T> {
    Vec4 {
      x: v.x * self.a1 + v.y * self.b1 + v.z * self.c1 + v.w * self.d1,
      y: v.x * self.a2 + v.y * self.b2 + v.z * self.c2 + v.w * self.d2,
      z: v.x * self.a3 + v.y * self.b3 + v.z * self.c3 + v.w * self.d3,
      w: v.x * self.a4 + v.y * self.b4 + v.z * self.c4 + v.w * self.d4,
    }
  }
}

impl<T> Mul for Mat4<T>
where
  T: Copy + Mul<Output = T> + Add<Output = T>,
{
  type Output = Self;

  fn mul(self, m: Self) -> Self {
    let a = self;

    Self {
      a1: a.a1 * m.a1 + a.b1 * m.a2 + a.c1 * m.a3 + a.d1 * m.a4,
      a2: a.a2 * m.a1 + a.b2 * m.a2 + a.c2 * m.a3 + a.d2 * m.a4,
      a3: a.a3 * m.a1 + a.b3 * m.a2 + a.c3 * m.a3 + a.d3 * m.a4,
      a4: a.a4 * m.a1 + a.b4 * m.a2 + a.c4 * m.a3 + a.d4 * m.a4,

      b1: a.a1 * m.b1 + a.b1 * m.b2 + a.c1 * m.b3 + a.d1 * m.b4,
      b2: a.a2 * m.b1 + a.b2 * m.b2 + a.c2 * m.b3 + a.d2 * m.b4,
      b3: a.a3 * m.b1 + a.b3 * m.b2 + a.c3 * m.b3 + a.d3 * m.b4,
      b4: a.a4 * m.b1 + a.b4 * m.b2 + a.c4 * m.b3 + a.d4 * m.b4,

      c1: a.a1 * m.c1 + a.b1 * m.c2 + a.c1 * m.c3 + a.d1 * m.c4,
      c2: a.a2 * m.c1 + a.b2 * m.c2 + a.c2 * m.c3 + a.d2 * m.c4,
      c3: a.a3 * m.c1 + a.b3 * m.c2 + a.c3 * m.c3 + a.d3 * m.c4,
      c4: a.a4 * m.c1 + a.b4 * m.c2 + a.c4 * m.c3 + a.d4 * m.c4,

      d1: a.a1 * m.d1 + a.b1 * m.d2 + a.c1 * m.d3 + a.d1 * m.d4,
      d2: a.a2 * m.d1 + a.b2 * m.d2 + a.c2 * m.d3 + a.d2 * m.d4,
      d3: a.a3 * m.d1 + a.b3 * m.d2 + a.c3 * m.d3 + a.d3 * m.d4,
      d4: a.a4 * m.d1 + a.b4 * m.d2 + a.c4 * m.d3 + a.d4 * m.d4,
    }
  }
}

impl<T> Mat4<T>
where
  T: Copy,
{
  #[rustfmt::skip]
  pub fn new(
    m11: T, m12: T, m13: T, m14: T,
    m21: T, m22: T, m23: T, m24: T,
    m31: T, m32: T, m33: T, m34: T,
    m41: T, m42: T, m43: T, m44: T,
  ) -> Self {
    Self {
      a1: m11, a2: m12, a3: m13, a4: m14,
      b1: m21, b2: m22, b3: m23, b4: m24,
      c1: m31, c2: m32, c3: m33, c4: m34,
      d1: m41, d2: m42, d3: m43, d4: m44,
    }
  }

  pub fn from_cols(c0: Vec4<T>, c1: Vec4<T>, c2: Vec4<T>, c3: Vec4<T>) -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: c0.x, a2: c0.y, a3: c0.z, a4: c0.w,
      b1: c1.x, b2: c1.y, b3: c1.z, b4: c1.w,
      c1: c2.x, c2: c2.y, c3: c2.z, c4: c2.w,
      d1: c3.x, d2: c3.y, d3: c3.z, d4: c3.w,
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

  pub fn position(&self) -> Vec3<T> {
    Vec3::new(self.d1, self.d2, self.d3)
  }

  pub fn to_mat3(self) -> Mat3<T> {
    #[rustfmt::skip]
    let m = Mat3 {
      a1: self.a1, a2: self.a2, a3: self.a3,
      b1: self.b1, b2: self.b2, b3: self.b3,
      c1: self.c1, c2: self.c2, c3: self.c3,
    };
    m
  }
}

impl<T> Mat4<T>
where
  T: Scalar,
{
  pub fn scale(scale: impl Into<Vec3<T>>) -> Self {
    let Vec3 { x, y, z } = scale.into();
    #[rustfmt::skip]
    let m = Mat4::new(
      x,         T::zero(), T::zero(), T::zero(),
      T::zero(), y,         T::zero(), T::zero(),
      T::zero(), T::zero(), z,         T::zero(),
      T::zero(), T::zero(), T::zero(), T::one(),
    );
    m
  }

  pub fn translate(translate: impl Into<Vec3<T>>) -> Self {
    let Vec3 { x, y, z } = translate.into();
    #[rustfmt::skip]
    let m = Mat4::new(
      T::one(),  T::zero(), T::zero(), T::zero(),
      T::zero(), T::one(),  T::zero(), T::zero(),
      T::zero(), T::zero(), T::one(),  T::zero(),
      x,         y,         z,         T::one(),
    );
    m
  }

  /// Rotation about an arbitrary axis by theta radians, the Mat3 Rodrigues
  /// rotation in the upper left block.
  pub fn rotate(axis: Vec3<T>, theta: T) -> Self {
    let r = Mat3::rotate(axis, theta);
    #[rustfmt::skip]
    let m = Mat4::new(
      r.a1,      r.a2,      r.a3,      T::zero(),
      r.b1,      r.b2,      r.b3,      T::zero(),
      r.c1,      r.c2,      r.c3,      T::zero(),
      T::zero(), T::zero(), T::zero(), T::one(),
    );
    m
  }

  pub fn rotate_x(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    #[rustfmt::skip]
    let m = Mat4::new(
      T::one(),  T::zero(), T::zero(), T::zero(),
      T::zero(), c,         s,         T::zero(),
      T::zero(), -s,        c,         T::zero(),
      T::zero(), T::zero(), T::zero(), T::one(),
    );
    m
  }

  pub fn rotate_y(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    #[rustfmt::skip]
    let m = Mat4::new(
      c,         T::zero(), -s,        T::zero(),
      T::zero(), T::one(),  T::zero(), T::zero(),
      s,         T::zero(), c,         T::zero(),
      T::zero(), T::zero(), T::zero(), T::one(),
    );
    m
  }

  pub fn rotate_z(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    #[rustfmt::skip]
    let m = Mat4::new(
      c,         s,         T::zero(), T::zero(),
      -s,        c,         T::zero(), T::zero(),
      T::zero(), T::zero(), T::one(),  T::zero(),
      T::zero(), T::zero(), T::zero(), T::one(),
    );
    m
  }
}

impl<T: Scalar> Default for Mat4<T> {
  /// The default matrix is the identity, not all zero.
  fn default() -> Self {
    Self::identity()
  }
}

impl<T> num_traits::Zero for Mat4<T>
where
  T: num_traits::Zero + Copy + PartialEq,
{
  #[inline(always)]
  fn zero() -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: T::zero(), a2: T::zero(), a3: T::zero(), a4: T::zero(),
      b1: T::zero(), b2: T::zero(), b3: T::zero(), b4: T::zero(),
      c1: T::zero(), c2: T::zero(), c3: T::zero(), c4: T::zero(),
      d1: T::zero(), d2: T::zero(), d3: T::zero(), d4: T::zero(),
    };
    m
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.eq(&Self::zero())
  }
}

impl<T> num_traits::One for Mat4<T>
where
  T: num_traits::One + num_traits::Zero + Copy,
{
  #[inline(always)]
  fn one() -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: T::one(),  a2: T::zero(), a3: T::zero(), a4: T::zero(),
      b1: T::zero(), b2: T::one(),  b3: T::zero(), b4: T::zero(),
      c1: T::zero(), c2: T::zero(), c3: T::one(),  c4: T::zero(),
      d1: T::zero(), d2: T::zero(), d3: T::zero(), d4: T::one(),
    };
    m
  }
}

impl_matrix_arith!(Mat4 {
  a1, a2, a3, a4, b1, b2, b3, b4, c1, c2, c3, c4, d1, d2, d3, d4
});
impl_fixed_array_conversions!(Mat4<T> {
  a1: 0, a2: 1, a3: 2, a4: 3,
  b1: 4, b2: 5, b3: 6, b4: 7,
  c1: 8, c2: 9, c3: 10, c4: 11,
  d1: 12, d2: 13, d3: 14, d4: 15
}, 16);
impl_matrix_columns!(Mat4<T>, 4, Vec4);

impl<T: Debug> fmt::Display for Mat4<T> {
  /// Row major bracketed rows, for diagnostics only.
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    writeln!(f, "[ {:?}, {:?}, {:?}, {:?} ]", self.a1, self.b1, self.c1, self.d1)?;
    writeln!(f, "[ {:?}, {:?}, {:?}, {:?} ]", self.a2, self.b2, self.c2, self.d2)?;
    writeln!(f, "[ {:?}, {:?}, {:?}, {:?} ]", self.a3, self.b3, self.c3, self.d3)?;
    write!(f, "[ {:?}, {:?}, {:?}, {:?} ]", self.a4, self.b4, self.c4, self.d4)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_mat_near(a: Mat4<f32>, b: [f32; 16]) {
    let a: [f32; 16] = a.into();
    for (got, want) in a.iter().zip(b) {
      assert!((got - want).abs() < 1e-5, "{:?} vs {:?}", a, b);
    }
  }

  #[test]
  fn default_is_identity() {
    let m = Mat4::<f32>::default();
    for i in 0..4 {
      for j in 0..4 {
        assert_eq!(m[i][j], if i == j { 1. } else { 0. });
      }
    }
  }

  #[test]
  fn translate_moves_points_but_not_directions() {
    let m = Mat4::<f32>::translate((1., 2., 3.));
    assert_eq!(m * vec3(1., 1., 1.), vec3(2., 3., 4.));
    // directions ignore the translation column and come back unit length
    assert_eq!(vec3(1.0_f32, 0., 0.).transform_direction(m), vec3(1., 0., 0.));
    let d = vec3(0.0_f32, 2., 0.).transform_direction(m);
    assert_eq!(d, vec3(0., 1., 0.));
  }

  #[test]
  fn composition_applies_right_to_left() {
    let m = Mat4::<f32>::translate((10., 0., 0.)) * Mat4::scale((2., 2., 2.));
    assert_eq!(m * vec3(1., 1., 1.), vec3(12., 2., 2.));
  }

  #[test]
  fn det_and_inverse_match_cgmath() {
    use cgmath::SquareMatrix as _;

    #[rustfmt::skip]
    let m = Mat4::<f32>::new(
      2., 0., 0., 0.,
      1., 3., 0., 0.,
      0., 1., 4., 1.,
      5., 6., 7., 1.,
    );
    let raw: [f32; 16] = m.into();
    let cg = cgmath::Matrix4::<f32>::from(unsafe { std::mem::transmute::<_, [[f32; 4]; 4]>(raw) });

    assert!((m.det() - cg.determinant()).abs() < 1e-5);

    let inv = m.inverse().unwrap();
    let cg_inv = cg.invert().unwrap();
    let cg_inv: [[f32; 4]; 4] = cg_inv.into();
    assert_mat_near(inv, unsafe { std::mem::transmute::<_, [f32; 16]>(cg_inv) });
  }

  #[test]
  fn inverse_undoes_the_matrix() {
    let m = Mat4::<f32>::translate((1., 2., 3.))
      * Mat4::rotate_y(0.5)
      * Mat4::scale((2., 3., 4.));
    let id = m * m.inverse().unwrap();
    assert_mat_near(id, Mat4::identity().into());
  }

  #[test]
  fn singular_matrix_is_an_error() {
    let m = Mat4::<f32>::scale((1., 1., 0.));
    assert_eq!(m.det(), 0.);
    assert_eq!(m.inverse(), Err(SingularMatrix));
    assert_eq!(m.inverse_or_identity(), Mat4::identity());
  }

  #[test]
  fn axis_rotation_matches_cgmath() {
    let axis = vec3(1.0_f32, 2., 3.).normalize();
    let theta = 0.7_f32;

    let cg = cgmath::Matrix4::<f32>::from_axis_angle(
      cgmath::vec3(axis.x, axis.y, axis.z),
      cgmath::Rad(theta),
    );
    let cg: [[f32; 4]; 4] = cg.into();

    let m = Mat4::rotate(axis, theta);
    assert_mat_near(m, unsafe { std::mem::transmute::<_, [f32; 16]>(cg) });
  }

  #[test]
  fn rotate_x_quarter_turn() {
    let m = Mat4::<f32>::rotate_x(std::f32::consts::FRAC_PI_2);
    let v = m * vec3(0., 1., 0.);
    assert!((v - vec3(0., 0., 1.)).length() < 1e-6);
  }

  #[test]
  fn to_mat3_keeps_the_linear_block() {
    let m = Mat4::<f32>::translate((5., 6., 7.)) * Mat4::scale((2., 3., 4.));
    assert_eq!(
      m.to_mat3(),
      Mat3::from_cols(vec3(2., 0., 0.), vec3(0., 3., 0.), vec3(0., 0., 4.))
    );
  }

  #[test]
  fn product_assign_matches_the_product() {
    let a = Mat4::<f32>::translate((1., 2., 3.));
    let b = Mat4::<f32>::scale((2., 2., 2.));
    let mut c = a;
    c *= b;
    assert_eq!(c, a * b);
  }

  #[test]
  fn double_transpose_is_original() {
    let m = Mat4::<f32>::translate((1., 2., 3.)) * Mat4::rotate_z(0.3);
    assert_eq!(m.transpose().transpose(), m);
  }

  #[test]
  #[should_panic(expected = "out of bounds")]
  fn out_of_range_column_panics() {
    let m = Mat4::<f32>::identity();
    let _ = m[4];
  }

  #[test]
  fn basis_accessors_read_the_columns() {
    let m = Mat4::<f32>::translate((7., 8., 9.));
    assert_eq!(m.right(), vec3(1., 0., 0.));
    assert_eq!(m.up(), vec3(0., 1., 0.));
    assert_eq!(m.forward(), vec3(0., 0., 1.));
    assert_eq!(m.position(), vec3(7., 8., 9.));
  }
}
