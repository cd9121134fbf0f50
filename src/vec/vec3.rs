use std::fmt::Debug;
use std::{fmt, ops::*};

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

pub fn vec3<T: Copy>(x: T, y: T, z: T) -> Vec3<T> {
  Vec3::new(x, y, z)
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}

impl<T: Scalar> VectorDimension<3> for Vec3<T> {}
impl<T: Scalar> VectorImpl for Vec3<T> {}
impl<T: Scalar> RealVector<T> for Vec3<T> {}
impl<T> VectorSpace<T> for Vec3<T> where
  T: Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T> + Div<T, Output = T> + Zero + Copy
{
}
impl<T: Scalar> InnerProductSpace<T> for Vec3<T> {
  #[inline]
  fn dot_impl(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y + self.z * b.z
  }
}
impl<T: One + Zero + Copy> Vector<T> for Vec3<T> {
  #[inline]
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T,
  {
    Self {
      x: f(),
      y: f(),
      z: f(),
    }
  }

  #[inline]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T,
  {
    Self {
      x: f(self.x),
      y: f(self.y),
      z: f(self.z),
    }
  }

  #[inline]
  fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T,
  {
    Self {
      x: f(self.x, v2.x),
      y: f(self.y, v2.y),
      z: f(self.z, v2.z),
    }
  }
}

impl<T: PartialOrd + Copy> ComponentOrder<T> for Vec3<T> {
  #[inline]
  fn each(self, rhs: Self, f: impl Fn(T, T) -> bool) -> bool {
    f(self.x, rhs.x) && f(self.y, rhs.y) && f(self.z, rhs.z)
  }
}

impl<T: Copy> Vec3<T> {
  #[inline]
  pub fn new(x: T, y: T, z: T) -> Self {
    Self { x, y, z }
  }

  #[inline(always)]
  pub fn to_tuple(&self) -> (T, T, T) {
    (self.x, self.y, self.z)
  }

  /// Raise into homogeneous 4d by appending w.
  #[inline]
  pub fn expand_with(self, w: T) -> Vec4<T> {
    Vec4::new(self.x, self.y, self.z, w)
  }

  /// Drop z. The only sanctioned way down a dimension.
  #[inline]
  pub fn xy(self) -> Vec2<T> {
    Vec2::new(self.x, self.y)
  }
}

impl<T> Vec3<T>
where
  T: Scalar,
{
  /// Raise into homogeneous 4d as a position, w = 1.
  #[inline]
  pub fn expand_with_one(self) -> Vec4<T> {
    self.expand_with(T::one())
  }

  /// The cross product is only meaningful in 3d, so only Vec3 defines it.
  #[inline]
  #[must_use]
  pub fn cross(&self, b: Self) -> Self {
    Self {
      x: self.y * b.z - self.z * b.y,
      y: self.z * b.x - self.x * b.z,
      z: self.x * b.y - self.y * b.x,
    }
  }

  /// Apply the rotational part of an affine matrix, renormalizing the
  /// result; the vector is interpreted as a direction, not a position.
  #[inline]
  pub fn transform_direction(&self, m: Mat4<T>) -> Self {
    Self {
      x: m.a1 * self.x + m.b1 * self.y + m.c1 * self.z,
      y: m.a2 * self.x + m.b2 * self.y + m.c2 * self.z,
      z: m.a3 * self.x + m.b3 * self.y + m.c3 * self.z,
    }
    .normalize()
  }

  /// Perspective divide with z as the homogeneous component. A zero z
  /// passes the value through unchanged (a direction, not a point).
  #[inline]
  #[must_use]
  pub fn homogenized(self) -> Self {
    if self.z != T::zero() {
      Self::new(self.x / self.z, self.y / self.z, self.z)
    } else {
      self
    }
  }

  #[inline]
  pub fn homogenize(&mut self) {
    *self = self.homogenized();
  }
}

impl_vector_arith!(Vec3 { x, y, z });
impl_fixed_array_conversions!(Vec3<T> { x: 0, y: 1, z: 2 }, 3);
impl_tuple_conversions!(Vec3<T> { x, y, z }, (T, T, T));
impl_index_operators!(Vec3<T>, 3, T, usize);

impl<T> fmt::Display for Vec3<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_all_zero() {
    assert_eq!(Vec3::<f32>::default(), vec3(0., 0., 0.));
  }

  #[test]
  fn addition_round_trip_and_associativity() {
    let a = vec3(2.0_f32, -3., 6.);
    let b = vec3(1.0_f32, -4., 2.);
    let c = vec3(-1.0_f32, 2., -5.);
    assert_eq!(a + b - b, a);
    assert_eq!((a + b) + c, a + (b + c));
  }

  #[test]
  fn length_and_dot() {
    let a = vec3(1.0_f32, 2., 3.);
    let b = vec3(4.0_f32, 5., 6.);
    assert_eq!(a.length2(), 14.);
    assert_eq!(vec3(-1.0_f32, -2., -3.).length2(), 14.);
    assert_eq!(a.dot(b), 32.);
    assert_eq!(vec3(3.0_f32, 4., 0.).length(), 5.);
  }

  #[test]
  fn distance_and_reverse() {
    let a = vec3(1.0_f32, 2., 3.);
    let b = vec3(1.0_f32, 2., 8.);
    assert_eq!(a.distance(b), 5.);
    assert_eq!(a.reverse(), vec3(-1., -2., -3.));
    assert_eq!(a.reverse(), -a);
  }

  #[test]
  fn cross_of_basis_vectors() {
    let y = vec3(0.0_f32, 1., 0.);
    let z = vec3(0.0_f32, 0., 1.);
    assert_eq!(y.cross(z), vec3(1., 0., 0.));
    // anti commutative
    assert_eq!(z.cross(y), vec3(-1., 0., 0.));
  }

  #[test]
  fn normalize_keeps_direction() {
    let v = vec3(0.0_f32, 0., 2.);
    assert_eq!(v.normalize(), vec3(0., 0., 1.));
    let mut w = vec3(3.0_f32, 0., 4.);
    w.normalize_self();
    assert!((w.length() - 1.).abs() < 1e-6);
  }

  #[test]
  fn normalize_zero_vector_is_not_finite() {
    let v = Vec3::<f32>::default().normalize();
    assert!(!v.x.is_finite());
  }

  #[test]
  fn dimension_round_trip() {
    let v = vec3(1.0_f32, 2., 3.);
    assert_eq!(v.expand_with(4.).xyz(), v);
    assert_eq!(v.xy().expand_with(3.), v);
  }

  #[test]
  fn homogenize_is_idempotent_once_settled() {
    let mut v = vec3(2.0_f32, 4., 1.);
    v.homogenize();
    assert_eq!(v, vec3(2., 4., 1.));
    assert_eq!(v.homogenized(), v);
    assert_eq!(vec3(2.0_f32, 4., 2.).homogenized(), vec3(1., 2., 2.));
  }

  #[test]
  fn min_max_clamp() {
    let a = vec3(1.0_f32, 5., -2.);
    let b = vec3(2.0_f32, 4., -3.);
    assert_eq!(RealVector::min(a, b), vec3(1., 4., -3.));
    assert_eq!(RealVector::max(a, b), vec3(2., 5., -2.));
    assert_eq!(a.saturate(), vec3(1., 1., 0.));
  }

  #[test]
  fn reflect_across_plane() {
    let v = vec3(1.0_f32, -1., 0.);
    let n = vec3(0.0_f32, 1., 0.);
    assert_eq!(v.reflect(n), vec3(1., 1., 0.));
  }

  #[test]
  #[should_panic(expected = "out of bounds")]
  fn out_of_range_index_panics() {
    let v = vec3(1.0_f32, 2., 3.);
    let _ = v[3];
  }

  #[test]
  fn display_renders_components() {
    assert_eq!(vec3(1.0_f32, 2., 3.).to_string(), "(1.0, 2.0, 3.0)");
  }
}
