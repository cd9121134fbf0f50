use std::fmt::Debug;
use std::{fmt, ops::*};

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec4<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

pub fn vec4<T: Copy>(x: T, y: T, z: T, w: T) -> Vec4<T> {
  Vec4::new(x, y, z, w)
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec4<T> {}

impl<T: Scalar> VectorDimension<4> for Vec4<T> {}
impl<T: Scalar> VectorImpl for Vec4<T> {}
impl<T: Scalar> RealVector<T> for Vec4<T> {}
impl<T> VectorSpace<T> for Vec4<T> where
  T: Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T> + Div<T, Output = T> + Zero + Copy
{
}
impl<T: Scalar> InnerProductSpace<T> for Vec4<T> {
  #[inline]
  fn dot_impl(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y + self.z * b.z + self.w * b.w
  }
}
impl<T: One + Zero + Copy> Vector<T> for Vec4<T> {
  #[inline]
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T,
  {
    Self {
      x: f(),
      y: f(),
      z: f(),
      w: f(),
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
      w: f(self.w),
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
      w: f(self.w, v2.w),
    }
  }
}

impl<T: PartialOrd + Copy> ComponentOrder<T> for Vec4<T> {
  #[inline]
  fn each(self, rhs: Self, f: impl Fn(T, T) -> bool) -> bool {
    f(self.x, rhs.x) && f(self.y, rhs.y) && f(self.z, rhs.z) && f(self.w, rhs.w)
  }
}

impl<T: Copy> Vec4<T> {
  #[inline]
  pub fn new(x: T, y: T, z: T, w: T) -> Self {
    Self { x, y, z, w }
  }

  #[inline(always)]
  pub fn to_tuple(&self) -> (T, T, T, T) {
    (self.x, self.y, self.z, self.w)
  }

  /// Drop w. The only sanctioned way down a dimension.
  #[inline]
  pub fn xyz(self) -> Vec3<T> {
    Vec3::new(self.x, self.y, self.z)
  }
}

impl<T> Vec4<T>
where
  T: Scalar,
{
  /// Perspective divide: when w is nonzero, x, y and z are divided by it
  /// and w is kept. A zero w passes the value through unchanged, so
  /// direction vectors survive the divide.
  #[inline]
  #[must_use]
  pub fn homogenized(self) -> Self {
    if self.w != T::zero() {
      Self::new(self.x / self.w, self.y / self.w, self.z / self.w, self.w)
    } else {
      self
    }
  }

  #[inline]
  pub fn homogenize(&mut self) {
    *self = self.homogenized();
  }
}

impl_vector_arith!(Vec4 { x, y, z, w });
impl_fixed_array_conversions!(Vec4<T> { x: 0, y: 1, z: 2, w: 3 }, 4);
impl_tuple_conversions!(Vec4<T> { x, y, z, w }, (T, T, T, T));
impl_index_operators!(Vec4<T>, 4, T, usize);

impl<T> fmt::Display for Vec4<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "({:?}, {:?}, {:?}, {:?})",
      self.x, self.y, self.z, self.w
    )
  }
}
