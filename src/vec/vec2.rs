use std::fmt::Debug;
use std::{fmt, ops::*};

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec2<T> {
  pub x: T,
  pub y: T,
}

pub fn vec2<T: Copy>(x: T, y: T) -> Vec2<T> {
  Vec2::new(x, y)
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec2<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec2<T> {}

impl<T: Scalar> VectorDimension<2> for Vec2<T> {}
impl<T: Scalar> VectorImpl for Vec2<T> {}
impl<T: Scalar> RealVector<T> for Vec2<T> {}
impl<T> VectorSpace<T> for Vec2<T> where
  T: Add<T, Output = T> + Sub<T, Output = T> + Mul<T, Output = T> + Div<T, Output = T> + Zero + Copy
{
}
impl<T: Scalar> InnerProductSpace<T> for Vec2<T> {
  #[inline]
  fn dot_impl(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y
  }
}
impl<T: One + Zero + Copy> Vector<T> for Vec2<T> {
  #[inline]
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T,
  {
    Self { x: f(), y: f() }
  }

  #[inline]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T,
  {
    Self {
      x: f(self.x),
      y: f(self.y),
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
    }
  }
}

impl<T: PartialOrd + Copy> ComponentOrder<T> for Vec2<T> {
  #[inline]
  fn each(self, rhs: Self, f: impl Fn(T, T) -> bool) -> bool {
    f(self.x, rhs.x) && f(self.y, rhs.y)
  }
}

impl<T: Copy> Vec2<T> {
  #[inline]
  pub fn new(x: T, y: T) -> Self {
    Self { x, y }
  }

  #[inline(always)]
  pub fn to_tuple(&self) -> (T, T) {
    (self.x, self.y)
  }

  /// Raise into 3d by appending z. The only sanctioned way up a dimension.
  #[inline]
  pub fn expand_with(self, z: T) -> Vec3<T> {
    Vec3::new(self.x, self.y, z)
  }
}

impl<T> Vec2<T>
where
  T: Scalar,
{
  #[inline]
  pub fn rotate(&self, anchor: Self, radians: T) -> Self {
    let v = *self - anchor;
    let x = v.x;
    let y = v.y;
    let c = radians.cos();
    let s = radians.sin();
    Self {
      x: x * c - y * s + anchor.x,
      y: x * s + y * c + anchor.y,
    }
  }

  /// Perspective divide with y as the homogeneous component: when y is
  /// nonzero, x is divided by it and y kept; a zero y passes the value
  /// through unchanged (a direction, not a point).
  #[inline]
  #[must_use]
  pub fn homogenized(self) -> Self {
    if self.y != T::zero() {
      Self::new(self.x / self.y, self.y)
    } else {
      self
    }
  }

  #[inline]
  pub fn homogenize(&mut self) {
    *self = self.homogenized();
  }
}

impl_vector_arith!(Vec2 { x, y });
impl_fixed_array_conversions!(Vec2<T> { x: 0, y: 1 }, 2);
impl_tuple_conversions!(Vec2<T> { x, y }, (T, T));
impl_index_operators!(Vec2<T>, 2, T, usize);

impl<T> fmt::Display for Vec2<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:?}, {:?})", self.x, self.y)
  }
}
