use std::ops::*;

use num_traits::real::Real;

use crate::*;

// this trait for avoid conflict impl
pub trait VectorImpl {}

// this trait for mark the vector's dimension
pub trait VectorDimension<const D: usize> {}

// this trait abstract for ops on vector
pub trait Vector<T: One + Zero + Copy>: Copy {
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T;

  /// Perform the given operation on each field in the vector, returning a new point
  /// constructed from the operations.
  #[must_use]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T;

  /// Construct a new vector where each component is the result of
  /// applying the given operation to each pair of components of the
  /// given vectors.
  #[must_use]
  fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T;

  #[inline]
  #[must_use]
  fn one() -> Self {
    Self::create(|| T::one())
  }
  #[inline]
  #[must_use]
  fn zero() -> Self {
    Self::create(|| T::zero())
  }
  #[inline]
  #[must_use]
  fn splat(v: T) -> Self {
    Self::create(|| v)
  }
}

/// the vector that in real number space
pub trait RealVector<T: One + Zero + Real>: Vector<T> {
  #[inline]
  fn min(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.min(b))
  }
  #[inline]
  fn max(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.max(b))
  }
  #[inline]
  fn clamp(self, min: Self, max: Self) -> Self {
    self.max(min).min(max)
  }
  #[inline]
  fn saturate(self) -> Self {
    self.clamp(Self::zero(), Self::one())
  }
}

/// https://en.wikipedia.org/wiki/Vector_space
pub trait VectorSpace<T>:
  Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Mul<T, Output = Self>
  + Div<T, Output = Self>
  + Sized
  + Copy
{
}

/// https://en.wikipedia.org/wiki/Inner_product
///
/// inner space define the length and angle based on vector space
pub trait InnerProductSpace<T: One + Zero + Two + Real + Copy>: VectorSpace<T> {
  /// The unit length vector pointing the same way as self.
  ///
  /// The zero vector has no defined normal: the result components are
  /// non finite in that case. Callers own the nonzero length precondition.
  #[inline]
  #[must_use]
  fn normalize(&self) -> Self {
    *self * (T::one() / self.length())
  }

  #[inline]
  fn normalize_self(&mut self) {
    *self = self.normalize();
  }

  /// self and the input normal should both be normalized
  #[inline]
  #[must_use]
  fn reflect(&self, normal: Self) -> Self {
    *self - normal * self.dot(normal) * T::two()
  }

  #[inline]
  fn length(&self) -> T {
    self.length2().sqrt()
  }

  #[inline]
  fn length2(&self) -> T {
    self.dot(*self)
  }

  #[inline]
  fn distance(&self, b: Self) -> T {
    (*self - b).length()
  }

  #[inline]
  #[must_use]
  fn reverse(&self) -> Self {
    *self * -T::one()
  }

  #[inline]
  fn dot(&self, b: Self) -> T {
    self.dot_impl(b)
  }
  fn dot_impl(&self, b: Self) -> T;
}

/// Componentwise comparison lifted to vectors: the relation holds only when
/// every component pair satisfies it.
///
/// This is a strict partial order, not a total one. Two vectors may compare
/// neither greater, less, nor equal, which is why these are named methods
/// rather than a `PartialOrd` impl (whose operator contract cannot express
/// the relation).
pub trait ComponentOrder<T: PartialOrd + Copy>: Copy {
  /// True when the predicate holds for every component pair.
  fn each(self, rhs: Self, f: impl Fn(T, T) -> bool) -> bool;

  #[inline]
  fn all_greater(self, rhs: Self) -> bool {
    self.each(rhs, |a, b| a > b)
  }
  #[inline]
  fn all_less(self, rhs: Self) -> bool {
    self.each(rhs, |a, b| a < b)
  }
  #[inline]
  fn all_greater_equal(self, rhs: Self) -> bool {
    self.each(rhs, |a, b| a >= b)
  }
  #[inline]
  fn all_less_equal(self, rhs: Self) -> bool {
    self.each(rhs, |a, b| a <= b)
  }
}
