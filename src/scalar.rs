use std::fmt::Debug;
use std::ops::{Add, Div};

pub use num_traits::{One, Zero};

/// Two and a half, written through `One` so the closed form transform
/// formulas below stay generic over the element type.
pub trait Two {
  #[must_use]
  fn two() -> Self;
  #[must_use]
  fn half() -> Self;
}

impl<T> Two for T
where
  T: One + Add<Output = T> + Div<Output = T>,
{
  #[inline(always)]
  fn two() -> Self {
    T::one() + T::one()
  }
  #[inline(always)]
  fn half() -> Self {
    T::one() / Self::two()
  }
}

/// The element type every vector and matrix in this crate is generic over.
///
/// `f32` is the expected instantiation for graphics pipelines; `f64` is
/// supported the same way.
pub trait Scalar: num_traits::Float + Two + Default + Debug + Send + Sync + 'static {
  /// Lift a literal into the scalar type.
  fn by(v: f32) -> Self;
  fn pi_by_c180() -> Self;
  fn c180_by_pi() -> Self;
}

impl Scalar for f32 {
  #[inline(always)]
  fn by(v: f32) -> Self {
    v
  }
  #[inline(always)]
  fn pi_by_c180() -> Self {
    std::f32::consts::PI / 180.
  }
  #[inline(always)]
  fn c180_by_pi() -> Self {
    180. / std::f32::consts::PI
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn by(v: f32) -> Self {
    v as f64
  }
  #[inline(always)]
  fn pi_by_c180() -> Self {
    std::f64::consts::PI / 180.
  }
  #[inline(always)]
  fn c180_by_pi() -> Self {
    180. / std::f64::consts::PI
  }
}
