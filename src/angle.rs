use crate::Scalar;

/// An angle value that is explicitly in degrees.
///
/// Trigonometric functions only make sense on radians, so none are exposed
/// here; the wrapper exists to keep degree valued inputs (like a field of
/// view) from being fed into them without an explicit conversion.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Deg<T> {
  pub value: T,
}

impl<T: Scalar> Deg<T> {
  pub fn by(value: T) -> Self {
    Deg { value }
  }
  pub fn to_rad(&self) -> T {
    self.value * T::pi_by_c180()
  }
  pub fn from_rad(rad: T) -> Self {
    Self::by(rad * T::c180_by_pi())
  }
}

#[test]
fn degree_radian_round_trip() {
  let half_turn = Deg::by(180.0_f32);
  assert!((half_turn.to_rad() - std::f32::consts::PI).abs() < 1e-6);
  assert!((Deg::from_rad(std::f32::consts::PI).value - 180.0).abs() < 1e-4);
}
