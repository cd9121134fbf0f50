use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::*;

/// A matrix known to be a pure axis aligned scale. The wrapper keeps the
/// provenance, so the inverse is the reciprocal diagonal instead of the
/// general cofactor expansion.
///
/// Constructed only through [`ScaleMatrix::of`]; composing or mutating the
/// inner matrix goes through the plain [`Mat4`] it derefs to, which drops
/// the provenance.
#[repr(transparent)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct ScaleMatrix<T> {
  mat: Mat4<T>,
}

/// A matrix known to be a pure translation, inverted by negating the last
/// column.
#[repr(transparent)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct TranslationMatrix<T> {
  mat: Mat4<T>,
}

/// A matrix known to be a pure rotation, inverted by transposing.
#[repr(transparent)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct RotationMatrix<T> {
  mat: Mat4<T>,
}

impl<T: Scalar> ScaleMatrix<T> {
  pub fn of(scale: impl Into<Vec3<T>>) -> Self {
    Self {
      mat: Mat4::scale(scale),
    }
  }

  /// The reciprocal of each diagonal entry.
  ///
  /// # Panics
  ///
  /// Panics if any scale factor is zero, the same contract as dividing a
  /// vector by a zero scalar.
  pub fn inverse(&self) -> Self {
    let s = Vec3::new(self.mat.a1, self.mat.b2, self.mat.c3);
    assert!(
      !s.x.is_zero() && !s.y.is_zero() && !s.z.is_zero(),
      "cannot invert a zero scale"
    );
    Self::of(s.map(|v| T::one() / v))
  }

  pub fn into_matrix(self) -> Mat4<T> {
    self.mat
  }
}

impl<T: Scalar> TranslationMatrix<T> {
  pub fn of(translate: impl Into<Vec3<T>>) -> Self {
    Self {
      mat: Mat4::translate(translate),
    }
  }

  pub fn inverse(&self) -> Self {
    Self::of(-self.mat.position())
  }

  pub fn into_matrix(self) -> Mat4<T> {
    self.mat
  }
}

impl<T: Scalar> RotationMatrix<T> {
  /// Rotation about the axis by theta radians. The axis is assumed unit
  /// length and is not validated.
  pub fn of(axis: Vec3<T>, theta: T) -> Self {
    Self {
      mat: Mat4::rotate(axis, theta),
    }
  }

  pub fn of_x(theta: T) -> Self {
    Self {
      mat: Mat4::rotate_x(theta),
    }
  }

  pub fn of_y(theta: T) -> Self {
    Self {
      mat: Mat4::rotate_y(theta),
    }
  }

  pub fn of_z(theta: T) -> Self {
    Self {
      mat: Mat4::rotate_z(theta),
    }
  }

  /// Rotations are orthonormal, so the inverse is the transpose.
  pub fn inverse(&self) -> Self {
    Self {
      mat: self.mat.transpose(),
    }
  }

  pub fn into_matrix(self) -> Mat4<T> {
    self.mat
  }
}

macro_rules! impl_tagged_matrix_common {
  ($MatrixN:ident) => {
    impl<T> Deref for $MatrixN<T> {
      type Target = Mat4<T>;

      fn deref(&self) -> &Self::Target {
        &self.mat
      }
    }

    impl<T> From<$MatrixN<T>> for Mat4<T> {
      fn from(m: $MatrixN<T>) -> Self {
        m.mat
      }
    }
  };
}

impl_tagged_matrix_common!(ScaleMatrix);
impl_tagged_matrix_common!(TranslationMatrix);
impl_tagged_matrix_common!(RotationMatrix);
