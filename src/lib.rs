//! Fixed dimension vector and matrix math for graphics work.
//!
//! Everything is sized at two, three or four components, column major, and
//! generic over a float [`Scalar`]. Matrix inversion is closed form, and
//! the transform constructors on [`Mat4`] come with provenance tagged
//! wrappers whose inverses skip the cofactor expansion entirely.

#[macro_use]
mod macros;

pub mod angle;
pub mod mat;
pub mod projection;
pub mod scalar;
pub mod vec;

pub use angle::*;
pub use mat::*;
pub use projection::*;
pub use scalar::*;
pub use vec::*;
