use thiserror::Error;

mod dimension;
pub use dimension::*;
pub mod mat2;
pub use mat2::*;
pub mod mat3;
pub use mat3::*;
pub mod mat4;
pub use mat4::*;
pub mod transform;
pub use transform::*;

/// Inversion was requested on a matrix whose determinant is exactly zero.
///
/// There is no near singular tolerance: only an exact zero determinant is
/// rejected, everything else inverts (however badly conditioned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("matrix determinant is zero, the inverse is undefined")]
pub struct SingularMatrix;
