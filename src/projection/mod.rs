use crate::*;

pub mod perspective;
pub use perspective::*;
pub mod orth;
pub use orth::*;

/// A camera projection description that can (re)build its matrix on demand.
/// All projections here target the OpenGL clip space convention, depth in
/// [-1, 1] and the camera looking down -z.
pub trait Projection<T: Scalar>: Send + Sync {
  fn update_projection(&self, projection: &mut Mat4<T>);

  fn compute_projection_mat(&self) -> Mat4<T> {
    let mut mat = Mat4::identity();
    self.update_projection(&mut mat);
    mat
  }
}

pub trait ResizableProjection<T: Scalar>: Projection<T> {
  fn resize(&mut self, size: (T, T));
}
