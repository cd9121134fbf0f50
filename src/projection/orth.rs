use crate::*;

#[derive(Debug, Copy, Clone)]
pub struct OrthographicProjection<T> {
  pub left: T,
  pub right: T,
  pub top: T,
  pub bottom: T,
  pub near: T,
  pub far: T,
}

impl<T: Scalar> Default for OrthographicProjection<T> {
  fn default() -> Self {
    Self {
      left: T::by(-50.),
      right: T::by(50.),
      top: T::by(50.),
      bottom: T::by(-50.),
      near: T::by(0.1),
      far: T::by(1000.),
    }
  }
}

impl<T: Scalar> Projection<T> for OrthographicProjection<T> {
  fn update_projection(&self, projection: &mut Mat4<T>) {
    *projection = Mat4::orthographic(
      self.left,
      self.right,
      self.top,
      self.bottom,
      self.near,
      self.far,
    );
  }
}

impl<T: Scalar> ResizableProjection<T> for OrthographicProjection<T> {
  /// Keeps the vertical extent and rescales the horizontal one to the new
  /// aspect ratio.
  fn resize(&mut self, size: (T, T)) {
    let aspect = size.0 / size.1;
    let half_width = (self.top - self.bottom) * T::half() * aspect;
    self.right = half_width;
    self.left = -half_width;
  }
}

impl<T: Scalar> Mat4<T> {
  pub fn orthographic(left: T, right: T, top: T, bottom: T, near: T, far: T) -> Self {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    #[rustfmt::skip]
    let mat = Mat4::new(
      T::two() / width,        T::zero(),                T::zero(),             T::zero(),
      T::zero(),               T::two() / height,        T::zero(),             T::zero(),
      T::zero(),               T::zero(),                -T::two() / depth,     T::zero(),
      -(right + left) / width, -(top + bottom) / height, -(far + near) / depth, T::one(),
    );
    mat
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matches_cgmath_ortho() {
    let m = Mat4::<f32>::orthographic(-2., 3., 5., -1., 0.1, 100.);
    let m: [f32; 16] = m.into();

    let cg = cgmath::ortho(-2.0_f32, 3., -1., 5., 0.1, 100.);
    let cg: [[f32; 4]; 4] = cg.into();
    let cg = unsafe { std::mem::transmute::<_, [f32; 16]>(cg) };

    for (got, want) in m.iter().zip(cg) {
      assert!((got - want).abs() < 1e-5, "{:?} vs {:?}", m, cg);
    }
  }

  #[test]
  fn volume_corners_map_to_the_unit_cube() {
    let m = Mat4::<f32>::orthographic(-2., 2., 1., -1., 1., 11.);
    assert!((m * vec3(-2., -1., -1.) - vec3(-1., -1., -1.)).length() < 1e-6);
    assert!((m * vec3(2., 1., -11.) - vec3(1., 1., 1.)).length() < 1e-6);
  }

  #[test]
  fn resize_keeps_the_vertical_extent() {
    let mut p = OrthographicProjection::<f32>::default();
    p.resize((200., 100.));
    assert_eq!(p.top, 50.);
    assert_eq!(p.bottom, -50.);
    assert_eq!(p.right, 100.);
    assert_eq!(p.left, -100.);
  }
}
