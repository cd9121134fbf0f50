use crate::*;

#[derive(Debug, Copy, Clone)]
pub struct PerspectiveProjection<T> {
  pub near: T,
  pub far: T,
  pub fov: Deg<T>,
  pub aspect: T,
}

impl<T: Scalar> Default for PerspectiveProjection<T> {
  fn default() -> Self {
    Self {
      near: T::by(1.),
      far: T::by(100_000.),
      fov: Deg::by(T::by(90.)),
      aspect: T::by(1.),
    }
  }
}

impl<T: Scalar> Projection<T> for PerspectiveProjection<T> {
  fn update_projection(&self, projection: &mut Mat4<T>) {
    *projection = Mat4::perspective(self.fov, self.aspect, self.near, self.far);
  }
}

impl<T: Scalar> ResizableProjection<T> for PerspectiveProjection<T> {
  fn resize(&mut self, size: (T, T)) {
    self.aspect = size.0 / size.1;
  }
}

impl<T: Scalar> Mat4<T> {
  /// Symmetric perspective frustum. The fov is the full vertical field of
  /// view, near and far are the positive distances to the clip planes.
  pub fn perspective(fov: Deg<T>, aspect: T, near: T, far: T) -> Self {
    let top = near * (fov.to_rad() * T::half()).tan();
    let right = top * aspect;

    let width = T::two() * right;
    let height = T::two() * top;
    let depth = far - near;

    #[rustfmt::skip]
    let mat = Mat4::new(
      T::two() * near / width, T::zero(),                T::zero(),                        T::zero(),
      T::zero(),               T::two() * near / height, T::zero(),                        T::zero(),
      T::zero(),               T::zero(),                -(far + near) / depth,            -T::one(),
      T::zero(),               T::zero(),                -T::two() * near * far / depth,   T::zero(),
    );
    mat
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matches_cgmath_perspective() {
    let m = Mat4::<f32>::perspective(Deg::by(60.), 16. / 9., 0.1, 100.);
    let m: [f32; 16] = m.into();

    let cg = cgmath::perspective(cgmath::Deg(60.0_f32), 16. / 9., 0.1, 100.);
    let cg: [[f32; 4]; 4] = cg.into();
    let cg = unsafe { std::mem::transmute::<_, [f32; 16]>(cg) };

    for (got, want) in m.iter().zip(cg) {
      assert!((got - want).abs() < 1e-5, "{:?} vs {:?}", m, cg);
    }
  }

  #[test]
  fn near_plane_maps_to_negative_one_depth() {
    let p = PerspectiveProjection::<f32>::default();
    let m = p.compute_projection_mat();
    let clip = m * vec4(0., 0., -p.near, 1.);
    assert!((clip.z / clip.w + 1.).abs() < 1e-6);
  }

  #[test]
  fn resize_updates_the_aspect() {
    let mut p = PerspectiveProjection::<f32>::default();
    p.resize((1920., 1080.));
    assert!((p.aspect - 16. / 9.).abs() < 1e-6);
  }
}
