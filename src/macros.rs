/// Generate array conversion implementations for a compound value type.
macro_rules! impl_fixed_array_conversions {
  ($ArrayN:ident <$S:ident> { $($field:ident : $index:expr),+ }, $n:expr) => {
    impl<$S> From<$ArrayN<$S>> for [$S; $n] {
      #[inline]
      fn from(v: $ArrayN<$S>) -> [$S; $n] {
        match v { $ArrayN { $($field),+ } => [$($field),+] }
      }
    }

    impl<$S: Copy> From<[$S; $n]> for $ArrayN<$S> {
      #[inline]
      fn from(v: [$S; $n]) -> $ArrayN<$S> {
        $ArrayN { $($field: v[$index]),+ }
      }
    }

    impl<$S> AsRef<[$S; $n]> for $ArrayN<$S> {
      #[inline]
      fn as_ref(&self) -> &[$S; $n] {
        unsafe { std::mem::transmute(self) }
      }
    }

    impl<$S> AsMut<[$S; $n]> for $ArrayN<$S> {
      #[inline]
      fn as_mut(&mut self) -> &mut [$S; $n] {
        unsafe { std::mem::transmute(self) }
      }
    }
  };
}

/// Generate homogeneous tuple conversion implementations for a compound
/// value type.
macro_rules! impl_tuple_conversions {
  ($ArrayN:ident <$S:ident> { $($field:ident),+ }, $Tuple:ty) => {
    impl<$S> From<$ArrayN<$S>> for $Tuple {
      #[inline]
      fn from(v: $ArrayN<$S>) -> $Tuple {
        match v { $ArrayN { $($field),+ } => ($($field),+,) }
      }
    }

    impl<$S> From<$Tuple> for $ArrayN<$S> {
      #[inline]
      fn from(v: $Tuple) -> $ArrayN<$S> {
        match v { ($($field),+,) => $ArrayN { $($field),+ } }
      }
    }
  };
}

/// Generate index operators over the `[T; n]` (or `[Vector; n]`) view of a
/// compound value type. Out of range indices panic, for every dimension.
macro_rules! impl_index_operators {
  ($VectorN:ident<$S:ident>, $n:expr, $Output:ty, $I:ty) => {
    impl<$S> std::ops::Index<$I> for $VectorN<$S> {
      type Output = $Output;

      #[inline]
      fn index(&self, i: $I) -> &$Output {
        let v: &[$Output; $n] = self.as_ref();
        &v[i]
      }
    }

    impl<$S> std::ops::IndexMut<$I> for $VectorN<$S> {
      #[inline]
      fn index_mut(&mut self, i: $I) -> &mut $Output {
        let v: &mut [$Output; $n] = self.as_mut();
        &mut v[i]
      }
    }
  };
}

/// Expose the columns of a column major matrix as a `[VectorN; n]` view so
/// `m[col]` yields a column vector and `m[col][row]` an element.
macro_rules! impl_matrix_columns {
  ($MatrixN:ident<$S:ident>, $n:expr, $VectorN:ident) => {
    impl<$S> AsRef<[$VectorN<$S>; $n]> for $MatrixN<$S> {
      #[inline]
      fn as_ref(&self) -> &[$VectorN<$S>; $n] {
        unsafe { std::mem::transmute(self) }
      }
    }

    impl<$S> AsMut<[$VectorN<$S>; $n]> for $MatrixN<$S> {
      #[inline]
      fn as_mut(&mut self) -> &mut [$VectorN<$S>; $n] {
        unsafe { std::mem::transmute(self) }
      }
    }

    impl_index_operators!($MatrixN<$S>, $n, $VectorN<$S>, usize);
  };
}

/// Generate the componentwise and scalar broadcast operator family for a
/// vector type: `+ - *` between vectors, `+ - * /` against a scalar, unary
/// negation, and every compound assignment mirror. Scalar division checks
/// for an exactly zero divisor and panics, matching integer division in std.
macro_rules! impl_vector_arith {
  ($VectorN:ident { $($field:ident),+ }) => {
    impl<T: Add<Output = T> + Copy> Add for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn add(self, rhs: Self) -> Self {
        Self { $($field: self.$field + rhs.$field),+ }
      }
    }

    impl<T: Sub<Output = T> + Copy> Sub for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn sub(self, rhs: Self) -> Self {
        Self { $($field: self.$field - rhs.$field),+ }
      }
    }

    // the cartesian (componentwise) product
    impl<T: Mul<Output = T> + Copy> Mul for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn mul(self, rhs: Self) -> Self {
        Self { $($field: self.$field * rhs.$field),+ }
      }
    }

    impl<T: Neg<Output = T> + Copy> Neg for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn neg(self) -> Self {
        Self { $($field: -self.$field),+ }
      }
    }

    impl<T: Add<Output = T> + Copy> Add<T> for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn add(self, s: T) -> Self {
        Self { $($field: self.$field + s),+ }
      }
    }

    impl<T: Sub<Output = T> + Copy> Sub<T> for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn sub(self, s: T) -> Self {
        Self { $($field: self.$field - s),+ }
      }
    }

    impl<T: Mul<Output = T> + Copy> Mul<T> for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn mul(self, s: T) -> Self {
        Self { $($field: self.$field * s),+ }
      }
    }

    impl<T: Zero + Div<Output = T> + Copy> Div<T> for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn div(self, s: T) -> Self {
        assert!(!s.is_zero(), "cannot divide vector by zero scalar");
        Self { $($field: self.$field / s),+ }
      }
    }

    impl<T: Add<Output = T> + Copy> AddAssign for $VectorN<T> {
      #[inline]
      fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
      }
    }

    impl<T: Sub<Output = T> + Copy> SubAssign for $VectorN<T> {
      #[inline]
      fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
      }
    }

    impl<T: Mul<Output = T> + Copy> MulAssign for $VectorN<T> {
      #[inline]
      fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
      }
    }

    impl<T: Add<Output = T> + Copy> AddAssign<T> for $VectorN<T> {
      #[inline]
      fn add_assign(&mut self, s: T) {
        *self = *self + s;
      }
    }

    impl<T: Sub<Output = T> + Copy> SubAssign<T> for $VectorN<T> {
      #[inline]
      fn sub_assign(&mut self, s: T) {
        *self = *self - s;
      }
    }

    impl<T: Mul<Output = T> + Copy> MulAssign<T> for $VectorN<T> {
      #[inline]
      fn mul_assign(&mut self, s: T) {
        *self = *self * s;
      }
    }

    impl<T: Zero + Div<Output = T> + Copy> DivAssign<T> for $VectorN<T> {
      #[inline]
      fn div_assign(&mut self, s: T) {
        *self = *self / s;
      }
    }
  };
}

/// Generate the columnwise `+ -`, scalar broadcast `*`, and compound
/// assignment operator family for a square matrix type. The matrix product
/// itself stays hand expanded in each matrix file.
macro_rules! impl_matrix_arith {
  ($MatrixN:ident { $($field:ident),+ }) => {
    impl<T: Add<Output = T> + Copy> Add for $MatrixN<T> {
      type Output = Self;
      #[inline]
      fn add(self, rhs: Self) -> Self {
        Self { $($field: self.$field + rhs.$field),+ }
      }
    }

    impl<T: Sub<Output = T> + Copy> Sub for $MatrixN<T> {
      type Output = Self;
      #[inline]
      fn sub(self, rhs: Self) -> Self {
        Self { $($field: self.$field - rhs.$field),+ }
      }
    }

    impl<T: Mul<Output = T> + Copy> Mul<T> for $MatrixN<T> {
      type Output = Self;
      #[inline]
      fn mul(self, s: T) -> Self {
        Self { $($field: self.$field * s),+ }
      }
    }

    impl<T: Add<Output = T> + Copy> AddAssign for $MatrixN<T> {
      #[inline]
      fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
      }
    }

    impl<T: Sub<Output = T> + Copy> SubAssign for $MatrixN<T> {
      #[inline]
      fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
      }
    }

    impl<T: Mul<Output = T> + Copy> MulAssign<T> for $MatrixN<T> {
      #[inline]
      fn mul_assign(&mut self, s: T) {
        *self = *self * s;
      }
    }

    impl<T: Copy + Mul<Output = T> + Add<Output = T>> MulAssign for $MatrixN<T> {
      #[inline]
      fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
      }
    }
  };
}
