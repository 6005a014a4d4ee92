//! Curve points.

use zeroize::Zeroize;

/// Point on a short Weierstrass curve as a triple of field elements.
///
/// The meaning of `z` is up to the arithmetic engine which produced the
/// point; every point handed out by a [`Key`](crate::Key) is affine, i.e.
/// `z = 1` and `(x, y)` are the affine coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectivePoint<U> {
    /// x-coordinate
    pub x: U,

    /// y-coordinate
    pub y: U,

    /// z-coordinate
    pub z: U,
}

impl<U> ProjectivePoint<U> {
    /// Borrow the affine `(x, y)` coordinates.
    ///
    /// Only meaningful for points with `z = 1`.
    pub fn affine_coordinates(&self) -> (&U, &U) {
        (&self.x, &self.y)
    }
}

impl<U: Zeroize> Zeroize for ProjectivePoint<U> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
    }
}
