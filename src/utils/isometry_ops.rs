use crate::math::{Isometry, Matrix, Point, Real};

/// Various operations usable with `Option<&Isometry>` where `None` is assumed to be equivalent
/// to the identity.
pub trait IsometryOpt {
    /// Computes `rhs * self`.
    fn prepend_to(self, rhs: &Isometry<Real>) -> Isometry<Real>;
    /// Computes `self * p`, translation included.
    fn transform_point(self, p: &Point<Real>) -> Point<Real>;
    /// Rotates every column of `basis` by the rotational part of `self`.
    fn transform_basis(self, basis: &Matrix<Real>) -> Matrix<Real>;
}

impl IsometryOpt for Option<&Isometry<Real>> {
    #[inline]
    fn prepend_to(self, rhs: &Isometry<Real>) -> Isometry<Real> {
        if let Some(iso) = self {
            rhs * iso
        } else {
            *rhs
        }
    }

    #[inline]
    fn transform_point(self, p: &Point<Real>) -> Point<Real> {
        if let Some(iso) = self {
            iso * p
        } else {
            *p
        }
    }

    #[inline]
    fn transform_basis(self, basis: &Matrix<Real>) -> Matrix<Real> {
        if let Some(iso) = self {
            iso.rotation.to_rotation_matrix().into_inner() * basis
        } else {
            *basis
        }
    }
}
