use crate::math::{Affine2, Isometry, Point, Real, Similarity2, Translation};

/// A spatial transform that can be applied to the vertices of a shape.
///
/// Bodies usually hand over an [`Isometry`], but collision shapes attached to
/// scaled or skewed nodes need the more general [`Affine2`].
pub trait PointTransform {
    /// Computes `self * p`.
    fn transform_point(&self, p: &Point<Real>) -> Point<Real>;
}

impl PointTransform for Isometry<Real> {
    #[inline]
    fn transform_point(&self, p: &Point<Real>) -> Point<Real> {
        self * p
    }
}

impl PointTransform for Similarity2<Real> {
    #[inline]
    fn transform_point(&self, p: &Point<Real>) -> Point<Real> {
        self * p
    }
}

impl PointTransform for Affine2<Real> {
    #[inline]
    fn transform_point(&self, p: &Point<Real>) -> Point<Real> {
        self * p
    }
}

impl PointTransform for Translation<Real> {
    #[inline]
    fn transform_point(&self, p: &Point<Real>) -> Point<Real> {
        self * p
    }
}

/// `None` is assumed to be equivalent to the identity.
impl<T: PointTransform> PointTransform for Option<T> {
    #[inline]
    fn transform_point(&self, p: &Point<Real>) -> Point<Real> {
        if let Some(transform) = self {
            transform.transform_point(p)
        } else {
            *p
        }
    }
}

impl<T: PointTransform + ?Sized> PointTransform for &T {
    #[inline]
    fn transform_point(&self, p: &Point<Real>) -> Point<Real> {
        (**self).transform_point(p)
    }
}
