use super::shape_resource::FailureReport;
use crate::math::{Point, Real};
use crate::shape::{
    Ball, NativeShape, ShapeData, ShapeDataError, ShapeDataKind, ShapeQuery, ShapeResource,
    ShapeType, TransformedShapeError,
};

/// A shape resource made of a single circle centered at the shape origin.
#[derive(Clone, Debug, Default)]
pub struct CircleShape {
    radius: Option<Real>,
    failure_reported: FailureReport,
}

impl PartialEq for CircleShape {
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
    }
}

impl CircleShape {
    /// Creates an unconfigured circle shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// The radius of this circle, or `None` if it was never configured.
    #[inline]
    pub fn radius(&self) -> Option<Real> {
        self.radius
    }

    /// Sets the radius of this circle.
    ///
    /// Nothing changes if `radius` is not a finite positive number.
    pub fn set_radius(&mut self, radius: Real) -> Result<(), ShapeDataError> {
        if !radius.is_finite() || radius <= 0.0 {
            let err = ShapeDataError::InvalidRadius(radius);
            log::error!("Rejected circle data: {}", err);
            return Err(err);
        }

        self.radius = Some(radius);
        self.failure_reported = FailureReport::default();
        Ok(())
    }
}

impl ShapeResource for CircleShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn set_data(&mut self, data: ShapeData) -> Result<(), ShapeDataError> {
        match data {
            ShapeData::Radius(radius) => self.set_radius(radius),
            other => {
                let err = ShapeDataError::InvalidInputType {
                    expected: ShapeDataKind::Radius,
                    found: other.kind(),
                };
                log::error!("Rejected circle data: {}", err);
                Err(err)
            }
        }
    }

    fn data(&self) -> Option<ShapeData> {
        self.radius.map(ShapeData::Radius)
    }

    fn shape_count(&self, _is_static: bool) -> usize {
        usize::from(self.radius.is_some())
    }

    /// The transform only moves the center: the radius is left unscaled.
    fn transformed_shape(&self, query: &ShapeQuery) -> Result<NativeShape, TransformedShapeError> {
        let radius = self.radius.ok_or(TransformedShapeError::Unconfigured)?;

        if query.index != 0 {
            return Err(TransformedShapeError::IndexOutOfBounds {
                index: query.index,
                count: 1,
            });
        }

        let center = query.transform.transform_point(&Point::origin());
        Ok(NativeShape::Ball(Ball::new(center, radius)))
    }

    fn mark_failure_reported(&self, _query: &ShapeQuery) -> bool {
        self.failure_reported.mark()
    }
}
