use approx::assert_relative_eq;
use polyhull2d::math::{Affine2, Isometry, Real, Vector};
use polyhull2d::na::{Matrix3, Point2};
use polyhull2d::settings::PhysicsSettings;
use polyhull2d::shape::{ConvexPolygonShape, ShapeQuery, ShapeResource, TransformedShapeError};
use polyhull2d::transformation::ConvexHullError;

fn shape(points: &[Point2<Real>]) -> ConvexPolygonShape {
    let mut shape = ConvexPolygonShape::with_settings(PhysicsSettings {
        scaling_factor: 1.0,
        ..PhysicsSettings::default()
    });
    shape.set_points(points).unwrap();
    shape
}

fn centered_square() -> Vec<Point2<Real>> {
    vec![
        Point2::new(-5.0, -5.0),
        Point2::new(-5.0, 5.0),
        Point2::new(5.0, 5.0),
        Point2::new(5.0, -5.0),
    ]
}

#[test]
fn transformed_square_is_shrunk_by_half_the_skin() {
    let square = shape(&centered_square());
    let pos = Isometry::translation(100.0, 0.0);
    let native = square
        .transformed_shape(&ShapeQuery::new(0, &pos))
        .unwrap();
    let polygon = native.as_convex_polygon().unwrap();

    // Half the skin radius along each corner diagonal.
    let c = 5.0 - 0.005 / (2.0 as Real).sqrt();
    let expected = [
        Point2::new(100.0 + c, -c),
        Point2::new(100.0 + c, c),
        Point2::new(100.0 - c, c),
        Point2::new(100.0 - c, -c),
    ];

    assert_eq!(polygon.points().len(), 4);
    for (pt, expected) in polygon.points().iter().zip(expected.iter()) {
        assert_relative_eq!(*pt, *expected, epsilon = 1.0e-4);
    }
    assert_relative_eq!(polygon.area(), 4.0 * c * c, epsilon = 1.0e-2);
}

#[test]
fn affine_transforms_are_supported() {
    let square = shape(&centered_square());
    // Non-uniform scaling, the hull stays counter-clockwise.
    let scale = Affine2::from_matrix_unchecked(Matrix3::new(
        2.0, 0.0, 0.0, //
        0.0, 0.5, 0.0, //
        0.0, 0.0, 1.0,
    ));
    let native = square
        .transformed_shape(&ShapeQuery::new(0, &scale))
        .unwrap();
    let polygon = native.as_convex_polygon().unwrap();
    assert_relative_eq!(polygon.area(), 100.0, epsilon = 0.5);
}

#[test]
fn vertex_at_origin_yields_no_shape() {
    let square = shape(&[
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 10.0),
        Point2::new(10.0, 10.0),
        Point2::new(10.0, 0.0),
    ]);
    let identity = Isometry::identity();
    let query = ShapeQuery::new(0, &identity);

    assert_eq!(
        square.transformed_shape(&query),
        Err(TransformedShapeError::DegenerateSkinOffset { vertex: 3 })
    );
    assert!(square.transformed_shape_or_log(&query).is_none());
    // The shape resource stays usable.
    assert_eq!(square.segments().len(), 1);
}

#[test]
fn collinear_segment_yields_no_shape() {
    // The first segment of this boundary only has collinear vertices.
    let mut pts: Vec<_> = (0..4)
        .map(|i| Point2::new(10.0, -3.0 + 2.0 * i as Real))
        .collect();
    pts.extend([
        Point2::new(9.0, 6.0),
        Point2::new(-10.0, 5.0),
        Point2::new(-11.0, 0.0),
        Point2::new(-10.0, -5.0),
        Point2::new(9.0, -6.0),
    ]);
    let shape = shape(&pts);
    assert_eq!(shape.segments().len(), 2);
    assert_eq!(shape.segments()[0].len(), 4);

    // No skin removal so the vertices stay exactly collinear.
    let mut decomposition_settings = *shape.settings();
    decomposition_settings.polygon_radius = 0.0;
    let mut unskinned = ConvexPolygonShape::with_settings(decomposition_settings);
    unskinned.set_points(&pts).unwrap();

    let identity = Isometry::identity();
    assert_eq!(
        unskinned.transformed_shape(&ShapeQuery::new(0, &identity)),
        Err(TransformedShapeError::HullConstruction(
            ConvexHullError::Degenerate(2)
        ))
    );
    assert!(unskinned
        .transformed_shape(&ShapeQuery::new(1, &identity))
        .is_ok());
}

#[test]
fn out_of_bounds_and_unconfigured_queries() {
    let identity = Isometry::identity();
    let unconfigured = ConvexPolygonShape::new();
    assert_eq!(
        unconfigured.transformed_shape(&ShapeQuery::new(0, &identity)),
        Err(TransformedShapeError::Unconfigured)
    );
    assert!(unconfigured
        .transformed_shape_or_log(&ShapeQuery::new(0, &identity))
        .is_none());

    let square = shape(&centered_square());
    assert_eq!(
        square.transformed_shape(&ShapeQuery::new(1, &identity)),
        Err(TransformedShapeError::IndexOutOfBounds { index: 1, count: 1 })
    );
}

#[test]
fn static_bodies_get_the_whole_boundary_loop() {
    let pts: Vec<_> = (0..12)
        .map(|i| {
            let angle = i as Real * core::f32::consts::TAU as Real / 12.0;
            Point2::new(angle.cos() * 3.0, angle.sin() * 3.0)
        })
        .collect();
    let shape = shape(&pts);
    assert_eq!(shape.shape_count(true), 1);
    assert_eq!(shape.shape_count(false), 2);

    let pos = Isometry::new(Vector::new(1.0, 2.0), 0.0);
    let native = shape
        .transformed_shape(&ShapeQuery::static_body(&pos))
        .unwrap();
    let polyline = native.as_polyline().unwrap();
    assert_eq!(polyline.num_segments(), 12);
    assert_relative_eq!(polyline.vertices()[0], Point2::new(4.0, 2.0), epsilon = 1.0e-5);
}
