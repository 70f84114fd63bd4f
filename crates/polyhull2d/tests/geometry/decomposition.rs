use polyhull2d::math::{Isometry, Real, Vector};
use polyhull2d::na::Point2;
use polyhull2d::settings::PhysicsSettings;
use polyhull2d::shape::{
    ConvexPolygonShape, Decomposition, ShapeData, ShapeDataError, ShapeDataKind, ShapeQuery,
    ShapeResource, ShapeType,
};
use polyhull2d::transformation::{convex_hull2, signed_area};

fn settings() -> PhysicsSettings {
    PhysicsSettings {
        scaling_factor: 1.0,
        ..PhysicsSettings::default()
    }
}

fn clockwise_square() -> Vec<Point2<Real>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 10.0),
        Point2::new(10.0, 10.0),
        Point2::new(10.0, 0.0),
    ]
}

fn circle(n: usize, radius: Real) -> Vec<Point2<Real>> {
    (0..n)
        .map(|i| {
            let angle = i as Real * core::f32::consts::TAU as Real / n as Real;
            Point2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

#[test]
fn clockwise_square_end_to_end() {
    let mut shape = ConvexPolygonShape::with_settings(settings());
    assert_eq!(shape.shape_type(), ShapeType::ConvexPolygon);
    shape.set_data(ShapeData::Points(clockwise_square())).unwrap();

    let expected = [
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
        Point2::new(0.0, 0.0),
    ];
    assert_eq!(shape.data(), Some(ShapeData::Points(expected.to_vec())));
    assert!(signed_area(shape.points().unwrap()) <= 0.0);

    let segments = shape.segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].points(), &expected);

    let hull = convex_hull2(segments[0].points(), settings().hull_weld_threshold_sq()).unwrap();
    assert_eq!(hull.as_slice(), &expected);
}

#[test]
fn twenty_points_give_three_segments() {
    let pts = circle(20, 10.0);
    let shape = ConvexPolygonShape::from_points(&pts).unwrap();

    let sizes: Vec<_> = shape.segments().iter().map(|s| s.len()).collect();
    assert_eq!(sizes, vec![8, 4, 8]);
    assert_eq!(sizes.iter().sum::<usize>(), 20);
    assert_eq!(shape.shape_count(false), 3);
    assert_eq!(shape.shape_count(true), 1);

    // Segments are consecutive runs of the boundary.
    let concatenated: Vec<_> = shape
        .segments()
        .iter()
        .flat_map(|s| s.points().iter().copied())
        .collect();
    assert_eq!(concatenated.as_slice(), shape.points().unwrap());
}

#[test]
fn nine_points_are_balanced() {
    let decomposition = Decomposition::new(&circle(9, 3.0), &settings()).unwrap();
    let sizes: Vec<_> = decomposition.segments().iter().map(|s| s.len()).collect();
    assert_eq!(sizes, vec![4, 5]);
}

#[test]
fn rejected_data_keeps_previous_decomposition() {
    let mut shape = ConvexPolygonShape::with_settings(settings());
    assert!(!shape.is_configured());
    assert_eq!(shape.shape_count(false), 0);
    assert_eq!(shape.data(), None);

    shape.set_points(&clockwise_square()).unwrap();
    let before = shape.data();

    assert_eq!(
        shape.set_data(ShapeData::Points(vec![Point2::new(0.0, 0.0); 2])),
        Err(ShapeDataError::TooFewPoints { count: 2 })
    );
    assert_eq!(
        shape.set_data(ShapeData::Points(vec![Point2::new(1.0, 1.0); 5])),
        Err(ShapeDataError::TooFewPoints { count: 1 })
    );
    assert_eq!(
        shape.set_data(ShapeData::Radius(3.0)),
        Err(ShapeDataError::InvalidInputType {
            expected: ShapeDataKind::Points,
            found: ShapeDataKind::Radius,
        })
    );

    assert_eq!(shape.data(), before);
    assert_eq!(shape.shape_count(false), 1);
}

#[test]
fn ingestion_weld_follows_scaling_factor() {
    let pts = [
        Point2::new(10.0, -10.0),
        Point2::new(10.0, 10.0),
        Point2::new(10.05, 10.05),
        Point2::new(-10.0, 10.0),
        Point2::new(-10.0, -10.0),
    ];

    let unscaled = Decomposition::new(&pts, &settings()).unwrap();
    assert_eq!(unscaled.boundary().len(), 5);

    let scaled_settings = PhysicsSettings {
        scaling_factor: 50.0,
        ..settings()
    };
    let scaled = Decomposition::new(&pts, &scaled_settings).unwrap();
    assert_eq!(scaled.boundary().len(), 4);
}

#[test]
fn snapshots_survive_reconfiguration() {
    let mut shape = ConvexPolygonShape::with_settings(settings());
    shape.set_points(&circle(6, 2.0)).unwrap();
    let snapshot = shape.decomposition().unwrap();

    shape.set_points(&circle(20, 2.0)).unwrap();
    assert_eq!(snapshot.segments().len(), 1);
    assert_eq!(snapshot.boundary().len(), 6);
    assert_eq!(shape.segments().len(), 3);

    let identity = Isometry::identity();
    assert!(snapshot
        .transformed_shape(&ShapeQuery::new(0, &identity))
        .is_ok());
}

#[test]
fn concurrent_queries_share_a_decomposition() {
    let shape = ConvexPolygonShape::from_points(&circle(20, 4.0)).unwrap();
    let decomposition = shape.decomposition().unwrap();

    std::thread::scope(|scope| {
        for k in 0..4 {
            let decomposition = &decomposition;
            let _ = scope.spawn(move || {
                let pos = Isometry::new(Vector::new(k as Real, 0.0), k as Real * 0.3);
                for i in 0..decomposition.shape_count(false) {
                    let shape = decomposition
                        .transformed_shape(&ShapeQuery::new(i, &pos))
                        .unwrap();
                    assert!(shape.as_convex_polygon().is_some());
                }
            });
        }
    });
}
