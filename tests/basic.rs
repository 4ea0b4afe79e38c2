use deboor_spline::{BSpline, EvalResult, KnotLayout};

fn assert_close(got: f32, want: f32) {
    assert!((got - want).abs() < 1e-5, "{got} != {want}");
}

#[test]
fn clamped_cubic_seven_control_points_knot_vector() {
    let spline = BSpline::new(3, 1, 7, KnotLayout::Clamped).unwrap();
    let expected = [0.0, 0.0, 0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 1.0, 1.0];
    for (got, want) in spline.knots().iter().zip(expected.iter()) {
        assert_close(*got, *want);
    }
}

#[test]
fn opened_quadratic_three_control_points_knot_vector() {
    let spline = BSpline::new(2, 1, 3, KnotLayout::Opened).unwrap();
    let expected = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    for (got, want) in spline.knots().iter().zip(expected.iter()) {
        assert_close(*got, *want);
    }
}

#[test]
fn quadratic_bspline_matches_its_control_polygon_at_the_endpoints() {
    // Clamped quadratic, 5 control points in 1D.
    let spline = BSpline::from_buffers(
        2,
        1,
        vec![-1.0, 0.0, 3.0, 4.0, -2.0],
        vec![0.0, 0.0, 0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0, 1.0, 1.0],
    )
    .unwrap();

    let (start, code) = spline.evaluate(0.0).unwrap();
    assert_eq!(code, EvalResult::Endpoint);
    assert_close(start.point()[0], -1.0);

    let (end, code) = spline.evaluate(1.0).unwrap();
    assert_eq!(code, EvalResult::Endpoint);
    assert_close(end.point()[0], -2.0);
}

#[test]
fn cubic_bezier_midpoint() {
    let spline = BSpline::from_buffers(
        3,
        1,
        vec![0.0, 1.0, 2.0, 3.0],
        vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
    )
    .unwrap();
    let (net, code) = spline.evaluate(0.5).unwrap();
    assert_eq!(code, EvalResult::Interior);
    assert_close(net.point()[0], 1.5);
}

#[test]
fn insert_knot_then_split_then_to_beziers_round_trip_evaluation() {
    let spline = BSpline::new(3, 2, 8, KnotLayout::Clamped).unwrap();

    let (inserted, _) = spline.insert_knot(0.4, 1).unwrap();
    let (split, _) = inserted.split(0.7).unwrap();
    let beziers = split.to_beziers().unwrap();

    for tenth in 0..=10 {
        let u = tenth as f32 / 10.0;
        let (reference, _) = spline.evaluate(u).unwrap();
        let (pipeline, _) = beziers.evaluate(u).unwrap();
        assert_close(reference.point()[0], pipeline.point()[0]);
        assert_close(reference.point()[1], pipeline.point()[1]);
    }
}

#[test]
fn domain_error_at_and_past_the_upper_bound() {
    let spline = BSpline::new(3, 1, 7, KnotLayout::Clamped).unwrap();
    assert!(spline.evaluate(1.0).is_ok());
    assert!(spline
        .evaluate(1.0 + 2.0 * deboor_spline::FLT_MAX_ABS_ERROR)
        .is_err());
}
