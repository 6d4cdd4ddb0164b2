use palgraph_core::curve::{bounds_crossed, sample_curve, ControlPoint, ControlPoints};
use palgraph_core::model::defaults::default_palette;
use palgraph_core::solver::{find_bound, handle_legal_rectangle, point_legal_rectangle};
use palgraph_core::{legal_rectangle, Axis, Channel, Direction, GeometryParams, PalError, Position};

fn base() -> ControlPoints {
    ControlPoints {
        p0: Position::new(0, 500),
        p1: Position::new(300, 300),
        p2: Position::new(700, 700),
        p3: Position::new(1024, 500),
    }
}

fn crosses(cp: ControlPoints, axis: Axis, direction: Direction, params: &GeometryParams) -> bool {
    bounds_crossed(&sample_curve(&cp, params)).on(axis, direction)
}

#[test]
fn max_bound_is_last_legal_value() {
    let params = GeometryParams::default();
    let prev = Position::new(700, 700);
    let req = Position::new(700, 3000);
    assert!(crosses(base().with(ControlPoint::P2, req), Axis::Y, Direction::Max, &params));

    let c = find_bound(&base(), ControlPoint::P2, Axis::Y, Direction::Max, prev, req, &params);
    assert!((700..3000).contains(&c), "c={c}");
    assert!(!crosses(base().with(ControlPoint::P2, Position::new(700, c)), Axis::Y, Direction::Max, &params));
    assert!(crosses(base().with(ControlPoint::P2, Position::new(700, c + 1)), Axis::Y, Direction::Max, &params));
}

#[test]
fn min_bound_is_last_legal_value() {
    let params = GeometryParams::default();
    let prev = Position::new(300, 300);
    let req = Position::new(300, -2000);

    let c = find_bound(&base(), ControlPoint::P1, Axis::Y, Direction::Min, prev, req, &params);
    assert!((-2000..=300).contains(&c), "c={c}");
    assert!(!crosses(base().with(ControlPoint::P1, Position::new(300, c)), Axis::Y, Direction::Min, &params));
    assert!(crosses(base().with(ControlPoint::P1, Position::new(300, c - 1)), Axis::Y, Direction::Min, &params));
}

#[test]
fn previous_beyond_requested_is_returned() {
    let params = GeometryParams::default();
    let c = find_bound(
        &base(),
        ControlPoint::P2,
        Axis::Y,
        Direction::Max,
        Position::new(700, 800),
        Position::new(700, 600),
        &params,
    );
    assert_eq!(c, 800);
}

#[test]
fn legal_request_is_returned() {
    let params = GeometryParams::default();
    let c = find_bound(
        &base(),
        ControlPoint::P2,
        Axis::Y,
        Direction::Max,
        Position::new(700, 700),
        Position::new(700, 750),
        &params,
    );
    assert_eq!(c, 750);
}

#[test]
fn x_bound_does_not_cross() {
    let params = GeometryParams::default();
    let prev = Position::new(300, 300);
    let req = Position::new(3000, 300);
    let c = find_bound(&base(), ControlPoint::P1, Axis::X, Direction::Max, prev, req, &params);
    assert!((300..3000).contains(&c), "c={c}");
    assert!(!crosses(base().with(ControlPoint::P1, Position::new(c, 300)), Axis::X, Direction::Max, &params));
}

#[test]
fn rectangle_clamps_vertical_drag() {
    let params = GeometryParams::default();
    let prev = Position::new(700, 700);
    let req = Position::new(700, 3000);
    let r = legal_rectangle(&base(), ControlPoint::P2, prev, req, &params);
    let c = find_bound(&base(), ControlPoint::P2, Axis::Y, Direction::Max, prev, req, &params);

    assert_eq!(r.min, Position::new(700, 700));
    assert_eq!(r.max, Position::new(700, c));
    assert_eq!(r.clamp(req), Position::new(700, c));
}

#[test]
fn anchor_rectangle_limits_upward_drag() {
    let params = GeometryParams::default();
    let p = default_palette(&params);
    let hue = p.channel(Channel::Hue);
    let first = hue.points[0];

    // pulling the first anchor up drags its handle out of the box
    let r = point_legal_rectangle(hue, first.id, first.position, Position::new(0, 5000), &params).unwrap();
    assert!(r.max.y >= first.position.y && r.max.y < 5000, "{r:?}");
}

#[test]
fn missing_handle_is_not_found() {
    let params = GeometryParams::default();
    let p = default_palette(&params);
    let hue = p.channel(Channel::Hue);
    let first = hue.points[0];
    let err = handle_legal_rectangle(hue, first.id, 1, first.position, first.position, &params).unwrap_err();
    assert!(matches!(err, PalError::NotFound(_)));
}

#[test]
fn extreme_requests_stay_in_search_window() {
    let params = GeometryParams::default();
    let prev = Position::new(700, 700);

    let lo = find_bound(&base(), ControlPoint::P2, Axis::Y, Direction::Min, prev, Position::new(700, i32::MIN), &params);
    assert!((-1023..=700).contains(&lo), "lo={lo}");
    assert!(!crosses(base().with(ControlPoint::P2, Position::new(700, lo)), Axis::Y, Direction::Min, &params));

    let hi = find_bound(&base(), ControlPoint::P2, Axis::Y, Direction::Max, prev, Position::new(700, i32::MAX), &params);
    assert!((700..=2047).contains(&hi), "hi={hi}");
    assert!(!crosses(base().with(ControlPoint::P2, Position::new(700, hi)), Axis::Y, Direction::Max, &params));
}

#[test]
fn far_request_on_other_axis_is_cheap() {
    let params = GeometryParams::default();
    let r = legal_rectangle(
        &base(),
        ControlPoint::P1,
        Position::new(300, 300),
        Position::new(100_000_000, i32::MIN),
        &params,
    );
    assert!(r.min.x >= -1023 && r.max.x <= 2047, "{r:?}");
    assert!(r.min.y >= -1023 && r.max.y <= 2047, "{r:?}");
}
