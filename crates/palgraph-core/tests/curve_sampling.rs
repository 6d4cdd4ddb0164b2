use palgraph_core::curve::bezier::{step_count, trace};
use palgraph_core::curve::{bounds_crossed, flatten, sample_curve, ControlPoints};
use palgraph_core::{GeometryParams, Position};

fn cp(p: [(i32, i32); 4]) -> ControlPoints {
    ControlPoints {
        p0: Position::new(p[0].0, p[0].1),
        p1: Position::new(p[1].0, p[1].1),
        p2: Position::new(p[2].0, p[2].1),
        p3: Position::new(p[3].0, p[3].1),
    }
}

fn default_curve() -> ControlPoints {
    cp([(0, 256), (10, 456), (1004, 456), (1024, 256)])
}

#[test]
fn sampling_is_deterministic() {
    let params = GeometryParams::default();
    let a = trace(&default_curve(), &params);
    let b = trace(&default_curve(), &params);
    assert_eq!(a, b);
    assert_eq!(a.samples.len() as u32, step_count(&default_curve(), &params) + 1);
}

#[test]
fn default_curve_stays_in_box() {
    let params = GeometryParams::default();
    let t = trace(&default_curve(), &params);
    assert!(!t.bounds.any(), "{:?}", t.bounds);
    assert_eq!(t.fold_back, None);
}

#[test]
fn flattened_default_curve_fills_every_x() {
    let params = GeometryParams::default();
    let flat = flatten(&sample_curve(&default_curve(), &params));
    assert_eq!(flat.x_range(), Some((0, 1024)));
    let dense = flat.span(0, 1024).expect("no gaps");
    assert_eq!(dense.len(), 1025);
    assert_eq!(dense[1024], 256);
}

#[test]
fn dip_below_zero_crosses_min_y() {
    let params = GeometryParams::default();
    let c = cp([(0, 256), (0, 20), (1000, -120), (1024, 40)]);
    let b = bounds_crossed(&sample_curve(&c, &params));
    assert!(b.min_y);
    assert!(!b.max_y && !b.min_x && !b.max_x);
}

#[test]
fn anchor_left_of_box_crosses_min_x() {
    let params = GeometryParams::default();
    let c = cp([(-90, 256), (10, 456), (1004, 456), (1024, 256)]);
    let b = bounds_crossed(&sample_curve(&c, &params));
    assert!(b.min_x);
    assert!(!b.max_x);
}

#[test]
fn tall_handle_crosses_max_y() {
    let params = GeometryParams::default();
    let c = cp([(0, 256), (10, 1500), (1004, 456), (1024, 256)]);
    assert!(bounds_crossed(&sample_curve(&c, &params)).max_y);
}

#[test]
fn crossed_handles_fold_back() {
    let params = GeometryParams::default();
    let c = cp([(100, 500), (1000, 500), (0, 500), (900, 500)]);
    let t = trace(&c, &params);
    assert!(t.fold_back.is_some());
    assert!(!t.bounds.any());
}

#[test]
fn coarser_inaccuracy_takes_fewer_samples() {
    let fine = GeometryParams { inaccuracy: 1, ..GeometryParams::default() };
    let coarse = GeometryParams { inaccuracy: 16, ..GeometryParams::default() };
    let n_fine = sample_curve(&default_curve(), &fine).len();
    let n_coarse = sample_curve(&default_curve(), &coarse).len();
    assert_eq!(n_fine, 1015);
    assert_eq!(n_coarse, 65);
}
