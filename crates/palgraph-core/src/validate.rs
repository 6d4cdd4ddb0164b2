use crate::edit::max_stored;
use crate::error::{PalError, Result};
use crate::model::palette::Palette;
use crate::model::params::GeometryParams;
use crate::model::point::{Channel, Handles, Point};
use crate::model::position::{GRAPH_MAX_X, GRAPH_MIN_X};

pub fn validate_params(p: &GeometryParams) -> Result<()> {
    // Sampling divides the span by inaccuracy.
    if p.inaccuracy == 0 {
        return Err(PalError::Range("inaccuracy must be non-zero".into()));
    }
    if p.point_margin < 0 {
        return Err(PalError::Range("point_margin must be >= 0".into()));
    }
    Ok(())
}

/// Structural invariants of a palette. Reports the first violation.
pub fn validate_palette(p: &Palette) -> Result<()> {
    for c in Channel::ALL {
        let g = p.channel(c);
        let n = g.points.len();

        if n < 2 {
            return Err(bad(c, format!("needs at least 2 points, has {n}")));
        }
        if g.segments.len() + 1 != n {
            return Err(bad(c, format!("{} segments for {n} points", g.segments.len())));
        }

        // Boundary anchors sit on the box edges.
        if g.points[0].position.x != GRAPH_MIN_X {
            return Err(bad(c, "first point is not at x=0".into()));
        }
        if g.points[n - 1].position.x != GRAPH_MAX_X {
            return Err(bad(c, "last point is not at x=1024".into()));
        }

        for (i, pt) in g.points.iter().enumerate() {
            if pt.channel != c {
                return Err(bad(c, format!("point #{i} is tagged {}", pt.channel)));
            }
            let boundary = i == 0 || i + 1 == n;
            match (pt.handles, boundary) {
                (Handles::Single(_), true) | (Handles::Pair(..), false) => {}
                (h, _) => {
                    return Err(bad(c, format!("point #{i} has {} handle(s)", h.len())));
                }
            }
            if !pt.position.in_box() || pt.position.y > max_stored() {
                return Err(bad(c, format!("point #{i} at ({}, {}) is out of range", pt.position.x, pt.position.y)));
            }
        }

        check_sorted_x(c, &g.points)?;

        for (i, (s, w)) in g.segments.iter().zip(g.points.windows(2)).enumerate() {
            if s.start != w[0].id || s.end != w[1].id {
                return Err(bad(c, format!("segment #{i} does not join its points")));
            }
        }
    }

    for (i, s) in p.swatches.iter().enumerate() {
        if !(GRAPH_MIN_X..=GRAPH_MAX_X).contains(&s.pointer) {
            return Err(PalError::Format(format!("swatch #{i} pointer {} out of range", s.pointer)));
        }
    }

    Ok(())
}

/// Anchors of a channel must strictly increase in x.
pub(crate) fn check_sorted_x(c: Channel, points: &[Point]) -> Result<()> {
    for (i, w) in points.windows(2).enumerate() {
        if w[1].position.x <= w[0].position.x {
            return Err(bad(c, format!("points #{i} and #{} are not sorted by x", i + 1)));
        }
    }
    Ok(())
}

fn bad(c: Channel, msg: String) -> PalError {
    PalError::Format(format!("{c}: {msg}"))
}
