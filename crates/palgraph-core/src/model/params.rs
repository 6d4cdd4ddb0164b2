// crates/palgraph-core/src/model/params.rs

/// Tunables shared by curve sampling and point editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryParams {
    /// Horizontal distance covered by one sampling step. Lower = denser curve.
    pub inaccuracy: u32,
    /// Minimum x gap kept between an interior anchor and its neighbours.
    pub point_margin: i32,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self { inaccuracy: 3, point_margin: 8 }
    }
}
