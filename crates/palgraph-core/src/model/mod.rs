// crates/palgraph-core/src/model/mod.rs

pub mod defaults;
pub mod palette;
pub mod params;
pub mod point;
pub mod position;
