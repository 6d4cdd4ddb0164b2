// crates/palgraph-cli/src/cmd/mod.rs

pub mod args;

pub mod bounds;
pub mod default;
pub mod insert_point;
pub mod inspect;
pub mod move_handle;
pub mod move_point;
pub mod normalize;
pub mod sample;
