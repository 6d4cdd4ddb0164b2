// crates/palgraph-cli/src/io/mod.rs

pub mod curve_csv;
pub mod path_file;
