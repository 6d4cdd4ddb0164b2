// crates/palgraph-core/src/codec/mod.rs

pub mod checksum;
pub mod grammar;
pub mod path;
pub mod value;

pub use checksum::palette_id_hex;
pub use grammar::{is_valid_path, split_path};
pub use path::{decode_palette, decode_palette_with, encode_palette};
pub use value::{decode_sign, decode_value, encode_sign, encode_value};
