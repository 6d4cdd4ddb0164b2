// crates/palgraph-core/src/codec/checksum.rs

use std::fmt::Write as _;

use crate::codec::path::encode_palette;
use crate::error::Result;
use crate::model::palette::Palette;

/// Stable palette identifier: the first 16 bytes of blake3 over the
/// canonical encoded path. Point identities do not take part, so a
/// decode/encode cycle keeps the id.
pub fn palette_id_16(p: &Palette) -> Result<[u8; 16]> {
    let path = encode_palette(p)?;
    let mut id = [0u8; 16];
    blake3::Hasher::new()
        .update(path.as_bytes())
        .finalize_xof()
        .fill(&mut id);
    Ok(id)
}

/// Lowercase hex of [`palette_id_16`].
pub fn palette_id_hex(p: &Palette) -> Result<String> {
    let id = palette_id_16(p)?;
    Ok(id.iter().fold(String::with_capacity(32), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    }))
}
