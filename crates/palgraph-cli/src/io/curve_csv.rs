// crates/palgraph-cli/src/io/curve_csv.rs

use std::fmt::Write as _;

use anyhow::{Context, Result};

/// `x,y` rows with a header line.
pub fn to_csv(rows: &[(i32, i32)]) -> String {
    let mut s = String::with_capacity(8 + rows.len() * 10);
    s.push_str("x,y\n");
    for (x, y) in rows {
        let _ = writeln!(s, "{x},{y}");
    }
    s
}

pub fn write_csv(file: &str, rows: &[(i32, i32)]) -> Result<()> {
    std::fs::write(file, to_csv(rows)).with_context(|| format!("write curve csv {file}"))?;
    Ok(())
}
