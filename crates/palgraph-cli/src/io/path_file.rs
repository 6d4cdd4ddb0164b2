// crates/palgraph-cli/src/io/path_file.rs

use anyhow::{Context, Result};

/// Read a palette path from a text file. Surrounding whitespace (a trailing
/// newline from an editor) is dropped.
pub fn read_path_file(file: &str) -> Result<String> {
    let text = std::fs::read_to_string(file).with_context(|| format!("read palette path {file}"))?;
    Ok(text.trim().to_owned())
}

/// Write `path` to `out` (with a trailing newline), or print it to stdout.
pub fn emit_path(out: Option<&str>, path: &str) -> Result<()> {
    match out {
        Some(file) => {
            std::fs::write(file, format!("{path}\n")).with_context(|| format!("write palette path {file}"))?;
        }
        None => println!("{path}"),
    }
    Ok(())
}
