//! File and stdin helpers used by the commands.
//!
//! Hand histories are plain JSONL. A path ending in `.zst` is transparently
//! Zstandard-compressed on both read and write.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::CliError;

const ZSTD_LEVEL: i32 = 3;
const MAX_DECOMPRESSED: usize = 64 * 1024 * 1024;

/// Next trimmed line from `stdin`, or `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// use sixmax_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  BTN raise 3 \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("BTN raise 3"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn is_compressed(path: &str) -> bool {
    path.ends_with(".zst")
}

/// Reads a whole text file, decompressing `.zst` and dropping a UTF-8 BOM.
pub fn read_text_auto(path: &str) -> Result<String, CliError> {
    let mut content = if is_compressed(path) {
        let comp = std::fs::read(path)?;
        let dec = zstd::bulk::decompress(&comp, MAX_DECOMPRESSED)?;
        String::from_utf8(dec)
            .map_err(|e| CliError::InvalidInput(format!("{} is not UTF-8: {}", path, e)))?
    } else {
        std::fs::read_to_string(path)?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Writes `content` to `path`, creating parent directories and compressing
/// `.zst` targets.
pub fn write_text_auto(path: &str, content: &str) -> Result<(), CliError> {
    ensure_parent_dir(Path::new(path))?;
    if is_compressed(path) {
        let comp = zstd::bulk::compress(content.as_bytes(), ZSTD_LEVEL)?;
        std::fs::write(path, comp)?;
    } else {
        std::fs::write(path, content)?;
    }
    Ok(())
}

/// Appends one line to a plain-text file. Compressed files are rewritten.
pub fn append_line(path: &str, line: &str) -> Result<(), CliError> {
    if is_compressed(path) {
        let mut content = if Path::new(path).exists() {
            read_text_auto(path)?
        } else {
            String::new()
        };
        content.push_str(line);
        content.push('\n');
        return write_text_auto(path, &content);
    }
    ensure_parent_dir(Path::new(path))?;
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
