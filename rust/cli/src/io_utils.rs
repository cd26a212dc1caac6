//! File helpers shared by the record-reading and record-writing commands.
//!
//! `read_text_auto` transparently decompresses `.zst` files, so `stats` and
//! `verify` accept both plain and compressed JSONL.

use std::path::{Path, PathBuf};

/// Read text file with automatic .zst decompression detection.
///
/// A UTF-8 BOM at the start of the file is stripped.
///
/// # Example
///
/// ```rust,no_run
/// # use runfast_cli::io_utils::read_text_auto;
/// let content = read_text_auto("games.jsonl").unwrap();
/// let compressed = read_text_auto("games.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

/// `path` itself for a file, or every `.jsonl` / `.jsonl.zst` below it for a
/// directory, sorted so reports are stable.
pub fn collect_record_files(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }
    let mut files = Vec::new();
    let mut stack = vec![path.to_path_buf()];
    while let Some(d) = stack.pop() {
        let Ok(rd) = std::fs::read_dir(&d) else {
            continue;
        };
        for e in rd.filter_map(Result::ok) {
            let p = e.path();
            if p.is_dir() {
                stack.push(p);
            } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
            {
                files.push(p);
            }
        }
    }
    files.sort();
    files
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
