use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

/// Read a file fully and split it into lines.
///
/// Both `\n` and `\r\n` terminate a line and a trailing terminator does not
/// produce an extra empty line. Invalid UTF-8 is replaced lossily rather than
/// rejected. The whole file is held in memory; there is no size cap.
pub fn read_text_file(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| AppError::FileLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(str::to_string).collect())
}
