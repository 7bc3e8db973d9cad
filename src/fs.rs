//! File system utilities.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, TzhError};

/// Writes `content` to `path` through a sibling temp file and a rename.
///
/// Missing parent directories are created. An interrupted run leaves either
/// the old file or the new one, never a truncated file. On unix the file is
/// readable by its owner only, since it holds the API key.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent).map_err(|e| {
            TzhError::io(format!("Failed to create directory {}", parent.display()), e)
        })?;
    }

    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    write_private(&temp_path, content)
        .map_err(|e| TzhError::io(format!("Failed to write {}", temp_path.display()), e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TzhError::io(format!("Failed to write {}", path.display()), e)
    })
}

fn write_private(path: &Path, content: &str) -> io::Result<()> {
    // A leftover temp file would keep its old mode
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
