//! Writing the rendered table to disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::WriteError;

/// Replace `path` with `contents`.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over the target, so a failed write leaves the old file intact.
/// The result has mode 0644 on Unix.
pub fn write_table(path: &Path, contents: &str) -> Result<(), WriteError> {
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(wrap)?;
    file.write_all(contents.as_bytes()).map_err(wrap)?;
    file.as_file().sync_all().map_err(wrap)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(wrap)?;
    }

    file.persist(path).map_err(|err| wrap(err.error))?;
    Ok(())
}
