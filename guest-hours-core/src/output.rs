//! Writing the generated page.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{HoursError, HoursResult};

/// Replace `path` with `content` atomically.
///
/// The content goes to a temp file next to `path`, which is then renamed over
/// it, so readers see either the old page or the new one. An existing file's
/// permissions are carried over.
pub fn write_atomic(path: &Path, content: &str) -> HoursResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let write_err = |e: std::io::Error| {
        HoursError::Write(format!("Could not write {}: {e}", path.display()))
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    match fs::metadata(path) {
        Ok(meta) => fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?,
        Err(_) => set_default_permissions(tmp.path()).map_err(write_err)?,
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Temp files are created private; a published page should be world-readable.
#[cfg(unix)]
fn set_default_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");

        write_atomic(&path, "<html>first</html>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<html>first</html>");
    }

    #[test]
    fn test_write_overwrites_in_full() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");

        write_atomic(&path, "a much longer first version of the page").unwrap();
        write_atomic(&path, "short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
        // Only the output file remains; no temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");

        write_atomic(&path, "page").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("index.html");

        let err = write_atomic(&path, "page").unwrap_err();

        assert!(matches!(err, HoursError::Write(_)));
    }
}
