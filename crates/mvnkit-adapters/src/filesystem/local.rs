//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use mvnkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{MvnkitError, MvnkitResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> MvnkitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> MvnkitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> MvnkitResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, &format!("copy to {}", to.display())))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> MvnkitResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = if executable {
                perms.mode() | 0o755
            } else {
                perms.mode() & !0o111
            };
            perms.set_mode(mode);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> MvnkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("pom.xml");

        fs.write_file(&path, "old").unwrap();
        fs.write_file(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();

        assert!(fs.exists(&nested));
    }

    #[test]
    fn copy_replaces_destination() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let from = dir.path().join("a.jar");
        let to = dir.path().join("b.jar");
        std::fs::write(&from, b"jar-bytes").unwrap();
        std::fs::write(&to, b"stale").unwrap();

        fs.copy_file(&from, &to).unwrap();

        assert_eq!(std::fs::read(&to).unwrap(), b"jar-bytes");
    }

    #[test]
    fn copy_of_missing_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs
            .copy_file(&dir.path().join("missing.jar"), &dir.path().join("x.jar"))
            .unwrap_err();
        assert!(err.to_string().contains("missing.jar"));
    }

    #[cfg(unix)]
    #[test]
    fn executable_flag_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let script = dir.path().join("build.sh");
        fs.write_file(&script, "#!/bin/bash\n").unwrap();
        fs.set_permissions(&script, true).unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o755, 0o755);
    }
}
