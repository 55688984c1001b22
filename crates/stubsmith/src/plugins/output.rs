//! Output placement for generated stubs
//!
//! Files are staged in a temporary file inside the output directory and then
//! renamed over the final path, so a reader never sees a half-written stub.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::Builder;
use tracing::{debug, trace};

use crate::core::StubsmithError;

/// Writes generated files into one output directory
pub struct StubWriter {
    output_dir: PathBuf,
}

impl StubWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory (and parents) if missing
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| StubsmithError::output_error(&self.output_dir, e))?;
        debug!(output_dir = %self.output_dir.display(), "Output directory ready");
        Ok(())
    }

    /// Atomically write `contents` to `file_name` inside the output directory,
    /// replacing any previous file of that name.
    ///
    /// A new file gets the mode a plain create would give it (0666 less the
    /// umask); a replaced file keeps its previous mode.
    pub fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let target = self.output_dir.join(file_name);

        let mut builder = Builder::new();
        builder.prefix(".stubsmith-");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut staged = builder
            .tempfile_in(&self.output_dir)
            .map_err(|e| StubsmithError::output_error(&self.output_dir, e))?;
        trace!(staged = %staged.path().display(), target = %target.display(), "Staging stub");

        staged
            .write_all(contents.as_bytes())
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| StubsmithError::output_error(&target, e))?;

        if let Ok(previous) = fs::metadata(&target) {
            if previous.is_file() {
                staged
                    .as_file()
                    .set_permissions(previous.permissions())
                    .map_err(|e| StubsmithError::output_error(&target, e))?;
            }
        }

        staged
            .persist(&target)
            .map_err(|e| StubsmithError::output_error(&target, e.error))?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_prepare_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        let writer = StubWriter::new(&out);

        writer.prepare().unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let dir = tempdir().unwrap();
        let writer = StubWriter::new(dir.path());

        writer.prepare().unwrap();
        writer.prepare().unwrap();
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempdir().unwrap();
        let writer = StubWriter::new(dir.path());
        writer.prepare().unwrap();

        let path = writer.write("account.py", "class Account:\n").unwrap();
        assert_eq!(path, dir.path().join("account.py"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Account:\n");
    }

    #[test]
    fn test_write_overwrites_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let writer = StubWriter::new(dir.path());
        writer.prepare().unwrap();

        writer.write("account.py", "first version, longer text\n").unwrap();
        let path = writer.write("account.py", "second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let writer = StubWriter::new(dir.path());
        let path = writer.write("bank.py", "").unwrap();

        // A plain create in the same process gets 0666 less the umask
        let reference = dir.path().join("reference");
        fs::write(&reference, "").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        let expected = fs::metadata(&reference).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, expected & 0o777);
    }

    #[cfg(unix)]
    #[test]
    fn test_replaced_file_keeps_its_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let writer = StubWriter::new(dir.path());
        let path = writer.write("bank.py", "first\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        writer.write("bank.py", "second\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let writer = StubWriter::new(dir.path().join("missing"));

        let err = writer.write("account.py", "").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StubsmithError>(),
            Some(StubsmithError::OutputError { .. })
        ));
    }

    #[test]
    fn test_prepare_fails_when_path_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();

        let err = StubWriter::new(&file).prepare().unwrap_err();
        assert!(err.to_string().contains("Failed to write output"));
    }
}
