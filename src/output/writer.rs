// ABOUTME: Output writers for rendered cloud-init documents
// ABOUTME: Writes files atomically through a sibling temp file, or prints to stdout

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use super::error::{OutputError, Result};

pub trait OutputWriter {
    fn write(&self, content: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriterConfig {
    pub create_dirs: bool,
}

pub struct FileWriter {
    path: PathBuf,
    config: FileWriterConfig,
}

pub struct StdoutWriter;

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, FileWriterConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, config: FileWriterConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file actually replaced, following a symlinked destination to its target
    fn target(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    /// Temp file next to the target, created with the mode a plain create would get
    fn temp_file(parent: &Path) -> io::Result<NamedTempFile> {
        #[allow(unused_mut)]
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Subject to the umask, like any newly created file
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        builder.tempfile_in(parent)
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl OutputWriter for FileWriter {
    /// Replace the destination in one rename so readers never see a partial file
    fn write(&self, content: &str) -> Result<()> {
        let target = self.target();
        let parent = parent_dir(&target);

        if self.config.create_dirs {
            fs::create_dir_all(parent).map_err(|e| OutputError::WriteError {
                message: format!("Failed to create directory {}: {}", parent.display(), e),
            })?;
        }

        let mut temp_file =
            Self::temp_file(parent).map_err(|e| OutputError::WriteError {
                message: format!(
                    "Failed to create temporary file in {}: {}",
                    parent.display(),
                    e
                ),
            })?;

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| OutputError::WriteError {
                message: format!("Failed to write {}: {}", self.path.display(), e),
            })?;

        // Overwriting keeps the existing file's permissions
        if let Ok(metadata) = fs::metadata(&target) {
            temp_file.as_file().set_permissions(metadata.permissions())?;
            debug!("Replacing existing file {}", target.display());
        }

        temp_file
            .persist(&target)
            .map_err(|e| OutputError::WriteError {
                message: format!("Failed to write file {}: {}", self.path.display(), e.error),
            })?;

        info!(
            "Output written to file: {} ({} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(())
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;

        debug!("Output written to stdout ({} chars)", content.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_file_writer() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("user-data");

        FileWriter::new(&output)
            .write("#cloud-config\nhostname: vm1\n")
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "#cloud-config\nhostname: vm1\n"
        );
        assert_eq!(entries(temp_dir.path()), vec!["user-data".to_string()]);
    }

    #[test]
    fn test_file_writer_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("user-data");
        fs::write(&output, "old content that is much longer than the new one").unwrap();

        FileWriter::new(&output).write("new").unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "new");
        assert_eq!(entries(temp_dir.path()), vec!["user-data".to_string()]);
    }

    #[test]
    fn test_file_writer_with_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("dir").join("user-data");

        let writer = FileWriter::with_config(&nested, FileWriterConfig { create_dirs: true });
        writer.write("nested").unwrap();

        assert_eq!(fs::read_to_string(&nested).unwrap(), "nested");
    }

    #[test]
    fn test_file_writer_missing_directory_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("missing").join("user-data");

        let result = FileWriter::new(&nested).write("content");

        assert!(matches!(result, Err(OutputError::WriteError { .. })));
        assert!(!nested.exists());
        assert_eq!(entries(temp_dir.path()), Vec::<String>::new());
    }

    #[test]
    fn test_stdout_writer() {
        assert!(StdoutWriter::new().write("hostname: vm1").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_default_create_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let reference = temp_dir.path().join("reference");
        fs::write(&reference, "plain create").unwrap();
        let output = temp_dir.path().join("user-data");

        FileWriter::new(&output).write("#cloud-config\n").unwrap();

        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&output), mode(&reference));
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("user-data");
        fs::write(&output, "old").unwrap();
        fs::set_permissions(&output, fs::Permissions::from_mode(0o640)).unwrap();

        FileWriter::new(&output).write("new").unwrap();

        let mode = fs::metadata(&output).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_output_writes_through_to_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("seed").join("user-data");
        fs::create_dir(target.parent().unwrap()).unwrap();
        fs::write(&target, "old").unwrap();
        let link = temp_dir.path().join("user-data");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        FileWriter::new(&link).write("hostname: vm1").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "hostname: vm1");
        assert_eq!(entries(target.parent().unwrap()), vec!["user-data".to_string()]);
    }
}
