// ABOUTME: Reads template and value files from disk
// ABOUTME: Maps missing paths to FileNotFound and trims value files such as public keys

use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use super::error::{Result, TemplateError};

/// Read a template file
pub fn read_template(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TemplateError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => TemplateError::IoError(e),
    })?;

    debug!("Read {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Read a single-value file, such as a public key, without surrounding whitespace
pub fn read_trimmed(path: &Path) -> Result<String> {
    read_template(path).map(|content| content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user-data.tpl");
        fs::write(&path, "#cloud-config\nhostname: {{ vmname }}\n").unwrap();

        let content = read_template(&path).unwrap();
        assert_eq!(content, "#cloud-config\nhostname: {{ vmname }}\n");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.tpl");

        let err = read_template(&path).unwrap_err();
        match err {
            TemplateError::FileNotFound { path: missing } => assert_eq!(missing, path),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_read_trimmed_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("id_rsa.pub");
        fs::write(&path, "  ssh-rsa BBB user@host\r\n\n").unwrap();

        assert_eq!(read_trimmed(&path).unwrap(), "ssh-rsa BBB user@host");
    }
}
