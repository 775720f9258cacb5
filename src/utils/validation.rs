use crate::utils::error::{Result, ScanError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScanError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// Checks the one fatal precondition of the scan: the root must exist,
/// be a directory, and be readable.
pub fn validate_root_dir(field_name: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ScanError::ValidationError {
            message: format!("{} does not exist: {}", field_name, path.display()),
        });
    }

    if !path.is_dir() {
        return Err(ScanError::ValidationError {
            message: format!("{} is not a directory: {}", field_name, path.display()),
        });
    }

    if let Err(e) = std::fs::read_dir(path) {
        return Err(ScanError::ValidationError {
            message: format!("{} is not readable: {} ({})", field_name, path.display(), e),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("root", "/tmp").is_ok());
        assert!(validate_non_empty_string("root", "").is_err());
        assert!(validate_non_empty_string("root", "   ").is_err());
    }

    #[test]
    fn test_validate_root_dir_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_root_dir("root", temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_root_dir_nonexistent() {
        let path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_root_dir("root", &path).unwrap_err();
        assert!(format!("{}", err).contains("does not exist"));
    }

    #[test]
    fn test_validate_root_dir_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain.txt");
        fs::write(&file_path, "not a directory").unwrap();

        let err = validate_root_dir("root", &file_path).unwrap_err();
        assert!(format!("{}", err).contains("not a directory"));
    }
}
