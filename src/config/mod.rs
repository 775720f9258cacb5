use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_root_dir, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bundle-deps")]
#[command(about = "List Maven coordinates of bundled jars in a deployment tree")]
pub struct CliConfig {
    /// Root directory to scan for bundle.jar files
    pub root: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    #[serde(default)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn root_path(&self) -> &Path {
        &self.root
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("root", &self.root.to_string_lossy())?;
        validate_root_dir("root", &self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_accepts_existing_directory() {
        let temp = TempDir::new().unwrap();
        let config = CliConfig {
            root: temp.path().to_path_buf(),
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_directory() {
        let config = CliConfig {
            root: PathBuf::from("/nonexistent/path/that/does/not/exist"),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
