use crate::domain::model::{Extraction, Report, ScanResult};
use crate::utils::error::Result;
use std::path::Path;

pub trait ConfigProvider {
    fn root_path(&self) -> &Path;
}

/// The three stages of the scan. Everything is synchronous and blocking;
/// each stage owns its input and returns its output by value.
pub trait Pipeline {
    fn extract(&self) -> Result<Extraction>;
    fn transform(&self, data: Extraction) -> Result<ScanResult>;
    fn load(&self, result: ScanResult) -> Result<Report>;
}
