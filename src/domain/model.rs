use serde::{Deserialize, Serialize};

/// One Maven coordinate triple read out of a bundle's descriptor, plus the
/// absolute path of the archive it came from (kept for diagnostics only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub bundle_path: String,
}

/// A matched descriptor entry pulled out of an archive, awaiting parse.
#[derive(Debug, Clone)]
pub struct RawDescriptor {
    pub bytes: Vec<u8>,
    pub bundle_path: String,
}

/// A recoverable per-item failure: the scan keeps going, but the problem is
/// reported on stderr at the end of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIssue {
    pub bundle_path: String,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub descriptors: Vec<RawDescriptor>,
    pub issues: Vec<ScanIssue>,
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub dependencies: Vec<Dependency>,
    pub issues: Vec<ScanIssue>,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub body: String,
    pub dependency_count: usize,
    pub issues: Vec<ScanIssue>,
}
