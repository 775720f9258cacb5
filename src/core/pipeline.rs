use crate::core::descriptor::{parse_descriptor, DescriptorFields};
use crate::core::report;
use crate::core::{ConfigProvider, Pipeline};
use crate::domain::model::{Dependency, Extraction, RawDescriptor, Report, ScanIssue, ScanResult};
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use walkdir::WalkDir;

/// File name the walk matches on, exactly.
const BUNDLE_FILE_NAME: &str = "bundle.jar";
/// Internal entry filter: descriptors live under the Maven metadata tree.
const DESCRIPTOR_PREFIX: &str = "META-INF/maven";
const DESCRIPTOR_SUFFIX: &str = "pom.xml";

pub struct BundlePipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> BundlePipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

fn absolute_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Opens one bundle archive and pulls out every entry that looks like a
/// Maven descriptor. Zero, one or several entries may match.
fn read_bundle(path: &Path) -> Result<Vec<RawDescriptor>> {
    let bundle_path = absolute_path(path);
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;

    let mut descriptors = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();
        if name.starts_with(DESCRIPTOR_PREFIX) && name.ends_with(DESCRIPTOR_SUFFIX) {
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            descriptors.push(RawDescriptor {
                bytes,
                bundle_path: bundle_path.clone(),
            });
        }
    }
    Ok(descriptors)
}

/// Checks the resolved fields against the non-empty invariant. A descriptor
/// that still misses a coordinate after the parent fallback is reported as a
/// per-item issue instead of producing a broken report block.
fn resolve(fields: DescriptorFields, bundle_path: &str) -> std::result::Result<Dependency, String> {
    let mut missing = Vec::new();
    if fields.group.as_deref().unwrap_or("").is_empty() {
        missing.push("groupId");
    }
    if fields.artifact.as_deref().unwrap_or("").is_empty() {
        missing.push("artifactId");
    }
    if fields.version.as_deref().unwrap_or("").is_empty() {
        missing.push("version");
    }
    if !missing.is_empty() {
        return Err(format!(
            "descriptor leaves {} unresolved after parent fallback",
            missing.join(", ")
        ));
    }

    Ok(Dependency {
        group: fields.group.unwrap_or_default(),
        artifact: fields.artifact.unwrap_or_default(),
        version: fields.version.unwrap_or_default(),
        bundle_path: bundle_path.to_string(),
    })
}

impl<C: ConfigProvider> Pipeline for BundlePipeline<C> {
    /// Walks the root for `bundle.jar` files and collects their descriptor
    /// entries. Unreadable archives and walk errors become issues; the walk
    /// keeps going.
    fn extract(&self) -> Result<Extraction> {
        let root = self.config.root_path();
        let mut descriptors = Vec::new();
        let mut issues = Vec::new();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let at = e
                        .path()
                        .map(absolute_path)
                        .unwrap_or_else(|| root.display().to_string());
                    tracing::warn!("Skipping unreadable path {}: {}", at, e);
                    issues.push(ScanIssue {
                        bundle_path: at,
                        detail: format!("unreadable path: {}", e),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.file_name() != BUNDLE_FILE_NAME {
                continue;
            }

            tracing::debug!("Scanning bundle {}", entry.path().display());
            match read_bundle(entry.path()) {
                Ok(found) => descriptors.extend(found),
                Err(e) => {
                    let at = absolute_path(entry.path());
                    tracing::warn!("Skipping unreadable bundle {}: {}", at, e);
                    issues.push(ScanIssue {
                        bundle_path: at,
                        detail: format!("unreadable bundle: {}", e),
                    });
                }
            }
        }

        Ok(Extraction {
            descriptors,
            issues,
        })
    }

    /// Parses every extracted descriptor and applies the non-empty field
    /// invariant. No deduplication: identical coordinates from two bundles
    /// both make it into the result.
    fn transform(&self, data: Extraction) -> Result<ScanResult> {
        let mut dependencies = Vec::new();
        let mut issues = data.issues;

        for raw in data.descriptors {
            let fields = match parse_descriptor(&raw.bytes) {
                Ok(fields) => fields,
                Err(e) => {
                    tracing::warn!("Malformed descriptor in {}: {}", raw.bundle_path, e);
                    issues.push(ScanIssue {
                        bundle_path: raw.bundle_path,
                        detail: format!("malformed descriptor: {}", e),
                    });
                    continue;
                }
            };

            match resolve(fields, &raw.bundle_path) {
                Ok(dep) => dependencies.push(dep),
                Err(detail) => {
                    tracing::warn!("{}: {}", raw.bundle_path, detail);
                    issues.push(ScanIssue {
                        bundle_path: raw.bundle_path,
                        detail,
                    });
                }
            }
        }

        Ok(ScanResult {
            dependencies,
            issues,
        })
    }

    /// Sorts and renders the report body. Issues ride along so the caller
    /// can list them on stderr after the report.
    fn load(&self, result: ScanResult) -> Result<Report> {
        let mut dependencies = result.dependencies;
        report::sort_dependencies(&mut dependencies);

        Ok(Report {
            body: report::render_report(&dependencies),
            dependency_count: dependencies.len(),
            issues: result.issues,
        })
    }
}
