use crate::core::Pipeline;
use crate::domain::model::Report;
use crate::utils::error::Result;

pub struct ScanEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Report> {
        tracing::info!("Scanning for bundles...");
        let extraction = self.pipeline.extract()?;
        tracing::info!("Found {} descriptor entries", extraction.descriptors.len());

        tracing::info!("Parsing descriptors...");
        let result = self.pipeline.transform(extraction)?;
        tracing::info!("Resolved {} dependencies", result.dependencies.len());

        let report = self.pipeline.load(result)?;
        if !report.issues.is_empty() {
            tracing::warn!("{} item(s) could not be processed", report.issues.len());
        }

        Ok(report)
    }
}
