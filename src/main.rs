use bundle_deps::utils::{logger, validation::Validate};
use bundle_deps::{BundlePipeline, CliConfig, ScanEngine};
use clap::Parser;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bundle-deps");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let pipeline = BundlePipeline::new(config);
    let engine = ScanEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.body.as_bytes())?;
            stdout.flush()?;

            tracing::info!("Listed {} dependencies", report.dependency_count);

            // Secondary diagnostic stream: everything that was skipped,
            // after the report so it never interleaves with it.
            if !report.issues.is_empty() {
                eprintln!();
                eprintln!("{} item(s) skipped:", report.issues.len());
                for issue in &report.issues {
                    eprintln!("  {}: {}", issue.bundle_path, issue.detail);
                }
            }
        }
        Err(e) => {
            tracing::error!("Scan failed: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
