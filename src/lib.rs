pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::engine::ScanEngine;
pub use core::pipeline::BundlePipeline;
pub use domain::model::{Dependency, Report, ScanIssue};
pub use utils::error::{Result, ScanError};
