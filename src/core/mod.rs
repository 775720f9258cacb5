pub mod descriptor;
pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Dependency, Report, ScanIssue};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
