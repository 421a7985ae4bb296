pub mod config;
pub mod constants;
pub mod element;
pub mod error;
pub mod fusion;
pub mod normalize;
pub mod report;
pub mod tables;

pub use config::Config;
pub use element::{Element, RadiusKind};
pub use error::{FuseError, Result, ValidationError};
pub use fusion::{ElementTable, fuse};
pub use report::{ReportFormat, report_row, write_report};
pub use tables::Table;
pub use elemfuse_data;
