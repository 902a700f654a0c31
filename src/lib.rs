pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::dataset::sample_employees;
pub use crate::core::report::{render, QueryReport, ReportSection};
pub use crate::domain::model::{Address, Employee, Gender};
pub use crate::domain::ports::{OutputFormat, QueryParams};
pub use crate::utils::error::{QueryError, Result};
