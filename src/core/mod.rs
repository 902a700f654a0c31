pub mod dataset;
pub mod queries;
pub mod render;
pub mod report;

pub use crate::domain::model::{Address, Employee, Gender};
pub use crate::domain::ports::{OutputFormat, QueryParams};
pub use crate::utils::error::Result;
