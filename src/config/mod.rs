pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{OutputFormat, QueryParams};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::collections::HashSet;

/// 未指定參數時使用的預設值
pub mod defaults {
    pub const SEARCH_TERM: &str = "Jo";
    pub const STORE_ID: &str = "23";
    pub const EXCLUDED_DEPARTMENT: &str = "IT";
    pub const CYCLE_TARGET_LEN: usize = 10;
    pub const CYCLE_OFFSET: usize = 7;
    pub const MATCHING_IDS: [u32; 2] = [101, 104];
    pub const RAISE_DEPARTMENT: &str = "IT";
    pub const RAISE_AMOUNT: f64 = 5000.0;
    pub const PREDICATE_DEPARTMENT: &str = "HR";
    pub const FORMAT: &str = "text";
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "employee-query")]
#[command(about = "Run the employee collection queries over the built-in dataset")]
pub struct CliConfig {
    #[arg(long = "search", default_value = defaults::SEARCH_TERM)]
    pub search_term: String,

    #[arg(long, default_value = defaults::STORE_ID)]
    pub store_id: String,

    #[arg(long, default_value = defaults::EXCLUDED_DEPARTMENT)]
    pub exclude_department: String,

    #[arg(long, default_value_t = defaults::CYCLE_TARGET_LEN)]
    pub cycle_target_len: usize,

    #[arg(long, default_value_t = defaults::CYCLE_OFFSET)]
    pub cycle_offset: usize,

    #[arg(long, value_delimiter = ',', default_values_t = defaults::MATCHING_IDS)]
    pub ids: Vec<u32>,

    #[arg(long, default_value = defaults::RAISE_DEPARTMENT)]
    pub raise_department: String,

    #[arg(long, default_value_t = defaults::RAISE_AMOUNT)]
    pub raise_amount: f64,

    #[arg(long, default_value = defaults::PREDICATE_DEPARTMENT)]
    pub predicate_department: String,

    #[arg(long, default_value = defaults::FORMAT, help = "Output format: text or json")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Default for CliConfig {
    fn default() -> Self {
        Self {
            search_term: defaults::SEARCH_TERM.to_string(),
            store_id: defaults::STORE_ID.to_string(),
            exclude_department: defaults::EXCLUDED_DEPARTMENT.to_string(),
            cycle_target_len: defaults::CYCLE_TARGET_LEN,
            cycle_offset: defaults::CYCLE_OFFSET,
            ids: defaults::MATCHING_IDS.to_vec(),
            raise_department: defaults::RAISE_DEPARTMENT.to_string(),
            raise_amount: defaults::RAISE_AMOUNT,
            predicate_department: defaults::PREDICATE_DEPARTMENT.to_string(),
            format: defaults::FORMAT.to_string(),
            verbose: false,
        }
    }
}

#[cfg(feature = "cli")]
impl QueryParams for CliConfig {
    fn search_term(&self) -> &str {
        &self.search_term
    }

    fn store_id(&self) -> &str {
        &self.store_id
    }

    fn excluded_department(&self) -> &str {
        &self.exclude_department
    }

    fn cycle_target_len(&self) -> usize {
        self.cycle_target_len
    }

    fn cycle_offset(&self) -> usize {
        self.cycle_offset
    }

    fn matching_ids(&self) -> HashSet<u32> {
        self.ids.iter().copied().collect()
    }

    fn raise_department(&self) -> &str {
        &self.raise_department
    }

    fn raise_amount(&self) -> f64 {
        self.raise_amount
    }

    fn predicate_department(&self) -> &str {
        &self.predicate_department
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::parse(&self.format).unwrap_or(OutputFormat::Text)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("--search", &self.search_term)?;
        validation::validate_non_empty_string("--exclude-department", &self.exclude_department)?;
        validation::validate_non_empty_string("--raise-department", &self.raise_department)?;
        validation::validate_non_empty_string("--predicate-department", &self.predicate_department)?;
        validation::validate_positive_number("--cycle-target-len", self.cycle_target_len, 1)?;
        validation::validate_amount("--raise-amount", self.raise_amount)?;
        validation::validate_one_of("--format", &self.format, &OutputFormat::NAMES)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_default_impl() {
        let parsed = CliConfig::parse_from(["employee-query"]);
        let default = CliConfig::default();

        assert_eq!(parsed.search_term, default.search_term);
        assert_eq!(parsed.store_id, default.store_id);
        assert_eq!(parsed.ids, default.ids);
        assert_eq!(parsed.ids, defaults::MATCHING_IDS.to_vec());
        assert_eq!(parsed.raise_amount, default.raise_amount);
        assert_eq!(parsed.output_format(), OutputFormat::Text);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let parsed = CliConfig::parse_from([
            "employee-query",
            "--search",
            "smi",
            "--ids",
            "102,103",
            "--format",
            "json",
        ]);

        assert_eq!(parsed.search_term(), "smi");
        assert_eq!(
            parsed.matching_ids(),
            [102, 103].into_iter().collect::<HashSet<u32>>()
        );
        assert_eq!(parsed.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_cli_validation() {
        let config = CliConfig {
            format: "xml".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            cycle_target_len: 0,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            search_term: "  ".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
