use crate::config::defaults;
use crate::core::{OutputFormat, QueryParams};
use crate::utils::error::{QueryError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// TOML 查詢設定；所有欄位皆可省略，省略時使用預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub cycle: CycleConfig,
    #[serde(default)]
    pub raise: RaiseConfig,
    #[serde(default)]
    pub predicates: PredicateConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: Option<String>,
    pub output_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub term: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub excluded_department: Option<String>,
    pub matching_ids: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleConfig {
    pub target_len: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaiseConfig {
    pub department: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredicateConfig {
    pub department: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QueryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QueryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEARCH_TERM})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QueryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn report_name(&self) -> &str {
        self.report.name.as_deref().unwrap_or("employee-report")
    }

    fn format_name(&self) -> &str {
        self.report
            .output_format
            .as_deref()
            .unwrap_or(defaults::FORMAT)
    }
}

impl QueryParams for TomlConfig {
    fn search_term(&self) -> &str {
        self.search.term.as_deref().unwrap_or(defaults::SEARCH_TERM)
    }

    fn store_id(&self) -> &str {
        self.store.id.as_deref().unwrap_or(defaults::STORE_ID)
    }

    fn excluded_department(&self) -> &str {
        self.filter
            .excluded_department
            .as_deref()
            .unwrap_or(defaults::EXCLUDED_DEPARTMENT)
    }

    fn cycle_target_len(&self) -> usize {
        self.cycle.target_len.unwrap_or(defaults::CYCLE_TARGET_LEN)
    }

    fn cycle_offset(&self) -> usize {
        self.cycle.offset.unwrap_or(defaults::CYCLE_OFFSET)
    }

    fn matching_ids(&self) -> HashSet<u32> {
        match &self.filter.matching_ids {
            Some(ids) => ids.iter().copied().collect(),
            None => defaults::MATCHING_IDS.into_iter().collect(),
        }
    }

    fn raise_department(&self) -> &str {
        self.raise
            .department
            .as_deref()
            .unwrap_or(defaults::RAISE_DEPARTMENT)
    }

    fn raise_amount(&self) -> f64 {
        self.raise.amount.unwrap_or(defaults::RAISE_AMOUNT)
    }

    fn predicate_department(&self) -> &str {
        self.predicates
            .department
            .as_deref()
            .unwrap_or(defaults::PREDICATE_DEPARTMENT)
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::parse(self.format_name()).unwrap_or(OutputFormat::Text)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("search.term", self.search_term())?;
        validation::validate_non_empty_string(
            "filter.excluded_department",
            self.excluded_department(),
        )?;
        validation::validate_non_empty_string("raise.department", self.raise_department())?;
        validation::validate_non_empty_string(
            "predicates.department",
            self.predicate_department(),
        )?;
        validation::validate_positive_number("cycle.target_len", self.cycle_target_len(), 1)?;
        validation::validate_amount("raise.amount", self.raise_amount())?;
        validation::validate_one_of(
            "report.output_format",
            self.format_name(),
            &OutputFormat::NAMES,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[report]
name = "hr-review"
output_format = "json"

[search]
term = "smi"

[store]
id = "7"

[filter]
excluded_department = "HR"
matching_ids = [102, 103]

[cycle]
target_len = 6
offset = 5

[raise]
department = "Finance"
amount = 2500.5

[predicates]
department = "IT"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.report_name(), "hr-review");
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.search_term(), "smi");
        assert_eq!(config.store_id(), "7");
        assert_eq!(config.excluded_department(), "HR");
        assert_eq!(
            config.matching_ids(),
            [102, 103].into_iter().collect::<HashSet<u32>>()
        );
        assert_eq!(config.cycle_target_len(), 6);
        assert_eq!(config.cycle_offset(), 5);
        assert_eq!(config.raise_department(), "Finance");
        assert_eq!(config.raise_amount(), 2500.5);
        assert_eq!(config.predicate_department(), "IT");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.report_name(), "employee-report");
        assert_eq!(config.search_term(), "Jo");
        assert_eq!(config.store_id(), "23");
        assert_eq!(config.cycle_target_len(), 10);
        assert_eq!(config.cycle_offset(), 7);
        assert_eq!(
            config.matching_ids(),
            [101, 104].into_iter().collect::<HashSet<u32>>()
        );
        assert_eq!(config.raise_amount(), 5000.0);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EMPLOYEE_QUERY_TEST_TERM", "tay");

        let toml_content = r#"
[search]
term = "${EMPLOYEE_QUERY_TEST_TERM}"

[predicates]
department = "${EMPLOYEE_QUERY_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.search_term(), "tay");
        assert_eq!(
            config.predicate_department(),
            "${EMPLOYEE_QUERY_TEST_UNSET_VAR}"
        );

        std::env::remove_var("EMPLOYEE_QUERY_TEST_TERM");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[report]\noutput_format = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[raise]\namount = -10.0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("raise.amount"));

        let config = TomlConfig::from_toml_str("[cycle]\ntarget_len = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[search\nterm = 1").unwrap_err();
        assert!(matches!(err, QueryError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[report]\nname = \"file-test\"\n\n[search]\nterm = \"ali\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.report_name(), "file-test");
        assert_eq!(config.search_term(), "ali");

        let missing = TomlConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(missing, Err(QueryError::IoError(_))));
    }
}
