use std::collections::HashSet;

/// 報表執行各查詢所需的參數
pub trait QueryParams {
    fn search_term(&self) -> &str;
    fn store_id(&self) -> &str;
    fn excluded_department(&self) -> &str;
    fn cycle_target_len(&self) -> usize;
    fn cycle_offset(&self) -> usize;
    fn matching_ids(&self) -> HashSet<u32>;
    fn raise_department(&self) -> &str;
    fn raise_amount(&self) -> f64;
    fn predicate_department(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
