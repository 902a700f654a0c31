use crate::core::queries::{self, in_department};
use crate::core::render::{render_list, render_map};
use crate::core::{Employee, OutputFormat, QueryParams};
use crate::utils::error::Result;
use serde::Serialize;

/// 單一查詢步驟的輸出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub step: usize,
    pub title: &'static str,
    pub lines: Vec<String>,
}

pub struct QueryReport<C: QueryParams> {
    params: C,
}

fn lines_of<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    items.into_iter().map(|item| item.to_string()).collect()
}

impl<C: QueryParams> QueryReport<C> {
    pub fn new(params: C) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &C {
        &self.params
    }

    /// 依序執行所有查詢。第 16 步會就地加薪，之後的步驟看到的是加薪後的資料。
    pub fn run(&self, employees: &mut [Employee]) -> Result<Vec<ReportSection>> {
        let p = &self.params;
        tracing::info!("Running report over {} employees", employees.len());

        let mut sections = Vec::with_capacity(20);
        let mut push = |title: &'static str, lines: Vec<String>| {
            tracing::debug!("Step {}: {} ({} lines)", sections.len() + 1, title, lines.len());
            sections.push(ReportSection {
                step: sections.len() + 1,
                title,
                lines,
            });
        };

        push(
            "First employee full name",
            vec![queries::first_full_name(employees)],
        );

        push(
            "Employees per department",
            vec![render_map(&queries::count_by_department(employees))],
        );

        push(
            "Name search",
            vec![render_list(queries::search_by_name(employees, p.search_term()))],
        );

        push(
            "Zero-padded store id",
            vec![queries::zero_pad_id(p.store_id())?],
        );

        push(
            "Employees outside department",
            vec![render_list(queries::exclude_department(
                employees,
                p.excluded_department(),
            ))],
        );

        push(
            "Sorted by first name",
            lines_of(queries::sort_by_first_name(employees)),
        );

        let highest = queries::max_by_id(employees);
        if highest.is_none() {
            tracing::warn!("No employees to pick the highest id from");
        }
        push("Highest employee id", lines_of(highest));

        push(
            "Joined full names",
            vec![queries::joined_full_names(employees)],
        );

        let picked = queries::nth_cycled(employees, p.cycle_target_len(), p.cycle_offset())?;
        push(
            "Employee from cycled list",
            vec![format!("{} - {}", picked.full_name(), picked.department)],
        );

        push(
            "Employees with matching ids",
            vec![render_list(queries::filter_by_ids(
                employees,
                &p.matching_ids(),
            ))],
        );

        push(
            "Employees per gender",
            vec![render_map(&queries::count_by_gender(employees))],
        );

        push(
            "Full names by gender",
            queries::full_names_by_gender(employees)
                .iter()
                .map(|(gender, names)| format!("{}: {}", gender, render_list(names)))
                .collect(),
        );

        push("Sorted by salary", lines_of(queries::sort_by_salary(employees)));

        push("Email or default", lines_of(queries::emails_or_default(employees)));

        push(
            "Address or default",
            lines_of(queries::addresses_or_unknown(employees)),
        );

        queries::raise_salary(employees, p.raise_department(), p.raise_amount());
        push("Salary raise", Vec::new());

        push(
            "Addresses by city and country",
            lines_of(queries::addresses_sorted_by_city_country(employees)),
        );

        push(
            "Full name to address",
            vec![render_map(&queries::full_name_to_address(employees))],
        );

        let mut retrieved = lines_of(queries::find_any(employees));
        retrieved.extend(lines_of(queries::find_first(employees)));
        push("Any and first employee", retrieved);

        let department = p.predicate_department();
        push(
            "Predicate checks",
            vec![
                format!(
                    "Any {}? {}",
                    department,
                    queries::any_match(employees, in_department(department))
                ),
                format!(
                    "All have email? {}",
                    queries::all_match(employees, queries::has_email)
                ),
                format!(
                    "None has null name? {}",
                    queries::none_match(employees, queries::missing_first_name)
                ),
            ],
        );

        tracing::info!("Report finished with {} sections", sections.len());
        Ok(sections)
    }
}

pub fn render_text(sections: &[ReportSection]) -> String {
    sections
        .iter()
        .flat_map(|section| section.lines.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(sections: &[ReportSection]) -> Result<String> {
    Ok(serde_json::to_string_pretty(sections)?)
}

pub fn render(format: OutputFormat, sections: &[ReportSection]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(sections)),
        OutputFormat::Json => render_json(sections),
    }
}
