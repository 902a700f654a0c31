//! 員工清單上的查詢操作。
//!
//! 除了 [`raise_salary`] 之外都是純函式：輸入切片不會被修改，
//! 回傳的序列保留原始的相對順序（排序操作為穩定排序）。

use crate::core::{Address, Employee, Gender};
use crate::utils::error::{QueryError, Result};
use std::collections::{BTreeMap, HashSet};

pub const NO_EMPLOYEE: &str = "No employee";
pub const DEFAULT_EMAIL: &str = "no-email@domain.com";
pub const UNKNOWN: &str = "Unknown";
pub const NAME_DELIMITER: &str = "|";
pub const ID_WIDTH: usize = 4;

/// 第一位員工的全名，清單為空時回傳 [`NO_EMPLOYEE`]
pub fn first_full_name(employees: &[Employee]) -> String {
    employees
        .first()
        .map(Employee::full_name)
        .unwrap_or_else(|| NO_EMPLOYEE.to_string())
}

fn count_by<K, F>(employees: &[Employee], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&Employee) -> K,
{
    employees.iter().fold(BTreeMap::new(), |mut counts, employee| {
        *counts.entry(key(employee)).or_insert(0) += 1;
        counts
    })
}

pub fn count_by_department(employees: &[Employee]) -> BTreeMap<String, usize> {
    count_by(employees, |e| e.department.clone())
}

pub fn count_by_gender(employees: &[Employee]) -> BTreeMap<Gender, usize> {
    count_by(employees, |e| e.gender)
}

/// 名或姓包含 `term`（不分大小寫）的員工
pub fn search_by_name<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = term.to_lowercase();
    let matches: Vec<&Employee> = employees
        .iter()
        .filter(|e| {
            e.first_name.to_lowercase().contains(&needle)
                || e.last_name.to_lowercase().contains(&needle)
        })
        .collect();

    tracing::debug!("Name search '{}' matched {} employees", term, matches.len());
    matches
}

/// 將數字字串補零成 [`ID_WIDTH`] 位，例如 `"23"` -> `"0023"`
pub fn zero_pad_id(raw: &str) -> Result<String> {
    let value: u32 = raw.parse().map_err(|e: std::num::ParseIntError| QueryError::FormatError {
        input: raw.to_string(),
        reason: e.to_string(),
    })?;

    let max = 10u32.pow(ID_WIDTH as u32) - 1;
    if value > max {
        return Err(QueryError::FormatError {
            input: raw.to_string(),
            reason: format!("value does not fit in {} digits", ID_WIDTH),
        });
    }

    Ok(format!("{:0width$}", value, width = ID_WIDTH))
}

pub fn exclude_department<'a>(employees: &'a [Employee], department: &str) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|e| e.department != department)
        .collect()
}

pub fn sort_by_first_name(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| a.first_name.cmp(&b.first_name));
    sorted
}

pub fn max_by_id(employees: &[Employee]) -> Option<&Employee> {
    employees.iter().max_by_key(|e| e.emp_id)
}

pub fn joined_full_names(employees: &[Employee]) -> String {
    employees
        .iter()
        .map(Employee::full_name)
        .collect::<Vec<_>>()
        .join(NAME_DELIMITER)
}

/// 重複整份清單直到長度至少為 `target_len` 後的長度；超過 `usize::MAX` 時以 `usize::MAX` 為上限
pub fn cycled_len(len: usize, target_len: usize) -> usize {
    if len == 0 || len >= target_len {
        len
    } else {
        len.checked_mul(target_len.div_ceil(len))
            .unwrap_or(usize::MAX)
    }
}

/// 將清單整份重複到長度至少為 `target_len`，再取第 `offset` 筆（0 起算）
pub fn nth_cycled(employees: &[Employee], target_len: usize, offset: usize) -> Result<&Employee> {
    let len = cycled_len(employees.len(), target_len);
    if offset >= len {
        return Err(QueryError::IndexError { offset, len });
    }

    // len > 0 時 employees 必不為空
    employees
        .get(offset % employees.len())
        .ok_or(QueryError::IndexError { offset, len })
}

pub fn filter_by_ids<'a>(employees: &'a [Employee], ids: &HashSet<u32>) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|e| ids.contains(&e.emp_id))
        .collect()
}

pub fn full_names_by_gender(employees: &[Employee]) -> BTreeMap<Gender, Vec<String>> {
    employees.iter().fold(BTreeMap::new(), |mut groups, employee| {
        groups
            .entry(employee.gender)
            .or_default()
            .push(employee.full_name());
        groups
    })
}

pub fn sort_by_salary(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| a.salary.total_cmp(&b.salary));
    sorted
}

pub fn email_or_default(employee: &Employee) -> &str {
    employee.email.as_deref().unwrap_or(DEFAULT_EMAIL)
}

pub fn emails_or_default(employees: &[Employee]) -> Vec<&str> {
    employees.iter().map(email_or_default).collect()
}

pub fn addresses_or_unknown(employees: &[Employee]) -> Vec<Address> {
    employees
        .iter()
        .map(|e| {
            e.address
                .clone()
                .unwrap_or_else(|| Address::new(UNKNOWN, UNKNOWN))
        })
        .collect()
}

/// 就地為指定部門的員工加薪。之後對同一份資料的查詢都會看到新薪資。
pub fn raise_salary(employees: &mut [Employee], department: &str, amount: f64) {
    let mut raised = 0;
    for employee in employees.iter_mut().filter(|e| e.department == department) {
        employee.salary += amount;
        raised += 1;
    }

    tracing::debug!(
        "Raised salary of {} employees in {} by {}",
        raised,
        department,
        amount
    );
}

/// [`raise_salary`] 的純函式版本，回傳新的資料集
pub fn with_salary_raise(employees: &[Employee], department: &str, amount: f64) -> Vec<Employee> {
    let mut raised = employees.to_vec();
    raise_salary(&mut raised, department, amount);
    raised
}

/// 每位員工一個地址（缺席時為空字串地址），依城市再依國家排序
pub fn addresses_sorted_by_city_country(employees: &[Employee]) -> Vec<Address> {
    let mut addresses: Vec<Address> = employees
        .iter()
        .map(|e| e.address.clone().unwrap_or_else(|| Address::new("", "")))
        .collect();

    addresses.sort_by(|a, b| a.city.cmp(&b.city).then_with(|| a.country.cmp(&b.country)));
    addresses
}

/// 全名對地址的映射，只包含有地址的員工；全名重複時後者覆蓋前者
pub fn full_name_to_address(employees: &[Employee]) -> BTreeMap<String, Address> {
    employees
        .iter()
        .filter_map(|e| e.address.as_ref().map(|address| (e.full_name(), address.clone())))
        .fold(BTreeMap::new(), |mut map, (name, address)| {
            map.insert(name, address);
            map
        })
}

/// 任取一位員工；呼叫端不應依賴回傳的是哪一位
pub fn find_any(employees: &[Employee]) -> Option<&Employee> {
    employees.iter().next()
}

pub fn find_first(employees: &[Employee]) -> Option<&Employee> {
    employees.first()
}

pub fn any_match<P>(employees: &[Employee], predicate: P) -> bool
where
    P: FnMut(&Employee) -> bool,
{
    employees.iter().any(predicate)
}

pub fn all_match<P>(employees: &[Employee], predicate: P) -> bool
where
    P: FnMut(&Employee) -> bool,
{
    employees.iter().all(predicate)
}

pub fn none_match<P>(employees: &[Employee], predicate: P) -> bool
where
    P: FnMut(&Employee) -> bool,
{
    !employees.iter().any(predicate)
}

pub fn in_department(department: &str) -> impl Fn(&Employee) -> bool + '_ {
    move |e: &Employee| e.department == department
}

pub fn has_email(employee: &Employee) -> bool {
    employee.email.is_some()
}

pub fn missing_first_name(employee: &Employee) -> bool {
    employee.first_name.trim().is_empty()
}
