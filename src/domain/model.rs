use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Female,
    Male,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "MALE"),
            Gender::Female => write!(f, "FEMALE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
}

impl Address {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// 員工記錄；`email` 與 `address` 可能缺席
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub gender: Gender,
    pub emp_id: u32,
    pub salary: f64,
    pub email: Option<String>,
    pub address: Option<Address>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.first_name, self.last_name, self.department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Employee {
        Employee {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            department: "HR".to_string(),
            gender: Gender::Female,
            emp_id: 102,
            salary: 55000.0,
            email: None,
            address: None,
        }
    }

    #[test]
    fn test_display_forms() {
        let employee = jane();
        assert_eq!(employee.full_name(), "Jane Smith");
        assert_eq!(employee.to_string(), "Jane Smith - HR");
        assert_eq!(Address::new("London", "UK").to_string(), "London, UK");
        assert_eq!(Gender::Female.to_string(), "FEMALE");
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let json = serde_json::to_value(jane()).unwrap();
        assert_eq!(json["email"], serde_json::Value::Null);
        assert_eq!(json["address"], serde_json::Value::Null);
        assert_eq!(json["gender"], serde_json::json!("FEMALE"));
    }
}
