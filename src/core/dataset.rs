use crate::core::{Address, Employee, Gender};

#[allow(clippy::too_many_arguments)]
fn employee(
    first_name: &str,
    last_name: &str,
    department: &str,
    gender: Gender,
    emp_id: u32,
    salary: f64,
    email: Option<&str>,
    address: Option<Address>,
) -> Employee {
    Employee {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        department: department.to_string(),
        gender,
        emp_id,
        salary,
        email: email.map(str::to_string),
        address,
    }
}

/// 內建的四筆員工資料；Jane 沒有 email 也沒有地址
pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee(
            "John",
            "Doe",
            "IT",
            Gender::Male,
            101,
            60000.0,
            Some("john@xyz.com"),
            Some(Address::new("New York", "USA")),
        ),
        employee("Jane", "Smith", "HR", Gender::Female, 102, 55000.0, None, None),
        employee(
            "Alice",
            "Brown",
            "Finance",
            Gender::Female,
            103,
            70000.0,
            Some("alice@xyz.com"),
            Some(Address::new("London", "UK")),
        ),
        employee(
            "Bob",
            "Taylor",
            "IT",
            Gender::Male,
            104,
            75000.0,
            Some("bob@xyz.com"),
            Some(Address::new("Toronto", "Canada")),
        ),
    ]
}
