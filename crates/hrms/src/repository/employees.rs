//! Employee collection.

use std::collections::BTreeSet;

use super::{Collection, Record};
use crate::error::Result;
use crate::fixtures;
use crate::models::Employee;
use crate::storage::keys;

impl Record for Employee {
    const ENTITY: &'static str = "employee";
    const KEY: &'static str = keys::EMPLOYEES;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn fixtures() -> Vec<Self> {
        fixtures::employees()
    }
}

/// Repository of employee records.
pub type EmployeeRepository<'a> = Collection<'a, Employee>;

impl Collection<'_, Employee> {
    /// Employees in `department`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn by_department(&self, department: &str) -> Result<Vec<Employee>> {
        self.filter(|employee| employee.department == department)
    }

    /// Look up an employee by employee number (e.g. `EMP001`).
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn by_employee_id(&self, employee_id: &str) -> Result<Option<Employee>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|employee| employee.employee_id == employee_id))
    }

    /// Distinct department names, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn departments(&self) -> Result<Vec<String>> {
        let departments: BTreeSet<String> = self
            .all()?
            .into_iter()
            .map(|employee| employee.department)
            .collect();
        Ok(departments.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Store;

    #[test]
    fn test_departments_sorted_distinct() {
        let store = Store::open_in_memory().unwrap();
        let repo = EmployeeRepository::new(&store);

        assert_eq!(
            repo.departments().unwrap(),
            vec!["Engineering", "Finance", "Human Resources", "Marketing"]
        );
    }

    #[test]
    fn test_by_department() {
        let store = Store::open_in_memory().unwrap();
        let repo = EmployeeRepository::new(&store);

        let marketing = repo.by_department("Marketing").unwrap();
        let names: Vec<_> = marketing.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Mike Johnson", "Lisa Chen"]);
        assert!(repo.by_department("Sales").unwrap().is_empty());
    }

    #[test]
    fn test_by_employee_id() {
        let store = Store::open_in_memory().unwrap();
        let repo = EmployeeRepository::new(&store);

        let found = repo.by_employee_id("HR001").unwrap().unwrap();
        assert_eq!(found.name, "Sarah Wilson");
        assert!(repo.by_employee_id("EMP999").unwrap().is_none());
    }
}
