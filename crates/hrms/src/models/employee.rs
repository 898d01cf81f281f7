//! Employee records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    /// Currently employed.
    Active,
    /// On leave of absence or otherwise not working.
    Inactive,
    /// No longer employed.
    Terminated,
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Terminated => write!(f, "terminated"),
        }
    }
}

/// Emergency contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    /// Contact name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Relationship to the employee.
    pub relationship: String,
}

/// An employee record.
///
/// `manager` is a display name, not a key; nothing checks that it matches
/// another employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Storage identifier.
    pub id: String,
    /// Human-facing employee number, e.g. `EMP001`.
    pub employee_id: String,
    /// Full name.
    pub name: String,
    /// Work email.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Department name.
    pub department: String,
    /// Job title.
    pub position: String,
    /// Annual salary.
    pub salary: u64,
    /// Date of hire.
    pub hire_date: NaiveDate,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Manager's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    /// Avatar image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Emergency contact.
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
}

impl Employee {
    /// Check if the employee is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_json_shape() {
        let json = r#"{
            "id": "1",
            "employeeId": "EMP001",
            "name": "John Doe",
            "email": "john.doe@company.com",
            "phone": "+1 (555) 123-4567",
            "department": "Engineering",
            "position": "Software Developer",
            "salary": 85000,
            "hireDate": "2022-03-15",
            "status": "active",
            "manager": "Sarah Wilson",
            "address": "123 Main St",
            "emergencyContact": {"name": "Jane Doe", "phone": "+1", "relationship": "Spouse"}
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id, "EMP001");
        assert_eq!(employee.manager.as_deref(), Some("Sarah Wilson"));
        assert!(employee.avatar.is_none());
        assert!(employee.is_active());

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["hireDate"], "2022-03-15");
        assert_eq!(value["emergencyContact"]["relationship"], "Spouse");
        assert!(value.get("avatar").is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(EmployeeStatus::Active.to_string(), "active");
        assert_eq!(EmployeeStatus::Terminated.to_string(), "terminated");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = serde_json::from_str::<EmployeeStatus>(r#""retired""#);
        assert!(result.is_err());
    }
}
