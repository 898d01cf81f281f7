//! Record types for the HR collections.
//!
//! Field names serialize in camelCase and enum values in kebab-case so the
//! persisted JSON keeps the same shape as the documents it replaces.

pub mod employee;
pub mod feedback;
pub mod leave;
pub mod performance;
pub mod user;

use chrono::{NaiveDate, Utc};

pub use employee::{EmergencyContact, Employee, EmployeeStatus};
pub use feedback::{
    AccidentReport, Complaint, ComplaintCategory, FeedbackBase, FeedbackItem, FeedbackStatus,
    FeedbackType, InjuryType, Level, Priority, Severity, Suggestion, SuggestionCategory,
};
pub use leave::{calculate_leave_days, LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
pub use performance::{
    calculate_overall_rating, rating_label, GoalStatus, PerformanceGoal, PerformanceReview,
    Ratings, ReviewStatus, ReviewType,
};
pub use user::{OnboardingState, User, UserRole};

/// Today's date in UTC, used for applied/created/submitted stamps.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Build a date from parts, for fixture tables.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert!((round_to(4.256, 2) - 4.26).abs() < f64::EPSILON);
        assert!((round_to(3.25, 1) - 3.3).abs() < f64::EPSILON);
        assert!((round_to(2.0, 2) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ymd() {
        assert_eq!(ymd(2024, 3, 15).to_string(), "2024-03-15");
    }
}
