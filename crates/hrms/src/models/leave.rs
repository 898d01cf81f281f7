//! Leave requests and balances.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of leave requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveType {
    /// Paid vacation.
    Vacation,
    /// Sick leave.
    Sick,
    /// Personal leave.
    Personal,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
    /// Bereavement leave.
    Bereavement,
    /// Anything else.
    Other,
}

impl LeaveType {
    /// Every leave type, in display order.
    pub const ALL: [Self; 7] = [
        Self::Vacation,
        Self::Sick,
        Self::Personal,
        Self::Maternity,
        Self::Paternity,
        Self::Bereavement,
        Self::Other,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Vacation => "Vacation",
            Self::Sick => "Sick Leave",
            Self::Personal => "Personal Leave",
            Self::Maternity => "Maternity Leave",
            Self::Paternity => "Paternity Leave",
            Self::Bereavement => "Bereavement Leave",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vacation => write!(f, "vacation"),
            Self::Sick => write!(f, "sick"),
            Self::Personal => write!(f, "personal"),
            Self::Maternity => write!(f, "maternity"),
            Self::Paternity => write!(f, "paternity"),
            Self::Bereavement => write!(f, "bereavement"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Leave request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveStatus {
    /// Awaiting review.
    Pending,
    /// Approved by a reviewer.
    Approved,
    /// Rejected by a reviewer.
    Rejected,
    /// Withdrawn.
    Cancelled,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A request for leave.
///
/// `employee_id` is the denormalized employee number, not a storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Storage identifier.
    pub id: String,
    /// Employee number of the requester.
    pub employee_id: String,
    /// Requester's name at the time of the request.
    pub employee_name: String,
    /// Kind of leave.
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// Number of days requested.
    pub days: u32,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
    /// Current status.
    pub status: LeaveStatus,
    /// Date the request was filed.
    pub applied_date: NaiveDate,
    /// Who reviewed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    /// When it was reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_date: Option<NaiveDate>,
    /// Reviewer's comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_comments: Option<String>,
}

impl LeaveRequest {
    /// Build a pending request with its day count computed from the range.
    ///
    /// `id` and `applied_date` are placeholders until the request is added
    /// to a repository.
    #[must_use]
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            leave_type,
            start_date,
            end_date,
            days: calculate_leave_days(start_date, end_date),
            reason: reason.into(),
            status: LeaveStatus::Pending,
            applied_date: start_date,
            reviewed_by: None,
            reviewed_date: None,
            review_comments: None,
        }
    }
}

/// Number of leave days between two dates, counting both endpoints.
///
/// The order of the dates does not matter.
#[must_use]
pub fn calculate_leave_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let span = (end - start).num_days().unsigned_abs() + 1;
    u32::try_from(span).unwrap_or(u32::MAX)
}

/// Remaining leave days for one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    /// Employee number.
    pub employee_id: String,
    /// Vacation days left.
    pub vacation: u32,
    /// Sick days left.
    pub sick: u32,
    /// Personal days left.
    pub personal: u32,
    /// Maternity days left.
    pub maternity: u32,
    /// Paternity days left.
    pub paternity: u32,
    /// Bereavement days left.
    pub bereavement: u32,
}

impl LeaveBalance {
    /// Days available for a leave type. `Other` has no allowance.
    #[must_use]
    pub fn available(&self, leave_type: LeaveType) -> u32 {
        match leave_type {
            LeaveType::Vacation => self.vacation,
            LeaveType::Sick => self.sick,
            LeaveType::Personal => self.personal,
            LeaveType::Maternity => self.maternity,
            LeaveType::Paternity => self.paternity,
            LeaveType::Bereavement => self.bereavement,
            LeaveType::Other => 0,
        }
    }

    /// Check whether `days` fit within the allowance for `leave_type`.
    #[must_use]
    pub fn is_sufficient(&self, leave_type: LeaveType, days: u32) -> bool {
        self.available(leave_type) >= days
    }
}
