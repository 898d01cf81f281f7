//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use serde_json::Value;

use crate::models::{FeedbackType, LeaveType};

/// Employee commands.
#[derive(Debug, Subcommand)]
pub enum EmployeesCommand {
    /// List employees
    List {
        /// Only employees in this department
        #[arg(short, long)]
        department: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show one employee
    Show {
        /// Storage identifier
        id: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Add an employee
    Add(AddEmployeeArgs),

    /// Change fields of an employee
    Update(UpdateArgs),

    /// Delete an employee
    Delete {
        /// Storage identifier
        id: String,
    },

    /// List departments
    Departments,
}

/// Arguments for adding an employee.
#[derive(Debug, Args)]
pub struct AddEmployeeArgs {
    /// Employee number, e.g. EMP005
    #[arg(long)]
    pub employee_id: String,

    /// Full name
    #[arg(long)]
    pub name: String,

    /// Work email
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Department name
    #[arg(long)]
    pub department: String,

    /// Job title
    #[arg(long)]
    pub position: String,

    /// Annual salary
    #[arg(long)]
    pub salary: u64,

    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    pub hire_date: NaiveDate,

    /// Manager's name
    #[arg(long)]
    pub manager: Option<String>,

    /// Postal address
    #[arg(long, default_value = "")]
    pub address: String,
}

/// Arguments for a partial update.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Storage identifier
    pub id: String,

    /// Field assignment in camelCase, e.g. `salary=90000` (repeatable)
    ///
    /// Values are read as JSON, falling back to a plain string.
    #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment, required = true)]
    pub set: Vec<(String, Value)>,
}

/// Parse `field=value`, reading the value as JSON when possible.
///
/// # Errors
///
/// Returns an error if there is no `=` or the field name is empty.
pub fn parse_assignment(input: &str) -> Result<(String, Value), String> {
    let (field, raw) = input
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{input}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{input}'"));
    }
    let value =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((field.to_string(), value))
}

/// Leave request commands.
#[derive(Debug, Subcommand)]
pub enum LeaveCommand {
    /// List leave requests
    List {
        /// Only requests by this employee number
        #[arg(short, long)]
        employee: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// File a leave request
    Request(LeaveRequestArgs),

    /// Approve a request
    Approve(ReviewLeaveArgs),

    /// Reject a request
    Reject(ReviewLeaveArgs),

    /// Cancel a request
    Cancel {
        /// Storage identifier
        id: String,
    },

    /// Show an employee's remaining leave
    Balance {
        /// Employee number
        employee: String,
    },

    /// Delete a request
    Delete {
        /// Storage identifier
        id: String,
    },
}

/// Arguments for filing a leave request.
#[derive(Debug, Args)]
pub struct LeaveRequestArgs {
    /// Employee number of the requester
    #[arg(short, long)]
    pub employee: String,

    /// Kind of leave
    #[arg(short = 't', long = "type", value_enum)]
    pub leave_type: LeaveTypeArg,

    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    pub to: NaiveDate,

    /// Reason for the request
    #[arg(short, long, default_value = "")]
    pub reason: String,

    /// File the request even if the balance is insufficient
    #[arg(long)]
    pub force: bool,
}

/// Arguments for approving or rejecting a leave request.
#[derive(Debug, Args)]
pub struct ReviewLeaveArgs {
    /// Storage identifier
    pub id: String,

    /// Reviewer's name (defaults to the signed-in user)
    #[arg(long)]
    pub reviewer: Option<String>,

    /// Review comments
    #[arg(long)]
    pub comments: Option<String>,
}

/// Performance review commands.
#[derive(Debug, Subcommand)]
pub enum ReviewsCommand {
    /// List reviews
    List {
        /// Only reviews of this employee number
        #[arg(short, long)]
        employee: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show one review
    Show {
        /// Storage identifier
        id: String,
    },

    /// Add a review from a JSON file
    Add {
        /// JSON file with the review fields
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Change fields of a review
    Update(UpdateArgs),

    /// Approve a review
    Approve {
        /// Storage identifier
        id: String,
    },

    /// Reject a review
    Reject {
        /// Storage identifier
        id: String,

        /// Why it was rejected
        #[arg(short, long)]
        reason: Option<String>,
    },

    /// Delete a review
    Delete {
        /// Storage identifier
        id: String,
    },
}

/// Feedback commands.
#[derive(Debug, Subcommand)]
pub enum FeedbackCommand {
    /// List feedback
    List {
        /// Only items by this employee number
        #[arg(short, long)]
        employee: Option<String>,

        /// Only items of this kind
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<FeedbackTypeArg>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show one item
    Show {
        /// Storage identifier
        id: String,
    },

    /// Submit an item from a JSON file
    Add {
        /// JSON file with the item fields, including `type`
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Change fields of an item
    Update(UpdateArgs),

    /// Mark an item resolved
    Resolve {
        /// Storage identifier
        id: String,

        /// Response to the submitter
        #[arg(short, long)]
        response: Option<String>,
    },

    /// Delete an item
    Delete {
        /// Storage identifier
        id: String,
    },
}

/// Analytics command arguments.
#[derive(Debug, Args)]
pub struct AnalyticsCommand {
    /// Which report to show
    #[arg(value_enum, default_value = "dashboard")]
    pub report: Report,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Available analytics reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Report {
    /// Headline numbers
    #[default]
    Dashboard,
    /// Per-department summary
    Departments,
    /// Leave summary
    Leave,
    /// Performance summary
    Performance,
    /// Feedback summary
    Feedback,
    /// Workforce composition
    Workforce,
}

/// Login command arguments.
#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Email of a demo user
    pub email: String,

    /// Password (not checked)
    #[arg(short, long, default_value = "")]
    pub password: String,
}

/// Onboarding commands.
#[derive(Debug, Subcommand)]
pub enum OnboardingCommand {
    /// Show onboarding state
    Status(OnboardingArgs),
    /// Mark the tour completed
    Complete(OnboardingArgs),
    /// Mark the tour skipped
    Skip(OnboardingArgs),
    /// Show the tour again next time
    Reset(OnboardingArgs),
}

/// Which user an onboarding command applies to.
#[derive(Debug, Args)]
pub struct OnboardingArgs {
    /// User identifier (defaults to the signed-in user)
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Data administration commands.
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Overwrite all collections with the demo data
    Seed,

    /// Remove all stored collections and sign out
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Seed the demo data if nothing has been stored yet
    Init,

    /// Show store statistics
    Stats {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Leave type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LeaveTypeArg {
    /// Paid vacation
    Vacation,
    /// Sick leave
    Sick,
    /// Personal leave
    Personal,
    /// Maternity leave
    Maternity,
    /// Paternity leave
    Paternity,
    /// Bereavement leave
    Bereavement,
    /// Anything else
    Other,
}

impl From<LeaveTypeArg> for LeaveType {
    fn from(arg: LeaveTypeArg) -> Self {
        match arg {
            LeaveTypeArg::Vacation => Self::Vacation,
            LeaveTypeArg::Sick => Self::Sick,
            LeaveTypeArg::Personal => Self::Personal,
            LeaveTypeArg::Maternity => Self::Maternity,
            LeaveTypeArg::Paternity => Self::Paternity,
            LeaveTypeArg::Bereavement => Self::Bereavement,
            LeaveTypeArg::Other => Self::Other,
        }
    }
}

/// Feedback type argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedbackTypeArg {
    /// Complaints
    Complaint,
    /// Suggestions
    Suggestion,
    /// Accident reports
    Accident,
}

impl From<FeedbackTypeArg> for FeedbackType {
    fn from(arg: FeedbackTypeArg) -> Self {
        match arg {
            FeedbackTypeArg::Complaint => Self::Complaint,
            FeedbackTypeArg::Suggestion => Self::Suggestion,
            FeedbackTypeArg::Accident => Self::Accident,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_type_arg_conversion() {
        assert_eq!(LeaveType::from(LeaveTypeArg::Sick), LeaveType::Sick);
        assert_eq!(
            LeaveType::from(LeaveTypeArg::Bereavement),
            LeaveType::Bereavement
        );
        assert_eq!(LeaveType::from(LeaveTypeArg::Other), LeaveType::Other);
    }

    #[test]
    fn test_feedback_type_arg_conversion() {
        assert_eq!(
            FeedbackType::from(FeedbackTypeArg::Accident),
            FeedbackType::Accident
        );
    }

    #[test]
    fn test_parse_assignment_json_value() {
        let (field, value) = parse_assignment("salary=90000").unwrap();
        assert_eq!(field, "salary");
        assert_eq!(value, Value::from(90_000));

        let (_, value) = parse_assignment(r#"emergencyContact={"name":"A","phone":"1","relationship":"B"}"#).unwrap();
        assert_eq!(value["relationship"], "B");
    }

    #[test]
    fn test_parse_assignment_string_fallback() {
        let (field, value) = parse_assignment("position=Senior Analyst").unwrap();
        assert_eq!(field, "position");
        assert_eq!(value, Value::String("Senior Analyst".to_string()));

        let (_, value) = parse_assignment("status=inactive").unwrap();
        assert_eq!(value, Value::String("inactive".to_string()));
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!(parse_assignment("salary").is_err());
        assert!(parse_assignment("=5").is_err());
    }

    #[test]
    fn test_report_default() {
        assert_eq!(Report::default(), Report::Dashboard);
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
