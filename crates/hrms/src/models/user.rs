//! Demo users and per-user onboarding state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    /// Regular employee.
    Employee,
    /// Human resources staff.
    Hr,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee => write!(f, "employee"),
            Self::Hr => write!(f, "hr"),
        }
    }
}

/// A user who can sign in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Access role.
    pub role: UserRole,
    /// Linked employee number.
    pub employee_id: String,
    /// Department name.
    pub department: String,
    /// Job title.
    pub position: String,
    /// Avatar image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Check if the user has the HR role.
    #[must_use]
    pub fn is_hr(&self) -> bool {
        self.role == UserRole::Hr
    }
}

/// Whether a user has been through the product tour.
///
/// Skipping the tour also marks it as completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    /// Tour finished or skipped.
    pub has_completed_onboarding: bool,
    /// When the tour was finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// When the tour was skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped_at: Option<DateTime<Utc>>,
}
