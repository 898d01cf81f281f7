//! Performance reviews and goals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::round_to;

/// Review workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewStatus {
    /// Not yet started.
    Draft,
    /// Being written.
    InProgress,
    /// Finished by the reviewer.
    Completed,
    /// Past its due date.
    Overdue,
    /// Waiting on sign-off.
    PendingApproval,
    /// Signed off.
    Approved,
    /// Sent back.
    Rejected,
}

impl ReviewStatus {
    /// Completed and approved reviews count towards rating statistics.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Approved)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::PendingApproval => "pending-approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Review cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewType {
    /// Yearly review.
    Annual,
    /// Quarterly check-in.
    Quarterly,
    /// End of probation.
    Probation,
    /// Mid-year review.
    MidYear,
}

/// Goal progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    /// Not started.
    NotStarted,
    /// Under way.
    InProgress,
    /// Done.
    Completed,
    /// Past its target date.
    Overdue,
}

/// A weighted goal set during a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceGoal {
    /// Goal identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Target completion date.
    pub target_date: NaiveDate,
    /// Progress status.
    pub status: GoalStatus,
    /// Percent complete.
    pub progress: u8,
    /// Relative weight in percent.
    pub weight: u8,
}

/// The eight rating categories, each on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    /// Knowledge of the role.
    pub job_knowledge: u8,
    /// Quality of output.
    pub quality_of_work: u8,
    /// Output volume.
    pub productivity: u8,
    /// Communication.
    pub communication: u8,
    /// Working with others.
    pub teamwork: u8,
    /// Self-direction.
    pub initiative: u8,
    /// Dependability.
    pub reliability: u8,
    /// Problem solving.
    pub problem_solving: u8,
}

impl Ratings {
    /// Every category set to the same score.
    #[must_use]
    pub fn uniform(score: u8) -> Self {
        Self {
            job_knowledge: score,
            quality_of_work: score,
            productivity: score,
            communication: score,
            teamwork: score,
            initiative: score,
            reliability: score,
            problem_solving: score,
        }
    }

    /// Category scores in declaration order.
    #[must_use]
    pub fn values(&self) -> [u8; 8] {
        [
            self.job_knowledge,
            self.quality_of_work,
            self.productivity,
            self.communication,
            self.teamwork,
            self.initiative,
            self.reliability,
            self.problem_solving,
        ]
    }
}

/// Unweighted mean of the eight ratings, rounded to two decimals.
#[must_use]
pub fn calculate_overall_rating(ratings: &Ratings) -> f64 {
    let values = ratings.values();
    let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
    round_to(f64::from(sum) / 8.0, 2)
}

/// Descriptive label for an overall rating.
#[must_use]
pub fn rating_label(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "Excellent"
    } else if rating >= 3.5 {
        "Good"
    } else if rating >= 2.5 {
        "Satisfactory"
    } else if rating >= 1.5 {
        "Needs Improvement"
    } else {
        "Unsatisfactory"
    }
}

/// A performance review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    /// Storage identifier.
    pub id: String,
    /// Employee number of the reviewee.
    pub employee_id: String,
    /// Reviewee's name.
    pub employee_name: String,
    /// Employee number of the reviewer.
    pub reviewer_id: String,
    /// Reviewer's name.
    pub reviewer_name: String,
    /// Review cadence.
    pub review_type: ReviewType,
    /// Period covered, e.g. `Q1 2024`.
    pub review_period: String,
    /// Workflow status.
    pub status: ReviewStatus,
    /// Creation date.
    pub created_date: NaiveDate,
    /// Due date.
    pub due_date: NaiveDate,
    /// Completion date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
    /// Why it was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Category scores.
    pub ratings: Ratings,
    /// Strengths.
    #[serde(default)]
    pub strengths: String,
    /// Areas to improve.
    #[serde(default)]
    pub areas_for_improvement: String,
    /// Goals for the next period.
    #[serde(default)]
    pub goals: Vec<PerformanceGoal>,
    /// Reviewer's overall comments.
    #[serde(default)]
    pub overall_comments: String,
    /// Reviewee's response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_comments: Option<String>,
    /// Mean of the ratings.
    pub overall_rating: f64,
}
