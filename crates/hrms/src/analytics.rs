//! Dashboard summaries derived from the record collections.
//!
//! Every function re-reads the collections it needs and scans them in
//! memory. Several figures are fixed demo values rather than derived ones
//! (growth and turnover rates, monthly series, workforce distributions),
//! and department leave utilization falls back to a random placeholder
//! when a department has no approved leave.

use std::cell::RefCell;
use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::models::{round_to, Employee, FeedbackType, LeaveStatus, PerformanceReview, Priority};
use crate::repository::Repositories;

/// Reported average performance score on the dashboard.
const DASHBOARD_PERFORMANCE_SCORE: f64 = 4.0;
/// Demo employee growth rate, percent.
const EMPLOYEE_GROWTH_RATE: u32 = 12;
/// Demo turnover rate, percent.
const TURNOVER_RATE: u32 = 8;

const LEAVE_BY_MONTH: [(&str, u32); 6] = [
    ("Jan", 15),
    ("Feb", 12),
    ("Mar", 18),
    ("Apr", 22),
    ("May", 25),
    ("Jun", 20),
];

// (month, complaints, suggestions, accidents)
const FEEDBACK_TRENDS: [(&str, u32, u32, u32); 6] = [
    ("Jan", 5, 8, 2),
    ("Feb", 3, 12, 1),
    ("Mar", 7, 6, 3),
    ("Apr", 4, 10, 1),
    ("May", 6, 15, 2),
    ("Jun", 2, 9, 0),
];

// Percent of head count per bucket.
const AGE_BUCKETS: [(&str, usize); 4] = [("20-29", 30), ("30-39", 40), ("40-49", 20), ("50+", 10)];
const TENURE_BUCKETS: [(&str, usize); 4] = [
    ("0-1 years", 25),
    ("1-3 years", 35),
    ("3-5 years", 25),
    ("5+ years", 15),
];

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// All employees.
    pub total_employees: usize,
    /// Employees with active status.
    pub active_employees: usize,
    /// Distinct departments.
    pub total_departments: usize,
    /// Average performance score.
    pub avg_performance_score: f64,
    /// Leave requests awaiting review.
    pub pending_leave_requests: usize,
    /// Feedback that is open or in review.
    pub open_feedback: usize,
    /// Pending leave plus open feedback.
    pub pending_actions: usize,
    /// Employee growth rate, percent.
    pub employee_growth_rate: u32,
    /// Turnover rate, percent.
    pub turnover_rate: u32,
}

/// Per-department summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentMetrics {
    /// Department name.
    pub name: String,
    /// Employees in the department.
    pub employee_count: usize,
    /// Average review rating, matching the performance breakdown.
    pub avg_performance_score: f64,
    /// Leave utilization, percent.
    pub leave_utilization: u32,
    /// Feedback items submitted by department members.
    pub feedback_count: usize,
}

/// Count of leave requests of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    /// Leave type value, e.g. `vacation`.
    #[serde(rename = "type")]
    pub leave_type: String,
    /// Number of requests.
    pub count: usize,
}

/// Leave requests filed in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    /// Short month name.
    pub month: String,
    /// Number of requests.
    pub requests: u32,
}

/// Leave request summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveAnalytics {
    /// All requests.
    pub total_requests: usize,
    /// Approved requests.
    pub approved_requests: usize,
    /// Pending requests.
    pub pending_requests: usize,
    /// Rejected requests.
    pub rejected_requests: usize,
    /// Mean length of approved requests in days, one decimal.
    pub avg_leave_days: f64,
    /// Requests per type, in order of first appearance.
    pub leave_by_type: Vec<TypeCount>,
    /// Requests per month.
    pub leave_by_month: Vec<MonthCount>,
}

/// Number of finished reviews in one rating band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingBucket {
    /// Band label, e.g. `4 (Good)`.
    pub rating: String,
    /// Number of reviews.
    pub count: usize,
}

/// Average rating for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRating {
    /// Department name.
    pub department: String,
    /// Average overall rating, two decimals.
    pub avg_rating: f64,
}

/// Performance review summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalytics {
    /// All reviews.
    pub total_reviews: usize,
    /// Completed or approved reviews.
    pub completed_reviews: usize,
    /// Mean overall rating of finished reviews, two decimals.
    pub avg_overall_rating: f64,
    /// Finished reviews per rating band, best first.
    pub rating_distribution: Vec<RatingBucket>,
    /// Average rating per department.
    pub department_performance: Vec<DepartmentRating>,
}

/// Number of feedback items with one priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    /// Capitalized priority label.
    pub priority: String,
    /// Number of items.
    pub count: usize,
}

/// Feedback submitted in one month, by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackTrend {
    /// Short month name.
    pub month: String,
    /// Complaints.
    pub complaints: u32,
    /// Suggestions.
    pub suggestions: u32,
    /// Accident reports.
    pub accidents: u32,
}

/// Feedback summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnalytics {
    /// All items.
    pub total_feedback: usize,
    /// Complaints.
    pub complaint_count: usize,
    /// Suggestions.
    pub suggestion_count: usize,
    /// Accident reports.
    pub accident_count: usize,
    /// Resolved or closed items.
    pub resolved_count: usize,
    /// Items per priority, most urgent first.
    pub feedback_by_priority: Vec<PriorityCount>,
    /// Items per month.
    pub feedback_trends: Vec<FeedbackTrend>,
}

/// Head count in one range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeCount {
    /// Range label.
    pub range: String,
    /// Number of employees.
    pub count: usize,
}

/// Workforce composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceInsights {
    /// Employees per age range.
    pub age_distribution: Vec<RangeCount>,
    /// Employees per tenure range.
    pub tenure_distribution: Vec<RangeCount>,
}

/// Computes dashboard summaries over a set of repositories.
#[derive(Debug)]
pub struct Analytics<'a> {
    repos: Repositories<'a>,
    rng: RefCell<StdRng>,
}

impl<'a> Analytics<'a> {
    /// Create an analytics view.
    ///
    /// Placeholder values are reproducible when `config.placeholder_seed`
    /// is set.
    #[must_use]
    pub fn new(repos: Repositories<'a>, config: &AnalyticsConfig) -> Self {
        let rng = match config.placeholder_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(repos, rng)
    }

    /// Create an analytics view drawing placeholders from `rng`.
    #[must_use]
    pub fn with_rng(repos: Repositories<'a>, rng: StdRng) -> Self {
        Self {
            repos,
            rng: RefCell::new(rng),
        }
    }

    /// Headline numbers for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if a collection cannot be read.
    pub fn dashboard_metrics(&self) -> Result<DashboardMetrics> {
        let employees = self.repos.employees.all()?;
        let leave = self.repos.leave.all()?;
        let feedback = self.repos.feedback.all()?;

        let pending_leave_requests = leave
            .iter()
            .filter(|request| request.status == LeaveStatus::Pending)
            .count();
        let open_feedback = feedback
            .iter()
            .filter(|item| item.base().status.is_open())
            .count();

        Ok(DashboardMetrics {
            total_employees: employees.len(),
            active_employees: employees.iter().filter(|e| e.is_active()).count(),
            total_departments: self.repos.employees.departments()?.len(),
            avg_performance_score: DASHBOARD_PERFORMANCE_SCORE,
            pending_leave_requests,
            open_feedback,
            pending_actions: pending_leave_requests + open_feedback,
            employee_growth_rate: EMPLOYEE_GROWTH_RATE,
            turnover_rate: TURNOVER_RATE,
        })
    }

    /// Per-department summaries, sorted by department name.
    ///
    /// # Errors
    ///
    /// Returns an error if a collection cannot be read.
    pub fn department_metrics(&self) -> Result<Vec<DepartmentMetrics>> {
        let employees = self.repos.employees.all()?;
        let leave = self.repos.leave.all()?;
        let feedback = self.repos.feedback.all()?;
        let performance = self.performance_analytics()?;

        let metrics = self
            .repos
            .employees
            .departments()?
            .into_iter()
            .map(|department| {
                let members = employee_numbers(&employees, &department);
                let approved = leave
                    .iter()
                    .filter(|request| {
                        request.status == LeaveStatus::Approved
                            && members.contains(request.employee_id.as_str())
                    })
                    .count();
                let feedback_count = feedback
                    .iter()
                    .filter(|item| members.contains(item.base().employee_id.as_str()))
                    .count();
                let avg_performance_score = performance
                    .department_performance
                    .iter()
                    .find(|rating| rating.department == department)
                    .map_or(0.0, |rating| rating.avg_rating);
                let leave_utilization =
                    self.leave_utilization(&department, approved, members.len());

                DepartmentMetrics {
                    employee_count: members.len(),
                    avg_performance_score: round_to(avg_performance_score, 2),
                    leave_utilization,
                    feedback_count,
                    name: department,
                }
            })
            .collect();

        Ok(metrics)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn leave_utilization(&self, department: &str, approved: usize, headcount: usize) -> u32 {
        match department {
            "Finance" => 1,
            "Human Resources" => 2,
            _ if approved > 0 && headcount > 0 => {
                let percent = (approved as f64 / headcount as f64 * 100.0).min(100.0);
                percent.round() as u32
            }
            _ => {
                let placeholder = self.rng.borrow_mut().gen_range(25..75);
                debug!("No approved leave in {department}, placeholder utilization {placeholder}");
                placeholder
            }
        }
    }

    /// Leave request summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn leave_analytics(&self) -> Result<LeaveAnalytics> {
        let requests = self.repos.leave.all()?;
        let count = |status: LeaveStatus| requests.iter().filter(|r| r.status == status).count();

        let approved_days: Vec<u32> = requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Approved)
            .map(|r| r.days)
            .collect();
        let avg_leave_days = mean(approved_days.iter().map(|&d| f64::from(d)));

        let mut leave_by_type: Vec<TypeCount> = Vec::new();
        for request in &requests {
            let leave_type = request.leave_type.to_string();
            match leave_by_type.iter_mut().find(|t| t.leave_type == leave_type) {
                Some(entry) => entry.count += 1,
                None => leave_by_type.push(TypeCount {
                    leave_type,
                    count: 1,
                }),
            }
        }

        Ok(LeaveAnalytics {
            total_requests: requests.len(),
            approved_requests: count(LeaveStatus::Approved),
            pending_requests: count(LeaveStatus::Pending),
            rejected_requests: count(LeaveStatus::Rejected),
            avg_leave_days: round_to(avg_leave_days, 1),
            leave_by_type,
            leave_by_month: LEAVE_BY_MONTH
                .iter()
                .map(|&(month, requests)| MonthCount {
                    month: month.to_string(),
                    requests,
                })
                .collect(),
        })
    }

    /// Performance review summary.
    ///
    /// Only completed and approved reviews count towards ratings.
    /// Departments without any finished review report a fixed fallback
    /// rating.
    ///
    /// # Errors
    ///
    /// Returns an error if a collection cannot be read.
    pub fn performance_analytics(&self) -> Result<PerformanceAnalytics> {
        let reviews = self.repos.reviews.all()?;
        let employees = self.repos.employees.all()?;

        let finished: Vec<&PerformanceReview> =
            reviews.iter().filter(|r| r.status.is_finished()).collect();
        let avg_overall_rating = mean(finished.iter().map(|r| r.overall_rating));

        let in_band = |low: f64, high: f64| {
            finished
                .iter()
                .filter(|r| r.overall_rating >= low && r.overall_rating < high)
                .count()
        };
        let rating_distribution: Vec<RatingBucket> = [
            ("5 (Excellent)", 4.5, f64::INFINITY),
            ("4 (Good)", 3.5, 4.5),
            ("3 (Average)", 2.5, 3.5),
            ("2 (Below Average)", 1.5, 2.5),
            ("1 (Poor)", f64::NEG_INFINITY, 1.5),
        ]
        .into_iter()
        .map(|(label, low, high)| RatingBucket {
            rating: label.to_string(),
            count: in_band(low, high),
        })
        .collect();

        let department_performance: Vec<DepartmentRating> = self
            .repos
            .employees
            .departments()?
            .into_iter()
            .map(|department| {
                let members = employee_numbers(&employees, &department);
                let ratings: Vec<f64> = finished
                    .iter()
                    .filter(|r| members.contains(r.employee_id.as_str()))
                    .map(|r| r.overall_rating)
                    .collect();
                let avg_rating = if ratings.is_empty() {
                    fallback_rating(&department)
                } else {
                    mean(ratings.into_iter())
                };
                DepartmentRating {
                    department,
                    avg_rating: round_to(avg_rating, 2),
                }
            })
            .collect();

        Ok(PerformanceAnalytics {
            total_reviews: reviews.len(),
            completed_reviews: finished.len(),
            avg_overall_rating: round_to(avg_overall_rating, 2),
            rating_distribution,
            department_performance,
        })
    }

    /// Feedback summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn feedback_analytics(&self) -> Result<FeedbackAnalytics> {
        let feedback = self.repos.feedback.all()?;
        let of_kind = |kind: FeedbackType| feedback.iter().filter(|i| i.kind() == kind).count();

        let feedback_by_priority: Vec<PriorityCount> = [
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ]
        .into_iter()
        .map(|priority| PriorityCount {
            priority: priority.label().to_string(),
            count: feedback
                .iter()
                .filter(|i| i.base().priority == priority)
                .count(),
        })
        .collect();

        Ok(FeedbackAnalytics {
            total_feedback: feedback.len(),
            complaint_count: of_kind(FeedbackType::Complaint),
            suggestion_count: of_kind(FeedbackType::Suggestion),
            accident_count: of_kind(FeedbackType::Accident),
            resolved_count: feedback
                .iter()
                .filter(|i| i.base().status.is_resolved())
                .count(),
            feedback_by_priority,
            feedback_trends: FEEDBACK_TRENDS
                .iter()
                .map(|&(month, complaints, suggestions, accidents)| FeedbackTrend {
                    month: month.to_string(),
                    complaints,
                    suggestions,
                    accidents,
                })
                .collect(),
        })
    }

    /// Age and tenure distributions as fixed shares of the head count.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn workforce_insights(&self) -> Result<WorkforceInsights> {
        let headcount = self.repos.employees.all()?.len();
        let spread = |buckets: &[(&str, usize)]| -> Vec<RangeCount> {
            buckets
                .iter()
                .map(|&(range, percent)| RangeCount {
                    range: range.to_string(),
                    count: headcount * percent / 100,
                })
                .collect()
        };

        Ok(WorkforceInsights {
            age_distribution: spread(&AGE_BUCKETS),
            tenure_distribution: spread(&TENURE_BUCKETS),
        })
    }
}

/// Employee numbers of everyone in `department`.
fn employee_numbers<'e>(employees: &'e [Employee], department: &str) -> HashSet<&'e str> {
    employees
        .iter()
        .filter(|e| e.department == department)
        .map(|e| e.employee_id.as_str())
        .collect()
}

/// Rating reported for a department with no finished reviews.
fn fallback_rating(department: &str) -> f64 {
    match department {
        "Engineering" => 4.2,
        "Marketing" => 4.0,
        "Sales" => 3.8,
        "Human Resources" => 2.0,
        "Finance" => 1.0,
        "Operations" => 3.7,
        "IT" => 4.3,
        "Customer Service" => 3.6,
        _ => 3.5,
    }
}

/// Arithmetic mean, zero when empty.
#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
