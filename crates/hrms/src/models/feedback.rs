//! Feedback items: complaints, suggestions, and accident reports.
//!
//! The three kinds share a common base and are stored together in one
//! collection, discriminated by a `type` field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discriminant of a [`FeedbackItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackType {
    /// A complaint.
    Complaint,
    /// An improvement suggestion.
    Suggestion,
    /// An accident report.
    Accident,
}

impl FeedbackType {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Complaint => "Complaint",
            Self::Suggestion => "Suggestion",
            Self::Accident => "Accident Report",
        }
    }
}

impl std::fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complaint => write!(f, "complaint"),
            Self::Suggestion => write!(f, "suggestion"),
            Self::Accident => write!(f, "accident"),
        }
    }
}

/// Handling status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    /// Newly submitted.
    Open,
    /// Being looked at.
    InReview,
    /// Addressed.
    Resolved,
    /// Closed without further action.
    Closed,
}

impl FeedbackStatus {
    /// Open and in-review items still need attention.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::InReview)
    }

    /// Resolved and closed items are done.
    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl std::fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::InReview => write!(f, "in-review"),
            Self::Resolved => write!(f, "resolved"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Urgency of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Critical.
    Critical,
}

impl Priority {
    /// Capitalized label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Severity of an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Minor.
    Minor,
    /// Moderate.
    Moderate,
    /// Major.
    Major,
    /// Critical.
    Critical,
}

/// Injury sustained in an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjuryType {
    /// No injury.
    #[serde(rename = "none")]
    NoInjury,
    /// Minor injury.
    Minor,
    /// Major injury.
    Major,
    /// Fatal.
    Fatal,
}

/// Three-step scale used for suggestion impact and cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
}

/// Complaint subject area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintCategory {
    /// Workplace conditions.
    Workplace,
    /// Harassment.
    Harassment,
    /// Discrimination.
    Discrimination,
    /// Company policy.
    Policy,
    /// Management.
    Management,
    /// Anything else.
    Other,
}

/// Suggestion subject area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionCategory {
    /// Processes.
    Process,
    /// Tools and technology.
    Technology,
    /// Workplace conditions.
    Workplace,
    /// Benefits.
    Benefits,
    /// Training.
    Training,
    /// Anything else.
    Other,
}

/// Fields shared by every feedback kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackBase {
    /// Storage identifier.
    pub id: String,
    /// Employee number of the submitter.
    pub employee_id: String,
    /// Submitter's name.
    pub employee_name: String,
    /// Short title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Handling status.
    pub status: FeedbackStatus,
    /// Urgency.
    pub priority: Priority,
    /// Submission date.
    pub submitted_date: NaiveDate,
    /// Person handling it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// When it was resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<NaiveDate>,
    /// Response to the submitter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Attachment references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

/// A complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Shared fields.
    #[serde(flatten)]
    pub base: FeedbackBase,
    /// Subject area.
    pub category: ComplaintCategory,
    /// Hide the submitter's identity.
    pub anonymous: bool,
}

/// An improvement suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Shared fields.
    #[serde(flatten)]
    pub base: FeedbackBase,
    /// Subject area.
    pub category: SuggestionCategory,
    /// Expected impact.
    pub estimated_impact: Level,
    /// Expected cost.
    pub implementation_cost: Level,
}

/// A workplace accident report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentReport {
    /// Shared fields.
    #[serde(flatten)]
    pub base: FeedbackBase,
    /// When the incident happened.
    pub incident_date: NaiveDate,
    /// Where it happened.
    pub location: String,
    /// How serious it was.
    pub severity: Severity,
    /// Injury sustained.
    pub injury_type: InjuryType,
    /// Witnesses, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness_names: Option<String>,
    /// Whether medical attention was needed.
    pub medical_attention: bool,
    /// Whether it was reported to authorities.
    pub reported_to_authorities: bool,
    /// Actions taken on the spot.
    #[serde(default)]
    pub immediate_actions: String,
}

/// Any feedback item, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FeedbackItem {
    /// A complaint.
    Complaint(Complaint),
    /// A suggestion.
    Suggestion(Suggestion),
    /// An accident report.
    Accident(AccidentReport),
}

impl FeedbackItem {
    /// Which kind of feedback this is.
    #[must_use]
    pub fn kind(&self) -> FeedbackType {
        match self {
            Self::Complaint(_) => FeedbackType::Complaint,
            Self::Suggestion(_) => FeedbackType::Suggestion,
            Self::Accident(_) => FeedbackType::Accident,
        }
    }

    /// Shared fields.
    #[must_use]
    pub fn base(&self) -> &FeedbackBase {
        match self {
            Self::Complaint(c) => &c.base,
            Self::Suggestion(s) => &s.base,
            Self::Accident(a) => &a.base,
        }
    }

    /// Shared fields, mutably.
    pub fn base_mut(&mut self) -> &mut FeedbackBase {
        match self {
            Self::Complaint(c) => &mut c.base,
            Self::Suggestion(s) => &mut s.base,
            Self::Accident(a) => &mut a.base,
        }
    }

    /// Name to show for the submitter; anonymous complaints hide it.
    #[must_use]
    pub fn display_submitter(&self) -> &str {
        match self {
            Self::Complaint(c) if c.anonymous => "Anonymous",
            _ => &self.base().employee_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUGGESTION_JSON: &str = r#"{
        "id": "2",
        "type": "suggestion",
        "employeeId": "EMP002",
        "employeeName": "Mike Johnson",
        "title": "Implement flexible working hours",
        "description": "Flexible start and end times",
        "status": "open",
        "priority": "medium",
        "submittedDate": "2024-03-08",
        "category": "workplace",
        "estimatedImpact": "high",
        "implementationCost": "low"
    }"#;

    #[test]
    fn test_deserialize_tagged_suggestion() {
        let item: FeedbackItem = serde_json::from_str(SUGGESTION_JSON).unwrap();
        assert_eq!(item.kind(), FeedbackType::Suggestion);
        assert_eq!(item.base().employee_id, "EMP002");
        match item {
            FeedbackItem::Suggestion(s) => {
                assert_eq!(s.category, SuggestionCategory::Workplace);
                assert_eq!(s.estimated_impact, Level::High);
            }
            other => panic!("expected suggestion, got {other:?}"),
        }
    }

    #[test]
    fn test_serialize_keeps_flat_shape() {
        let item: FeedbackItem = serde_json::from_str(SUGGESTION_JSON).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "suggestion");
        assert_eq!(value["title"], "Implement flexible working hours");
        assert_eq!(value["implementationCost"], "low");
        assert!(value.get("base").is_none());
        assert!(value.get("attachments").is_none());
    }

    #[test]
    fn test_accident_injury_none() {
        let json = r#"{
            "id": "9",
            "type": "accident",
            "employeeId": "EMP003",
            "employeeName": "Lisa Chen",
            "title": "Near miss",
            "description": "Box fell from shelf",
            "status": "open",
            "priority": "low",
            "submittedDate": "2024-03-05",
            "incidentDate": "2024-03-05",
            "location": "Warehouse",
            "severity": "minor",
            "injuryType": "none",
            "medicalAttention": false,
            "reportedToAuthorities": false,
            "immediateActions": "Restacked shelf"
        }"#;
        let item: FeedbackItem = serde_json::from_str(json).unwrap();
        match item {
            FeedbackItem::Accident(a) => assert_eq!(a.injury_type, InjuryType::NoInjury),
            other => panic!("expected accident, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = SUGGESTION_JSON.replace(r#""suggestion""#, r#""praise""#);
        assert!(serde_json::from_str::<FeedbackItem>(&json).is_err());
    }

    #[test]
    fn test_status_helpers() {
        assert!(FeedbackStatus::Open.is_open());
        assert!(FeedbackStatus::InReview.is_open());
        assert!(!FeedbackStatus::Resolved.is_open());
        assert!(FeedbackStatus::Closed.is_resolved());
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(FeedbackType::Accident.label(), "Accident Report");
        assert_eq!(FeedbackType::Complaint.to_string(), "complaint");
        assert_eq!(Priority::Critical.label(), "Critical");
    }
}
