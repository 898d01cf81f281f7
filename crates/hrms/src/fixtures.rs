//! Built-in demo data.
//!
//! Collections fall back to these records when nothing has been persisted,
//! and the seed action writes them out verbatim.

use crate::models::{
    ymd, AccidentReport, Complaint, ComplaintCategory, EmergencyContact, Employee,
    EmployeeStatus, FeedbackBase, FeedbackItem, FeedbackStatus, GoalStatus, InjuryType,
    LeaveBalance, LeaveRequest, LeaveStatus, LeaveType, Level, PerformanceGoal,
    PerformanceReview, Priority, Ratings, ReviewStatus, ReviewType, Severity, Suggestion,
    SuggestionCategory, User, UserRole,
};

const MALE_AVATAR: &str = "/professional-male-avatar.png";
const FEMALE_AVATAR: &str = "/professional-female-avatar.png";

struct EmployeeRow {
    id: &'static str,
    employee_id: &'static str,
    name: &'static str,
    phone: &'static str,
    department: &'static str,
    position: &'static str,
    salary: u64,
    hired: (i32, u32, u32),
    manager: Option<&'static str>,
    avatar: &'static str,
    address: &'static str,
    contact: (&'static str, &'static str, &'static str),
}

const EMPLOYEES: &[EmployeeRow] = &[
    EmployeeRow {
        id: "1",
        employee_id: "EMP001",
        name: "John Doe",
        phone: "+1 (555) 123-4567",
        department: "Engineering",
        position: "Software Developer",
        salary: 85_000,
        hired: (2022, 3, 15),
        manager: Some("Sarah Wilson"),
        avatar: MALE_AVATAR,
        address: "123 Main St, New York, NY 10001",
        contact: ("Jane Doe", "+1 (555) 987-6543", "Spouse"),
    },
    EmployeeRow {
        id: "2",
        employee_id: "HR001",
        name: "Sarah Wilson",
        phone: "+1 (555) 234-5678",
        department: "Human Resources",
        position: "HR Manager",
        salary: 95_000,
        hired: (2021, 1, 10),
        manager: None,
        avatar: FEMALE_AVATAR,
        address: "456 Oak Ave, New York, NY 10002",
        contact: ("Michael Wilson", "+1 (555) 876-5432", "Spouse"),
    },
    EmployeeRow {
        id: "3",
        employee_id: "EMP002",
        name: "Mike Johnson",
        phone: "+1 (555) 345-6789",
        department: "Marketing",
        position: "Marketing Specialist",
        salary: 65_000,
        hired: (2022, 7, 20),
        manager: Some("Lisa Chen"),
        avatar: MALE_AVATAR,
        address: "789 Pine St, New York, NY 10003",
        contact: ("Susan Johnson", "+1 (555) 765-4321", "Mother"),
    },
    EmployeeRow {
        id: "4",
        employee_id: "EMP003",
        name: "Lisa Chen",
        phone: "+1 (555) 456-7890",
        department: "Marketing",
        position: "Marketing Manager",
        salary: 80_000,
        hired: (2021, 9, 5),
        manager: None,
        avatar: FEMALE_AVATAR,
        address: "321 Elm St, New York, NY 10004",
        contact: ("David Chen", "+1 (555) 654-3210", "Spouse"),
    },
    EmployeeRow {
        id: "5",
        employee_id: "EMP004",
        name: "Robert Brown",
        phone: "+1 (555) 567-8901",
        department: "Finance",
        position: "Financial Analyst",
        salary: 70_000,
        hired: (2023, 2, 14),
        manager: Some("Sarah Wilson"),
        avatar: MALE_AVATAR,
        address: "654 Maple Ave, New York, NY 10005",
        contact: ("Mary Brown", "+1 (555) 543-2109", "Wife"),
    },
];

/// `first.last@company.com` from a two-part name.
fn work_email(name: &str) -> String {
    format!("{}@company.com", name.to_lowercase().replace(' ', "."))
}

/// Demo employees.
#[must_use]
pub fn employees() -> Vec<Employee> {
    EMPLOYEES
        .iter()
        .map(|row| {
            let (year, month, day) = row.hired;
            let (contact_name, contact_phone, relationship) = row.contact;
            Employee {
                id: row.id.to_string(),
                employee_id: row.employee_id.to_string(),
                name: row.name.to_string(),
                email: work_email(row.name),
                phone: row.phone.to_string(),
                department: row.department.to_string(),
                position: row.position.to_string(),
                salary: row.salary,
                hire_date: ymd(year, month, day),
                status: EmployeeStatus::Active,
                manager: row.manager.map(str::to_string),
                avatar: Some(row.avatar.to_string()),
                address: row.address.to_string(),
                emergency_contact: EmergencyContact {
                    name: contact_name.to_string(),
                    phone: contact_phone.to_string(),
                    relationship: relationship.to_string(),
                },
            }
        })
        .collect()
}

/// Demo leave requests.
#[must_use]
pub fn leave_requests() -> Vec<LeaveRequest> {
    let reviewed = |mut request: LeaveRequest,
                    status: LeaveStatus,
                    date: (i32, u32, u32),
                    comments: &str| {
        request.status = status;
        request.reviewed_by = Some("Sarah Wilson".to_string());
        request.reviewed_date = Some(ymd(date.0, date.1, date.2));
        request.review_comments = Some(comments.to_string());
        request
    };

    vec![
        reviewed(
            leave(
                "1",
                ("EMP001", "John Doe"),
                LeaveType::Vacation,
                ((2024, 3, 15), (2024, 3, 20)),
                4,
                "Family vacation to Hawaii",
                (2024, 2, 15),
            ),
            LeaveStatus::Approved,
            (2024, 2, 16),
            "Approved. Enjoy your vacation!",
        ),
        reviewed(
            leave(
                "2",
                ("EMP002", "Mike Johnson"),
                LeaveType::Sick,
                ((2024, 2, 28), (2024, 3, 1)),
                2,
                "Flu symptoms",
                (2024, 2, 28),
            ),
            LeaveStatus::Approved,
            (2024, 2, 28),
            "Get well soon!",
        ),
        leave(
            "3",
            ("EMP003", "Lisa Chen"),
            LeaveType::Personal,
            ((2024, 3, 25), (2024, 3, 25)),
            1,
            "Personal appointment",
            (2024, 3, 10),
        ),
        leave(
            "4",
            ("EMP001", "John Doe"),
            LeaveType::Vacation,
            ((2024, 4, 10), (2024, 4, 12)),
            3,
            "Long weekend getaway",
            (2024, 3, 5),
        ),
        reviewed(
            leave(
                "5",
                ("EMP004", "Robert Brown"),
                LeaveType::Sick,
                ((2024, 2, 20), (2024, 2, 21)),
                2,
                "Medical appointment and recovery",
                (2024, 2, 19),
            ),
            LeaveStatus::Rejected,
            (2024, 2, 19),
            "Please provide medical certificate for sick leave longer than 1 day.",
        ),
    ]
}

// Day counts are taken as recorded, not recomputed from the range.
fn leave(
    id: &str,
    (employee_id, employee_name): (&str, &str),
    leave_type: LeaveType,
    (start, end): ((i32, u32, u32), (i32, u32, u32)),
    days: u32,
    reason: &str,
    applied: (i32, u32, u32),
) -> LeaveRequest {
    let mut request = LeaveRequest::new(
        employee_id,
        employee_name,
        leave_type,
        ymd(start.0, start.1, start.2),
        ymd(end.0, end.1, end.2),
        reason,
    );
    request.id = id.to_string();
    request.days = days;
    request.applied_date = ymd(applied.0, applied.1, applied.2);
    request
}

/// Demo leave balances.
#[must_use]
pub fn leave_balances() -> Vec<LeaveBalance> {
    [
        ("EMP001", [15, 10, 5, 0, 0, 3]),
        ("EMP002", [20, 8, 3, 0, 0, 3]),
        ("EMP003", [18, 12, 4, 12, 0, 3]),
        ("EMP004", [12, 10, 5, 0, 5, 3]),
    ]
    .into_iter()
    .map(
        |(employee_id, [vacation, sick, personal, maternity, paternity, bereavement])| {
            LeaveBalance {
                employee_id: employee_id.to_string(),
                vacation,
                sick,
                personal,
                maternity,
                paternity,
                bereavement,
            }
        },
    )
    .collect()
}

fn goal(
    id: &str,
    title: &str,
    description: &str,
    target: (i32, u32, u32),
    status: GoalStatus,
    progress: u8,
    weight: u8,
) -> PerformanceGoal {
    PerformanceGoal {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        target_date: ymd(target.0, target.1, target.2),
        status,
        progress,
        weight,
    }
}

fn ratings(values: [u8; 8]) -> Ratings {
    let [
        job_knowledge,
        quality_of_work,
        productivity,
        communication,
        teamwork,
        initiative,
        reliability,
        problem_solving,
    ] = values;
    Ratings {
        job_knowledge,
        quality_of_work,
        productivity,
        communication,
        teamwork,
        initiative,
        reliability,
        problem_solving,
    }
}

/// Demo performance reviews.
///
/// The stored overall ratings are kept as recorded.
#[must_use]
pub fn performance_reviews() -> Vec<PerformanceReview> {
    vec![
        PerformanceReview {
            id: "1".to_string(),
            employee_id: "EMP001".to_string(),
            employee_name: "John Doe".to_string(),
            reviewer_id: "HR001".to_string(),
            reviewer_name: "Sarah Wilson".to_string(),
            review_type: ReviewType::Annual,
            review_period: "2023".to_string(),
            status: ReviewStatus::Approved,
            created_date: ymd(2024, 1, 15),
            due_date: ymd(2024, 2, 15),
            completed_date: Some(ymd(2024, 2, 10)),
            rejection_reason: None,
            ratings: ratings([4, 5, 4, 4, 5, 4, 5, 4]),
            strengths: "Excellent technical skills, strong team player, consistently delivers \
                        high-quality work on time."
                .to_string(),
            areas_for_improvement: "Could take more initiative in leading projects and \
                                    mentoring junior developers."
                .to_string(),
            goals: vec![
                goal(
                    "g1",
                    "Lead a major project",
                    "Take ownership of a significant development project from planning to deployment",
                    (2024, 6, 30),
                    GoalStatus::InProgress,
                    60,
                    40,
                ),
                goal(
                    "g2",
                    "Mentor junior developers",
                    "Provide guidance and support to 2-3 junior team members",
                    (2024, 12, 31),
                    GoalStatus::InProgress,
                    30,
                    30,
                ),
                goal(
                    "g3",
                    "Complete advanced certification",
                    "Obtain AWS Solutions Architect certification",
                    (2024, 9, 30),
                    GoalStatus::NotStarted,
                    0,
                    30,
                ),
            ],
            overall_comments: "John is a valuable team member with strong technical skills. \
                               Focus on leadership development for career growth."
                .to_string(),
            employee_comments: Some(
                "Thank you for the feedback. I'm excited to take on more leadership \
                 responsibilities."
                    .to_string(),
            ),
            overall_rating: 4.25,
        },
        PerformanceReview {
            id: "2".to_string(),
            employee_id: "EMP002".to_string(),
            employee_name: "Mike Johnson".to_string(),
            reviewer_id: "HR001".to_string(),
            reviewer_name: "Sarah Wilson".to_string(),
            review_type: ReviewType::Quarterly,
            review_period: "Q1 2024".to_string(),
            status: ReviewStatus::PendingApproval,
            created_date: ymd(2024, 3, 1),
            due_date: ymd(2024, 3, 31),
            completed_date: None,
            rejection_reason: None,
            ratings: ratings([3, 4, 3, 4, 4, 3, 4, 3]),
            strengths: "Great communication skills, works well with clients, creative \
                        problem-solving approach."
                .to_string(),
            areas_for_improvement: "Need to improve time management and meet deadlines more \
                                    consistently."
                .to_string(),
            goals: vec![
                goal(
                    "g4",
                    "Improve project delivery",
                    "Complete all assigned projects within agreed timelines",
                    (2024, 6, 30),
                    GoalStatus::InProgress,
                    40,
                    50,
                ),
                goal(
                    "g5",
                    "Client satisfaction",
                    "Maintain client satisfaction score above 4.5/5",
                    (2024, 6, 30),
                    GoalStatus::InProgress,
                    70,
                    50,
                ),
            ],
            overall_comments: "Mike shows good potential. Focus on time management and project \
                               planning skills."
                .to_string(),
            employee_comments: None,
            overall_rating: 3.5,
        },
        PerformanceReview {
            id: "3".to_string(),
            employee_id: "EMP003".to_string(),
            employee_name: "Lisa Chen".to_string(),
            reviewer_id: "HR001".to_string(),
            reviewer_name: "Sarah Wilson".to_string(),
            review_type: ReviewType::Annual,
            review_period: "2023".to_string(),
            status: ReviewStatus::Approved,
            created_date: ymd(2024, 1, 20),
            due_date: ymd(2024, 2, 20),
            completed_date: Some(ymd(2024, 2, 18)),
            rejection_reason: None,
            ratings: ratings([5, 5, 4, 5, 4, 5, 5, 5]),
            strengths: "Outstanding leadership skills, excellent strategic thinking, drives \
                        results consistently."
                .to_string(),
            areas_for_improvement: "Could delegate more effectively to develop team members."
                .to_string(),
            goals: vec![
                goal(
                    "g6",
                    "Team development",
                    "Implement team development program and succession planning",
                    (2024, 8, 31),
                    GoalStatus::InProgress,
                    50,
                    40,
                ),
                goal(
                    "g7",
                    "Revenue growth",
                    "Achieve 25% revenue growth in marketing department",
                    (2024, 12, 31),
                    GoalStatus::InProgress,
                    35,
                    60,
                ),
            ],
            overall_comments: "Lisa is an exceptional performer and leader. Ready for additional \
                               responsibilities."
                .to_string(),
            employee_comments: Some(
                "I appreciate the recognition and look forward to contributing more to the \
                 organization."
                    .to_string(),
            ),
            overall_rating: 4.75,
        },
    ]
}

fn base(
    id: &str,
    (employee_id, employee_name): (&str, &str),
    title: &str,
    description: &str,
    status: FeedbackStatus,
    priority: Priority,
    submitted: (i32, u32, u32),
) -> FeedbackBase {
    FeedbackBase {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        employee_name: employee_name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        submitted_date: ymd(submitted.0, submitted.1, submitted.2),
        assigned_to: None,
        resolved_date: None,
        response: None,
        attachments: Vec::new(),
    }
}

/// Demo feedback items.
#[must_use]
pub fn feedback() -> Vec<FeedbackItem> {
    let mut noise = base(
        "1",
        ("EMP001", "John Doe"),
        "Excessive noise in open office",
        "The noise level in the open office area has become disruptive, affecting \
         concentration and productivity. Phone calls and conversations are constantly audible.",
        FeedbackStatus::InReview,
        Priority::Medium,
        (2024, 3, 10),
    );
    noise.assigned_to = Some("Sarah Wilson".to_string());

    let mut slip = base(
        "3",
        ("EMP003", "Lisa Chen"),
        "Slip and fall in cafeteria",
        "Slipped on wet floor near the coffee station. Floor was recently mopped but no \
         warning signs were present.",
        FeedbackStatus::Resolved,
        Priority::High,
        (2024, 3, 5),
    );
    slip.resolved_date = Some(ymd(2024, 3, 6));
    slip.response = Some(
        "Implemented new policy requiring warning signs during cleaning. Additional non-slip \
         mats installed."
            .to_string(),
    );

    let mut tools = base(
        "5",
        ("EMP001", "John Doe"),
        "Upgrade development tools",
        "Investing in better development tools and faster computers would significantly \
         improve developer productivity and code quality.",
        FeedbackStatus::InReview,
        Priority::Medium,
        (2024, 3, 7),
    );
    tools.assigned_to = Some("Sarah Wilson".to_string());

    vec![
        FeedbackItem::Complaint(Complaint {
            base: noise,
            category: ComplaintCategory::Workplace,
            anonymous: false,
        }),
        FeedbackItem::Suggestion(Suggestion {
            base: base(
                "2",
                ("EMP002", "Mike Johnson"),
                "Implement flexible working hours",
                "Allowing flexible start and end times would improve work-life balance and \
                 could increase productivity. Many employees have different peak performance \
                 hours.",
                FeedbackStatus::Open,
                Priority::Medium,
                (2024, 3, 8),
            ),
            category: SuggestionCategory::Workplace,
            estimated_impact: Level::High,
            implementation_cost: Level::Low,
        }),
        FeedbackItem::Accident(AccidentReport {
            base: slip,
            incident_date: ymd(2024, 3, 5),
            location: "Employee Cafeteria - Coffee Station".to_string(),
            severity: Severity::Minor,
            injury_type: InjuryType::Minor,
            witness_names: Some("Robert Brown, Jane Smith".to_string()),
            medical_attention: false,
            reported_to_authorities: false,
            immediate_actions: "Applied ice pack, cleaned up spill, placed warning signs"
                .to_string(),
        }),
        FeedbackItem::Complaint(Complaint {
            base: base(
                "4",
                ("EMP004", "Robert Brown"),
                "Inadequate parking spaces",
                "There are insufficient parking spaces for all employees, causing daily stress \
                 and tardiness issues.",
                FeedbackStatus::Open,
                Priority::Low,
                (2024, 3, 12),
            ),
            category: ComplaintCategory::Workplace,
            anonymous: false,
        }),
        FeedbackItem::Suggestion(Suggestion {
            base: tools,
            category: SuggestionCategory::Technology,
            estimated_impact: Level::High,
            implementation_cost: Level::High,
        }),
    ]
}

/// Users that can sign in.
#[must_use]
pub fn demo_users() -> Vec<User> {
    [
        ("1", "John Doe", UserRole::Employee, "EMP001", "Engineering", "Software Developer", MALE_AVATAR),
        ("2", "Sarah Wilson", UserRole::Hr, "HR001", "Human Resources", "HR Manager", FEMALE_AVATAR),
        ("3", "Mike Johnson", UserRole::Employee, "EMP002", "Marketing", "Marketing Specialist", MALE_AVATAR),
    ]
    .into_iter()
    .map(|(id, name, role, employee_id, department, position, avatar)| User {
        id: id.to_string(),
        email: work_email(name),
        name: name.to_string(),
        role,
        employee_id: employee_id.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        avatar: Some(avatar.to_string()),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::calculate_overall_rating;

    #[test]
    fn test_employee_fixtures() {
        let employees = employees();
        assert_eq!(employees.len(), 5);
        assert_eq!(employees[0].email, "john.doe@company.com");
        assert_eq!(employees[4].department, "Finance");
        assert!(employees[1].manager.is_none());
    }

    #[test]
    fn test_fixture_ids_unique() {
        let ids: HashSet<_> = employees().into_iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<_> = feedback().into_iter().map(|f| f.base().id.clone()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_leave_fixtures() {
        let requests = leave_requests();
        assert_eq!(requests.len(), 5);
        assert_eq!(requests[0].status, LeaveStatus::Approved);
        assert_eq!(requests[0].days, 4);
        assert_eq!(requests[2].status, LeaveStatus::Pending);
        assert!(requests[2].reviewed_by.is_none());
        assert_eq!(requests[4].status, LeaveStatus::Rejected);
    }

    #[test]
    fn test_balance_fixtures() {
        let balances = leave_balances();
        assert_eq!(balances.len(), 4);
        assert_eq!(balances[2].maternity, 12);
        assert_eq!(balances[3].paternity, 5);
    }

    #[test]
    fn test_review_fixtures() {
        let reviews = performance_reviews();
        assert_eq!(reviews.len(), 3);
        // Stored scores are kept even where they differ from the ratings mean
        assert!((reviews[0].overall_rating - 4.25).abs() < f64::EPSILON);
        assert!((calculate_overall_rating(&reviews[0].ratings) - 4.38).abs() < f64::EPSILON);
        assert!((calculate_overall_rating(&reviews[2].ratings) - 4.75).abs() < f64::EPSILON);
        assert_eq!(reviews[1].status, ReviewStatus::PendingApproval);
    }

    #[test]
    fn test_demo_users() {
        let users = demo_users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[1].email, "sarah.wilson@company.com");
        assert_eq!(users[1].role, UserRole::Hr);
    }
}
