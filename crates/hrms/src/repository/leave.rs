//! Leave request collection.

use chrono::NaiveDate;
use tracing::debug;

use super::{Collection, LeaveBalanceRepository, Record};
use crate::error::{Error, Result};
use crate::fixtures;
use crate::models::{today, LeaveRequest, LeaveStatus};
use crate::storage::keys;

impl Record for LeaveRequest {
    const ENTITY: &'static str = "leave request";
    const KEY: &'static str = keys::LEAVE_REQUESTS;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn fixtures() -> Vec<Self> {
        fixtures::leave_requests()
    }

    fn on_create(&mut self, today: NaiveDate) {
        self.applied_date = today;
    }
}

/// Repository of leave requests.
pub type LeaveRepository<'a> = Collection<'a, LeaveRequest>;

impl Collection<'_, LeaveRequest> {
    /// Requests filed by the employee with number `employee_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn by_employee(&self, employee_id: &str) -> Result<Vec<LeaveRequest>> {
        self.filter(|request| request.employee_id == employee_id)
    }

    /// Requests with the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn by_status(&self, status: LeaveStatus) -> Result<Vec<LeaveRequest>> {
        self.filter(|request| request.status == status)
    }

    /// File a new request after checking the employee's leave balance.
    ///
    /// An employee without a balance record has nothing available. With
    /// `force` set the request is filed regardless.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientBalance`] if the request exceeds the
    /// remaining days and `force` is not set, or a storage error.
    pub fn file(&self, request: LeaveRequest, force: bool) -> Result<LeaveRequest> {
        let balance = LeaveBalanceRepository::new(self.store)
            .balance_for(&request.employee_id)?
            .unwrap_or_default();
        if !force && !balance.is_sufficient(request.leave_type, request.days) {
            return Err(Error::InsufficientBalance {
                employee_id: request.employee_id,
                leave_type: request.leave_type.label(),
                requested: request.days,
                available: balance.available(request.leave_type),
            });
        }
        if force {
            debug!(
                "Filing {} day(s) of {} for {} without a balance check",
                request.days, request.leave_type, request.employee_id
            );
        }
        self.add(request)
    }

    /// Record a reviewer's decision on a request.
    ///
    /// Overwrites whatever status the request had; there is no transition
    /// check. The review date is set to today.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn review(
        &self,
        id: &str,
        status: LeaveStatus,
        reviewer: &str,
        comments: Option<String>,
    ) -> Result<Option<LeaveRequest>> {
        self.modify(id, |request| {
            request.status = status;
            request.reviewed_by = Some(reviewer.to_string());
            request.reviewed_date = Some(today());
            request.review_comments = comments;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ymd, LeaveType};
    use crate::storage::Store;

    #[test]
    fn test_add_stamps_applied_date() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveRepository::new(&store);
        let request = LeaveRequest::new(
            "EMP002",
            "Mike Johnson",
            LeaveType::Personal,
            ymd(2024, 5, 6),
            ymd(2024, 5, 7),
            "Moving house",
        );

        let added = repo.add(request).unwrap();

        assert_eq!(added.applied_date, today());
        assert_eq!(added.status, LeaveStatus::Pending);
        assert_eq!(added.days, 2);
        assert_eq!(repo.by_employee("EMP002").unwrap().len(), 2);
    }

    #[test]
    fn test_review_sets_reviewer_fields() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveRepository::new(&store);

        let reviewed = repo
            .review(
                "3",
                LeaveStatus::Approved,
                "Sarah Wilson",
                Some("Fine".to_string()),
            )
            .unwrap()
            .unwrap();

        assert_eq!(reviewed.status, LeaveStatus::Approved);
        assert_eq!(reviewed.reviewed_by.as_deref(), Some("Sarah Wilson"));
        assert_eq!(reviewed.reviewed_date, Some(today()));
        assert_eq!(reviewed.review_comments.as_deref(), Some("Fine"));
        assert_eq!(reviewed.reason, "Personal appointment");
    }

    #[test]
    fn test_review_missing() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveRepository::new(&store);

        let result = repo
            .review("nope", LeaveStatus::Rejected, "Sarah Wilson", None)
            .unwrap();
        assert!(result.is_none());
        assert!(!store.contains(keys::LEAVE_REQUESTS).unwrap());
    }

    fn vacation(employee_id: &str, days: u32) -> LeaveRequest {
        let start = ymd(2024, 8, 1);
        let end = start + chrono::Days::new(u64::from(days) - 1);
        LeaveRequest::new(employee_id, "Someone", LeaveType::Vacation, start, end, "")
    }

    #[test]
    fn test_file_within_balance() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveRepository::new(&store);

        // EMP001 has 15 vacation days
        let filed = repo.file(vacation("EMP001", 15), false).unwrap();

        assert_eq!(filed.days, 15);
        assert!(repo.get(&filed.id).unwrap().is_some());
    }

    #[test]
    fn test_file_refuses_insufficient_balance() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveRepository::new(&store);

        let err = repo.file(vacation("EMP001", 16), false).unwrap_err();

        assert!(err.is_insufficient_balance());
        match err {
            Error::InsufficientBalance {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 16);
                assert_eq!(available, 15);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!store.contains(keys::LEAVE_REQUESTS).unwrap());
    }

    #[test]
    fn test_file_force_skips_balance_check() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveRepository::new(&store);

        let filed = repo.file(vacation("EMP001", 16), true).unwrap();

        assert_eq!(filed.status, LeaveStatus::Pending);
        assert_eq!(repo.by_employee("EMP001").unwrap().len(), 3);
    }

    #[test]
    fn test_file_without_balance_record_has_nothing_available() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveRepository::new(&store);

        let err = repo.file(vacation("EMP999", 1), false).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientBalance { available: 0, .. }
        ));

        assert!(repo.file(vacation("EMP999", 1), true).is_ok());
    }

    #[test]
    fn test_by_status() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveRepository::new(&store);

        assert_eq!(repo.by_status(LeaveStatus::Pending).unwrap().len(), 2);
        assert_eq!(repo.by_status(LeaveStatus::Cancelled).unwrap().len(), 0);
    }
}
