//! Feedback collection.

use chrono::NaiveDate;

use super::{Collection, Record};
use crate::error::Result;
use crate::fixtures;
use crate::models::{today, FeedbackItem, FeedbackStatus, FeedbackType};
use crate::storage::keys;

impl Record for FeedbackItem {
    const ENTITY: &'static str = "feedback";
    const KEY: &'static str = keys::FEEDBACK;

    fn id(&self) -> &str {
        &self.base().id
    }

    fn set_id(&mut self, id: String) {
        self.base_mut().id = id;
    }

    fn fixtures() -> Vec<Self> {
        fixtures::feedback()
    }

    fn on_create(&mut self, today: NaiveDate) {
        self.base_mut().submitted_date = today;
    }
}

/// Repository of feedback items.
pub type FeedbackRepository<'a> = Collection<'a, FeedbackItem>;

impl Collection<'_, FeedbackItem> {
    /// Items submitted by the employee with number `employee_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn by_employee(&self, employee_id: &str) -> Result<Vec<FeedbackItem>> {
        self.filter(|item| item.base().employee_id == employee_id)
    }

    /// Items of one kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn by_type(&self, kind: FeedbackType) -> Result<Vec<FeedbackItem>> {
        self.filter(|item| item.kind() == kind)
    }

    /// Mark an item resolved today, optionally with a response.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn resolve(&self, id: &str, response: Option<String>) -> Result<Option<FeedbackItem>> {
        self.modify(id, |item| {
            let base = item.base_mut();
            base.status = FeedbackStatus::Resolved;
            base.resolved_date = Some(today());
            if response.is_some() {
                base.response = response;
            }
        })
    }
}
