//! Performance review collection.

use chrono::NaiveDate;

use super::{Collection, Record};
use crate::error::Result;
use crate::fixtures;
use crate::models::{calculate_overall_rating, today, PerformanceReview, ReviewStatus};
use crate::storage::keys;

impl Record for PerformanceReview {
    const ENTITY: &'static str = "performance review";
    const KEY: &'static str = keys::PERFORMANCE_REVIEWS;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn fixtures() -> Vec<Self> {
        fixtures::performance_reviews()
    }

    fn on_create(&mut self, today: NaiveDate) {
        self.created_date = today;
        self.overall_rating = calculate_overall_rating(&self.ratings);
    }

    fn on_update(&mut self) {
        self.overall_rating = calculate_overall_rating(&self.ratings);
    }
}

/// Repository of performance reviews.
pub type PerformanceRepository<'a> = Collection<'a, PerformanceReview>;

impl Collection<'_, PerformanceReview> {
    /// Reviews of the employee with number `employee_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn by_employee(&self, employee_id: &str) -> Result<Vec<PerformanceReview>> {
        self.filter(|review| review.employee_id == employee_id)
    }

    /// Sign off a review, completing it today.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn approve(&self, id: &str) -> Result<Option<PerformanceReview>> {
        self.modify(id, |review| {
            review.status = ReviewStatus::Approved;
            review.completed_date = Some(today());
        })
    }

    /// Send a review back with an optional reason.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn reject(&self, id: &str, reason: Option<String>) -> Result<Option<PerformanceReview>> {
        self.modify(id, |review| {
            review.status = ReviewStatus::Rejected;
            review.rejection_reason = reason;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ratings;
    use crate::storage::Store;

    #[test]
    fn test_add_computes_rating_and_created_date() {
        let store = Store::open_in_memory().unwrap();
        let repo = PerformanceRepository::new(&store);
        let mut review = repo.get("2").unwrap().unwrap();
        review.ratings = Ratings::uniform(4);
        review.overall_rating = 0.0;
        review.status = ReviewStatus::Draft;

        let added = repo.add(review).unwrap();

        assert_eq!(added.created_date, today());
        assert_eq!(format!("{:.2}", added.overall_rating), "4.00");
        assert_ne!(added.id, "2");
    }

    #[test]
    fn test_approve() {
        let store = Store::open_in_memory().unwrap();
        let repo = PerformanceRepository::new(&store);

        let approved = repo.approve("2").unwrap().unwrap();

        assert_eq!(approved.status, ReviewStatus::Approved);
        assert_eq!(approved.completed_date, Some(today()));
        assert_eq!(repo.get("2").unwrap().unwrap().status, ReviewStatus::Approved);
    }

    #[test]
    fn test_reject_with_reason() {
        let store = Store::open_in_memory().unwrap();
        let repo = PerformanceRepository::new(&store);

        let rejected = repo
            .reject("2", Some("Ratings lack evidence".to_string()))
            .unwrap()
            .unwrap();

        assert_eq!(rejected.status, ReviewStatus::Rejected);
        assert_eq!(
            rejected.rejection_reason.as_deref(),
            Some("Ratings lack evidence")
        );
        assert!(repo.reject("missing", None).unwrap().is_none());
    }

    #[test]
    fn test_update_ratings_recomputes_overall() {
        let store = Store::open_in_memory().unwrap();
        let repo = PerformanceRepository::new(&store);
        let mut changes = serde_json::Map::new();
        changes.insert(
            "ratings".to_string(),
            serde_json::to_value(Ratings::uniform(2)).unwrap(),
        );

        let updated = repo.update("1", &changes).unwrap().unwrap();

        assert_eq!(format!("{:.2}", updated.overall_rating), "2.00");
        let stored = repo.get("1").unwrap().unwrap();
        assert_eq!(format!("{:.2}", stored.overall_rating), "2.00");
    }

    #[test]
    fn test_stale_rating_in_update_is_replaced() {
        let store = Store::open_in_memory().unwrap();
        let repo = PerformanceRepository::new(&store);
        let mut changes = serde_json::Map::new();
        changes.insert("overallRating".to_string(), serde_json::json!(1.0));

        let updated = repo.update("2", &changes).unwrap().unwrap();

        assert!(updated.overall_rating > 1.0);
        let expected = calculate_overall_rating(&updated.ratings);
        assert!((updated.overall_rating - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_modify_recomputes_overall() {
        let store = Store::open_in_memory().unwrap();
        let repo = PerformanceRepository::new(&store);

        let modified = repo
            .modify("2", |review| review.ratings = Ratings::uniform(5))
            .unwrap()
            .unwrap();

        assert_eq!(format!("{:.2}", modified.overall_rating), "5.00");
    }

    #[test]
    fn test_by_employee() {
        let store = Store::open_in_memory().unwrap();
        let repo = PerformanceRepository::new(&store);

        let reviews = repo.by_employee("EMP003").unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].employee_name, "Lisa Chen");
    }
}
