//! Record repositories over the document store.
//!
//! Each collection is stored as one JSON array. Every call reads the whole
//! array; mutations modify it in memory and write the whole array back.
//! When nothing has been persisted for a collection, reads fall back to the
//! built-in demo records.

mod balances;
mod employees;
mod feedback;
mod leave;
mod performance;

use std::marker::PhantomData;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::today;
use crate::storage::Store;

pub use balances::LeaveBalanceRepository;
pub use employees::EmployeeRepository;
pub use feedback::FeedbackRepository;
pub use leave::LeaveRepository;
pub use performance::PerformanceRepository;

/// A record that lives in a stored collection.
pub trait Record: Serialize + DeserializeOwned + Clone + std::fmt::Debug {
    /// Entity name used in log lines and errors.
    const ENTITY: &'static str;

    /// Storage key of the collection.
    const KEY: &'static str;

    /// Storage identifier.
    fn id(&self) -> &str;

    /// Replace the storage identifier.
    fn set_id(&mut self, id: String);

    /// Records returned when nothing has been persisted.
    fn fixtures() -> Vec<Self>;

    /// Stamp creation fields before the record is first stored.
    fn on_create(&mut self, _today: NaiveDate) {}

    /// Refresh derived fields after an update or modification.
    fn on_update(&mut self) {}
}

/// Generic read-modify-write access to one collection.
#[derive(Debug)]
pub struct Collection<'a, T> {
    store: &'a Store,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<'_, T> {}

impl<'a, T: Record> Collection<'a, T> {
    /// Create a repository over `store`.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Every record, or the demo records if none have been persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database read fails or the stored document
    /// is malformed.
    pub fn all(&self) -> Result<Vec<T>> {
        match self.store.load::<Vec<T>>(T::KEY)? {
            Some(records) => Ok(records),
            None => {
                debug!("No stored {} collection, using demo records", T::ENTITY);
                Ok(T::fixtures())
            }
        }
    }

    /// Find a record by storage identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.all()?.into_iter().find(|record| record.id() == id))
    }

    /// Records matching `predicate`, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    /// Append a record under a freshly generated identifier.
    ///
    /// Whatever identifier the record carried is replaced. Creation stamps
    /// are set to today.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn add(&self, mut record: T) -> Result<T> {
        let mut records = self.all()?;
        record.set_id(Uuid::new_v4().to_string());
        record.on_create(today());
        records.push(record.clone());
        self.store.save(T::KEY, &records)?;
        debug!("Added {} {}", T::ENTITY, record.id());
        Ok(record)
    }

    /// Merge the fields in `changes` into the record with `id`.
    ///
    /// Fields absent from `changes` keep their values. An `id` entry in
    /// `changes` is ignored. Returns `None`, leaving the collection
    /// untouched, if no record has that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUpdate`] if the merged record no longer
    /// fits the record shape, or a storage error.
    pub fn update(&self, id: &str, changes: &Map<String, Value>) -> Result<Option<T>> {
        let mut records = self.all()?;
        let Some(index) = records.iter().position(|record| record.id() == id) else {
            debug!("No {} {} to update", T::ENTITY, id);
            return Ok(None);
        };

        let mut merged = serde_json::to_value(&records[index])?;
        if let Value::Object(fields) = &mut merged {
            for (field, value) in changes {
                if field != "id" {
                    fields.insert(field.clone(), value.clone());
                }
            }
        }

        let mut updated: T = serde_json::from_value(merged)
            .map_err(|e| Error::invalid_update(T::ENTITY, id, e.to_string()))?;
        updated.on_update();
        records[index] = updated.clone();
        self.store.save(T::KEY, &records)?;
        debug!("Updated {} {}", T::ENTITY, id);
        Ok(Some(updated))
    }

    /// Apply `change` to the record with `id` and store the result.
    ///
    /// Returns `None` if no record has that identifier. The identifier is
    /// restored if `change` alters it.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn modify(&self, id: &str, change: impl FnOnce(&mut T)) -> Result<Option<T>> {
        let mut records = self.all()?;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };

        change(record);
        record.set_id(id.to_string());
        record.on_update();
        let updated = record.clone();
        self.store.save(T::KEY, &records)?;
        debug!("Modified {} {}", T::ENTITY, id);
        Ok(Some(updated))
    }

    /// Remove the record with `id`.
    ///
    /// Returns `false`, without writing, if no record has that identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut records = self.all()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Ok(false);
        }

        self.store.save(T::KEY, &records)?;
        debug!("Deleted {} {}", T::ENTITY, id);
        Ok(true)
    }

    /// Overwrite the stored collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn replace_all(&self, records: &[T]) -> Result<()> {
        self.store.save(T::KEY, records)
    }

    /// Drop the stored collection so reads fall back to the demo records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn clear(&self) -> Result<bool> {
        self.store.remove(T::KEY)
    }
}

/// All repositories over one store.
#[derive(Debug, Clone, Copy)]
pub struct Repositories<'a> {
    /// Employees.
    pub employees: EmployeeRepository<'a>,
    /// Leave requests.
    pub leave: LeaveRepository<'a>,
    /// Leave balances.
    pub balances: LeaveBalanceRepository<'a>,
    /// Performance reviews.
    pub reviews: PerformanceRepository<'a>,
    /// Feedback items.
    pub feedback: FeedbackRepository<'a>,
}

impl<'a> Repositories<'a> {
    /// Build every repository over `store`.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self {
            employees: EmployeeRepository::new(store),
            leave: LeaveRepository::new(store),
            balances: LeaveBalanceRepository::new(store),
            reviews: PerformanceRepository::new(store),
            feedback: FeedbackRepository::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;
    use crate::models::{Employee, EmployeeStatus};

    fn create_test_store() -> Store {
        Store::open_in_memory().expect("failed to create test store")
    }

    fn changes(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_all_falls_back_to_fixtures() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);

        assert_eq!(repo.all().unwrap().len(), 5);
        assert!(!store.contains(Employee::KEY).unwrap());
    }

    #[test]
    fn test_empty_stored_collection_is_not_replaced() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);
        repo.replace_all(&[]).unwrap();

        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn test_add_assigns_fresh_id() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);
        let mut template = repo.get("1").unwrap().unwrap();
        template.name = "New Hire".to_string();

        let first = repo.add(template.clone()).unwrap();
        let second = repo.add(template).unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all.len(), 7);
        let ids: HashSet<_> = all.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), 7);
        assert_ne!(first.id, "1");
        assert_ne!(first.id, second.id);
        assert_eq!(repo.get(&first.id).unwrap().unwrap().name, "New Hire");
    }

    #[test]
    fn test_update_merges_fields() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);
        let before = repo.get("3").unwrap().unwrap();

        let updated = repo
            .update("3", &changes(json!({"position": "Senior Specialist", "salary": 70000})))
            .unwrap()
            .unwrap();

        assert_eq!(updated.position, "Senior Specialist");
        assert_eq!(updated.salary, 70_000);
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.emergency_contact, before.emergency_contact);
        assert_eq!(repo.get("3").unwrap().unwrap(), updated);
    }

    #[test]
    fn test_update_ignores_id() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);

        let updated = repo
            .update("2", &changes(json!({"id": "99", "status": "inactive"})))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.status, EmployeeStatus::Inactive);
        assert!(repo.get("99").unwrap().is_none());
    }

    #[test]
    fn test_update_missing_leaves_collection() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);
        let before = repo.all().unwrap();

        let result = repo
            .update("missing", &changes(json!({"name": "Ghost"})))
            .unwrap();

        assert!(result.is_none());
        assert_eq!(repo.all().unwrap(), before);
        assert!(!store.contains(Employee::KEY).unwrap());
    }

    #[test]
    fn test_update_with_wrong_shape() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);

        let err = repo
            .update("1", &changes(json!({"salary": "a lot"})))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidUpdate { entity: "employee", .. }));
        assert_eq!(repo.get("1").unwrap().unwrap().salary, 85_000);
    }

    #[test]
    fn test_modify_keeps_id() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);

        let updated = repo
            .modify("1", |employee| {
                employee.id = "other".to_string();
                employee.department = "Platform".to_string();
            })
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(repo.get("1").unwrap().unwrap().department, "Platform");
        assert!(repo.modify("missing", |_| {}).unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);

        assert!(repo.delete("4").unwrap());
        assert_eq!(repo.all().unwrap().len(), 4);
        assert!(repo.get("4").unwrap().is_none());

        let before = repo.all().unwrap();
        assert!(!repo.delete("4").unwrap());
        assert_eq!(repo.all().unwrap(), before);
    }

    #[test]
    fn test_clear_restores_fixtures() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);
        repo.delete("1").unwrap();

        assert!(repo.clear().unwrap());
        assert_eq!(repo.all().unwrap().len(), 5);
        assert!(!repo.clear().unwrap());
    }

    #[test]
    fn test_malformed_collection_is_an_error() {
        let store = create_test_store();
        store.put_raw(Employee::KEY, "[{\"id\": 1}]").unwrap();
        let repo = Collection::<Employee>::new(&store);

        assert!(repo.all().unwrap_err().is_malformed_document());
    }

    #[test]
    fn test_filter() {
        let store = create_test_store();
        let repo = Collection::<Employee>::new(&store);

        let managed = repo.filter(|e| e.manager.is_some()).unwrap();
        assert_eq!(managed.len(), 3);
    }
}
