//! Demo data administration: seeding, clearing, and first-run setup.

use tracing::info;

use crate::error::Result;
use crate::fixtures;
use crate::repository::Repositories;
use crate::storage::{keys, Store};

/// Overwrite every collection with the demo records and sign out.
///
/// # Errors
///
/// Returns an error if any write fails. Collections written before the
/// failure keep their new contents.
pub fn seed_demo_data(store: &Store) -> Result<()> {
    let repos = Repositories::new(store);
    repos.employees.replace_all(&fixtures::employees())?;
    repos.leave.replace_all(&fixtures::leave_requests())?;
    repos.balances.replace_all(&fixtures::leave_balances())?;
    repos.reviews.replace_all(&fixtures::performance_reviews())?;
    repos.feedback.replace_all(&fixtures::feedback())?;
    store.remove(keys::CURRENT_USER)?;

    info!("Seeded demo data");
    Ok(())
}

/// Remove every collection and the session user.
///
/// Reads fall back to the demo records afterwards. Onboarding state is
/// left alone.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn clear_all_data(store: &Store) -> Result<()> {
    for key in keys::COLLECTIONS {
        store.remove(key)?;
    }
    store.remove(keys::CURRENT_USER)?;

    info!("Cleared all stored data");
    Ok(())
}

/// Seed the demo data if no employee collection has been stored yet.
///
/// Returns `true` if it seeded.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn initialize(store: &Store) -> Result<bool> {
    if store.contains(keys::EMPLOYEES)? {
        return Ok(false);
    }
    seed_demo_data(store)?;
    Ok(true)
}
