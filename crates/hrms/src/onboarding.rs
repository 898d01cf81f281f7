//! Per-user onboarding tour state.

use chrono::Utc;
use tracing::warn;

use crate::error::Result;
use crate::models::OnboardingState;
use crate::storage::{keys, Store};

/// Onboarding state over a store, one document per user.
#[derive(Debug, Clone, Copy)]
pub struct Onboarding<'a> {
    store: &'a Store,
}

impl<'a> Onboarding<'a> {
    /// Create an onboarding view over `store`.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    fn key(user_id: &str) -> String {
        format!("{}{user_id}", keys::ONBOARDING_PREFIX)
    }

    /// State for `user_id`.
    ///
    /// A missing or unreadable document means the tour has not been taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the database read fails.
    pub fn state(&self, user_id: &str) -> Result<OnboardingState> {
        match self.store.load::<OnboardingState>(&Self::key(user_id)) {
            Ok(state) => Ok(state.unwrap_or_default()),
            Err(e) if e.is_malformed_document() => {
                warn!("Ignoring onboarding state for user {user_id}: {e}");
                Ok(OnboardingState::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Mark the tour finished now.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    pub fn complete(&self, user_id: &str) -> Result<OnboardingState> {
        let state = OnboardingState {
            has_completed_onboarding: true,
            completed_at: Some(Utc::now()),
            skipped_at: None,
        };
        self.store.save(&Self::key(user_id), &state)?;
        Ok(state)
    }

    /// Mark the tour skipped now. Skipping counts as completing.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    pub fn skip(&self, user_id: &str) -> Result<OnboardingState> {
        let state = OnboardingState {
            has_completed_onboarding: true,
            completed_at: None,
            skipped_at: Some(Utc::now()),
        };
        self.store.save(&Self::key(user_id), &state)?;
        Ok(state)
    }

    /// Forget the state so the tour shows again.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn reset(&self, user_id: &str) -> Result<bool> {
        self.store.remove(&Self::key(user_id))
    }
}
