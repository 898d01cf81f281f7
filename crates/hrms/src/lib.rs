//! `hrms` - Human resources record store and reporting engine
//!
//! This library keeps employee records, leave requests, performance reviews,
//! and feedback in a local document store, falls back to built-in demo data
//! when nothing has been stored, and derives dashboard summaries from the
//! collections.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod admin;
pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod onboarding;
pub mod repository;
pub mod session;
pub mod storage;

pub use analytics::Analytics;
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use onboarding::Onboarding;
pub use repository::{
    Collection, EmployeeRepository, FeedbackRepository, LeaveBalanceRepository,
    LeaveRepository, PerformanceRepository, Record, Repositories,
};
pub use session::Session;
pub use storage::{Store, StoreStats};
