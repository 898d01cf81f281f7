//! Command-line interface for hrms.
//!
//! This module provides the CLI structure for the `hrms` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    parse_assignment, AddEmployeeArgs, AdminCommand, AnalyticsCommand, ConfigCommand,
    EmployeesCommand, FeedbackCommand, FeedbackTypeArg, LeaveCommand, LeaveRequestArgs,
    LeaveTypeArg, LoginCommand, OnboardingArgs, OnboardingCommand, Report, ReviewLeaveArgs,
    ReviewsCommand, UpdateArgs,
};

/// hrms - Human resources records and reports
///
/// Keeps employees, leave requests, performance reviews, and feedback in a
/// local store and prints dashboard summaries over them.
#[derive(Debug, Parser)]
#[command(name = "hrms")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage employee records
    #[command(subcommand)]
    Employees(EmployeesCommand),

    /// Manage leave requests
    #[command(subcommand)]
    Leave(LeaveCommand),

    /// Manage performance reviews
    #[command(subcommand)]
    Reviews(ReviewsCommand),

    /// Manage complaints, suggestions, and accident reports
    #[command(subcommand)]
    Feedback(FeedbackCommand),

    /// Show summary reports
    Analytics(AnalyticsCommand),

    /// Sign in as a demo user
    Login(LoginCommand),

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Manage the onboarding tour state
    #[command(subcommand)]
    Onboarding(OnboardingCommand),

    /// Seed, clear, or inspect stored data
    #[command(subcommand)]
    Admin(AdminCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
