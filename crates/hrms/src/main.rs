//! `hrms` - CLI for the hrms record store
//!
//! This binary provides the command-line interface for managing employee
//! records, leave, reviews, and feedback, and for printing reports.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use serde_json::{Map, Value};

use hrms::cli::{
    AddEmployeeArgs, AdminCommand, AnalyticsCommand, Cli, Command, ConfigCommand,
    EmployeesCommand, FeedbackCommand, LeaveCommand, LeaveRequestArgs, LoginCommand,
    OnboardingArgs, OnboardingCommand, Report, ReviewLeaveArgs, ReviewsCommand, UpdateArgs,
};
use hrms::models::{
    rating_label, today, EmergencyContact, Employee, EmployeeStatus, FeedbackItem, FeedbackType,
    LeaveRequest, LeaveStatus, PerformanceReview,
};
use hrms::{admin, init_logging, Analytics, Config, Onboarding, Repositories, Session, Store};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Config commands don't need the store
    let command = match cli.command {
        Command::Config(config_cmd) => return handle_config(&config, config_cmd),
        command => command,
    };

    config.validate()?;
    let store = Store::open(config.database_path())
        .with_context(|| format!("opening {}", config.database_path().display()))?;
    if config.seed.seed_on_first_run {
        admin::initialize(&store)?;
    }

    match command {
        Command::Employees(cmd) => handle_employees(&store, cmd),
        Command::Leave(cmd) => handle_leave(&store, cmd),
        Command::Reviews(cmd) => handle_reviews(&store, cmd),
        Command::Feedback(cmd) => handle_feedback(&store, cmd),
        Command::Analytics(cmd) => handle_analytics(&store, &config, &cmd),
        Command::Login(cmd) => handle_login(&store, &cmd),
        Command::Logout => {
            if Session::new(&store).logout()? {
                println!("Signed out.");
            } else {
                println!("Nobody is signed in.");
            }
            Ok(())
        }
        Command::Whoami => handle_whoami(&store),
        Command::Onboarding(cmd) => handle_onboarding(&store, cmd),
        Command::Admin(cmd) => handle_admin(&store, cmd),
        Command::Config(_) => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn changes(update: UpdateArgs) -> Map<String, Value> {
    update.set.into_iter().collect()
}

/// Read a JSON object from `path`, filling in fields the store assigns.
fn read_record<T: serde::de::DeserializeOwned>(
    path: &Path,
    defaults: &[(&str, Value)],
) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let Value::Object(fields) = &mut value else {
        bail!("{} must contain a JSON object", path.display());
    };
    for (field, default) in defaults {
        fields
            .entry((*field).to_string())
            .or_insert_with(|| default.clone());
    }
    serde_json::from_value(value).with_context(|| format!("invalid record in {}", path.display()))
}

fn handle_employees(store: &Store, cmd: EmployeesCommand) -> anyhow::Result<()> {
    let repo = Repositories::new(store).employees;
    match cmd {
        EmployeesCommand::List { department, json } => {
            let employees = match department {
                Some(department) => repo.by_department(&department)?,
                None => repo.all()?,
            };
            if json {
                return print_json(&employees);
            }
            for employee in &employees {
                print_employee_line(employee);
            }
            println!("{} employee(s)", employees.len());
        }
        EmployeesCommand::Show { id, json } => {
            let Some(employee) = repo.get(&id)? else {
                bail!("no employee with id {id}");
            };
            if json {
                return print_json(&employee);
            }
            print_employee(&employee);
        }
        EmployeesCommand::Add(args) => {
            let employee = repo.add(new_employee(args))?;
            println!("Added employee {} ({})", employee.name, employee.id);
        }
        EmployeesCommand::Update(update) => {
            let id = update.id.clone();
            match repo.update(&id, &changes(update))? {
                Some(employee) => print_employee(&employee),
                None => bail!("no employee with id {id}"),
            }
        }
        EmployeesCommand::Delete { id } => {
            if !repo.delete(&id)? {
                bail!("no employee with id {id}");
            }
            println!("Deleted employee {id}");
        }
        EmployeesCommand::Departments => {
            for department in repo.departments()? {
                let count = repo.by_department(&department)?.len();
                println!("{department:<20} {count}");
            }
        }
    }
    Ok(())
}

fn new_employee(args: AddEmployeeArgs) -> Employee {
    Employee {
        id: String::new(),
        employee_id: args.employee_id,
        name: args.name,
        email: args.email,
        phone: args.phone,
        department: args.department,
        position: args.position,
        salary: args.salary,
        hire_date: args.hire_date,
        status: EmployeeStatus::Active,
        manager: args.manager,
        avatar: None,
        address: args.address,
        emergency_contact: EmergencyContact::default(),
    }
}

fn print_employee_line(employee: &Employee) {
    println!(
        "{:<38} {:<8} {:<20} {:<18} {:<22} {}",
        employee.id,
        employee.employee_id,
        employee.name,
        employee.department,
        employee.position,
        employee.status
    );
}

fn print_employee(employee: &Employee) {
    println!("{} ({})", employee.name, employee.employee_id);
    println!("  Id:          {}", employee.id);
    println!("  Email:       {}", employee.email);
    println!("  Phone:       {}", employee.phone);
    println!("  Department:  {}", employee.department);
    println!("  Position:    {}", employee.position);
    println!("  Salary:      {}", employee.salary);
    println!("  Hired:       {}", employee.hire_date);
    println!("  Status:      {}", employee.status);
    if let Some(manager) = &employee.manager {
        println!("  Manager:     {manager}");
    }
    println!("  Address:     {}", employee.address);
    let contact = &employee.emergency_contact;
    if !contact.name.is_empty() {
        println!(
            "  Emergency:   {} ({}), {}",
            contact.name, contact.relationship, contact.phone
        );
    }
}

fn handle_leave(store: &Store, cmd: LeaveCommand) -> anyhow::Result<()> {
    let repos = Repositories::new(store);
    match cmd {
        LeaveCommand::List { employee, json } => {
            let requests = match employee {
                Some(employee) => repos.leave.by_employee(&employee)?,
                None => repos.leave.all()?,
            };
            if json {
                return print_json(&requests);
            }
            for request in &requests {
                print_leave_line(request);
            }
            println!("{} request(s)", requests.len());
        }
        LeaveCommand::Request(args) => {
            let request = file_leave_request(&repos, args)?;
            println!(
                "Filed {} request {} for {} day(s)",
                request.leave_type.label(),
                request.id,
                request.days
            );
        }
        LeaveCommand::Approve(args) => review_leave(store, &repos, args, LeaveStatus::Approved)?,
        LeaveCommand::Reject(args) => review_leave(store, &repos, args, LeaveStatus::Rejected)?,
        LeaveCommand::Cancel { id } => {
            let cancelled = repos
                .leave
                .modify(&id, |request| request.status = LeaveStatus::Cancelled)?;
            if cancelled.is_none() {
                bail!("no leave request with id {id}");
            }
            println!("Cancelled leave request {id}");
        }
        LeaveCommand::Balance { employee } => {
            let Some(balance) = repos.balances.balance_for(&employee)? else {
                bail!("no leave balance for {employee}");
            };
            println!("Leave balance for {employee}");
            for leave_type in hrms::models::LeaveType::ALL {
                println!(
                    "  {:<18} {}",
                    leave_type.label(),
                    balance.available(leave_type)
                );
            }
        }
        LeaveCommand::Delete { id } => {
            if !repos.leave.delete(&id)? {
                bail!("no leave request with id {id}");
            }
            println!("Deleted leave request {id}");
        }
    }
    Ok(())
}

fn file_leave_request(
    repos: &Repositories<'_>,
    args: LeaveRequestArgs,
) -> anyhow::Result<LeaveRequest> {
    let Some(employee) = repos.employees.by_employee_id(&args.employee)? else {
        bail!("no employee with number {}", args.employee);
    };
    let request = LeaveRequest::new(
        employee.employee_id,
        employee.name,
        args.leave_type.into(),
        args.from,
        args.to,
        args.reason,
    );

    match repos.leave.file(request, args.force) {
        Err(e) if e.is_insufficient_balance() => bail!("{e} (use --force to file anyway)"),
        result => Ok(result?),
    }
}

fn review_leave(
    store: &Store,
    repos: &Repositories<'_>,
    args: ReviewLeaveArgs,
    status: LeaveStatus,
) -> anyhow::Result<()> {
    let reviewer = match args.reviewer {
        Some(reviewer) => reviewer,
        None => match Session::new(store).current_user()? {
            Some(user) => user.name,
            None => bail!("no reviewer given and nobody is signed in"),
        },
    };
    match repos.leave.review(&args.id, status, &reviewer, args.comments)? {
        Some(request) => println!("Leave request {} is now {}", request.id, request.status),
        None => bail!("no leave request with id {}", args.id),
    }
    Ok(())
}

fn print_leave_line(request: &LeaveRequest) {
    println!(
        "{:<38} {:<8} {:<16} {:<18} {} .. {} {:>3}d {}",
        request.id,
        request.employee_id,
        request.employee_name,
        request.leave_type.label(),
        request.start_date,
        request.end_date,
        request.days,
        request.status
    );
}

fn handle_reviews(store: &Store, cmd: ReviewsCommand) -> anyhow::Result<()> {
    let repo = Repositories::new(store).reviews;
    match cmd {
        ReviewsCommand::List { employee, json } => {
            let reviews = match employee {
                Some(employee) => repo.by_employee(&employee)?,
                None => repo.all()?,
            };
            if json {
                return print_json(&reviews);
            }
            for review in &reviews {
                println!(
                    "{:<38} {:<8} {:<16} {:<10} {:<18} {:.2}",
                    review.id,
                    review.employee_id,
                    review.employee_name,
                    review.review_period,
                    review.status,
                    review.overall_rating
                );
            }
            println!("{} review(s)", reviews.len());
        }
        ReviewsCommand::Show { id } => {
            let Some(review) = repo.get(&id)? else {
                bail!("no review with id {id}");
            };
            print_review(&review);
        }
        ReviewsCommand::Add { file } => {
            let defaults = [
                ("id", Value::from("")),
                ("createdDate", Value::from(today().to_string())),
                ("overallRating", Value::from(0.0)),
            ];
            let review: PerformanceReview = read_record(&file, &defaults)?;
            let review = repo.add(review)?;
            println!(
                "Added review {} for {} ({:.2})",
                review.id, review.employee_name, review.overall_rating
            );
        }
        ReviewsCommand::Update(update) => {
            let id = update.id.clone();
            match repo.update(&id, &changes(update))? {
                Some(review) => print_review(&review),
                None => bail!("no review with id {id}"),
            }
        }
        ReviewsCommand::Approve { id } => match repo.approve(&id)? {
            Some(review) => println!("Review {} approved", review.id),
            None => bail!("no review with id {id}"),
        },
        ReviewsCommand::Reject { id, reason } => match repo.reject(&id, reason)? {
            Some(review) => println!("Review {} rejected", review.id),
            None => bail!("no review with id {id}"),
        },
        ReviewsCommand::Delete { id } => {
            if !repo.delete(&id)? {
                bail!("no review with id {id}");
            }
            println!("Deleted review {id}");
        }
    }
    Ok(())
}

fn print_review(review: &PerformanceReview) {
    println!(
        "{} review of {} ({}), {}",
        review.review_period, review.employee_name, review.employee_id, review.status
    );
    println!("  Reviewer:    {}", review.reviewer_name);
    println!("  Created:     {}", review.created_date);
    println!("  Due:         {}", review.due_date);
    if let Some(completed) = review.completed_date {
        println!("  Completed:   {completed}");
    }
    println!(
        "  Rating:      {:.2} ({})",
        review.overall_rating,
        rating_label(review.overall_rating)
    );
    if let Some(reason) = &review.rejection_reason {
        println!("  Rejected:    {reason}");
    }
    for goal in &review.goals {
        println!(
            "  Goal:        {} ({}%, weight {}%)",
            goal.title, goal.progress, goal.weight
        );
    }
}

fn handle_feedback(store: &Store, cmd: FeedbackCommand) -> anyhow::Result<()> {
    let repo = Repositories::new(store).feedback;
    match cmd {
        FeedbackCommand::List {
            employee,
            kind,
            json,
        } => {
            let kind = kind.map(FeedbackType::from);
            let items = repo.filter(|item| {
                employee
                    .as_deref()
                    .map_or(true, |e| item.base().employee_id == e)
                    && kind.map_or(true, |k| item.kind() == k)
            })?;
            if json {
                return print_json(&items);
            }
            for item in &items {
                print_feedback_line(item);
            }
            println!("{} item(s)", items.len());
        }
        FeedbackCommand::Show { id } => {
            let Some(item) = repo.get(&id)? else {
                bail!("no feedback with id {id}");
            };
            print_json(&item)?;
        }
        FeedbackCommand::Add { file } => {
            let defaults = [
                ("id", Value::from("")),
                ("submittedDate", Value::from(today().to_string())),
                ("status", Value::from("open")),
            ];
            let item: FeedbackItem = read_record(&file, &defaults)?;
            let item = repo.add(item)?;
            println!("Submitted {} {}", item.kind().label(), item.base().id);
        }
        FeedbackCommand::Update(update) => {
            let id = update.id.clone();
            match repo.update(&id, &changes(update))? {
                Some(item) => print_feedback_line(&item),
                None => bail!("no feedback with id {id}"),
            }
        }
        FeedbackCommand::Resolve { id, response } => match repo.resolve(&id, response)? {
            Some(item) => println!("Feedback {} resolved", item.base().id),
            None => bail!("no feedback with id {id}"),
        },
        FeedbackCommand::Delete { id } => {
            if !repo.delete(&id)? {
                bail!("no feedback with id {id}");
            }
            println!("Deleted feedback {id}");
        }
    }
    Ok(())
}

fn print_feedback_line(item: &FeedbackItem) {
    let base = item.base();
    println!(
        "{:<38} {:<16} {:<16} {:<10} {:<9} {}",
        base.id,
        item.kind().label(),
        item.display_submitter(),
        base.status,
        base.priority.label(),
        base.title
    );
}

fn handle_analytics(store: &Store, config: &Config, cmd: &AnalyticsCommand) -> anyhow::Result<()> {
    let analytics = Analytics::new(Repositories::new(store), &config.analytics);
    match cmd.report {
        Report::Dashboard => {
            let metrics = analytics.dashboard_metrics()?;
            if cmd.json {
                return print_json(&metrics);
            }
            println!("Dashboard");
            println!("---------");
            println!("Employees:        {} ({} active)", metrics.total_employees, metrics.active_employees);
            println!("Departments:      {}", metrics.total_departments);
            println!("Avg performance:  {:.2}", metrics.avg_performance_score);
            println!("Pending leave:    {}", metrics.pending_leave_requests);
            println!("Open feedback:    {}", metrics.open_feedback);
            println!("Pending actions:  {}", metrics.pending_actions);
            println!("Growth rate:      {}%", metrics.employee_growth_rate);
            println!("Turnover rate:    {}%", metrics.turnover_rate);
        }
        Report::Departments => {
            let metrics = analytics.department_metrics()?;
            if cmd.json {
                return print_json(&metrics);
            }
            println!(
                "{:<20} {:>9} {:>11} {:>9} {:>9}",
                "Department", "Employees", "Performance", "Leave %", "Feedback"
            );
            for m in &metrics {
                println!(
                    "{:<20} {:>9} {:>11.2} {:>9} {:>9}",
                    m.name,
                    m.employee_count,
                    m.avg_performance_score,
                    m.leave_utilization,
                    m.feedback_count
                );
            }
        }
        Report::Leave => {
            let leave = analytics.leave_analytics()?;
            if cmd.json {
                return print_json(&leave);
            }
            println!(
                "Requests: {} total, {} approved, {} pending, {} rejected",
                leave.total_requests,
                leave.approved_requests,
                leave.pending_requests,
                leave.rejected_requests
            );
            println!("Average approved length: {:.1} day(s)", leave.avg_leave_days);
            for entry in &leave.leave_by_type {
                println!("  {:<12} {}", entry.leave_type, entry.count);
            }
        }
        Report::Performance => {
            let performance = analytics.performance_analytics()?;
            if cmd.json {
                return print_json(&performance);
            }
            println!(
                "Reviews: {} total, {} completed, average {:.2}",
                performance.total_reviews,
                performance.completed_reviews,
                performance.avg_overall_rating
            );
            for bucket in &performance.rating_distribution {
                println!("  {:<18} {}", bucket.rating, bucket.count);
            }
            for department in &performance.department_performance {
                println!("  {:<18} {:.2}", department.department, department.avg_rating);
            }
        }
        Report::Feedback => {
            let feedback = analytics.feedback_analytics()?;
            if cmd.json {
                return print_json(&feedback);
            }
            println!(
                "Feedback: {} total, {} complaints, {} suggestions, {} accidents, {} resolved",
                feedback.total_feedback,
                feedback.complaint_count,
                feedback.suggestion_count,
                feedback.accident_count,
                feedback.resolved_count
            );
            for entry in &feedback.feedback_by_priority {
                println!("  {:<10} {}", entry.priority, entry.count);
            }
        }
        Report::Workforce => {
            let insights = analytics.workforce_insights()?;
            if cmd.json {
                return print_json(&insights);
            }
            println!("Age");
            for entry in &insights.age_distribution {
                println!("  {:<10} {}", entry.range, entry.count);
            }
            println!("Tenure");
            for entry in &insights.tenure_distribution {
                println!("  {:<10} {}", entry.range, entry.count);
            }
        }
    }
    Ok(())
}

fn handle_login(store: &Store, cmd: &LoginCommand) -> anyhow::Result<()> {
    match Session::new(store).login(&cmd.email, &cmd.password)? {
        Some(user) => {
            println!("Signed in as {} ({})", user.name, user.role);
            let onboarding = Onboarding::new(store).state(&user.id)?;
            if !onboarding.has_completed_onboarding {
                println!("Run `hrms onboarding complete` once you have looked around.");
            }
            Ok(())
        }
        None => bail!("invalid credentials"),
    }
}

fn handle_whoami(store: &Store) -> anyhow::Result<()> {
    match Session::new(store).current_user()? {
        Some(user) => println!(
            "{} <{}> {} {}, {}",
            user.name, user.email, user.role, user.position, user.department
        ),
        None => println!("Nobody is signed in."),
    }
    Ok(())
}

fn resolve_user(store: &Store, args: OnboardingArgs) -> anyhow::Result<String> {
    if let Some(user) = args.user {
        return Ok(user);
    }
    match Session::new(store).current_user()? {
        Some(user) => Ok(user.id),
        None => bail!("no --user given and nobody is signed in"),
    }
}

fn handle_onboarding(store: &Store, cmd: OnboardingCommand) -> anyhow::Result<()> {
    let onboarding = Onboarding::new(store);
    match cmd {
        OnboardingCommand::Status(args) => {
            let user = resolve_user(store, args)?;
            let state = onboarding.state(&user)?;
            print_json(&state)?;
        }
        OnboardingCommand::Complete(args) => {
            let user = resolve_user(store, args)?;
            onboarding.complete(&user)?;
            println!("Onboarding completed for user {user}");
        }
        OnboardingCommand::Skip(args) => {
            let user = resolve_user(store, args)?;
            onboarding.skip(&user)?;
            println!("Onboarding skipped for user {user}");
        }
        OnboardingCommand::Reset(args) => {
            let user = resolve_user(store, args)?;
            onboarding.reset(&user)?;
            println!("Onboarding reset for user {user}");
        }
    }
    Ok(())
}

fn handle_admin(store: &Store, cmd: AdminCommand) -> anyhow::Result<()> {
    match cmd {
        AdminCommand::Seed => {
            admin::seed_demo_data(store)?;
            println!("Demo data seeded.");
        }
        AdminCommand::Clear { yes } => {
            if !yes {
                println!("This will remove all stored records and sign out.");
                println!("Use --yes to confirm.");
                return Ok(());
            }
            admin::clear_all_data(store)?;
            println!("All data cleared.");
        }
        AdminCommand::Init => {
            if admin::initialize(store)? {
                println!("Demo data seeded.");
            } else {
                println!("Store already initialized.");
            }
        }
        AdminCommand::Stats { json } => {
            let stats = store.stats()?;
            if json {
                let status = serde_json::json!({
                    "database_path": store.path(),
                    "total_documents": stats.total_documents,
                    "last_write": stats.last_write,
                    "db_size_bytes": stats.db_size_bytes,
                    "keys": store.keys()?,
                });
                return print_json(&status);
            }
            println!("hrms store");
            println!("----------");
            println!("Database:      {}", store.path().display());
            println!("Documents:     {}", stats.total_documents);
            println!("Size:          {} bytes", stats.db_size_bytes);
            match stats.last_write {
                Some(at) => println!("Last write:    {at}"),
                None => println!("Last write:    never"),
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                print_json(config)?;
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!();
                println!("[Seed]");
                println!("  Seed on first run:  {}", config.seed.seed_on_first_run);
                println!();
                println!("[Analytics]");
                match config.analytics.placeholder_seed {
                    Some(seed) => println!("  Placeholder seed:   {seed}"),
                    None => println!("  Placeholder seed:   random"),
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)).and_then(|c| c.validate().map(|()| c)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
