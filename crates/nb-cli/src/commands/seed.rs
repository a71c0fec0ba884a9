use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::warn;

use nb_config::NodebucketConfig;
use nb_core::entities::Employee;
use nb_db::{DatabaseError, EmployeeStore, LibsqlEmployeeStore, NbDb};

use crate::cli::GlobalFlags;
use crate::cli::commands::SeedArgs;
use crate::output::output;

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<i64>,
    pub skipped: Vec<i64>,
}

/// Handle `nbk seed`.
pub async fn handle(
    args: &SeedArgs,
    config: &NodebucketConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let employees = match (&args.file, args.emp_id) {
        (Some(file), _) => read_employees(Path::new(file))?,
        (None, Some(emp_id)) => {
            let mut employee = Employee::new(emp_id);
            employee.first_name.clone_from(&args.first_name);
            employee.last_name.clone_from(&args.last_name);
            vec![employee]
        }
        (None, None) => anyhow::bail!("pass --emp-id or --file"),
    };

    let db = NbDb::open(&config.database)
        .await
        .context("failed to open employee store")?;
    let store = LibsqlEmployeeStore::new(db);
    let report = seed(&store, employees).await?;
    output(&report, flags.format)
}

/// Insert each employee, skipping ids that already exist.
pub async fn seed(
    store: &dyn EmployeeStore,
    employees: Vec<Employee>,
) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();
    for employee in employees {
        match store.insert_employee(&employee).await {
            Ok(()) => report.inserted.push(employee.emp_id),
            Err(DatabaseError::Duplicate { emp_id }) => {
                warn!(emp_id, "employee already exists, skipping");
                report.skipped.push(emp_id);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to seed employee {}", employee.emp_id));
            }
        }
    }
    Ok(report)
}

fn read_employees(path: &Path) -> anyhow::Result<Vec<Employee>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of employees", path.display()))
}
