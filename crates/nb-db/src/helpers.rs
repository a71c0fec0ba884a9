//! Row-to-document parsing helpers.

use nb_core::entities::{Employee, Task};

use crate::error::DatabaseError;

/// Column list shared by every employee SELECT.
pub const EMPLOYEE_COLS: &str = "emp_id, first_name, last_name, todo, done";

/// Decode a task list column. SQL NULL and empty text both read as an empty list.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column holds something other than a
/// JSON array of tasks.
pub fn parse_task_list(s: Option<&str>) -> Result<Vec<Task>, DatabaseError> {
    match s {
        Some(s) if !s.trim().is_empty() => serde_json::from_str(s)
            .map_err(|e| DatabaseError::Query(format!("Invalid task list in column: {e}"))),
        _ => Ok(Vec::new()),
    }
}

/// Encode a task list for storage.
///
/// # Errors
///
/// Returns `DatabaseError::Serialization` if encoding fails.
pub fn encode_task_list(tasks: &[Task]) -> Result<String, DatabaseError> {
    Ok(serde_json::to_string(tasks)?)
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Build an `Employee` from a row selected with [`EMPLOYEE_COLS`].
///
/// # Errors
///
/// Returns `DatabaseError` if a column is missing or a list is malformed.
pub fn row_to_employee(row: &libsql::Row) -> Result<Employee, DatabaseError> {
    Ok(Employee {
        emp_id: row.get(0)?,
        first_name: get_opt_string(row, 1)?,
        last_name: get_opt_string(row, 2)?,
        todo: parse_task_list(get_opt_string(row, 3)?.as_deref())?,
        done: parse_task_list(get_opt_string(row, 4)?.as_deref())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_and_blank_lists_are_empty() {
        assert!(parse_task_list(None).unwrap().is_empty());
        assert!(parse_task_list(Some("")).unwrap().is_empty());
        assert!(parse_task_list(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn parses_stored_list_in_order() {
        let tasks =
            parse_task_list(Some(r#"[{"_id":"b","text":"second"},{"_id":"a","text":"first"}]"#))
                .unwrap();
        assert_eq!(tasks, vec![Task::new("b", "second"), Task::new("a", "first")]);
    }

    #[test]
    fn malformed_list_is_a_query_error() {
        let err = parse_task_list(Some(r#"{"_id":"a"}"#)).unwrap_err();
        assert!(matches!(err, DatabaseError::Query(_)), "got {err:?}");
    }

    #[test]
    fn encode_uses_document_field_names() {
        let encoded = encode_task_list(&[Task::new("a", "x")]).unwrap();
        assert_eq!(encoded, r#"[{"_id":"a","text":"x"}]"#);
    }
}
