// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::Display;

use crate::diagnostic::{Diagnostic, ErrorKind};

/// The physical table does not exist in the store.
pub fn table_not_found(table: &str) -> Diagnostic {
	Diagnostic {
		code: "STORE_001".to_string(),
		kind: ErrorKind::Execution,
		message: format!("physical table `{}` does not exist", table),
		label: Some("unknown physical table".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// The physical column does not exist on the table.
pub fn column_not_found(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "STORE_002".to_string(),
		kind: ErrorKind::Execution,
		message: format!("column `{}` does not exist on physical table `{}`", column, table),
		label: Some("unknown physical column".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// The physical column already exists on the table.
pub fn column_already_exists(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "STORE_003".to_string(),
		kind: ErrorKind::Execution,
		message: format!("column `{}` already exists on physical table `{}`", column, table),
		label: Some("duplicate physical column".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// The physical table already exists in the store.
pub fn table_already_exists(table: &str) -> Diagnostic {
	Diagnostic {
		code: "STORE_004".to_string(),
		kind: ErrorKind::Execution,
		message: format!("physical table `{}` already exists", table),
		label: Some("duplicate physical table".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// The row does not exist in the physical table.
pub fn row_not_found(table: &str, row: impl Display) -> Diagnostic {
	Diagnostic {
		code: "STORE_005".to_string(),
		kind: ErrorKind::Execution,
		message: format!("row `{}` does not exist in physical table `{}`", row, table),
		label: Some("unknown row".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A NOT NULL column would end up without a value.
pub fn null_violation(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "STORE_006".to_string(),
		kind: ErrorKind::Execution,
		message: format!("column `{}` of physical table `{}` is NOT NULL but no value was provided", column, table),
		label: Some("null violation".to_string()),
		help: Some("give the column a default or provide a value".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The store rejected a statement for a backend-specific reason.
pub fn rejected(detail: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "STORE_007".to_string(),
		kind: ErrorKind::Execution,
		message: detail.into(),
		label: Some("store rejected the statement".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
