// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use crate::diagnostic::{Diagnostic, ErrorKind};

/// The column name does not match the identifier grammar.
pub fn invalid_column_name(name: &str) -> Diagnostic {
	Diagnostic {
		code: "COL_001".to_string(),
		kind: ErrorKind::Validation,
		message: format!("column name `{}` is not a valid identifier", name),
		label: Some("invalid identifier".to_string()),
		help: Some("start with a letter and use only letters, digits and underscores".to_string()),
		notes: vec!["valid: email, created_by, line_2".to_string()],
		cause: None,
	}
}

/// The column name is taken by an implicit physical column.
pub fn reserved_column_name(name: &str) -> Diagnostic {
	Diagnostic {
		code: "COL_002".to_string(),
		kind: ErrorKind::Validation,
		message: format!("column name `{}` is reserved", name),
		label: Some("reserved name".to_string()),
		help: Some("`id` and `created_at` are created implicitly on deploy".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Another column of the same table already carries this name.
pub fn duplicate_column_name(name: &str) -> Diagnostic {
	Diagnostic {
		code: "COL_003".to_string(),
		kind: ErrorKind::Validation,
		message: format!("column `{}` already exists on this table", name),
		label: Some("duplicate column name".to_string()),
		help: Some("column names are compared case-insensitively; choose a different name".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Two distinct column names normalize to the same physical identifier.
pub fn column_name_collision(left: &str, right: &str, sanitized: &str) -> Diagnostic {
	Diagnostic {
		code: "COL_004".to_string(),
		kind: ErrorKind::Validation,
		message: format!("column names `{}` and `{}` normalize to the same identifier `{}`", left, right, sanitized),
		label: Some("identifier collision".to_string()),
		help: Some("rename one of the columns so the physical identifiers stay distinct".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A required column was handed a null value.
pub fn required_null(name: &str) -> Diagnostic {
	Diagnostic {
		code: "COL_005".to_string(),
		kind: ErrorKind::Validation,
		message: format!("column `{}` is required and cannot be set to null", name),
		label: Some("required column".to_string()),
		help: Some("provide a value or mark the column as not required first".to_string()),
		notes: vec![],
		cause: None,
	}
}
