// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use crate::diagnostic::{Diagnostic, ErrorKind};

/// A table id was referenced that the catalog does not hold.
pub fn table_not_found(table: impl Into<u64>) -> Diagnostic {
	let table = table.into();
	Diagnostic {
		code: "CAT_001".to_string(),
		kind: ErrorKind::NotFound,
		message: format!("table with id `{}` not found", table),
		label: Some("unknown table id".to_string()),
		help: Some("the table may have been deleted by another session".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A column id was referenced that the catalog does not hold.
pub fn column_not_found(column: impl Into<u64>) -> Diagnostic {
	let column = column.into();
	Diagnostic {
		code: "CAT_002".to_string(),
		kind: ErrorKind::NotFound,
		message: format!("column with id `{}` not found", column),
		label: Some("unknown column id".to_string()),
		help: Some("the column may have been removed by another session".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A table with the same name already exists in the catalog.
pub fn table_already_exists(name: &str) -> Diagnostic {
	Diagnostic {
		code: "CAT_003".to_string(),
		kind: ErrorKind::Validation,
		message: format!("table `{}` already exists", name),
		label: Some("duplicate table name".to_string()),
		help: Some("table names are compared case-insensitively; choose a different name".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// An insert was attempted for a table id that is already present.
pub fn duplicate_table_id(table: impl Into<u64>) -> Diagnostic {
	let table = table.into();
	Diagnostic {
		code: "CAT_004".to_string(),
		kind: ErrorKind::Execution,
		message: format!("table id `{}` is already present in the catalog", table),
		label: Some("duplicate table id".to_string()),
		help: Some("ids must come from `next_table_id`".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// An insert was attempted for a column id that is already present.
pub fn duplicate_column_id(column: impl Into<u64>) -> Diagnostic {
	let column = column.into();
	Diagnostic {
		code: "CAT_005".to_string(),
		kind: ErrorKind::Execution,
		message: format!("column id `{}` is already present in the catalog", column),
		label: Some("duplicate column id".to_string()),
		help: Some("ids must come from `next_column_id`".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The catalog backend failed at the storage layer.
pub fn storage(detail: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CAT_006".to_string(),
		kind: ErrorKind::Execution,
		message: detail.into(),
		label: Some("catalog storage failure".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A stored definition could not be encoded or decoded.
pub fn codec(detail: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CAT_007".to_string(),
		kind: ErrorKind::Execution,
		message: detail.into(),
		label: Some("definition codec failure".to_string()),
		help: Some("the stored definition does not match the expected shape".to_string()),
		notes: vec![],
		cause: None,
	}
}
