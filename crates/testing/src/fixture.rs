// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{ColumnDef, ColumnId, ColumnIndex, TableDef, TableId, TableState};
use tablekit_type::ColumnType;

/// A draft table definition with test-friendly defaults.
pub fn table_def(id: u64, name: &str) -> TableDef {
	TableDef {
		id: TableId(id),
		name: name.to_string(),
		description: None,
		physical_name: None,
		state: TableState::Draft,
		created_by: "test".to_string(),
		initial_row_count: 0,
		created_at: 0,
	}
}

/// An optional column definition with no default.
pub fn column_def(id: u64, table: u64, name: &str, ty: ColumnType, index: u16) -> ColumnDef {
	ColumnDef {
		id: ColumnId(id),
		table: TableId(table),
		name: name.to_string(),
		ty,
		required: false,
		default: None,
		index: ColumnIndex(index),
		created_at: 0,
	}
}
