// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{ColumnDef, ColumnId};
use tablekit_ddl::{IMPLICIT_CREATED_AT_COLUMN, IMPLICIT_ID_COLUMN};
use tablekit_type::{
	Result,
	diagnostic::column,
	ident::{is_valid_identifier, sanitize},
	return_error,
};

/// Column-name validation shared by add and update: identifier grammar,
/// reserved implicit names, case-insensitive uniqueness within the table.
/// `exclude` skips the column being edited so a case-only rename of itself
/// is not reported as a duplicate.
pub(crate) fn validate_column_name(
	name: &str,
	existing: &[ColumnDef],
	exclude: Option<ColumnId>,
) -> Result<()> {
	if !is_valid_identifier(name) {
		return_error!(column::invalid_column_name(name));
	}
	if name.eq_ignore_ascii_case(IMPLICIT_ID_COLUMN) || name.eq_ignore_ascii_case(IMPLICIT_CREATED_AT_COLUMN)
	{
		return_error!(column::reserved_column_name(name));
	}
	for def in existing {
		if Some(def.id) == exclude {
			continue;
		}
		if def.name.eq_ignore_ascii_case(name) {
			return_error!(column::duplicate_column_name(name));
		}
	}
	Ok(())
}

/// Rejects column sets where two names sanitize to the same physical
/// identifier. Names that passed [`validate_column_name`] are fixed points of
/// `sanitize`, so this only fires on column sets written around the engine.
pub(crate) fn ensure_distinct_identifiers(columns: &[ColumnDef]) -> Result<()> {
	for (index, left) in columns.iter().enumerate() {
		let physical = sanitize(&left.name);
		for right in &columns[index + 1..] {
			if sanitize(&right.name) == physical {
				return_error!(column::column_name_collision(&left.name, &right.name, &physical));
			}
		}
	}
	Ok(())
}
