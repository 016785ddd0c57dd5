// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use serde_json::Value;
use tablekit_ddl::DdlStatement;
use tablekit_type::Result;

use crate::row::RowId;

/// The physical side of a deployed table.
///
/// Everything here is addressed by physical identifiers: `table` is a bound
/// physical table name, `column` a sanitized column name. Resolving logical
/// names is the engine's job; a store never sees a draft.
pub trait StructuredStore: Send + Sync {
	/// Applies one schema-changing statement.
	fn execute_ddl(&self, statement: &DdlStatement) -> Result<()>;

	/// Applies the statements in order, stopping at the first failure.
	///
	/// Backends that can stage the whole batch should override this so a
	/// failing statement leaves no partial schema change behind.
	fn execute_ddl_batch(&self, statements: &[DdlStatement]) -> Result<()> {
		for statement in statements {
			self.execute_ddl(statement)?;
		}
		Ok(())
	}

	/// Inserts a blank row: the implicit columns are filled in, declared
	/// defaults applied, everything else left null.
	fn insert_empty_row(&self, table: &str) -> Result<RowId>;

	fn update_cell(&self, table: &str, row: RowId, column: &str, value: Value) -> Result<()>;

	fn delete_row(&self, table: &str, row: RowId) -> Result<()>;
}
