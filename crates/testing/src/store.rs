// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tablekit_ddl::DdlStatement;
use tablekit_store::{RowId, StructuredStore};
use tablekit_type::{Result, diagnostic::store, return_error};

#[derive(Default)]
struct StoreFaults {
	fail_ddl_at: Option<u32>,
	ddl_seen: u32,
	fail_insert_at: Option<u32>,
	inserts_seen: u32,
}

/// Wraps a structured store and fails one DDL execution or one blank-row
/// insert on demand. A batch counts as a single DDL execution.
#[derive(Clone)]
pub struct FaultyStore<S> {
	inner: S,
	faults: Arc<Mutex<StoreFaults>>,
}

impl<S> FaultyStore<S> {
	pub fn new(inner: S) -> Self {
		Self {
			inner,
			faults: Arc::new(Mutex::new(StoreFaults::default())),
		}
	}

	/// Arms the wrapper: counting from now, the `nth` DDL execution fails.
	pub fn fail_ddl(&self, nth: u32) {
		let mut faults = self.faults.lock();
		faults.fail_ddl_at = Some(nth);
		faults.ddl_seen = 0;
	}

	/// Arms the wrapper: counting from now, the `nth` blank-row insert fails.
	pub fn fail_insert(&self, nth: u32) {
		let mut faults = self.faults.lock();
		faults.fail_insert_at = Some(nth);
		faults.inserts_seen = 0;
	}

	pub fn inner(&self) -> &S {
		&self.inner
	}

	fn ddl_gate(&self) -> Result<()> {
		let mut faults = self.faults.lock();
		faults.ddl_seen += 1;
		if faults.fail_ddl_at == Some(faults.ddl_seen) {
			faults.fail_ddl_at = None;
			return_error!(store::rejected("injected DDL failure"));
		}
		Ok(())
	}

	fn insert_gate(&self) -> Result<()> {
		let mut faults = self.faults.lock();
		faults.inserts_seen += 1;
		if faults.fail_insert_at == Some(faults.inserts_seen) {
			faults.fail_insert_at = None;
			return_error!(store::rejected("injected insert failure"));
		}
		Ok(())
	}
}

impl<S: StructuredStore> StructuredStore for FaultyStore<S> {
	fn execute_ddl(&self, statement: &DdlStatement) -> Result<()> {
		self.ddl_gate()?;
		self.inner.execute_ddl(statement)
	}

	fn execute_ddl_batch(&self, statements: &[DdlStatement]) -> Result<()> {
		self.ddl_gate()?;
		self.inner.execute_ddl_batch(statements)
	}

	fn insert_empty_row(&self, table: &str) -> Result<RowId> {
		self.insert_gate()?;
		self.inner.insert_empty_row(table)
	}

	fn update_cell(&self, table: &str, row: RowId, column: &str, value: Value) -> Result<()> {
		self.inner.update_cell(table, row, column, value)
	}

	fn delete_row(&self, table: &str, row: RowId) -> Result<()> {
		self.inner.delete_row(table, row)
	}
}

#[cfg(test)]
mod tests {
	use tablekit_store::MemoryStore;
	use tablekit_type::StoreType;

	use super::*;

	fn create_table(name: &str) -> DdlStatement {
		DdlStatement::CreateTable {
			table: name.to_string(),
			columns: vec![tablekit_ddl::ColumnSpec {
				name: "id".to_string(),
				ty: StoreType::Uuid,
				default: None,
				not_null: true,
			}],
		}
	}

	#[test]
	fn test_armed_ddl_fails_then_recovers() {
		let store = FaultyStore::new(MemoryStore::new());
		store.fail_ddl(1);

		let err = store.execute_ddl(&create_table("a")).unwrap_err();
		assert_eq!(err.diagnostic().code, "STORE_007");
		assert!(store.inner().describe("a").is_none());

		store.execute_ddl(&create_table("a")).unwrap();
		assert!(store.inner().describe("a").is_some());
	}

	#[test]
	fn test_armed_insert_fails_at_the_nth_row() {
		let store = FaultyStore::new(MemoryStore::new());
		store.execute_ddl(&create_table("a")).unwrap();
		store.fail_insert(2);

		store.insert_empty_row("a").unwrap();
		let err = store.insert_empty_row("a").unwrap_err();
		assert_eq!(err.diagnostic().code, "STORE_007");
		store.insert_empty_row("a").unwrap();
		assert_eq!(store.inner().row_count("a"), Some(2));
	}
}
