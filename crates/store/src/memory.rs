// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! In-process structured store.
//!
//! Tables live in a single map guarded by one lock; DDL batches are staged
//! on a clone of the map and swapped in on success, so a failing statement
//! never leaves half a batch applied.

use std::{
	collections::HashMap,
	sync::Arc,
	time::{SystemTime, UNIX_EPOCH},
};

use parking_lot::RwLock;
use serde_json::Value;
use tablekit_ddl::{ColumnSpec, DdlStatement, IMPLICIT_CREATED_AT_COLUMN, IMPLICIT_ID_COLUMN};
use tablekit_type::{DefaultValue, Result, StoreType, diagnostic::store, error, return_error};
use tracing::instrument;

use crate::{row::RowId, store::StructuredStore};

/// A column as the store holds it after DDL has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalColumn {
	pub name: String,
	pub ty: StoreType,
	pub not_null: bool,
	pub default: Option<DefaultValue>,
}

impl From<&ColumnSpec> for PhysicalColumn {
	fn from(spec: &ColumnSpec) -> Self {
		Self {
			name: spec.name.clone(),
			ty: spec.ty,
			not_null: spec.not_null,
			default: spec.default.clone(),
		}
	}
}

#[derive(Debug, Clone)]
struct PhysicalTable {
	columns: Vec<PhysicalColumn>,
	rows: HashMap<RowId, HashMap<String, Value>>,
}

impl PhysicalTable {
	fn column(&self, name: &str) -> Option<&PhysicalColumn> {
		self.columns.iter().find(|column| column.name == name)
	}

	fn column_mut(&mut self, name: &str) -> Option<&mut PhysicalColumn> {
		self.columns.iter_mut().find(|column| column.name == name)
	}
}

/// In-memory [`StructuredStore`] backend. Cheap to clone; all clones share
/// the same tables.
#[derive(Clone)]
pub struct MemoryStore {
	inner: Arc<MemoryStoreInner>,
}

struct MemoryStoreInner {
	tables: RwLock<HashMap<String, PhysicalTable>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self {
			inner: Arc::new(MemoryStoreInner {
				tables: RwLock::new(HashMap::new()),
			}),
		}
	}

	/// Schema of a physical table, in column order. `None` if the table was
	/// never created. Used to compare the physical schema against the
	/// catalog's view of it.
	pub fn describe(&self, table: &str) -> Option<Vec<PhysicalColumn>> {
		self.inner.tables.read().get(table).map(|physical| physical.columns.clone())
	}

	pub fn row(&self, table: &str, row: RowId) -> Option<HashMap<String, Value>> {
		self.inner.tables.read().get(table).and_then(|physical| physical.rows.get(&row).cloned())
	}

	pub fn row_count(&self, table: &str) -> Option<usize> {
		self.inner.tables.read().get(table).map(|physical| physical.rows.len())
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

fn now_millis() -> u64 {
	SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_millis() as u64).unwrap_or(0)
}

fn apply(tables: &mut HashMap<String, PhysicalTable>, statement: &DdlStatement) -> Result<()> {
	match statement {
		DdlStatement::CreateTable {
			table,
			columns,
		} => {
			if tables.contains_key(table) {
				return_error!(store::table_already_exists(table));
			}
			let mut physical = Vec::with_capacity(columns.len());
			for spec in columns {
				if physical.iter().any(|existing: &PhysicalColumn| existing.name == spec.name) {
					return_error!(store::column_already_exists(table, &spec.name));
				}
				physical.push(PhysicalColumn::from(spec));
			}
			tables.insert(table.clone(), PhysicalTable {
				columns: physical,
				rows: HashMap::new(),
			});
			Ok(())
		}
		DdlStatement::AddColumn {
			table,
			column,
		} => {
			let physical =
				tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;
			if physical.column(&column.name).is_some() {
				// IF NOT EXISTS
				return Ok(());
			}
			if column.not_null && column.default.is_none() && !physical.rows.is_empty() {
				return_error!(store::null_violation(table, &column.name));
			}
			let backfill = match &column.default {
				Some(default) => Value::String(default.literal.clone()),
				None => Value::Null,
			};
			for row in physical.rows.values_mut() {
				row.insert(column.name.clone(), backfill.clone());
			}
			physical.columns.push(PhysicalColumn::from(column));
			Ok(())
		}
		DdlStatement::DropColumn {
			table,
			column,
		} => {
			let physical =
				tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;
			if physical.column(column).is_none() {
				// IF EXISTS
				return Ok(());
			}
			physical.columns.retain(|existing| existing.name != *column);
			for row in physical.rows.values_mut() {
				row.remove(column);
			}
			Ok(())
		}
		DdlStatement::RenameColumn {
			table,
			from,
			to,
		} => {
			let physical =
				tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;
			if physical.column(to).is_some() {
				return_error!(store::column_already_exists(table, to));
			}
			let Some(column) = physical.column_mut(from) else {
				return_error!(store::column_not_found(table, from));
			};
			column.name = to.clone();
			for row in physical.rows.values_mut() {
				if let Some(value) = row.remove(from) {
					row.insert(to.clone(), value);
				}
			}
			Ok(())
		}
		DdlStatement::AlterColumnType {
			table,
			column,
			ty,
		} => {
			let physical =
				tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;
			let Some(column) = physical.column_mut(column) else {
				return_error!(store::column_not_found(table, column));
			};
			// Stored cell values are not coerced.
			column.ty = *ty;
			Ok(())
		}
		DdlStatement::SetNotNull {
			table,
			column,
			not_null,
		} => {
			let physical =
				tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;
			if physical.column(column).is_none() {
				return_error!(store::column_not_found(table, column));
			}
			if *not_null {
				let has_null = physical
					.rows
					.values()
					.any(|row| row.get(column).map(Value::is_null).unwrap_or(true));
				if has_null {
					return_error!(store::null_violation(table, column));
				}
			}
			if let Some(existing) = physical.column_mut(column) {
				existing.not_null = *not_null;
			}
			Ok(())
		}
		DdlStatement::SetDefault {
			table,
			column,
			default,
		} => {
			let physical =
				tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;
			let Some(column) = physical.column_mut(column) else {
				return_error!(store::column_not_found(table, column));
			};
			column.default = default.clone();
			Ok(())
		}
	}
}

impl StructuredStore for MemoryStore {
	#[instrument(name = "store::memory::execute_ddl", level = "debug", skip(self, statement), fields(sql = %statement))]
	fn execute_ddl(&self, statement: &DdlStatement) -> Result<()> {
		let mut tables = self.inner.tables.write();
		apply(&mut tables, statement)
	}

	#[instrument(name = "store::memory::execute_ddl_batch", level = "debug", skip(self, statements), fields(statements = statements.len()))]
	fn execute_ddl_batch(&self, statements: &[DdlStatement]) -> Result<()> {
		let mut tables = self.inner.tables.write();
		let mut staged = tables.clone();
		for statement in statements {
			apply(&mut staged, statement)?;
		}
		*tables = staged;
		Ok(())
	}

	#[instrument(name = "store::memory::insert_empty_row", level = "trace", skip(self), fields(table = %table))]
	fn insert_empty_row(&self, table: &str) -> Result<RowId> {
		let mut tables = self.inner.tables.write();
		let physical = tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;

		let id = RowId::generate();
		let mut row = HashMap::with_capacity(physical.columns.len());
		for column in &physical.columns {
			let value = match column.name.as_str() {
				IMPLICIT_ID_COLUMN => Value::String(id.to_string()),
				IMPLICIT_CREATED_AT_COLUMN => Value::from(now_millis()),
				_ => match &column.default {
					Some(default) => Value::String(default.literal.clone()),
					None => Value::Null,
				},
			};
			if column.not_null && value.is_null() {
				return_error!(store::null_violation(table, &column.name));
			}
			row.insert(column.name.clone(), value);
		}
		physical.rows.insert(id, row);
		Ok(id)
	}

	#[instrument(name = "store::memory::update_cell", level = "trace", skip(self, value), fields(table = %table, row = %row, column = %column))]
	fn update_cell(&self, table: &str, row: RowId, column: &str, value: Value) -> Result<()> {
		let mut tables = self.inner.tables.write();
		let physical = tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;

		let Some(existing) = physical.column(column) else {
			return_error!(store::column_not_found(table, column));
		};
		if existing.not_null && value.is_null() {
			return_error!(store::null_violation(table, column));
		}

		let Some(cells) = physical.rows.get_mut(&row) else {
			return_error!(store::row_not_found(table, row));
		};
		cells.insert(column.to_string(), value);
		Ok(())
	}

	#[instrument(name = "store::memory::delete_row", level = "trace", skip(self), fields(table = %table, row = %row))]
	fn delete_row(&self, table: &str, row: RowId) -> Result<()> {
		let mut tables = self.inner.tables.write();
		let physical = tables.get_mut(table).ok_or_else(|| error!(store::table_not_found(table)))?;

		if physical.rows.remove(&row).is_none() {
			return_error!(store::row_not_found(table, row));
		}
		Ok(())
	}
}
