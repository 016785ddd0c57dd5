// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! Sqlite-backed catalog.
//!
//! Definitions are stored as JSON blobs keyed by id; ids come from a
//! `sequences` table so they survive restarts.

use std::{path::PathBuf, sync::Arc};

use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use tablekit_type::{Error, Result, diagnostic::catalog, error, return_error};
use tracing::instrument;

use crate::{
	change::{CatalogChange, Notifier},
	def::{ColumnDef, TableDef},
	id::{ColumnId, TableId},
	store::CatalogStore,
};

const BOOTSTRAP: &str = "
CREATE TABLE IF NOT EXISTS tables (
    id INTEGER PRIMARY KEY,
    def TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS columns (
    id INTEGER PRIMARY KEY,
    table_id INTEGER NOT NULL,
    idx INTEGER NOT NULL,
    def TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS sequences (
    name TEXT PRIMARY KEY,
    next INTEGER NOT NULL
);
";

const TABLE_SEQUENCE: &str = "table";
const COLUMN_SEQUENCE: &str = "column";

/// Where the catalog database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbPath {
	File(PathBuf),
	Memory,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JournalMode {
	Wal,
	Delete,
	Memory,
}

impl JournalMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			JournalMode::Wal => "WAL",
			JournalMode::Delete => "DELETE",
			JournalMode::Memory => "MEMORY",
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynchronousMode {
	Off,
	Normal,
	Full,
}

impl SynchronousMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			SynchronousMode::Off => "OFF",
			SynchronousMode::Normal => "NORMAL",
			SynchronousMode::Full => "FULL",
		}
	}
}

/// Configuration for [`SqliteCatalog`].
#[derive(Debug, Clone)]
pub struct SqliteCatalogConfig {
	pub path: DbPath,
	pub journal_mode: JournalMode,
	pub synchronous: SynchronousMode,
}

impl SqliteCatalogConfig {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: DbPath::File(path.into()),
			journal_mode: JournalMode::Wal,
			synchronous: SynchronousMode::Normal,
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			journal_mode: JournalMode::Memory,
			synchronous: SynchronousMode::Off,
		}
	}
}

/// Sqlite-backed catalog backend.
///
/// One connection guarded by a mutex; a single logical writer is assumed, so
/// there is no writer thread. Multi-record mutations run inside one sqlite
/// transaction. Cheap to clone; all clones share the connection.
#[derive(Clone)]
pub struct SqliteCatalog {
	inner: Arc<SqliteCatalogInner>,
}

struct SqliteCatalogInner {
	conn: Mutex<Connection>,
	notifier: Notifier,
}

impl SqliteCatalog {
	/// Opens (or creates) the catalog database described by `config`.
	#[instrument(name = "catalog::sqlite::new", level = "info", skip(config), fields(
		path = ?config.path,
		journal_mode = %config.journal_mode.as_str()
	))]
	pub fn new(config: SqliteCatalogConfig) -> Self {
		let conn = match &config.path {
			DbPath::File(path) => Connection::open(path),
			DbPath::Memory => Connection::open_in_memory(),
		}
		.expect("Failed to open catalog database");

		conn.pragma_update(None, "journal_mode", config.journal_mode.as_str()).unwrap();
		conn.pragma_update(None, "synchronous", config.synchronous.as_str()).unwrap();

		conn.execute_batch(BOOTSTRAP).expect("Failed to bootstrap catalog schema");

		Self {
			inner: Arc::new(SqliteCatalogInner {
				conn: Mutex::new(conn),
				notifier: Notifier::new(),
			}),
		}
	}

	/// In-memory catalog database for testing.
	pub fn in_memory() -> Self {
		Self::new(SqliteCatalogConfig::in_memory())
	}

	fn next_id(&self, sequence: &str) -> Result<u64> {
		let conn = self.inner.conn.lock();
		let tx = conn.unchecked_transaction().map_err(|e| storage_error("begin id allocation", e))?;
		tx.execute(
			"INSERT INTO sequences (name, next) VALUES (?1, 1) \
			 ON CONFLICT(name) DO UPDATE SET next = next + 1",
			params![sequence],
		)
		.map_err(|e| storage_error("advance sequence", e))?;
		let next: u64 = tx
			.query_row("SELECT next FROM sequences WHERE name = ?1", params![sequence], |row| row.get(0))
			.map_err(|e| storage_error("read sequence", e))?;
		tx.commit().map_err(|e| storage_error("commit id allocation", e))?;
		Ok(next)
	}
}

fn storage_error(op: &str, err: rusqlite::Error) -> Error {
	error!(catalog::storage(format!("failed to {}: {}", op, err)))
}

fn encode_error(op: &str, err: serde_json::Error) -> Error {
	error!(catalog::codec(format!("failed to {}: {}", op, err)))
}

impl CatalogStore for SqliteCatalog {
	fn next_table_id(&self) -> Result<TableId> {
		self.next_id(TABLE_SEQUENCE).map(TableId)
	}

	fn next_column_id(&self) -> Result<ColumnId> {
		self.next_id(COLUMN_SEQUENCE).map(ColumnId)
	}

	#[instrument(name = "catalog::sqlite::insert_table", level = "debug", skip(self, def), fields(table = %def.id))]
	fn insert_table(&self, def: TableDef) -> Result<()> {
		let table = def.id;
		let json = serde_json::to_string(&def).map_err(|e| encode_error("encode table definition", e))?;
		{
			let conn = self.inner.conn.lock();
			let exists =
				match conn.query_row("SELECT 1 FROM tables WHERE id = ?1", params![table.0], |_| Ok(())) {
					Ok(()) => true,
					Err(rusqlite::Error::QueryReturnedNoRows) => false,
					Err(e) => return Err(storage_error("probe table", e)),
				};
			if exists {
				return_error!(catalog::duplicate_table_id(table));
			}
			conn.execute("INSERT INTO tables (id, def) VALUES (?1, ?2)", params![table.0, json])
				.map_err(|e| storage_error("insert table", e))?;
		}
		self.inner.notifier.notify(CatalogChange::TableCreated {
			table,
		});
		Ok(())
	}

	#[instrument(name = "catalog::sqlite::update_table", level = "debug", skip(self, def), fields(table = %def.id))]
	fn update_table(&self, def: TableDef) -> Result<()> {
		let table = def.id;
		let json = serde_json::to_string(&def).map_err(|e| encode_error("encode table definition", e))?;
		{
			let conn = self.inner.conn.lock();
			let affected = conn
				.execute("UPDATE tables SET def = ?2 WHERE id = ?1", params![table.0, json])
				.map_err(|e| storage_error("update table", e))?;
			if affected == 0 {
				return_error!(catalog::table_not_found(table));
			}
		}
		self.inner.notifier.notify(CatalogChange::TableUpdated {
			table,
		});
		Ok(())
	}

	#[instrument(name = "catalog::sqlite::remove_table", level = "debug", skip(self), fields(table = %table))]
	fn remove_table(&self, table: TableId) -> Result<()> {
		{
			let conn = self.inner.conn.lock();
			let tx = conn.unchecked_transaction().map_err(|e| storage_error("begin table removal", e))?;
			let affected = tx
				.execute("DELETE FROM tables WHERE id = ?1", params![table.0])
				.map_err(|e| storage_error("remove table", e))?;
			if affected == 0 {
				return_error!(catalog::table_not_found(table));
			}
			tx.execute("DELETE FROM columns WHERE table_id = ?1", params![table.0])
				.map_err(|e| storage_error("remove table columns", e))?;
			tx.commit().map_err(|e| storage_error("commit table removal", e))?;
		}
		self.inner.notifier.notify(CatalogChange::TableDeleted {
			table,
		});
		Ok(())
	}

	fn find_table(&self, table: TableId) -> Result<Option<TableDef>> {
		let conn = self.inner.conn.lock();
		match conn.query_row("SELECT def FROM tables WHERE id = ?1", params![table.0], |row| {
			row.get::<_, String>(0)
		}) {
			Ok(json) => {
				Ok(Some(serde_json::from_str(&json).map_err(|e| encode_error("decode table definition", e))?))
			}
			Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
			Err(e) => Err(storage_error("read table", e)),
		}
	}

	fn list_tables(&self) -> Result<Vec<TableDef>> {
		let conn = self.inner.conn.lock();
		let mut stmt =
			conn.prepare("SELECT def FROM tables ORDER BY id").map_err(|e| storage_error("list tables", e))?;
		let rows = stmt
			.query_map([], |row| row.get::<_, String>(0))
			.map_err(|e| storage_error("list tables", e))?;

		let mut tables = Vec::new();
		for row in rows {
			let json = row.map_err(|e| storage_error("list tables", e))?;
			tables.push(serde_json::from_str(&json).map_err(|e| encode_error("decode table definition", e))?);
		}
		Ok(tables)
	}

	#[instrument(name = "catalog::sqlite::insert_column", level = "debug", skip(self, def), fields(table = %def.table, column = %def.id))]
	fn insert_column(&self, def: ColumnDef) -> Result<()> {
		let table = def.table;
		let column = def.id;
		let json = serde_json::to_string(&def).map_err(|e| encode_error("encode column definition", e))?;
		{
			let conn = self.inner.conn.lock();
			let exists =
				match conn.query_row("SELECT 1 FROM columns WHERE id = ?1", params![column.0], |_| Ok(())) {
					Ok(()) => true,
					Err(rusqlite::Error::QueryReturnedNoRows) => false,
					Err(e) => return Err(storage_error("probe column", e)),
				};
			if exists {
				return_error!(catalog::duplicate_column_id(column));
			}
			conn.execute(
				"INSERT INTO columns (id, table_id, idx, def) VALUES (?1, ?2, ?3, ?4)",
				params![column.0, table.0, def.index.0, json],
			)
			.map_err(|e| storage_error("insert column", e))?;
		}
		self.inner.notifier.notify(CatalogChange::ColumnCreated {
			table,
			column,
		});
		Ok(())
	}

	#[instrument(name = "catalog::sqlite::update_column", level = "debug", skip(self, def), fields(table = %def.table, column = %def.id))]
	fn update_column(&self, def: ColumnDef) -> Result<()> {
		let table = def.table;
		let column = def.id;
		let json = serde_json::to_string(&def).map_err(|e| encode_error("encode column definition", e))?;
		{
			let conn = self.inner.conn.lock();
			let affected = conn
				.execute(
					"UPDATE columns SET table_id = ?2, idx = ?3, def = ?4 WHERE id = ?1",
					params![column.0, table.0, def.index.0, json],
				)
				.map_err(|e| storage_error("update column", e))?;
			if affected == 0 {
				return_error!(catalog::column_not_found(column));
			}
		}
		self.inner.notifier.notify(CatalogChange::ColumnUpdated {
			table,
			column,
		});
		Ok(())
	}

	#[instrument(name = "catalog::sqlite::remove_column", level = "debug", skip(self), fields(column = %column))]
	fn remove_column(&self, column: ColumnId) -> Result<()> {
		let table = {
			let conn = self.inner.conn.lock();
			let tx = conn.unchecked_transaction().map_err(|e| storage_error("begin column removal", e))?;
			let table_id = match tx.query_row(
				"SELECT table_id FROM columns WHERE id = ?1",
				params![column.0],
				|row| row.get::<_, u64>(0),
			) {
				Ok(id) => TableId(id),
				Err(rusqlite::Error::QueryReturnedNoRows) => {
					return_error!(catalog::column_not_found(column))
				}
				Err(e) => return Err(storage_error("probe column", e)),
			};
			tx.execute("DELETE FROM columns WHERE id = ?1", params![column.0])
				.map_err(|e| storage_error("remove column", e))?;
			tx.commit().map_err(|e| storage_error("commit column removal", e))?;
			table_id
		};
		self.inner.notifier.notify(CatalogChange::ColumnDeleted {
			table,
			column,
		});
		Ok(())
	}

	fn find_column(&self, column: ColumnId) -> Result<Option<ColumnDef>> {
		let conn = self.inner.conn.lock();
		match conn.query_row("SELECT def FROM columns WHERE id = ?1", params![column.0], |row| {
			row.get::<_, String>(0)
		}) {
			Ok(json) => Ok(Some(
				serde_json::from_str(&json).map_err(|e| encode_error("decode column definition", e))?,
			)),
			Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
			Err(e) => Err(storage_error("read column", e)),
		}
	}

	fn list_columns(&self, table: TableId) -> Result<Vec<ColumnDef>> {
		let conn = self.inner.conn.lock();
		let mut stmt = conn
			.prepare("SELECT def FROM columns WHERE table_id = ?1 ORDER BY idx, id")
			.map_err(|e| storage_error("list columns", e))?;
		let rows = stmt
			.query_map(params![table.0], |row| row.get::<_, String>(0))
			.map_err(|e| storage_error("list columns", e))?;

		let mut columns = Vec::new();
		for row in rows {
			let json = row.map_err(|e| storage_error("list columns", e))?;
			columns.push(serde_json::from_str(&json).map_err(|e| encode_error("decode column definition", e))?);
		}
		Ok(columns)
	}

	fn subscribe(&self, table: TableId) -> Receiver<CatalogChange> {
		self.inner.notifier.subscribe(table)
	}
}

#[cfg(test)]
mod tests {
	use tablekit_type::{ColumnType, DefaultValue};

	use super::*;
	use crate::def::{ColumnIndex, TableState};

	fn table_def(id: u64, name: &str) -> TableDef {
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

	fn column_def(id: u64, table: u64, name: &str, index: u16) -> ColumnDef {
		ColumnDef {
			id: ColumnId(id),
			table: TableId(table),
			name: name.to_string(),
			ty: ColumnType::Text,
			required: false,
			default: None,
			index: ColumnIndex(index),
			created_at: 0,
		}
	}

	#[test]
	fn test_sequences_survive_within_a_connection() {
		let catalog = SqliteCatalog::in_memory();
		assert_eq!(catalog.next_table_id().unwrap(), TableId(1));
		assert_eq!(catalog.next_table_id().unwrap(), TableId(2));
		assert_eq!(catalog.next_column_id().unwrap(), ColumnId(1));
		assert_eq!(catalog.next_table_id().unwrap(), TableId(3));
	}

	#[test]
	fn test_table_round_trip() {
		let catalog = SqliteCatalog::in_memory();
		catalog.insert_table(table_def(1, "orders")).unwrap();

		let found = catalog.find_table(TableId(1)).unwrap().unwrap();
		assert_eq!(found.name, "orders");
		assert_eq!(found.state, TableState::Draft);

		let mut updated = found.clone();
		updated.state = TableState::Deployed;
		updated.physical_name = Some("orders".to_string());
		catalog.update_table(updated).unwrap();

		let found = catalog.find_table(TableId(1)).unwrap().unwrap();
		assert_eq!(found.physical_name.as_deref(), Some("orders"));

		catalog.remove_table(TableId(1)).unwrap();
		assert!(catalog.find_table(TableId(1)).unwrap().is_none());
	}

	#[test]
	fn test_insert_duplicate_table_id() {
		let catalog = SqliteCatalog::in_memory();
		catalog.insert_table(table_def(1, "orders")).unwrap();
		let err = catalog.insert_table(table_def(1, "other")).unwrap_err();
		assert_eq!(err.diagnostic().code, "CAT_004");
	}

	#[test]
	fn test_update_missing_column() {
		let catalog = SqliteCatalog::in_memory();
		let err = catalog.update_column(column_def(5, 1, "ghost", 0)).unwrap_err();
		assert_eq!(err.diagnostic().code, "CAT_002");
	}

	#[test]
	fn test_remove_table_cascades_columns() {
		let catalog = SqliteCatalog::in_memory();
		catalog.insert_table(table_def(1, "orders")).unwrap();
		catalog.insert_column(column_def(1, 1, "email", 0)).unwrap();
		catalog.insert_column(column_def(2, 1, "total", 1)).unwrap();

		catalog.remove_table(TableId(1)).unwrap();
		assert!(catalog.find_column(ColumnId(1)).unwrap().is_none());
		assert!(catalog.find_column(ColumnId(2)).unwrap().is_none());
	}

	#[test]
	fn test_column_definitions_round_trip_with_defaults() {
		let catalog = SqliteCatalog::in_memory();
		catalog.insert_table(table_def(1, "orders")).unwrap();

		let mut def = column_def(1, 1, "status", 0);
		def.ty = ColumnType::Text;
		def.required = true;
		def.default = Some(DefaultValue::text("it's new"));
		catalog.insert_column(def.clone()).unwrap();

		let found = catalog.find_column(ColumnId(1)).unwrap().unwrap();
		assert_eq!(found, def);
	}

	#[test]
	fn test_list_columns_in_ordinal_order() {
		let catalog = SqliteCatalog::in_memory();
		catalog.insert_table(table_def(1, "orders")).unwrap();
		catalog.insert_column(column_def(3, 1, "c", 2)).unwrap();
		catalog.insert_column(column_def(1, 1, "a", 0)).unwrap();
		catalog.insert_column(column_def(2, 1, "b", 1)).unwrap();

		let names: Vec<String> = catalog.list_columns(TableId(1)).unwrap().into_iter().map(|c| c.name).collect();
		assert_eq!(names, vec!["a", "b", "c"]);
	}

	#[test]
	fn test_mutations_notify_subscribers() {
		let catalog = SqliteCatalog::in_memory();
		catalog.insert_table(table_def(1, "orders")).unwrap();
		let changes = catalog.subscribe(TableId(1));

		catalog.insert_column(column_def(1, 1, "email", 0)).unwrap();
		assert_eq!(changes.try_recv().unwrap(), CatalogChange::ColumnCreated {
			table: TableId(1),
			column: ColumnId(1)
		});
	}
}
