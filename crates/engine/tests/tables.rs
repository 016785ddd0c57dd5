// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use tablekit_catalog::{CatalogStore, MemoryCatalog, TableId, TableState};
use tablekit_engine::{Clock, ColumnToAdd, Engine, TableToCreate};
use tablekit_store::MemoryStore;
use tablekit_type::{ColumnType, ErrorKind};

fn engine() -> Engine<MemoryCatalog, MemoryStore> {
	Engine::new(MemoryCatalog::new(), MemoryStore::new())
}

fn to_create(name: &str) -> TableToCreate {
	TableToCreate {
		name: name.to_string(),
		description: None,
		initial_column_count: 0,
		initial_row_count: 0,
		created_by: "test".to_string(),
	}
}

fn add(name: &str, ty: ColumnType, required: bool) -> ColumnToAdd {
	ColumnToAdd {
		name: name.to_string(),
		ty,
		required,
		default: None,
	}
}

#[test]
fn test_create_draft_is_metadata_only() {
	let engine = engine();
	let table = engine.create_table_draft(to_create("Customer Orders")).unwrap();

	assert_eq!(table.state, TableState::Draft);
	assert!(table.physical_name.is_none());
	assert!(engine.store().describe("customer_orders").is_none());

	let found = engine.get_table(table.id).unwrap();
	assert_eq!(found, table);
}

#[test]
fn test_create_draft_scaffolds_placeholder_columns() {
	let engine = engine();
	let mut request = to_create("Leads");
	request.initial_column_count = 3;
	let table = engine.create_table_draft(request).unwrap();

	let columns = engine.list_columns(table.id).unwrap();
	let names: Vec<&str> = columns.iter().map(|column| column.name.as_str()).collect();
	assert_eq!(names, vec!["column_1", "column_2", "column_3"]);
	assert!(
		columns
			.iter()
			.all(|column| column.ty == ColumnType::Text && !column.required && column.default.is_none())
	);
}

#[test]
fn test_timestamps_come_from_the_injected_clock() {
	let clock: Clock = Arc::new(|| 42);
	let engine = Engine::with_clock(MemoryCatalog::new(), MemoryStore::new(), clock);

	let table = engine.create_table_draft(to_create("Leads")).unwrap();
	assert_eq!(table.created_at, 42);

	let column = engine.add_column(table.id, add("email", ColumnType::Email, false)).unwrap();
	assert_eq!(column.created_at, 42);
}

#[test]
fn test_get_missing_table() {
	let engine = engine();
	let err = engine.get_table(TableId(999)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::NotFound);
	assert_eq!(err.diagnostic().code, "CAT_001");
}

#[test]
fn test_list_tables_in_id_order() {
	let engine = engine();
	let first = engine.create_table_draft(to_create("First")).unwrap();
	let second = engine.create_table_draft(to_create("Second")).unwrap();

	let tables = engine.list_tables().unwrap();
	assert_eq!(tables.len(), 2);
	assert_eq!(tables[0].id, first.id);
	assert_eq!(tables[1].id, second.id);
}

#[test]
fn test_list_columns_of_missing_table() {
	let engine = engine();
	let err = engine.list_columns(TableId(1)).unwrap_err();
	assert_eq!(err.diagnostic().code, "CAT_001");
}

#[test]
fn test_delete_table_keeps_the_physical_table() {
	let engine = engine();
	let table = engine.create_table_draft(to_create("Orders")).unwrap();
	engine.add_column(table.id, add("email", ColumnType::Email, false)).unwrap();
	let deployed = engine.deploy_table(table.id).unwrap();
	let physical = deployed.physical_name.unwrap();

	engine.delete_table(table.id).unwrap();

	assert_eq!(engine.get_table(table.id).unwrap_err().diagnostic().code, "CAT_001");
	assert!(engine.catalog().list_columns(table.id).unwrap().is_empty());
	// The physical table is orphaned, never dropped.
	assert!(engine.store().describe(&physical).is_some());
}

#[test]
fn test_delete_missing_table() {
	let engine = engine();
	let err = engine.delete_table(TableId(1)).unwrap_err();
	assert_eq!(err.diagnostic().code, "CAT_001");
}
