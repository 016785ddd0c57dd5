// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

use serde_json::json;
use tablekit_catalog::MemoryCatalog;
use tablekit_engine::{ColumnEdit, ColumnToAdd, Engine, TableToCreate};
use tablekit_store::MemoryStore;
use tablekit_type::{ColumnType, DefaultValue};
use tracing_subscriber::EnvFilter;

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let engine = Engine::new(MemoryCatalog::new(), MemoryStore::new());

	// Draft a table; nothing physical exists yet.
	let table = engine
		.create_table_draft(TableToCreate {
			name: "Customer Orders".to_string(),
			description: Some("Orders placed through the storefront".to_string()),
			initial_column_count: 0,
			initial_row_count: 2,
			created_by: "playground".to_string(),
		})
		.unwrap();
	println!("drafted table #{} `{}` ({:?})", table.id, table.name, table.state);

	let email = engine
		.add_column(table.id, ColumnToAdd {
			name: "email".to_string(),
			ty: ColumnType::Email,
			required: false,
			default: None,
		})
		.unwrap();
	engine.add_column(table.id, ColumnToAdd {
		name: "status".to_string(),
		ty: ColumnType::Text,
		required: true,
		default: Some(DefaultValue::text("new")),
	})
	.unwrap();
	let total = engine
		.add_column(table.id, ColumnToAdd {
			name: "total".to_string(),
			ty: ColumnType::Number,
			required: false,
			default: None,
		})
		.unwrap();
	println!("columns: {:?}", engine
		.list_columns(table.id)
		.unwrap()
		.iter()
		.map(|column| column.name.clone())
		.collect::<Vec<_>>());

	// Deploy: binds the physical name, creates the table, seeds two rows.
	let deployed = engine.deploy_table(table.id).unwrap();
	let physical = deployed.physical_name.clone().unwrap();
	println!("deployed as `{}` ({:?})", physical, deployed.state);
	print_schema(&engine, &physical);

	// Schema changes after deployment go through the differ.
	engine.update_column(table.id, total.id, ColumnEdit {
		name: "amount".to_string(),
		ty: ColumnType::Number,
		required: false,
		default: Some(DefaultValue::new(ColumnType::Number, "0")),
	})
	.unwrap();
	engine.add_column(table.id, ColumnToAdd {
		name: "source".to_string(),
		ty: ColumnType::Text,
		required: true,
		default: Some(DefaultValue::text("web")),
	})
	.unwrap();
	println!("after rename + add:");
	print_schema(&engine, &physical);

	// Row operations against the deployed table.
	let row = engine.insert_row(table.id).unwrap();
	engine.update_cell(table.id, row, email.id, json!("ada@example.com")).unwrap();
	println!("rows: {}", engine.store().row_count(&physical).unwrap());
	println!("row {}: {:?}", row, engine.store().row(&physical, row).unwrap());
}

fn print_schema(engine: &Engine<MemoryCatalog, MemoryStore>, physical: &str) {
	for column in engine.store().describe(physical).unwrap() {
		let not_null = if column.not_null {
			" NOT NULL"
		} else {
			""
		};
		let default = column
			.default
			.as_ref()
			.map(|default| format!(" DEFAULT '{}'", default.literal))
			.unwrap_or_default();
		println!("  \"{}\" {}{}{}", column.name, column.ty, default, not_null);
	}
}
