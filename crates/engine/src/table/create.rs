// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{CatalogStore, TableDef, TableState};
use tablekit_store::StructuredStore;
use tablekit_type::{ColumnType, Result};
use tracing::instrument;

use crate::{ColumnToAdd, Engine};

/// Input for [`Engine::create_table_draft`].
#[derive(Debug, Clone)]
pub struct TableToCreate {
	pub name: String,
	pub description: Option<String>,
	/// Placeholder text columns to scaffold so a fresh draft opens editable.
	pub initial_column_count: u16,
	/// Blank rows seeded after a successful deploy.
	pub initial_row_count: u32,
	pub created_by: String,
}

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	/// Creates a draft table: catalog metadata only, nothing physical.
	///
	/// Scaffolds `initial_column_count` placeholder columns named
	/// `column_1`, `column_2`, … (text, optional, no default).
	#[instrument(name = "engine::table::create", level = "debug", skip(self, to_create), fields(name = %to_create.name))]
	pub fn create_table_draft(&self, to_create: TableToCreate) -> Result<TableDef> {
		let id = self.catalog.next_table_id()?;
		let def = TableDef {
			id,
			name: to_create.name,
			description: to_create.description,
			physical_name: None,
			state: TableState::Draft,
			created_by: to_create.created_by,
			initial_row_count: to_create.initial_row_count,
			created_at: self.now(),
		};
		self.catalog.insert_table(def.clone())?;

		for ordinal in 1..=to_create.initial_column_count {
			self.add_column(id, ColumnToAdd {
				name: format!("column_{}", ordinal),
				ty: ColumnType::Text,
				required: false,
				default: None,
			})?;
		}
		Ok(def)
	}
}
