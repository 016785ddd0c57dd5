// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{CatalogStore, ColumnDef, ColumnId, TableId};
use tablekit_ddl::{diff, synthesize_alter};
use tablekit_store::StructuredStore;
use tablekit_type::{ColumnType, DefaultValue, Result};
use tracing::instrument;

use crate::{Engine, validate::validate_column_name};

/// Desired state of a column after an edit; the differ compares it against
/// the stored snapshot.
#[derive(Debug, Clone)]
pub struct ColumnEdit {
	pub name: String,
	pub ty: ColumnType,
	pub required: bool,
	pub default: Option<DefaultValue>,
}

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	/// Applies a column edit.
	///
	/// The edited definition is staged in the catalog, then the diffed ALTER
	/// statements run against the store when the table is deployed. An edit
	/// that changes nothing returns early without a single write. A rejected
	/// ALTER reverts the staged definition to the snapshot; if the revert
	/// itself fails the divergence is surfaced as a Consistency error.
	#[instrument(name = "engine::column::update", level = "debug", skip(self, edit), fields(table = %table, column = %column))]
	pub fn update_column(&self, table: TableId, column: ColumnId, edit: ColumnEdit) -> Result<ColumnDef> {
		let table_def = self.table(table)?;
		let original = self.column_in_table(table, column)?;
		let existing = self.catalog.list_columns(table)?;
		validate_column_name(&edit.name, &existing, Some(column))?;

		let edited = ColumnDef {
			id: original.id,
			table: original.table,
			name: edit.name,
			ty: edit.ty,
			required: edit.required,
			default: edit.default,
			index: original.index,
			created_at: original.created_at,
		};

		let ops = diff(&original, &edited);
		if ops.is_empty() {
			return Ok(edited);
		}

		self.catalog.update_column(edited.clone())?;

		if let Some(physical) = &table_def.physical_name {
			let statements = synthesize_alter(physical, &ops);
			if let Err(ddl) = self.store.execute_ddl_batch(&statements) {
				return Err(self.compensate(&table_def, ddl, || {
					self.catalog.update_column(original.clone())
				}));
			}
		}
		Ok(edited)
	}
}
