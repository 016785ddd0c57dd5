// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::{CatalogStore, TableDef, TableId, TableState};
use tablekit_ddl::synthesize_create;
use tablekit_store::StructuredStore;
use tablekit_type::{Result, diagnostic::deploy, ident::sanitize, return_error};
use tracing::instrument;

use crate::{Engine, validate::ensure_distinct_identifiers};

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	/// Deploys a draft: binds the physical name, creates the physical table
	/// and seeds the requested blank rows.
	///
	/// Preconditions are checked before any side effect; a table that fails
	/// deployment ends in `DeployFailed` and can be retried. After the
	/// commit the table record is read back, and a missing physical name on
	/// the read is a Consistency error. A seeding failure aborts the
	/// remaining rows but never reverts the deployed table.
	#[instrument(name = "engine::table::deploy", level = "info", skip(self), fields(table = %table))]
	pub fn deploy_table(&self, table: TableId) -> Result<TableDef> {
		let def = self.table(table)?;
		let columns = self.catalog.list_columns(table)?;

		if columns.is_empty() {
			return_error!(deploy::empty_table(&def.name));
		}
		match def.state {
			TableState::Deployed => return_error!(deploy::already_deployed(&def.name)),
			TableState::Deploying => return_error!(deploy::deploy_in_progress(&def.name)),
			TableState::Draft | TableState::DeployFailed => {}
		}

		let physical = sanitize(&def.name.to_lowercase());
		if physical.is_empty() {
			return_error!(deploy::invalid_physical_name(&def.name));
		}
		self.ensure_physical_name_free(table, &def.name, &physical)?;
		ensure_distinct_identifiers(&columns)?;

		// Validation done; everything below mutates.
		let mut staged = def.clone();
		staged.state = TableState::Deploying;
		self.catalog.update_table(staged.clone())?;

		let statement = synthesize_create(&physical, &columns);
		if let Err(ddl) = self.store.execute_ddl(&statement) {
			tracing::warn!(table = %table, error = %ddl, "create table rejected, marking deploy as failed");
			staged.state = TableState::DeployFailed;
			if let Err(revert) = self.catalog.update_table(staged) {
				return_error!(deploy::revert_failed(&def.name, revert.diagnostic()));
			}
			return Err(ddl);
		}

		staged.physical_name = Some(physical.clone());
		staged.state = TableState::Deployed;
		self.catalog.update_table(staged)?;

		let verified = match self.catalog.find_table(table)? {
			Some(verified) if verified.physical_name.is_some() => verified,
			_ => return_error!(deploy::physical_name_missing(&def.name)),
		};

		for seeded in 0..verified.initial_row_count {
			if let Err(cause) = self.store.insert_empty_row(&physical) {
				return_error!(deploy::seed_aborted(
					&def.name,
					seeded,
					verified.initial_row_count,
					cause.diagnostic()
				));
			}
		}
		Ok(verified)
	}

	fn ensure_physical_name_free(&self, table: TableId, name: &str, physical: &str) -> Result<()> {
		for other in self.catalog.list_tables()? {
			if other.id == table {
				continue;
			}
			if other.physical_name.as_deref() == Some(physical) {
				return_error!(deploy::physical_name_collision(name, &other.name, physical));
			}
		}
		Ok(())
	}
}
