// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

mod add;
mod delete;
mod update;

use tablekit_catalog::{CatalogStore, TableDef};
use tablekit_store::StructuredStore;
use tablekit_type::{Error, Result, diagnostic::deploy, error};

use crate::Engine;

pub use add::ColumnToAdd;
pub use update::ColumnEdit;

impl<C: CatalogStore, S: StructuredStore> Engine<C, S> {
	/// Runs the compensating catalog write after the store rejected a DDL
	/// batch. Returns the error to surface: the DDL error when the revert
	/// succeeded, a Consistency error when it did not. In the latter case
	/// the catalog/store divergence is real and stays observable.
	pub(crate) fn compensate(
		&self,
		table: &TableDef,
		ddl: Error,
		revert: impl FnOnce() -> Result<()>,
	) -> Error {
		tracing::warn!(table = %table.id, error = %ddl, "DDL rejected, reverting staged metadata");
		match revert() {
			Ok(()) => ddl,
			Err(failure) => error!(deploy::revert_failed(&table.name, failure.diagnostic())),
		}
	}
}
