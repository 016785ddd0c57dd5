// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tablekit_type::{ColumnType, DefaultValue};

use crate::id::{ColumnId, TableId};

/// Deployment lifecycle of a table.
///
/// `Deployed` is terminal; `DeployFailed` may be retried.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableState {
	Draft,
	Deploying,
	Deployed,
	DeployFailed,
}

/// Ordinal position of a column within its table.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnIndex(pub u16);

impl Deref for ColumnIndex {
	type Target = u16;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Logical definition of a user table.
///
/// `physical_name` is `None` while the table is a draft and is bound exactly
/// once, immutably, when a deploy succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
	pub id: TableId,
	pub name: String,
	pub description: Option<String>,
	pub physical_name: Option<String>,
	pub state: TableState,
	pub created_by: String,
	pub initial_row_count: u32,
	pub created_at: u64,
}

/// Logical definition of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub id: ColumnId,
	pub table: TableId,
	pub name: String,
	pub ty: ColumnType,
	pub required: bool,
	pub default: Option<DefaultValue>,
	pub index: ColumnIndex,
	pub created_at: u64,
}

#[cfg(test)]
mod tests {
	use tablekit_type::ColumnType;

	use super::*;

	#[test]
	fn test_table_def_serde_round_trip() {
		let def = TableDef {
			id: TableId(1),
			name: "Customer Orders".to_string(),
			description: Some("orders placed in the shop".to_string()),
			physical_name: None,
			state: TableState::Draft,
			created_by: "jonas".to_string(),
			initial_row_count: 3,
			created_at: 1_700_000_000_000,
		};

		let json = serde_json::to_string(&def).unwrap();
		assert!(json.contains("\"state\":\"draft\""));
		let back: TableDef = serde_json::from_str(&json).unwrap();
		assert_eq!(back, def);
	}

	#[test]
	fn test_column_def_serde_round_trip() {
		let def = ColumnDef {
			id: ColumnId(9),
			table: TableId(1),
			name: "email".to_string(),
			ty: ColumnType::Email,
			required: true,
			default: Some(DefaultValue::new(ColumnType::Email, "none@example.com")),
			index: ColumnIndex(0),
			created_at: 1_700_000_000_000,
		};

		let back: ColumnDef = serde_json::from_str(&serde_json::to_string(&def).unwrap()).unwrap();
		assert_eq!(back, def);
	}

	#[test]
	fn test_deploy_failed_state_tag() {
		let json = serde_json::to_string(&TableState::DeployFailed).unwrap();
		assert_eq!(json, "\"deploy_failed\"");
	}
}
