// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::ColumnDef;
use tablekit_type::{ColumnType, DefaultValue};

/// One detected difference between a captured column snapshot and its edit.
///
/// Ops carry logical column names; sanitization to physical identifiers
/// happens during synthesis. Ops emitted after a rename reference the new
/// name, so a statement sequence stays valid when executed in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeOp {
	/// Column exists in the edit but not in the snapshot.
	Added(ColumnDef),
	/// Column exists in the snapshot but not in the edit.
	Dropped {
		name: String,
	},
	Renamed {
		from: String,
		to: String,
	},
	Retyped {
		name: String,
		to: ColumnType,
	},
	RequiredChanged {
		name: String,
		required: bool,
	},
	DefaultChanged {
		name: String,
		default: Option<DefaultValue>,
	},
}

/// Compares a column snapshot against its edited version and returns the
/// change ops in emission order: rename, retype, required, default.
///
/// Rename comes first so every later op references the name the column will
/// have by the time its statement runs; retype precedes default so a new
/// default literal lands on the new type. Equal definitions diff to an empty
/// vec, which callers treat as "skip DDL entirely".
pub fn diff(original: &ColumnDef, edited: &ColumnDef) -> Vec<ChangeOp> {
	debug_assert_eq!(original.id, edited.id);

	let mut ops = Vec::new();
	if original.name != edited.name {
		ops.push(ChangeOp::Renamed {
			from: original.name.clone(),
			to: edited.name.clone(),
		});
	}
	if original.ty != edited.ty {
		ops.push(ChangeOp::Retyped {
			name: edited.name.clone(),
			to: edited.ty,
		});
	}
	if original.required != edited.required {
		ops.push(ChangeOp::RequiredChanged {
			name: edited.name.clone(),
			required: edited.required,
		});
	}
	if original.default != edited.default {
		ops.push(ChangeOp::DefaultChanged {
			name: edited.name.clone(),
			default: edited.default.clone(),
		});
	}
	ops
}

/// Diff for a column that is being removed. A drop supersedes every other
/// pending change, so this is always exactly one op.
pub fn diff_removed(original: &ColumnDef) -> Vec<ChangeOp> {
	vec![ChangeOp::Dropped {
		name: original.name.clone(),
	}]
}

#[cfg(test)]
mod tests {
	use tablekit_catalog::{ColumnId, ColumnIndex, TableId};

	use super::*;

	fn column(name: &str, ty: ColumnType, required: bool, default: Option<DefaultValue>) -> ColumnDef {
		ColumnDef {
			id: ColumnId(1),
			table: TableId(1),
			name: name.to_string(),
			ty,
			required,
			default,
			index: ColumnIndex(0),
			created_at: 0,
		}
	}

	#[test]
	fn test_identical_definitions_diff_to_nothing() {
		let original = column("email", ColumnType::Email, true, None);
		assert!(diff(&original, &original.clone()).is_empty());
	}

	#[test]
	fn test_full_edit_emits_every_op_in_order() {
		let original = column("a", ColumnType::Text, false, None);
		let edited = column("b", ColumnType::Number, true, Some(DefaultValue::new(ColumnType::Number, "0")));

		let ops = diff(&original, &edited);
		assert_eq!(ops, vec![
			ChangeOp::Renamed {
				from: "a".to_string(),
				to: "b".to_string()
			},
			ChangeOp::Retyped {
				name: "b".to_string(),
				to: ColumnType::Number
			},
			ChangeOp::RequiredChanged {
				name: "b".to_string(),
				required: true
			},
			ChangeOp::DefaultChanged {
				name: "b".to_string(),
				default: Some(DefaultValue::new(ColumnType::Number, "0"))
			},
		]);
	}

	#[test]
	fn test_rename_only() {
		let original = column("Full Name", ColumnType::Text, false, None);
		let edited = column("Display Name", ColumnType::Text, false, None);

		assert_eq!(diff(&original, &edited), vec![ChangeOp::Renamed {
			from: "Full Name".to_string(),
			to: "Display Name".to_string()
		}]);
	}

	#[test]
	fn test_ops_after_a_rename_carry_the_new_name() {
		let original = column("a", ColumnType::Text, false, None);
		let mut edited = column("b", ColumnType::Text, false, None);
		edited.required = true;

		let ops = diff(&original, &edited);
		assert_eq!(ops[1], ChangeOp::RequiredChanged {
			name: "b".to_string(),
			required: true
		});
	}

	#[test]
	fn test_clearing_a_default_emits_default_changed_none() {
		let original = column("status", ColumnType::Text, false, Some(DefaultValue::text("new")));
		let edited = column("status", ColumnType::Text, false, None);

		assert_eq!(diff(&original, &edited), vec![ChangeOp::DefaultChanged {
			name: "status".to_string(),
			default: None
		}]);
	}

	#[test]
	fn test_removal_supersedes_any_edit() {
		let original = column("old", ColumnType::Text, false, Some(DefaultValue::text("x")));

		assert_eq!(diff_removed(&original), vec![ChangeOp::Dropped {
			name: "old".to_string()
		}]);
	}
}
