// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use tablekit_catalog::ColumnDef;
use tablekit_type::{StoreType, ident::sanitize};

use crate::{
	change::ChangeOp,
	statement::{ColumnSpec, DdlStatement},
};

/// Implicit surrogate identifier column, first in every created table.
pub const IMPLICIT_ID_COLUMN: &str = "id";
/// Implicit creation timestamp column, last in every created table.
pub const IMPLICIT_CREATED_AT_COLUMN: &str = "created_at";

fn column_spec(def: &ColumnDef) -> ColumnSpec {
	ColumnSpec {
		name: sanitize(&def.name),
		ty: def.ty.store_type(),
		default: def.default.clone(),
		not_null: def.required,
	}
}

/// Builds the CREATE TABLE statement for a deploy.
///
/// The statement always contains `len(columns) + 2` columns: the implicit
/// `id` uuid first, the user columns in ordinal order, and the implicit
/// `created_at` timestamp last. User column names are sanitized here;
/// `physical_name` is expected to be sanitized already.
pub fn synthesize_create(physical_name: &str, columns: &[ColumnDef]) -> DdlStatement {
	let mut specs = Vec::with_capacity(columns.len() + 2);
	specs.push(ColumnSpec {
		name: IMPLICIT_ID_COLUMN.to_string(),
		ty: StoreType::Uuid,
		default: None,
		not_null: true,
	});
	specs.extend(columns.iter().map(column_spec));
	specs.push(ColumnSpec {
		name: IMPLICIT_CREATED_AT_COLUMN.to_string(),
		ty: StoreType::Timestamptz,
		default: None,
		not_null: true,
	});

	DdlStatement::CreateTable {
		table: physical_name.to_string(),
		columns: specs,
	}
}

/// Turns change ops into ALTER statements, one per op, preserving op order.
pub fn synthesize_alter(physical_name: &str, ops: &[ChangeOp]) -> Vec<DdlStatement> {
	ops.iter()
		.map(|op| match op {
			ChangeOp::Added(def) => DdlStatement::AddColumn {
				table: physical_name.to_string(),
				column: column_spec(def),
			},
			ChangeOp::Dropped {
				name,
			} => DdlStatement::DropColumn {
				table: physical_name.to_string(),
				column: sanitize(name),
			},
			ChangeOp::Renamed {
				from,
				to,
			} => DdlStatement::RenameColumn {
				table: physical_name.to_string(),
				from: sanitize(from),
				to: sanitize(to),
			},
			ChangeOp::Retyped {
				name,
				to,
			} => DdlStatement::AlterColumnType {
				table: physical_name.to_string(),
				column: sanitize(name),
				ty: to.store_type(),
			},
			ChangeOp::RequiredChanged {
				name,
				required,
			} => DdlStatement::SetNotNull {
				table: physical_name.to_string(),
				column: sanitize(name),
				not_null: *required,
			},
			ChangeOp::DefaultChanged {
				name,
				default,
			} => DdlStatement::SetDefault {
				table: physical_name.to_string(),
				column: sanitize(name),
				default: default.clone(),
			},
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use tablekit_catalog::{ColumnId, ColumnIndex, TableId};
	use tablekit_type::{ColumnType, DefaultValue};

	use super::*;
	use crate::change::diff;

	fn column(id: u64, name: &str, ty: ColumnType, required: bool) -> ColumnDef {
		ColumnDef {
			id: ColumnId(id),
			table: TableId(1),
			name: name.to_string(),
			ty,
			required,
			default: None,
			index: ColumnIndex(0),
			created_at: 0,
		}
	}

	#[test]
	fn test_create_always_wraps_with_implicit_columns() {
		let columns = vec![
			column(1, "email", ColumnType::Email, true),
			column(2, "total", ColumnType::Number, false),
			column(3, "notes", ColumnType::Text, false),
		];

		let statement = synthesize_create("orders", &columns);
		let DdlStatement::CreateTable {
			table,
			columns: specs,
		} = &statement
		else {
			panic!("expected CreateTable, got {:?}", statement);
		};

		assert_eq!(table, "orders");
		assert_eq!(specs.len(), 5);
		assert_eq!(specs[0], ColumnSpec {
			name: "id".to_string(),
			ty: StoreType::Uuid,
			default: None,
			not_null: true,
		});
		assert_eq!(specs[4], ColumnSpec {
			name: "created_at".to_string(),
			ty: StoreType::Timestamptz,
			default: None,
			not_null: true,
		});
	}

	#[test]
	fn test_create_renders_mapped_types_and_nullability() {
		let columns = vec![column(1, "email", ColumnType::Email, true)];

		let sql = synthesize_create("users", &columns).to_sql();
		assert_eq!(
			sql,
			"CREATE TABLE \"users\" (\"id\" UUID NOT NULL, \"email\" TEXT NOT NULL, \"created_at\" TIMESTAMPTZ NOT NULL)"
		);
	}

	#[test]
	fn test_create_sanitizes_user_column_names() {
		let columns = vec![column(1, "Full Name", ColumnType::Text, false)];

		let sql = synthesize_create("users", &columns).to_sql();
		assert!(sql.contains("\"Full_Name\" TEXT"), "{}", sql);
	}

	#[test]
	fn test_alter_preserves_diff_order() {
		let original = column(1, "a", ColumnType::Text, false);
		let mut edited = column(1, "b", ColumnType::Number, true);
		edited.default = Some(DefaultValue::new(ColumnType::Number, "0"));

		let statements = synthesize_alter("orders", &diff(&original, &edited));
		let sql: Vec<String> = statements.iter().map(DdlStatement::to_sql).collect();

		assert_eq!(sql, vec![
			"ALTER TABLE \"orders\" RENAME COLUMN \"a\" TO \"b\"",
			"ALTER TABLE \"orders\" ALTER COLUMN \"b\" TYPE NUMERIC",
			"ALTER TABLE \"orders\" ALTER COLUMN \"b\" SET NOT NULL",
			"ALTER TABLE \"orders\" ALTER COLUMN \"b\" SET DEFAULT '0'",
		]);
	}

	#[test]
	fn test_alter_add_and_drop_are_guarded() {
		let added = ChangeOp::Added(column(7, "status", ColumnType::Text, false));
		let dropped = ChangeOp::Dropped {
			name: "status".to_string(),
		};

		let statements = synthesize_alter("orders", &[added, dropped]);
		assert!(statements[0].to_sql().contains("ADD COLUMN IF NOT EXISTS"));
		assert!(statements[1].to_sql().contains("DROP COLUMN IF EXISTS"));
	}

	#[test]
	fn test_no_ops_synthesize_no_statements() {
		assert!(synthesize_alter("orders", &[]).is_empty());
	}
}
