// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use tablekit_type::{DefaultValue, StoreType};

/// A physical column inside a [`DdlStatement`].
///
/// `name` is already sanitized; defaults render as opaque single-quoted text
/// literals regardless of type.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
	pub name: String,
	pub ty: StoreType,
	pub default: Option<DefaultValue>,
	pub not_null: bool,
}

/// One schema-changing statement against the structured store.
///
/// Statements render to SQL-shaped text via [`Display`], but stores are free
/// to interpret the variants structurally instead of parsing the text.
#[derive(Debug, Clone, PartialEq)]
pub enum DdlStatement {
	CreateTable {
		table: String,
		columns: Vec<ColumnSpec>,
	},
	/// Idempotent: adding a column that already exists is a no-op.
	AddColumn {
		table: String,
		column: ColumnSpec,
	},
	/// Idempotent: dropping a column that does not exist is a no-op.
	DropColumn {
		table: String,
		column: String,
	},
	RenameColumn {
		table: String,
		from: String,
		to: String,
	},
	AlterColumnType {
		table: String,
		column: String,
		ty: StoreType,
	},
	/// Absolute nullability state, safe to repeat.
	SetNotNull {
		table: String,
		column: String,
		not_null: bool,
	},
	/// `None` clears the default.
	SetDefault {
		table: String,
		column: String,
		default: Option<DefaultValue>,
	},
}

impl DdlStatement {
	pub fn table(&self) -> &str {
		match self {
			DdlStatement::CreateTable {
				table, ..
			}
			| DdlStatement::AddColumn {
				table, ..
			}
			| DdlStatement::DropColumn {
				table, ..
			}
			| DdlStatement::RenameColumn {
				table, ..
			}
			| DdlStatement::AlterColumnType {
				table, ..
			}
			| DdlStatement::SetNotNull {
				table, ..
			}
			| DdlStatement::SetDefault {
				table, ..
			} => table,
		}
	}

	pub fn to_sql(&self) -> String {
		self.to_string()
	}
}

/// Escapes a text literal for single-quoted rendering by doubling quotes.
pub(crate) fn escape_literal(literal: &str) -> String {
	literal.replace('\'', "''")
}

impl Display for ColumnSpec {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "\"{}\" {}", self.name, self.ty.as_sql())?;
		if let Some(default) = &self.default {
			write!(f, " DEFAULT '{}'", escape_literal(&default.literal))?;
		}
		if self.not_null {
			write!(f, " NOT NULL")?;
		}
		Ok(())
	}
}

impl Display for DdlStatement {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			DdlStatement::CreateTable {
				table,
				columns,
			} => {
				write!(f, "CREATE TABLE \"{}\" (", table)?;
				for (index, column) in columns.iter().enumerate() {
					if index > 0 {
						write!(f, ", ")?;
					}
					write!(f, "{}", column)?;
				}
				write!(f, ")")
			}
			DdlStatement::AddColumn {
				table,
				column,
			} => {
				write!(f, "ALTER TABLE \"{}\" ADD COLUMN IF NOT EXISTS {}", table, column)
			}
			DdlStatement::DropColumn {
				table,
				column,
			} => {
				write!(f, "ALTER TABLE \"{}\" DROP COLUMN IF EXISTS \"{}\"", table, column)
			}
			DdlStatement::RenameColumn {
				table,
				from,
				to,
			} => {
				write!(f, "ALTER TABLE \"{}\" RENAME COLUMN \"{}\" TO \"{}\"", table, from, to)
			}
			DdlStatement::AlterColumnType {
				table,
				column,
				ty,
			} => {
				write!(f, "ALTER TABLE \"{}\" ALTER COLUMN \"{}\" TYPE {}", table, column, ty.as_sql())
			}
			DdlStatement::SetNotNull {
				table,
				column,
				not_null,
			} => {
				let action = if *not_null {
					"SET"
				} else {
					"DROP"
				};
				write!(f, "ALTER TABLE \"{}\" ALTER COLUMN \"{}\" {} NOT NULL", table, column, action)
			}
			DdlStatement::SetDefault {
				table,
				column,
				default,
			} => match default {
				Some(default) => write!(
					f,
					"ALTER TABLE \"{}\" ALTER COLUMN \"{}\" SET DEFAULT '{}'",
					table,
					column,
					escape_literal(&default.literal)
				),
				None => {
					write!(f, "ALTER TABLE \"{}\" ALTER COLUMN \"{}\" DROP DEFAULT", table, column)
				}
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use tablekit_type::ColumnType;

	use super::*;

	#[test]
	fn test_create_table_rendering() {
		let statement = DdlStatement::CreateTable {
			table: "orders".to_string(),
			columns: vec![
				ColumnSpec {
					name: "id".to_string(),
					ty: StoreType::Uuid,
					default: None,
					not_null: true,
				},
				ColumnSpec {
					name: "email".to_string(),
					ty: StoreType::Text,
					default: None,
					not_null: true,
				},
				ColumnSpec {
					name: "total".to_string(),
					ty: StoreType::Numeric,
					default: Some(DefaultValue::new(ColumnType::Number, "0")),
					not_null: false,
				},
			],
		};

		assert_eq!(
			statement.to_sql(),
			"CREATE TABLE \"orders\" (\"id\" UUID NOT NULL, \"email\" TEXT NOT NULL, \"total\" NUMERIC DEFAULT '0')"
		);
	}

	#[test]
	fn test_add_column_rendering() {
		let statement = DdlStatement::AddColumn {
			table: "orders".to_string(),
			column: ColumnSpec {
				name: "status".to_string(),
				ty: StoreType::Text,
				default: Some(DefaultValue::text("new")),
				not_null: true,
			},
		};

		assert_eq!(
			statement.to_sql(),
			"ALTER TABLE \"orders\" ADD COLUMN IF NOT EXISTS \"status\" TEXT DEFAULT 'new' NOT NULL"
		);
	}

	#[test]
	fn test_drop_column_rendering() {
		let statement = DdlStatement::DropColumn {
			table: "orders".to_string(),
			column: "status".to_string(),
		};

		assert_eq!(statement.to_sql(), "ALTER TABLE \"orders\" DROP COLUMN IF EXISTS \"status\"");
	}

	#[test]
	fn test_rename_column_rendering() {
		let statement = DdlStatement::RenameColumn {
			table: "orders".to_string(),
			from: "status".to_string(),
			to: "state".to_string(),
		};

		assert_eq!(statement.to_sql(), "ALTER TABLE \"orders\" RENAME COLUMN \"status\" TO \"state\"");
	}

	#[test]
	fn test_alter_column_type_rendering() {
		let statement = DdlStatement::AlterColumnType {
			table: "orders".to_string(),
			column: "total".to_string(),
			ty: StoreType::Numeric,
		};

		assert_eq!(statement.to_sql(), "ALTER TABLE \"orders\" ALTER COLUMN \"total\" TYPE NUMERIC");
	}

	#[test]
	fn test_not_null_rendering_is_absolute() {
		let set = DdlStatement::SetNotNull {
			table: "orders".to_string(),
			column: "email".to_string(),
			not_null: true,
		};
		let drop = DdlStatement::SetNotNull {
			table: "orders".to_string(),
			column: "email".to_string(),
			not_null: false,
		};

		assert_eq!(set.to_sql(), "ALTER TABLE \"orders\" ALTER COLUMN \"email\" SET NOT NULL");
		assert_eq!(drop.to_sql(), "ALTER TABLE \"orders\" ALTER COLUMN \"email\" DROP NOT NULL");
	}

	#[test]
	fn test_default_rendering_escapes_quotes() {
		let statement = DdlStatement::SetDefault {
			table: "notes".to_string(),
			column: "body".to_string(),
			default: Some(DefaultValue::text("it's fine")),
		};

		assert_eq!(
			statement.to_sql(),
			"ALTER TABLE \"notes\" ALTER COLUMN \"body\" SET DEFAULT 'it''s fine'"
		);
	}

	#[test]
	fn test_clearing_a_default_renders_drop_default() {
		let statement = DdlStatement::SetDefault {
			table: "notes".to_string(),
			column: "body".to_string(),
			default: None,
		};

		assert_eq!(statement.to_sql(), "ALTER TABLE \"notes\" ALTER COLUMN \"body\" DROP DEFAULT");
	}

	#[test]
	fn test_table_accessor() {
		let statement = DdlStatement::DropColumn {
			table: "orders".to_string(),
			column: "status".to_string(),
		};
		assert_eq!(statement.table(), "orders");
	}
}
