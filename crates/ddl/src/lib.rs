// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! Schema diffing and DDL synthesis.
//!
//! [`diff`] turns a before/after pair of column definitions into an ordered
//! list of [`ChangeOp`]s; [`synthesize_create`] and [`synthesize_alter`] turn
//! definitions and ops into [`DdlStatement`]s ready to execute against a
//! structured store. Nothing in this crate touches a catalog or a store.

mod change;
mod statement;
mod synthesize;

pub use change::{ChangeOp, diff, diff_removed};
pub use statement::{ColumnSpec, DdlStatement};
pub use synthesize::{
	IMPLICIT_CREATED_AT_COLUMN, IMPLICIT_ID_COLUMN, synthesize_alter, synthesize_create,
};
