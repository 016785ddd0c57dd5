// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! Structured diagnostics for every failure tablekit can surface.
//!
//! Each failure is built by a constructor function in one of the submodules,
//! carries a stable code, and is classified by [`ErrorKind`] so callers can
//! branch on the failure class without matching on codes.

pub mod catalog;
pub mod column;
pub mod deploy;
pub mod store;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The failure classes an operation can return.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
	/// Rejected before any side effect took place.
	Validation,
	/// A store rejected a DDL or DML statement.
	Execution,
	/// Post-write verification found catalog and store diverged.
	Consistency,
	/// A referenced table or column does not exist.
	NotFound,
}

/// A renderable description of a single failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	/// Stable code, e.g. `DEPLOY_002`.
	pub code: String,
	pub kind: ErrorKind,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if let Some(label) = &self.label {
			write!(f, " ({})", label)?;
		}
		if let Some(help) = &self.help {
			write!(f, "\nhelp: {}", help)?;
		}
		for note in &self.notes {
			write!(f, "\nnote: {}", note)?;
		}
		if let Some(cause) = &self.cause {
			write!(f, "\ncaused by: {}", cause)?;
		}
		Ok(())
	}
}
