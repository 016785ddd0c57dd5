// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value of the implicit `id` column: every row gets one on insert.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub Uuid);

impl RowId {
	pub fn generate() -> Self {
		Self(Uuid::new_v4())
	}
}

impl Deref for RowId {
	type Target = Uuid;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<RowId> for Uuid {
	fn from(value: RowId) -> Self {
		value.0
	}
}

impl Display for RowId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}
