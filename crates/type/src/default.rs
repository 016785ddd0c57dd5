// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};

use crate::ColumnType;

/// A column default captured as the raw user literal, tagged with the column
/// type it was entered against.
///
/// The tag keeps the type information available for a future type-aware cast;
/// rendering into a quoted SQL literal happens only inside the synthesizer,
/// never earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultValue {
	pub ty: ColumnType,
	pub literal: String,
}

impl DefaultValue {
	pub fn new(ty: ColumnType, literal: impl Into<String>) -> Self {
		Self {
			ty,
			literal: literal.into(),
		}
	}

	pub fn text(literal: impl Into<String>) -> Self {
		Self::new(ColumnType::Text, literal)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_keeps_raw_literal() {
		let default = DefaultValue::new(ColumnType::Number, "0");
		assert_eq!(default.ty, ColumnType::Number);
		assert_eq!(default.literal, "0");

		let default = DefaultValue::text("it's fine");
		assert_eq!(default.literal, "it's fine");
	}
}
