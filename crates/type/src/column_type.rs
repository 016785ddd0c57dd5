// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::{
	convert::Infallible,
	fmt,
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Visitor};

/// The closed set of logical types a column can be defined with.
///
/// Tags serialize as lower-case strings. An unrecognized tag deserializes to
/// [`ColumnType::Text`] instead of failing, so metadata written by a newer
/// version still loads; the fallback lives here at the string boundary and
/// the enum itself stays closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
	Text,
	Number,
	Boolean,
	Date,
	Email,
	Url,
	Phone,
	Json,
	Uuid,
}

impl ColumnType {
	pub const ALL: [ColumnType; 9] = [
		ColumnType::Text,
		ColumnType::Number,
		ColumnType::Boolean,
		ColumnType::Date,
		ColumnType::Email,
		ColumnType::Url,
		ColumnType::Phone,
		ColumnType::Json,
		ColumnType::Uuid,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			ColumnType::Text => "text",
			ColumnType::Number => "number",
			ColumnType::Boolean => "boolean",
			ColumnType::Date => "date",
			ColumnType::Email => "email",
			ColumnType::Url => "url",
			ColumnType::Phone => "phone",
			ColumnType::Json => "json",
			ColumnType::Uuid => "uuid",
		}
	}

	/// Maps the logical type onto the store-native type the physical column
	/// is created with. Total over the enumeration; the text-like tags all
	/// share [`StoreType::Text`].
	pub fn store_type(&self) -> StoreType {
		match self {
			ColumnType::Number => StoreType::Numeric,
			ColumnType::Boolean => StoreType::Boolean,
			ColumnType::Date => StoreType::Timestamptz,
			ColumnType::Json => StoreType::Json,
			ColumnType::Uuid => StoreType::Uuid,
			ColumnType::Text | ColumnType::Email | ColumnType::Url | ColumnType::Phone => StoreType::Text,
		}
	}

	fn parse_tag(tag: &str) -> ColumnType {
		match tag {
			"text" => ColumnType::Text,
			"number" => ColumnType::Number,
			"boolean" => ColumnType::Boolean,
			"date" => ColumnType::Date,
			"email" => ColumnType::Email,
			"url" => ColumnType::Url,
			"phone" => ColumnType::Phone,
			"json" => ColumnType::Json,
			"uuid" => ColumnType::Uuid,
			_ => ColumnType::Text,
		}
	}
}

impl Display for ColumnType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ColumnType {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(ColumnType::parse_tag(s))
	}
}

impl Serialize for ColumnType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for ColumnType {
	fn deserialize<D>(deserializer: D) -> Result<ColumnType, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct TagVisitor;

		impl Visitor<'_> for TagVisitor {
			type Value = ColumnType;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				formatter.write_str("a column type tag")
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
				Ok(ColumnType::parse_tag(value))
			}
		}

		deserializer.deserialize_str(TagVisitor)
	}
}

/// Store-native column types the physical schema is built from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StoreType {
	Text,
	Numeric,
	Boolean,
	Timestamptz,
	Json,
	Uuid,
}

impl StoreType {
	/// The type name as it appears in rendered DDL.
	pub fn as_sql(&self) -> &'static str {
		match self {
			StoreType::Text => "TEXT",
			StoreType::Numeric => "NUMERIC",
			StoreType::Boolean => "BOOLEAN",
			StoreType::Timestamptz => "TIMESTAMPTZ",
			StoreType::Json => "JSON",
			StoreType::Uuid => "UUID",
		}
	}
}

impl Display for StoreType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_sql())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_store_type_mapping() {
		assert_eq!(ColumnType::Number.store_type(), StoreType::Numeric);
		assert_eq!(ColumnType::Boolean.store_type(), StoreType::Boolean);
		assert_eq!(ColumnType::Date.store_type(), StoreType::Timestamptz);
		assert_eq!(ColumnType::Json.store_type(), StoreType::Json);
		assert_eq!(ColumnType::Uuid.store_type(), StoreType::Uuid);
		assert_eq!(ColumnType::Text.store_type(), StoreType::Text);
		assert_eq!(ColumnType::Email.store_type(), StoreType::Text);
		assert_eq!(ColumnType::Url.store_type(), StoreType::Text);
		assert_eq!(ColumnType::Phone.store_type(), StoreType::Text);
	}

	#[test]
	fn test_mapping_total_over_all_tags() {
		for ty in ColumnType::ALL {
			// must not panic and must round-trip through the tag
			let _ = ty.store_type();
			assert_eq!(ty.as_str().parse::<ColumnType>().unwrap(), ty);
		}
	}

	#[test]
	fn test_unknown_tag_falls_back_to_text() {
		assert_eq!("geo_point".parse::<ColumnType>().unwrap(), ColumnType::Text);
		assert_eq!("".parse::<ColumnType>().unwrap(), ColumnType::Text);
		assert_eq!("TEXT".parse::<ColumnType>().unwrap(), ColumnType::Text);
	}

	#[test]
	fn test_serde_round_trip() {
		let json = serde_json::to_string(&ColumnType::Email).unwrap();
		assert_eq!(json, "\"email\"");

		let ty: ColumnType = serde_json::from_str("\"number\"").unwrap();
		assert_eq!(ty, ColumnType::Number);
	}

	#[test]
	fn test_serde_unknown_tag_falls_back_to_text() {
		let ty: ColumnType = serde_json::from_str("\"vector\"").unwrap();
		assert_eq!(ty, ColumnType::Text);
	}

	#[test]
	fn test_sql_rendering() {
		assert_eq!(StoreType::Timestamptz.as_sql(), "TIMESTAMPTZ");
		assert_eq!(StoreType::Numeric.to_string(), "NUMERIC");
	}
}
