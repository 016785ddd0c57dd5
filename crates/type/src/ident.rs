// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! Identifier rules for physical names.

/// Replaces every character outside `[A-Za-z0-9_]` with `_`.
///
/// Total, deterministic and pure. Case is preserved; callers that want
/// lower-case physical names lower-case before calling. Two distinct inputs
/// may normalize to the same identifier, so anything that binds a physical
/// name checks for collisions rather than relying on this being injective.
pub fn sanitize(name: &str) -> String {
	name.chars()
		.map(|c| {
			if c.is_ascii_alphanumeric() || c == '_' {
				c
			} else {
				'_'
			}
		})
		.collect()
}

/// Whether `name` matches the identifier grammar `letter (letter|digit|'_')*`.
pub fn is_valid_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
