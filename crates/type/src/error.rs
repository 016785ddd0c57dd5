// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use crate::diagnostic::{Diagnostic, ErrorKind};

/// The error type of every fallible tablekit operation, wrapping the
/// [`Diagnostic`] that describes the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn kind(&self) -> ErrorKind {
		self.0.kind
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl std::error::Error for Error {}

/// Wraps a [`Diagnostic`] into an [`Error`].
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Returns early with an [`Error`] built from a [`Diagnostic`].
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagnostic::deploy;

	#[test]
	fn test_accessors() {
		let err = error!(deploy::already_deployed("orders"));
		assert_eq!(err.code(), "DEPLOY_002");
		assert_eq!(err.kind(), ErrorKind::Validation);
		assert_eq!(err.diagnostic().code, "DEPLOY_002");
	}

	#[test]
	fn test_display_renders_the_diagnostic() {
		let err = error!(deploy::empty_table("orders"));
		let out = err.to_string();
		assert!(out.contains("DEPLOY_001"));
		assert!(out.contains("no columns to deploy"));
	}

	#[test]
	fn test_return_error_macro() {
		fn fails() -> crate::Result<()> {
			return_error!(deploy::not_deployed("orders"));
		}

		let err = fails().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Validation);
	}
}
