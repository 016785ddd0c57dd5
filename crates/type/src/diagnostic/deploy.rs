// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

use crate::diagnostic::{Diagnostic, ErrorKind};

/// Deploy was requested for a table with no columns.
pub fn empty_table(name: &str) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_001".to_string(),
		kind: ErrorKind::Validation,
		message: format!("table `{}` has no columns to deploy", name),
		label: Some("empty column set".to_string()),
		help: Some("add at least one column before deploying".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Deploy was requested for a table that is already deployed.
pub fn already_deployed(name: &str) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_002".to_string(),
		kind: ErrorKind::Validation,
		message: format!("table `{}` is already deployed", name),
		label: Some("deploy is single-shot".to_string()),
		help: Some("schema changes after deployment go through the column operations".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Deploy was requested while another deploy of the same table is running.
pub fn deploy_in_progress(name: &str) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_003".to_string(),
		kind: ErrorKind::Validation,
		message: format!("table `{}` is currently being deployed", name),
		label: Some("deploy in progress".to_string()),
		help: Some("wait for the running deploy to finish or fail".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Two tables would bind the same physical name.
pub fn physical_name_collision(name: &str, other: &str, physical: &str) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_004".to_string(),
		kind: ErrorKind::Validation,
		message: format!("tables `{}` and `{}` would share the physical name `{}`", name, other, physical),
		label: Some("physical name collision".to_string()),
		help: Some("rename the table so its physical name stays unique".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The post-write verification read found no bound physical name.
pub fn physical_name_missing(name: &str) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_005".to_string(),
		kind: ErrorKind::Consistency,
		message: format!("physical name for table `{}` did not persist", name),
		label: Some("post-write verification failed".to_string()),
		help: Some("the catalog accepted the write but the read-back returned no binding".to_string()),
		notes: vec!["the physical table exists; the catalog does not point at it".to_string()],
		cause: None,
	}
}

/// Reverting staged metadata after a DDL failure itself failed.
pub fn revert_failed(name: &str, cause: Diagnostic) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_006".to_string(),
		kind: ErrorKind::Consistency,
		message: format!("failed to revert staged metadata for table `{}`", name),
		label: Some("compensation failed".to_string()),
		help: Some("catalog metadata and the physical schema have diverged".to_string()),
		notes: vec!["inspect the catalog record and the physical table before retrying".to_string()],
		cause: Some(Box::new(cause)),
	}
}

/// Row seeding stopped early; already seeded rows are kept.
pub fn seed_aborted(name: &str, seeded: u32, requested: u32, cause: Diagnostic) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_007".to_string(),
		kind: ErrorKind::Execution,
		message: format!("seeding aborted after {} of {} rows for table `{}`", seeded, requested, name),
		label: Some("partial seed".to_string()),
		help: Some("the deployed table is kept; insert the remaining rows manually".to_string()),
		notes: vec!["already seeded rows are not removed".to_string()],
		cause: Some(Box::new(cause)),
	}
}

/// A row operation was requested against a table that is not deployed.
pub fn not_deployed(name: &str) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_008".to_string(),
		kind: ErrorKind::Validation,
		message: format!("table `{}` is not deployed", name),
		label: Some("no physical table".to_string()),
		help: Some("row operations need a deployed table; run deploy first".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// The table name sanitizes to an empty physical identifier.
pub fn invalid_physical_name(name: &str) -> Diagnostic {
	Diagnostic {
		code: "DEPLOY_009".to_string(),
		kind: ErrorKind::Validation,
		message: format!("table name `{}` produces an empty physical identifier", name),
		label: Some("unusable table name".to_string()),
		help: Some("give the table a name containing at least one letter or digit".to_string()),
		notes: vec![],
		cause: None,
	}
}
