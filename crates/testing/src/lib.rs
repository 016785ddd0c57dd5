// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! Test tooling: definition builders and fault-injecting wrappers around the
//! catalog and store traits. Not part of the public surface; every crate in
//! the workspace pulls this in as a dev-dependency only.

mod catalog;
mod fixture;
mod store;

pub use catalog::FaultyCatalog;
pub use fixture::{column_def, table_def};
pub use store::FaultyStore;
