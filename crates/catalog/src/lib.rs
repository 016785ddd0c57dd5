// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! The metadata catalog: table and column definitions, their ids and
//! deployment state, behind the [`CatalogStore`] trait with an in-memory and
//! a sqlite backend.

mod change;
mod def;
mod id;
mod memory;
mod sqlite;
mod store;

pub use change::CatalogChange;
pub use def::{ColumnDef, ColumnIndex, TableDef, TableState};
pub use id::{ColumnId, TableId};
pub use memory::MemoryCatalog;
pub use sqlite::{DbPath, JournalMode, SqliteCatalog, SqliteCatalogConfig, SynchronousMode};
pub use store::CatalogStore;
pub use tablekit_type::{Error, Result};
