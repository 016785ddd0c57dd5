// Copyright (c) tablekit.dev 2026
// This file is licensed under the MIT, see license.md file

//! The structured store: the physical side of a deployed table.
//!
//! [`StructuredStore`] is the narrow surface the engine drives: execute DDL,
//! insert blank rows, update cells. [`MemoryStore`] is the in-process backend
//! used by tests and the playground.

mod memory;
mod row;
mod store;

pub use memory::{MemoryStore, PhysicalColumn};
pub use row::RowId;
pub use store::StructuredStore;
pub use tablekit_type::{Error, Result};
